// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use crate::property::Property;
use crate::types::PropertyType;
use crate::value::Value;

impl<T: Property> Property for Option<T> {
    #[inline(always)]
    fn property_type() -> PropertyType {
        T::property_type()
    }

    #[inline(always)]
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    #[inline(always)]
    fn from_value(value: Value) -> Result<Self, Error> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }

    #[inline(always)]
    fn is_nullable() -> bool {
        true
    }
}
