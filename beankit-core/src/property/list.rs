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
use crate::property::{mismatch, Property};
use crate::types::{PropertyType, TypeKind};
use crate::value::Value;

impl<T: Property> Property for Vec<T> {
    fn property_type() -> PropertyType {
        PropertyType::of::<Vec<T>>(TypeKind::List)
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Property::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::List(items) => items
                .into_iter()
                .map(T::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map_err(Error::enhance_type_error::<Self>),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
