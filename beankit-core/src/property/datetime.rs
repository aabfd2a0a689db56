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
use chrono::{NaiveDate, NaiveDateTime};

impl Property for NaiveDate {
    fn property_type() -> PropertyType {
        PropertyType::of::<NaiveDate>(TypeKind::Date)
    }

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Date(d) => Ok(d),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Property for NaiveDateTime {
    fn property_type() -> PropertyType {
        PropertyType::of::<NaiveDateTime>(TypeKind::DateTime)
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
