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

//! Conversion between concrete Rust property types and [`Value`].
//!
//! Every type that can back a bean property implements [`Property`].
//! `from_value` is strict and only accepts the matching `Value` variant;
//! widening or narrowing is the job of the converter pipeline, not of the
//! property itself.

use crate::error::Error;
use crate::types::PropertyType;
use crate::value::Value;

mod any;
mod datetime;
mod list;
mod map;
mod number;
mod option;
mod string;

pub trait Property: Sized + 'static {
    /// Declared type reported in descriptors.
    fn property_type() -> PropertyType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, Error>;

    /// Whether the property can hold `Value::Null`.
    #[inline(always)]
    fn is_nullable() -> bool {
        false
    }
}

/// Error for a value that cannot be assigned to `T`.
#[cold]
pub fn mismatch<T: Property>(value: &Value) -> Error {
    Error::type_error(format!(
        "cannot assign {} to {}",
        value.type_label(),
        T::property_type()
    ))
}
