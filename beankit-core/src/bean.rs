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

//! Capability traits implemented by mapped types.
//!
//! [`Bean`] is normally generated by `#[derive(Bean)]`, but it can be
//! written by hand from an explicit property table, see
//! [`Model`](crate::model::Model).

use crate::error::Error;
use crate::meta::BeanSchema;
use crate::value::{Value, ValueMap};

/// A type whose named properties can be read and written dynamically.
///
/// Properties are the accessor view of the type (renamed, possibly read or
/// write only). Fields are the raw storage view, addressed by the Rust
/// field name and used by field-to-field copy.
pub trait Bean: 'static {
    /// Schema table of this type's own properties and fields plus its parent link.
    fn bean_schema() -> BeanSchema
    where
        Self: Sized;

    /// Zero-argument construction of a fresh destination instance.
    fn instantiate() -> Result<Self, Error>
    where
        Self: Sized;

    fn get_property(&self, name: &str) -> Result<Value, Error>;

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), Error>;

    fn get_field(&self, name: &str) -> Result<Value, Error>;

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), Error>;

    /// Extension property bag, for types that hold schemaless properties.
    fn extension(&self) -> Option<&dyn ExtensionPropertyBag> {
        None
    }

    fn extension_mut(&mut self) -> Option<&mut dyn ExtensionPropertyBag> {
        None
    }
}

/// Ordered string-keyed storage for properties without a declared accessor.
pub trait ExtensionPropertyBag {
    fn get(&self, name: &str) -> Option<&Value>;

    fn add(&mut self, name: String, value: Value);

    fn remove(&mut self, name: &str) -> Option<Value>;

    /// All entries in insertion order.
    fn entries(&self) -> &ValueMap;
}

impl ExtensionPropertyBag for ValueMap {
    fn get(&self, name: &str) -> Option<&Value> {
        ValueMap::get(self, name)
    }

    fn add(&mut self, name: String, value: Value) {
        self.insert(name, value);
    }

    fn remove(&mut self, name: &str) -> Option<Value> {
        self.shift_remove(name)
    }

    fn entries(&self) -> &ValueMap {
        self
    }
}

/// A closed enumeration whose constants carry a stable string code.
///
/// Usually derived with `#[derive(CodedEnum)]`. The constant set is fixed
/// at compile time.
pub trait CodedEnum: Sized + 'static {
    fn code(&self) -> &'static str;

    fn desc(&self) -> &'static str {
        ""
    }

    /// Every constant, in declaration order.
    fn constants() -> &'static [Self];

    /// First constant whose code equals `code` exactly (case-sensitive).
    fn from_code(code: &str) -> Option<&'static Self> {
        Self::constants().iter().find(|c| c.code() == code)
    }
}
