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

use crate::bean::{Bean, ExtensionPropertyBag};
use crate::error::Error;
use crate::meta::{BeanSchema, FieldInfo, PropertyInfo};
use crate::model::Pageable;
use crate::property::Property;
use crate::value::{Value, ValueMap};

/// Query bean with search keywords and paging, plus an ordered bag of
/// extension properties for anything without a declared property.
///
/// ```rust
/// use beankit_core::model::Model;
///
/// let mut model = Model::default();
/// model.add_property("tenant", "acme");
/// assert_eq!(model.get_as::<String>("tenant").unwrap().as_deref(), Some("acme"));
/// assert!(model.get_as::<i32>("tenant").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub keywords: Option<String>,
    pub type_name: Option<String>,
    pub type_sort: Option<String>,
    pub pageable: Pageable,
    properties: ValueMap,
}

impl Model {
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn add_properties(&mut self, properties: &ValueMap) {
        self.properties
            .extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Extension property `name` as a `T`, `None` when absent or null.
    pub fn get_as<T: Property>(&self, name: &str) -> Result<Option<T>, Error> {
        match self.properties.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value.clone()).map(Some).map_err(|_| {
                Error::type_error(format!(
                    "extension property '{}' type mismatch, expected: {}, actual: {}",
                    name,
                    T::property_type(),
                    value.type_label()
                ))
            }),
        }
    }

    pub fn properties(&self) -> &ValueMap {
        &self.properties
    }
}

impl Bean for Model {
    fn bean_schema() -> BeanSchema {
        BeanSchema::new::<Model>()
            .property(PropertyInfo::of::<Option<String>>("keywords"))
            .property(PropertyInfo::of::<Option<String>>("typeName"))
            .property(PropertyInfo::of::<Option<String>>("typeSort"))
            .field(FieldInfo::of::<Option<String>>("keywords"))
            .field(FieldInfo::of::<Option<String>>("type_name"))
            .field(FieldInfo::of::<Option<String>>("type_sort"))
            .parent::<Pageable>()
    }

    fn instantiate() -> Result<Self, Error> {
        Ok(Model::default())
    }

    fn get_property(&self, name: &str) -> Result<Value, Error> {
        match name {
            "keywords" => Ok(self.keywords.to_value()),
            "typeName" => Ok(self.type_name.to_value()),
            "typeSort" => Ok(self.type_sort.to_value()),
            _ => self.pageable.get_property(name),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), Error> {
        match name {
            "keywords" => self.keywords = Property::from_value(value)?,
            "typeName" => self.type_name = Property::from_value(value)?,
            "typeSort" => self.type_sort = Property::from_value(value)?,
            _ => return self.pageable.set_property(name, value),
        }
        Ok(())
    }

    fn get_field(&self, name: &str) -> Result<Value, Error> {
        match name {
            "keywords" => Ok(self.keywords.to_value()),
            "type_name" => Ok(self.type_name.to_value()),
            "type_sort" => Ok(self.type_sort.to_value()),
            _ => self.pageable.get_field(name),
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), Error> {
        match name {
            "keywords" => self.keywords = Property::from_value(value)?,
            "type_name" => self.type_name = Property::from_value(value)?,
            "type_sort" => self.type_sort = Property::from_value(value)?,
            _ => return self.pageable.set_field(name, value),
        }
        Ok(())
    }

    fn extension(&self) -> Option<&dyn ExtensionPropertyBag> {
        Some(&self.properties)
    }

    fn extension_mut(&mut self) -> Option<&mut dyn ExtensionPropertyBag> {
        Some(&mut self.properties)
    }
}
