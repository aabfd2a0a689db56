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

use indexmap::IndexMap;

use crate::meta::schema::{FieldInfo, PropertyInfo};
use crate::types::PropertyType;
use crate::util::{lower_first, upper_first};

/// Resolved property of a bean type, including inherited ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyDescriptor {
    name: &'static str,
    ty: PropertyType,
    readable: bool,
    writable: bool,
    nullable: bool,
    declaring_type: &'static str,
}

impl PropertyDescriptor {
    pub(crate) fn new(info: &PropertyInfo, declaring_type: &'static str) -> Self {
        PropertyDescriptor {
            name: info.name,
            ty: info.ty,
            readable: info.readable,
            writable: info.writable,
            nullable: info.nullable,
            declaring_type,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn property_type(&self) -> &PropertyType {
        &self.ty
    }

    #[inline(always)]
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    #[inline(always)]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    #[inline(always)]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Type name of the bean level that declares this property.
    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }
}

/// Immutable set of the properties of one `(bean type, stop ancestor)` pair.
///
/// Order is the most-derived level's declaration order followed by each
/// ancestor's, a name declared on several levels keeps the most-derived one.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDescriptor {
    bean_type: &'static str,
    properties: IndexMap<&'static str, PropertyDescriptor>,
}

impl ClassDescriptor {
    pub(crate) fn new(
        bean_type: &'static str,
        properties: IndexMap<&'static str, PropertyDescriptor>,
    ) -> Self {
        ClassDescriptor {
            bean_type,
            properties,
        }
    }

    pub fn bean_type(&self) -> &'static str {
        self.bean_type
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.keys().copied()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Exact lookup, then the same name with its first character lowered,
    /// then with its first character raised. Blank names never match.
    pub fn find(&self, name: &str) -> Option<&PropertyDescriptor> {
        if let Some(pd) = self.properties.get(name) {
            return Some(pd);
        }
        if name.trim().is_empty() {
            return None;
        }
        self.properties
            .get(lower_first(name).as_str())
            .or_else(|| self.properties.get(upper_first(name).as_str()))
    }
}

/// Resolved raw field of a bean type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    name: &'static str,
    ty: PropertyType,
    is_final: bool,
    nullable: bool,
    declaring_type: &'static str,
}

impl FieldDescriptor {
    pub(crate) fn new(info: &FieldInfo, declaring_type: &'static str) -> Self {
        FieldDescriptor {
            name: info.name,
            ty: info.ty,
            is_final: info.is_final,
            nullable: info.nullable,
            declaring_type,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field_type(&self) -> &PropertyType {
        &self.ty
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }
}

/// Immutable set of the raw fields of one `(bean type, stop ancestor)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptors {
    bean_type: &'static str,
    fields: IndexMap<&'static str, FieldDescriptor>,
}

impl FieldDescriptors {
    pub(crate) fn new(
        bean_type: &'static str,
        fields: IndexMap<&'static str, FieldDescriptor>,
    ) -> Self {
        FieldDescriptors { bean_type, fields }
    }

    pub fn bean_type(&self) -> &'static str {
        self.bean_type
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }
}
