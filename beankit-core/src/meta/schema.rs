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

use std::any::TypeId;

use crate::bean::Bean;
use crate::property::Property;
use crate::types::PropertyType;

/// One declared property of a bean level.
#[derive(Clone, Copy, Debug)]
pub struct PropertyInfo {
    pub name: &'static str,
    pub ty: PropertyType,
    pub readable: bool,
    pub writable: bool,
    pub nullable: bool,
}

impl PropertyInfo {
    /// Readable and writable property backed by a value of type `T`.
    pub fn of<T: Property>(name: &'static str) -> PropertyInfo {
        PropertyInfo {
            name,
            ty: T::property_type(),
            readable: true,
            writable: true,
            nullable: T::is_nullable(),
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }
}

/// One raw storage field of a bean level.
#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    pub name: &'static str,
    pub ty: PropertyType,
    pub is_final: bool,
    pub nullable: bool,
}

impl FieldInfo {
    pub fn of<T: Property>(name: &'static str) -> FieldInfo {
        FieldInfo {
            name,
            ty: T::property_type(),
            is_final: false,
            nullable: T::is_nullable(),
        }
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// Identity of a bean type in the parent chain, used as a stop ancestor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ancestor {
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl Ancestor {
    pub fn of<T: 'static>() -> Ancestor {
        Ancestor {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Link to the schema a bean flattens as its parent level.
#[derive(Clone, Copy, Debug)]
pub struct ParentLink {
    pub ancestor: Ancestor,
    pub schema: fn() -> BeanSchema,
}

/// Static description of one bean type: its own properties and fields in
/// declaration order, and the parent level it extends.
#[derive(Clone, Debug)]
pub struct BeanSchema {
    ancestor: Ancestor,
    properties: Vec<PropertyInfo>,
    fields: Vec<FieldInfo>,
    parent: Option<ParentLink>,
}

impl BeanSchema {
    pub fn new<T: 'static>() -> BeanSchema {
        BeanSchema {
            ancestor: Ancestor::of::<T>(),
            properties: Vec::new(),
            fields: Vec::new(),
            parent: None,
        }
    }

    pub fn property(mut self, info: PropertyInfo) -> Self {
        self.properties.push(info);
        self
    }

    pub fn field(mut self, info: FieldInfo) -> Self {
        self.fields.push(info);
        self
    }

    pub fn parent<P: Bean>(mut self) -> Self {
        self.parent = Some(ParentLink {
            ancestor: Ancestor::of::<P>(),
            schema: P::bean_schema,
        });
        self
    }

    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        self.ancestor.type_id
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.ancestor.type_name
    }

    pub fn ancestor(&self) -> Ancestor {
        self.ancestor
    }

    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    pub fn parent_link(&self) -> Option<&ParentLink> {
        self.parent.as_ref()
    }
}
