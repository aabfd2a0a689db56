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
use std::fmt;

/// Coarse classification of a declared property type.
///
/// Converters gate on the kind; identity checks use the full [`PropertyType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    String,
    Date,
    DateTime,
    Enum,
    List,
    Map,
    /// Dynamically typed slot, accepts any [`Value`](crate::value::Value).
    Any,
}

pub const NUMERIC_KINDS: [TypeKind; 10] = [
    TypeKind::I8,
    TypeKind::I16,
    TypeKind::I32,
    TypeKind::I64,
    TypeKind::U8,
    TypeKind::U16,
    TypeKind::U32,
    TypeKind::U64,
    TypeKind::F32,
    TypeKind::F64,
];

impl TypeKind {
    #[inline(always)]
    pub fn is_numeric(self) -> bool {
        NUMERIC_KINDS.contains(&self)
    }

    #[inline(always)]
    pub fn is_enum(self) -> bool {
        self == TypeKind::Enum
    }
}

/// One constant of a coded enumeration, as seen by the conversion pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: &'static str,
    pub code: &'static str,
    pub desc: &'static str,
}

type ConstantsFn = fn() -> &'static [EnumConstant];

/// Declared type of a property or raw field.
///
/// Two property types are equal when they describe the same Rust type.
/// `Option<T>` reports the type of `T`, so nullability never makes two
/// declarations differ.
#[derive(Clone, Copy)]
pub struct PropertyType {
    kind: TypeKind,
    type_id: TypeId,
    type_name: &'static str,
    constants: Option<ConstantsFn>,
}

impl PropertyType {
    pub fn of<T: ?Sized + 'static>(kind: TypeKind) -> PropertyType {
        PropertyType {
            kind,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constants: None,
        }
    }

    /// Type of a coded enumeration whose constant set is `constants`.
    pub fn of_enum<T: 'static>(constants: ConstantsFn) -> PropertyType {
        PropertyType {
            kind: TypeKind::Enum,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constants: Some(constants),
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline(always)]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Constant table of an enum type, empty for every other kind.
    pub fn enum_constants(&self) -> &'static [EnumConstant] {
        match self.constants {
            Some(constants) => constants(),
            None => &[],
        }
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for PropertyType {}

impl fmt::Debug for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyType")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}
