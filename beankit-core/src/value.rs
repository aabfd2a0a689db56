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

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use crate::types::{PropertyType, TypeKind};

/// Ordered string-keyed map of values. Insertion order is preserved.
pub type ValueMap = IndexMap<String, Value>;

/// A constant of a coded enumeration carried as a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnumValue {
    pub ty: PropertyType,
    pub name: &'static str,
    pub code: &'static str,
}

/// Dynamic value moved between properties, fields and maps.
///
/// Copying never recurses: `List` and `Map` travel as opaque values.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Enum(EnumValue),
    List(Vec<Value>),
    Map(ValueMap),
}

macro_rules! cast_to {
    ($v:expr, $kind:expr) => {
        match $kind {
            TypeKind::I8 => Some(Value::I8($v as i8)),
            TypeKind::I16 => Some(Value::I16($v as i16)),
            TypeKind::I32 => Some(Value::I32($v as i32)),
            TypeKind::I64 => Some(Value::I64($v as i64)),
            TypeKind::U8 => Some(Value::U8($v as u8)),
            TypeKind::U16 => Some(Value::U16($v as u16)),
            TypeKind::U32 => Some(Value::U32($v as u32)),
            TypeKind::U64 => Some(Value::U64($v as u64)),
            TypeKind::F32 => Some(Value::F32($v as f32)),
            TypeKind::F64 => Some(Value::F64($v as f64)),
            _ => None,
        }
    };
}

impl Value {
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind of the value itself, `None` for `Null`.
    pub fn kind(&self) -> Option<TypeKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Bool(_) => TypeKind::Bool,
            Value::I8(_) => TypeKind::I8,
            Value::I16(_) => TypeKind::I16,
            Value::I32(_) => TypeKind::I32,
            Value::I64(_) => TypeKind::I64,
            Value::U8(_) => TypeKind::U8,
            Value::U16(_) => TypeKind::U16,
            Value::U32(_) => TypeKind::U32,
            Value::U64(_) => TypeKind::U64,
            Value::F32(_) => TypeKind::F32,
            Value::F64(_) => TypeKind::F64,
            Value::Char(_) => TypeKind::Char,
            Value::String(_) => TypeKind::String,
            Value::Date(_) => TypeKind::Date,
            Value::DateTime(_) => TypeKind::DateTime,
            Value::Enum(_) => TypeKind::Enum,
            Value::List(_) => TypeKind::List,
            Value::Map(_) => TypeKind::Map,
        };
        Some(kind)
    }

    /// Runtime type of the value, used when no declared source type exists
    /// (dictionary entries, extension bag entries).
    pub fn runtime_type(&self) -> Option<PropertyType> {
        let ty = match self {
            Value::Null => return None,
            Value::Bool(_) => PropertyType::of::<bool>(TypeKind::Bool),
            Value::I8(_) => PropertyType::of::<i8>(TypeKind::I8),
            Value::I16(_) => PropertyType::of::<i16>(TypeKind::I16),
            Value::I32(_) => PropertyType::of::<i32>(TypeKind::I32),
            Value::I64(_) => PropertyType::of::<i64>(TypeKind::I64),
            Value::U8(_) => PropertyType::of::<u8>(TypeKind::U8),
            Value::U16(_) => PropertyType::of::<u16>(TypeKind::U16),
            Value::U32(_) => PropertyType::of::<u32>(TypeKind::U32),
            Value::U64(_) => PropertyType::of::<u64>(TypeKind::U64),
            Value::F32(_) => PropertyType::of::<f32>(TypeKind::F32),
            Value::F64(_) => PropertyType::of::<f64>(TypeKind::F64),
            Value::Char(_) => PropertyType::of::<char>(TypeKind::Char),
            Value::String(_) => PropertyType::of::<String>(TypeKind::String),
            Value::Date(_) => PropertyType::of::<NaiveDate>(TypeKind::Date),
            Value::DateTime(_) => PropertyType::of::<NaiveDateTime>(TypeKind::DateTime),
            Value::Enum(e) => e.ty,
            Value::List(_) => PropertyType::of::<Vec<Value>>(TypeKind::List),
            Value::Map(_) => PropertyType::of::<ValueMap>(TypeKind::Map),
        };
        Some(ty)
    }

    /// Short label used in error messages.
    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Enum(e) => e.ty.type_name(),
            other => match other.runtime_type() {
                Some(ty) => ty.type_name(),
                None => "null",
            },
        }
    }

    /// Numeric value re-represented as `kind` with `as` cast semantics:
    /// integers wrap, floats truncate toward zero and saturate.
    ///
    /// Returns `None` when the value is not numeric or `kind` is not a
    /// numeric kind.
    pub fn cast_numeric(&self, kind: TypeKind) -> Option<Value> {
        match *self {
            Value::I8(v) => cast_to!(v, kind),
            Value::I16(v) => cast_to!(v, kind),
            Value::I32(v) => cast_to!(v, kind),
            Value::I64(v) => cast_to!(v, kind),
            Value::U8(v) => cast_to!(v, kind),
            Value::U16(v) => cast_to!(v, kind),
            Value::U32(v) => cast_to!(v, kind),
            Value::U64(v) => cast_to!(v, kind),
            Value::F32(v) => cast_to!(v, kind),
            Value::F64(v) => cast_to!(v, kind),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline(always)]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    EnumValue => Enum,
    Vec<Value> => List,
    ValueMap => Map,
);
