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

macro_rules! impl_copy_property {
    ($ty:ty, $variant:ident, $kind:expr) => {
        impl Property for $ty {
            #[inline(always)]
            fn property_type() -> PropertyType {
                PropertyType::of::<$ty>($kind)
            }

            #[inline(always)]
            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            #[inline(always)]
            fn from_value(value: Value) -> Result<Self, Error> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

impl_copy_property!(bool, Bool, TypeKind::Bool);
impl_copy_property!(i8, I8, TypeKind::I8);
impl_copy_property!(i16, I16, TypeKind::I16);
impl_copy_property!(i32, I32, TypeKind::I32);
impl_copy_property!(i64, I64, TypeKind::I64);
impl_copy_property!(u8, U8, TypeKind::U8);
impl_copy_property!(u16, U16, TypeKind::U16);
impl_copy_property!(u32, U32, TypeKind::U32);
impl_copy_property!(u64, U64, TypeKind::U64);
impl_copy_property!(f32, F32, TypeKind::F32);
impl_copy_property!(f64, F64, TypeKind::F64);
impl_copy_property!(char, Char, TypeKind::Char);
