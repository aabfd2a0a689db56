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
use crate::types::{PropertyType, TypeKind};
use crate::value::{EnumValue, Value};

use super::TypeConverter;

/// Converts between a coded enum and its string code, in both directions.
///
/// Code lookup is an exact, case-sensitive match over the target's
/// constants in declaration order. An unknown code leaves the destination
/// untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumCodeConverter;

impl TypeConverter for EnumCodeConverter {
    fn name(&self) -> &str {
        "enum_code"
    }

    fn is_support(&self, source: &PropertyType, target: &PropertyType, _field_name: &str) -> bool {
        (source.kind().is_enum() && target.is::<String>())
            || (source.is::<String>() && target.kind().is_enum())
    }

    fn convert(
        &self,
        source: &PropertyType,
        target: &PropertyType,
        value: Value,
    ) -> Result<Option<Value>, Error> {
        match value {
            Value::Enum(e) if target.kind() == TypeKind::String => {
                Ok(Some(Value::String(e.code.to_string())))
            }
            Value::String(code) if target.kind().is_enum() => Ok(target
                .enum_constants()
                .iter()
                .find(|c| c.code == code)
                .map(|c| {
                    Value::Enum(EnumValue {
                        ty: *target,
                        name: c.name,
                        code: c.code,
                    })
                })),
            other => Err(Error::type_error(format!(
                "enum_code cannot convert {} from {} to {}",
                other.type_label(),
                source,
                target
            ))),
        }
    }
}
