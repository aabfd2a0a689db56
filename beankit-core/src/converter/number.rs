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
use crate::types::PropertyType;
use crate::value::Value;

use super::TypeConverter;

/// Widens or narrows between the numeric primitives with `as` semantics.
///
/// No overflow checking: `300` into an `i8` gives `44`, `3.9` into an
/// `i32` gives `3`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberConverter;

impl TypeConverter for NumberConverter {
    fn name(&self) -> &str {
        "number"
    }

    fn is_support(&self, source: &PropertyType, target: &PropertyType, _field_name: &str) -> bool {
        source != target && source.kind().is_numeric() && target.kind().is_numeric()
    }

    fn convert(
        &self,
        _source: &PropertyType,
        target: &PropertyType,
        value: Value,
    ) -> Result<Option<Value>, Error> {
        match value.cast_numeric(target.kind()) {
            Some(cast) => Ok(Some(cast)),
            None => Err(Error::type_error(format!(
                "cannot convert {} to {}",
                value.type_label(),
                target
            ))),
        }
    }
}
