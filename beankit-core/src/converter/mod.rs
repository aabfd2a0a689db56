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

//! Ordered type-conversion pipeline.
//!
//! A [`ConverterRegistry`] holds converters in registration order. For a
//! pair of types that differ, the first converter whose
//! [`TypeConverter::is_support`] accepts the pair performs the conversion.
//! When none accepts it the value passes through unchanged and the
//! destination property decides whether it can take it.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::Error;
use crate::types::PropertyType;
use crate::value::Value;

mod enum_code;
mod number;

pub use enum_code::EnumCodeConverter;
pub use number::NumberConverter;

/// A pluggable conversion between two declared types.
///
/// Converters are stateless and shared between threads.
pub trait TypeConverter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn is_support(&self, source: &PropertyType, target: &PropertyType, field_name: &str) -> bool;

    /// Converts `value` from `source` to `target`.
    ///
    /// `Ok(None)` means the value has no counterpart in `target` (for
    /// example an unknown enum code) and the destination is left untouched.
    fn convert(
        &self,
        source: &PropertyType,
        target: &PropertyType,
        value: Value,
    ) -> Result<Option<Value>, Error>;
}

/// The built-in converters, in their default order.
pub fn default_converters() -> Vec<Arc<dyn TypeConverter>> {
    vec![Arc::new(EnumCodeConverter), Arc::new(NumberConverter)]
}

/// Mutable, ordered converter list owned by one mapper.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<Vec<Arc<dyn TypeConverter>>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        ConverterRegistry::default()
    }

    pub fn with_defaults() -> Self {
        ConverterRegistry {
            converters: RwLock::new(default_converters()),
        }
    }

    /// Appends `converter`; earlier registrations take precedence.
    pub fn register(&self, converter: Arc<dyn TypeConverter>) {
        debug!(converter = converter.name(), "register type converter");
        self.converters.write().push(converter);
    }

    /// Removes every registration of this exact converter instance.
    /// Returns whether anything was removed.
    pub fn unregister(&self, converter: &Arc<dyn TypeConverter>) -> bool {
        let mut converters = self.converters.write();
        let before = converters.len();
        converters.retain(|c| !same_instance(c, converter));
        let removed = converters.len() != before;
        if removed {
            debug!(converter = converter.name(), "unregister type converter");
        }
        removed
    }

    pub fn clear(&self) {
        self.converters.write().clear();
    }

    /// Current converters in precedence order.
    pub fn list(&self) -> Vec<Arc<dyn TypeConverter>> {
        self.converters.read().clone()
    }

    pub fn len(&self) -> usize {
        self.converters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot taken once per copy so concurrent registration never
    /// changes the pipeline halfway through an operation.
    pub fn snapshot(&self) -> Pipeline {
        Pipeline {
            converters: self.list(),
        }
    }
}

/// A frozen converter list used for the duration of one operation.
pub struct Pipeline {
    converters: Vec<Arc<dyn TypeConverter>>,
}

impl Pipeline {
    /// Runs the first converter supporting `(source, target)`.
    ///
    /// Equal types skip every converter. `Ok(None)` means the destination
    /// must be left as is.
    pub fn convert(
        &self,
        source: &PropertyType,
        target: &PropertyType,
        field_name: &str,
        value: Value,
    ) -> Result<Option<Value>, Error> {
        if source == target {
            return Ok(Some(value));
        }
        match self
            .converters
            .iter()
            .find(|c| c.is_support(source, target, field_name))
        {
            Some(converter) => {
                trace!(
                    converter = converter.name(),
                    field = field_name,
                    from = source.type_name(),
                    to = target.type_name(),
                    "convert property value"
                );
                converter.convert(source, target, value)
            }
            None => Ok(Some(value)),
        }
    }
}

fn same_instance(a: &Arc<dyn TypeConverter>, b: &Arc<dyn TypeConverter>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
