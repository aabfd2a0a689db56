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
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use tracing::debug;

use super::type_cache::TypeCache;
use super::{check_unique, walk_levels};
use crate::bean::Bean;
use crate::error::Error;
use crate::meta::{Ancestor, BeanSchema, FieldDescriptor, FieldDescriptors};

static SHARED: OnceLock<Arc<FieldCache>> = OnceLock::new();

/// Per-type cache of raw field descriptors, used by field-to-field copy.
pub struct FieldCache {
    cache: TypeCache<FieldDescriptors>,
}

impl Default for FieldCache {
    fn default() -> Self {
        FieldCache::new()
    }
}

impl FieldCache {
    pub fn new() -> Self {
        FieldCache {
            cache: TypeCache::new(),
        }
    }

    pub fn shared() -> Arc<FieldCache> {
        SHARED.get_or_init(|| Arc::new(FieldCache::new())).clone()
    }

    pub fn fields<T: Bean>(&self) -> Result<Arc<FieldDescriptors>, Error> {
        self.fields_with_stop::<T>(None)
    }

    pub fn fields_to<T: Bean, S: Bean>(&self) -> Result<Arc<FieldDescriptors>, Error> {
        self.fields_with_stop::<T>(Some(Ancestor::of::<S>()))
    }

    pub fn fields_with_stop<T: Bean>(
        &self,
        stop: Option<Ancestor>,
    ) -> Result<Arc<FieldDescriptors>, Error> {
        let stop_id = stop.map(|s| s.type_id);
        self.cache
            .get_or_try_build(TypeId::of::<T>(), stop_id, || {
                build_field_descriptors(T::bean_schema(), stop_id)
            })
    }

    pub fn field<T: Bean>(&self, name: &str) -> Result<Option<FieldDescriptor>, Error> {
        Ok(self.fields::<T>()?.get(name).copied())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

fn build_field_descriptors(
    schema: BeanSchema,
    stop: Option<TypeId>,
) -> Result<FieldDescriptors, Error> {
    let bean_type = schema.type_name();
    let mut fields: IndexMap<&'static str, FieldDescriptor> = IndexMap::new();
    walk_levels(schema, stop, |level| {
        let mut seen = HashSet::new();
        for info in level.fields() {
            check_unique(&mut seen, info.name, level)?;
            // a field shadowed by a more derived level stays hidden
            fields
                .entry(info.name)
                .or_insert_with(|| FieldDescriptor::new(info, level.type_name()));
        }
        Ok(())
    })?;
    debug!(bean = bean_type, fields = fields.len(), "built field descriptors");
    Ok(FieldDescriptors::new(bean_type, fields))
}
