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
use crate::meta::{Ancestor, BeanSchema, ClassDescriptor, PropertyDescriptor};

/// Property names never exposed, whichever level declares them.
pub const SUPPRESSED_PROPERTY_NAMES: &[&str] = &["classLoader"];

static SHARED: OnceLock<Arc<MetadataCache>> = OnceLock::new();

/// Per-type cache of resolved property descriptors.
///
/// Entries are keyed by `(bean type, stop ancestor)` and live as long as the
/// cache. Most mappers share the process-wide instance returned by
/// [`MetadataCache::shared`].
pub struct MetadataCache {
    cache: TypeCache<ClassDescriptor>,
}

impl Default for MetadataCache {
    fn default() -> Self {
        MetadataCache::new()
    }
}

impl MetadataCache {
    pub fn new() -> Self {
        MetadataCache {
            cache: TypeCache::new(),
        }
    }

    pub fn shared() -> Arc<MetadataCache> {
        SHARED.get_or_init(|| Arc::new(MetadataCache::new())).clone()
    }

    /// All properties of `T`, including every parent level.
    pub fn descriptors<T: Bean>(&self) -> Result<Arc<ClassDescriptor>, Error> {
        self.descriptors_with_stop::<T>(None)
    }

    /// Properties of `T` declared below the ancestor `S` (exclusive).
    pub fn descriptors_to<T: Bean, S: Bean>(&self) -> Result<Arc<ClassDescriptor>, Error> {
        self.descriptors_with_stop::<T>(Some(Ancestor::of::<S>()))
    }

    pub fn descriptors_with_stop<T: Bean>(
        &self,
        stop: Option<Ancestor>,
    ) -> Result<Arc<ClassDescriptor>, Error> {
        let stop_id = stop.map(|s| s.type_id);
        self.cache
            .get_or_try_build(TypeId::of::<T>(), stop_id, || {
                build_class_descriptor(T::bean_schema(), stop_id)
            })
    }

    /// Property `name` of `T` using the case-flip fallback, or `None`.
    pub fn descriptor<T: Bean>(&self, name: &str) -> Result<Option<PropertyDescriptor>, Error> {
        Ok(self.descriptors::<T>()?.find(name).copied())
    }

    /// Number of cached `(bean type, stop ancestor)` entries.
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

fn build_class_descriptor(
    schema: BeanSchema,
    stop: Option<TypeId>,
) -> Result<ClassDescriptor, Error> {
    let bean_type = schema.type_name();
    let mut properties: IndexMap<&'static str, PropertyDescriptor> = IndexMap::new();
    walk_levels(schema, stop, |level| {
        let mut seen = HashSet::new();
        for info in level.properties() {
            check_unique(&mut seen, info.name, level)?;
            if SUPPRESSED_PROPERTY_NAMES.contains(&info.name) {
                continue;
            }
            properties
                .entry(info.name)
                .or_insert_with(|| PropertyDescriptor::new(info, level.type_name()));
        }
        Ok(())
    })?;
    debug!(
        bean = bean_type,
        properties = properties.len(),
        "built class descriptor"
    );
    Ok(ClassDescriptor::new(bean_type, properties))
}
