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
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::Error;

/// Two-level concurrent cache keyed by bean type, then by stop ancestor.
///
/// `None` as the inner key means the whole parent chain. Values are
/// immutable once built. A build runs without holding any shard lock, so
/// two threads may build the same entry at once; the later insert is kept
/// and both results are equal.
pub(crate) struct TypeCache<V> {
    entries: DashMap<TypeId, HashMap<Option<TypeId>, Arc<V>>>,
}

impl<V> TypeCache<V> {
    pub fn new() -> Self {
        TypeCache {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, bean: TypeId, stop: Option<TypeId>) -> Option<Arc<V>> {
        self.entries
            .get(&bean)
            .and_then(|inner| inner.get(&stop).cloned())
    }

    pub fn get_or_try_build<F>(
        &self,
        bean: TypeId,
        stop: Option<TypeId>,
        build: F,
    ) -> Result<Arc<V>, Error>
    where
        F: FnOnce() -> Result<V, Error>,
    {
        if let Some(value) = self.get(bean, stop) {
            return Ok(value);
        }
        let value = Arc::new(build()?);
        self.entries
            .entry(bean)
            .or_default()
            .insert(stop, value.clone());
        Ok(value)
    }

    /// Number of cached `(bean, stop)` entries.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|inner| inner.len()).sum()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
