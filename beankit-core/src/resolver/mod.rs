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

//! Descriptor caches built from bean schemas.

use std::any::TypeId;
use std::collections::HashSet;

use crate::error::Error;
use crate::meta::BeanSchema;

mod field_cache;
mod metadata_cache;
mod type_cache;

pub use field_cache::FieldCache;
pub use metadata_cache::{MetadataCache, SUPPRESSED_PROPERTY_NAMES};

/// Visits `root` and each parent level in turn, most-derived first,
/// stopping before the level whose type is `stop`.
///
/// Fails on a parent cycle, or when `stop` is set and never reached.
fn walk_levels<F>(root: BeanSchema, stop: Option<TypeId>, mut visit: F) -> Result<(), Error>
where
    F: FnMut(&BeanSchema) -> Result<(), Error>,
{
    let root_name = root.type_name();
    let mut visited = HashSet::new();
    let mut level = Some(root);
    while let Some(schema) = level {
        if Some(schema.type_id()) == stop {
            return Ok(());
        }
        if !visited.insert(schema.type_id()) {
            return Err(Error::introspection(format!(
                "parent chain of {} loops back to {}",
                root_name,
                schema.type_name()
            )));
        }
        visit(&schema)?;
        level = schema.parent_link().map(|link| (link.schema)());
    }
    match stop {
        None => Ok(()),
        Some(_) => Err(Error::introspection(format!(
            "stop ancestor is not in the parent chain of {}",
            root_name
        ))),
    }
}

/// Rejects a schema level that declares `name` twice.
fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    name: &'a str,
    schema: &BeanSchema,
) -> Result<(), Error> {
    if seen.insert(name) {
        Ok(())
    } else {
        Err(Error::introspection(format!(
            "{} declares '{}' more than once",
            schema.type_name(),
            name
        )))
    }
}
