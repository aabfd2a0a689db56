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

//! The copy engine.
//!
//! [`BeanMapper`] copies declared properties between beans, maps ordered
//! dictionaries to beans and back, and copies raw fields. Copying is a
//! sparse merge: null source values and properties missing on either side
//! are skipped, never reported.

use std::any::type_name;
use std::sync::Arc;

use tracing::trace;

use crate::bean::Bean;
use crate::config::Config;
use crate::converter::{ConverterRegistry, Pipeline, TypeConverter};
use crate::error::Error;
use crate::meta::{ClassDescriptor, PropertyDescriptor};
use crate::resolver::{FieldCache, MetadataCache};
use crate::types::{PropertyType, TypeKind};
use crate::util::camel_name;
use crate::value::{Value, ValueMap};

mod batch;
mod options;

pub use options::{CopyOptions, MapOptions};

/// Bean property mapper with its own converter pipeline.
///
/// Descriptor caches are shared process-wide unless replaced with
/// [`BeanMapper::metadata_cache`] / [`BeanMapper::field_cache`].
///
/// ```rust
/// use beankit_core::mapper::BeanMapper;
/// use beankit_core::model::Pageable;
///
/// let mapper = BeanMapper::default();
/// let source = Pageable::new(3, 50);
/// let mut dest = Pageable::default();
/// mapper.copy_properties(&mut dest, &source).unwrap();
/// assert_eq!(dest.page_num, 3);
/// assert_eq!(dest.page_size, 50);
/// ```
pub struct BeanMapper {
    config: Config,
    metadata: Arc<MetadataCache>,
    fields: Arc<FieldCache>,
    converters: ConverterRegistry,
}

impl Default for BeanMapper {
    fn default() -> Self {
        BeanMapper::with_config(Config::default())
    }
}

impl BeanMapper {
    pub fn with_config(config: Config) -> Self {
        let converters = if config.is_default_converters() {
            ConverterRegistry::with_defaults()
        } else {
            ConverterRegistry::new()
        };
        BeanMapper {
            config,
            metadata: MetadataCache::shared(),
            fields: FieldCache::shared(),
            converters,
        }
    }

    /// Enables or disables the case-flip fallback of property lookup.
    ///
    /// With the fallback a source property `UserName` still reaches a
    /// destination property `userName`.
    pub fn lenient_lookup(mut self, lenient_lookup: bool) -> Self {
        self.config.lenient_lookup = lenient_lookup;
        self
    }

    /// Uses `cache` instead of the process-wide metadata cache.
    pub fn metadata_cache(mut self, cache: Arc<MetadataCache>) -> Self {
        self.metadata = cache;
        self
    }

    /// Uses `cache` instead of the process-wide field cache.
    pub fn field_cache(mut self, cache: Arc<FieldCache>) -> Self {
        self.fields = cache;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_metadata_cache(&self) -> &Arc<MetadataCache> {
        &self.metadata
    }

    pub fn get_field_cache(&self) -> &Arc<FieldCache> {
        &self.fields
    }

    /// Appends a converter after the ones already registered.
    pub fn register_converter(&self, converter: Arc<dyn TypeConverter>) -> &Self {
        self.converters.register(converter);
        self
    }

    pub fn unregister_converter(&self, converter: &Arc<dyn TypeConverter>) -> &Self {
        self.converters.unregister(converter);
        self
    }

    pub fn clear_converters(&self) -> &Self {
        self.converters.clear();
        self
    }

    /// Registered converters in precedence order.
    pub fn converters(&self) -> Vec<Arc<dyn TypeConverter>> {
        self.converters.list()
    }

    /// Copies every readable source property onto the same-named writable
    /// destination property, then the extension bag entries.
    pub fn copy_properties<'d, S: Bean, D: Bean>(
        &self,
        dest: &'d mut D,
        source: &S,
    ) -> Result<&'d mut D, Error> {
        self.copy_properties_with(dest, source, &mut CopyOptions::new())
    }

    pub fn copy_properties_with<'d, S: Bean, D: Bean>(
        &self,
        dest: &'d mut D,
        source: &S,
        options: &mut CopyOptions<'_, S, D>,
    ) -> Result<&'d mut D, Error> {
        let dest_desc = self.class_descriptor::<D>()?;
        let source_desc = self.class_descriptor::<S>()?;
        let pipeline = self.converters.snapshot();
        for target in dest_desc.iter() {
            if !target.is_writable() || options.is_ignored(target.name()) {
                continue;
            }
            let Some(origin) = self.lookup(&source_desc, target.name()) else {
                continue;
            };
            if !origin.is_readable() {
                continue;
            }
            copy_property(&pipeline, &mut *dest, source, origin, target)
                .map_err(|e| Error::bean_mapping(target.name(), e))?;
        }
        copy_extension(&mut *dest, source, options);
        options.run_post_hook(source, &mut *dest);
        Ok(dest)
    }

    /// Copies `source` into a freshly instantiated `D`.
    pub fn copy_to<D: Bean, S: Bean>(&self, source: &S) -> Result<D, Error> {
        self.copy_to_with(source, &mut CopyOptions::new())
    }

    pub fn copy_to_with<D: Bean, S: Bean>(
        &self,
        source: &S,
        options: &mut CopyOptions<'_, S, D>,
    ) -> Result<D, Error> {
        let mut dest = instantiate::<D>()?;
        self.copy_properties_with(&mut dest, source, options)?;
        Ok(dest)
    }

    /// Copies raw field state, bypassing property accessors.
    ///
    /// Every non-final destination field with a same-named source field is
    /// overwritten, nulls included. The first rejected read or write aborts
    /// the copy, leaving earlier fields written.
    pub fn copy_fields<S: Bean, D: Bean>(&self, dest: &mut D, source: &S) -> Result<(), Error> {
        let dest_fields = self.fields.fields::<D>()?;
        let source_fields = self.fields.fields::<S>()?;
        for field in dest_fields.iter() {
            if field.is_final() || source_fields.get(field.name()).is_none() {
                continue;
            }
            let value = source
                .get_field(field.name())
                .map_err(|e| field_error(field.name(), e))?;
            dest.set_field(field.name(), value)
                .map_err(|e| field_error(field.name(), e))?;
        }
        Ok(())
    }

    /// Builds a `D` from dictionary entries, keys used as property names.
    pub fn map_to_bean<D: Bean>(&self, map: &ValueMap) -> Result<D, Error> {
        self.map_to_bean_with(map, &mut MapOptions::new())
    }

    /// Builds a `D` from dictionary entries whose keys are `_` delimited,
    /// so `login_name` fills `loginName` and `ID` fills `id`.
    pub fn underscore_key_map_to_bean<D: Bean>(&self, map: &ValueMap) -> Result<D, Error> {
        self.map_to_bean_with(map, &mut MapOptions::new().key_delimiter('_'))
    }

    /// Builds a `D` from dictionary entries.
    ///
    /// Null entries are skipped. An entry with no writable property is kept
    /// in the extension bag under the derived name when `D` has one, and
    /// dropped otherwise. The entry hook runs after every non-null entry.
    pub fn map_to_bean_with<D: Bean>(
        &self,
        map: &ValueMap,
        options: &mut MapOptions<'_, D>,
    ) -> Result<D, Error> {
        let mut bean = instantiate::<D>()?;
        let desc = self.class_descriptor::<D>()?;
        let pipeline = self.converters.snapshot();
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let name = match options.delimiter() {
                Some(delimiter) if key.contains(delimiter) => camel_name(key, delimiter),
                Some(_) => key.to_lowercase(),
                None => key.clone(),
            };
            match self.lookup(&desc, &name).filter(|pd| pd.is_writable()) {
                Some(target) => {
                    write_entry(&pipeline, &mut bean, target, value.clone())
                        .map_err(|e| Error::bean_mapping(target.name(), e))?;
                }
                None => match bean.extension_mut() {
                    Some(bag) => bag.add(name, value.clone()),
                    None => trace!(key = key.as_str(), "no property for entry"),
                },
            }
            options.run_entry_hook(map, &mut bean);
        }
        Ok(bean)
    }

    /// Readable, non-null properties of `source` in descriptor order.
    pub fn bean_to_map<S: Bean>(&self, source: &S) -> Result<ValueMap, Error> {
        let desc = self.class_descriptor::<S>()?;
        let mut map = ValueMap::with_capacity(desc.len());
        for pd in desc.iter().filter(|pd| pd.is_readable()) {
            let value = source
                .get_property(pd.name())
                .map_err(|e| Error::bean_mapping(pd.name(), e))?;
            if !value.is_null() {
                map.insert(pd.name().to_string(), value);
            }
        }
        Ok(map)
    }

    fn class_descriptor<T: Bean>(&self) -> Result<Arc<ClassDescriptor>, Error> {
        self.metadata
            .descriptors::<T>()
            .map_err(|e| Error::bean_mapping(type_name::<T>(), e))
    }

    fn lookup<'a>(&self, desc: &'a ClassDescriptor, name: &str) -> Option<&'a PropertyDescriptor> {
        if self.config.is_lenient_lookup() {
            desc.find(name)
        } else {
            desc.get(name)
        }
    }
}

/// Fresh destination instance; any failure becomes a `BeanInstantiation`.
fn instantiate<D: Bean>() -> Result<D, Error> {
    D::instantiate().map_err(|e| match e {
        Error::BeanInstantiation { .. } => e,
        other => Error::bean_instantiation(type_name::<D>(), other.to_string()),
    })
}

fn copy_property<S: Bean, D: Bean>(
    pipeline: &Pipeline,
    dest: &mut D,
    source: &S,
    origin: &PropertyDescriptor,
    target: &PropertyDescriptor,
) -> Result<(), Error> {
    let value = source.get_property(origin.name())?;
    if value.is_null() {
        return Ok(());
    }
    let source_type = effective_type(origin.property_type(), &value);
    match pipeline.convert(&source_type, target.property_type(), target.name(), value)? {
        Some(converted) => dest.set_property(target.name(), converted),
        None => Ok(()),
    }
}

fn write_entry<D: Bean>(
    pipeline: &Pipeline,
    dest: &mut D,
    target: &PropertyDescriptor,
    value: Value,
) -> Result<(), Error> {
    let source_type = match value.runtime_type() {
        Some(ty) => ty,
        None => return Ok(()),
    };
    match pipeline.convert(&source_type, target.property_type(), target.name(), value)? {
        Some(converted) => dest.set_property(target.name(), converted),
        None => Ok(()),
    }
}

/// A dynamically typed source converts as the value it actually holds.
fn effective_type(declared: &PropertyType, value: &Value) -> PropertyType {
    if declared.kind() == TypeKind::Any {
        value.runtime_type().unwrap_or(*declared)
    } else {
        *declared
    }
}

fn copy_extension<S: Bean, D: Bean>(dest: &mut D, source: &S, options: &CopyOptions<'_, S, D>) {
    let Some(source_bag) = source.extension() else {
        return;
    };
    let Some(dest_bag) = dest.extension_mut() else {
        return;
    };
    for (name, value) in source_bag.entries() {
        if !options.is_ignored(name) {
            dest_bag.add(name.clone(), value.clone());
        }
    }
}

fn field_error(field: &'static str, cause: Error) -> Error {
    match cause {
        Error::FieldAccess { .. } => cause,
        other => Error::field_access(field, other.to_string()),
    }
}
