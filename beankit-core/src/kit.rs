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

//! Free functions over a process-wide default [`BeanMapper`].
//!
//! Converters registered through [`mapper()`] affect every caller of this
//! module. Code that needs its own conversion policy should build a
//! separate `BeanMapper`.

use std::sync::{Arc, OnceLock};

use crate::bean::Bean;
use crate::converter::TypeConverter;
use crate::error::Error;
use crate::mapper::BeanMapper;
use crate::model::Page;
use crate::value::ValueMap;

static DEFAULT_MAPPER: OnceLock<BeanMapper> = OnceLock::new();

pub fn mapper() -> &'static BeanMapper {
    DEFAULT_MAPPER.get_or_init(BeanMapper::default)
}

pub fn register_converter(converter: Arc<dyn TypeConverter>) {
    mapper().register_converter(converter);
}

pub fn copy_properties<'d, S: Bean, D: Bean>(dest: &'d mut D, source: &S) -> Result<&'d mut D, Error> {
    mapper().copy_properties(dest, source)
}

pub fn copy_to<D: Bean, S: Bean>(source: &S) -> Result<D, Error> {
    mapper().copy_to(source)
}

pub fn copy_list<D: Bean, S: Bean>(list: &[S]) -> Result<Vec<D>, Error> {
    mapper().copy_list(list)
}

pub fn copy_page<D: Bean, S: Bean>(page: &Page<S>) -> Result<Page<D>, Error> {
    mapper().copy_page(page)
}

pub fn copy_fields<S: Bean, D: Bean>(dest: &mut D, source: &S) -> Result<(), Error> {
    mapper().copy_fields(dest, source)
}

pub fn map_to_bean<D: Bean>(map: &ValueMap) -> Result<D, Error> {
    mapper().map_to_bean(map)
}

pub fn underscore_key_map_to_bean<D: Bean>(map: &ValueMap) -> Result<D, Error> {
    mapper().underscore_key_map_to_bean(map)
}

pub fn map_list_to_bean<D: Bean>(maps: &[ValueMap]) -> Result<Vec<D>, Error> {
    mapper().map_list_to_bean(maps)
}

pub fn bean_to_map<S: Bean>(source: &S) -> Result<ValueMap, Error> {
    mapper().bean_to_map(source)
}
