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

//! List and page forms of the copy engine operations.

use crate::bean::Bean;
use crate::error::Error;
use crate::mapper::{BeanMapper, CopyOptions, MapOptions};
use crate::model::Page;
use crate::value::ValueMap;

impl BeanMapper {
    /// Copies each element into a freshly instantiated `D`.
    /// An empty slice gives an empty list.
    pub fn copy_list<D: Bean, S: Bean>(&self, list: &[S]) -> Result<Vec<D>, Error> {
        self.copy_list_with(list, &mut CopyOptions::new())
    }

    /// Like [`BeanMapper::copy_list`]; the post hook runs once per element.
    pub fn copy_list_with<D: Bean, S: Bean>(
        &self,
        list: &[S],
        options: &mut CopyOptions<'_, S, D>,
    ) -> Result<Vec<D>, Error> {
        list.iter()
            .map(|source| self.copy_to_with(source, options))
            .collect()
    }

    /// Copies the page elements, keeping the pagination unchanged.
    pub fn copy_page<D: Bean, S: Bean>(&self, page: &Page<S>) -> Result<Page<D>, Error> {
        self.copy_page_with(page, &mut CopyOptions::new())
    }

    pub fn copy_page_with<D: Bean, S: Bean>(
        &self,
        page: &Page<S>,
        options: &mut CopyOptions<'_, S, D>,
    ) -> Result<Page<D>, Error> {
        let list = self.copy_list_with(&page.list, options)?;
        Ok(Page::new(list, page.pagination))
    }

    pub fn map_list_to_bean<D: Bean>(&self, maps: &[ValueMap]) -> Result<Vec<D>, Error> {
        self.map_list_to_bean_with(maps, &mut MapOptions::new())
    }

    pub fn underscore_key_map_list_to_bean<D: Bean>(
        &self,
        maps: &[ValueMap],
    ) -> Result<Vec<D>, Error> {
        self.map_list_to_bean_with(maps, &mut MapOptions::new().key_delimiter('_'))
    }

    pub fn map_list_to_bean_with<D: Bean>(
        &self,
        maps: &[ValueMap],
        options: &mut MapOptions<'_, D>,
    ) -> Result<Vec<D>, Error> {
        maps.iter()
            .map(|map| self.map_to_bean_with(map, options))
            .collect()
    }
}
