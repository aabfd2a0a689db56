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

use std::collections::HashSet;
use std::fmt;

use crate::value::ValueMap;

type PostHook<'a, S, D> = Box<dyn FnMut(&S, &mut D) + 'a>;
type EntryHook<'a, D> = Box<dyn FnMut(&ValueMap, &mut D) + 'a>;

/// Per call options of a bean-to-bean copy.
///
/// ```
/// use beankit_core::mapper::CopyOptions;
/// use beankit_core::model::Pageable;
///
/// let mut calls = 0;
/// let options: CopyOptions<Pageable, Pageable> = CopyOptions::new()
///     .ignore("pageSize")
///     .post_hook(|_, _| calls += 1);
/// assert!(options.is_ignored("pageSize"));
/// ```
pub struct CopyOptions<'a, S, D> {
    ignored: HashSet<String>,
    post_hook: Option<PostHook<'a, S, D>>,
}

impl<S, D> Default for CopyOptions<'_, S, D> {
    fn default() -> Self {
        CopyOptions {
            ignored: HashSet::new(),
            post_hook: None,
        }
    }
}

impl<'a, S, D> CopyOptions<'a, S, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never writes the destination property (or bag entry) `name`.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignored.insert(name.into());
        self
    }

    pub fn ignore_all<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Called once with `(source, destination)` after each completed copy.
    pub fn post_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&S, &mut D) + 'a,
    {
        self.post_hook = Some(Box::new(hook));
        self
    }

    #[inline(always)]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    pub(crate) fn run_post_hook(&mut self, source: &S, dest: &mut D) {
        if let Some(hook) = self.post_hook.as_mut() {
            hook(source, dest);
        }
    }
}

impl<S, D> fmt::Debug for CopyOptions<'_, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOptions")
            .field("ignored", &self.ignored)
            .field("post_hook", &self.post_hook.is_some())
            .finish()
    }
}

/// Per call options of a dictionary-to-bean mapping.
pub struct MapOptions<'a, D> {
    key_delimiter: Option<char>,
    entry_hook: Option<EntryHook<'a, D>>,
}

impl<D> Default for MapOptions<'_, D> {
    fn default() -> Self {
        MapOptions {
            key_delimiter: None,
            entry_hook: None,
        }
    }
}

impl<'a, D> MapOptions<'a, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys containing `delimiter` are camel-cased, other keys are
    /// lowercased. Without a delimiter keys are used as they are.
    pub fn key_delimiter(mut self, delimiter: char) -> Self {
        self.key_delimiter = Some(delimiter);
        self
    }

    /// Called with `(source map, destination)` after every non-null entry.
    pub fn entry_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ValueMap, &mut D) + 'a,
    {
        self.entry_hook = Some(Box::new(hook));
        self
    }

    pub fn delimiter(&self) -> Option<char> {
        self.key_delimiter
    }

    pub(crate) fn run_entry_hook(&mut self, source: &ValueMap, dest: &mut D) {
        if let Some(hook) = self.entry_hook.as_mut() {
            hook(source, dest);
        }
    }
}

impl<D> fmt::Debug for MapOptions<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("key_delimiter", &self.key_delimiter)
            .field("entry_hook", &self.entry_hook.is_some())
            .finish()
    }
}
