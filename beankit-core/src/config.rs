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

/// Configuration for a [`BeanMapper`](crate::mapper::BeanMapper).
///
/// Set once when the mapper is built. Per call behaviour (ignored names,
/// hooks, key delimiter) lives in the option structs of the
/// [`mapper`](crate::mapper) module instead.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether the built-in enum-code and numeric converters are installed.
    pub default_converters: bool,
    /// Whether a property name that misses an exact match is retried with
    /// its first character's case flipped.
    pub lenient_lookup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_converters: true,
            lenient_lookup: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn is_default_converters(&self) -> bool {
        self.default_converters
    }

    #[inline(always)]
    pub fn is_lenient_lookup(&self) -> bool {
        self.lenient_lookup
    }
}
