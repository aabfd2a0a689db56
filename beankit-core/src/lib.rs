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

//! # Beankit Core
//!
//! Core of the beankit property mapper: it copies named properties between
//! beans of unrelated types, converts values when declared types differ,
//! and moves data between beans and ordered string-keyed maps.
//!
//! ## Architecture
//!
//! - **`bean`**: the [`Bean`], [`ExtensionPropertyBag`] and [`CodedEnum`] capabilities
//! - **`meta`**: per type schemas and the resolved descriptor sets
//! - **`resolver`**: concurrent metadata and field caches
//! - **`converter`**: the ordered type conversion pipeline
//! - **`mapper`**: the copy engine and its list and page forms
//! - **`property`** / **`value`** / **`types`**: the dynamic value model
//! - **`model`**: ready-made paging and query beans
//! - **`kit`**: free functions over a default mapper
//!
//! ## Key Concepts
//!
//! A bean exposes a schema instead of being introspected at runtime. The
//! schema lists each property with its declared type and whether it can
//! be read or written, plus an optional parent level. Descriptor sets are
//! flattened from that chain once per type and cached.
//!
//! Copying is a sparse merge. Null source values never overwrite, names
//! missing on one side are skipped, and a mismatch no converter handles
//! surfaces as an error from the destination write.
//!
//! ## Usage
//!
//! This crate is normally used through the `beankit` crate, which adds
//! `#[derive(Bean)]` and `#[derive(CodedEnum)]`. The hand-written beans in
//! [`model`] work without the derive:
//!
//! ```rust
//! use beankit_core::{BeanMapper, Value, ValueMap};
//! use beankit_core::model::Model;
//!
//! let mapper = BeanMapper::default();
//! let mut map = ValueMap::new();
//! map.insert("type_name".to_string(), Value::from("news"));
//! map.insert("page_size".to_string(), Value::I64(50));
//! map.insert("tenant".to_string(), Value::from("acme"));
//!
//! let model: Model = mapper.underscore_key_map_to_bean(&map).unwrap();
//! assert_eq!(model.type_name.as_deref(), Some("news"));
//! assert_eq!(model.pageable.page_size, 50);
//! assert_eq!(model.property("tenant"), Some(&Value::from("acme")));
//! ```

pub mod bean;
pub mod config;
pub mod converter;
pub mod error;
pub mod kit;
pub mod mapper;
pub mod meta;
pub mod model;
pub mod property;
pub mod resolver;
pub mod types;
pub mod util;
pub mod value;

pub use bean::{Bean, CodedEnum, ExtensionPropertyBag};
pub use config::Config;
pub use converter::TypeConverter;
pub use error::Error;
pub use mapper::{BeanMapper, CopyOptions, MapOptions};
pub use property::Property;
pub use types::{PropertyType, TypeKind};
pub use value::{Value, ValueMap};
