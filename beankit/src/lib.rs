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

//! # Beankit
//!
//! Beankit copies named properties between beans of unrelated types and
//! between beans and ordered string-keyed maps, converting values on the
//! way when the declared types differ.
//!
//! ## Key Features
//!
//! - **Schema driven**: `#[derive(Bean)]` generates the property table, no runtime reflection
//! - **Sparse merge**: null source values never overwrite the destination
//! - **Pluggable conversion**: an ordered, first-match-wins converter pipeline
//! - **Inheritance by composition**: a `#[bean(parent)]` field is flattened as the parent level
//! - **Extension properties**: schemaless values travel in an ordered bag
//! - **Concurrent caches**: descriptor sets are built once per type and shared
//!
//! ## Quick Start
//!
//! The derives name `beankit_core` by a relative path. Bring the
//! re-exported core into scope next to the derives, or depend on
//! `beankit-core` directly.
//!
//! ```rust
//! use beankit::{beankit_core, Bean, BeanMapper, CodedEnum};
//!
//! #[derive(CodedEnum, Clone, Copy, Debug, PartialEq)]
//! enum UserStatus {
//!     #[bean(code = "1", desc = "enabled")]
//!     Enable,
//!     #[bean(code = "3", desc = "login disabled")]
//!     DisableLogin,
//! }
//!
//! #[derive(Bean, Default)]
//! struct User {
//!     user_id: i64,
//!     username: Option<String>,
//!     status: Option<UserStatus>,
//! }
//!
//! #[derive(Bean, Default)]
//! struct UserView {
//!     user_id: Option<i32>,
//!     username: Option<String>,
//!     status: Option<String>,
//! }
//!
//! let mapper = BeanMapper::default();
//! let user = User {
//!     user_id: 10000,
//!     username: Some("selfly".to_string()),
//!     status: Some(UserStatus::DisableLogin),
//! };
//! let view: UserView = mapper.copy_to(&user).unwrap();
//! assert_eq!(view.user_id, Some(10000));
//! assert_eq!(view.status.as_deref(), Some("3"));
//! ```
//!
//! ## Maps
//!
//! ```rust
//! use beankit::{beankit_core, Bean, BeanMapper, Value, ValueMap};
//!
//! #[derive(Bean, Default)]
//! struct Account {
//!     id: i64,
//!     login_name: String,
//! }
//!
//! let mut row = ValueMap::new();
//! row.insert("ID".to_string(), Value::I32(7));
//! row.insert("login_name".to_string(), Value::from("selfly"));
//!
//! let mapper = BeanMapper::default();
//! let account: Account = mapper.underscore_key_map_to_bean(&row).unwrap();
//! assert_eq!(account.id, 7);
//! assert_eq!(account.login_name, "selfly");
//! ```
//!
//! ## Custom converters
//!
//! Implement [`TypeConverter`] and register it on a mapper. Converters are
//! tried in registration order and the first one that supports a pair of
//! types wins, so register overrides on a mapper built without the
//! built-ins when they must take precedence:
//!
//! ```rust
//! use std::sync::Arc;
//! use beankit::{BeanMapper, Config, Error, PropertyType, TypeConverter, TypeKind, Value};
//!
//! struct BoolToString;
//!
//! impl TypeConverter for BoolToString {
//!     fn name(&self) -> &str {
//!         "bool_to_string"
//!     }
//!
//!     fn is_support(&self, source: &PropertyType, target: &PropertyType, _: &str) -> bool {
//!         source.kind() == TypeKind::Bool && target.kind() == TypeKind::String
//!     }
//!
//!     fn convert(&self, _: &PropertyType, _: &PropertyType, value: Value) -> Result<Option<Value>, Error> {
//!         Ok(match value {
//!             Value::Bool(b) => Some(Value::from(if b { "Y" } else { "N" })),
//!             _ => None,
//!         })
//!     }
//! }
//!
//! let mapper = BeanMapper::with_config(Config { default_converters: false, ..Config::default() });
//! mapper.register_converter(Arc::new(BoolToString));
//! assert_eq!(mapper.converters().len(), 1);
//! ```

pub use beankit_core;
pub use beankit_core::{
    bean::Bean, bean::CodedEnum, bean::ExtensionPropertyBag, error::Error, kit,
    mapper::BeanMapper, mapper::CopyOptions, mapper::MapOptions, model, value::Value,
    value::ValueMap, Config, Property, PropertyType, TypeConverter, TypeKind,
};
pub use beankit_derive::{Bean, CodedEnum};
