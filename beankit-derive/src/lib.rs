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

//! # Beankit Derive Macros
//!
//! Procedural macros that generate the schema tables beankit maps through.
//!
//! ## Available Macros
//!
//! ### `#[derive(Bean)]`
//!
//! Implements `Bean` for a struct with named fields. Every field becomes a
//! readable and writable property named in lowerCamelCase, and a raw field
//! under its Rust name.
//!
//! ```rust
//! use beankit_core::{BeanMapper, ValueMap};
//! use beankit_derive::Bean;
//!
//! #[derive(Bean, Default)]
//! struct UserVo {
//!     user_id: i32,
//!     #[bean(rename = "username")]
//!     user_name: Option<String>,
//!     #[bean(read_only)]
//!     created_by: String,
//! }
//!
//! let mapper = BeanMapper::default();
//! let user = UserVo { user_id: 7, ..Default::default() };
//! let map: ValueMap = mapper.bean_to_map(&user).unwrap();
//! assert!(map.contains_key("userId"));
//! assert!(map.contains_key("createdBy"));
//! ```
//!
//! Generated code names `beankit_core` by a relative path, so it resolves
//! through a direct dependency or through `use beankit::beankit_core;`.
//!
//! **Container attributes:**
//! - `#[bean(rename_all = "camelCase" | "none")]`: property naming, camelCase by default
//! - `#[bean(new = path::to::ctor)]`: fallible constructor used by `instantiate`,
//!   `Default::default` otherwise
//!
//! **Field attributes:**
//! - `rename = "name"`: explicit property name
//! - `read_only` / `write_only`: drop one accessor side
//! - `final`: read-only property, and a raw field that is never written
//! - `skip`: neither a property nor a field
//! - `parent`: the field's bean type is flattened in as the parent level
//! - `extension`: the field is the extension property bag
//!
//! ### `#[derive(CodedEnum)]`
//!
//! Implements `CodedEnum` and `Property` for a unit-only enum. Each variant
//! carries its code and an optional description:
//!
//! ```rust
//! use beankit_core::CodedEnum as _;
//! use beankit_derive::CodedEnum;
//!
//! #[derive(CodedEnum, Clone, Copy, Debug, PartialEq)]
//! enum UserStatus {
//!     #[bean(code = "1", desc = "enabled")]
//!     Enable,
//!     #[bean(code = "3", desc = "login disabled")]
//!     DisableLogin,
//! }
//!
//! assert_eq!(UserStatus::DisableLogin.code(), "3");
//! assert_eq!(UserStatus::from_code("1"), Some(&UserStatus::Enable));
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro implementing `Bean` from a struct's named fields.
#[proc_macro_derive(Bean, attributes(bean))]
pub fn proc_macro_derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_bean(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro implementing `CodedEnum` and `Property` for a unit enum.
#[proc_macro_derive(CodedEnum, attributes(bean))]
pub fn proc_macro_derive_coded_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_coded_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
