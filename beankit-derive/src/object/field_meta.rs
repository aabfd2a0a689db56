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

//! Field-level metadata parsing for `#[bean(...)]` attributes.
//!
//! - `rename = "name"`: property name used instead of the derived one
//! - `read_only` / `write_only`: accessor capabilities
//! - `final`: read-only property whose raw field is never written
//! - `skip`: hidden from both the property and the field view
//! - `parent`: the field holds the parent level
//! - `extension`: the field holds the extension property bag

use syn::{Field, LitStr};

/// Represents parsed `#[bean(...)]` field attributes
#[derive(Debug, Clone, Default)]
pub struct BeanFieldMeta {
    pub rename: Option<String>,
    pub read_only: bool,
    pub write_only: bool,
    pub is_final: bool,
    pub skip: bool,
    pub parent: bool,
    pub extension: bool,
}

impl BeanFieldMeta {
    /// A field that is an ordinary property and raw field.
    pub fn is_plain(&self) -> bool {
        !(self.skip || self.parent || self.extension)
    }

    pub fn readable(&self) -> bool {
        !self.write_only
    }

    pub fn writable(&self) -> bool {
        !(self.read_only || self.is_final)
    }
}

/// Parse `#[bean(...)]` attributes from a field
pub fn parse_field_meta(field: &Field) -> syn::Result<BeanFieldMeta> {
    let mut meta = BeanFieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("bean") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "rename must not be empty"));
                }
                meta.rename = Some(lit.value());
            } else if nested.path.is_ident("read_only") {
                meta.read_only = true;
            } else if nested.path.is_ident("write_only") {
                meta.write_only = true;
            } else if nested.path.is_ident("final") {
                meta.is_final = true;
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else if nested.path.is_ident("parent") {
                meta.parent = true;
            } else if nested.path.is_ident("extension") {
                meta.extension = true;
            } else {
                return Err(nested.error("unknown bean field attribute"));
            }
            Ok(())
        })?;
    }

    validate(field, &meta)?;
    Ok(meta)
}

fn validate(field: &Field, meta: &BeanFieldMeta) -> syn::Result<()> {
    let roles = [meta.skip, meta.parent, meta.extension]
        .iter()
        .filter(|b| **b)
        .count();
    if roles > 1 {
        return Err(syn::Error::new_spanned(
            field,
            "`skip`, `parent` and `extension` are mutually exclusive",
        ));
    }
    if roles == 1
        && (meta.rename.is_some() || meta.read_only || meta.write_only || meta.is_final)
    {
        return Err(syn::Error::new_spanned(
            field,
            "property attributes cannot be combined with `skip`, `parent` or `extension`",
        ));
    }
    if meta.write_only && (meta.read_only || meta.is_final) {
        return Err(syn::Error::new_spanned(
            field,
            "a write_only property cannot also be read_only or final",
        ));
    }
    Ok(())
}
