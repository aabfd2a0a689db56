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

use syn::{Data, DeriveInput, Field, Fields, LitStr, Path};

/// Property naming applied to fields without an explicit `rename`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    #[default]
    CamelCase,
    None,
}

/// Parsed container level `#[bean(...)]` attributes.
#[derive(Debug, Default)]
pub struct BeanAttrs {
    pub rename_all: RenameRule,
    pub new: Option<Path>,
}

pub fn parse_bean_attrs(ast: &DeriveInput) -> syn::Result<BeanAttrs> {
    let mut attrs = BeanAttrs::default();
    for attr in &ast.attrs {
        if !attr.path().is_ident("bean") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename_all") {
                let lit: LitStr = nested.value()?.parse()?;
                attrs.rename_all = match lit.value().as_str() {
                    "camelCase" => RenameRule::CamelCase,
                    "none" => RenameRule::None,
                    other => {
                        return Err(syn::Error::new(
                            lit.span(),
                            format!("unknown rename_all rule `{}`", other),
                        ))
                    }
                };
            } else if nested.path.is_ident("new") {
                attrs.new = Some(nested.value()?.parse()?);
            } else {
                return Err(nested.error("unknown bean container attribute"));
            }
            Ok(())
        })?;
    }
    Ok(attrs)
}

/// Named fields of a struct, rejecting enums, unions and tuple structs.
pub fn named_fields(ast: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &ast.ident,
                "Bean can only be derived for structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            "Bean can only be derived for structs",
        )),
    }
}
