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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Variant};

/// Code and description of one variant.
struct VariantMeta<'a> {
    ident: &'a Ident,
    code: LitStr,
    desc: LitStr,
}

fn parse_variant(variant: &Variant) -> syn::Result<VariantMeta<'_>> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "CodedEnum variants must be unit variants",
        ));
    }
    let mut code = None;
    let mut desc = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("bean") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("code") {
                code = Some(nested.value()?.parse::<LitStr>()?);
            } else if nested.path.is_ident("desc") {
                desc = Some(nested.value()?.parse::<LitStr>()?);
            } else {
                return Err(nested.error("unknown CodedEnum variant attribute"));
            }
            Ok(())
        })?;
    }
    let Some(code) = code else {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "missing #[bean(code = \"...\")]",
        ));
    };
    Ok(VariantMeta {
        ident: &variant.ident,
        code,
        desc: desc.unwrap_or_else(|| LitStr::new("", variant.ident.span())),
    })
}

fn parse_variants(data: &DataEnum) -> syn::Result<Vec<VariantMeta<'_>>> {
    let mut codes = HashSet::new();
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let meta = parse_variant(variant)?;
        if !codes.insert(meta.code.value()) {
            return Err(syn::Error::new(
                meta.code.span(),
                format!("duplicate enum code `{}`", meta.code.value()),
            ));
        }
        variants.push(meta);
    }
    Ok(variants)
}

pub fn derive_coded_enum(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let Data::Enum(data) = &ast.data else {
        return Err(syn::Error::new_spanned(
            name,
            "CodedEnum can only be derived for enums",
        ));
    };
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "CodedEnum cannot be derived for generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "CodedEnum needs at least one variant",
        ));
    }
    let variants = parse_variants(data)?;
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let codes: Vec<_> = variants.iter().map(|v| &v.code).collect();
    let descs: Vec<_> = variants.iter().map(|v| &v.desc).collect();
    let names: Vec<_> = idents
        .iter()
        .map(|i| LitStr::new(&i.to_string(), i.span()))
        .collect();

    Ok(quote! {
        impl beankit_core::bean::CodedEnum for #name {
            fn code(&self) -> &'static str {
                match self {
                    #( #name::#idents => #codes, )*
                }
            }

            fn desc(&self) -> &'static str {
                match self {
                    #( #name::#idents => #descs, )*
                }
            }

            fn constants() -> &'static [Self] {
                const CONSTANTS: &[#name] = &[ #( #name::#idents ),* ];
                CONSTANTS
            }
        }

        impl beankit_core::property::Property for #name {
            fn property_type() -> beankit_core::types::PropertyType {
                fn constants() -> &'static [beankit_core::types::EnumConstant] {
                    const CONSTANTS: &[beankit_core::types::EnumConstant] = &[
                        #(
                            beankit_core::types::EnumConstant {
                                name: #names,
                                code: #codes,
                                desc: #descs,
                            },
                        )*
                    ];
                    CONSTANTS
                }
                beankit_core::types::PropertyType::of_enum::<#name>(constants)
            }

            fn to_value(&self) -> beankit_core::value::Value {
                let name = match self {
                    #( #name::#idents => #names, )*
                };
                beankit_core::value::Value::Enum(beankit_core::value::EnumValue {
                    ty: <Self as beankit_core::property::Property>::property_type(),
                    name,
                    code: beankit_core::bean::CodedEnum::code(self),
                })
            }

            fn from_value(
                value: beankit_core::value::Value,
            ) -> ::std::result::Result<Self, beankit_core::error::Error> {
                if let beankit_core::value::Value::Enum(e) = &value {
                    if e.ty.is::<#name>() {
                        match e.name {
                            #( #names => return ::std::result::Result::Ok(#name::#idents), )*
                            _ => {}
                        }
                    }
                }
                ::std::result::Result::Err(beankit_core::property::mismatch::<Self>(&value))
            }
        }
    })
}
