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

use beankit_core::util::to_camel_case;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Field, Ident, LitStr, Type};

use crate::object::field_meta::{parse_field_meta, BeanFieldMeta};
use crate::util::{named_fields, parse_bean_attrs, BeanAttrs, RenameRule};

/// One plain field with its resolved property name.
struct PropertyField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    property: String,
    field: String,
    meta: BeanFieldMeta,
}

/// Fields of the struct sorted by role.
struct BeanFields<'a> {
    properties: Vec<PropertyField<'a>>,
    parent: Option<(&'a Ident, &'a Type)>,
    extension: Option<&'a Ident>,
}

fn collect_fields<'a>(fields: &[&'a Field], attrs: &BeanAttrs) -> syn::Result<BeanFields<'a>> {
    let mut result = BeanFields {
        properties: Vec::with_capacity(fields.len()),
        parent: None,
        extension: None,
    };
    let mut names = HashSet::new();
    for field in fields {
        let meta = parse_field_meta(field)?;
        // named_fields only returns named fields
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if meta.parent {
            if result.parent.is_some() {
                return Err(syn::Error::new_spanned(field, "only one field can be `parent`"));
            }
            result.parent = Some((ident, &field.ty));
            continue;
        }
        if meta.extension {
            if result.extension.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be `extension`",
                ));
            }
            result.extension = Some(ident);
            continue;
        }
        if !meta.is_plain() {
            continue;
        }
        let raw = ident.unraw().to_string();
        let property = match (&meta.rename, attrs.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, RenameRule::CamelCase) => to_camel_case(&raw),
            (None, RenameRule::None) => raw.clone(),
        };
        if !names.insert(property.clone()) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate bean property `{}`", property),
            ));
        }
        result.properties.push(PropertyField {
            ident,
            ty: &field.ty,
            property,
            field: raw,
            meta,
        });
    }
    Ok(result)
}

pub fn derive_bean(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let attrs = parse_bean_attrs(ast)?;
    let fields = named_fields(ast)?;
    let fields = collect_fields(&fields, &attrs)?;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let schema_ts = gen_bean_schema(&fields);
    let instantiate_ts = gen_instantiate(&attrs);
    let get_property_ts = gen_get_property(name, &fields);
    let set_property_ts = gen_set_property(name, &fields);
    let get_field_ts = gen_get_field(name, &fields);
    let set_field_ts = gen_set_field(name, &fields);
    let extension_ts = gen_extension(&fields);

    Ok(quote! {
        impl #impl_generics beankit_core::bean::Bean for #name #ty_generics #where_clause {
            fn bean_schema() -> beankit_core::meta::BeanSchema {
                #schema_ts
            }

            fn instantiate() -> ::std::result::Result<Self, beankit_core::error::Error> {
                #instantiate_ts
            }

            fn get_property(
                &self,
                name: &str,
            ) -> ::std::result::Result<beankit_core::value::Value, beankit_core::error::Error> {
                #get_property_ts
            }

            fn set_property(
                &mut self,
                name: &str,
                value: beankit_core::value::Value,
            ) -> ::std::result::Result<(), beankit_core::error::Error> {
                #set_property_ts
            }

            fn get_field(
                &self,
                name: &str,
            ) -> ::std::result::Result<beankit_core::value::Value, beankit_core::error::Error> {
                #get_field_ts
            }

            fn set_field(
                &mut self,
                name: &str,
                value: beankit_core::value::Value,
            ) -> ::std::result::Result<(), beankit_core::error::Error> {
                #set_field_ts
            }

            #extension_ts
        }
    })
}

fn gen_bean_schema(fields: &BeanFields) -> TokenStream {
    let properties = fields.properties.iter().map(|f| {
        let ty = f.ty;
        let property = LitStr::new(&f.property, f.ident.span());
        let access = if !f.meta.readable() {
            quote! { .write_only() }
        } else if !f.meta.writable() {
            quote! { .read_only() }
        } else {
            quote! {}
        };
        quote! {
            .property(beankit_core::meta::PropertyInfo::of::<#ty>(#property) #access)
        }
    });
    let raw_fields = fields.properties.iter().map(|f| {
        let ty = f.ty;
        let field = LitStr::new(&f.field, f.ident.span());
        let is_final = if f.meta.is_final {
            quote! { .final_() }
        } else {
            quote! {}
        };
        quote! {
            .field(beankit_core::meta::FieldInfo::of::<#ty>(#field) #is_final)
        }
    });
    let parent = fields.parent.map(|(_, ty)| {
        quote! { .parent::<#ty>() }
    });
    quote! {
        beankit_core::meta::BeanSchema::new::<Self>()
            #(#properties)*
            #(#raw_fields)*
            #parent
    }
}

fn gen_instantiate(attrs: &BeanAttrs) -> TokenStream {
    match &attrs.new {
        Some(ctor) => quote! {
            #ctor().map_err(|e| {
                beankit_core::error::Error::bean_instantiation(
                    ::std::any::type_name::<Self>(),
                    ::std::string::ToString::to_string(&e),
                )
            })
        },
        None => quote! {
            ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
        },
    }
}

/// Fallback arm for a name this level does not declare.
fn gen_fallback(bean: &Ident, fields: &BeanFields, call: TokenStream, what: &str) -> TokenStream {
    match fields.parent {
        Some((parent, _)) => quote! {
            beankit_core::bean::Bean::#call(&self.#parent, name)
        },
        None => {
            let msg = LitStr::new(&format!("{} has no {} '{{}}'", bean, what), bean.span());
            quote! {
                ::std::result::Result::Err(beankit_core::error::Error::unknown_property(
                    ::std::format!(#msg, name),
                ))
            }
        }
    }
}

fn gen_fallback_mut(bean: &Ident, fields: &BeanFields, call: TokenStream, what: &str) -> TokenStream {
    match fields.parent {
        Some((parent, _)) => quote! {
            beankit_core::bean::Bean::#call(&mut self.#parent, name, value)
        },
        None => {
            let msg = LitStr::new(&format!("{} has no {} '{{}}'", bean, what), bean.span());
            quote! {
                ::std::result::Result::Err(beankit_core::error::Error::unknown_property(
                    ::std::format!(#msg, name),
                ))
            }
        }
    }
}

fn gen_get_property(bean: &Ident, fields: &BeanFields) -> TokenStream {
    let arms = fields.properties.iter().map(|f| {
        let ident = f.ident;
        let property = &f.property;
        if f.meta.readable() {
            quote! {
                #property => ::std::result::Result::Ok(
                    beankit_core::property::Property::to_value(&self.#ident),
                ),
            }
        } else {
            let msg = format!("property '{}' of {} is write only", property, bean);
            quote! {
                #property => ::std::result::Result::Err(
                    beankit_core::error::Error::not_readable(#msg),
                ),
            }
        }
    });
    let fallback = gen_fallback(bean, fields, quote! { get_property }, "property");
    quote! {
        match name {
            #(#arms)*
            _ => #fallback,
        }
    }
}

fn gen_set_property(bean: &Ident, fields: &BeanFields) -> TokenStream {
    let arms = fields.properties.iter().map(|f| {
        let ident = f.ident;
        let property = &f.property;
        if f.meta.writable() {
            quote! {
                #property => {
                    self.#ident = beankit_core::property::Property::from_value(value)?;
                    ::std::result::Result::Ok(())
                }
            }
        } else {
            let msg = format!("property '{}' of {} is read only", property, bean);
            quote! {
                #property => ::std::result::Result::Err(
                    beankit_core::error::Error::not_writable(#msg),
                ),
            }
        }
    });
    let fallback = gen_fallback_mut(bean, fields, quote! { set_property }, "property");
    quote! {
        match name {
            #(#arms)*
            _ => #fallback,
        }
    }
}

fn gen_get_field(bean: &Ident, fields: &BeanFields) -> TokenStream {
    let arms = fields.properties.iter().map(|f| {
        let ident = f.ident;
        let field = &f.field;
        quote! {
            #field => ::std::result::Result::Ok(
                beankit_core::property::Property::to_value(&self.#ident),
            ),
        }
    });
    let fallback = gen_fallback(bean, fields, quote! { get_field }, "field");
    quote! {
        match name {
            #(#arms)*
            _ => #fallback,
        }
    }
}

fn gen_set_field(bean: &Ident, fields: &BeanFields) -> TokenStream {
    let arms = fields.properties.iter().map(|f| {
        let ident = f.ident;
        let field = &f.field;
        if f.meta.is_final {
            quote! {
                #field => ::std::result::Result::Err(
                    beankit_core::error::Error::field_access(#field, "field is final"),
                ),
            }
        } else {
            quote! {
                #field => {
                    self.#ident = beankit_core::property::Property::from_value(value)?;
                    ::std::result::Result::Ok(())
                }
            }
        }
    });
    let fallback = gen_fallback_mut(bean, fields, quote! { set_field }, "field");
    quote! {
        match name {
            #(#arms)*
            _ => #fallback,
        }
    }
}

fn gen_extension(fields: &BeanFields) -> TokenStream {
    match (fields.extension, fields.parent) {
        (Some(bag), _) => quote! {
            fn extension(&self) -> ::std::option::Option<&dyn beankit_core::bean::ExtensionPropertyBag> {
                ::std::option::Option::Some(&self.#bag)
            }

            fn extension_mut(
                &mut self,
            ) -> ::std::option::Option<&mut dyn beankit_core::bean::ExtensionPropertyBag> {
                ::std::option::Option::Some(&mut self.#bag)
            }
        },
        (None, Some((parent, _))) => quote! {
            fn extension(&self) -> ::std::option::Option<&dyn beankit_core::bean::ExtensionPropertyBag> {
                beankit_core::bean::Bean::extension(&self.#parent)
            }

            fn extension_mut(
                &mut self,
            ) -> ::std::option::Option<&mut dyn beankit_core::bean::ExtensionPropertyBag> {
                beankit_core::bean::Bean::extension_mut(&mut self.#parent)
            }
        },
        (None, None) => quote! {},
    }
}
