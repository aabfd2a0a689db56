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

use std::sync::Arc;

use beankit_core::error::Error;
use beankit_core::mapper::BeanMapper;
use beankit_core::meta::Ancestor;
use beankit_core::model::{Model, Pageable};
use beankit_core::resolver::{FieldCache, MetadataCache};
use beankit_derive::Bean;
use beankit_tests::{Account, UserVo};

#[test]
fn test_descriptor_order_follows_levels() {
    let cache = MetadataCache::new();
    let desc = cache.descriptors::<UserVo>().unwrap();
    let names: Vec<_> = desc.names().collect();
    assert_eq!(
        names,
        vec![
            "userId",
            "username",
            "password",
            "age",
            "amount",
            "status",
            "gmtCreate",
            "keywords",
            "typeName",
            "typeSort",
            "pageNum",
            "pageSize",
            "pn",
            "ps",
        ]
    );
    let page_num = desc.get("pageNum").unwrap();
    assert!(page_num.is_readable() && page_num.is_writable());
    assert!(page_num.declaring_type().ends_with("Pageable"));
    assert!(!desc.get("ps").unwrap().is_readable());
}

#[test]
fn test_stop_ancestor() {
    let cache = MetadataCache::new();
    let own = cache.descriptors_to::<UserVo, Model>().unwrap();
    assert_eq!(own.len(), 7);
    assert!(own.get("keywords").is_none());

    let upto_pageable = cache
        .descriptors_with_stop::<UserVo>(Some(Ancestor::of::<Pageable>()))
        .unwrap();
    assert!(upto_pageable.get("keywords").is_some());
    assert!(upto_pageable.get("pageNum").is_none());

    // a stop that is not an ancestor is an error and is not cached
    let err = cache.descriptors_to::<Account, Model>().unwrap_err();
    assert!(matches!(err, Error::Introspection(_)));
}

#[test]
fn test_suppressed_names() {
    #[derive(Bean, Default)]
    struct Holder {
        name: Option<String>,
        #[bean(rename = "classLoader")]
        loader: Option<String>,
    }

    let cache = MetadataCache::new();
    let desc = cache.descriptors::<Holder>().unwrap();
    assert_eq!(desc.names().collect::<Vec<_>>(), vec!["name"]);

    let holder = Holder {
        name: Some("n".to_string()),
        loader: Some("l".to_string()),
    };
    let map = BeanMapper::default().bean_to_map(&holder).unwrap();
    assert!(!map.contains_key("classLoader"));
}

#[test]
fn test_case_flip_find() {
    let cache = MetadataCache::new();
    let pd = cache.descriptor::<Account>("LoginName").unwrap().unwrap();
    assert_eq!(pd.name(), "loginName");
    assert!(cache.descriptor::<Account>("LOGINNAME").unwrap().is_none());
    assert!(cache.descriptor::<Account>("").unwrap().is_none());
}

#[test]
fn test_cache_reuse_and_clear() {
    let cache = MetadataCache::new();
    assert!(cache.is_empty());
    let first = cache.descriptors::<Account>().unwrap();
    let second = cache.descriptors::<Account>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
    let third = cache.descriptors::<Account>().unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    // a rebuilt entry matches in names, capabilities and declared types
    assert_eq!(*first, *third);
    for (before, after) in first.iter().zip(third.iter()) {
        assert_eq!(before.name(), after.name());
        assert_eq!(before.is_readable(), after.is_readable());
        assert_eq!(before.is_writable(), after.is_writable());
        assert_eq!(before.property_type(), after.property_type());
    }

    let fields = FieldCache::new();
    let before = fields.fields::<Account>().unwrap();
    fields.clear();
    assert_eq!(*before, *fields.fields::<Account>().unwrap());
}

#[test]
fn test_mapper_uses_injected_cache() {
    let cache = Arc::new(MetadataCache::new());
    let mapper = BeanMapper::default().metadata_cache(cache.clone());
    let _ = mapper.bean_to_map(&Account::default()).unwrap();
    assert!(cache.descriptors::<Account>().is_ok());
    assert!(Arc::ptr_eq(mapper.get_metadata_cache(), &cache));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_duplicate_across_levels_most_derived_wins() {
    #[derive(Bean, Default)]
    struct Base {
        #[bean(read_only)]
        title: Option<String>,
        note: Option<String>,
    }

    #[derive(Bean, Default)]
    struct Derived {
        title: Option<String>,
        #[bean(parent)]
        base: Base,
    }

    let cache = MetadataCache::new();
    let desc = cache.descriptors::<Derived>().unwrap();
    assert_eq!(desc.names().collect::<Vec<_>>(), vec!["title", "note"]);
    let title = desc.get("title").unwrap();
    assert!(title.is_writable());
    assert!(title.declaring_type().ends_with("Derived"));
}

#[test]
fn test_field_cache() {
    let cache = FieldCache::new();
    let fields = cache.fields::<UserVo>().unwrap();
    let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec![
            "user_id",
            "username",
            "password",
            "age",
            "amount",
            "status",
            "gmt_create",
            "keywords",
            "type_name",
            "type_sort",
            "page_num",
            "page_size",
        ]
    );
    let own = cache.fields_to::<UserVo, Model>().unwrap();
    assert_eq!(own.len(), 7);
    assert!(cache.field::<UserVo>("page_num").unwrap().is_some());
    assert!(cache.field::<UserVo>("pageNum").unwrap().is_none());
}
