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
use std::sync::Arc;
use std::thread;

use beankit_core::mapper::BeanMapper;
use beankit_core::resolver::MetadataCache;
use beankit_core::value::{Value, ValueMap};
use beankit_tests::{sample_user, Account, User, UserVo};

#[test]
fn test_copy_multi_thread() {
    let mapper = Arc::new(BeanMapper::default());
    let src: HashSet<i64> = (1..=16).collect();
    let mut handles = vec![];
    for id in &src {
        let mapper = Arc::clone(&mapper);
        let user = User {
            user_id: Some(*id),
            ..sample_user()
        };
        let handle = thread::spawn(move || mapper.copy_to::<UserVo, _>(&user).unwrap());
        handles.push(handle);
    }
    let mut dest = HashSet::new();
    for handle in handles {
        let vo = handle.join().unwrap();
        assert_eq!(vo.username.as_deref(), Some("selfly"));
        dest.insert(vo.user_id.map(i64::from).unwrap());
    }
    assert_eq!(dest, src);
}

#[test]
fn test_shared_cache_racing_builds_agree() {
    let cache = Arc::new(MetadataCache::new());
    let mut handles = vec![];
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            cache.descriptors::<Account>().unwrap()
        }));
    }
    let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // racing builds may produce separate instances, all equal in content
    for desc in &built {
        assert_eq!(**desc, *built[0]);
    }
    assert_eq!(cache.len(), 1);
    let cached = cache.descriptors::<Account>().unwrap();
    assert!(Arc::ptr_eq(&cached, &cache.descriptors::<Account>().unwrap()));
}

#[test]
fn test_register_while_mapping() {
    let mapper = Arc::new(BeanMapper::default());
    let mut handles = vec![];
    for i in 0..8i64 {
        let mapper = Arc::clone(&mapper);
        handles.push(thread::spawn(move || {
            if i % 2 == 0 {
                mapper.register_converter(Arc::new(beankit_core::converter::NumberConverter));
            }
            let mut row = ValueMap::new();
            row.insert("login_name".to_string(), Value::from("u"));
            row.insert("id".to_string(), Value::I32(i as i32));
            mapper.underscore_key_map_to_bean::<Account>(&row).unwrap()
        }));
    }
    for handle in handles {
        let account = handle.join().unwrap();
        assert_eq!(account.login_name.as_deref(), Some("u"));
        assert!(account.id.is_some());
    }
    assert_eq!(mapper.converters().len(), 6);
}
