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

use beankit_core::error::Error;
use beankit_core::mapper::{BeanMapper, MapOptions};
use beankit_core::model::Model;
use beankit_core::value::{Value, ValueMap};
use beankit_tests::{Account, AccountView, UserStatus};

fn row(entries: &[(&str, Value)]) -> ValueMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_exact_keys() {
    let mapper = BeanMapper::default();
    let map = row(&[
        ("id", Value::I64(1)),
        ("loginName", Value::from("selfly")),
    ]);
    let account: Account = mapper.map_to_bean(&map).unwrap();
    assert_eq!(account.id, Some(1));
    assert_eq!(account.login_name.as_deref(), Some("selfly"));
    assert!(account.extra.is_empty());
}

#[test]
fn test_underscore_keys() {
    let mapper = BeanMapper::default();
    let map = row(&[
        ("ID", Value::I32(7)),
        ("LOGIN_NAME", Value::from("selfly")),
        ("nick__name", Value::from("self")),
        ("dept_no", Value::from("d01")),
    ]);
    let account: Account = mapper.underscore_key_map_to_bean(&map).unwrap();
    assert_eq!(account.id, Some(7));
    assert_eq!(account.login_name.as_deref(), Some("selfly"));
    assert_eq!(account.nick_name.as_deref(), Some("self"));
    // unmatched keys land in the bag under the normalized name
    assert_eq!(account.extra.get("deptNo"), Some(&Value::from("d01")));
    assert_eq!(account.extra.len(), 1);
}

#[test]
fn test_code_to_enum() {
    let mapper = BeanMapper::default();
    let map = row(&[("status", Value::from("3"))]);
    let account: Account = mapper.map_to_bean(&map).unwrap();
    assert_eq!(account.status, Some(UserStatus::DisableLogin));

    let map = row(&[("status", Value::from("x"))]);
    let account: Account = mapper.map_to_bean(&map).unwrap();
    assert_eq!(account.status, None);
}

#[test]
fn test_null_entries_skipped() {
    let mapper = BeanMapper::default();
    let map = row(&[
        ("id", Value::I64(2)),
        ("nickName", Value::Null),
        ("remark", Value::Null),
    ]);
    let account: Account = mapper.map_to_bean(&map).unwrap();
    assert_eq!(account.id, Some(2));
    assert_eq!(account.nick_name, None);
    assert!(account.extra.is_empty());
}

#[test]
fn test_entry_hook_per_entry() {
    let mapper = BeanMapper::default();
    let map = row(&[
        ("id", Value::I64(2)),
        ("login_name", Value::from("a")),
        ("nick_name", Value::Null),
        ("other", Value::Bool(true)),
    ]);
    let mut seen = Vec::new();
    {
        let mut options = MapOptions::new()
            .key_delimiter('_')
            .entry_hook(|_: &ValueMap, account: &mut Account| {
                seen.push(account.extra.len());
            });
        mapper.map_to_bean_with(&map, &mut options).unwrap();
    }
    assert_eq!(seen, vec![0, 0, 1]);
}

#[test]
fn test_no_bag_drops_unmatched() {
    let mapper = BeanMapper::default();
    let map = row(&[("id", Value::I64(5)), ("unknown", Value::from("u"))]);
    let view: AccountView = mapper.map_to_bean(&map).unwrap();
    assert_eq!(view.id, Some(5));
    assert_eq!(view.login_name, None);
}

#[test]
fn test_conversion_failure() {
    let mapper = BeanMapper::default();
    let map = row(&[("id", Value::from("abc"))]);
    let err = mapper.map_to_bean::<Account>(&map).unwrap_err();
    assert_eq!(err.property(), Some("id"));
    assert!(matches!(err.root_cause(), Error::TypeError(_)));
}

#[test]
fn test_model_write_only_alias() {
    let mapper = BeanMapper::default();
    let map = row(&[
        ("keywords", Value::from("rust")),
        ("pn", Value::I32(3)),
        ("ps", Value::I64(50)),
        ("tenant", Value::from("acme")),
    ]);
    let model: Model = mapper.map_to_bean(&map).unwrap();
    assert_eq!(model.keywords.as_deref(), Some("rust"));
    assert_eq!(model.pageable.page_num, 3);
    assert_eq!(model.pageable.page_size, 50);
    assert_eq!(model.property("tenant"), Some(&Value::from("acme")));
}

#[test]
fn test_bean_to_map() {
    let mapper = BeanMapper::default();
    let view = AccountView {
        id: Some(9),
        login_name: None,
        status: Some("1".to_string()),
    };
    let map = mapper.bean_to_map(&view).unwrap();
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "status"]);
    assert_eq!(map["id"], Value::I64(9));

    let back: AccountView = mapper.map_to_bean(&map).unwrap();
    assert_eq!(back.id, Some(9));
    assert_eq!(back.status.as_deref(), Some("1"));
}
