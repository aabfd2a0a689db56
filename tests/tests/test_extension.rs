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

use beankit_core::bean::{Bean, ExtensionPropertyBag};
use beankit_core::mapper::{BeanMapper, CopyOptions};
use beankit_core::model::Model;
use beankit_core::value::Value;
use beankit_tests::{Account, AccountView, UserVo};

#[test]
fn test_bag_to_bag() {
    let mapper = BeanMapper::default();
    let mut source = Account {
        id: Some(1),
        ..Default::default()
    };
    source.extra.insert("deptNo".to_string(), Value::from("d01"));
    source.extra.insert("level".to_string(), Value::I32(3));
    source.extra.insert("secret".to_string(), Value::from("x"));

    let mut dest = Account::default();
    dest.extra.insert("kept".to_string(), Value::Bool(true));
    let mut options = CopyOptions::new().ignore("secret");
    mapper
        .copy_properties_with(&mut dest, &source, &mut options)
        .unwrap();
    assert_eq!(dest.id, Some(1));
    let keys: Vec<_> = dest.extra.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["kept", "deptNo", "level"]);
}

#[test]
fn test_bag_through_parent() {
    let mapper = BeanMapper::default();
    let mut source = Account::default();
    source.extra.insert("tenant".to_string(), Value::from("acme"));

    let vo: UserVo = mapper.copy_to(&source).unwrap();
    assert_eq!(vo.model.property("tenant"), Some(&Value::from("acme")));
    assert_eq!(
        vo.model.get_as::<String>("tenant").unwrap().as_deref(),
        Some("acme")
    );

    let back: Account = mapper.copy_to(&vo).unwrap();
    assert_eq!(back.extra.get("tenant"), Some(&Value::from("acme")));
}

#[test]
fn test_bag_ignored_without_both_sides() {
    let mapper = BeanMapper::default();
    let mut source = Account {
        id: Some(4),
        ..Default::default()
    };
    source.extra.insert("tenant".to_string(), Value::from("acme"));
    let view: AccountView = mapper.copy_to(&source).unwrap();
    assert_eq!(view.id, Some(4));
    assert!(view.extension().is_none());
}

#[test]
fn test_model_bag_entries() {
    let mut model = Model::default();
    model.add_property("b", 2i32);
    model.add_property("a", 1i32);
    model.add_property("b", 3i32);
    let keys: Vec<_> = model.properties().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(model.property("b"), Some(&Value::I32(3)));
    assert!(model.get_as::<String>("a").is_err());
    assert_eq!(model.get_as::<i32>("missing").unwrap(), None);
    assert_eq!(model.remove_property("b"), Some(Value::I32(3)));
    assert!(model.extension().unwrap().get("b").is_none());
}
