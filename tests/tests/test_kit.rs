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

use beankit_core::kit;
use beankit_core::model::{Page, Pagination};
use beankit_core::value::Value;
use beankit_tests::{sample_user, Account, User, UserStatus, UserVo};

#[test]
fn test_kit_copy() {
    let user = sample_user();
    let vo: UserVo = kit::copy_to(&user).unwrap();
    assert_eq!(vo.user_id, Some(10000));
    assert_eq!(vo.status, Some(UserStatus::DisableLogin));

    let mut back = User::default();
    kit::copy_properties(&mut back, &vo).unwrap();
    assert_eq!(back.status.as_deref(), Some("3"));
    assert_eq!(back.amount, Some(10086.0));
}

#[test]
fn test_kit_batch() {
    let list = vec![sample_user(), sample_user()];
    let vos: Vec<UserVo> = kit::copy_list(&list).unwrap();
    assert_eq!(vos.len(), 2);

    let page = Page::new(list, Pagination::new(20, 2));
    let page: Page<UserVo> = kit::copy_page(&page).unwrap();
    assert_eq!(page.pagination.total_items(), 2);
}

#[test]
fn test_kit_maps() {
    let account = Account {
        id: Some(3),
        login_name: Some("selfly".to_string()),
        ..Default::default()
    };
    let map = kit::bean_to_map(&account).unwrap();
    assert_eq!(map.get("loginName"), Some(&Value::from("selfly")));

    let copy: Account = kit::map_to_bean(&map).unwrap();
    assert_eq!(copy.id, Some(3));

    let rows = vec![map];
    let copies: Vec<Account> = kit::map_list_to_bean(&rows).unwrap();
    assert_eq!(copies[0].login_name.as_deref(), Some("selfly"));
}
