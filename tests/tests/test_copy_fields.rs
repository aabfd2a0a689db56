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
use beankit_core::mapper::BeanMapper;
use beankit_derive::Bean;
use beankit_tests::UserVo;

#[derive(Bean, Debug, Default, Clone)]
struct Entity {
    #[bean(final)]
    id: i64,
    name: Option<String>,
    version: i32,
}

#[derive(Bean, Debug, Default)]
struct EntitySnapshot {
    id: i64,
    name: Option<String>,
    version: i32,
    taken_by: Option<String>,
}

#[test]
fn test_copy_fields_overwrites_nulls() {
    let mapper = BeanMapper::default();
    let source = EntitySnapshot {
        id: 9,
        name: None,
        version: 4,
        taken_by: Some("job".to_string()),
    };
    let mut dest = Entity {
        id: 1,
        name: Some("old".to_string()),
        version: 1,
    };
    mapper.copy_fields(&mut dest, &source).unwrap();
    // final fields are never written
    assert_eq!(dest.id, 1);
    assert_eq!(dest.name, None);
    assert_eq!(dest.version, 4);
}

#[test]
fn test_copy_fields_reads_final_source() {
    let mapper = BeanMapper::default();
    let source = Entity {
        id: 5,
        name: Some("n".to_string()),
        version: 2,
    };
    let mut dest = EntitySnapshot {
        taken_by: Some("me".to_string()),
        ..Default::default()
    };
    mapper.copy_fields(&mut dest, &source).unwrap();
    assert_eq!(dest.id, 5);
    assert_eq!(dest.name.as_deref(), Some("n"));
    assert_eq!(dest.version, 2);
    assert_eq!(dest.taken_by.as_deref(), Some("me"));
}

#[test]
fn test_copy_fields_type_mismatch() {
    #[derive(Bean, Default)]
    struct Loose {
        name: Option<String>,
        version: i64,
    }

    let mapper = BeanMapper::default();
    let source = Loose {
        name: Some("n".to_string()),
        version: 3,
    };
    let mut dest = Entity::default();
    let err = mapper.copy_fields(&mut dest, &source).unwrap_err();
    assert!(matches!(err, Error::FieldAccess { .. }));
    assert_eq!(err.property(), Some("version"));
    // no conversion for raw fields, earlier fields stay written
    assert_eq!(dest.name.as_deref(), Some("n"));
}

#[test]
fn test_copy_fields_through_parent() {
    let mapper = BeanMapper::default();
    let mut source = UserVo {
        user_id: Some(1),
        ..Default::default()
    };
    source.model.keywords = Some("k".to_string());
    source.model.pageable.page_size = 50;
    let mut dest = UserVo::default();
    mapper.copy_fields(&mut dest, &source).unwrap();
    assert_eq!(dest.user_id, Some(1));
    assert_eq!(dest.model.keywords.as_deref(), Some("k"));
    assert_eq!(dest.model.pageable.page_size, 50);
}
