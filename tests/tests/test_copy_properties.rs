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
use beankit_core::mapper::{BeanMapper, CopyOptions};
use beankit_derive::Bean;
use beankit_tests::{sample_user, AccountView, User, UserStatus, UserVo};

#[test]
fn test_base_copy() {
    let mapper = BeanMapper::default();
    let user = sample_user();
    let mut vo = UserVo::default();
    mapper.copy_properties(&mut vo, &user).unwrap();
    assert_eq!(vo.user_id, Some(10000));
    assert_eq!(vo.username.as_deref(), Some("selfly"));
    assert_eq!(vo.password.as_deref(), Some("123456"));
    assert_eq!(vo.age, 18);
    assert_eq!(vo.amount, Some(10086));
    assert_eq!(vo.status, Some(UserStatus::DisableLogin));
    assert_eq!(vo.gmt_create, user.gmt_create);
}

#[test]
fn test_enum_to_code() {
    let mapper = BeanMapper::default();
    let vo = UserVo {
        user_id: Some(7),
        status: Some(UserStatus::Inactive),
        ..Default::default()
    };
    let user: User = mapper.copy_to(&vo).unwrap();
    assert_eq!(user.user_id, Some(7));
    assert_eq!(user.status.as_deref(), Some("2"));
    assert_eq!(user.username, None);
}

#[test]
fn test_unknown_enum_code_leaves_destination() {
    let mapper = BeanMapper::default();
    let user = User {
        status: Some("9".to_string()),
        ..Default::default()
    };
    let mut vo = UserVo {
        status: Some(UserStatus::Normal),
        ..Default::default()
    };
    mapper.copy_properties(&mut vo, &user).unwrap();
    assert_eq!(vo.status, Some(UserStatus::Normal));
}

#[test]
fn test_null_source_is_skipped() {
    let mapper = BeanMapper::default();
    let user = User {
        user_id: Some(1),
        ..Default::default()
    };
    let mut vo = UserVo {
        username: Some("keep".to_string()),
        age: 30,
        ..Default::default()
    };
    mapper.copy_properties(&mut vo, &user).unwrap();
    assert_eq!(vo.user_id, Some(1));
    assert_eq!(vo.username.as_deref(), Some("keep"));
    assert_eq!(vo.age, 30);
}

#[test]
fn test_ignore_properties() {
    let mapper = BeanMapper::default();
    let user = sample_user();
    let mut vo = UserVo {
        password: Some("secret".to_string()),
        ..Default::default()
    };
    let mut options = CopyOptions::new().ignore_all(["password", "amount"]);
    mapper
        .copy_properties_with(&mut vo, &user, &mut options)
        .unwrap();
    assert_eq!(vo.password.as_deref(), Some("secret"));
    assert_eq!(vo.amount, None);
    assert_eq!(vo.username.as_deref(), Some("selfly"));
}

#[test]
fn test_post_hook_runs_once() {
    let mapper = BeanMapper::default();
    let user = sample_user();
    let mut vo = UserVo::default();
    let mut calls = 0;
    {
        let mut options = CopyOptions::new().post_hook(|source: &User, dest: &mut UserVo| {
            calls += 1;
            // the hook sees the finished copy
            assert_eq!(dest.age, 18);
            dest.username = source.username.as_ref().map(|s| s.to_uppercase());
        });
        mapper
            .copy_properties_with(&mut vo, &user, &mut options)
            .unwrap();
    }
    assert_eq!(calls, 1);
    assert_eq!(vo.username.as_deref(), Some("SELFLY"));
}

#[test]
fn test_unconverted_mismatch_names_property() {
    #[derive(Bean, Default)]
    struct Source {
        name: Option<String>,
        year: Option<String>,
    }

    #[derive(Bean, Default, Debug)]
    struct Dest {
        name: Option<String>,
        year: Option<i32>,
    }

    let mapper = BeanMapper::default();
    let source = Source {
        name: Some("a".to_string()),
        year: Some("5".to_string()),
    };
    let mut dest = Dest::default();
    let err = mapper.copy_properties(&mut dest, &source).unwrap_err();
    assert_eq!(err.property(), Some("year"));
    assert!(matches!(err, Error::BeanMapping { .. }));
    assert!(matches!(err.root_cause(), Error::TypeError(_)));
    // earlier properties stay written
    assert_eq!(dest.name.as_deref(), Some("a"));
    assert_eq!(dest.year, None);
}

#[test]
fn test_read_only_and_write_only() {
    #[derive(Bean, Default)]
    struct Source {
        id: Option<i64>,
        #[bean(write_only)]
        secret: Option<String>,
        created_by: Option<String>,
    }

    #[derive(Bean, Default)]
    struct Dest {
        id: Option<i64>,
        secret: Option<String>,
        #[bean(read_only)]
        created_by: Option<String>,
    }

    let mapper = BeanMapper::default();
    let source = Source {
        id: Some(3),
        secret: Some("s".to_string()),
        created_by: Some("admin".to_string()),
    };
    let mut dest = Dest::default();
    mapper.copy_properties(&mut dest, &source).unwrap();
    assert_eq!(dest.id, Some(3));
    assert_eq!(dest.secret, None);
    assert_eq!(dest.created_by, None);
}

#[test]
fn test_case_flip_lookup() {
    #[derive(Bean, Default)]
    struct Source {
        #[bean(rename = "UserName")]
        user_name: Option<String>,
    }

    #[derive(Bean, Default)]
    struct Dest {
        user_name: Option<String>,
    }

    let source = Source {
        user_name: Some("selfly".to_string()),
    };

    let mut dest = Dest::default();
    BeanMapper::default()
        .copy_properties(&mut dest, &source)
        .unwrap();
    assert_eq!(dest.user_name.as_deref(), Some("selfly"));

    let mut dest = Dest::default();
    BeanMapper::default()
        .lenient_lookup(false)
        .copy_properties(&mut dest, &source)
        .unwrap();
    assert_eq!(dest.user_name, None);
}

#[test]
fn test_unrelated_beans_share_nothing() {
    #[derive(Bean, Default)]
    struct Other {
        title: Option<String>,
    }

    let mapper = BeanMapper::default();
    let other = Other {
        title: Some("x".to_string()),
    };
    let view: AccountView = mapper.copy_to(&other).unwrap();
    assert_eq!(view.id, None);
    assert_eq!(view.login_name, None);
    assert_eq!(view.status, None);
}

#[test]
fn test_instantiation_failure() {
    fn refuse() -> Result<Strict, String> {
        Err("no default".to_string())
    }

    #[derive(Bean, Debug)]
    #[bean(new = refuse)]
    struct Strict {
        id: Option<i64>,
    }

    let mapper = BeanMapper::default();
    let err = mapper.copy_to::<Strict, _>(&sample_user()).unwrap_err();
    assert!(matches!(err, Error::BeanInstantiation { .. }));
    assert!(err.to_string().contains("no default"));
}
