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

use beankit_core::bean::CodedEnum;
use beankit_core::property::Property;
use beankit_core::types::TypeKind;
use beankit_core::value::Value;
use beankit_derive::CodedEnum;
use beankit_tests::UserStatus;

#[test]
fn test_from_code_is_exact() {
    assert_eq!(UserStatus::from_code("3"), Some(&UserStatus::DisableLogin));
    assert_eq!(UserStatus::from_code("1"), Some(&UserStatus::Normal));
    assert_eq!(UserStatus::from_code(" 3"), None);
    assert_eq!(UserStatus::from_code(""), None);
}

#[test]
fn test_constants_in_declaration_order() {
    let codes: Vec<_> = UserStatus::constants().iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec!["1", "2", "3"]);
    assert_eq!(UserStatus::Inactive.desc(), "inactive");
}

#[test]
fn test_property_type() {
    let ty = UserStatus::property_type();
    assert_eq!(ty.kind(), TypeKind::Enum);
    assert!(ty.is::<UserStatus>());
    let names: Vec<_> = ty.enum_constants().iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Normal", "Inactive", "DisableLogin"]);
}

#[test]
fn test_value_round_trip() {
    let value = UserStatus::DisableLogin.to_value();
    match &value {
        Value::Enum(e) => {
            assert_eq!(e.code, "3");
            assert_eq!(e.name, "DisableLogin");
        }
        other => panic!("unexpected value {:?}", other),
    }
    assert_eq!(UserStatus::from_value(value).unwrap(), UserStatus::DisableLogin);
    assert!(UserStatus::from_value(Value::from("3")).is_err());
}

#[test]
fn test_case_sensitive_codes() {
    #[derive(CodedEnum, Debug, PartialEq)]
    enum Grade {
        #[bean(code = "a")]
        Lower,
        #[bean(code = "A")]
        Upper,
    }

    assert_eq!(Grade::from_code("A"), Some(&Grade::Upper));
    assert_eq!(Grade::from_code("a"), Some(&Grade::Lower));
    assert_eq!(Grade::Lower.desc(), "");
}
