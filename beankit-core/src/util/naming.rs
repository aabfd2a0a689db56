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

//! Property name transforms.

/// First character lowered, the rest untouched.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character raised, the rest untouched.
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Camel-case form of a delimited key: `login_name` becomes `loginName`.
///
/// The first segment is lowercased, every following segment is lowercased
/// with its first character raised. Empty segments are dropped.
pub fn camel_name(name: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(name.len());
    for segment in name.split(delimiter).filter(|s| !s.is_empty()) {
        let lower = segment.to_lowercase();
        if result.is_empty() {
            result.push_str(&lower);
        } else {
            result.push_str(&upper_first(&lower));
        }
    }
    result
}

/// Converts a Rust snake_case identifier to lowerCamelCase, keeping the
/// case of every other character.
pub fn to_camel_case(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len());
    let mut upper_next = false;
    for c in ident.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
