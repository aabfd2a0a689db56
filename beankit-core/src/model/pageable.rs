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

use crate::bean::Bean;
use crate::error::Error;
use crate::meta::{BeanSchema, FieldInfo, PropertyInfo};
use crate::property::Property;
use crate::value::Value;

pub const DEFAULT_PAGE_SIZE: i32 = 20;
/// Upper bound for an unpaged query that must stay small.
pub const NON_PAGE_CAREFUL_SIZE: i32 = 100;
/// Upper bound for an unpaged query that may be large.
pub const NON_PAGE_CASUAL_SIZE: i32 = 500;

/// Paging request parameters.
///
/// Besides `pageNum` and `pageSize` it accepts the write-only short forms
/// `pn` and `ps`, so a query string map like `{"pn": 2}` maps straight in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pageable {
    pub page_num: i32,
    pub page_size: i32,
}

impl Default for Pageable {
    fn default() -> Self {
        Pageable {
            page_num: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pageable {
    pub fn new(page_num: i32, page_size: i32) -> Self {
        Pageable {
            page_num,
            page_size,
        }
    }
}

impl Bean for Pageable {
    fn bean_schema() -> BeanSchema {
        BeanSchema::new::<Pageable>()
            .property(PropertyInfo::of::<i32>("pageNum"))
            .property(PropertyInfo::of::<i32>("pageSize"))
            .property(PropertyInfo::of::<i32>("pn").write_only())
            .property(PropertyInfo::of::<i32>("ps").write_only())
            .field(FieldInfo::of::<i32>("page_num"))
            .field(FieldInfo::of::<i32>("page_size"))
    }

    fn instantiate() -> Result<Self, Error> {
        Ok(Pageable::default())
    }

    fn get_property(&self, name: &str) -> Result<Value, Error> {
        match name {
            "pageNum" => Ok(self.page_num.to_value()),
            "pageSize" => Ok(self.page_size.to_value()),
            "pn" | "ps" => Err(Error::not_readable(format!(
                "Pageable property '{}' is write only",
                name
            ))),
            _ => Err(Error::unknown_property(format!(
                "Pageable has no property '{}'",
                name
            ))),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), Error> {
        match name {
            "pageNum" | "pn" => self.page_num = i32::from_value(value)?,
            "pageSize" | "ps" => self.page_size = i32::from_value(value)?,
            _ => {
                return Err(Error::unknown_property(format!(
                    "Pageable has no property '{}'",
                    name
                )))
            }
        }
        Ok(())
    }

    fn get_field(&self, name: &str) -> Result<Value, Error> {
        match name {
            "page_num" => Ok(self.page_num.to_value()),
            "page_size" => Ok(self.page_size.to_value()),
            _ => Err(Error::unknown_property(format!(
                "Pageable has no field '{}'",
                name
            ))),
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), Error> {
        match name {
            "page_num" => self.page_num = i32::from_value(value)?,
            "page_size" => self.page_size = i32::from_value(value)?,
            _ => {
                return Err(Error::unknown_property(format!(
                    "Pageable has no field '{}'",
                    name
                )))
            }
        }
        Ok(())
    }
}
