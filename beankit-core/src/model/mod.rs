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

//! Ready-made beans and page containers.
//!
//! [`Pageable`] and [`Model`] implement [`Bean`](crate::bean::Bean) by hand,
//! without the derive macro.

mod base;
mod page;
mod pageable;

pub use base::Model;
pub use page::{Page, Pagination, DEFAULT_SLIDER_SIZE, UNKNOWN_ITEMS};
pub use pageable::{Pageable, DEFAULT_PAGE_SIZE, NON_PAGE_CAREFUL_SIZE, NON_PAGE_CASUAL_SIZE};
