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

use std::fmt;

use crate::model::DEFAULT_PAGE_SIZE;

pub const DEFAULT_SLIDER_SIZE: i32 = 7;
/// Total item count used when the real count is not known.
pub const UNKNOWN_ITEMS: i32 = i32::MAX;

/// Page position inside a result set of known (or unknown) size.
///
/// The page number is always clamped to `1..=pages()`, or `0` when there
/// are no pages at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page_num: i32,
    page_size: i32,
    total_items: i32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::with_page_size(0)
    }
}

impl Pagination {
    /// `page_size <= 0` falls back to the default page size, a negative
    /// `total_items` counts as zero.
    pub fn new(page_size: i32, total_items: i32) -> Self {
        let mut pagination = Pagination {
            page_num: 0,
            page_size: if page_size > 0 {
                page_size
            } else {
                DEFAULT_PAGE_SIZE
            },
            total_items: total_items.max(0),
        };
        pagination.page_num = pagination.calc_page(0);
        pagination
    }

    pub fn with_page_size(page_size: i32) -> Self {
        Pagination::new(page_size, UNKNOWN_ITEMS)
    }

    pub fn pages(&self) -> i32 {
        let size = self.page_size as i64;
        ((self.total_items as i64 + size - 1) / size) as i32
    }

    pub fn page_num(&self) -> i32 {
        self.page_num
    }

    pub fn set_page_num(&mut self, page_num: i32) -> i32 {
        self.page_num = self.calc_page(page_num);
        self.page_num
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Changes the page size, keeping the first item of the current page
    /// on the new current page.
    pub fn set_page_size(&mut self, page_size: i32) -> i32 {
        let previous = self.page_size;
        self.page_size = if page_size > 0 {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        if self.page_num > 0 {
            let first_item = (self.page_num as i64 - 1) * previous as i64;
            self.set_page_num((first_item / self.page_size as i64) as i32 + 1);
        }
        self.page_size
    }

    pub fn total_items(&self) -> i32 {
        self.total_items
    }

    pub fn set_total_items(&mut self, total_items: i32) -> i32 {
        self.total_items = total_items.max(0);
        self.set_page_num(self.page_num);
        self.total_items
    }

    /// Index of the first item of the current page.
    pub fn offset(&self) -> i32 {
        if self.page_num > 0 {
            self.page_size * (self.page_num - 1)
        } else {
            0
        }
    }

    /// Moves to the page holding item `offset`.
    pub fn set_offset(&mut self, offset: i32) -> i32 {
        self.set_page_num((offset / self.page_size).saturating_add(1))
    }

    /// Number of items on the current page.
    pub fn length(&self) -> i32 {
        self.end_index() - self.offset()
    }

    /// Exclusive end index of the current page.
    pub fn end_index(&self) -> i32 {
        if self.page_num > 0 {
            (self.page_size as i64 * self.page_num as i64).min(self.total_items as i64) as i32
        } else {
            0
        }
    }

    pub fn first_page(&self) -> i32 {
        self.calc_page(1)
    }

    pub fn last_page(&self) -> i32 {
        self.calc_page(self.pages())
    }

    pub fn previous_page(&self) -> i32 {
        self.calc_page(self.page_num - 1)
    }

    pub fn next_page(&self) -> i32 {
        self.calc_page(self.page_num.saturating_add(1))
    }

    /// Whether `page` is out of range or the current page.
    pub fn is_disabled_page(&self, page: i32) -> bool {
        page < 1 || page > self.pages() || page == self.page_num
    }

    /// Up to `width` consecutive page numbers centred on the current page.
    pub fn slider(&self, width: i32) -> Vec<i32> {
        let pages = self.pages();
        if pages < 1 || width < 1 {
            return Vec::new();
        }
        let width = width.min(pages);
        let mut first = (self.page_num - (width - 1) / 2).max(1);
        if first + width - 1 > pages {
            first = pages - width + 1;
        }
        (first..first + width).collect()
    }

    fn calc_page(&self, page_num: i32) -> i32 {
        let pages = self.pages();
        if pages > 0 {
            page_num.clamp(1, pages)
        } else {
            0
        }
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page ")?;
        if self.pages() < 1 {
            write!(f, "{}", self.page_num)?;
        } else {
            let slider = self.slider(DEFAULT_SLIDER_SIZE);
            for (i, page) in slider.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if self.is_disabled_page(*page) {
                    write!(f, "[{}]", page)?;
                } else {
                    write!(f, "{}", page)?;
                }
            }
        }
        write!(
            f,
            " of {}, items {} to {} (total {}), offset={}, length={}",
            self.pages(),
            self.offset(),
            self.end_index(),
            self.total_items,
            self.offset(),
            self.length()
        )
    }
}

/// One page of results together with its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, pagination: Pagination) -> Self {
        Page { list, pagination }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
