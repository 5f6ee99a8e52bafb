//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by the pager and its
//! decorators.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// One page of a paginated collection
///
/// Pages are produced by a [`Paginator`]. A page built by hand with
/// [`Page::new`] carries no item count; reading it fails with
/// [`Error::ItemCountUnset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Page {
    number: u64,
    item_count: Option<u64>,
}

impl Page {
    /// Create a page without an item count
    pub fn new(number: u64) -> Self {
        Self {
            number,
            item_count: None,
        }
    }

    /// Create a page holding `item_count` items
    pub fn with_item_count(number: u64, item_count: u64) -> Self {
        Self {
            number,
            item_count: Some(item_count),
        }
    }

    /// 1-based page number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Number of items on this page
    pub fn item_count(&self) -> Result<u64> {
        self.item_count
            .ok_or(Error::ItemCountUnset { page: self.number })
    }

    /// Check if an item count was provided
    pub fn has_item_count(&self) -> bool {
        self.item_count.is_some()
    }

    /// Check if the page holds no items
    ///
    /// A page without an item count is not considered empty.
    pub fn is_empty(&self) -> bool {
        self.item_count == Some(0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Lazy sequence of pages yielded by [`Paginator::pages`]
pub type PageIter<'a> = Box<dyn Iterator<Item = Page> + 'a>;

/// Core trait for pagers
///
/// Every value is derived from the current configuration on each call, so
/// changing `per_page`, `num_found` or the current page number is reflected
/// by the next query. Reading a value that was never configured fails with
/// [`Error::ConfigurationMissing`].
pub trait Paginator {
    /// Number of items per page
    fn per_page(&self) -> Result<u64>;

    /// Total number of items across all pages
    fn num_found(&self) -> Result<u64>;

    /// 1-based number of the current page
    fn current_page_number(&self) -> Result<u64>;

    /// Set the page size, clamping negative values to zero
    fn set_per_page(&mut self, per_page: i64) -> &mut Self
    where
        Self: Sized;

    /// Set the total item count, clamping negative values to zero
    fn set_num_found(&mut self, num_found: i64) -> &mut Self
    where
        Self: Sized;

    /// Set the current page number, clamping negative values to zero
    fn set_current_page_number(&mut self, current_page_number: i64) -> &mut Self
    where
        Self: Sized;

    /// Total number of pages, never less than 1
    fn page_count(&self) -> Result<u64>;

    /// Offset of the first item of the current page
    fn offset(&self) -> Result<u64>;

    /// Page with the given number
    ///
    /// Pages past the last one are returned with an item count of 0.
    fn page(&self, number: u64) -> Result<Page>;

    /// Iterate over the pages, in ascending order
    fn pages(&self) -> Result<PageIter<'_>>;

    /// Collect [`Paginator::pages`] into a vector
    fn as_vec(&self) -> Result<Vec<Page>> {
        Ok(self.pages()?.collect())
    }

    fn current_page(&self) -> Result<Page> {
        self.page(self.current_page_number()?)
    }

    fn first_page(&self) -> Result<Page> {
        self.page(1)
    }

    fn last_page(&self) -> Result<Page> {
        self.page(self.page_count()?)
    }

    /// Page before the current one, `None` on the first page
    fn previous_page(&self) -> Result<Option<Page>> {
        match self.current_page_number()? {
            0 | 1 => Ok(None),
            current => self.page(current - 1).map(Some),
        }
    }

    /// Page after the current one, `None` on the last page
    fn next_page(&self) -> Result<Option<Page>> {
        let current = self.current_page_number()?;
        if current == self.page_count()? {
            return Ok(None);
        }
        match current.checked_add(1) {
            Some(next) => self.page(next).map(Some),
            None => Ok(None),
        }
    }

    fn is_first_page(&self, page: &Page) -> bool {
        page.number() == 1
    }

    fn is_last_page(&self, page: &Page) -> Result<bool> {
        Ok(page.number() == self.page_count()?)
    }

    fn is_current_page(&self, page: &Page) -> Result<bool> {
        Ok(page.number() == self.current_page_number()?)
    }

    fn is_previous_page(&self, page: &Page) -> Result<bool> {
        Ok(page.number().checked_add(1) == Some(self.current_page_number()?))
    }

    fn is_next_page(&self, page: &Page) -> Result<bool> {
        Ok(self.current_page_number()?.checked_add(1) == Some(page.number()))
    }

    /// Offset of the first item of an arbitrary page
    fn page_offset(&self, page: &Page) -> Result<u64> {
        Ok(page.number().saturating_sub(1).saturating_mul(self.per_page()?))
    }
}

// Lets a decorator borrow a pager while its owner keeps it.
impl<P: Paginator> Paginator for &mut P {
    fn per_page(&self) -> Result<u64> {
        (**self).per_page()
    }

    fn num_found(&self) -> Result<u64> {
        (**self).num_found()
    }

    fn current_page_number(&self) -> Result<u64> {
        (**self).current_page_number()
    }

    fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        (**self).set_per_page(per_page);
        self
    }

    fn set_num_found(&mut self, num_found: i64) -> &mut Self {
        (**self).set_num_found(num_found);
        self
    }

    fn set_current_page_number(&mut self, current_page_number: i64) -> &mut Self {
        (**self).set_current_page_number(current_page_number);
        self
    }

    fn page_count(&self) -> Result<u64> {
        (**self).page_count()
    }

    fn offset(&self) -> Result<u64> {
        (**self).offset()
    }

    fn page(&self, number: u64) -> Result<Page> {
        (**self).page(number)
    }

    fn pages(&self) -> Result<PageIter<'_>> {
        (**self).pages()
    }

    fn current_page(&self) -> Result<Page> {
        (**self).current_page()
    }

    fn first_page(&self) -> Result<Page> {
        (**self).first_page()
    }

    fn last_page(&self) -> Result<Page> {
        (**self).last_page()
    }

    fn previous_page(&self) -> Result<Option<Page>> {
        (**self).previous_page()
    }

    fn next_page(&self) -> Result<Option<Page>> {
        (**self).next_page()
    }

    fn is_first_page(&self, page: &Page) -> bool {
        (**self).is_first_page(page)
    }

    fn is_last_page(&self, page: &Page) -> Result<bool> {
        (**self).is_last_page(page)
    }

    fn is_current_page(&self, page: &Page) -> Result<bool> {
        (**self).is_current_page(page)
    }

    fn is_previous_page(&self, page: &Page) -> Result<bool> {
        (**self).is_previous_page(page)
    }

    fn is_next_page(&self, page: &Page) -> Result<bool> {
        (**self).is_next_page(page)
    }

    fn page_offset(&self, page: &Page) -> Result<u64> {
        (**self).page_offset(page)
    }
}
