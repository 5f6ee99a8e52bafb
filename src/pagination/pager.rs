//! Pager arithmetic
//!
//! [`Pager`] holds the page size, the total item count and the current page
//! number, and derives everything else from them on demand.

use super::types::{Page, PageIter, Paginator};
use crate::error::{Error, Result};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Pagination state for one listing
///
/// All three settings start unset. Reading a derived value that depends on
/// an unset setting fails with [`Error::ConfigurationMissing`] rather than
/// assuming zero.
///
/// A current page number past the last page is accepted: the current page is
/// then empty and [`Paginator::offset`] points beyond the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    per_page: Option<u64>,
    num_found: Option<u64>,
    current_page_number: Option<u64>,
}

impl Pager {
    /// Create a pager with nothing configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fully configured pager
    pub fn with_config(per_page: u64, current_page_number: u64, num_found: u64) -> Self {
        Self {
            per_page: Some(per_page),
            num_found: Some(num_found),
            current_page_number: Some(current_page_number),
        }
    }

    /// Create a pager where any setting may be left unset
    pub fn from_parts(
        per_page: Option<u64>,
        current_page_number: Option<u64>,
        num_found: Option<u64>,
    ) -> Self {
        Self {
            per_page,
            num_found,
            current_page_number,
        }
    }

    /// Check if page size, item count and current page are all set
    pub fn is_configured(&self) -> bool {
        self.per_page.is_some() && self.num_found.is_some() && self.current_page_number.is_some()
    }

    /// Page with the given number, rejecting pages outside `1..=page_count`
    pub fn try_page(&self, number: u64) -> Result<Page> {
        let page_count = self.page_count()?;
        if number == 0 || number > page_count {
            return Err(Error::out_of_range(number, page_count));
        }
        self.page(number)
    }

    /// Iterate over every page, from 1 to [`Paginator::page_count`]
    ///
    /// The iterator is a snapshot of the current configuration; calling
    /// `iter` again after a change starts over with the new values.
    pub fn iter(&self) -> Result<Pages> {
        let per_page = self.per_page()?;
        let num_found = self.num_found()?;
        Ok(Pages::new(per_page, num_found))
    }
}

impl Paginator for Pager {
    fn per_page(&self) -> Result<u64> {
        self.per_page.ok_or_else(|| Error::missing_field("per_page"))
    }

    fn num_found(&self) -> Result<u64> {
        self.num_found
            .ok_or_else(|| Error::missing_field("num_found"))
    }

    fn current_page_number(&self) -> Result<u64> {
        self.current_page_number
            .ok_or_else(|| Error::missing_field("current_page_number"))
    }

    fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.per_page = Some(clamp(per_page));
        self
    }

    fn set_num_found(&mut self, num_found: i64) -> &mut Self {
        self.num_found = Some(clamp(num_found));
        self
    }

    fn set_current_page_number(&mut self, current_page_number: i64) -> &mut Self {
        self.current_page_number = Some(clamp(current_page_number));
        self
    }

    fn page_count(&self) -> Result<u64> {
        Ok(page_count(self.per_page()?, self.num_found()?))
    }

    fn offset(&self) -> Result<u64> {
        let current = self.current_page_number()?;
        Ok(current.saturating_sub(1).saturating_mul(self.per_page()?))
    }

    fn page(&self, number: u64) -> Result<Page> {
        let per_page = self.per_page()?;
        let num_found = self.num_found()?;
        let item_count = items_on(number, per_page, num_found, page_count(per_page, num_found));
        Ok(Page::with_item_count(number, item_count))
    }

    fn pages(&self) -> Result<PageIter<'_>> {
        Ok(Box::new(self.iter()?))
    }
}

fn clamp(value: i64) -> u64 {
    value.max(0) as u64
}

/// `max(1, ceil(num_found / per_page))`, or 1 when `per_page` is 0
pub(crate) fn page_count(per_page: u64, num_found: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }
    num_found.div_ceil(per_page).max(1)
}

/// Number of items physically present on page `number`
pub(crate) fn items_on(number: u64, per_page: u64, num_found: u64, page_count: u64) -> u64 {
    if number == 0 || number > page_count {
        return 0;
    }
    if number == page_count {
        let before = (number - 1).saturating_mul(per_page);
        return num_found.saturating_sub(before).min(per_page);
    }
    per_page
}

/// Iterator over the pages of a [`Pager`]
#[derive(Debug, Clone)]
pub struct Pages {
    per_page: u64,
    num_found: u64,
    page_count: u64,
    numbers: RangeInclusive<u64>,
}

impl Pages {
    fn new(per_page: u64, num_found: u64) -> Self {
        let page_count = page_count(per_page, num_found);
        Self {
            per_page,
            num_found,
            page_count,
            numbers: 1..=page_count,
        }
    }

    fn make(&self, number: u64) -> Page {
        let item_count = items_on(number, self.per_page, self.num_found, self.page_count);
        Page::with_item_count(number, item_count)
    }
}

impl Iterator for Pages {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let number = self.numbers.next()?;
        Some(self.make(number))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbers.size_hint()
    }
}

impl DoubleEndedIterator for Pages {
    fn next_back(&mut self) -> Option<Page> {
        let number = self.numbers.next_back()?;
        Some(self.make(number))
    }
}

impl ExactSizeIterator for Pages {}

impl FusedIterator for Pages {}
