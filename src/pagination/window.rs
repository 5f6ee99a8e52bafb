//! Windowed pager
//!
//! [`WindowedPager`] narrows the page sequence of another [`Paginator`] to the
//! pages worth linking to: the anchors, the current page and `delta` pages on
//! each side of it.
//!
//! ```text
//! delta = 2, 50 pages
//!
//! current = 2   →  1 2 3 4 5 … 50
//! current = 25  →  1 … 23 24 25 26 27 … 50
//! current = 49  →  1 … 46 47 48 49 50
//! ```

use super::types::{Page, PageIter, Paginator};
use crate::error::Result;

/// Decorator that only yields the pages of a display window
///
/// Everything except iteration is forwarded to the wrapped pager. Wrap a
/// `&mut Pager` to keep ownership of the pager outside the decorator.
#[derive(Debug, Clone)]
pub struct WindowedPager<P> {
    pager: P,
    delta: u64,
    show_first_page: bool,
    show_last_page: bool,
}

impl<P: Paginator> WindowedPager<P> {
    /// Wrap a pager with a delta of 0, showing both anchor pages
    pub fn new(pager: P) -> Self {
        Self {
            pager,
            delta: 0,
            show_first_page: true,
            show_last_page: true,
        }
    }

    /// Set how many pages to show on each side of the current page
    #[must_use]
    pub fn with_delta(mut self, delta: u64) -> Self {
        self.delta = delta;
        self
    }

    /// Set whether the first page is always shown
    #[must_use]
    pub fn show_first_page(mut self, show: bool) -> Self {
        self.show_first_page = show;
        self
    }

    /// Set whether the last page is always shown
    #[must_use]
    pub fn show_last_page(mut self, show: bool) -> Self {
        self.show_last_page = show;
        self
    }

    pub fn delta(&self) -> u64 {
        self.delta
    }

    pub fn shows_first_page(&self) -> bool {
        self.show_first_page
    }

    pub fn shows_last_page(&self) -> bool {
        self.show_last_page
    }

    /// Access the wrapped pager
    pub fn inner(&self) -> &P {
        &self.pager
    }

    /// Access the wrapped pager mutably
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.pager
    }

    /// Unwrap the decorator
    pub fn into_inner(self) -> P {
        self.pager
    }

    /// Compute the window bounds from the wrapped pager's current state
    pub fn selection(&self) -> Result<WindowSelection> {
        let selection = WindowSelection {
            current: self.pager.current_page()?.number(),
            first: self.pager.first_page()?.number(),
            last: self.pager.last_page()?.number(),
            delta: self.delta,
            show_first_page: self.show_first_page,
            show_last_page: self.show_last_page,
        };
        tracing::trace!(
            current = selection.current,
            last = selection.last,
            delta = selection.delta,
            "computed page window"
        );
        Ok(selection)
    }

    /// Iterate over the visible pages
    pub fn window(&self) -> Result<Window<'_>> {
        Ok(Window {
            pages: self.pager.pages()?,
            selection: self.selection()?,
        })
    }
}

impl<P: Paginator> Paginator for WindowedPager<P> {
    fn per_page(&self) -> Result<u64> {
        self.pager.per_page()
    }

    fn num_found(&self) -> Result<u64> {
        self.pager.num_found()
    }

    fn current_page_number(&self) -> Result<u64> {
        self.pager.current_page_number()
    }

    fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.pager.set_per_page(per_page);
        self
    }

    fn set_num_found(&mut self, num_found: i64) -> &mut Self {
        self.pager.set_num_found(num_found);
        self
    }

    fn set_current_page_number(&mut self, current_page_number: i64) -> &mut Self {
        self.pager.set_current_page_number(current_page_number);
        self
    }

    fn page_count(&self) -> Result<u64> {
        self.pager.page_count()
    }

    fn offset(&self) -> Result<u64> {
        self.pager.offset()
    }

    fn page(&self, number: u64) -> Result<Page> {
        self.pager.page(number)
    }

    fn pages(&self) -> Result<PageIter<'_>> {
        Ok(Box::new(self.window()?))
    }

    fn current_page(&self) -> Result<Page> {
        self.pager.current_page()
    }

    fn first_page(&self) -> Result<Page> {
        self.pager.first_page()
    }

    fn last_page(&self) -> Result<Page> {
        self.pager.last_page()
    }

    fn previous_page(&self) -> Result<Option<Page>> {
        self.pager.previous_page()
    }

    fn next_page(&self) -> Result<Option<Page>> {
        self.pager.next_page()
    }

    fn is_first_page(&self, page: &Page) -> bool {
        self.pager.is_first_page(page)
    }

    fn is_last_page(&self, page: &Page) -> Result<bool> {
        self.pager.is_last_page(page)
    }

    fn is_current_page(&self, page: &Page) -> Result<bool> {
        self.pager.is_current_page(page)
    }

    fn is_previous_page(&self, page: &Page) -> Result<bool> {
        self.pager.is_previous_page(page)
    }

    fn is_next_page(&self, page: &Page) -> Result<bool> {
        self.pager.is_next_page(page)
    }

    fn page_offset(&self, page: &Page) -> Result<u64> {
        self.pager.page_offset(page)
    }
}

/// Window bounds captured from a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSelection {
    pub current: u64,
    pub first: u64,
    pub last: u64,
    pub delta: u64,
    pub show_first_page: bool,
    pub show_last_page: bool,
}

impl WindowSelection {
    /// Highest page of the leading run shown when the current page is near
    /// the start
    pub fn left_border(&self) -> u64 {
        self.first.saturating_add(self.delta.saturating_mul(2))
    }

    /// Lowest page of the trailing run shown when the current page is near
    /// the end
    pub fn right_border(&self) -> u64 {
        self.last.saturating_sub(self.delta.saturating_mul(2))
    }

    /// Check if page `number` belongs to the window
    pub fn includes(&self, number: u64) -> bool {
        let current = self.current;
        let left_border = self.left_border();
        let right_border = self.right_border();

        (self.show_first_page && number == self.first)
            || (self.show_last_page && number == self.last)
            || number == current
            || (number < current && number >= current.saturating_sub(self.delta))
            || (number > current && number <= current.saturating_add(self.delta))
            || (current <= left_border && number <= left_border)
            || (current >= right_border && number >= right_border)
    }
}

/// Iterator over the pages of a [`WindowedPager`]
pub struct Window<'a> {
    pages: PageIter<'a>,
    selection: WindowSelection,
}

impl Window<'_> {
    pub fn selection(&self) -> &WindowSelection {
        &self.selection
    }
}

impl Iterator for Window<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let selection = self.selection;
        self.pages.find(|page| selection.includes(page.number()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pages.size_hint().1)
    }
}

impl std::fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
