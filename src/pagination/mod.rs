//! Pagination module
//!
//! Supports: plain pagers, windowed (delta) page lists
//!
//! # Overview
//!
//! A [`Pager`] turns a page size, a total item count and a current page
//! number into pages, offsets and neighbour relationships. A
//! [`WindowedPager`] wraps any [`Paginator`] and only yields the pages that
//! should be rendered as links, e.g. `1 … 6 7 [8] 9 10 … 50`.

mod pager;
mod types;
mod window;

pub use pager::{Pager, Pages};
pub use types::{Page, PageIter, Paginator};
pub use window::{Window, WindowSelection, WindowedPager};
