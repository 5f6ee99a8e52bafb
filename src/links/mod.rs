//! Page URL builders
//!
//! Supports: Page number query parameter, Offset query parameter, Rewrite pattern
//!
//! # Overview
//!
//! A [`PageUrlBuilder`] turns a page of a pager into a link. The pager never
//! looks at URLs itself; builders are handed to whatever renders the page
//! list. Each builder also implements [`PagerFactory`], deriving the current
//! page number from its base URL.

mod builders;

pub use builders::{
    OffsetParameterUrlBuilder, PageParameterUrlBuilder, RewriteUrlBuilder, UrlBuilder,
    PAGE_PLACEHOLDER,
};

use crate::error::Result;
use crate::pagination::{Page, Pager, Paginator};

/// Core trait for URL strategies
pub trait PageUrlBuilder {
    /// Build the URL pointing at `page`
    fn build_url(&self, pager: &dyn Paginator, page: &Page) -> Result<String>;
}

/// Creates pagers positioned on the page a URL points at
pub trait PagerFactory {
    /// Create a pager with the page size and current page number set
    ///
    /// The total item count is left unset when `num_found` is `None`.
    fn create_pager(&self, num_found: Option<u64>) -> Result<Pager>;
}
