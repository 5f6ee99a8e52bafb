// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # pagekit
//!
//! Pagination arithmetic, windowed page lists and page URL builders.
//!
//! ## Features
//!
//! - **Pager**: page count, offsets, first/previous/current/next/last pages
//! - **Windowed pages**: `1 … 23 24 [25] 26 27 … 50` style page lists
//! - **URL builders**: page number parameter, offset parameter, rewrite pattern
//! - **Views**: serializable snapshots ready for templates or JSON APIs
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{Pager, Paginator, WindowedPager};
//!
//! let pager = Pager::with_config(10, 25, 500);
//! assert_eq!(pager.page_count().unwrap(), 50);
//! assert_eq!(pager.offset().unwrap(), 240);
//!
//! let windowed = WindowedPager::new(pager).with_delta(2);
//! let visible: Vec<u64> = windowed.pages().unwrap().map(|p| p.number()).collect();
//! assert_eq!(visible, vec![1, 23, 24, 25, 26, 27, 50]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Paginator trait                       │
//! │  page_count()  offset()  page(n)  pages()  previous/next │
//! └──────────────────────────────────────────────────────────┘
//!                │                          │
//! ┌──────────────┴─────────┐   ┌────────────┴─────────────┐
//! │         Pager          │   │      WindowedPager       │
//! │  per_page, num_found,  │◄──│  delta, show_first_page, │
//! │  current_page_number   │   │  show_last_page          │
//! └────────────────────────┘   └──────────────────────────┘
//!                │
//! ┌──────────────┴───────────────────────────────────────────┐
//! │       PageUrlBuilder / PagerFactory strategies           │
//! │  page parameter │ offset parameter │ rewrite pattern     │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pager arithmetic and windowing
pub mod pagination;

/// Page URL builders
pub mod links;

/// Serializable pager snapshots
pub mod view;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use links::{
    OffsetParameterUrlBuilder, PageParameterUrlBuilder, PageUrlBuilder, PagerFactory,
    RewriteUrlBuilder, UrlBuilder,
};
pub use pagination::{Page, Pager, Paginator, WindowedPager};
pub use view::{PageLink, PagerView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
