//! CLI module
//!
//! Command-line interface for inspecting pagers.
//!
//! # Commands
//!
//! - `pages` - Show the (windowed) page list
//! - `url` - Print the URL of one page
//! - `validate` - Check a pager configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PagerArgs, UrlStrategy};
pub use runner::Runner;
