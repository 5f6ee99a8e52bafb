//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pagekit command-line interface
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pager settings, overriding the configuration file
    #[command(flatten)]
    pub pager: PagerArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pager settings accepted on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct PagerArgs {
    /// Items per page
    #[arg(long, global = true)]
    pub per_page: Option<u64>,

    /// Total number of items
    #[arg(long, global = true)]
    pub num_found: Option<u64>,

    /// Current page number
    #[arg(long, global = true)]
    pub current_page: Option<u64>,

    /// Pages shown on each side of the current page (enables windowing)
    #[arg(long, global = true)]
    pub delta: Option<u64>,

    /// Do not always show the first page
    #[arg(long, global = true)]
    pub hide_first: bool,

    /// Do not always show the last page
    #[arg(long, global = true)]
    pub hide_last: bool,

    /// Base URL page links are derived from
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Where the page is encoded in the URL
    #[arg(long, global = true)]
    pub strategy: Option<UrlStrategy>,

    /// Query parameter name (page and offset strategies)
    #[arg(long, global = true)]
    pub param: Option<String>,

    /// Rewrite pattern containing a {page} placeholder
    #[arg(long, global = true)]
    pub pattern: Option<String>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the page list
    Pages,

    /// Print the URL of one page
    Url {
        /// Page number
        #[arg(long)]
        page: u64,
    },

    /// Validate the pager configuration
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}

/// URL strategy selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UrlStrategy {
    /// Page number in a query parameter
    Page,
    /// Item offset in a query parameter
    Offset,
    /// Page number in a path segment
    Rewrite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages_command() {
        let cli = Cli::parse_from([
            "pagekit",
            "pages",
            "--per-page",
            "10",
            "--num-found",
            "500",
            "--current-page",
            "25",
            "--delta",
            "2",
            "--format",
            "json",
        ]);

        assert!(matches!(cli.command, Commands::Pages));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.pager.per_page, Some(10));
        assert_eq!(cli.pager.delta, Some(2));
        assert!(!cli.pager.hide_first);
    }

    #[test]
    fn test_parse_url_command() {
        let cli = Cli::parse_from([
            "pagekit",
            "--base-url",
            "http://localhost/",
            "--strategy",
            "offset",
            "url",
            "--page",
            "3",
        ]);

        assert!(matches!(cli.command, Commands::Url { page: 3 }));
        assert_eq!(cli.pager.strategy, Some(UrlStrategy::Offset));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }
}
