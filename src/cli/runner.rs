//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PagerArgs, UrlStrategy};
use crate::config::{load_config, PagerConfig, UrlConfig, WindowConfig};
use crate::error::{Error, Result};
use crate::links::PageUrlBuilder;
use crate::view::PagerView;
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        match &self.cli.command {
            Commands::Pages => self.pages(&config),
            Commands::Url { page } => self.url(&config, *page),
            Commands::Validate => self.validate(&config),
        }
    }

    /// Load the configuration file, then apply command-line overrides
    pub fn resolve_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PagerConfig::default(),
        };
        apply_overrides(&mut config, &self.cli.pager)?;
        config.validate()?;
        Ok(config)
    }

    /// Show the page list
    fn pages(&self, config: &PagerConfig) -> Result<()> {
        let urls = config.build_url_builder()?;
        let urls = urls.as_ref().map(|b| b as &dyn PageUrlBuilder);

        let view = match config.build_windowed()? {
            Some(windowed) => PagerView::build(&windowed, urls)?,
            None => PagerView::build(&config.build_pager()?, urls)?,
        };
        tracing::info!(
            page_count = view.page_count,
            visible = view.pages.len(),
            "computed page list"
        );

        match self.cli.format {
            OutputFormat::Json => self.output_message(&serde_json::to_value(&view)?),
            OutputFormat::Pretty => {
                println!(
                    "Page {} of {} ({} items, {} per page, offset {})",
                    view.current_page, view.page_count, view.num_found, view.per_page, view.offset
                );
                println!("{}", view.to_text());
                for link in view.pages.iter().filter(|l| l.url.is_some()) {
                    println!("{:>6}  {}", link.number, link.url.as_deref().unwrap_or_default());
                }
            }
        }
        Ok(())
    }

    /// Print the URL of one page
    fn url(&self, config: &PagerConfig, number: u64) -> Result<()> {
        let builder = config.build_url_builder()?.ok_or_else(|| {
            Error::config("No URL strategy configured (use --base-url or a config file)")
        })?;
        let pager = config.build_pager()?;
        let page = pager.try_page(number)?;
        let url = builder.build_url(&pager, &page)?;
        tracing::debug!(strategy = builder.kind(), page = number, "built url");

        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!({ "page": number, "url": url })),
            OutputFormat::Pretty => println!("{url}"),
        }
        Ok(())
    }

    /// Validate the configuration
    fn validate(&self, config: &PagerConfig) -> Result<()> {
        config.build_url_builder()?;
        config.build_pager()?;

        match self.cli.format {
            OutputFormat::Json => self.output_message(&json!({ "valid": true })),
            OutputFormat::Pretty => println!("Configuration is valid"),
        }
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
    }
}

/// Merge command-line settings into a configuration
pub(crate) fn apply_overrides(config: &mut PagerConfig, args: &PagerArgs) -> Result<()> {
    if args.per_page.is_some() {
        config.per_page = args.per_page;
    }
    if args.num_found.is_some() {
        config.num_found = args.num_found;
    }
    if args.current_page.is_some() {
        config.current_page = args.current_page;
    }

    if args.delta.is_some() || args.hide_first || args.hide_last {
        let window = config.window.get_or_insert_with(WindowConfig::default);
        if let Some(delta) = args.delta {
            window.delta = delta;
        }
        if args.hide_first {
            window.show_first_page = false;
        }
        if args.hide_last {
            window.show_last_page = false;
        }
    }

    if let Some(url) = url_override(config.url.as_ref(), args)? {
        config.url = Some(url);
    }
    Ok(())
}

/// URL strategy described by the command line, completed from the existing one
fn url_override(existing: Option<&UrlConfig>, args: &PagerArgs) -> Result<Option<UrlConfig>> {
    if args.base_url.is_none()
        && args.strategy.is_none()
        && args.param.is_none()
        && args.pattern.is_none()
    {
        return Ok(None);
    }

    let (existing_base, existing_strategy) = match existing {
        Some(UrlConfig::PageParameter { base_url, .. }) => (Some(base_url), UrlStrategy::Page),
        Some(UrlConfig::OffsetParameter { base_url, .. }) => {
            (Some(base_url), UrlStrategy::Offset)
        }
        Some(UrlConfig::Rewrite { base_url, .. }) => (Some(base_url), UrlStrategy::Rewrite),
        None => (None, UrlStrategy::Page),
    };

    let base_url = args
        .base_url
        .clone()
        .or_else(|| existing_base.cloned())
        .ok_or_else(|| Error::missing_field("base_url"))?;
    let strategy = args.strategy.unwrap_or(existing_strategy);

    // A parameter name only carries over when the strategy is unchanged
    let existing_param = match existing {
        Some(UrlConfig::PageParameter { param, .. } | UrlConfig::OffsetParameter { param, .. })
            if strategy == existing_strategy =>
        {
            Some(param.clone())
        }
        _ => None,
    };
    let existing_pattern = match existing {
        Some(UrlConfig::Rewrite { pattern, .. }) => Some(pattern.clone()),
        _ => None,
    };

    let url = match strategy {
        UrlStrategy::Page => UrlConfig::PageParameter {
            base_url,
            param: args
                .param
                .clone()
                .or(existing_param)
                .unwrap_or_else(|| "page".to_string()),
        },
        UrlStrategy::Offset => UrlConfig::OffsetParameter {
            base_url,
            param: args
                .param
                .clone()
                .or(existing_param)
                .unwrap_or_else(|| "offset".to_string()),
        },
        UrlStrategy::Rewrite => UrlConfig::Rewrite {
            base_url,
            pattern: args
                .pattern
                .clone()
                .or(existing_pattern)
                .ok_or_else(|| Error::missing_field("pattern"))?,
        },
    };
    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> PagerArgs {
        let mut full = vec!["pagekit"];
        full.extend_from_slice(argv);
        full.push("pages");
        Cli::parse_from(full).pager
    }

    #[test]
    fn test_overrides_fill_empty_config() {
        let mut config = PagerConfig::default();
        apply_overrides(
            &mut config,
            &args(&["--per-page", "10", "--num-found", "500", "--delta", "2", "--hide-last"]),
        )
        .unwrap();

        assert_eq!(config.per_page, Some(10));
        assert_eq!(config.num_found, Some(500));
        let window = config.window.unwrap();
        assert_eq!(window.delta, 2);
        assert!(window.show_first_page);
        assert!(!window.show_last_page);
        assert!(config.url.is_none());
    }

    #[test]
    fn test_overrides_keep_file_values() {
        let mut config = PagerConfig {
            per_page: Some(20),
            num_found: Some(100),
            url: Some(UrlConfig::OffsetParameter {
                base_url: "http://localhost/?start=40".to_string(),
                param: "start".to_string(),
            }),
            ..Default::default()
        };
        apply_overrides(&mut config, &args(&["--num-found", "300"])).unwrap();

        assert_eq!(config.per_page, Some(20));
        assert_eq!(config.num_found, Some(300));
        assert!(config.window.is_none());
        assert!(matches!(config.url, Some(UrlConfig::OffsetParameter { .. })));
    }

    #[test]
    fn test_url_override_completes_existing() {
        let mut config = PagerConfig {
            url: Some(UrlConfig::OffsetParameter {
                base_url: "http://localhost/?start=40".to_string(),
                param: "start".to_string(),
            }),
            ..Default::default()
        };
        apply_overrides(&mut config, &args(&["--base-url", "http://example.com/"])).unwrap();

        assert_eq!(
            config.url,
            Some(UrlConfig::OffsetParameter {
                base_url: "http://example.com/".to_string(),
                param: "start".to_string(),
            })
        );
    }

    #[test]
    fn test_url_override_requires_base_url_and_pattern() {
        let mut config = PagerConfig::default();
        let err = apply_overrides(&mut config, &args(&["--param", "p"])).unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { .. }));

        let err = apply_overrides(
            &mut config,
            &args(&["--base-url", "/blog", "--strategy", "rewrite"]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { .. }));
    }
}
