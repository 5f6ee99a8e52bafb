//! Configuration types for pagers
//!
//! This module contains the structures used to describe a pager, its window
//! and its URL strategy in YAML or JSON.

use crate::error::{Error, Result};
use crate::links::{
    OffsetParameterUrlBuilder, PageParameterUrlBuilder, PagerFactory, RewriteUrlBuilder,
    UrlBuilder, PAGE_PLACEHOLDER,
};
use crate::pagination::{Pager, Paginator, WindowedPager};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Pager Config
// ============================================================================

/// Complete pager configuration
///
/// Every field is optional. A pager built from an incomplete configuration
/// reports what is missing the first time the value is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Items per page
    #[serde(default)]
    pub per_page: Option<u64>,

    /// Total number of items
    #[serde(default)]
    pub num_found: Option<u64>,

    /// Current page number; derived from `url.base_url` when absent
    #[serde(default)]
    pub current_page: Option<u64>,

    /// Window settings; the full page list is used when absent
    #[serde(default)]
    pub window: Option<WindowConfig>,

    /// URL strategy
    #[serde(default)]
    pub url: Option<UrlConfig>,
}

impl PagerConfig {
    /// Build the pager described by this configuration
    pub fn build_pager(&self) -> Result<Pager> {
        let mut pager = match self.build_url_builder()? {
            Some(builder) => builder.create_pager(self.num_found)?,
            None => Pager::from_parts(self.per_page, None, self.num_found),
        };
        if let Some(current) = self.current_page {
            pager.set_current_page_number(i64::try_from(current).unwrap_or(i64::MAX));
        }
        Ok(pager)
    }

    /// Build the pager wrapped in its window, if one is configured
    pub fn build_windowed(&self) -> Result<Option<WindowedPager<Pager>>> {
        let Some(window) = &self.window else {
            return Ok(None);
        };
        Ok(Some(window.apply(self.build_pager()?)))
    }

    /// Build the configured URL builder
    pub fn build_url_builder(&self) -> Result<Option<UrlBuilder>> {
        let Some(url) = &self.url else {
            return Ok(None);
        };
        let per_page = self.per_page.ok_or_else(|| Error::missing_field("per_page"))?;
        url.build(per_page).map(Some)
    }

    /// Check the configuration for values that can never work
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.url {
            url.validate()?;
        }
        if self.url.is_some() && self.per_page.is_none() {
            return Err(Error::missing_field("per_page"));
        }
        if self.current_page == Some(0) {
            return Err(Error::invalid_value("current_page", "page numbers start at 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Window Config
// ============================================================================

/// Window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Pages shown on each side of the current page
    #[serde(default)]
    pub delta: u64,

    /// Always show the first page
    #[serde(default = "default_true")]
    pub show_first_page: bool,

    /// Always show the last page
    #[serde(default = "default_true")]
    pub show_last_page: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            delta: 0,
            show_first_page: true,
            show_last_page: true,
        }
    }
}

impl WindowConfig {
    /// Wrap a pager in a window with these settings
    pub fn apply<P: Paginator>(&self, pager: P) -> WindowedPager<P> {
        WindowedPager::new(pager)
            .with_delta(self.delta)
            .show_first_page(self.show_first_page)
            .show_last_page(self.show_last_page)
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// URL Config
// ============================================================================

/// URL strategy definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UrlConfig {
    /// Page number in a query parameter
    PageParameter {
        base_url: String,
        #[serde(default = "default_page_param")]
        param: String,
    },

    /// Item offset in a query parameter
    OffsetParameter {
        base_url: String,
        #[serde(default = "default_offset_param")]
        param: String,
    },

    /// Page number in a path segment
    Rewrite { base_url: String, pattern: String },
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_offset_param() -> String {
    "offset".to_string()
}

impl UrlConfig {
    fn base_url(&self) -> &str {
        match self {
            Self::PageParameter { base_url, .. }
            | Self::OffsetParameter { base_url, .. }
            | Self::Rewrite { base_url, .. } => base_url,
        }
    }

    /// Check the URL strategy definition
    pub fn validate(&self) -> Result<()> {
        if self.base_url().is_empty() {
            return Err(Error::invalid_value("url.base_url", "cannot be empty"));
        }
        match self {
            Self::PageParameter { param, .. } | Self::OffsetParameter { param, .. } => {
                if param.is_empty() {
                    return Err(Error::invalid_value("url.param", "cannot be empty"));
                }
            }
            Self::Rewrite { pattern, .. } => {
                if pattern.matches(PAGE_PLACEHOLDER).count() != 1 {
                    return Err(Error::invalid_value(
                        "url.pattern",
                        format!("must contain exactly one {PAGE_PLACEHOLDER} placeholder"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Build the URL builder for a given page size
    pub fn build(&self, per_page: u64) -> Result<UrlBuilder> {
        self.validate()?;
        let builder: UrlBuilder = match self {
            Self::PageParameter { base_url, param } => {
                PageParameterUrlBuilder::new(base_url.as_str(), per_page)
                    .with_param(param.as_str())
                    .into()
            }
            Self::OffsetParameter { base_url, param } => {
                OffsetParameterUrlBuilder::new(base_url.as_str(), per_page)
                    .with_param(param.as_str())
                    .into()
            }
            Self::Rewrite { base_url, pattern } => {
                RewriteUrlBuilder::new(base_url.as_str(), pattern.as_str(), per_page)?.into()
            }
        };
        Ok(builder)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a pager configuration from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.display().to_string(),
        },
        _ => Error::Io(e),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        let config: PagerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        config
    } else {
        load_config_from_str(&content)?
    };

    tracing::debug!(path = %path.display(), "loaded pager config");
    Ok(config)
}

/// Load a pager configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
