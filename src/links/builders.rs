//! URL builder implementations
//!
//! Each builder handles a specific way of encoding the page in a URL.

use super::{PageUrlBuilder, PagerFactory};
use crate::error::{Error, Result};
use crate::pagination::{Page, Pager, Paginator};
use regex::Regex;
use url::{Position, Url};

/// Placeholder replaced by the page number in rewrite patterns
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Origin used to resolve relative base URLs such as `/articles?page=2`
const RELATIVE_ORIGIN: &str = "http://localhost/";

// ============================================================================
// Base URL
// ============================================================================

/// Parsed base URL that remembers whether it was given without an origin
#[derive(Debug, Clone)]
struct BaseUrl {
    url: Url,
    relative: bool,
}

impl BaseUrl {
    fn parse(raw: &str) -> Result<Self> {
        match Url::parse(raw) {
            Ok(url) => Ok(Self {
                url,
                relative: false,
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let url = Url::parse(RELATIVE_ORIGIN)?.join(raw)?;
                Ok(Self {
                    url,
                    relative: true,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Replace the first occurrence of `name`, dropping duplicates, or append it
    fn set_query_param(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter_map(|(key, current)| {
                if key != name {
                    return Some((key.into_owned(), current.into_owned()));
                }
                if replaced {
                    return None;
                }
                replaced = true;
                Some((key.into_owned(), value.to_string()))
            })
            .collect();
        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }
        self.url.query_pairs_mut().clear().extend_pairs(&pairs);
    }

    fn append_to_path(&mut self, segment: &str) {
        let path = self.url.path().trim_end_matches('/');
        let path = if segment.starts_with('/') {
            format!("{path}{segment}")
        } else {
            format!("{path}/{segment}")
        };
        self.url.set_path(&path);
    }

    fn render(&self) -> String {
        if self.relative {
            self.url[Position::BeforePath..].to_string()
        } else {
            self.url.to_string()
        }
    }
}

fn parse_page_number(value: Option<String>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(1, |n| n.max(0) as u64)
}

// ============================================================================
// Page Parameter
// ============================================================================

/// Page number carried by a query parameter
///
/// Common patterns:
/// - `?page=2`
/// - `?sort=asc&p=2`
#[derive(Debug, Clone)]
pub struct PageParameterUrlBuilder {
    /// URL the page links are derived from
    pub base_url: String,
    /// Query parameter name for the page number
    pub param: String,
    /// Page size given to created pagers
    pub per_page: u64,
}

impl PageParameterUrlBuilder {
    /// Create a builder using the `page` parameter
    pub fn new(base_url: impl Into<String>, per_page: u64) -> Self {
        Self {
            base_url: base_url.into(),
            param: "page".to_string(),
            per_page,
        }
    }

    /// Set the query parameter name
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Page number found in the base URL, 1 when absent
    pub fn current_page_number(&self) -> Result<u64> {
        let base = BaseUrl::parse(&self.base_url)?;
        Ok(parse_page_number(base.query_param(&self.param)))
    }
}

impl PageUrlBuilder for PageParameterUrlBuilder {
    fn build_url(&self, _pager: &dyn Paginator, page: &Page) -> Result<String> {
        let mut base = BaseUrl::parse(&self.base_url)?;
        base.set_query_param(&self.param, &page.number().to_string());
        let url = base.render();
        tracing::trace!(page = page.number(), %url, "built page url");
        Ok(url)
    }
}

impl PagerFactory for PageParameterUrlBuilder {
    fn create_pager(&self, num_found: Option<u64>) -> Result<Pager> {
        let current = self.current_page_number()?;
        tracing::debug!(
            param = %self.param,
            current,
            "derived current page from query parameter"
        );
        Ok(Pager::from_parts(Some(self.per_page), Some(current), num_found))
    }
}

// ============================================================================
// Offset Parameter
// ============================================================================

/// Item offset carried by a query parameter
///
/// The offset of a page is computed by the pager from its page size.
/// Common patterns:
/// - `?offset=40`
/// - `?start=40&rows=20`
#[derive(Debug, Clone)]
pub struct OffsetParameterUrlBuilder {
    /// URL the page links are derived from
    pub base_url: String,
    /// Query parameter name for the offset
    pub param: String,
    /// Page size used to turn the offset back into a page number
    pub per_page: u64,
}

impl OffsetParameterUrlBuilder {
    /// Create a builder using the `offset` parameter
    pub fn new(base_url: impl Into<String>, per_page: u64) -> Self {
        Self {
            base_url: base_url.into(),
            param: "offset".to_string(),
            per_page,
        }
    }

    /// Set the query parameter name
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Page containing the offset found in the base URL
    pub fn current_page_number(&self) -> Result<u64> {
        let base = BaseUrl::parse(&self.base_url)?;
        if self.per_page == 0 {
            return Ok(1);
        }
        let offset = base
            .query_param(&self.param)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map_or(0, |n| n.max(0) as u64);
        Ok((offset / self.per_page).saturating_add(1))
    }
}

impl PageUrlBuilder for OffsetParameterUrlBuilder {
    fn build_url(&self, pager: &dyn Paginator, page: &Page) -> Result<String> {
        let offset = pager.page_offset(page)?;
        let mut base = BaseUrl::parse(&self.base_url)?;
        base.set_query_param(&self.param, &offset.to_string());
        let url = base.render();
        tracing::trace!(page = page.number(), offset, %url, "built page url");
        Ok(url)
    }
}

impl PagerFactory for OffsetParameterUrlBuilder {
    fn create_pager(&self, num_found: Option<u64>) -> Result<Pager> {
        let current = self.current_page_number()?;
        tracing::debug!(
            param = %self.param,
            current,
            "derived current page from offset parameter"
        );
        Ok(Pager::from_parts(Some(self.per_page), Some(current), num_found))
    }
}

// ============================================================================
// Rewrite Pattern
// ============================================================================

/// Page number carried by a path segment
///
/// The pattern holds a single `{page}` placeholder and is matched against
/// the end of the base URL's path only. When the path ends with the
/// pattern, that part is replaced; otherwise the rendered pattern is
/// appended to the path.
/// Common patterns:
/// - `/page-{page}`
/// - `/p/{page}/`
#[derive(Debug, Clone)]
pub struct RewriteUrlBuilder {
    base_url: String,
    pattern: String,
    per_page: u64,
    matcher: Regex,
}

impl RewriteUrlBuilder {
    /// Create a rewrite builder, validating the pattern
    pub fn new(
        base_url: impl Into<String>,
        pattern: impl Into<String>,
        per_page: u64,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = compile_pattern(&pattern)?;
        Ok(Self {
            base_url: base_url.into(),
            pattern,
            per_page,
            matcher,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render the pattern for one page
    pub fn segment(&self, page_number: u64) -> String {
        self.pattern
            .replace(PAGE_PLACEHOLDER, &page_number.to_string())
    }

    /// Page number matched at the end of the base URL's path, 1 when absent
    /// or zero
    pub fn current_page_number(&self) -> Result<u64> {
        let base = BaseUrl::parse(&self.base_url)?;
        Ok(self
            .matcher
            .captures(base.url.path())
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1))
    }
}

/// Turn a `{page}` pattern into a regex capturing the page number
fn compile_pattern(pattern: &str) -> Result<Regex> {
    let placeholders = pattern.matches(PAGE_PLACEHOLDER).count();
    if placeholders != 1 {
        return Err(Error::rewrite_pattern(
            pattern,
            format!("expected exactly one {PAGE_PLACEHOLDER} placeholder, found {placeholders}"),
        ));
    }
    let (prefix, suffix) = pattern
        .split_once(PAGE_PLACEHOLDER)
        .ok_or_else(|| Error::rewrite_pattern(pattern, "missing placeholder"))?;
    let regex = format!(
        "{}([0-9]+){}$",
        regex::escape(prefix),
        regex::escape(suffix)
    );
    Ok(Regex::new(&regex)?)
}

impl PageUrlBuilder for RewriteUrlBuilder {
    fn build_url(&self, _pager: &dyn Paginator, page: &Page) -> Result<String> {
        let segment = self.segment(page.number());
        let mut base = BaseUrl::parse(&self.base_url)?;

        let path = base.url.path().to_string();
        match self.matcher.find(&path) {
            Some(found) => {
                let path = format!("{}{segment}", &path[..found.start()]);
                base.url.set_path(&path);
            }
            None => base.append_to_path(&segment),
        }

        let url = base.render();
        tracing::trace!(page = page.number(), %url, "built page url");
        Ok(url)
    }
}

impl PagerFactory for RewriteUrlBuilder {
    fn create_pager(&self, num_found: Option<u64>) -> Result<Pager> {
        let current = self.current_page_number()?;
        tracing::debug!(
            pattern = %self.pattern,
            current,
            "derived current page from rewrite pattern"
        );
        Ok(Pager::from_parts(Some(self.per_page), Some(current), num_found))
    }
}

// ============================================================================
// Any Builder
// ============================================================================

/// One of the built-in URL strategies, selected at runtime
#[derive(Debug, Clone)]
pub enum UrlBuilder {
    PageParameter(PageParameterUrlBuilder),
    OffsetParameter(OffsetParameterUrlBuilder),
    Rewrite(RewriteUrlBuilder),
}

impl UrlBuilder {
    /// Short name of the strategy
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PageParameter(_) => "page_parameter",
            Self::OffsetParameter(_) => "offset_parameter",
            Self::Rewrite(_) => "rewrite",
        }
    }
}

impl PageUrlBuilder for UrlBuilder {
    fn build_url(&self, pager: &dyn Paginator, page: &Page) -> Result<String> {
        match self {
            Self::PageParameter(b) => b.build_url(pager, page),
            Self::OffsetParameter(b) => b.build_url(pager, page),
            Self::Rewrite(b) => b.build_url(pager, page),
        }
    }
}

impl PagerFactory for UrlBuilder {
    fn create_pager(&self, num_found: Option<u64>) -> Result<Pager> {
        match self {
            Self::PageParameter(b) => b.create_pager(num_found),
            Self::OffsetParameter(b) => b.create_pager(num_found),
            Self::Rewrite(b) => b.create_pager(num_found),
        }
    }
}

impl From<PageParameterUrlBuilder> for UrlBuilder {
    fn from(builder: PageParameterUrlBuilder) -> Self {
        Self::PageParameter(builder)
    }
}

impl From<OffsetParameterUrlBuilder> for UrlBuilder {
    fn from(builder: OffsetParameterUrlBuilder) -> Self {
        Self::OffsetParameter(builder)
    }
}

impl From<RewriteUrlBuilder> for UrlBuilder {
    fn from(builder: RewriteUrlBuilder) -> Self {
        Self::Rewrite(builder)
    }
}
