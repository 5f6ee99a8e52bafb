//! Serializable pager snapshots
//!
//! [`PagerView`] captures everything a template needs to render a page list:
//! totals, navigation links and the visible pages.

use crate::error::Result;
use crate::links::PageUrlBuilder;
use crate::pagination::{Page, Paginator};
use serde::Serialize;

/// Gap marker used by [`PagerView::to_text`]
pub const ELLIPSIS: &str = "…";

/// One page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u64,
    pub item_count: u64,
    pub offset: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub current: bool,
}

/// Snapshot of a paginator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerView {
    pub page_count: u64,
    pub per_page: u64,
    pub num_found: u64,
    pub current_page: u64,
    pub offset: u64,
    pub first: PageLink,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
    pub last: PageLink,
    /// Pages yielded by the paginator, windowed or not
    pub pages: Vec<PageLink>,
}

impl PagerView {
    /// Build a view, adding URLs when a builder is given
    pub fn build(pager: &dyn Paginator, urls: Option<&dyn PageUrlBuilder>) -> Result<Self> {
        let link = |page: Page| -> Result<PageLink> {
            Ok(PageLink {
                number: page.number(),
                item_count: page.item_count()?,
                offset: pager.page_offset(&page)?,
                url: urls.map(|b| b.build_url(pager, &page)).transpose()?,
                current: pager.is_current_page(&page)?,
            })
        };

        let pages = pager.pages()?.map(link).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            page_count: pager.page_count()?,
            per_page: pager.per_page()?,
            num_found: pager.num_found()?,
            current_page: pager.current_page_number()?,
            offset: pager.offset()?,
            first: link(pager.first_page()?)?,
            previous: pager.previous_page()?.map(link).transpose()?,
            next: pager.next_page()?.map(link).transpose()?,
            last: link(pager.last_page()?)?,
            pages,
        })
    }

    /// Render the visible pages on one line, e.g. `1 … 23 24 [25] 26 27 … 50`
    pub fn to_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.pages.len() * 2);
        let mut previous: Option<u64> = None;

        for link in &self.pages {
            if previous.is_some_and(|p| link.number > p.saturating_add(1)) {
                parts.push(ELLIPSIS.to_string());
            }
            if link.current {
                parts.push(format!("[{}]", link.number));
            } else {
                parts.push(link.number.to_string());
            }
            previous = Some(link.number);
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::PageParameterUrlBuilder;
    use crate::pagination::{Pager, WindowedPager};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_of_plain_pager() {
        let pager = Pager::with_config(10, 2, 53);
        let view = PagerView::build(&pager, None).unwrap();

        assert_eq!(view.page_count, 6);
        assert_eq!(view.offset, 10);
        assert_eq!(view.pages.len(), 6);
        assert_eq!(view.previous.as_ref().map(|l| l.number), Some(1));
        assert_eq!(view.next.as_ref().map(|l| l.number), Some(3));
        assert_eq!(view.last.item_count, 3);
        assert_eq!(view.last.offset, 50);
        assert!(view.pages.iter().all(|l| l.url.is_none()));
        assert_eq!(view.to_text(), "1 [2] 3 4 5 6");
    }

    #[test]
    fn test_view_of_windowed_pager() {
        let windowed = WindowedPager::new(Pager::with_config(10, 25, 500)).with_delta(2);
        let view = PagerView::build(&windowed, None).unwrap();

        assert_eq!(view.to_text(), "1 … 23 24 [25] 26 27 … 50");
        assert_eq!(view.page_count, 50);
    }

    #[test]
    fn test_view_near_edges() {
        let windowed = WindowedPager::new(Pager::with_config(10, 1, 500)).with_delta(2);
        let view = PagerView::build(&windowed, None).unwrap();
        assert!(view.previous.is_none());
        assert_eq!(view.to_text(), "[1] 2 3 4 5 … 50");

        let windowed = WindowedPager::new(Pager::with_config(10, 50, 500)).with_delta(2);
        let view = PagerView::build(&windowed, None).unwrap();
        assert!(view.next.is_none());
        assert_eq!(view.to_text(), "1 … 46 47 48 49 [50]");
    }

    #[test]
    fn test_view_with_urls() {
        let builder = PageParameterUrlBuilder::new("http://localhost/list", 10);
        let pager = Pager::with_config(10, 1, 25);
        let view = PagerView::build(&pager, Some(&builder)).unwrap();

        let urls: Vec<&str> = view.pages.iter().filter_map(|l| l.url.as_deref()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost/list?page=1",
                "http://localhost/list?page=2",
                "http://localhost/list?page=3",
            ]
        );
        assert_eq!(view.next.unwrap().url.as_deref(), Some("http://localhost/list?page=2"));
    }

    #[test]
    fn test_view_serializes() {
        let pager = Pager::with_config(10, 1, 0);
        let view = PagerView::build(&pager, None).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["page_count"], 1);
        assert_eq!(json["pages"][0]["item_count"], 0);
        assert_eq!(json["pages"][0]["current"], true);
        assert!(json["pages"][0].get("url").is_none());
        assert!(json["previous"].is_null());
    }

    #[test]
    fn test_view_requires_configuration() {
        let pager = Pager::new();
        assert!(PagerView::build(&pager, None).is_err());
    }
}
