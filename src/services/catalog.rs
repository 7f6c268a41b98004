// src/services/catalog.rs

//! Category discovery and pagination bounds.

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::CategoryRef;
use crate::services::{PageFetcher, PageSelectors};
use crate::site::{CATEGORY_LIMIT, PAGINATION_MARKER};

/// Service for reading the catalog's category index.
pub struct CatalogIndexer<'a, F: PageFetcher> {
    fetcher: &'a F,
    selectors: &'a PageSelectors,
}

impl<'a, F: PageFetcher> CatalogIndexer<'a, F> {
    /// Create a new indexer over the given fetcher.
    pub fn new(fetcher: &'a F, selectors: &'a PageSelectors) -> Self {
        Self { fetcher, selectors }
    }

    /// Fetch the landing page and list its categories.
    pub fn list_categories(&self, landing_url: &str) -> Result<Vec<CategoryRef>> {
        let document = self.fetcher.fetch(landing_url)?;
        let categories = self.parse_categories(&document)?;

        if categories.is_empty() {
            log::warn!("No category links found on {}", landing_url);
        }
        Ok(categories)
    }

    /// Fetch a category's first listing page and read its last page number.
    pub fn max_page_number(&self, category_url: &str) -> Result<u32> {
        let document = self.fetcher.fetch(category_url)?;
        self.parse_max_page(&document)
            .map_err(|e| match e {
                AppError::Parse(message) => {
                    AppError::parse(format!("{message} ({category_url})"))
                }
                other => other,
            })
    }

    /// Extract the first [`CATEGORY_LIMIT`] category links, in document order.
    fn parse_categories(&self, document: &Html) -> Result<Vec<CategoryRef>> {
        document
            .select(&self.selectors.category)
            .take(CATEGORY_LIMIT)
            .map(|anchor| -> Result<CategoryRef> {
                let href = anchor.value().attr("href").ok_or_else(|| {
                    AppError::structure(format!(
                        "category link '{}' has no href",
                        anchor.text().collect::<String>().trim()
                    ))
                })?;
                Ok(CategoryRef {
                    name: anchor.text().collect(),
                    relative_url: href.to_string(),
                })
            })
            .collect()
    }

    /// Read the page count from the last pagination block.
    fn parse_max_page(&self, document: &Html) -> Result<u32> {
        let links = document
            .select(&self.selectors.pagination)
            .last()
            .ok_or_else(|| AppError::parse("no pagination control"))?;

        let text: String = links.text().collect();
        last_page_from_text(&text)
    }
}

/// Parse text like `1 2 3 next (7)` into `7`.
///
/// Takes what follows the last pagination marker, trims it and drops exactly
/// one wrapping character on each side.
fn last_page_from_text(text: &str) -> Result<u32> {
    let (_, tail) = text
        .rsplit_once(PAGINATION_MARKER)
        .ok_or_else(|| AppError::parse(format!("no '{PAGINATION_MARKER}' in pagination text")))?;

    let mut chars = tail.trim().chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(AppError::parse(format!(
            "nothing to unwrap after '{PAGINATION_MARKER}': {:?}",
            tail.trim()
        )));
    }
    let number = chars.as_str().trim();

    match number.parse::<u32>() {
        Ok(0) => Err(AppError::parse("last page number is 0")),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::parse(format!(
            "{number:?} is not a page number: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFetch;

    impl PageFetcher for NoFetch {
        fn fetch(&self, url: &str) -> Result<Html> {
            Err(AppError::fetch(url, "offline"))
        }
    }

    fn landing(count: usize) -> Html {
        let links: String = (1..=count)
            .map(|i| format!(r#"<div class="col-4"><a href="/en/kind{i}.html">Kind {i}</a></div>"#))
            .collect();
        Html::parse_document(&format!(
            r#"<html><body>
            <section class="carbody"><div class="row">{links}</div></section>
            <section class="other"><div class="row"><div class="col-4"><a href="/x.html">X</a></div></div></section>
            </body></html>"#
        ))
    }

    fn categories(document: &Html) -> Result<Vec<CategoryRef>> {
        let selectors = PageSelectors::new().unwrap();
        CatalogIndexer::new(&NoFetch, &selectors).parse_categories(document)
    }

    fn max_page(document: &Html) -> Result<u32> {
        let selectors = PageSelectors::new().unwrap();
        CatalogIndexer::new(&NoFetch, &selectors).parse_max_page(document)
    }

    #[test]
    fn test_categories_capped_at_limit() {
        let found = categories(&landing(8)).unwrap();
        assert_eq!(found.len(), CATEGORY_LIMIT);

        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Kind 1", "Kind 2", "Kind 3", "Kind 4", "Kind 5"]);
        assert_eq!(found[0].relative_url, "/en/kind1.html");
    }

    #[test]
    fn test_categories_fewer_than_limit() {
        let found = categories(&landing(3)).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[2].name, "Kind 3");
    }

    #[test]
    fn test_categories_none_found() {
        assert!(categories(&landing(0)).unwrap().is_empty());
    }

    #[test]
    fn test_category_text_kept_verbatim() {
        let doc = Html::parse_document(
            r#"<section class="carbody"><div class="row">
            <div class="col-4"><a href="https://site/suv.html"> SUV </a></div>
            </div></section>"#,
        );
        let found = categories(&doc).unwrap();
        assert_eq!(found[0].name, " SUV ");
        assert_eq!(found[0].relative_url, "https://site/suv.html");
    }

    #[test]
    fn test_category_without_href() {
        let doc = Html::parse_document(
            r#"<section class="carbody"><div class="row">
            <div class="col-4"><a>Broken</a></div>
            </div></section>"#,
        );
        assert!(matches!(categories(&doc), Err(AppError::Structure(_))));
    }

    #[test]
    fn test_nested_anchor_not_matched() {
        // Only direct children of div.col-4 count.
        let doc = Html::parse_document(
            r#"<section class="carbody"><div class="row">
            <div class="col-4"><span><a href="/x.html">X</a></span></div>
            </div></section>"#,
        );
        assert!(categories(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_last_page_from_text() {
        assert_eq!(last_page_from_text(" next (7) ").unwrap(), 7);
        assert_eq!(last_page_from_text("1 2 3 next [42]").unwrap(), 42);
        assert_eq!(last_page_from_text("next next (3)").unwrap(), 3);
    }

    #[test]
    fn test_last_page_from_text_failures() {
        assert!(matches!(last_page_from_text("1 2 3"), Err(AppError::Parse(_))));
        assert!(matches!(last_page_from_text("next "), Err(AppError::Parse(_))));
        assert!(matches!(last_page_from_text("next 7"), Err(AppError::Parse(_))));
        assert!(matches!(last_page_from_text("next (x)"), Err(AppError::Parse(_))));
        assert!(matches!(last_page_from_text("next (0)"), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_max_page_uses_last_block() {
        let doc = Html::parse_document(
            r#"<section class="models">
            <p class="links">first next (2)</p>
            <div class="col-4"></div>
            <p class="links"><a href="page1.html">1</a> <a href="page2.html">2</a> next <a href="page9.html">(9)</a></p>
            </section>"#,
        );
        assert_eq!(max_page(&doc).unwrap(), 9);
    }

    #[test]
    fn test_max_page_without_pagination() {
        let doc = Html::parse_document(r#"<section class="models"><p>no links</p></section>"#);
        assert!(matches!(max_page(&doc), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_list_categories_propagates_fetch_error() {
        let selectors = PageSelectors::new().unwrap();
        let indexer = CatalogIndexer::new(&NoFetch, &selectors);
        assert!(matches!(
            indexer.list_categories("https://www.cars-data.com"),
            Err(AppError::Fetch { .. })
        ));
    }
}
