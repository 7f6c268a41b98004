// src/pipeline/scrape.rs

//! Catalog walk: categories, then pages, then cards.

use crate::error::Result;
use crate::models::{CategoryRef, Config, ResultTable};
use crate::services::{CatalogIndexer, ListingExtractor, PageFetcher, PageSelectors};
use crate::utils::url;

/// Discover the categories listed on the configured landing page.
pub fn run_categories<F: PageFetcher>(config: &Config, fetcher: &F) -> Result<Vec<CategoryRef>> {
    let selectors = PageSelectors::new()?;
    CatalogIndexer::new(fetcher, &selectors).list_categories(&config.site.landing_url)
}

/// Scrape every listing of every discovered category.
///
/// Categories are processed in discovery order. The first error aborts the
/// run; rows of earlier categories are dropped with the table.
pub fn run_scraper<F: PageFetcher>(config: &Config, fetcher: &F) -> Result<ResultTable> {
    let landing_url = config.site.landing_url.as_str();
    let selectors = PageSelectors::new()?;
    let indexer = CatalogIndexer::new(fetcher, &selectors);
    let extractor = ListingExtractor::new(
        fetcher,
        &selectors,
        landing_url,
        config.logging.show_progress,
    );

    let categories = indexer.list_categories(landing_url)?;
    log::info!("Found {} categories on {}", categories.len(), landing_url);

    let mut table = ResultTable::new();
    for category in &categories {
        let category_url = url::resolve(landing_url, &category.relative_url)?;
        let max_page = indexer.max_page_number(&category_url)?;
        log::debug!("{}: {} page(s) at {}", category.name, max_page, category_url);

        let records = extractor.extract_category(&category_url, max_page, &category.name)?;
        table.extend(records);
    }

    Ok(table)
}
