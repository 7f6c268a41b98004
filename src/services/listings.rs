// src/services/listings.rs

//! Listing extraction service.
//!
//! Walks a category's numbered listing pages and turns each car card into a
//! [`ListingRecord`].

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::ListingRecord;
use crate::services::{PageFetcher, PageSelectors};
use crate::utils::url::page_url;

/// Service for extracting listings from category pages.
pub struct ListingExtractor<'a, F: PageFetcher> {
    fetcher: &'a F,
    selectors: &'a PageSelectors,
    site_url: String,
    show_progress: bool,
}

impl<'a, F: PageFetcher> ListingExtractor<'a, F> {
    /// Create a new extractor.
    ///
    /// `site_url` is prefixed verbatim to every image `src`.
    pub fn new(
        fetcher: &'a F,
        selectors: &'a PageSelectors,
        site_url: impl Into<String>,
        show_progress: bool,
    ) -> Self {
        Self {
            fetcher,
            selectors,
            site_url: site_url.into(),
            show_progress,
        }
    }

    /// Extract every listing on pages `1..=max_page` of a category.
    ///
    /// Records come back in page-then-card order. Any failure discards the
    /// whole category.
    pub fn extract_category(
        &self,
        category_url: &str,
        max_page: u32,
        kind: &str,
    ) -> Result<Vec<ListingRecord>> {
        self.progress(&format!("Scraping car type: {kind} - Start"));

        let mut records = Vec::new();
        for page in 1..=max_page {
            self.progress(&format!("Page {page} - Start"));

            let url = page_url(category_url, page);
            let document = self.fetcher.fetch(&url)?;
            let found = self.parse_page(&document, kind, &url)?;
            log::debug!("{} listing(s) on {}", found.len(), url);
            records.extend(found);

            self.progress(&format!("Page {page} - Done"));
        }

        self.progress(&format!("Scraping car type: {kind} - Done"));
        Ok(records)
    }

    /// Extract all cards of one listing page, in document order.
    fn parse_page(&self, document: &Html, kind: &str, page_url: &str) -> Result<Vec<ListingRecord>> {
        document
            .select(&self.selectors.listing)
            .map(|card| self.parse_card(card, kind, page_url))
            .collect()
    }

    fn parse_card(&self, card: ElementRef, kind: &str, page_url: &str) -> Result<ListingRecord> {
        let missing = |field: &str| AppError::missing_field(field, page_url);

        let src = card
            .select(&self.selectors.image)
            .next()
            .ok_or_else(|| missing("img"))?
            .value()
            .attr("src")
            .ok_or_else(|| missing("img[src]"))?;

        let name = card
            .select(&self.selectors.name)
            .next()
            .ok_or_else(|| missing("a"))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let metadata = card
            .select(&self.selectors.metadata)
            .next()
            .ok_or_else(|| missing("p"))?
            .text()
            .collect::<Vec<_>>()
            .join(" ");
        // "<start> <separator> <end> <doors> ..."; token 1 is not used
        let tokens: Vec<&str> = metadata.split_whitespace().collect();
        let token = |idx: usize, field: &str| {
            tokens
                .get(idx)
                .map(|t| t.to_string())
                .ok_or_else(|| missing(field))
        };

        Ok(ListingRecord {
            kind: kind.to_string(),
            name,
            image_url: format!("{}{}", self.site_url, src),
            start_year: token(0, "start_year")?,
            end_year: token(2, "end_year")?,
            doors: token(3, "doors")?,
        })
    }

    fn progress(&self, message: &str) {
        if self.show_progress {
            log::info!("{}", message);
        } else {
            log::debug!("{}", message);
        }
    }
}
