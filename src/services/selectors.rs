// src/services/selectors.rs

//! Compiled CSS selectors for the catalog pages.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::site;

/// Selectors used by the indexer and the extractor, parsed once per run.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub category: Selector,
    pub pagination: Selector,
    pub listing: Selector,
    pub image: Selector,
    pub name: Selector,
    pub metadata: Selector,
}

impl PageSelectors {
    /// Compile the site's selectors.
    pub fn new() -> Result<Self> {
        Ok(Self {
            category: parse_selector(site::CATEGORY_SELECTOR)?,
            pagination: parse_selector(site::PAGINATION_SELECTOR)?,
            listing: parse_selector(site::LISTING_SELECTOR)?,
            image: parse_selector(site::IMAGE_SELECTOR)?,
            name: parse_selector(site::NAME_SELECTOR)?,
            metadata: parse_selector(site::METADATA_SELECTOR)?,
        })
    }
}

pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
