// src/services/mod.rs

//! Service modules for fetching, indexing and extraction.

mod catalog;
mod fetcher;
mod listings;
mod selectors;

pub use catalog::CatalogIndexer;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use listings::ListingExtractor;
pub use selectors::PageSelectors;
