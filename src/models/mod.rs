// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod config;
mod listing;
mod table;

// Re-export all public types
pub use category::CategoryRef;
pub use config::{Config, CrawlerConfig, LoggingConfig, OutputConfig, SiteConfig};
pub use listing::ListingRecord;
pub use table::ResultTable;
