//! Pipeline entry points for scraper operations.
//!
//! - `run_categories`: Discover the categories on the landing page
//! - `run_scraper`: Walk every category and collect its listings
//! - `run_export`: Scrape, then save the table as CSV

pub mod export;
pub mod scrape;

pub use export::{ExportSummary, run_export};
pub use scrape::{run_categories, run_scraper};
