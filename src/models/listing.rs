// src/models/listing.rs

//! One scraped vehicle listing.

use serde::{Deserialize, Serialize};

/// A vehicle listing as exported to CSV.
///
/// Year and door fields stay raw strings; the site's metadata text is not
/// reliably numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub kind: String,
    pub name: String,
    pub image_url: String,
    pub start_year: String,
    pub end_year: String,
    pub doors: String,
}
