// src/site.rs

//! Markup conventions of cars-data.com.
//!
//! Everything here is coupled to the source site's HTML and URL layout.
//! None of it is derived from page content at runtime.

/// Landing page of the catalog.
pub const DEFAULT_LANDING_URL: &str = "https://www.cars-data.com";

/// Only the first five category links on the landing page are walked.
pub const CATEGORY_LIMIT: usize = 5;

/// Length of the `.html` stem removed from a category URL before
/// appending `/page{N}.html`.
pub const URL_SUFFIX_LENGTH: usize = 5;

/// Literal token preceding the last page number in the pagination block.
pub const PAGINATION_MARKER: &str = "next";

/// Category links in the landing page's body-type grid.
pub const CATEGORY_SELECTOR: &str = "section.carbody div.row > div.col-4 > a";

/// Pagination paragraphs on a category listing page.
pub const PAGINATION_SELECTOR: &str = "section.models > p.links";

/// Per-car cards on a category listing page.
pub const LISTING_SELECTOR: &str = "section.models div.col-4";

// Card image, name link and metadata paragraph, searched within a card.
pub const IMAGE_SELECTOR: &str = "img";
pub const NAME_SELECTOR: &str = "a";
pub const METADATA_SELECTOR: &str = "p";

/// CSV header written before any rows.
pub const CSV_HEADER: [&str; 6] = ["kind", "name", "image_url", "start_year", "end_year", "doors"];
