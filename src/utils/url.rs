// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;
use crate::site::URL_SUFFIX_LENGTH;

/// Resolve a potentially relative href against a base URL.
///
/// Absolute hrefs are returned as given.
///
/// # Examples
/// ```
/// use cardata::utils::url::resolve;
///
/// assert_eq!(
///     resolve("https://www.cars-data.com", "/en/sedan.html").unwrap(),
///     "https://www.cars-data.com/en/sedan.html"
/// );
/// ```
pub fn resolve(base: &str, href: &str) -> Result<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Ok(href.to_string());
    }
    Ok(Url::parse(base)?.join(href)?.to_string())
}

/// Build the URL of a numbered listing page for a category.
///
/// Drops the last [`URL_SUFFIX_LENGTH`] characters of the category URL (its
/// `.html` extension) and appends `/page{N}.html`. A URL shorter than the
/// suffix leaves an empty stem.
///
/// # Examples
/// ```
/// use cardata::utils::url::page_url;
///
/// assert_eq!(
///     page_url("https://site/models/sedan.html", 3),
///     "https://site/models/sedan/page3.html"
/// );
/// ```
pub fn page_url(category_url: &str, page: u32) -> String {
    let stem = category_url
        .char_indices()
        .rev()
        .nth(URL_SUFFIX_LENGTH - 1)
        .map_or("", |(idx, _)| &category_url[..idx]);
    format!("{stem}/page{page}.html")
}
