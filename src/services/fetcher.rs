// src/services/fetcher.rs

//! Page fetching.

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::CrawlerConfig;
use crate::utils::http;

/// Source of parsed HTML documents.
pub trait PageFetcher {
    /// Fetch `url` and parse it. One request per call, no caching.
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// Fetcher backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a client built from the crawler settings.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        log::debug!("GET {}", url);
        http::fetch_page(&self.client, url)
    }
}
