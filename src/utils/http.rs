// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Create a configured blocking HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
///
/// Transport failures, non-success statuses and unreadable bodies all
/// surface as [`AppError::Fetch`].
pub fn fetch_page(client: &Client, url: &str) -> Result<Html> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| AppError::fetch(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::fetch(url, format!("HTTP status {status}")));
    }

    let text = response.text().map_err(|e| AppError::fetch(url, e))?;
    Ok(Html::parse_document(&text))
}
