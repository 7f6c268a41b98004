//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use cardata::error::{AppError, Result};
use cardata::services::PageFetcher;
use scraper::Html;

pub const SITE: &str = "https://www.cars-data.com";

/// Serves canned HTML by URL and records every request.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .map(|html| Html::parse_document(html))
            .ok_or_else(|| AppError::fetch(url, "HTTP status 404 Not Found"))
    }
}

/// Landing page with one grid link per `(name, href)`.
pub fn landing(categories: &[(&str, &str)]) -> String {
    let links: String = categories
        .iter()
        .map(|(name, href)| format!(r#"<div class="col-4"><a href="{href}">{name}</a></div>"#))
        .collect();
    format!(
        r#"<html><body>
        <nav><a href="/en/">Home</a></nav>
        <section class="carbody"><h2>Body types</h2><div class="row">{links}</div></section>
        </body></html>"#
    )
}

/// Listing page with the given cards and a pagination block ending in `(last_page)`.
pub fn listing_page(cards: &[(&str, &str, &str)], last_page: u32) -> String {
    let cards: String = cards
        .iter()
        .map(|(src, name, meta)| {
            format!(
                r#"<div class="col-4"><img src="{src}" alt="">
                <a href="/en/model.html">{name}</a><p>{meta}</p></div>"#
            )
        })
        .collect();
    format!(
        r##"<html><body><section class="models">
        <p class="links">Sort by name</p>
        <div class="row">{cards}</div>
        <p class="links"><a href="page1.html">1</a> <a href="page2.html">2</a> next <a href="#">({last_page})</a></p>
        </section></body></html>"##
    )
}
