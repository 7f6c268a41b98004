// src/pipeline/export.rs

//! Scrape-and-save pipeline.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::run_scraper;
use crate::services::PageFetcher;
use crate::storage::save_csv;

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    /// Rows per kind, in category order
    pub kinds: Vec<(String, usize)>,
}

/// Run the full scrape and write the CSV to `output`.
///
/// Nothing is written unless the whole scrape succeeds.
pub fn run_export<F: PageFetcher>(
    config: &Config,
    fetcher: &F,
    output: &Path,
) -> Result<ExportSummary> {
    let table = run_scraper(config, fetcher)?;

    let kinds: Vec<(String, usize)> = table
        .kind_counts()
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), count))
        .collect();

    let rows = save_csv(output, table)?;

    log::info!("Scraped {} listing(s)", rows);
    for (kind, count) in &kinds {
        log::info!("    {}: {}", kind, count);
    }

    Ok(ExportSummary {
        path: output.to_path_buf(),
        rows,
        kinds,
    })
}
