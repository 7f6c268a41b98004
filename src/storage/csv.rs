//! CSV export.
//!
//! Writes the header `kind,name,image_url,start_year,end_year,doors` followed
//! by one row per listing. Values are written raw; quoting only happens where
//! CSV requires it. Output is deterministic for a given table.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::ResultTable;
use crate::site::CSV_HEADER;
use crate::utils::fs::write_atomic;

/// Serialize a table into `writer`, consuming it. Returns the row count.
pub fn write_csv<W: Write>(writer: W, table: ResultTable) -> Result<usize> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Header is written explicitly so an empty table still yields it.
    w.write_record(CSV_HEADER)?;

    let rows = table.len();
    for record in table.into_records() {
        w.serialize(record)?;
    }
    w.flush()?;

    Ok(rows)
}

/// Save a table to `path` atomically, creating parent directories.
pub fn save_csv(path: &Path, table: ResultTable) -> Result<usize> {
    let rows = write_atomic(path, |file| write_csv(file, table))?;
    log::info!("Saved {} row(s) to {}", rows, path.display());
    Ok(rows)
}
