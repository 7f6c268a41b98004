// src/models/table.rs

//! Append-only accumulator for a scrape run.

use crate::models::ListingRecord;

/// Ordered, append-only collection of listings.
///
/// Rows keep discovery order: category, then page, then position on the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<ListingRecord>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single record.
    pub fn push(&mut self, record: ListingRecord) {
        self.records.push(record);
    }

    /// Append records, keeping their order.
    pub fn extend(&mut self, records: impl IntoIterator<Item = ListingRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ListingRecord> {
        self.records
    }

    /// Row count per kind, in order of first appearance.
    pub fn kind_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(kind, _)| *kind == record.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.kind.as_str(), 1)),
            }
        }
        counts
    }
}
