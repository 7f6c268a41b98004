//! Export of the result table.

pub mod csv;

// Re-export for convenience
pub use self::csv::{save_csv, write_csv};
