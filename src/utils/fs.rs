// src/utils/fs.rs

//! File system utilities.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Ensure the parent directory of a file exists.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write a file atomically (write to temp, then rename).
///
/// The closure receives a buffered writer over the temp file; its return
/// value is passed through.
pub fn write_atomic<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<fs::File>) -> Result<T>,
) -> Result<T> {
    ensure_parent(path)?;

    let tmp = path.with_extension("tmp");
    let mut writer = BufWriter::new(fs::File::create(&tmp)?);
    let value = match write(&mut writer).and_then(|v| {
        writer.flush()?;
        Ok(v)
    }) {
        Ok(v) => v,
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };
    drop(writer);

    fs::rename(&tmp, path)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/out.csv");

        let n = write_atomic(&path, |w| {
            w.write_all(b"hello")?;
            Ok(5)
        })
        .unwrap();

        assert_eq!(n, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_atomic_failure_leaves_no_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");

        let result: Result<()> = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(AppError::validation("boom"))
        });

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
