//! Table serialization back to a delimited file.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::options::delimiter_for_path;

/// Writes an in-memory table to `path`.
///
/// The field delimiter follows the destination extension (`.tsv` → tab,
/// `.psv` → pipe, otherwise comma). Parent directories are created
/// recursively if missing; an existing file is truncated. Rows may have
/// unequal field counts; each record is written as-is.
///
/// Writes are not transactional: a failure partway through leaves a partial
/// file behind, and the caller must treat the destination as corrupt.
pub fn write_table(path: impl AsRef<Path>, rows: &[Vec<String>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter_for_path(path))
        .flexible(true)
        .from_path(path)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
