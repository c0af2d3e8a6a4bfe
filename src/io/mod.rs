//! Plain-text matrix writer.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::math::Array2;

/// Write a matrix as whitespace-delimited text: one line per row, columns
/// separated by single spaces, no header.
///
/// Fails with a contextual error if the target file cannot be created or
/// written; callers treating this as unrecoverable can abort on the error.
pub fn write_matrix<T: fmt::Display, P: AsRef<Path>>(matrix: &Array2<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", matrix)
        .with_context(|| format!("Failed to write matrix to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write matrix to {}", path.display()))?;

    Ok(())
}
