//! Rewrites index matrices (faces, edges) after the rows they reference
//! have been filtered.

use crate::convert::rows_to_matrix;
use crate::error::MatrixOpError;
use crate::filter::Indirection;
use crate::math::{Array1, Array2};

/// Result of [`apply_indirection`].
#[derive(Clone, Debug)]
pub struct Remapped {
    /// Surviving rows with every index rewritten, input order preserved.
    pub matrix: Array2<usize>,
    /// One boolean per original row, `true` for rows that survived. Use it
    /// to filter per-row attribute data kept parallel to the index matrix.
    pub kept: Array1<bool>,
}

/// Rewrite an index matrix through an indirection mapping.
///
/// Each row of `indices` is a tuple of positions into some collection that
/// was filtered with [`crate::filter::filter_rows`]. Rows referencing a
/// dropped position are removed whole; all other rows have every entry
/// remapped to its new position.
///
/// # Arguments
///
/// * `indirection` - Mapping produced by the filter that rearranged the
///   referenced collection.
/// * `indices` - Integer matrix where each element indexes that collection.
///
/// # Returns
///
/// The remapped matrix and a per-row kept mask, or
/// [`MatrixOpError::IndexOutOfRange`] if any element of `indices` is not
/// covered by the mapping. A matrix with no elements is returned unchanged
/// with an all-true mask.
pub fn apply_indirection(
    indirection: &Indirection,
    indices: &Array2<usize>,
) -> Result<Remapped, MatrixOpError> {
    if indices.is_empty() {
        return Ok(Remapped {
            matrix: indices.clone(),
            kept: Array1::from_elem(indices.nrows(), true),
        });
    }

    if let Some(&max) = indices.iter().max() {
        if max >= indirection.len() {
            return Err(MatrixOpError::IndexOutOfRange {
                index: max,
                bound: indirection.len(),
            });
        }
    }

    let mut new_rows: Vec<Vec<usize>> = Vec::new();
    let mut kept = Array1::from_elem(indices.nrows(), false);

    for i in 0..indices.nrows() {
        let remapped: Option<Vec<usize>> = indices
            .row_slice(i)
            .iter()
            .map(|&idx| indirection.get(idx))
            .collect();

        // A row pointing at any dropped position is discarded whole.
        if let Some(row) = remapped {
            new_rows.push(row);
            kept[i] = true;
        }
    }

    let dropped = indices.nrows() - new_rows.len();
    if dropped > 0 {
        log::debug!(
            "apply_indirection: dropped {} of {} rows referencing removed positions",
            dropped,
            indices.nrows()
        );
    }

    Ok(Remapped {
        matrix: rows_to_matrix(&new_rows),
        kept,
    })
}
