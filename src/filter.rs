//! Boolean-mask row filtering with index remapping.
//!
//! Filtering compacts the rows selected by a mask into a new matrix and
//! reports how row positions moved, so callers can fix up any data that
//! referenced the original rows (see [`crate::remap`]).

use num_traits::Zero;

use crate::math::{Array1, Array2};

/// Mapping from original row index to post-filter row index.
///
/// `None` marks a row that the filter dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indirection {
    slots: Vec<Option<usize>>,
}

impl Indirection {
    pub fn from_slots(slots: Vec<Option<usize>>) -> Self {
        Self { slots }
    }

    /// Number of original rows covered by this mapping.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// New position of the given original row, or `None` if it was dropped.
    ///
    /// Panics if `original` is not covered by the mapping.
    pub fn get(&self, original: usize) -> Option<usize> {
        self.slots[original]
    }

    pub fn is_kept(&self, original: usize) -> bool {
        self.slots[original].is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }
}

/// Result of [`filter_rows`]: the compacted matrix plus both row mappings.
///
/// Callers that only need the matrix can ignore the other fields.
#[derive(Clone, Debug)]
pub struct FilteredRows<T> {
    pub matrix: Array2<T>,
    /// Original row index -> new row index.
    pub indirection: Indirection,
    /// New row index -> original row index, one entry per kept row.
    pub inverse: Vec<usize>,
}

/// Compact the rows of a matrix selected by a boolean mask.
///
/// Rows where `mask[i] == keep` are copied, in their original order, into a
/// new matrix with the same column count.
///
/// If the mask length does not match the row count, or the matrix has no
/// elements, the filter is a no-op: the input is returned unchanged with
/// empty mappings, and a single warning is logged when `validate` is set.
///
/// # Arguments
///
/// * `matrix` - The matrix to filter.
/// * `mask` - One boolean per row.
/// * `keep` - The mask value that selects a row.
/// * `validate` - Log a warning on a mask/row-count mismatch.
///
/// # Returns
///
/// A [`FilteredRows`] with the compacted matrix, the indirection mapping,
/// and its inverse. Keeping zero rows is legal and yields a matrix with 0
/// rows and the original column count.
pub fn filter_rows<T: Clone>(
    matrix: &Array2<T>,
    mask: &Array1<bool>,
    keep: bool,
    validate: bool,
) -> FilteredRows<T> {
    if matrix.nrows() != mask.len() || matrix.is_empty() {
        if validate {
            log::warn!(
                "filter_rows: matrix and mask don't have the same size: {} and {}; returning input unchanged",
                matrix.nrows(),
                mask.len()
            );
        }
        return FilteredRows {
            matrix: matrix.clone(),
            indirection: Indirection::from_slots(Vec::new()),
            inverse: Vec::new(),
        };
    }

    let kept_indices: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| if m == keep { Some(i) } else { None })
        .collect();

    let mut slots = vec![None; matrix.nrows()];
    for (new_idx, &original) in kept_indices.iter().enumerate() {
        slots[original] = Some(new_idx);
    }

    FilteredRows {
        matrix: matrix.select_rows(&kept_indices),
        indirection: Indirection::from_slots(slots),
        inverse: kept_indices,
    }
}

/// Result of [`zero_rows`]: the same-shape matrix and the identity-or-dropped
/// row mapping.
#[derive(Clone, Debug)]
pub struct ZeroedRows<T> {
    pub matrix: Array2<T>,
    /// Identity for kept rows, `None` for zeroed rows; positions never shift.
    pub indirection: Indirection,
}

/// Zero out the rows a filter would drop instead of removing them.
///
/// Same selection and no-op semantics as [`filter_rows`], but the matrix
/// shape is unchanged: rows where `mask[i] == keep` stay in place, all other
/// rows are set to zero.
pub fn zero_rows<T: Clone + Zero>(
    matrix: &Array2<T>,
    mask: &Array1<bool>,
    keep: bool,
    validate: bool,
) -> ZeroedRows<T> {
    if matrix.nrows() != mask.len() || matrix.is_empty() {
        if validate {
            log::warn!(
                "zero_rows: matrix and mask don't have the same size: {} and {}; returning input unchanged",
                matrix.nrows(),
                mask.len()
            );
        }
        return ZeroedRows {
            matrix: matrix.clone(),
            indirection: Indirection::from_slots(Vec::new()),
        };
    }

    let mut out = Array2::zeros(matrix.nrows(), matrix.ncols());
    let mut slots = vec![None; matrix.nrows()];
    for i in 0..matrix.nrows() {
        if mask[i] == keep {
            out.set_row(i, matrix.row_slice(i));
            slots[i] = Some(i);
        }
    }

    ZeroedRows {
        matrix: out,
        indirection: Indirection::from_slots(slots),
    }
}
