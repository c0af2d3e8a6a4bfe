//! Conversions from sequences of vectors or scalars to a single matrix.

use crate::math::Array2;

/// Stack a sequence of equal-length vectors into an N x D matrix.
///
/// Row `i` of the result equals `rows[i]`. The dimension D is taken from
/// the first row; an empty sequence yields the empty matrix. Accepts
/// anything row-like (`Array1`, `Vec`, slices).
///
/// Panics if the rows do not all have the same length.
pub fn rows_to_matrix<T: Clone, R: AsRef<[T]>>(rows: &[R]) -> Array2<T> {
    if rows.is_empty() {
        return Array2::empty();
    }

    let dim = rows[0].as_ref().len();
    let mut data = Vec::with_capacity(rows.len() * dim);
    for row in rows {
        let row = row.as_ref();
        assert_eq!(
            row.len(),
            dim,
            "rows_to_matrix: expected rows of dimension {}, got {}",
            dim,
            row.len()
        );
        data.extend_from_slice(row);
    }

    Array2::from_shape_vec((rows.len(), dim), data).expect("rows_to_matrix: shape mismatch")
}

/// Turn a sequence of N scalars into an N x 1 matrix.
///
/// An empty sequence yields the empty matrix.
pub fn scalars_to_matrix<T: Clone>(values: &[T]) -> Array2<T> {
    if values.is_empty() {
        return Array2::empty();
    }

    Array2::from_shape_vec((values.len(), 1), values.to_vec())
        .expect("scalars_to_matrix: shape mismatch")
}
