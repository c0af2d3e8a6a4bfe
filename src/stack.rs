//! Vertical matrix concatenation.

use crate::error::MatrixOpError;
use crate::math::Array2;

/// Stack two matrices vertically: rows of `top` followed by rows of `bottom`.
///
/// A matrix with zero rows is compatible with anything and the result takes
/// the other operand's content. Two non-empty matrices must have the same
/// column count, otherwise [`MatrixOpError::ColumnCountMismatch`] is
/// returned.
pub fn vstack<T: Clone>(top: &Array2<T>, bottom: &Array2<T>) -> Result<Array2<T>, MatrixOpError> {
    if top.nrows() == 0 {
        return Ok(bottom.clone());
    }
    if bottom.nrows() == 0 {
        return Ok(top.clone());
    }

    if top.ncols() != bottom.ncols() {
        return Err(MatrixOpError::ColumnCountMismatch {
            left: top.ncols(),
            right: bottom.ncols(),
        });
    }

    let mut data = Vec::with_capacity(top.len() + bottom.len());
    data.extend_from_slice(top.as_slice());
    data.extend_from_slice(bottom.as_slice());

    Ok(
        Array2::from_shape_vec((top.nrows() + bottom.nrows(), top.ncols()), data)
            .expect("vstack: shape mismatch"),
    )
}
