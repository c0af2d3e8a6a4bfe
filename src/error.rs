use std::error::Error;
use std::fmt;

/// Contract violations raised by row-wise matrix operations.
///
/// The offending values are carried so callers can decide whether to abort
/// or propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixOpError {
    /// Vertical concatenation of two non-empty matrices with differing
    /// column counts.
    ColumnCountMismatch { left: usize, right: usize },
    /// An index matrix referenced a position past the end of an
    /// indirection table.
    IndexOutOfRange { index: usize, bound: usize },
}

impl fmt::Display for MatrixOpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixOpError::ColumnCountMismatch { left, right } => write!(
                f,
                "vstack: matrices don't have the same nr of columns: {} and {}",
                left, right
            ),
            MatrixOpError::IndexOutOfRange { index, bound } => write!(
                f,
                "apply_indirection: index matrix references position {} but indirection has length {}",
                index, bound
            ),
        }
    }
}

impl Error for MatrixOpError {}
