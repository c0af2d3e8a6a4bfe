//! densemat: stateless helpers over dense numeric matrices.
//!
//! This crate provides row/column removal, vector-sequence to matrix
//! conversion, boolean-mask row filtering with index remapping for
//! downstream topology (face/edge lists), vertical concatenation, and a
//! plain-text matrix writer.
//!
//! The design favors small, testable modules over the crate math
//! `Array2`/`Array1` containers, with structured errors for contract
//! violations so callers decide whether to abort or propagate.
pub mod convert;
pub mod error;
pub mod filter;
pub mod io;
pub mod math;
pub mod remap;
pub mod stack;
