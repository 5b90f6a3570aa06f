//! Quadratic Binary Functions.
//!
//! A ready-made [`Evaluator`](crate::Evaluator) for QBF instances, plus the
//! upper-triangular text format used by the classic `qbf020`…`qbf400`
//! benchmark files. Use [`Objective::Maximize`] for max-QBF; the search
//! engines always minimize.

mod function;
mod instance;

pub use function::{Objective, Qbf};
pub use instance::QbfInstance;
