
//! Numeric value types that live alongside the collections.

mod complex;
mod error;

pub use complex::{ComplexNumber, COMPARISON_EPSILON};
pub use error::{ComplexError, ParseComplexError};
