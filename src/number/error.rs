
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComplexError {
  #[error("Cannot divide by zero.")]
  DivisionByZero,
  #[error("Cannot take the zeroth root of a number.")]
  ZeroRoot,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseComplexError {
  #[error("Cannot parse a complex number from an empty string.")]
  Empty,
  #[error("'{0}' is not a valid complex number.")]
  Malformed(String),
}
