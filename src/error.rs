
use crate::collection::CollectionError;
use crate::number::{ComplexError, ParseComplexError};
use crate::postfix::EvalError;
use crate::stack::StackError;

use thiserror::Error;

use std::error::{Error as StdError};

/// Any error produced by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  CustomError(Box<dyn StdError + Send + Sync + 'static>),
  #[error("{0}")]
  CollectionError(#[from] CollectionError),
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("{0}")]
  EvalError(#[from] EvalError),
  #[error("{0}")]
  ComplexError(#[from] ComplexError),
  #[error("{0}")]
  ParseComplexError(#[from] ParseComplexError),
}

impl Error {
  pub fn custom_error(err: impl StdError + Send + Sync + 'static) -> Self {
    Self::CustomError(Box::new(err))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::collection::{ArrayIndexedCollection, IndexedCollection};
  use crate::stack::Stack;

  fn pop_from_empty() -> Result<i32, Error> {
    let mut stack = Stack::new();
    Ok(stack.pop()?)
  }

  fn get_from_empty() -> Result<i32, Error> {
    let collection = ArrayIndexedCollection::new();
    Ok(*collection.get(0)?)
  }

  #[test]
  fn test_from_domain_errors() {
    assert!(matches!(pop_from_empty(), Err(Error::StackError(StackError::EmptyStack))));
    assert!(matches!(
      get_from_empty(),
      Err(Error::CollectionError(CollectionError::IndexOutOfBounds { index: 0, size: 0 })),
    ));
  }

  #[test]
  fn test_display_is_transparent() {
    let err = Error::from(EvalError::DivisionByZero);
    assert_eq!(err.to_string(), "Cannot divide by zero.");
    let err = Error::custom_error(ParseComplexError::Empty);
    assert_eq!(err.to_string(), "Cannot parse a complex number from an empty string.");
  }
}
