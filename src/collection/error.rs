
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CollectionError {
  #[error("Cannot store an absent value in a collection.")]
  AbsentValue,
  #[error("Position {position} is invalid, expected a position between 0 and {size} inclusive.")]
  InvalidPosition {
    position: usize,
    size: usize,
  },
  #[error("Capacity must be at least 1, but {0} was requested.")]
  InvalidCapacity(usize),
  #[error("Index {index} is out of bounds for a collection of size {size}.")]
  IndexOutOfBounds {
    index: usize,
    size: usize,
  },
}

/// Broad classification of a [`CollectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The caller supplied a value, position, or capacity that the
  /// operation can never accept.
  InvalidArgument,
  /// An index did not refer to a live element.
  IndexOutOfBounds,
}

impl CollectionError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      CollectionError::AbsentValue
        | CollectionError::InvalidPosition { .. }
        | CollectionError::InvalidCapacity(_) => ErrorKind::InvalidArgument,
      CollectionError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
    }
  }

  /// Checks that `index` refers to a live element of a collection
  /// with `size` elements.
  pub(crate) fn check_index(index: usize, size: usize) -> Result<(), CollectionError> {
    if index >= size {
      Err(CollectionError::IndexOutOfBounds { index, size })
    } else {
      Ok(())
    }
  }

  /// Checks that `position` is a valid insertion point (including
  /// one-past-the-end) for a collection with `size` elements.
  pub(crate) fn check_position(position: usize, size: usize) -> Result<(), CollectionError> {
    if position > size {
      Err(CollectionError::InvalidPosition { position, size })
    } else {
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_kind() {
    assert_eq!(CollectionError::AbsentValue.kind(), ErrorKind::InvalidArgument);
    assert_eq!(CollectionError::InvalidCapacity(0).kind(), ErrorKind::InvalidArgument);
    assert_eq!(
      CollectionError::InvalidPosition { position: 4, size: 2 }.kind(),
      ErrorKind::InvalidArgument,
    );
    assert_eq!(
      CollectionError::IndexOutOfBounds { index: 2, size: 2 }.kind(),
      ErrorKind::IndexOutOfBounds,
    );
  }

  #[test]
  fn test_check_index() {
    assert_eq!(CollectionError::check_index(0, 1), Ok(()));
    assert_eq!(CollectionError::check_index(1, 1), Err(CollectionError::IndexOutOfBounds { index: 1, size: 1 }));
    assert_eq!(CollectionError::check_index(0, 0), Err(CollectionError::IndexOutOfBounds { index: 0, size: 0 }));
  }

  #[test]
  fn test_check_position() {
    assert_eq!(CollectionError::check_position(0, 0), Ok(()));
    assert_eq!(CollectionError::check_position(3, 3), Ok(()));
    assert_eq!(CollectionError::check_position(4, 3), Err(CollectionError::InvalidPosition { position: 4, size: 3 }));
  }

  #[test]
  fn test_display() {
    assert_eq!(
      CollectionError::IndexOutOfBounds { index: 5, size: 2 }.to_string(),
      "Index 5 is out of bounds for a collection of size 2.",
    );
    assert_eq!(
      CollectionError::InvalidCapacity(0).to_string(),
      "Capacity must be at least 1, but 0 was requested.",
    );
  }
}
