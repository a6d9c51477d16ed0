
use super::error::CollectionError;

/// A mutable collection of present values. Duplicates are allowed,
/// and elements are compared by value.
///
/// Every collection has a well-defined positional order, which is
/// the order in which [`Collection::for_each`] visits its elements.
pub trait Collection<T> {
  /// Returns the number of elements in the collection.
  fn len(&self) -> usize;

  /// Returns true if the collection has no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Adds a value to the end of the collection. This is equivalent
  /// to inserting at position `self.len()`.
  fn add(&mut self, value: T);

  /// As [`Collection::add`], but for a value that may be absent. An
  /// absent value is rejected with [`CollectionError::AbsentValue`],
  /// and the collection is NOT modified in that case.
  fn try_add(&mut self, value: Option<T>) -> Result<(), CollectionError> {
    let value = value.ok_or(CollectionError::AbsentValue)?;
    self.add(value);
    Ok(())
  }

  /// Returns true if some element of the collection is equal to
  /// `value`.
  fn contains(&self, value: &T) -> bool
  where T: PartialEq;

  /// Removes the first element (in positional order) which is equal
  /// to `value`. Returns whether anything was removed.
  fn remove_value(&mut self, value: &T) -> bool
  where T: PartialEq;

  /// Applies `effect` to every element, in positional order.
  fn for_each<F>(&self, effect: F)
  where F: FnMut(&T);

  /// Removes all elements from the collection.
  fn clear(&mut self);

  /// Returns a snapshot of the collection's elements, in positional
  /// order. The result shares nothing with `self`.
  fn to_vec(&self) -> Vec<T>
  where T: Clone {
    let mut result = Vec::with_capacity(self.len());
    self.for_each(|value| result.push(value.clone()));
    result
  }

  /// Appends every element of `other` to `self`, in the order that
  /// `other` traverses them.
  fn add_all<C>(&mut self, other: &C)
  where C: Collection<T> + ?Sized,
        T: Clone {
    other.for_each(|value| self.add(value.clone()));
  }
}

/// A [`Collection`] whose elements can be accessed, inserted, and
/// removed by position.
///
/// Valid element indices are `0..len()`. Valid insertion positions
/// are `0..=len()`, where `len()` means "append".
pub trait IndexedCollection<T>: Collection<T> {
  /// Returns a reference to the element at `index`, or
  /// [`CollectionError::IndexOutOfBounds`].
  fn get(&self, index: usize) -> Result<&T, CollectionError>;

  /// Inserts `value` at `position`, shifting the element currently
  /// at that position (and everything after it) one place toward the
  /// end. Fails with [`CollectionError::InvalidPosition`] if
  /// `position > len()`, in which case `self` is NOT modified.
  fn insert(&mut self, value: T, position: usize) -> Result<(), CollectionError>;

  /// Returns the smallest index whose element equals `value`, or
  /// `None` if there is no such element.
  fn index_of(&self, value: &T) -> Option<usize>
  where T: PartialEq;

  /// Removes and returns the element at `index`. Everything after it
  /// moves one place toward the start.
  fn remove(&mut self, index: usize) -> Result<T, CollectionError>;
}
