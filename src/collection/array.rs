
//! Indexed collection backed by a contiguous, growable buffer.

use super::base::{Collection, IndexedCollection};
use super::error::CollectionError;

use itertools::Itertools;

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

/// Capacity of an [`ArrayIndexedCollection`] when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Indexed collection stored in a contiguous buffer. Positional reads
/// are constant-time, appends are amortized constant-time, and
/// inserting or removing in the middle is linear.
///
/// When the buffer is full, its capacity doubles. Capacity is never
/// reduced, not even by [`Collection::clear`].
#[derive(Clone)]
pub struct ArrayIndexedCollection<T> {
  elements: Vec<T>,
  capacity: usize,
}

impl<T> ArrayIndexedCollection<T> {
  /// An empty collection with capacity [`DEFAULT_CAPACITY`].
  pub fn new() -> Self {
    Self::with_capacity_unchecked(DEFAULT_CAPACITY)
  }

  /// An empty collection with the given starting capacity, which
  /// must be at least 1.
  pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
    if capacity < 1 {
      return Err(CollectionError::InvalidCapacity(capacity));
    }
    Ok(Self::with_capacity_unchecked(capacity))
  }

  fn with_capacity_unchecked(capacity: usize) -> Self {
    Self {
      elements: Vec::with_capacity(capacity),
      capacity,
    }
  }

  /// A collection containing all elements of `other`, in `other`'s
  /// traversal order.
  pub fn from_collection<C>(other: &C) -> Self
  where C: Collection<T> + ?Sized,
        T: Clone {
    let mut result = Self::with_capacity_unchecked(usize::max(DEFAULT_CAPACITY, other.len()));
    result.add_all(other);
    result
  }

  /// As [`ArrayIndexedCollection::from_collection`], but with an
  /// explicit starting capacity. If `other` has more elements than
  /// `capacity`, the collection is sized to fit them instead.
  pub fn from_collection_with_capacity<C>(other: &C, capacity: usize) -> Result<Self, CollectionError>
  where C: Collection<T> + ?Sized,
        T: Clone {
    if capacity < 1 {
      return Err(CollectionError::InvalidCapacity(capacity));
    }
    let mut result = Self::with_capacity_unchecked(usize::max(capacity, other.len()));
    result.add_all(other);
    Ok(result)
  }

  /// The number of elements this collection can hold before its
  /// buffer must grow.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
    CollectionError::check_index(index, self.elements.len())?;
    Ok(&mut self.elements[index])
  }

  /// The live elements, in positional order.
  pub fn as_slice(&self) -> &[T] {
    &self.elements
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elements.iter()
  }

  /// Removes and returns the last element, if any.
  pub(crate) fn pop_last(&mut self) -> Option<T> {
    self.elements.pop()
  }

  pub(crate) fn last(&self) -> Option<&T> {
    self.elements.last()
  }

  /// Doubles the capacity (or sets it to 1, if it was somehow zero).
  /// Existing elements are kept in place.
  fn grow(&mut self) {
    let new_capacity = usize::max(self.capacity * 2, 1);
    self.elements.reserve_exact(new_capacity - self.elements.len());
    self.capacity = new_capacity;
  }

  /// Inserts without validating `position`.
  fn insert_unchecked(&mut self, value: T, position: usize) {
    if self.elements.len() == self.capacity {
      self.grow();
    }
    self.elements.insert(position, value);
  }
}

impl<T> Collection<T> for ArrayIndexedCollection<T> {
  fn len(&self) -> usize {
    self.elements.len()
  }

  fn add(&mut self, value: T) {
    let size = self.len();
    self.insert_unchecked(value, size);
  }

  fn contains(&self, value: &T) -> bool
  where T: PartialEq {
    self.index_of(value).is_some()
  }

  fn remove_value(&mut self, value: &T) -> bool
  where T: PartialEq {
    match self.index_of(value) {
      Some(index) => {
        self.elements.remove(index);
        true
      }
      None => false,
    }
  }

  fn for_each<F>(&self, effect: F)
  where F: FnMut(&T) {
    self.elements.iter().for_each(effect);
  }

  fn clear(&mut self) {
    // Drops the elements now; the buffer itself is kept.
    self.elements.clear();
  }

  fn to_vec(&self) -> Vec<T>
  where T: Clone {
    self.elements.clone()
  }
}

impl<T> IndexedCollection<T> for ArrayIndexedCollection<T> {
  fn get(&self, index: usize) -> Result<&T, CollectionError> {
    CollectionError::check_index(index, self.len())?;
    Ok(&self.elements[index])
  }

  fn insert(&mut self, value: T, position: usize) -> Result<(), CollectionError> {
    CollectionError::check_position(position, self.len())?;
    self.insert_unchecked(value, position);
    Ok(())
  }

  fn index_of(&self, value: &T) -> Option<usize>
  where T: PartialEq {
    self.elements.iter().position(|element| element == value)
  }

  fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
    CollectionError::check_index(index, self.len())?;
    Ok(self.elements.remove(index))
  }
}

impl<T> Default for ArrayIndexedCollection<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Two collections are equal if they hold equal elements in the same
/// order. Capacity is not compared.
impl<T: PartialEq> PartialEq for ArrayIndexedCollection<T> {
  fn eq(&self, other: &Self) -> bool {
    self.elements == other.elements
  }
}

impl<T: Eq> Eq for ArrayIndexedCollection<T> {}

impl<T: Debug> Debug for ArrayIndexedCollection<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.elements.iter()).finish()
  }
}

impl<T: Display> Display for ArrayIndexedCollection<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.elements.iter().join(", "))
  }
}

impl<T> Index<usize> for ArrayIndexedCollection<T> {
  type Output = T;

  /// Panics if `index` is out of bounds. Use
  /// [`IndexedCollection::get`] for a checked alternative.
  fn index(&self, index: usize) -> &T {
    &self.elements[index]
  }
}

impl<T> FromIterator<T> for ArrayIndexedCollection<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let elements: Vec<T> = iter.into_iter().collect();
    let capacity = usize::max(DEFAULT_CAPACITY, elements.len());
    let mut result = Self::with_capacity_unchecked(capacity);
    result.elements.extend(elements);
    result
  }
}

impl<T> Extend<T> for ArrayIndexedCollection<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.add(value);
    }
  }
}

impl<T> IntoIterator for ArrayIndexedCollection<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a ArrayIndexedCollection<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
