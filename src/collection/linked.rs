
//! Indexed collection backed by a doubly-linked list.
//!
//! The nodes live in an arena owned by the list and refer to each
//! other by slot handles, so neither the forward nor the backward
//! link owns anything. Slots vacated by removals are recycled through
//! a free list.

use super::base::{Collection, IndexedCollection};
use super::error::CollectionError;

use itertools::Itertools;

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ops::Index;

type Handle = usize;

/// Indexed collection stored as a doubly-linked list. Inserting or
/// removing at either end is constant-time. Positional access walks
/// from whichever end of the list is closer to the index.
pub struct LinkedListIndexedCollection<T> {
  slots: Vec<Slot<T>>,
  free: Option<Handle>,
  head: Option<Handle>,
  tail: Option<Handle>,
  size: usize,
}

struct Node<T> {
  value: T,
  previous: Option<Handle>,
  next: Option<Handle>,
}

enum Slot<T> {
  Occupied(Node<T>),
  Vacant { next_free: Option<Handle> },
}

/// Borrowing iterator over a [`LinkedListIndexedCollection`], in
/// positional order.
pub struct Iter<'a, T> {
  list: &'a LinkedListIndexedCollection<T>,
  front: Option<Handle>,
  back: Option<Handle>,
  remaining: usize,
}

/// Owning iterator over a [`LinkedListIndexedCollection`], in
/// positional order.
pub struct IntoIter<T> {
  list: LinkedListIndexedCollection<T>,
}

impl<T> LinkedListIndexedCollection<T> {
  pub fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: None,
      head: None,
      tail: None,
      size: 0,
    }
  }

  /// A list containing all elements of `other`, in `other`'s
  /// traversal order.
  pub fn from_collection<C>(other: &C) -> Self
  where C: Collection<T> + ?Sized,
        T: Clone {
    let mut result = Self::new();
    result.add_all(other);
    result
  }

  pub fn front(&self) -> Option<&T> {
    self.head.map(|handle| &self.node(handle).value)
  }

  pub fn back(&self) -> Option<&T> {
    self.tail.map(|handle| &self.node(handle).value)
  }

  /// Adds a value at position zero in constant time.
  pub fn push_front(&mut self, value: T) {
    let old_head = self.head;
    let handle = self.allocate(Node { value, previous: None, next: old_head });
    match old_head {
      Some(old_head) => self.node_mut(old_head).previous = Some(handle),
      None => self.tail = Some(handle),
    }
    self.head = Some(handle);
    self.size += 1;
  }

  /// Adds a value at the end of the list in constant time.
  pub fn push_back(&mut self, value: T) {
    let old_tail = self.tail;
    let handle = self.allocate(Node { value, previous: old_tail, next: None });
    match old_tail {
      Some(old_tail) => self.node_mut(old_tail).next = Some(handle),
      None => self.head = Some(handle),
    }
    self.tail = Some(handle);
    self.size += 1;
  }

  pub fn pop_front(&mut self) -> Option<T> {
    if self.size == 0 {
      None
    } else {
      self.remove(0).ok()
    }
  }

  pub fn pop_back(&mut self) -> Option<T> {
    if self.size == 0 {
      None
    } else {
      self.remove(self.size - 1).ok()
    }
  }

  pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
    let handle = self.locate(index)?;
    Ok(&mut self.node_mut(handle).value)
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      list: self,
      front: self.head,
      back: self.tail,
      remaining: self.size,
    }
  }

  fn locate(&self, index: usize) -> Result<Handle, CollectionError> {
    self.locate_counting(index).map(|(handle, _)| handle)
  }

  /// Finds the node at `index`, walking forward from the head or
  /// backward from the tail, whichever visits fewer nodes. Returns
  /// the node's handle and the number of nodes visited, which never
  /// exceeds `ceil(size / 2) + 1`.
  fn locate_counting(&self, index: usize) -> Result<(Handle, usize), CollectionError> {
    CollectionError::check_index(index, self.size)?;
    let mut visited = 1;
    let handle = if index + 1 < self.size - index {
      let mut handle = self.head.expect("nonempty list should have a head");
      for _ in 0..index {
        handle = self.node(handle).next.expect("list ended before its size");
        visited += 1;
      }
      handle
    } else {
      let mut handle = self.tail.expect("nonempty list should have a tail");
      for _ in (index + 1)..self.size {
        handle = self.node(handle).previous.expect("list ended before its size");
        visited += 1;
      }
      handle
    };
    Ok((handle, visited))
  }

  fn node(&self, handle: Handle) -> &Node<T> {
    match &self.slots[handle] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("handle {handle} refers to a vacant slot"),
    }
  }

  fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
    match &mut self.slots[handle] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("handle {handle} refers to a vacant slot"),
    }
  }

  /// Stores `node` in a free slot, reusing a vacated one if
  /// possible.
  fn allocate(&mut self, node: Node<T>) -> Handle {
    match self.free {
      Some(handle) => {
        let Slot::Vacant { next_free } = &self.slots[handle] else {
          panic!("free list contains occupied slot {handle}");
        };
        self.free = *next_free;
        self.slots[handle] = Slot::Occupied(node);
        handle
      }
      None => {
        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
      }
    }
  }

  /// Vacates the slot at `handle` and returns the node that was
  /// there. Links are NOT updated.
  fn release(&mut self, handle: Handle) -> Node<T> {
    let slot = mem::replace(&mut self.slots[handle], Slot::Vacant { next_free: self.free });
    self.free = Some(handle);
    match slot {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("handle {handle} refers to a vacant slot"),
    }
  }
}

impl<T> Collection<T> for LinkedListIndexedCollection<T> {
  fn len(&self) -> usize {
    self.size
  }

  fn add(&mut self, value: T) {
    self.push_back(value);
  }

  fn contains(&self, value: &T) -> bool
  where T: PartialEq {
    self.index_of(value).is_some()
  }

  fn remove_value(&mut self, value: &T) -> bool
  where T: PartialEq {
    match self.index_of(value) {
      Some(index) => self.remove(index).is_ok(),
      None => false,
    }
  }

  fn for_each<F>(&self, effect: F)
  where F: FnMut(&T) {
    self.iter().for_each(effect);
  }

  fn clear(&mut self) {
    self.slots.clear();
    self.free = None;
    self.head = None;
    self.tail = None;
    self.size = 0;
  }
}

impl<T> IndexedCollection<T> for LinkedListIndexedCollection<T> {
  fn get(&self, index: usize) -> Result<&T, CollectionError> {
    let handle = self.locate(index)?;
    Ok(&self.node(handle).value)
  }

  fn insert(&mut self, value: T, position: usize) -> Result<(), CollectionError> {
    CollectionError::check_position(position, self.size)?;
    if position == 0 {
      self.push_front(value);
    } else if position == self.size {
      self.push_back(value);
    } else {
      // Interior position, so the located node has a predecessor.
      let successor = self.locate(position)?;
      let predecessor = self.node(successor).previous.expect("interior node should have a predecessor");
      let handle = self.allocate(Node { value, previous: Some(predecessor), next: Some(successor) });
      self.node_mut(predecessor).next = Some(handle);
      self.node_mut(successor).previous = Some(handle);
      self.size += 1;
    }
    Ok(())
  }

  fn index_of(&self, value: &T) -> Option<usize>
  where T: PartialEq {
    self.iter().position(|element| element == value)
  }

  fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
    let handle = self.locate(index)?;
    if self.size == 1 {
      let node = self.release(handle);
      self.clear();
      return Ok(node.value);
    }
    let node = self.release(handle);
    match (node.previous, node.next) {
      (None, Some(next)) => {
        self.node_mut(next).previous = None;
        self.head = Some(next);
      }
      (Some(previous), None) => {
        self.node_mut(previous).next = None;
        self.tail = Some(previous);
      }
      (Some(previous), Some(next)) => {
        self.node_mut(previous).next = Some(next);
        self.node_mut(next).previous = Some(previous);
      }
      (None, None) => {
        panic!("only the sole node of a list can lack both neighbors");
      }
    }
    self.size -= 1;
    Ok(node.value)
  }
}

impl<T> Default for LinkedListIndexedCollection<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for LinkedListIndexedCollection<T> {
  /// The clone is compacted: its nodes occupy consecutive slots in
  /// positional order, regardless of how `self` is laid out.
  fn clone(&self) -> Self {
    self.iter().cloned().collect()
  }
}

impl<T: PartialEq> PartialEq for LinkedListIndexedCollection<T> {
  fn eq(&self, other: &Self) -> bool {
    self.size == other.size && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for LinkedListIndexedCollection<T> {}

impl<T: Debug> Debug for LinkedListIndexedCollection<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: Display> Display for LinkedListIndexedCollection<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.iter().join(", "))
  }
}

impl<T> Index<usize> for LinkedListIndexedCollection<T> {
  type Output = T;

  /// Panics if `index` is out of bounds. Use
  /// [`IndexedCollection::get`] for a checked alternative.
  fn index(&self, index: usize) -> &T {
    match self.get(index) {
      Ok(value) => value,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T> FromIterator<T> for LinkedListIndexedCollection<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut result = Self::new();
    result.extend(iter);
    result
  }
}

impl<T> Extend<T> for LinkedListIndexedCollection<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }
    let node = self.list.node(self.front?);
    self.front = node.next;
    self.remaining -= 1;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  fn next_back(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }
    let node = self.list.node(self.back?);
    self.back = node.previous;
    self.remaining -= 1;
    Some(&node.value)
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.list.pop_front()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.list.size, Some(self.list.size))
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<T> {
    self.list.pop_back()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedListIndexedCollection<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter { list: self }
  }
}

impl<'a, T> IntoIterator for &'a LinkedListIndexedCollection<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
