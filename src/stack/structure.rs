
use super::error::StackError;
use crate::collection::{ArrayIndexedCollection, Collection, CollectionError};

/// LIFO stack. Implemented internally as an array-backed collection
/// whose "top" is at the end, allowing for amortized constant-time
/// pushes and constant-time pops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
  elements: ArrayIndexedCollection<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, element: T) {
    self.elements.add(element);
  }

  /// As [`Stack::push`], but for a value that may be absent. An
  /// absent value is rejected and the stack is NOT modified.
  pub fn try_push(&mut self, element: Option<T>) -> Result<(), CollectionError> {
    self.elements.try_add(element)
  }

  /// Removes and returns the most recently pushed element.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop_last().ok_or(StackError::EmptyStack)
  }

  /// As [`Stack::pop`], but with no result value. Use this function
  /// if you don't plan to use the result and don't care if the `pop`
  /// call fails due to an empty stack.
  pub fn pop_and_discard(&mut self) {
    let _ = self.elements.pop_last();
  }

  /// Returns the top of the stack without removing it.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.elements.last().ok_or(StackError::EmptyStack)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn clear(&mut self) {
    self.elements.clear();
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

}

impl<T> IntoIterator for Stack<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<Self::Item>;

  /// Iterates (by value) from the bottom of the stack.
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements: elements.into_iter().collect() }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: ArrayIndexedCollection::new(),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_empty() {
    let empty_stack = Stack::<i32>::new();
    assert_eq!(empty_stack.len(), 0);
    assert!(empty_stack.is_empty());
    let empty_stack = Stack::<i32>::default();
    assert_eq!(empty_stack.len(), 0);
  }

  #[test]
  fn test_from_vec() {
    let stack1 = Stack::from(vec![0, 10, 20, 25]);
    let stack2 = {
      let mut stack2 = Stack::new();
      stack2.push(0);
      stack2.push(10);
      stack2.push(20);
      stack2.push(25);
      stack2
    };
    assert_eq!(stack2, stack1);
  }

  #[test]
  fn test_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(StackError::EmptyStack));
  }

  #[test]
  fn test_try_push() {
    let mut stack = Stack::from(vec![1]);
    assert_eq!(stack.try_push(None), Err(CollectionError::AbsentValue));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.try_push(Some(2)), Ok(()));
    assert_eq!(stack.peek(), Ok(&2));
  }

  #[test]
  fn test_peek() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), Err(StackError::EmptyStack));
    stack.push('A');
    stack.push('B');
    assert_eq!(stack.peek(), Ok(&'B'));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Ok('B'));
    assert_eq!(stack.peek(), Ok(&'A'));
  }

  #[test]
  fn test_lifo_interleaved() {
    let mut stack = Stack::new();
    let mut model = Vec::new();
    for i in 0..100 {
      if i % 3 == 2 {
        assert_eq!(stack.pop().ok(), model.pop());
      } else {
        stack.push(i);
        model.push(i);
      }
      assert_eq!(stack.len(), model.len());
    }
    while let Some(expected) = model.pop() {
      assert_eq!(stack.pop(), Ok(expected));
    }
    assert_eq!(stack.pop(), Err(StackError::EmptyStack));
  }

  #[test]
  fn test_len() {
    let mut stack = Stack::new();
    assert_eq!(stack.len(), 0);
    stack.push(0);
    assert_eq!(stack.len(), 1);
    stack.push(0);
    stack.push(0);
    assert_eq!(stack.len(), 3);
    let _ = stack.pop();
    assert_eq!(stack.len(), 2);
  }

  #[test]
  fn test_is_empty() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push(0);
    assert!(!stack.is_empty());
    stack.push(0);
    assert!(!stack.is_empty());
    let _ = stack.pop();
    assert!(!stack.is_empty());
    let _ = stack.pop();
    assert!(stack.is_empty());
  }

  #[test]
  fn test_pop_and_discard() {
    let mut stack = Stack::from(vec![1, 2]);
    stack.pop_and_discard();
    assert_eq!(stack.len(), 1);
    stack.pop_and_discard();
    stack.pop_and_discard();
    assert!(stack.is_empty());
  }

  #[test]
  fn test_clear() {
    let mut stack = Stack::from(vec![1, 2, 3]);
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), Err(StackError::EmptyStack));
  }

  #[test]
  fn test_iter() {
    let stack = Stack::from(vec!['A', 'B', 'C', 'D']);
    assert_eq!(stack.iter().copied().collect::<String>(), "ABCD");
    assert_eq!(stack.iter().rev().copied().collect::<String>(), "DCBA");
    let vec = stack.into_iter().collect::<Vec<_>>();
    assert_eq!(vec, vec!['A', 'B', 'C', 'D']);
  }
}
