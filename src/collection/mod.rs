
//! Indexed collections with two interchangeable backends: a growable
//! array and a doubly-linked list. Both implement the
//! [`Collection`] and [`IndexedCollection`] traits, so code written
//! against the traits works with either.

pub mod array;
mod base;
mod error;
pub mod linked;

pub use array::{ArrayIndexedCollection, DEFAULT_CAPACITY};
pub use base::{Collection, IndexedCollection};
pub use error::{CollectionError, ErrorKind};
pub use linked::LinkedListIndexedCollection;

#[cfg(test)]
mod tests {
  use super::*;

  /// Exercises the shared contract through the traits only, so the
  /// same checks run against both backends.
  fn check_contract<C>(mut collection: C)
  where C: IndexedCollection<String> {
    assert!(collection.is_empty());
    for word in ["alpha", "beta", "gamma", "beta"] {
      collection.add(word.to_owned());
    }
    assert_eq!(collection.len(), 4);
    assert_eq!(collection.get(2).map(String::as_str), Ok("gamma"));
    assert_eq!(collection.index_of(&"beta".to_owned()), Some(1));
    assert!(collection.contains(&"alpha".to_owned()));

    collection.insert("delta".to_owned(), 0).unwrap();
    assert_eq!(collection.to_vec(), vec!["delta", "alpha", "beta", "gamma", "beta"]);

    assert!(collection.remove_value(&"beta".to_owned()));
    assert_eq!(collection.to_vec(), vec!["delta", "alpha", "gamma", "beta"]);
    assert_eq!(collection.remove(0), Ok("delta".to_owned()));

    assert_eq!(collection.try_add(None), Err(CollectionError::AbsentValue));
    assert_eq!(collection.len(), 3);
    let err = collection.insert("x".to_owned(), 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = collection.get(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);

    let mut total_len = 0;
    collection.for_each(|word| total_len += word.len());
    assert_eq!(total_len, "alpha".len() + "gamma".len() + "beta".len());

    collection.clear();
    assert!(collection.is_empty());
    assert!(collection.get(0).is_err());
  }

  #[test]
  fn test_array_contract() {
    check_contract(ArrayIndexedCollection::with_capacity(1).unwrap());
  }

  #[test]
  fn test_linked_contract() {
    check_contract(LinkedListIndexedCollection::new());
  }

  #[test]
  fn test_add_all_across_backends() {
    let array: ArrayIndexedCollection<i32> = (0..3).collect();
    let mut list: LinkedListIndexedCollection<i32> = (10..13).collect();
    list.add_all(&array);
    let mut array = array;
    array.add_all(&list);
    assert_eq!(list.to_vec(), vec![10, 11, 12, 0, 1, 2]);
    assert_eq!(array.to_vec(), vec![0, 1, 2, 10, 11, 12, 0, 1, 2]);
  }
}
