//! The containers under measurement.
//!
//! All but the singly linked list are the standard library collections; the aliases name them the
//! way the benchmark reports do.

use std::collections::{BTreeMap, HashMap, LinkedList};

use crate::Book;

mod forward_list;
pub use forward_list::{ForwardList, Iter};

/// Contiguous, growable array.
pub type Vector = Vec<Book>;

/// Doubly linked list with head and tail access.
pub type Dll = LinkedList<Book>;

/// Singly linked list with head access only.
pub type Sll = ForwardList<Book>;

/// Ordered tree keyed by ISBN.
pub type Bst = BTreeMap<String, Book>;

/// Hash table keyed by ISBN.
pub type HashTable = HashMap<String, Book>;
