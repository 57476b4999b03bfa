//! Singly-linked integer list
//!
//! The list owns a chain of boxed nodes terminated by `None`. Every node is
//! reachable from exactly one list, so tearing a list down never touches
//! another list's nodes.
//!
//! - [`IntList`]: the list itself with append, lookup, iteration and printing
//! - [`utils`]: splice ([`IntList::insert_all`]) and split ([`IntList::split_at`])
//!
//! # Example
//!
//! ```
//! use labkit::list::IntList;
//!
//! let mut target: IntList = (0..10).collect();
//! let source: IntList = [-3, -4, -5].into_iter().collect();
//!
//! target.insert_all(5, &source).unwrap();
//! assert_eq!(
//!     target.to_string(),
//!     "[0, 1, 2, 3, 4, -3, -4, -5, 5, 6, 7, 8, 9]"
//! );
//! ```

pub mod utils;

use std::fmt;

pub(crate) type Link = Option<Box<Node>>;

/// A list node: one value and the rest of the chain
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl Node {
    pub(crate) fn new(value: i32) -> Self {
        Node { value, next: None }
    }
}

/// An owned, singly-linked list of `i32` values
pub struct IntList {
    pub(crate) head: Link,
    pub(crate) len: usize,
}

impl IntList {
    /// Create an empty list
    pub fn new() -> Self {
        IntList { head: None, len: 0 }
    }

    /// Append a value at the tail
    pub fn add(&mut self, value: i32) {
        self.extend(std::iter::once(value));
    }

    /// Number of values in the list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value at `index`, or `None` past the tail
    pub fn get(&self, index: usize) -> Option<i32> {
        self.iter().nth(index).copied()
    }

    /// Iterate values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copy the values into a vector, head first
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }

    /// Drop every node, leaving the list empty
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Explicit teardown: consume the list and release all of its nodes
    pub fn free(self) {
        drop(self);
    }

    /// Mutable reference to the link that holds position `index`
    ///
    /// Position `len` is the terminating `None`. Returns `None` past that.
    pub(crate) fn link_at(&mut self, index: usize) -> Option<&mut Link> {
        if index > self.len {
            return None;
        }
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }
}

impl Default for IntList {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative so that dropping a long chain cannot overflow the stack
impl Drop for IntList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for IntList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for IntList {}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl Extend<i32> for IntList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }

        let mut added = 0;
        for value in iter {
            let node = cursor.insert(Box::new(Node::new(value)));
            cursor = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = IntList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`IntList`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut list = IntList::new();
        for value in 0..10 {
            list.add(value);
        }
        assert_eq!(list.len(), 10);
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_list() {
        let list = IntList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(0), None);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn test_get_and_display() {
        let list: IntList = [7, -2, 9].into_iter().collect();
        assert_eq!(list.get(0), Some(7));
        assert_eq!(list.get(2), Some(9));
        assert_eq!(list.get(3), None);
        assert_eq!(list.to_string(), "[7, -2, 9]");
        assert_eq!(format!("{:?}", list), "[7, -2, 9]");
    }

    #[test]
    fn test_link_at_bounds() {
        let mut list: IntList = (0..3).collect();
        assert!(list.link_at(3).is_some_and(|link| link.is_none()));
        assert!(list.link_at(4).is_none());
        assert_eq!(
            list.link_at(1)
                .and_then(|link| link.as_ref().map(|node| node.value)),
            Some(1)
        );
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut list: IntList = (0..5).collect();
        list.clear();
        assert!(list.is_empty());
        list.add(42);
        assert_eq!(list.to_vec(), vec![42]);
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let list: IntList = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        list.free();
    }

    #[test]
    fn test_clone_is_independent() {
        let original: IntList = (1..4).collect();
        let mut copy = original.clone();
        copy.add(4);
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![1, 2, 3, 4]);
        assert_ne!(original, copy);
    }
}
