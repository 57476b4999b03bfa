//! Splice and split utilities for [`IntList`]
//!
//! Both operations walk the chain with a single cursor, so they cost
//! O(index + moved values) and never index randomly into the list.

use super::{IntList, Node};
use crate::errors::{LabError, Result};

impl IntList {
    /// Insert a copy of every value in `source` starting at `index`.
    ///
    /// Values before `index` keep their positions; values from `index` onward
    /// follow the inserted run. `source` is only read. An empty `source` is a
    /// no-op. Fails with [`LabError::IndexOutOfRange`] when `index > len`,
    /// leaving the list untouched.
    pub fn insert_all(&mut self, index: usize, source: &IntList) -> Result<()> {
        let len = self.len;
        let Some(mut cursor) = self.link_at(index) else {
            return Err(LabError::IndexOutOfRange { index, len });
        };
        if source.is_empty() {
            return Ok(());
        }

        let tail = cursor.take();
        for &value in source {
            let node = cursor.insert(Box::new(Node::new(value)));
            cursor = &mut node.next;
        }
        *cursor = tail;

        self.len += source.len();
        Ok(())
    }

    /// Detach every node from `index` onward and return them as a new list.
    ///
    /// `split_at(0)` moves the whole list out. An index at or past the end
    /// leaves the list unchanged and returns an empty list.
    pub fn split_at(&mut self, index: usize) -> IntList {
        let len = self.len;
        let detached = match self.link_at(index) {
            Some(link) => link.take(),
            None => None,
        };
        if detached.is_none() {
            return IntList::new();
        }

        self.len = index;
        IntList {
            head: detached,
            len: len - index,
        }
    }
}
