//! A singly linked list. Each node owns the next one, so the list owns the whole chain through
//! its head.
//!
//! Positional operations never panic. Asking to delete from an empty list or to reach past the
//! end returns a [`Status`] other than [`Status::Ok`] and leaves the list as it was.
//!
//! # Examples
//!
//! ```
//! use classic_ds::error::Status;
//! use classic_ds::linked::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_at_beginning(5);
//! list.insert_at_beginning(3);
//! list.insert_at_beginning(1);
//! list.insert_at_end(7);
//! list.insert_at_end(9);
//! assert_eq!(list.insert_at_position(6, 3), Status::Ok);
//!
//! assert_eq!(list.traverse().copied().collect::<Vec<_>>(), [1, 3, 5, 6, 7, 9]);
//! assert_eq!(list.search(&6), Some(3));
//!
//! // Positions past the end are rejected, not clamped.
//! assert_eq!(list.insert_at_position(42, 100), Status::PositionOutOfRange);
//! assert_eq!(list.search(&42), None);
//! ```

use std::fmt;

use crate::error::Status;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// An ordered sequence of values connected by forward links.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `insert_at_beginning` | `O(1)` |
/// | `delete_at_beginning` | `O(1)` |
/// | `insert_at_end` | `O(n)` |
/// | `delete_at_end` | `O(n)` |
/// | `insert_at_position` | `O(i)` |
/// | `delete_at_position` | `O(i)` |
/// | `search` | `O(n)` |
/// | `len` | `O(n)` |
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so dropping a long chain doesn't recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list has no head node.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes in the list.
    pub fn len(&self) -> usize {
        self.traverse().count()
    }

    /// Makes `value` the new head of the list.
    pub fn insert_at_beginning(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Attaches `value` after the current last node, or makes it the head of an empty list.
    pub fn insert_at_end(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        match self.last_node_mut() {
            Some(last) => last.next = Some(node),
            None => self.head = Some(node),
        }
    }

    /// Inserts `value` so that it ends up at index `position`.
    ///
    /// A `position` of zero or less inserts at the beginning. Otherwise the list is walked
    /// `position - 1` steps from the head and the new node is spliced in after the node found
    /// there, so `position == len()` appends. If the walk runs off the end,
    /// [`Status::PositionOutOfRange`] is returned and nothing is inserted.
    pub fn insert_at_position(&mut self, value: T, position: isize) -> Status {
        if position <= 0 {
            self.insert_at_beginning(value);
            return Status::Ok;
        }

        match self.node_at_mut(position as usize - 1) {
            Some(node) => {
                let next = node.next.take();
                node.next = Some(Box::new(Node { value, next }));
                Status::Ok
            }
            None => report(Status::PositionOutOfRange, "insert_at_position", position),
        }
    }

    /// Removes the head node.
    pub fn delete_at_beginning(&mut self) -> Status {
        match self.head.take() {
            Some(head) => {
                self.head = head.next;
                Status::Ok
            }
            None => report(Status::EmptyList, "delete_at_beginning", 0),
        }
    }

    /// Removes the last node.
    pub fn delete_at_end(&mut self) -> Status {
        match self.len() {
            0 => report(Status::EmptyList, "delete_at_end", 0),
            1 => {
                self.head = None;
                Status::Ok
            }
            len => {
                if let Some(second_to_last) = self.node_at_mut(len - 2) {
                    second_to_last.next = None;
                }
                Status::Ok
            }
        }
    }

    /// Removes the node at index `position`.
    ///
    /// A `position` of zero or less removes the head. If there is no node at `position`,
    /// [`Status::PositionOutOfRange`] is returned and nothing is removed.
    pub fn delete_at_position(&mut self, position: isize) -> Status {
        if position <= 0 {
            return self.delete_at_beginning();
        }
        if self.is_empty() {
            return report(Status::EmptyList, "delete_at_position", position);
        }

        let removed = self
            .node_at_mut(position as usize - 1)
            .and_then(|prev| prev.next.take().map(|removed| (prev, removed)));
        match removed {
            Some((prev, removed)) => {
                prev.next = removed.next;
                Status::Ok
            }
            None => report(Status::PositionOutOfRange, "delete_at_position", position),
        }
    }

    /// Returns the index of the first node holding a value equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.traverse().position(|v| v == value)
    }

    /// Iterates over the values from head to tail. Each call starts again from the head.
    pub fn traverse(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Walks `index` steps from the head. `None` if the list ends first.
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    fn last_node_mut(&mut self) -> Option<&mut Node<T>> {
        let len = self.len();
        self.node_at_mut(len.checked_sub(1)?)
    }
}

fn report(status: Status, operation: &str, position: isize) -> Status {
    log::debug!("{}({}): {}", operation, position, status);
    status
}

/// Borrowing iterator over a [`LinkedList`], yielding values from head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds a list whose traversal order matches the iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(value) = items.pop() {
            list.insert_at_beginning(value);
        }
        list
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.traverse()).finish()
    }
}
