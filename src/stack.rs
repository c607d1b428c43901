//! A LIFO stack over a growable array.
//!
//! # Examples
//!
//! ```
//! use classic_ds::stack::Stack;
//! use classic_ds::error::EmptyStackError;
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! stack.push(30);
//!
//! assert_eq!(stack.peek(), Ok(&30));
//! assert_eq!(stack.pop(), Ok(30));
//! assert_eq!(stack.size(), 2);
//! assert!(!stack.is_empty());
//!
//! // Popping past the bottom is an error rather than a `None`.
//! stack.pop().unwrap();
//! stack.pop().unwrap();
//! assert_eq!(stack.pop(), Err(EmptyStackError));
//! ```

use std::fmt;

use crate::error::EmptyStackError;

/// A last-in, first-out container. The most recently pushed element is the top.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places `item` on top of the stack. Amortized `O(1)`.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.items.last().ok_or(EmptyStackError)
    }

    /// The number of elements on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.items.last())
            .field("size", &self.items.len())
            .finish()
    }
}
