//! Error and status types shared by the collections in this crate.
//!
//! The structures fail in two different styles. [`Stack`](crate::stack::Stack) and
//! [`Tree::find_min`](crate::tree::Tree::find_min) return a [`Result`] with a zero-sized error
//! when they are asked for something that isn't there. The positional operations of
//! [`LinkedList`](crate::linked::LinkedList) never fail hard: they report a [`Status`] and leave
//! the list untouched.

use derive_more::{Display, Error, IsVariant};

/// Returned when popping or peeking a stack with no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("stack is empty")]
pub struct EmptyStackError;

/// Returned when an operation that requires a non-empty subtree is invoked on an empty one.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("find_min requires a non-empty subtree")]
pub struct InvariantViolation;

/// Outcome of a positional or deleting [`LinkedList`](crate::linked::LinkedList) operation.
///
/// Anything other than [`Status::Ok`] means the list was left exactly as it was.
#[must_use]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Status {
    /// The operation was applied.
    #[display("ok")]
    Ok,
    /// The list had no nodes to remove.
    #[display("list is empty")]
    EmptyList,
    /// The requested position lies past the end of the list.
    #[display("position out of range")]
    PositionOutOfRange,
}
