//! This crate exposes three classic textbook data structures, mostly for educational purposes.
//!
//! ## Stack
//!
//! A [`Stack`](stack::Stack) is a last-in, first-out container. Elements are pushed onto and
//! popped off of the top. Asking an empty stack for its top element is an error.
//!
//! ## Linked List
//!
//! A [`LinkedList`](linked::LinkedList) is a chain of `Node`s where each `Node` stores a value
//! and owns the `Node` after it. Following the chain from the head always ends after as many
//! steps as there are values. The list supports inserting and deleting at the beginning, at the
//! end, and at a given position, as well as a linear search.
//!
//! > Positional operations that can't be carried out (deleting from an empty list, reaching
//! > past the end) don't fail loudly. They return a [`Status`](error::Status) and leave the list
//! > untouched.
//!
//! ## Binary Search Tree
//!
//! A [`BinarySearchTree`](tree::BinarySearchTree) is defined recursively using the notion of a
//! `Node`. Each `Node` stores a value and has up to two child `Node`s. The invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal
//!    to its own.
//!
//! Searching takes `O(height)`. This tree does nothing to limit its height, so inserting values
//! in sorted order makes every operation `O(N)`. Visiting the left subtree, then the node, then
//! the right subtree yields the values in sorted order.
//!
//! ## Features
//!
//! Each structure sits behind a Cargo feature of the same name as its module: `stack`, `linked`
//! and `tree`. The default `all` feature turns on all three.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "tree")]
pub mod tree;
