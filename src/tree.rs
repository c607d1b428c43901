//! An unbalanced Binary Search Tree built from boxed nodes.
//!
//! Every node exclusively owns its two children. Values smaller than a node go to its left,
//! everything else (including values equal to it) goes to its right. There is no rebalancing so
//! inserting values in sorted order produces a tree that is really a linked list.
//!
//! Mutations are written in a rebinding style: [`Tree::insert`] and [`Tree::delete`] consume a
//! subtree and hand back the subtree that should replace it. [`BinarySearchTree`] is a thin owner
//! of the root that does the rebinding for you.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//! assert_eq!(
//!     tree.inorder_traversal().copied().collect::<Vec<_>>(),
//!     [20, 30, 40, 50, 60, 70, 80]
//! );
//!
//! tree.delete(&30);
//! assert_eq!(tree.search(&30), None);
//! assert_eq!(tree.find_min(), Ok(&20));
//! ```
//!
//! The same operations on a bare subtree:
//!
//! ```
//! use classic_ds::tree::Tree;
//!
//! let tree = Tree::new();
//! let tree = tree.insert(2).insert(1).insert(3);
//! let tree = tree.delete(&2);
//!
//! assert!(tree.search(&2).is_none());
//! assert_eq!(tree.find_min().map(|n| *n.value()), Ok(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::InvariantViolation;

/// A subtree: either empty or an owned root [`Node`].
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A boxed `Node` that owns both of its children.
    Node(Box<Node<T>>),
}

/// A value and its two (possibly empty) subtrees.
pub struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree of values less than this node's value.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree of values greater than or equal to this node's value.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Detaches the leftmost node of the subtree rooted here. Returns its value and whatever
    /// subtree should take this node's place.
    fn take_min(mut self: Box<Self>) -> (T, Tree<T>) {
        match mem::take(&mut self.left) {
            Tree::Leaf => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Tree::Node(left) => {
                let (min, new_left) = left.take_min();
                self.left = new_left;
                (min, Tree::Node(self))
            }
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree::Leaf
    }

    /// Returns `true` if this subtree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Leaf)
    }

    /// Returns the subtree with `value` added. Ties go to the right.
    pub fn insert(self, value: T) -> Self
    where
        T: Ord,
    {
        match self {
            Tree::Leaf => Tree::Node(Box::new(Node::new(value))),
            Tree::Node(mut n) => {
                if value < n.value {
                    n.left = mem::take(&mut n.left).insert(value);
                } else {
                    n.right = mem::take(&mut n.right).insert(value);
                }
                Tree::Node(n)
            }
        }
    }

    /// Returns the subtree without the first node found holding `value`. If no node holds it,
    /// the subtree comes back unchanged.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest value in
    /// its right subtree.
    pub fn delete(self, value: &T) -> Self
    where
        T: Ord,
    {
        match self {
            Tree::Leaf => Tree::Leaf,
            Tree::Node(mut n) => match value.cmp(&n.value) {
                Ordering::Less => {
                    n.left = mem::take(&mut n.left).delete(value);
                    Tree::Node(n)
                }
                Ordering::Greater => {
                    n.right = mem::take(&mut n.right).delete(value);
                    Tree::Node(n)
                }
                Ordering::Equal => {
                    let Node { left, right, .. } = *n;
                    match (left, right) {
                        (Tree::Leaf, right) => right,
                        (left, Tree::Leaf) => left,
                        (left, Tree::Node(right)) => {
                            let (successor, right) = right.take_min();
                            Tree::Node(Box::new(Node {
                                value: successor,
                                left,
                                right,
                            }))
                        }
                    }
                }
            },
        }
    }

    /// Finds the node holding `value`, if there is one.
    pub fn search(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match self {
            Tree::Leaf => None,
            Tree::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.search(value),
                Ordering::Equal => Some(&**n),
                Ordering::Greater => n.right.search(value),
            },
        }
    }

    /// Finds the node holding the smallest value by walking left.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] when called on an empty subtree.
    pub fn find_min(&self) -> Result<&Node<T>, InvariantViolation> {
        match self {
            Tree::Leaf => Err(InvariantViolation),
            Tree::Node(n) => match &n.left {
                Tree::Leaf => Ok(&**n),
                left => left.find_min(),
            },
        }
    }

    /// Iterates over the values in ascending order.
    pub fn inorder(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf => write!(f, "Leaf"),
            Tree::Node(n) => f
                .debug_struct("Node")
                .field("value", &n.value)
                .field("left", &n.left)
                .field("right", &n.right)
                .finish(),
        }
    }
}

/// A Binary Search Tree that owns its root.
///
/// # Examples
///
/// ```
/// use classic_ds::tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
///
/// assert_eq!(tree.search(&1), Some(&1));
/// assert_eq!(tree.search(&42), None);
/// ```
pub struct BinarySearchTree<T> {
    root: Tree<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: Tree::Leaf }
    }

    /// The root subtree.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        self.inorder_traversal().count()
    }

    /// Adds `value` to the tree. Values equal to an existing one are kept as well, to its right.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = mem::take(&mut self.root).insert(value);
    }

    /// Removes one node holding `value`. Deleting a value that isn't present does nothing.
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        self.root = mem::take(&mut self.root).delete(value);
    }

    /// Returns the stored value equal to `value`, if any.
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.search(value).map(Node::value)
    }

    /// Returns `true` if some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, InvariantViolation> {
        self.root.find_min().map(Node::value)
    }

    /// Iterates over the values in ascending order. Each call starts again from the root.
    pub fn inorder_traversal(&self) -> Iter<'_, T> {
        self.root.inorder()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts every item in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_traversal()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root)
            .finish()
    }
}

/// In-order iterator over a [`Tree`].
pub struct Iter<'a, T> {
    // Nodes whose left subtree has been (or is being) visited but whose own value hasn't.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(&**n);
            tree = &n.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}
