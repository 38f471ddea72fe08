use std::fmt;

use crate::iter::{Iter, Keys, Values};
use crate::node::{Id, Node};

/// Ordered map backed by an AVL tree.
///
/// Nodes live in a dense arena and link to each other through handles, including a parent link
/// that the fix-up walks follow upwards. Every node stores its balance factor (right height
/// minus left height), which stays within `-1..=1` between operations.
pub struct AvlTree<K, V> {
    pub(crate) nodes: Vec<Node<K, V>>,
    pub(crate) root: Id,
}

impl<K, V> AvlTree<K, V> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: Id::NIL,
        }
    }

    /// Creates an empty tree with room for `capacity` entries before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity < u32::MAX as usize);
        Self {
            nodes: Vec::with_capacity(capacity),
            root: Id::NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Id::NIL;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Number of levels, `0` for an empty tree. Follows the taller side at every node, so this
    /// is `O(log n)`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut x = self.root;
        while !x.is_nil() {
            height += 1;
            x = if self.balance(x) > 0 {
                self.right(x)
            } else {
                self.left(x)
            };
        }
        height
    }

    /// Recomputes every subtree height and checks the stored balance factors against them.
    pub fn is_balanced(&self) -> bool {
        self.checked_height(self.root).is_some()
    }

    fn checked_height(&self, x: Id) -> Option<usize> {
        if x.is_nil() {
            return Some(0);
        }
        let hl = self.checked_height(self.left(x))?;
        let hr = self.checked_height(self.right(x))?;
        let actual = hr as isize - hl as isize;
        let balance = self.balance(x);
        ((-1..=1).contains(&balance) && actual == balance as isize).then_some(1 + hl.max(hr))
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Asserts the structural invariants: parent/child links agree, keys are strictly ordered,
    /// and every balance factor is in `-1..=1` and matches the recomputed subtree heights.
    #[track_caller]
    pub fn assert_valid(&self) {
        if self.root.is_nil() {
            assert!(self.nodes.is_empty(), "empty tree still holds {} nodes", self.nodes.len());
            return;
        }
        assert!(self.parent(self.root).is_nil(), "root has a parent link");
        let (count, _) = self.assert_valid_inner(self.root, None, None);
        assert_eq!(count, self.nodes.len(), "arena holds unreachable nodes");
    }

    #[track_caller]
    fn assert_valid_inner(&self, x: Id, lo: Option<&K>, hi: Option<&K>) -> (usize, usize) {
        let node = self.node(x);
        if let Some(lo) = lo {
            assert!(*lo < node.key, "ordering violation: node is not greater than its lower bound");
        }
        if let Some(hi) = hi {
            assert!(node.key < *hi, "ordering violation: node is not less than its upper bound");
        }

        let (mut count, mut hl, mut hr) = (1, 0, 0);
        if !node.left.is_nil() {
            assert_eq!(self.parent(node.left), x, "left child of {x:?} has a stale parent link");
            let (c, h) = self.assert_valid_inner(node.left, lo, Some(&node.key));
            count += c;
            hl = h;
        }
        if !node.right.is_nil() {
            assert_eq!(self.parent(node.right), x, "right child of {x:?} has a stale parent link");
            let (c, h) = self.assert_valid_inner(node.right, Some(&node.key), hi);
            count += c;
            hr = h;
        }

        let actual = hr as isize - hl as isize;
        assert_eq!(
            node.balance as isize, actual,
            "AVL violation at {x:?}: stored balance {} but heights differ by {actual}",
            node.balance,
        );
        assert!(
            (-1..=1).contains(&node.balance),
            "AVL violation at {x:?}: balance {} out of range",
            node.balance,
        );
        (count, 1 + hl.max(hr))
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AvlTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTree<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
