mod bst;
mod error;
mod insert;
mod iter;
mod leaf_depth;
mod node;
mod remove;
mod rotate;
mod tree;

pub use error::KeyError;
pub use iter::{Iter, Keys, Values};
pub use tree::AvlTree;

use std::collections::BTreeMap;

/// Ordered map interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `remove` of an absent key is a no-op returning `None`.
/// - `lower_bound` returns the smallest `(k, v)` with `k >= key`.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn lower_bound(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;
}

impl<K: Ord, V> OrderedMap for AvlTree<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        AvlTree::new()
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        AvlTree::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        AvlTree::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        AvlTree::remove(self, key)
    }

    fn lower_bound(&self, key: &K) -> Option<(&K, &V)> {
        AvlTree::lower_bound(self, key)
    }
}

/// Baseline for comparisons.
impl<K: Ord, V> OrderedMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        BTreeMap::new()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn lower_bound(&self, key: &K) -> Option<(&K, &V)> {
        self.range(key..).next()
    }
}
