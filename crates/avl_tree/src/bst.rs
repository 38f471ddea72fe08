use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::node::Id;
use crate::{AvlTree, KeyError};

impl<K, V> AvlTree<K, V> {
    pub(crate) fn subtree_min(&self, mut x: Id) -> Id {
        while !self.left(x).is_nil() {
            x = self.left(x);
        }
        x
    }

    pub(crate) fn subtree_max(&self, mut x: Id) -> Id {
        while !self.right(x).is_nil() {
            x = self.right(x);
        }
        x
    }

    /// In-order previous node, or nil for the minimum.
    pub(crate) fn predecessor(&self, x: Id) -> Id {
        if !self.left(x).is_nil() {
            return self.subtree_max(self.left(x));
        }
        let mut child = x;
        let mut p = self.parent(x);
        while !p.is_nil() && self.left(p) == child {
            child = p;
            p = self.parent(p);
        }
        p
    }

    /// In-order next node, or nil for the maximum.
    pub(crate) fn successor(&self, x: Id) -> Id {
        if !self.right(x).is_nil() {
            return self.subtree_min(self.right(x));
        }
        let mut child = x;
        let mut p = self.parent(x);
        while !p.is_nil() && self.right(p) == child {
            child = p;
            p = self.parent(p);
        }
        p
    }

    /// Exchanges key and value of two nodes. Links and balance factors stay with the positions.
    pub(crate) fn node_swap(&mut self, a: Id, b: Id) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.idx() < b.idx() { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi.idx());
        let (x, y) = (&mut head[lo.idx()], &mut tail[0]);
        std::mem::swap(&mut x.key, &mut y.key);
        std::mem::swap(&mut x.value, &mut y.value);
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Id
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        while !cur.is_nil() {
            let node = self.node(cur);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
                Ordering::Equal => return cur,
            }
        }
        Id::NIL
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let x = self.find(key);
        (!x.is_nil()).then(|| &self.node(x).value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let x = self.find(key);
        if x.is_nil() {
            return None;
        }
        Some(&mut self.node_mut(x).value)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let x = self.find(key);
        if x.is_nil() {
            return None;
        }
        let node = self.node(x);
        Some((&node.key, &node.value))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(key).is_nil()
    }

    /// Like [`get`](Self::get), but a missing key is an error rather than `None`.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(KeyError)
    }

    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(KeyError)
    }

    /// Smallest entry whose key is `>= key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        let mut candidate = Id::NIL;
        while !cur.is_nil() {
            let node = self.node(cur);
            match key.cmp(node.key.borrow()) {
                Ordering::Less | Ordering::Equal => {
                    candidate = cur;
                    cur = node.left;
                }
                Ordering::Greater => cur = node.right,
            }
        }
        if candidate.is_nil() {
            return None;
        }
        let node = self.node(candidate);
        Some((&node.key, &node.value))
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        if self.root.is_nil() {
            return None;
        }
        let node = self.node(self.subtree_min(self.root));
        Some((&node.key, &node.value))
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        if self.root.is_nil() {
            return None;
        }
        let node = self.node(self.subtree_max(self.root));
        Some((&node.key, &node.value))
    }
}
