use std::cmp::Ordering;

use crate::AvlTree;
use crate::node::Id;

impl<K: Ord, V> AvlTree<K, V> {
    /// Inserts `key`, or overwrites the value of an existing entry and returns the old value.
    ///
    /// Overwriting never changes the shape of the tree.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.root.is_nil() {
            self.root = self.alloc(key, value, Id::NIL);
            return None;
        }

        let mut cur = self.root;
        let mut parent;
        let mut go_left;
        loop {
            parent = cur;
            let node = self.node_mut(cur);
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
                Ordering::Less => {
                    go_left = true;
                    cur = node.left;
                }
                Ordering::Greater => {
                    go_left = false;
                    cur = node.right;
                }
            }
            if cur.is_nil() {
                break;
            }
        }

        let n = self.alloc(key, value, parent);
        if go_left {
            self.set_left(parent, n);
        } else {
            self.set_right(parent, n);
        }

        // `parent` had at most one child before this insert, so a nonzero balance means the new
        // node filled the empty side.
        if self.balance(parent) != 0 {
            self.set_balance(parent, 0);
        } else {
            self.set_balance(parent, if go_left { -1 } else { 1 });
            self.insert_fix(parent, n);
        }
        None
    }

    /// Walks up from `p`, whose subtree just grew by one level through its child `n`.
    fn insert_fix(&mut self, mut p: Id, mut n: Id) {
        loop {
            if p.is_nil() {
                return;
            }
            let g = self.parent(p);
            if g.is_nil() {
                return;
            }

            if self.left(g) == p {
                self.update_balance(g, -1);
                match self.balance(g) {
                    0 => return,
                    -1 => {
                        n = p;
                        p = g;
                    }
                    _ => {
                        debug_assert_eq!(self.balance(g), -2);
                        if self.left(p) == n {
                            tracing::trace!("insert fix: left-left at {g:?}");
                            self.rotate_right(g);
                            self.set_balance(p, 0);
                            self.set_balance(g, 0);
                        } else {
                            tracing::trace!("insert fix: left-right at {g:?}");
                            self.rotate_left(p);
                            self.rotate_right(g);
                            let (bp, bg) = match self.balance(n) {
                                -1 => (0, 1),
                                0 => (0, 0),
                                _ => (-1, 0),
                            };
                            self.set_balance(p, bp);
                            self.set_balance(g, bg);
                            self.set_balance(n, 0);
                        }
                        return;
                    }
                }
            } else {
                self.update_balance(g, 1);
                match self.balance(g) {
                    0 => return,
                    1 => {
                        n = p;
                        p = g;
                    }
                    _ => {
                        debug_assert_eq!(self.balance(g), 2);
                        if self.right(p) == n {
                            tracing::trace!("insert fix: right-right at {g:?}");
                            self.rotate_left(g);
                            self.set_balance(p, 0);
                            self.set_balance(g, 0);
                        } else {
                            tracing::trace!("insert fix: right-left at {g:?}");
                            self.rotate_right(p);
                            self.rotate_left(g);
                            let (bp, bg) = match self.balance(n) {
                                1 => (0, -1),
                                0 => (0, 0),
                                _ => (1, 0),
                            };
                            self.set_balance(p, bp);
                            self.set_balance(g, bg);
                            self.set_balance(n, 0);
                        }
                        return;
                    }
                }
            }
        }
    }
}
