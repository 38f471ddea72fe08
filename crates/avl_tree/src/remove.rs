use std::borrow::Borrow;

use crate::AvlTree;
use crate::node::Id;

impl<K: Ord, V> AvlTree<K, V> {
    /// Removes `key` and returns its value. Removing an absent key leaves the tree untouched.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut x = self.find(key);
        if x.is_nil() {
            return None;
        }

        if !self.left(x).is_nil() && !self.right(x).is_nil() {
            let pred = self.predecessor(x);
            self.node_swap(x, pred);
            x = pred;
        }

        let child = if !self.left(x).is_nil() {
            self.left(x)
        } else {
            self.right(x)
        };
        let parent = self.parent(x);
        if !child.is_nil() {
            self.set_parent(child, parent);
        }

        if parent.is_nil() {
            self.root = child;
        } else {
            let diff = if self.left(parent) == x {
                self.set_left(parent, child);
                1
            } else {
                self.set_right(parent, child);
                -1
            };
            self.remove_fix(parent, diff);
        }

        let (_, value) = self.dealloc(x);
        Some(value)
    }

    /// Walks up from `n`, one of whose subtrees just lost a level. `diff` is the resulting
    /// change of `n`'s balance: `1` when the left side shrank, `-1` for the right side.
    fn remove_fix(&mut self, mut n: Id, mut diff: i8) {
        while !n.is_nil() {
            let parent = self.parent(n);
            let next_diff = if self.is_left_child(n) { 1 } else { -1 };

            self.update_balance(n, diff);
            match self.balance(n) {
                -2 => {
                    let c = self.left(n);
                    debug_assert!(!c.is_nil());
                    if c.is_nil() {
                        return;
                    }
                    match self.balance(c) {
                        -1 => {
                            tracing::trace!("remove fix: single right rotation at {n:?}");
                            self.rotate_right(n);
                            self.set_balance(n, 0);
                            self.set_balance(c, 0);
                        }
                        0 => {
                            tracing::trace!("remove fix: right rotation at {n:?}, height kept");
                            self.rotate_right(n);
                            self.set_balance(n, -1);
                            self.set_balance(c, 1);
                            return;
                        }
                        _ => {
                            let g = self.right(c);
                            tracing::trace!("remove fix: left-right rotation at {n:?}");
                            self.rotate_left(c);
                            self.rotate_right(n);
                            let (bn, bc) = match self.balance(g) {
                                1 => (0, -1),
                                0 => (0, 0),
                                _ => (1, 0),
                            };
                            self.set_balance(n, bn);
                            self.set_balance(c, bc);
                            self.set_balance(g, 0);
                        }
                    }
                }
                2 => {
                    let c = self.right(n);
                    debug_assert!(!c.is_nil());
                    if c.is_nil() {
                        return;
                    }
                    match self.balance(c) {
                        1 => {
                            tracing::trace!("remove fix: single left rotation at {n:?}");
                            self.rotate_left(n);
                            self.set_balance(n, 0);
                            self.set_balance(c, 0);
                        }
                        0 => {
                            tracing::trace!("remove fix: left rotation at {n:?}, height kept");
                            self.rotate_left(n);
                            self.set_balance(n, 1);
                            self.set_balance(c, -1);
                            return;
                        }
                        _ => {
                            let g = self.left(c);
                            tracing::trace!("remove fix: right-left rotation at {n:?}");
                            self.rotate_right(c);
                            self.rotate_left(n);
                            let (bn, bc) = match self.balance(g) {
                                -1 => (0, 1),
                                0 => (0, 0),
                                _ => (-1, 0),
                            };
                            self.set_balance(n, bn);
                            self.set_balance(c, bc);
                            self.set_balance(g, 0);
                        }
                    }
                }
                -1 | 1 => return,
                _ => {}
            }

            n = parent;
            diff = next_diff;
        }
    }
}
