use crate::AvlTree;
use crate::node::Id;

impl<K, V> AvlTree<K, V> {
    /// Replaces `old` with `new` in the child slot of `parent`, or as the root.
    fn replace_child(&mut self, parent: Id, old: Id, new: Id) {
        if parent.is_nil() {
            self.root = new;
        } else if self.left(parent) == old {
            self.set_left(parent, new);
        } else {
            self.set_right(parent, new);
        }
    }

    /// Lifts the left child of `x` into its place. Balance factors are left untouched.
    pub(crate) fn rotate_right(&mut self, x: Id) {
        let l = self.left(x);
        if l.is_nil() {
            return;
        }
        tracing::trace!("rotating right at {x:?}, lifting {l:?}");

        let moved = self.right(l);
        self.set_left(x, moved);
        if !moved.is_nil() {
            self.set_parent(moved, x);
        }

        let p = self.parent(x);
        self.set_parent(l, p);
        self.replace_child(p, x, l);

        self.set_right(l, x);
        self.set_parent(x, l);
    }

    /// Lifts the right child of `x` into its place. Balance factors are left untouched.
    pub(crate) fn rotate_left(&mut self, x: Id) {
        let r = self.right(x);
        if r.is_nil() {
            return;
        }
        tracing::trace!("rotating left at {x:?}, lifting {r:?}");

        let moved = self.left(r);
        self.set_right(x, moved);
        if !moved.is_nil() {
            self.set_parent(moved, x);
        }

        let p = self.parent(x);
        self.set_parent(r, p);
        self.replace_child(p, x, r);

        self.set_left(r, x);
        self.set_parent(x, r);
    }
}
