use crate::AvlTree;

/// Handle to a node slot in the tree's arena.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
pub(crate) fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) parent: Id,
    pub(crate) left: Id,
    pub(crate) right: Id,
    /// Height of the right subtree minus height of the left subtree.
    pub(crate) balance: i8,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Id) -> Self {
        Self {
            key,
            value,
            parent,
            left: Id::NIL,
            right: Id::NIL,
            balance: 0,
        }
    }
}

impl<K, V> AvlTree<K, V> {
    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<K, V> {
        debug_assert!(!x.is_nil());
        &self.nodes[x.idx()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<K, V> {
        debug_assert!(!x.is_nil());
        &mut self.nodes[x.idx()]
    }

    #[inline(always)]
    pub(crate) fn parent(&self, x: Id) -> Id {
        self.node(x).parent
    }

    #[inline(always)]
    pub(crate) fn left(&self, x: Id) -> Id {
        self.node(x).left
    }

    #[inline(always)]
    pub(crate) fn right(&self, x: Id) -> Id {
        self.node(x).right
    }

    #[inline(always)]
    pub(crate) fn balance(&self, x: Id) -> i8 {
        self.node(x).balance
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, x: Id, parent: Id) {
        self.node_mut(x).parent = parent;
    }

    #[inline(always)]
    pub(crate) fn set_left(&mut self, x: Id, left: Id) {
        self.node_mut(x).left = left;
    }

    #[inline(always)]
    pub(crate) fn set_right(&mut self, x: Id, right: Id) {
        self.node_mut(x).right = right;
    }

    #[inline(always)]
    pub(crate) fn set_balance(&mut self, x: Id, balance: i8) {
        self.node_mut(x).balance = balance;
    }

    #[inline(always)]
    pub(crate) fn update_balance(&mut self, x: Id, diff: i8) {
        self.node_mut(x).balance += diff;
    }

    /// `x` must not be nil. A root node is neither a left nor a right child.
    #[inline(always)]
    pub(crate) fn is_left_child(&self, x: Id) -> bool {
        let p = self.parent(x);
        !p.is_nil() && self.left(p) == x
    }

    pub(crate) fn alloc(&mut self, key: K, value: V, parent: Id) -> Id {
        let x = id(self.nodes.len());
        self.nodes.push(Node::new(key, value, parent));
        x
    }

    /// Frees the slot of a node that is already unlinked from the tree.
    ///
    /// The arena stays dense: the last slot is moved into the hole and every link to it is
    /// rewritten. Handles equal to the old last index are stale afterwards.
    pub(crate) fn dealloc(&mut self, x: Id) -> (K, V) {
        debug_assert!(x.idx() < self.nodes.len());
        let last = id(self.nodes.len() - 1);
        if x != last {
            let (p, l, r) = {
                let moved = self.node(last);
                (moved.parent, moved.left, moved.right)
            };
            if p.is_nil() {
                self.root = x;
            } else if self.left(p) == last {
                self.set_left(p, x);
            } else {
                self.set_right(p, x);
            }
            if !l.is_nil() {
                self.set_parent(l, x);
            }
            if !r.is_nil() {
                self.set_parent(r, x);
            }
        }
        let node = self.nodes.swap_remove(x.idx());
        (node.key, node.value)
    }
}
