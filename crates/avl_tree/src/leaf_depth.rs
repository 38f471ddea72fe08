use crate::AvlTree;

impl<K, V> AvlTree<K, V> {
    /// Returns `true` when every leaf lies at the same depth.
    ///
    /// Empty and single-node trees qualify trivially. Only nodes without any children count as
    /// leaves; a node with a single child is interior.
    pub fn has_equal_leaf_depths(&self) -> bool {
        if self.root.is_nil() {
            return true;
        }
        let mut leaf_depth = None;
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((x, depth)) = stack.pop() {
            let (l, r) = (self.left(x), self.right(x));
            if l.is_nil() && r.is_nil() {
                match leaf_depth {
                    None => leaf_depth = Some(depth),
                    Some(d) if d != depth => return false,
                    Some(_) => {}
                }
                continue;
            }
            for child in [r, l] {
                if !child.is_nil() {
                    stack.push((child, depth + 1));
                }
            }
        }
        true
    }
}
