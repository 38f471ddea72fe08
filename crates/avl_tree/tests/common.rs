#![allow(unused, reason = "not used by all tests")]

use avl_tree::AvlTree;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// AVL trees with `n` entries are never taller than `1.44 * log2(n + 2)` levels.
pub fn assert_height_bound<K, V>(tree: &AvlTree<K, V>) {
    let bound = 1.44 * ((tree.len() + 2) as f64).log2();
    assert!(
        tree.height() as f64 <= bound,
        "height {} exceeds AVL bound {bound:.2} for {} entries",
        tree.height(),
        tree.len(),
    );
}
