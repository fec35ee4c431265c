#![no_main]

use hufflpuff::Tree;
use libfuzzer_sys::fuzz_target;

// arbitrary shapes must either be rejected or rebuild into a tree with one leaf per symbol
fuzz_target!(|data: &[u8]| {
    let shape = data.iter().map(|byte| byte & 1 == 1).collect::<Vec<_>>();
    let num_leaves = shape.iter().filter(|is_leaf| **is_leaf).count();
    let symbols = vec!['x'; num_leaves];
    if let Some(tree) = Tree::from_preorder(&shape, &symbols) {
        assert_eq!(tree.num_leaves(), num_leaves);
    }
});
