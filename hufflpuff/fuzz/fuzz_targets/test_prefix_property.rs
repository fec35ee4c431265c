#![no_main]

use common::count_str;
use hufflpuff::build_tree;
use hufflpuff::tree::build_tree::test_prefix_property;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if text.is_empty() {
        return;
    }
    let counts = count_str(&text).unwrap();
    let tree = build_tree(&counts).unwrap();
    test_prefix_property(&tree_to_table(&tree));
});
