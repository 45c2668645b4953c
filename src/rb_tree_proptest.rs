#![cfg(test)]

// Property tests for RbTree kept inside the crate so they can use the
// test-only invariant checker.

use crate::rb_tree::{Color, RbTree};
use proptest::prelude::*;

// Small alphabet so sequences contain plenty of repeats and shared prefixes.
fn arb_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1,3}", 0..200)
}

// Property: structural invariants hold after every insert + fix_root.
// - Root is black; no red node has a red child.
// - Every root-to-leaf path has the same number of black nodes.
// - In-order keys equal the sorted multiset of inserted words.
// - Height stays within 2 * log2(n + 1).
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_invariants_after_each_insert(words in arb_words()) {
        let mut t = RbTree::new();
        let mut model: Vec<String> = Vec::new();
        for w in &words {
            t.insert(w);
            t.fix_root();
            model.push(w.clone());
            t.assert_invariants();
            prop_assert_eq!(t.root_color(), Some(Color::Black));
        }
        model.sort();
        let keys: Vec<&str> = t.iter().collect();
        prop_assert_eq!(keys, model.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(t.len(), words.len());

        let bound = 2 * (usize::BITS - (t.len() + 1).leading_zeros()) as usize;
        prop_assert!(t.height() <= bound, "height {} > {}", t.height(), bound);
    }
}

// Property: search agrees with membership in the inserted multiset.
proptest! {
    #[test]
    fn prop_search_matches_model(words in arb_words(), probes in proptest::collection::vec("[a-e]{0,4}", 1..50)) {
        let mut t = RbTree::new();
        for w in &words {
            t.insert(w);
            t.fix_root();
        }
        for w in &words {
            prop_assert!(t.search(w), "inserted word {:?} not found", w);
        }
        for p in &probes {
            prop_assert_eq!(t.search(p), words.contains(p));
        }
    }
}
