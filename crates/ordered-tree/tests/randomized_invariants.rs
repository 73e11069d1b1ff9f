use std::collections::BTreeMap;

use ordered_tree::{OrderedTree, TreeError};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Compares every observable query against the `BTreeMap` model.
fn assert_matches_model(tree: &OrderedTree<u16, u32>, model: &BTreeMap<u16, u32>) {
    assert_eq!(tree.size(), model.len());
    assert_eq!(tree.is_empty(), model.is_empty());

    let entries: Vec<(u16, u32)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u16, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, expected);

    assert_eq!(
        tree.min().map(|(k, v)| (*k, *v)),
        model.first_key_value().map(|(k, v)| (*k, *v))
    );
    assert_eq!(
        tree.max().map(|(k, v)| (*k, *v)),
        model.last_key_value().map(|(k, v)| (*k, *v))
    );
}

/// Floor/ceiling of `q` per the model's range queries.
fn assert_bounds_match_model(tree: &OrderedTree<u16, u32>, model: &BTreeMap<u16, u32>, q: u16) {
    let floor = model.range(..=q).next_back().map(|(k, _)| *k);
    let ceiling = model.range(q..).next().map(|(k, _)| *k);

    let expected_floor = if model.is_empty() {
        Err(TreeError::EmptyTree)
    } else {
        floor.ok_or(TreeError::NotFound)
    };
    let expected_ceiling = if model.is_empty() {
        Err(TreeError::EmptyTree)
    } else {
        ceiling.ok_or(TreeError::NotFound)
    };

    assert_eq!(tree.floor(&q).copied(), expected_floor);
    assert_eq!(tree.ceiling(&q).copied(), expected_ceiling);
}

proptest! {
    #[test]
    fn in_order_stays_sorted_under_arbitrary_mutation(
        ops in prop::collection::vec((0u16..64, any::<u32>(), any::<bool>()), 0..256)
    ) {
        let mut tree = OrderedTree::new();
        let mut model = BTreeMap::new();

        for (key, value, is_insert) in ops {
            if is_insert {
                let inserted = tree.insert_or_assign(key, value);
                prop_assert_eq!(inserted, model.insert(key, value).is_none());
            } else {
                let removed = tree.remove(&key);
                prop_assert_eq!(removed, model.remove(&key).is_some());
            }

            let keys: Vec<u16> = tree.keys().copied().collect();
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(keys.len(), tree.size());
        }

        assert_matches_model(&tree, &model);
    }

    #[test]
    fn floor_and_ceiling_match_the_model(
        keys in prop::collection::btree_set(0u16..512, 0..64),
        queries in prop::collection::vec(0u16..512, 1..32)
    ) {
        let mut tree = OrderedTree::new();
        let mut model = BTreeMap::new();
        for k in keys {
            tree.insert_or_assign(k, u32::from(k));
            model.insert(k, u32::from(k));
        }
        for q in queries {
            assert_bounds_match_model(&tree, &model, q);
        }
    }

    #[test]
    fn insert_find_remove_round_trip(key in any::<u16>(), noise in prop::collection::vec(any::<u16>(), 0..32)) {
        let mut tree = OrderedTree::new();
        for n in noise {
            tree.insert_or_assign(n, 0u32);
        }

        tree.insert_or_assign(key, 1);
        prop_assert!(tree.find(&key));

        let size_before = tree.size();
        prop_assert!(tree.remove(&key));
        prop_assert!(!tree.find(&key));
        prop_assert_eq!(tree.size(), size_before - 1);

        let keys: Vec<u16> = tree.keys().copied().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn overwrite_never_changes_size(
        pairs in prop::collection::vec((0u16..32, any::<u32>()), 1..128)
    ) {
        let mut tree = OrderedTree::new();
        let mut model = BTreeMap::new();
        for (k, v) in pairs {
            tree.insert_or_assign(k, v);
            model.insert(k, v);
            prop_assert_eq!(tree.size(), model.len());
            prop_assert_eq!(tree.get(&k), Some(&v));
        }
    }
}

#[test]
fn seeded_mutation_storm_matches_the_model() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x0f1e_2d3c_4b5a_6978);
    let mut tree = OrderedTree::new();
    let mut model: BTreeMap<u16, u32> = BTreeMap::new();

    for round in 0..10_000u32 {
        let key = rng.gen_range(0..512u16);
        // Biased toward growth so the tree reaches a few hundred entries.
        if rng.gen_bool(0.6) {
            let value = rng.gen::<u32>();
            assert_eq!(
                tree.insert_or_assign(key, value),
                model.insert(key, value).is_none()
            );
        } else {
            assert_eq!(tree.remove(&key), model.remove(&key).is_some());
        }

        if round % 512 == 0 {
            assert_matches_model(&tree, &model);
            assert_bounds_match_model(&tree, &model, rng.gen_range(0..512u16));
            // Height is bounded by the entry count; balance never panics.
            let h = tree.height();
            assert!(h < tree.size() as i32 || (h == -1 && tree.is_empty()));
            let _ = tree.is_balanced();
        }
    }

    assert_matches_model(&tree, &model);

    // Drain every remaining key and confirm the tree empties cleanly.
    let remaining: Vec<u16> = model.keys().copied().collect();
    for k in remaining {
        assert!(tree.remove(&k));
        model.remove(&k);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}
