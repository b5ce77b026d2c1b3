use std::collections::BTreeMap;

use proptest::prelude::*;

use avlmap::AvlMap;

#[derive(Debug, Clone)]
enum Op {
    Add(i32, i32),
    Remove(i32),
}

// A small key range so that sequences hit duplicates and missing keys.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..64i32, any::<i32>()).prop_map(|(k, v)| Op::Add(k, v)),
        (0..64i32).prop_map(Op::Remove),
    ]
}

fn avl_height_bound(len: usize) -> f64 {
    1.44 * ((len as f64) + 2.0).log2()
}

proptest! {
    #[test]
    fn behaves_like_btree_map(ops in proptest::collection::vec(op_strategy(), 1..256)) {
        let mut map = AvlMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(key, value) => {
                    let is_new = !model.contains_key(&key);
                    prop_assert_eq!(map.add(key, value).is_ok(), is_new);
                    if is_new {
                        model.insert(key, value);
                    }
                }
                Op::Remove(key) => {
                    map.remove_key(&key);
                    model.remove(&key);
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert!((map.height() as f64) <= avl_height_bound(map.len()));
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
        prop_assert!(!map.contains_key(&-1));

        let mut keys = Vec::new();
        map.traverse_in_order(|k, _| keys.push(*k));
        let expected: Vec<i32> = model.keys().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn duplicate_insert_changes_nothing(keys in proptest::collection::btree_set(0..1024i32, 1..128)) {
        let mut map = AvlMap::new();
        for key in &keys {
            map.add(*key, *key).unwrap();
        }

        for key in &keys {
            prop_assert!(map.add(*key, key.wrapping_neg()).is_err());
        }

        prop_assert_eq!(map.len(), keys.len());
        for key in &keys {
            prop_assert_eq!(map.get(key), Some(key));
        }
    }

    #[test]
    fn stays_within_avl_height_bound(keys in proptest::collection::vec(any::<i32>(), 1..512)) {
        let mut map = AvlMap::new();
        for key in &keys {
            let _ = map.add(*key, ());
        }
        prop_assert!((map.height() as f64) <= avl_height_bound(map.len()));
    }
}
