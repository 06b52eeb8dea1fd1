//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the eviction invariants against simple models.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::cache::{Cache, CachePolicy, FifoCache, LifoCache, PolicyCache, UnboundedCache};

// == Strategies ==
/// Small key space so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

fn capacity_strategy() -> impl Strategy<Value = usize> {
    1usize..8
}

/// A put call, possibly with a missing key or value
#[derive(Debug, Clone)]
struct PutOp {
    key: Option<String>,
    value: Option<u32>,
}

fn put_op_strategy() -> impl Strategy<Value = PutOp> {
    (
        prop::option::weighted(0.9, key_strategy()),
        prop::option::weighted(0.9, value_strategy()),
    )
        .prop_map(|(key, value)| PutOp { key, value })
}

fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
    prop_oneof![
        Just(CachePolicy::Basic),
        Just(CachePolicy::Fifo),
        Just(CachePolicy::Lifo),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A get on a key that was never inserted is always "not found".
    #[test]
    fn prop_never_inserted_is_not_found(
        policy in policy_strategy(),
        capacity in capacity_strategy(),
        ops in prop::collection::vec(put_op_strategy(), 0..40),
    ) {
        let mut cache = PolicyCache::new(policy, capacity).unwrap();
        let mut inserted = HashSet::new();

        for op in ops {
            if let (Some(key), Some(_)) = (&op.key, &op.value) {
                inserted.insert(key.clone());
            }
            cache.put(op.key, op.value);
        }

        for key in ["zz", "never", "q"] {
            prop_assert!(!inserted.contains(key));
            prop_assert_eq!(cache.get(&key.to_string()), None);
        }
    }

    // The unbounded cache keeps every key with its latest value.
    #[test]
    fn prop_unbounded_keeps_everything(
        ops in prop::collection::vec(put_op_strategy(), 0..100),
    ) {
        let mut cache = UnboundedCache::new();
        let mut model = HashMap::new();

        for op in ops {
            if let (Some(key), Some(value)) = (op.key.clone(), op.value) {
                model.insert(key, value);
            }
            prop_assert_eq!(cache.put(op.key, op.value), None);
        }

        prop_assert_eq!(cache.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(cache.get(key), Some(value));
        }
        prop_assert_eq!(cache.stats().evictions, 0);
    }

    // FIFO matches a queue model: overwrites keep position, the front goes first.
    #[test]
    fn prop_fifo_matches_queue_model(
        capacity in capacity_strategy(),
        ops in prop::collection::vec(put_op_strategy(), 0..100),
    ) {
        let mut cache = FifoCache::with_capacity(capacity).unwrap();
        let mut order: VecDeque<String> = VecDeque::new();
        let mut values = HashMap::new();

        for op in ops {
            let expected = match (&op.key, &op.value) {
                (Some(key), Some(value)) => {
                    if !values.contains_key(key) {
                        order.push_back(key.clone());
                    }
                    values.insert(key.clone(), *value);
                    if values.len() > capacity {
                        let oldest = order.pop_front().unwrap();
                        values.remove(&oldest);
                        Some(oldest)
                    } else {
                        None
                    }
                }
                _ => None,
            };

            prop_assert_eq!(cache.put(op.key, op.value), expected);
            prop_assert!(cache.len() <= capacity);
        }

        let keys: Vec<String> = cache.snapshot().into_iter().map(|e| e.key).collect();
        prop_assert_eq!(keys, Vec::from(order));
        for (key, value) in &values {
            prop_assert_eq!(cache.get(key), Some(value));
        }
    }

    // LIFO matches a stack model: evict the top before admitting a new key,
    // overwrites move a key to the top.
    #[test]
    fn prop_lifo_matches_stack_model(
        capacity in capacity_strategy(),
        ops in prop::collection::vec(put_op_strategy(), 0..100),
    ) {
        let mut cache = LifoCache::with_capacity(capacity).unwrap();
        let mut stack: Vec<String> = Vec::new();
        let mut values = HashMap::new();

        for op in ops {
            let expected = match (&op.key, &op.value) {
                (Some(key), Some(value)) => {
                    let mut discarded = None;
                    if !values.contains_key(key) && values.len() >= capacity {
                        let top = stack.pop().unwrap();
                        values.remove(&top);
                        discarded = Some(top);
                    }
                    stack.retain(|k| k != key);
                    stack.push(key.clone());
                    values.insert(key.clone(), *value);
                    discarded
                }
                _ => None,
            };

            let discarded = cache.put(op.key.clone(), op.value);
            prop_assert_eq!(&discarded, &expected);
            if let (Some(key), Some(_)) = (&op.key, &op.value) {
                prop_assert_ne!(discarded.as_ref(), Some(key), "evicted the key just inserted");
            }
            prop_assert!(cache.len() <= capacity);
        }

        let keys: Vec<String> = cache.snapshot().into_iter().map(|e| e.key).collect();
        prop_assert_eq!(keys, stack);
    }

    // Overwriting with the same key returns the latest value and never evicts.
    #[test]
    fn prop_overwrite_semantics(
        policy in policy_strategy(),
        capacity in capacity_strategy(),
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let mut cache = PolicyCache::new(policy, capacity).unwrap();

        prop_assert_eq!(cache.put(Some(key.clone()), Some(v1)), None);
        prop_assert_eq!(cache.put(Some(key.clone()), Some(v2)), None);
        prop_assert_eq!(cache.get(&key), Some(&v2));
        prop_assert_eq!(cache.stats().evictions, 0);
    }

    // Filling past capacity with distinct keys evicts k1 under FIFO and kC under LIFO.
    #[test]
    fn prop_first_overflow_victim(capacity in capacity_strategy()) {
        let keys: Vec<String> = (0..=capacity).map(|i| format!("k{}", i + 1)).collect();

        let mut fifo = FifoCache::with_capacity(capacity).unwrap();
        let mut lifo = LifoCache::with_capacity(capacity).unwrap();
        for key in &keys[..capacity] {
            prop_assert_eq!(fifo.insert(key.clone(), 0u8), None);
            prop_assert_eq!(lifo.insert(key.clone(), 0u8), None);
        }

        let newest = keys[capacity].clone();
        prop_assert_eq!(fifo.insert(newest.clone(), 0), Some(keys[0].clone()));
        prop_assert_eq!(lifo.insert(newest, 0), Some(keys[capacity - 1].clone()));

        prop_assert_eq!(fifo.get(&keys[0]), None);
        for key in &keys[1..] {
            prop_assert!(fifo.get(key).is_some());
        }
        prop_assert_eq!(lifo.get(&keys[capacity - 1]), None);
    }

    // Evictions counted in stats equal keys reported as discarded.
    #[test]
    fn prop_eviction_count_matches_discards(
        policy in policy_strategy(),
        capacity in capacity_strategy(),
        ops in prop::collection::vec(put_op_strategy(), 0..60),
    ) {
        let mut cache = PolicyCache::new(policy, capacity).unwrap();
        let mut discards = 0u64;
        let mut ignored = 0u64;

        for op in ops {
            if op.key.is_none() || op.value.is_none() {
                ignored += 1;
            }
            if cache.put(op.key, op.value).is_some() {
                discards += 1;
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.evictions, discards);
        prop_assert_eq!(stats.ignored_puts, ignored);
        prop_assert_eq!(stats.total_entries, cache.len());
    }
}
