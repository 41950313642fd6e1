#![cfg(test)]

// Property tests for HashMap kept inside the crate so they can inspect bucket
// placement directly.

use crate::config::HashMapConfig;
use crate::hash_map::HashMap;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap as StdHashMap};
use std::hash::{BuildHasherDefault, Hasher};

// Pool-indexed operations: indices shrink towards earlier keys, op lists
// shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Remove(usize),
    Take(usize),
    Get(usize),
    GetOrInsert(usize, i32),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z0-9]{0,6}", 1..=24).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Put(i, v)),
            2 => idx.clone().prop_map(Op::Remove),
            1 => idx.clone().prop_map(Op::Take),
            2 => idx.clone().prop_map(Op::Get),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::GetOrInsert(i, v)),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_structure<S: std::hash::BuildHasher>(
    sut: &HashMap<String, i32, S>,
    model: &StdHashMap<String, i32>,
    min_capacity: usize,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(sut.len(), model.len());
    prop_assert!(sut.load_factor() <= sut.load_factor_threshold());
    prop_assert!(sut.capacity() >= min_capacity);
    for (i, bucket) in sut.buckets.iter().enumerate() {
        for e in bucket {
            prop_assert_eq!(sut.bucket_index(e.key()), i);
        }
    }
    let keys: BTreeSet<&String> = sut.keys().collect();
    prop_assert_eq!(keys.len(), sut.len(), "a key is stored twice");
    let model_keys: BTreeSet<&String> = model.keys().collect();
    prop_assert_eq!(keys, model_keys);
    Ok(())
}

fn run_scenario<S: std::hash::BuildHasher>(
    mut sut: HashMap<String, i32, S>,
    pool: Vec<String>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: StdHashMap<String, i32> = StdHashMap::new();
    let mut min_capacity = sut.capacity();

    for op in ops {
        match op {
            Op::Put(i, v) => {
                let k = pool[i].clone();
                let prev = sut.put(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                prop_assert_eq!(sut.get(&k), Some(&v));
            }
            Op::Remove(i) => {
                let k = &pool[i];
                let before = sut.len();
                let removed = sut.remove(k);
                prop_assert_eq!(removed, model.remove(k).is_some());
                if !removed {
                    prop_assert_eq!(sut.len(), before);
                }
                prop_assert!(!sut.contains(k));
            }
            Op::Take(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.take(k), model.remove(k));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
                prop_assert_eq!(sut.contains(k), model.contains_key(k));
            }
            Op::GetOrInsert(i, v) => {
                let k = pool[i].clone();
                let got = *sut.get_or_insert(k.clone(), v);
                let expected = *model.entry(k).or_insert(v);
                prop_assert_eq!(got, expected);
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
        }
        check_structure(&sut, &model, min_capacity)?;
        min_capacity = sut.capacity();
    }
    Ok(())
}

// Only the first byte of the first non-empty write counts: four distinct
// hashes, so chains get long without every key colliding.
#[derive(Default)]
struct LowBitsHasher {
    hash: u64,
    seen: bool,
}

impl Hasher for LowBitsHasher {
    fn write(&mut self, bytes: &[u8]) {
        if self.seen {
            return;
        }
        if let Some(&b) = bytes.first() {
            self.hash = u64::from(b % 4);
            self.seen = true;
        }
    }
    fn finish(&self) -> u64 {
        self.hash
    }
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised after every operation:
// - `get` returns the most recent `put` for each key, across any resizes.
// - `len` matches the model; each key is stored once.
// - Every entry sits in the bucket its hash selects.
// - `len / capacity <= threshold`; capacity never shrinks.
// - A missed `remove` leaves `len` unchanged.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), cap in 1usize..=8) {
        let sut: HashMap<String, i32> = HashMap::with_capacity(cap).unwrap();
        run_scenario(sut, pool, ops)?;
    }

    #[test]
    fn prop_state_machine_clustered(
        (pool, ops) in arb_scenario(),
        cap in 1usize..=4,
        threshold in prop_oneof![Just(0.5), Just(0.75), Just(1.0), Just(3.0)],
    ) {
        let config = HashMapConfig::default()
            .with_initial_capacity(cap)
            .with_load_factor_threshold(threshold);
        let sut: HashMap<String, i32, BuildHasherDefault<LowBitsHasher>> =
            HashMap::with_config_and_hasher(config, BuildHasherDefault::default()).unwrap();
        run_scenario(sut, pool, ops)?;
    }
}

// Property: inserting N distinct keys one at a time only ever doubles, and
// only on the insert that would otherwise exceed the threshold.
proptest! {
    #[test]
    fn prop_growth_only_when_needed(n in 1usize..300, cap in 1usize..=16) {
        let mut m: HashMap<usize, usize> = HashMap::with_capacity(cap).unwrap();
        for i in 0..n {
            let before = m.capacity();
            let would_exceed = (m.len() + 1) as f64 / before as f64 > 0.75;
            m.put(i, i);
            if would_exceed {
                prop_assert!(m.capacity() >= before * 2);
                prop_assert_eq!(m.capacity() % cap, 0);
            } else {
                prop_assert_eq!(m.capacity(), before);
            }
            prop_assert!(m.load_factor() <= 0.75);
        }
        for i in 0..n {
            prop_assert_eq!(m.get(&i), Some(&i));
        }
    }
}
