//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and store behaviour over random inputs.

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt::Display;

use crate::cache::{generate_key, CacheKey, FileStore, MemoryStore, ParamType};

// == Strategies ==
/// Generates operation names
fn operation_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,31}".prop_map(|s| s)
}

/// Generates free-form text arguments, including separators and path characters
fn text_arg_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _/.-]{0,32}".prop_map(|s| s)
}

/// Type standing in for a context argument that policies exclude
struct Context(String);

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Deriving a key twice from the same call yields the same key.
    #[test]
    fn prop_key_is_deterministic(
        name in operation_name_strategy(),
        args in prop::collection::vec(any::<i64>(), 0..6)
    ) {
        let params = vec![ParamType::of::<i64>(); args.len()];
        let refs: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();

        let first = generate_key(&name, &params, &BTreeSet::new(), &refs);
        let second = generate_key(&name, &params, &BTreeSet::new(), &refs);
        prop_assert_eq!(first, second);
    }

    // Varying only an excluded-type argument leaves the key unchanged.
    #[test]
    fn prop_excluded_argument_does_not_affect_key(
        name in operation_name_strategy(),
        value in any::<i32>(),
        ctx_a in text_arg_strategy(),
        ctx_b in text_arg_strategy()
    ) {
        let params = vec![ParamType::of::<Context>(), ParamType::of::<i32>()];
        let excluded = BTreeSet::from([ParamType::of::<Context>()]);
        let ctx_a = Context(ctx_a);
        let ctx_b = Context(ctx_b);

        let a = generate_key(&name, &params, &excluded, &[&ctx_a, &value]);
        let b = generate_key(&name, &params, &excluded, &[&ctx_b, &value]);
        prop_assert_eq!(a, b);
    }

    // Distinct integer argument lists never collide for one operation.
    #[test]
    fn prop_distinct_int_args_give_distinct_keys(
        a in prop::collection::vec(any::<i32>(), 2),
        b in prop::collection::vec(any::<i32>(), 2)
    ) {
        prop_assume!(a != b);
        let params = vec![ParamType::of::<i32>(); 2];

        let key_a = generate_key("calculate_sum", &params, &BTreeSet::new(), &[&a[0], &a[1]]);
        let key_b = generate_key("calculate_sum", &params, &BTreeSet::new(), &[&b[0], &b[1]]);
        prop_assert_ne!(key_a, key_b);
    }

    // File stems only contain filesystem-safe characters.
    #[test]
    fn prop_file_stem_is_filesystem_safe(name in operation_name_strategy(), arg in text_arg_strategy()) {
        let key = generate_key(&name, &[ParamType::of::<String>()], &BTreeSet::new(), &[&arg]);
        let stem = key.file_stem();

        prop_assert!(stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
        prop_assert_eq!(stem.chars().count(), key.as_str().chars().count());
    }

    // The first value stored under a key is the one every later read returns.
    #[test]
    fn prop_memory_store_is_write_once(
        keys in prop::collection::vec("[a-z]{1,4}", 1..40),
        values in prop::collection::vec(any::<u64>(), 40)
    ) {
        let mut store = MemoryStore::new();
        let mut first_seen = std::collections::HashMap::new();

        for (key, value) in keys.iter().zip(values) {
            store.put(CacheKey::from(key.as_str()), value);
            first_seen.entry(key.clone()).or_insert(value);
        }

        prop_assert_eq!(store.len(), first_seen.len());
        for (key, value) in first_seen {
            prop_assert_eq!(store.get::<u64>(&CacheKey::from(key.as_str())), Some(value));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // A saved record is read back by a fresh store over the same directory.
    #[test]
    fn prop_file_record_persists(arg in any::<i32>(), value in any::<i64>()) {
        let dir = tempfile::TempDir::new().unwrap();
        let key = generate_key("factorial", &[ParamType::of::<i32>()], &BTreeSet::new(), &[&arg]);

        FileStore::new(dir.path()).save(&key, &value, None).unwrap();

        let reloaded: Option<i64> = FileStore::new(dir.path()).load(&key, None).unwrap();
        prop_assert_eq!(reloaded, Some(value));
    }
}
