//! Property-based tests for round-trip, idempotence and order independence

use proptest::prelude::*;
use proptest::sample::Index;
use ukconf::dotconfig::ConfigSnapshot;
use ukconf::overlay::merge;
use ukconf::overrides::{OverrideSet, Workflow};

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("y".to_string()),
        Just("n".to_string()),
        (-5000i64..5000).prop_map(|n| n.to_string()),
        (0u64..0x1_0000).prop_map(|n| format!("0x{:x}", n)),
        "[a-z /._-]{0,12}".prop_map(|s| format!("\"{}\"", s)),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[A-E]{1,2}(_[A-Z0-9]{1,3})?"
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (key(), value()).prop_map(|(k, v)| format!("{}={}", k, v)),
        1 => "# [ -~]{0,20}",
        1 => Just(String::new()),
        1 => "[a-z]{1,8} [a-z\"]{0,8}",
    ]
}

fn ending() -> impl Strategy<Value = &'static str> {
    prop_oneof![8 => Just("\n"), 1 => Just("\r\n")]
}

/// Dotconfig text; the final newline is optional.
fn dotconfig_text() -> impl Strategy<Value = String> {
    (prop::collection::vec((line(), ending()), 0..24), any::<bool>()).prop_map(
        |(lines, final_newline)| {
            let mut text = String::new();
            let count = lines.len();
            for (idx, (line, ending)) in lines.into_iter().enumerate() {
                text.push_str(&line);
                if idx + 1 < count || final_newline {
                    text.push_str(ending);
                }
            }
            text
        },
    )
}

fn directive() -> impl Strategy<Value = String> {
    (key(), value()).prop_map(|(k, v)| format!("{}={}", k, v))
}

/// Directives with unique keys, as an OverrideSet requires.
fn directives() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_map(key(), value(), 1..6)
        .prop_map(|map| map.into_iter().map(|(k, v)| format!("{}={}", k, v)).collect())
}

#[test]
fn test_parse_serialize_round_trip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&dotconfig_text(), |text| {
            let snapshot = ConfigSnapshot::parse(&text).unwrap();
            prop_assert_eq!(snapshot.serialize(), text.into_bytes());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_matching_directive_round_trip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dotconfig_text(), any::<Index>()), |(text, pick)| {
            let base = ConfigSnapshot::parse(&text).unwrap();
            let keys: Vec<String> = base.entries().map(|e| e.key.clone()).collect();
            prop_assume!(!keys.is_empty());

            let key = pick.get(&keys);
            let existing = base.get(key).unwrap();
            let arg = format!("{}={}", existing.key, existing.value);
            let overrides = OverrideSet::build([arg], Workflow::Set).unwrap();

            let result = merge(&base, &overrides);
            prop_assert!(result.changes.is_empty());
            prop_assert_eq!(result.snapshot.serialize(), text.into_bytes());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dotconfig_text(), directives()), |(text, args)| {
            let base = ConfigSnapshot::parse(&text).unwrap();
            let overrides = OverrideSet::build(&args, Workflow::Set).unwrap();

            let once = merge(&base, &overrides);
            let twice = merge(&once.snapshot, &overrides);

            prop_assert!(twice.changes.is_empty());
            prop_assert_eq!(&twice.snapshot, &once.snapshot);
            prop_assert_eq!(twice.snapshot.serialize(), once.snapshot.serialize());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_order_independence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dotconfig_text(), directives()), |(text, args)| {
            let base = ConfigSnapshot::parse(&text).unwrap();
            let forward = OverrideSet::build(&args, Workflow::Set).unwrap();
            let reversed: Vec<String> = args.iter().rev().cloned().collect();
            let backward = OverrideSet::build(&reversed, Workflow::Set).unwrap();

            let a = merge(&base, &forward);
            let b = merge(&base, &backward);
            prop_assert_eq!(a.snapshot.serialize(), b.snapshot.serialize());
            prop_assert_eq!(a.changes, b.changes);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_touches_only_named_keys_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dotconfig_text(), directive()), |(text, arg)| {
            let base = ConfigSnapshot::parse(&text).unwrap();
            let overrides = OverrideSet::build([arg], Workflow::Set).unwrap();
            let named = overrides.iter().next().unwrap().key.clone();

            let result = merge(&base, &overrides);
            let before = base.lines();
            let after = result.snapshot.lines();
            prop_assert!(after.len() == before.len() || after.len() == before.len() + 1);

            for (old, new) in before.iter().zip(after.iter()) {
                let is_named = old.as_entry().map(|e| e.key == named).unwrap_or(false);
                if !is_named {
                    prop_assert_eq!(&old.raw, &new.raw);
                }
            }
            Ok(())
        })
        .unwrap();
}
