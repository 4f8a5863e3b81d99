use chart_bridge::core::{ConfigValue, NativeValue, OptionTree, as_long};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}"
}

fn path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..5)
}

fn leaf() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        any::<bool>().prop_map(ConfigValue::from),
        (-100_000_000i64..100_000_000).prop_map(|cents| ConfigValue::from(cents as f64 / 100.0)),
        "[a-z#0-9 ]{0,12}".prop_map(ConfigValue::from),
        Just(ConfigValue::null()),
        prop::collection::vec(-100i32..100, 0..4).prop_map(ConfigValue::from),
    ]
}

proptest! {
    #[test]
    fn set_then_get_round_trips(segments in path(), value in leaf()) {
        let raw = format!("/{}", segments.join("/"));
        let mut tree = OptionTree::new();
        tree.set_option(&raw, value.clone()).expect("fresh tree accepts any path");
        prop_assert_eq!(tree.get(&raw), Some(&value));
    }

    #[test]
    fn paths_without_shared_prefix_do_not_interfere(
        first in path(),
        second in path(),
        v1 in leaf(),
        v2 in leaf()
    ) {
        prop_assume!(first[0] != second[0]);
        let p1 = first.join("/");
        let p2 = second.join("/");

        let mut tree = OptionTree::new();
        tree.set_option(&p1, v1.clone()).expect("first");
        tree.set_option(&p2, v2.clone()).expect("second");

        prop_assert_eq!(tree.get(&p1), Some(&v1));
        prop_assert_eq!(tree.get(&p2), Some(&v2));
    }

    #[test]
    fn snapshot_json_reparses_to_same_tree(
        entries in prop::collection::vec((path(), leaf()), 1..12)
    ) {
        let mut tree = OptionTree::new();
        for (segments, value) in &entries {
            // Collisions are legal outcomes for random paths; keep what succeeds.
            let _ = tree.set_option(&segments.join("/"), value.clone());
        }
        let snapshot = tree.get_options();
        let json = snapshot.to_json_pretty().expect("serialize");
        let restored = chart_bridge::core::ConfigNode::from_json_str(&json).expect("parse");
        prop_assert_eq!(restored.to_json_value(), snapshot.to_json_value());
    }

    #[test]
    fn long_view_truncates_double_toward_zero(value in -1.0e12f64..1.0e12) {
        let long = as_long("x", Some(&NativeValue::Number(value))).expect("in range");
        prop_assert_eq!(long, value.trunc() as i64);
        prop_assert!((long as f64).abs() <= value.abs());
    }
}
