//! Property tests for variable binding.

use std::collections::HashMap;

use http_helper::{BindVars, VarField, VarKind, bind, impl_bind_vars};
use proptest::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Target {
    text: String,
    small: i32,
    big: i64,
    real: f64,
    flag: bool,
    ints: Vec<i64>,
    words: Vec<String>,
}

impl_bind_vars!(Target {
    text: "text",
    small: "small",
    big: "big",
    real: "real",
    flag: "flag",
    ints: "ints",
    words: "words",
});

#[derive(Debug, Default, Clone, PartialEq)]
struct Untagged {
    a: String,
    b: i64,
}

impl BindVars for Untagged {
    fn var_fields(&mut self) -> Vec<VarField<'_>> {
        use http_helper::AsSlot;
        vec![
            VarField::new("a", "", self.a.as_slot()),
            VarField::new("b", "", self.b.as_slot()),
        ]
    }
}

fn arb_vars() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-z]{1,6}", ".{0,12}", 0..8)
}

proptest! {
    /// Property: records with only untagged fields are never touched
    #[test]
    fn proptest_untagged_bind_is_noop(vars in arb_vars(), a in ".{0,8}", b in any::<i64>()) {
        let mut dst = Untagged { a: a.clone(), b };
        prop_assert!(bind(&vars, &mut dst).is_ok());
        prop_assert_eq!(dst, Untagged { a, b });
    }

    /// Property: fields whose key is absent keep their prior value
    #[test]
    fn proptest_absent_keys_keep_values(
        vars in prop::collection::hash_map("[A-Z]{1,6}", ".{0,12}", 0..8),
        small in any::<i32>(),
        text in ".{0,8}",
    ) {
        // Upper-case keys never collide with the lower-case tags.
        let mut dst = Target { small, text: text.clone(), ..Default::default() };
        let before = dst.clone();
        prop_assert!(bind(&vars, &mut dst).is_ok());
        prop_assert_eq!(dst, before);
    }

    /// Property: valid integer literals coerce exactly
    #[test]
    fn proptest_integers_coerce_exactly(small in any::<i32>(), big in any::<i64>()) {
        let vars = HashMap::from([
            ("small".to_string(), small.to_string()),
            ("big".to_string(), big.to_string()),
        ]);
        let mut dst = Target::default();
        bind(&vars, &mut dst).unwrap();
        prop_assert_eq!(dst.small, small);
        prop_assert_eq!(dst.big, big);
    }

    /// Property: finite floats survive a display round trip through binding
    #[test]
    fn proptest_floats_coerce_exactly(real in -1.0e12f64..1.0e12) {
        let vars = HashMap::from([("real".to_string(), real.to_string())]);
        let mut dst = Target::default();
        bind(&vars, &mut dst).unwrap();
        prop_assert_eq!(dst.real, real);
    }

    /// Property: a non-numeric suffix always fails integer coercion
    #[test]
    fn proptest_bad_integer_fails(n in any::<i64>(), suffix in "[a-z]{1,3}") {
        let raw = format!("{n}{suffix}");
        let vars = HashMap::from([("big".to_string(), raw.clone())]);
        let err = bind(&vars, &mut Target::default()).unwrap_err();
        let coercion = err.coercion().unwrap();
        prop_assert_eq!(&coercion.value, &raw);
        prop_assert_eq!(coercion.kind, VarKind::Int64);
    }

    /// Property: string lists are trimmed and keep their order
    #[test]
    fn proptest_string_list_trims_and_orders(
        words in prop::collection::vec("[a-z]{1,5}", 1..6),
        pad in "[ \t]{0,2}",
    ) {
        let raw = words
            .iter()
            .map(|w| format!("{pad}{w}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        let vars = HashMap::from([("words".to_string(), raw)]);
        let mut dst = Target::default();
        bind(&vars, &mut dst).unwrap();
        prop_assert_eq!(dst.words, words);
    }

    /// Property: integer lists append every element in order
    #[test]
    fn proptest_int_list_appends(
        prior in prop::collection::vec(any::<i64>(), 0..3),
        items in prop::collection::vec(any::<i64>(), 1..6),
    ) {
        let raw = items.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" , ");
        let vars = HashMap::from([("ints".to_string(), raw)]);
        let mut dst = Target { ints: prior.clone(), ..Default::default() };
        bind(&vars, &mut dst).unwrap();

        let mut expected = prior;
        expected.extend(items);
        prop_assert_eq!(dst.ints, expected);
    }

    /// Property: binding is stateless across calls
    #[test]
    fn proptest_bind_is_deterministic(vars in arb_vars()) {
        let mut first = Target::default();
        let mut second = Target::default();
        let r1 = bind(&vars, &mut first);
        let r2 = bind(&vars, &mut second);
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(first, second);
    }
}
