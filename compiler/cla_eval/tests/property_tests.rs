//! Property-based tests for the evaluator.
//!
//! - `if` agrees with `i64` comparison for every operator
//! - `p` substitution is deterministic and leaves no declared `$name` behind
//! - the countdown loop visits exactly the values a plain loop would

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use cla_eval::exec::substitute;
use cla_eval::{silent_handler, CompareOp, Session, SessionConfig, Value, VariableStore};
use proptest::prelude::*;

fn session() -> Session {
    Session::builder()
        .print_handler(silent_handler())
        .config(SessionConfig::quiet())
        .build()
}

fn op_strategy() -> impl Strategy<Value = CompareOp> {
    prop::sample::select(CompareOp::ALL.to_vec())
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").expect("valid regex")
}

proptest! {
    #[test]
    fn if_matches_integer_semantics(v in 0i64..1000, k in 0i64..1000, op in op_strategy()) {
        let mut s = session();
        s.write_variable("x", Value::Int(v));
        let out = s.execute_line(&format!("if x {op} {k}"));
        prop_assert!(out.is_ok());
        let confirmed = out.lines() == [format!("Condition is true for: x {op} {k}")];
        prop_assert_eq!(confirmed, op.apply(&v, &k));
        prop_assert_eq!(out.lines().is_empty(), !op.apply(&v, &k));
    }

    #[test]
    fn substitution_is_deterministic(
        vars in prop::collection::vec((name_strategy(), 0i64..100), 0..5),
        text in "[a-z $]{0,30}",
    ) {
        let mut store = VariableStore::new();
        for (name, n) in &vars {
            store.define(name.as_str(), Value::Int(*n));
        }
        let once = substitute(&text, &store);
        prop_assert_eq!(&once, &substitute(&text, &store));
        // values are digits only, so no `$` is introduced
        prop_assert!(once.matches('$').count() <= text.matches('$').count());
        for (name, _) in &vars {
            let reference = format!("${name}");
            let longest_covers = vars
                .iter()
                .any(|(other, _)| other.len() > name.len() && other.starts_with(name.as_str()));
            if !longest_covers {
                prop_assert!(!once.contains(&reference));
            }
        }
    }

    #[test]
    fn substitution_without_dollar_is_identity(text in "[a-z ]{0,30}", n in 0i64..100) {
        let mut store = VariableStore::new();
        store.define("x", Value::Int(n));
        prop_assert_eq!(substitute(&text, &store), text);
    }

    #[test]
    fn countdown_visits_every_value(start in 0i64..50, stop in 0i64..50) {
        let mut s = session();
        s.write_variable("x", Value::Int(start));
        let out = s.execute_line(&format!("while x > {stop}"));
        prop_assert!(out.is_ok());

        let expected: Vec<String> = std::iter::once(format!("Starting loop while x > {stop}"))
            .chain((stop + 1..=start).rev().map(|n| format!("Looping with x: {n}")))
            .collect();
        prop_assert_eq!(out.lines(), expected.as_slice());
        prop_assert_eq!(s.read_variable("x"), Some(Value::Int(start.min(stop))));
    }
}
