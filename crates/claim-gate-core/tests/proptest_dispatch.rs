// crates/claim-gate-core/tests/proptest_dispatch.rs
// ============================================================================
// Module: Dispatch Property-Based Tests
// Description: Property tests for dispatch determinism and negation symmetry.
// Purpose: Detect hidden iteration-order or state dependence across inputs.
// ============================================================================

//! Property-based tests for dispatch invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use claim_gate_core::ClaimGate;
use claim_gate_core::ErrorCode;
use claim_gate_core::ExpectError;
use common::kind_assertion;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

/// Gate with one pure schema-backed assertion per JSON kind.
fn kind_gate() -> ClaimGate {
    ClaimGate::new(vec![
        kind_assertion("to be a string", "string"),
        kind_assertion("to be a number", "number"),
        kind_assertion("to be a boolean", "boolean"),
        kind_assertion("to be an array", "array"),
        kind_assertion("to be an object", "object"),
    ])
}

/// Outcome fingerprint used to compare two dispatches.
fn fingerprint(outcome: &Result<(), ExpectError>) -> Option<ErrorCode> {
    outcome.as_ref().err().map(ExpectError::code)
}

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0 .. 4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, value);
                }
                Value::Object(object)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn dispatch_is_deterministic(subject in json_value_strategy(2)) {
        let gate = kind_gate();
        for phrase in ["to be a string", "to be a number", "to do the impossible"] {
            let first = gate.expect(&subject, phrase, &[]);
            let second = gate.expect(&subject, phrase, &[]);
            prop_assert_eq!(fingerprint(&first), fingerprint(&second));
        }
    }

    #[test]
    fn negation_symmetry_holds(subject in json_value_strategy(2)) {
        let gate = kind_gate();
        for phrase in ["to be a string", "to be a number", "to be an array"] {
            let plain = gate.expect(&subject, phrase, &[]);
            let negated = gate.expect(&subject, &format!("not {phrase}"), &[]);
            prop_assert_eq!(plain.is_err(), negated.is_ok());
        }
    }

    #[test]
    fn unknown_phrases_always_carry_the_phrase_text(subject in json_value_strategy(1)) {
        let gate = kind_gate();
        let error = gate.expect(&subject, "to do the impossible", &[json!(1)]).unwrap_err();
        prop_assert_eq!(error.code(), ErrorCode::UnknownAssertion);
        prop_assert!(error.to_string().contains("to do the impossible"));
    }

    #[test]
    fn extension_never_mutates_the_base(subject in json_value_strategy(1)) {
        let base = kind_gate();
        let extended = base.extend(vec![kind_assertion("to be freshly minted", "string")]);
        let base_outcome = base.expect(&subject, "to be freshly minted", &[]);
        prop_assert_eq!(fingerprint(&base_outcome), Some(ErrorCode::UnknownAssertion));
        let extended_outcome = extended.expect(&subject, "to be freshly minted", &[]);
        prop_assert_ne!(fingerprint(&extended_outcome), Some(ErrorCode::UnknownAssertion));
    }
}
