// crates/claim-gate-assertions/tests/proptest_catalog.rs
// ============================================================================
// Module: Catalog Property-Based Tests
// Description: Property tests for catalog consistency over wide inputs.
// Purpose: Detect ordering and negation inconsistencies in built-ins.
// ============================================================================

//! Property-based tests for built-in catalog invariants.

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

use claim_gate_assertions::expect;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn greater_than_matches_native_integer_ordering(a in any::<i64>(), b in any::<i64>()) {
        let outcome = expect(&json!(a), "to be greater than", &[json!(b)]);
        prop_assert_eq!(outcome.is_ok(), a > b);
    }

    #[test]
    fn bound_aliases_agree(a in any::<i64>(), b in any::<i64>()) {
        let canonical = expect(&json!(a), "to be at least", &[json!(b)]);
        let alias = expect(&json!(a), "to be gte", &[json!(b)]);
        prop_assert_eq!(canonical.is_ok(), alias.is_ok());
    }

    #[test]
    fn negation_symmetry_holds_for_ordering(a in any::<i64>(), b in any::<i64>()) {
        let plain = expect(&json!(a), "to be less than", &[json!(b)]);
        let negated = expect(&json!(a), "not to be less than", &[json!(b)]);
        prop_assert_eq!(plain.is_err(), negated.is_ok());
    }

    #[test]
    fn equality_assertion_matches_itself(n in any::<i64>(), text in "[a-z]{0,6}") {
        let subject = json!({ "n": n, "s": text });
        prop_assert!(expect(&subject, "to equal", &[subject.clone()]).is_ok());
        let other = json!({ "other": true });
        prop_assert!(expect(&subject, "not to equal", &[other]).is_ok());
    }

    #[test]
    fn membership_matches_linear_scan(
        needle in any::<i64>(),
        members in prop::collection::vec(any::<i64>(), 0 .. 6),
    ) {
        let outcome = expect(&json!(needle), "to be one of", &[json!(members.clone())]);
        prop_assert_eq!(outcome.is_ok(), members.contains(&needle));
    }

    #[test]
    fn length_assertion_matches_actual_length(
        items in prop::collection::vec(any::<i32>(), 0 .. 8),
    ) {
        let length = items.len();
        prop_assert!(expect(&json!(items), "to have length", &[json!(length)]).is_ok());
        prop_assert!(expect(&json!(items), "to have length", &[json!(length + 1)]).is_err());
    }
}
