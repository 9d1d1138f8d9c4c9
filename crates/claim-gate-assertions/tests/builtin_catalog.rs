// crates/claim-gate-assertions/tests/builtin_catalog.rs
// ============================================================================
// Module: Built-in Catalog Tests
// Description: End-to-end tests for the synchronous built-in assertions.
// Purpose: Validate the default gate resolves and executes the catalog.
// ============================================================================

//! ## Overview
//! Exercises the default gate with the synchronous catalog: type checks,
//! ordering, equality, collections, negation, conjunctions, extension, and
//! deferred assertions.

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

use std::sync::Arc;

use claim_gate_assertions::choice_schema_assertion;
use claim_gate_assertions::expect;
use claim_gate_assertions::extend_default;
use claim_gate_core::ErrorCode;
use claim_gate_core::ExpectError;
use claim_gate_schemas::PredicateSchema;
use serde_json::json;

#[test]
fn string_assertion_passes_for_strings() {
    assert!(expect(&json!("foo"), "to be a string", &[]).is_ok());
}

#[test]
fn string_assertion_fails_for_numbers_with_kind_message() {
    let error = expect(&json!(42), "to be a string", &[]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::AssertionFailed);
    let message = error.to_string().to_lowercase();
    assert!(message.contains("expected string but received number"), "message: {message}");
}

#[test]
fn kind_assertions_cover_every_kind() {
    assert!(expect(&json!(1.5), "to be a number", &[]).is_ok());
    assert!(expect(&json!(3), "to be an integer", &[]).is_ok());
    assert!(expect(&json!(3.5), "to be an integer", &[]).unwrap_err().is_failure());
    assert!(expect(&json!(true), "to be a boolean", &[]).is_ok());
    assert!(expect(&json!(null), "to be null", &[]).is_ok());
    assert!(expect(&json!([1]), "to be an array", &[]).is_ok());
    assert!(expect(&json!({"a": 1}), "to be an object", &[]).is_ok());
}

#[test]
fn parametric_type_assertion_defers_onto_the_named_kind() {
    assert!(expect(&json!(42), "to be a", &[json!("number")]).is_ok());
    assert!(expect(&json!([1]), "to be an", &[json!("array")]).is_ok());
    let error = expect(&json!(42), "to be a", &[json!("string")]).unwrap_err();
    assert!(error.to_string().contains("expected string but received number"));
}

#[test]
fn unsupported_type_name_is_not_a_structural_match() {
    // The enum parameter slot rejects the name, so nothing matches.
    let error = expect(&json!(42), "to be a", &[json!("wibble")]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnknownAssertion);
}

#[test]
fn truthiness_assertions_follow_json_semantics() {
    assert!(expect(&json!(1), "to be truthy", &[]).is_ok());
    assert!(expect(&json!(""), "to be falsy", &[]).is_ok());
    assert!(expect(&json!(0), "to be falsy", &[]).is_ok());
    assert!(expect(&json!([]), "to be truthy", &[]).is_ok());
    assert!(expect(&json!(null), "to be truthy", &[]).unwrap_err().is_failure());
}

#[test]
fn greater_than_passes_and_fails() {
    assert!(expect(&json!(5), "to be greater than", &[json!(3)]).is_ok());
    let error = expect(&json!(2), "to be greater than", &[json!(5)]).unwrap_err();
    assert!(error.is_failure());
}

#[test]
fn ordering_aliases_resolve_to_the_same_assertion() {
    assert!(expect(&json!(5), "to be at least", &[json!(5)]).is_ok());
    assert!(expect(&json!(5), "to be gte", &[json!(5)]).is_ok());
    assert!(expect(&json!(4), "to be below", &[json!(5)]).is_ok());
    assert!(expect(&json!(4), "to be lte", &[json!(4)]).is_ok());
}

#[test]
fn temporal_bounds_order_rfc3339_strings() {
    assert!(
        expect(&json!("2026-02-01"), "to be greater than", &[json!("2026-01-01")]).is_ok()
    );
    let error =
        expect(&json!("not a date"), "to be greater than", &[json!("2026-01-01")]).unwrap_err();
    assert!(error.is_failure());
    assert!(error.to_string().contains("cannot order"));
}

#[test]
fn sign_assertions_use_decimal_comparison() {
    assert!(expect(&json!(0.001), "to be positive", &[]).is_ok());
    assert!(expect(&json!(-3), "to be negative", &[]).is_ok());
    assert!(expect(&json!(0), "to be positive", &[]).unwrap_err().is_failure());
}

#[test]
fn range_assertion_consumes_its_declared_and_literal() {
    assert!(expect(&json!(5), "to be within", &[json!(3), json!("and"), json!(10)]).is_ok());
    let error =
        expect(&json!(50), "to be within", &[json!(3), json!("and"), json!(10)]).unwrap_err();
    assert!(error.is_failure());
}

#[test]
fn conjunction_chains_require_every_clause() {
    assert!(
        expect(
            &json!(42),
            "to be a",
            &[json!("number"), json!("and"), json!("not to be less than"), json!(10)],
        )
        .is_ok()
    );
    let error = expect(
        &json!(42),
        "to be a",
        &[json!("number"), json!("and"), json!("to be less than"), json!(10)],
    )
    .unwrap_err();
    assert!(error.is_failure());
}

#[test]
fn three_clause_conjunctions_work() {
    assert!(
        expect(
            &json!(42),
            "to be a number",
            &[
                json!("and"),
                json!("to be at least"),
                json!(40),
                json!("and"),
                json!("to be at most"),
                json!(50),
            ],
        )
        .is_ok()
    );
}

#[test]
fn equality_failure_carries_actual_expected_and_diff() {
    let error = expect(&json!({"a": 1}), "to equal", &[json!({"a": 2})]).unwrap_err();
    let ExpectError::Failure(failure) = &error else {
        panic!("expected failure, got {error:?}");
    };
    assert_eq!(failure.actual, Some(json!({"a": 1})));
    assert_eq!(failure.expected, Some(json!({"a": 2})));
    assert!(failure.diff.is_some());
}

#[test]
fn equality_is_decimal_aware() {
    assert!(expect(&json!(1), "to equal", &[json!(1.0)]).is_ok());
    assert!(expect(&json!([1, 2]), "to deep equal", &[json!([1.0, 2.0])]).is_ok());
}

#[test]
fn membership_covers_scalars_and_rejects_composites() {
    assert!(expect(&json!(2), "to be one of", &[json!([1, 2, 3])]).is_ok());
    assert!(expect(&json!(9), "to be one of", &[json!([1, 2, 3])]).unwrap_err().is_failure());
    let error = expect(&json!([1]), "to be one of", &[json!([[1]])]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::AssertionFailed);
    assert!(error.to_string().contains("membership"));
}

#[test]
fn containment_covers_strings_and_arrays() {
    assert!(expect(&json!("haystack"), "to contain", &[json!("stack")]).is_ok());
    assert!(expect(&json!([1, 2, 3]), "to contain", &[json!(2)]).is_ok());
    assert!(expect(&json!(42), "to contain", &[json!(2)]).unwrap_err().is_failure());
}

#[test]
fn emptiness_and_length_cover_sized_subjects() {
    assert!(expect(&json!([]), "to be empty", &[]).is_ok());
    assert!(expect(&json!(""), "to be empty", &[]).is_ok());
    assert!(expect(&json!({}), "to be empty", &[]).is_ok());
    assert!(expect(&json!([1]), "to be empty", &[]).unwrap_err().is_failure());

    assert!(expect(&json!("abc"), "to have length", &[json!(3)]).is_ok());
    assert!(expect(&json!([1, 2]), "to have length", &[json!(2)]).is_ok());
    let error = expect(&json!([1, 2]), "to have length", &[json!(5)]).unwrap_err();
    let ExpectError::Failure(failure) = &error else {
        panic!("expected failure, got {error:?}");
    };
    assert_eq!(failure.actual, Some(json!(2)));
}

#[test]
fn satisfaction_matches_structural_subsets() {
    let subject = json!({"name": "ada", "role": {"title": "engineer", "level": 3}});
    assert!(expect(&subject, "to satisfy", &[json!({"name": "ada"})]).is_ok());
    assert!(
        expect(&subject, "to satisfy", &[json!({"role": {"title": "engineer"}})]).is_ok()
    );
    let error =
        expect(&subject, "to satisfy", &[json!({"role": {"title": "manager"}})]).unwrap_err();
    assert!(error.is_failure());
    let error = expect(&subject, "to satisfy", &[json!({"missing": 1})]).unwrap_err();
    assert!(error.to_string().contains("missing"));
}

#[test]
fn negation_applies_across_the_catalog() {
    assert!(expect(&json!(42), "not to be a string", &[]).is_ok());
    assert!(expect(&json!(2), "not to be greater than", &[json!(5)]).is_ok());
    let error = expect(&json!("foo"), "not to be a string", &[]).unwrap_err();
    let ExpectError::Failure(failure) = &error else {
        panic!("expected failure, got {error:?}");
    };
    assert!(failure.negated);
}

#[test]
fn unknown_assertion_names_the_phrase() {
    let error = expect(&json!(42), "to do something impossible", &[]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnknownAssertion);
    assert!(error.to_string().contains("to do something impossible"));
}

#[test]
fn extension_isolates_the_default_gate() {
    let custom = choice_schema_assertion(
        vec!["to be shouted", "to be screamed"],
        Arc::new(PredicateSchema::new("upper-case string", |value| {
            value.as_str().is_some_and(|text| !text.is_empty() && text == text.to_uppercase())
        })),
    )
    .unwrap();
    let extended = extend_default(vec![custom]).unwrap();

    assert!(extended.expect(&json!("LOUD"), "to be shouted", &[]).is_ok());
    assert!(extended.expect(&json!("LOUD"), "to be screamed", &[]).is_ok());
    assert!(extended.expect(&json!("quiet"), "to be shouted", &[]).is_err());

    // The default gate never learns the extension.
    let error = expect(&json!("LOUD"), "to be shouted", &[]).unwrap_err();
    assert!(error.is_unknown());
}

#[test]
fn deferred_assertions_bind_to_the_default_pool() {
    let gate = claim_gate_assertions::default_gate().unwrap();
    let deferred = gate.expect_it("to be greater than", &[json!(10)]);
    assert!(deferred.check_subject(&json!(11)).is_ok());
    assert!(deferred.check_subject(&json!(9)).is_err());
}
