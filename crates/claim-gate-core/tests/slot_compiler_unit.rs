// crates/claim-gate-core/tests/slot_compiler_unit.rs
// ============================================================================
// Module: Slot Compiler Unit Tests
// Description: Unit tests for declaration validation and slot compilation.
// Purpose: Validate every construction-time rejection and the compiled shape.
// ============================================================================

//! ## Overview
//! Exercises the structural rules of the slot compiler and the family
//! restrictions enforced at definition construction.

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

use std::sync::Arc;

use claim_gate_core::AssertionOutcome;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::PhraseLiteral;
use claim_gate_core::Slot;
use claim_gate_core::SyncImplementation;
use claim_gate_core::compile_slots;
use claim_gate_core::create_assertion;
use common::AsyncOnlyKindSchema;
use common::any_schema;
use common::kind_schema;
use serde_json::Value;
use serde_json::json;

#[test]
fn empty_parts_are_rejected() {
    assert_eq!(compile_slots(&[]).unwrap_err(), ImplementationError::EmptyParts);
}

#[test]
fn phrase_literals_must_not_be_empty() {
    assert_eq!(PhraseLiteral::new("").unwrap_err(), ImplementationError::EmptyPhrase);
}

#[test]
fn phrase_literals_must_not_start_with_not() {
    let error = PhraseLiteral::new("not to be a string").unwrap_err();
    assert_eq!(error, ImplementationError::NegatedPhrase {
        phrase: "not to be a string".to_string(),
    });
    // A literal merely containing "not" elsewhere is fine.
    assert!(PhraseLiteral::new("to not-quite match").is_ok());
}

#[test]
fn and_must_be_followed_by_a_schema() {
    let parts = vec![Part::phrase("to be near").unwrap(), Part::phrase("and").unwrap()];
    assert_eq!(compile_slots(&parts).unwrap_err(), ImplementationError::AndWithoutSchema);

    let parts = vec![
        Part::phrase("to be near").unwrap(),
        Part::phrase("and").unwrap(),
        Part::phrase("then some").unwrap(),
    ];
    assert_eq!(compile_slots(&parts).unwrap_err(), ImplementationError::AndWithoutSchema);

    let parts = vec![
        Part::phrase("to be near").unwrap(),
        Part::schema(kind_schema("number")),
        Part::phrase("and").unwrap(),
        Part::schema(kind_schema("number")),
    ];
    assert!(compile_slots(&parts).is_ok());
}

#[test]
fn and_is_rejected_inside_choices() {
    let error = Part::choice(vec!["to be close", "and"]).unwrap_err();
    assert_eq!(error, ImplementationError::AndInChoice);
}

#[test]
fn empty_choices_are_rejected() {
    let error = Part::choice(Vec::<String>::new()).unwrap_err();
    assert_eq!(error, ImplementationError::EmptyChoice);
}

#[test]
fn leading_schema_requires_a_phrase_second() {
    let parts = vec![Part::schema(kind_schema("string"))];
    assert_eq!(compile_slots(&parts).unwrap_err(), ImplementationError::SchemaWithoutPhrase);

    let parts = vec![Part::schema(kind_schema("string")), Part::schema(kind_schema("number"))];
    assert_eq!(compile_slots(&parts).unwrap_err(), ImplementationError::SchemaWithoutPhrase);
}

#[test]
fn shorthand_declarations_get_an_implicit_unknown_subject() {
    let slots = compile_slots(&[Part::phrase("to be a string").unwrap()]).unwrap();
    assert_eq!(slots.len(), 2);
    assert!(matches!(slots[0], Slot::Unknown));
    let choice = slots[1].as_literal().unwrap();
    assert!(choice.matches("to be a string"));
}

#[test]
fn explicit_subject_schema_is_not_prepended() {
    let parts = vec![
        Part::schema(kind_schema("string")),
        Part::phrase("to be trimmed").unwrap(),
    ];
    let slots = compile_slots(&parts).unwrap();
    assert_eq!(slots.len(), 2);
    assert!(matches!(slots[0], Slot::Value(_)));
    assert!(slots[1].is_literal());
}

#[test]
fn any_schemas_compile_to_unknown_slots() {
    let parts = vec![Part::phrase("to roughly match").unwrap(), Part::schema(any_schema())];
    let slots = compile_slots(&parts).unwrap();
    assert!(matches!(slots[2], Slot::Unknown));
}

#[test]
fn literal_slots_never_reach_the_implementation() {
    // Round trip: the value positions are exactly the non-literal parts,
    // in declaration order.
    let definition = create_assertion(
        vec![
            Part::phrase("to sit between").unwrap(),
            Part::schema(kind_schema("number")),
            Part::phrase("and").unwrap(),
            Part::schema(kind_schema("number")),
        ],
        SyncImplementation::Function(Arc::new(|_: &[Value]| Ok(AssertionOutcome::Pass))),
    )
    .unwrap();
    let args = [json!(5), json!("to sit between"), json!(1), json!("and"), json!(9)];
    let parsed = definition.parse_values(&args).unwrap();
    assert_eq!(parsed.values, vec![json!(5), json!(1), json!(9)]);
    assert!(!parsed.exact);
}

#[test]
fn argument_count_mismatch_never_matches() {
    let definition = create_assertion(
        vec![Part::phrase("to be a string").unwrap()],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap();
    assert!(definition.parse_values(&[json!("x")]).is_none());
    assert!(
        definition
            .parse_values(&[json!("x"), json!("to be a string"), json!("extra")])
            .is_none()
    );
}

#[test]
fn literal_matching_is_case_sensitive() {
    let definition = create_assertion(
        vec![Part::phrase("to be a string").unwrap()],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap();
    assert!(definition.parse_values(&[json!("x"), json!("To Be A String")]).is_none());
    assert!(definition.parse_values(&[json!("x"), json!("to be a string")]).is_some());
}

#[test]
fn single_subject_schema_assertions_cache_the_subject_verdict() {
    let definition = create_assertion(
        vec![Part::phrase("to be a string").unwrap()],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap();
    let parsed = definition.parse_values(&[json!("x"), json!("to be a string")]).unwrap();
    assert!(parsed.subject_verdict.as_ref().unwrap().is_valid());

    // A rejected subject still matches structurally; the executor reports it.
    let parsed = definition.parse_values(&[json!(4), json!("to be a string")]).unwrap();
    assert!(!parsed.subject_verdict.as_ref().unwrap().is_valid());
}

#[test]
fn sync_family_rejects_async_only_schemas_in_parts() {
    let error = create_assertion(
        vec![
            Part::phrase("to asynchronously hold").unwrap(),
            Part::schema(Arc::new(AsyncOnlyKindSchema {
                kind: "number",
            })),
        ],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap_err();
    assert!(matches!(error, ImplementationError::UnexpectedAsync { .. }));
}

#[test]
fn sync_family_rejects_async_only_implementation_schemas() {
    let error = create_assertion(
        vec![Part::phrase("to asynchronously hold").unwrap()],
        SyncImplementation::Schema(Arc::new(AsyncOnlyKindSchema {
            kind: "number",
        })),
    )
    .unwrap_err();
    assert!(matches!(error, ImplementationError::UnexpectedAsync { .. }));
}

#[test]
fn string_form_names_parts_in_order() {
    let definition = create_assertion(
        vec![
            Part::choice(vec!["to be at least", "to be gte"]).unwrap(),
            Part::schema(kind_schema("number")),
        ],
        SyncImplementation::Function(Arc::new(|_: &[Value]| Ok(AssertionOutcome::Pass))),
    )
    .unwrap();
    let form = definition.string_form();
    assert!(form.starts_with("<any>"));
    assert!(form.contains("to be at least/to be gte"));
    assert!(form.ends_with("<number>"));
}

#[test]
fn definition_identities_are_unique() {
    let first = create_assertion(
        vec![Part::phrase("to be a string").unwrap()],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap();
    let second = create_assertion(
        vec![Part::phrase("to be a string").unwrap()],
        SyncImplementation::Schema(kind_schema("string")),
    )
    .unwrap();
    assert_ne!(first.id(), second.id());
}
