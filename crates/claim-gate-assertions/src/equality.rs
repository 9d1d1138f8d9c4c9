// crates/claim-gate-assertions/src/equality.rs
// ============================================================================
// Module: Equality Assertions
// Description: Built-in equality and set membership assertions.
// Purpose: Cover value comparison with decimal-aware structural equality.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! Equality failures carry both operands so reporters can render rich
//! mismatches. Membership rejects composite needles instead of guessing at
//! their identity semantics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use claim_gate_core::AnyDefinition;
use claim_gate_core::AssertionFailure;
use claim_gate_core::AssertionOutcome;
use claim_gate_core::CheckError;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::SchemaIssue;
use claim_gate_core::value_kind;
use claim_gate_schemas::AnySchema;
use claim_gate_schemas::TypeSchema;
use claim_gate_schemas::in_set;
use claim_gate_schemas::values_equal;

use crate::builders::arg;
use crate::builders::function_assertion;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the built-in equality assertions.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a declaration is malformed; built-in
/// declarations failing is a packaging defect surfaced at gate construction.
pub fn definitions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    Ok(vec![equals_assertion()?, one_of_assertion()?])
}

/// Builds `to equal/to deep equal <expected>` with mismatch metadata.
fn equals_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![
            Part::choice(vec!["to equal", "to deep equal"])?,
            Part::schema(Arc::new(AnySchema::new())),
        ],
        |values| {
            let subject = arg(values, 0)?;
            let expected = arg(values, 1)?;
            if values_equal(subject, expected) {
                Ok(AssertionOutcome::Pass)
            } else {
                let failure = AssertionFailure::mismatch(subject.clone(), expected.clone())
                    .with_diff(format!("expected {expected}, received {subject}"));
                Ok(AssertionOutcome::Fail(failure))
            }
        },
    )
}

/// Builds `to be one of <array>` over scalar subjects.
fn one_of_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![Part::phrase("to be one of")?, Part::schema(Arc::new(TypeSchema::array()))],
        |values| {
            let subject = arg(values, 0)?;
            let members = arg(values, 1)?;
            match in_set(subject, members) {
                Some(found) => Ok(AssertionOutcome::from(found)),
                None => Err(CheckError::Invalid(vec![SchemaIssue::root(format!(
                    "cannot test membership of {} values",
                    value_kind(subject)
                ))])),
            }
        },
    )
}
