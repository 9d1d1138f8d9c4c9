// crates/claim-gate-assertions/src/asynchronous.rs
// ============================================================================
// Module: Asynchronous Assertions
// Description: Built-in async assertions over yielding subjects.
// Purpose: Cover the asynchronous family of the default catalog.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! The async built-ins treat array subjects as the synchronous rendition of a
//! yielding sequence, which is what lets plain values flow through the async
//! entrypoint without explicit wrapping. Non-iterable subjects are reported
//! as validation issues.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use claim_gate_core::AnyDefinition;
use claim_gate_core::AssertionOutcome;
use claim_gate_core::AsyncCheck;
use claim_gate_core::CheckError;
use claim_gate_core::CheckResult;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::SchemaIssue;
use claim_gate_core::value_kind;
use claim_gate_schemas::AnySchema;
use claim_gate_schemas::TypeSchema;
use claim_gate_schemas::values_equal;
use serde_json::Value;

use crate::builders::arg;
use crate::builders::async_function_assertion;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the built-in asynchronous assertions.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a declaration is malformed; built-in
/// declarations failing is a packaging defect surfaced at gate construction.
pub fn definitions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    Ok(vec![
        async_function_assertion(
            vec![Part::phrase("to yield")?, Part::schema(Arc::new(AnySchema::new()))],
            YieldCheck,
        )?,
        async_function_assertion(
            vec![Part::phrase("to yield all")?, Part::schema(Arc::new(TypeSchema::array()))],
            YieldAllCheck,
        )?,
    ])
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Returns the yielded elements of a subject, failing closed otherwise.
fn yielded_items(subject: &Value) -> Result<&[Value], CheckError> {
    subject.as_array().map(Vec::as_slice).ok_or_else(|| {
        CheckError::Invalid(vec![SchemaIssue::root(format!(
            "expected a yielding sequence but received {}",
            value_kind(subject)
        ))])
    })
}

/// Check behind `to yield <element>`.
struct YieldCheck;

#[async_trait]
impl AsyncCheck for YieldCheck {
    async fn check(&self, values: &[Value]) -> CheckResult {
        let items = yielded_items(arg(values, 0)?)?;
        let expected = arg(values, 1)?;
        Ok(AssertionOutcome::from(items.iter().any(|item| values_equal(item, expected))))
    }
}

/// Check behind `to yield all <elements>`.
struct YieldAllCheck;

#[async_trait]
impl AsyncCheck for YieldAllCheck {
    async fn check(&self, values: &[Value]) -> CheckResult {
        let items = yielded_items(arg(values, 0)?)?;
        let Some(expected) = arg(values, 1)?.as_array() else {
            return Err(CheckError::Broken("expected elements must be an array".into()));
        };
        let all_present = expected
            .iter()
            .all(|wanted| items.iter().any(|item| values_equal(item, wanted)));
        Ok(AssertionOutcome::from(all_present))
    }
}
