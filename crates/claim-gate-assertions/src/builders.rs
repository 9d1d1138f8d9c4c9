// crates/claim-gate-assertions/src/builders.rs
// ============================================================================
// Module: Assertion Builders
// Description: Shorthand constructors for common definition shapes.
// Purpose: Keep the catalog modules declarative.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! Builders wrap the core authoring factories for the declaration shapes the
//! catalog uses over and over: a bare phrase with a subject schema, a phrase
//! choice with a subject schema, and function-backed declarations of either
//! family. They are public so extensions can stay as declarative as the
//! built-ins.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use claim_gate_core::AnyDefinition;
use claim_gate_core::AsyncCheck;
use claim_gate_core::AsyncImplementation;
use claim_gate_core::CheckError;
use claim_gate_core::CheckResult;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::SchemaRef;
use claim_gate_core::SyncImplementation;
use claim_gate_core::create_assertion;
use claim_gate_core::create_async_assertion;
use serde_json::Value;

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Builds the shorthand schema-backed assertion `<any> '<phrase>'`.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the phrase violates the literal
/// invariants.
pub fn schema_assertion(
    phrase: &str,
    schema: SchemaRef,
) -> Result<AnyDefinition, ImplementationError> {
    let definition =
        create_assertion(vec![Part::phrase(phrase)?], SyncImplementation::Schema(schema))?;
    Ok(AnyDefinition::from(definition))
}

/// Builds the shorthand schema-backed assertion with interchangeable phrase
/// aliases.
///
/// # Errors
///
/// Returns [`ImplementationError`] when any alias violates the literal
/// invariants.
pub fn choice_schema_assertion(
    aliases: Vec<&str>,
    schema: SchemaRef,
) -> Result<AnyDefinition, ImplementationError> {
    let definition =
        create_assertion(vec![Part::choice(aliases)?], SyncImplementation::Schema(schema))?;
    Ok(AnyDefinition::from(definition))
}

/// Builds a function-backed synchronous assertion from declaration parts.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the parts violate a structural rule.
pub fn function_assertion(
    parts: Vec<Part>,
    check: impl Fn(&[Value]) -> CheckResult + Send + Sync + 'static,
) -> Result<AnyDefinition, ImplementationError> {
    let definition = create_assertion(parts, SyncImplementation::Function(Arc::new(check)))?;
    Ok(AnyDefinition::from(definition))
}

/// Builds a function-backed asynchronous assertion from declaration parts.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the parts violate a structural rule.
pub fn async_function_assertion(
    parts: Vec<Part>,
    check: impl AsyncCheck + 'static,
) -> Result<AnyDefinition, ImplementationError> {
    let definition =
        create_async_assertion(parts, AsyncImplementation::Function(Arc::new(check)))?;
    Ok(AnyDefinition::from(definition))
}

/// Returns the argument at a position, failing closed when the engine-parsed
/// values are narrower than the declaration promised.
///
/// # Errors
///
/// Returns [`CheckError::Broken`] when the position is absent.
pub fn arg(values: &[Value], position: usize) -> Result<&Value, CheckError> {
    values
        .get(position)
        .ok_or_else(|| CheckError::Broken(format!("missing parsed argument {position}")))
}
