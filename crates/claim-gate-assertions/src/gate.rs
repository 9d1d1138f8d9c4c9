// crates/claim-gate-assertions/src/gate.rs
// ============================================================================
// Module: Default Gate
// Description: Catalog assembly and the process-wide default dispatcher.
// Purpose: Expose expect/expect_async over the built-in assertion pool.
// Dependencies: claim-gate-core, crate catalog modules
// ============================================================================

//! ## Overview
//! The default gate is built once, lazily, from the full built-in catalog and
//! never mutated afterwards. Extension goes through
//! [`ClaimGate::extend`] and always yields a new gate, so the default pool
//! stays referentially stable for every caller in the process. A catalog
//! declaration failing to compile is a packaging defect; it is reported as an
//! implementation error on first use rather than a panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use claim_gate_core::AnyDefinition;
use claim_gate_core::ClaimGate;
use claim_gate_core::ExpectError;
use claim_gate_core::ImplementationError;
use serde_json::Value;

use crate::asynchronous;
use crate::collections;
use crate::equality;
use crate::ordering;
use crate::types;

// ============================================================================
// SECTION: Catalog Assembly
// ============================================================================

/// Returns the full built-in assertion catalog.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a built-in declaration is malformed.
pub fn builtin_assertions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    let mut definitions = Vec::new();
    definitions.extend(types::definitions()?);
    definitions.extend(ordering::definitions()?);
    definitions.extend(equality::definitions()?);
    definitions.extend(collections::definitions()?);
    definitions.extend(asynchronous::definitions()?);
    Ok(definitions)
}

// ============================================================================
// SECTION: Default Gate
// ============================================================================

/// Process-wide default gate, initialized once from the built-in catalog.
static DEFAULT_GATE: LazyLock<Result<ClaimGate, ImplementationError>> =
    LazyLock::new(|| Ok(ClaimGate::new(builtin_assertions()?)));

/// Returns the process-wide default gate.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the built-in catalog failed to
/// compile.
pub fn default_gate() -> Result<&'static ClaimGate, ImplementationError> {
    DEFAULT_GATE.as_ref().map_err(Clone::clone)
}

/// Dispatches a synchronous assertion call against the default gate.
///
/// # Errors
///
/// Returns [`ExpectError`] exactly as [`ClaimGate::expect`] does.
pub fn expect(subject: &Value, phrase: &str, params: &[Value]) -> Result<(), ExpectError> {
    default_gate().map_err(ExpectError::Implementation)?.expect(subject, phrase, params)
}

/// Dispatches an asynchronous assertion call against the default gate.
///
/// # Errors
///
/// Returns [`ExpectError`] exactly as [`ClaimGate::expect_async`] does.
pub async fn expect_async(
    subject: &Value,
    phrase: &str,
    params: &[Value],
) -> Result<(), ExpectError> {
    default_gate()
        .map_err(ExpectError::Implementation)?
        .expect_async(subject, phrase, params)
        .await
}

/// Returns a new gate extending the default pool with the given definitions;
/// the default gate itself is never mutated.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the built-in catalog failed to
/// compile.
pub fn extend_default<I>(definitions: I) -> Result<ClaimGate, ImplementationError>
where
    I: IntoIterator<Item = AnyDefinition>,
{
    Ok(default_gate()?.extend(definitions))
}
