// crates/claim-gate-assertions/src/types.rs
// ============================================================================
// Module: Type Assertions
// Description: Built-in JSON kind and truthiness assertions.
// Purpose: Cover the elementary "what is this value" checks.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! Kind assertions are schema-backed and benefit from the cached
//! subject-verdict parse optimization. The parametric `to be a <type name>`
//! form defers onto the named kind schema, so its failure text matches the
//! dedicated kind assertions exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use claim_gate_core::AnyDefinition;
use claim_gate_core::AssertionOutcome;
use claim_gate_core::CheckError;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_schemas::EnumSchema;
use claim_gate_schemas::JsonKind;
use claim_gate_schemas::PredicateSchema;
use claim_gate_schemas::TypeSchema;
use serde_json::Value;

use crate::builders::arg;
use crate::builders::function_assertion;
use crate::builders::schema_assertion;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Type names accepted by the parametric kind assertion.
const TYPE_NAMES: [&str; 7] =
    ["string", "number", "integer", "boolean", "null", "array", "object"];

/// Returns the built-in type assertions.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a declaration is malformed; built-in
/// declarations failing is a packaging defect surfaced at gate construction.
pub fn definitions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    Ok(vec![
        schema_assertion("to be a string", Arc::new(TypeSchema::string()))?,
        schema_assertion("to be a number", Arc::new(TypeSchema::number()))?,
        schema_assertion("to be an integer", Arc::new(TypeSchema::integer()))?,
        schema_assertion("to be a boolean", Arc::new(TypeSchema::boolean()))?,
        schema_assertion("to be null", Arc::new(TypeSchema::null()))?,
        schema_assertion("to be an array", Arc::new(TypeSchema::array()))?,
        schema_assertion("to be an object", Arc::new(TypeSchema::object()))?,
        type_name_assertion()?,
        schema_assertion("to be truthy", Arc::new(PredicateSchema::new("truthy value", truthy)))?,
        schema_assertion(
            "to be falsy",
            Arc::new(PredicateSchema::new("falsy value", |value| !truthy(value))),
        )?,
    ])
}

/// Builds `to be a/to be an <type name>`, deferring onto the named kind.
fn type_name_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![
            Part::choice(vec!["to be a", "to be an"])?,
            Part::schema(Arc::new(EnumSchema::new(TYPE_NAMES.to_vec()))),
        ],
        |values| {
            let name = arg(values, 1)?.as_str().unwrap_or_default();
            let kind = JsonKind::from_name(name).ok_or_else(|| {
                CheckError::Broken(format!("unsupported type name: {name}"))
            })?;
            Ok(AssertionOutcome::Defer(Arc::new(TypeSchema::new(kind))))
        },
    )
}

/// JSON truthiness: null, false, zero, and empty strings are falsy.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
