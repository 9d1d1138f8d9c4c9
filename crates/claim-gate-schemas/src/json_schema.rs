// crates/claim-gate-schemas/src/json_schema.rs
// ============================================================================
// Module: JSON Schema Adapter
// Description: Schema capability backed by a compiled JSON Schema document.
// Purpose: Validate slot values against draft 2020-12 JSON Schemas.
// Dependencies: claim-gate-core, jsonschema
// ============================================================================

//! ## Overview
//! Wraps a compiled `jsonschema` validator behind the engine's schema
//! capability. Compilation happens once, at construction; validator errors
//! are mapped to issue path/message pairs and never surfaced raw.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use claim_gate_core::ImplementationError;
use claim_gate_core::Schema;
use claim_gate_core::SchemaIssue;
use claim_gate_core::SchemaVerdict;
use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;

// ============================================================================
// SECTION: JSON Schema Adapter
// ============================================================================

/// Schema capability backed by a compiled JSON Schema document.
///
/// # Invariants
/// - The document is compiled exactly once, at construction.
pub struct JsonSchema {
    /// Label used in diagnostics.
    label: String,
    /// Compiled validator.
    validator: Validator,
}

impl JsonSchema {
    /// Compiles a draft 2020-12 JSON Schema document.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] when the document is not a valid
    /// schema; a malformed schema is an authoring defect, not a runtime
    /// condition.
    pub fn new(label: impl Into<String>, document: &Value) -> Result<Self, ImplementationError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(document)
            .map_err(|err| ImplementationError::Broken {
                reason: format!("invalid schema document: {err}"),
            })?;
        Ok(Self {
            label: label.into(),
            validator,
        })
    }
}

impl std::fmt::Debug for JsonSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchema").field("label", &self.label).finish()
    }
}

#[async_trait]
impl Schema for JsonSchema {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        let issues: Vec<SchemaIssue> = self
            .validator
            .iter_errors(value)
            .map(|error| SchemaIssue::at(error.instance_path().to_string(), error.to_string()))
            .collect();
        Some(if issues.is_empty() {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::Invalid(issues)
        })
    }
}
