// crates/claim-gate-schemas/src/choice.rs
// ============================================================================
// Module: Enum Schema
// Description: Schema accepting one of a fixed set of strings.
// Purpose: Back parameter slots such as type names and mode selectors.
// Dependencies: claim-gate-core, serde_json
// ============================================================================

//! ## Overview
//! An enum schema accepts a string drawn from a fixed, ordered set. Matching
//! is exact and case-sensitive, mirroring phrase literal matching.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use claim_gate_core::Schema;
use claim_gate_core::SchemaVerdict;
use claim_gate_core::value_kind;
use serde_json::Value;

// ============================================================================
// SECTION: Enum Schema
// ============================================================================

/// Schema accepting one of a fixed set of strings.
///
/// # Invariants
/// - `allowed` is non-empty and ordered as declared.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    /// Accepted string values in declaration order.
    allowed: Vec<String>,
}

impl EnumSchema {
    /// Creates a schema from the accepted values.
    #[must_use]
    pub fn new<T: Into<String>>(allowed: Vec<T>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted values.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

#[async_trait]
impl Schema for EnumSchema {
    fn label(&self) -> String {
        format!("one of {}", self.allowed.join("/"))
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(match value.as_str() {
            Some(text) if self.allowed.iter().any(|allowed| allowed == text) => {
                SchemaVerdict::Valid(value.clone())
            }
            Some(text) => SchemaVerdict::invalid(format!(
                "expected {} but received {text:?}",
                self.label()
            )),
            None => SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.label(),
                value_kind(value)
            )),
        })
    }
}
