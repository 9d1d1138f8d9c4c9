// crates/claim-gate-schemas/src/any.rs
// ============================================================================
// Module: Any-Acceptor Schema
// Description: Schema accepting every value.
// Purpose: Declare explicitly-unknown slots in assertion declarations.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! The any-acceptor validates nothing: every value passes. The slot compiler
//! folds any-accepting schemas into unknown slots, so declarations using it
//! match as fallbacks rather than exact matches.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use claim_gate_core::Schema;
use claim_gate_core::SchemaVerdict;
use serde_json::Value;

// ============================================================================
// SECTION: Any Schema
// ============================================================================

/// Schema accepting every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySchema;

impl AnySchema {
    /// Creates the any-acceptor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Schema for AnySchema {
    fn label(&self) -> String {
        "any".to_string()
    }

    fn is_any(&self) -> bool {
        true
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(SchemaVerdict::Valid(value.clone()))
    }
}
