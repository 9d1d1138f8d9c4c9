// crates/claim-gate-schemas/src/predicate.rs
// ============================================================================
// Module: Predicate Schemas
// Description: Closure-backed schema capabilities, sync and async-only.
// Purpose: Let callers define ad-hoc slot validation without new types.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! Predicate schemas wrap a closure and a label. The synchronous variant
//! validates on both entrypoints; the async-only variant refuses the
//! synchronous path entirely, which is what the synchronous family's
//! construction-time rejection and the executor's unexpected-async check are
//! exercised against.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use claim_gate_core::Schema;
use claim_gate_core::SchemaVerdict;
use claim_gate_core::value_kind;
use serde_json::Value;

// ============================================================================
// SECTION: Synchronous Predicate
// ============================================================================

/// Closure-backed schema validating on both entrypoints.
#[derive(Clone)]
pub struct PredicateSchema {
    /// Label used in diagnostics.
    label: String,
    /// Acceptance predicate.
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl PredicateSchema {
    /// Creates a predicate schema from a label and an acceptance closure.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for PredicateSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSchema").field("label", &self.label).finish()
    }
}

#[async_trait]
impl Schema for PredicateSchema {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(if (self.predicate)(value) {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.label,
                value_kind(value)
            ))
        })
    }
}

// ============================================================================
// SECTION: Async-Only Predicate
// ============================================================================

/// Closure-backed schema that only validates asynchronously.
#[derive(Clone)]
pub struct AsyncPredicateSchema {
    /// Label used in diagnostics.
    label: String,
    /// Acceptance predicate, run only on the async path.
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl AsyncPredicateSchema {
    /// Creates an async-only predicate schema.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for AsyncPredicateSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPredicateSchema").field("label", &self.label).finish()
    }
}

#[async_trait]
impl Schema for AsyncPredicateSchema {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn supports_sync(&self) -> bool {
        false
    }

    fn check(&self, _value: &Value) -> Option<SchemaVerdict> {
        None
    }

    async fn check_async(&self, value: &Value) -> SchemaVerdict {
        if (self.predicate)(value) {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.label,
                value_kind(value)
            ))
        }
    }
}
