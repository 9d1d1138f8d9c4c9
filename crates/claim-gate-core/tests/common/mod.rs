// crates/claim-gate-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Fixtures
// Description: Minimal schema and definition fixtures for engine tests.
// Purpose: Exercise dispatch without depending on the schema crates.
// Dependencies: claim-gate-core
// ============================================================================

//! ## Overview
//! Provides tiny schema capabilities (kind check, any-acceptor, async-only)
//! and definition builders used across the core test suites.

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
    dead_code,
    reason = "Test-only fixtures; not every suite uses every helper."
)]

use std::sync::Arc;

use async_trait::async_trait;
use claim_gate_core::AnyDefinition;
use claim_gate_core::Part;
use claim_gate_core::Schema;
use claim_gate_core::SchemaRef;
use claim_gate_core::SchemaVerdict;
use claim_gate_core::SyncImplementation;
use claim_gate_core::create_assertion;
use claim_gate_core::value_kind;
use serde_json::Value;

/// Schema accepting values of exactly one JSON kind.
pub struct KindSchema {
    /// Expected JSON kind name.
    pub kind: &'static str,
}

#[async_trait]
impl Schema for KindSchema {
    fn label(&self) -> String {
        self.kind.to_string()
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(if value_kind(value) == self.kind {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.kind,
                value_kind(value)
            ))
        })
    }
}

/// Schema accepting anything; compiles to an unknown slot.
pub struct AnyAcceptor;

#[async_trait]
impl Schema for AnyAcceptor {
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

/// Async-only kind schema; refuses the synchronous path.
pub struct AsyncOnlyKindSchema {
    /// Expected JSON kind name.
    pub kind: &'static str,
}

#[async_trait]
impl Schema for AsyncOnlyKindSchema {
    fn label(&self) -> String {
        format!("async {}", self.kind)
    }

    fn supports_sync(&self) -> bool {
        false
    }

    fn check(&self, _value: &Value) -> Option<SchemaVerdict> {
        None
    }

    async fn check_async(&self, value: &Value) -> SchemaVerdict {
        if value_kind(value) == self.kind {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.kind,
                value_kind(value)
            ))
        }
    }
}

/// Returns a shared kind schema.
pub fn kind_schema(kind: &'static str) -> SchemaRef {
    Arc::new(KindSchema {
        kind,
    })
}

/// Returns a shared any-acceptor schema.
pub fn any_schema() -> SchemaRef {
    Arc::new(AnyAcceptor)
}

/// Builds the shorthand schema-backed assertion `<any> '<phrase>'` validating
/// the subject against one kind.
pub fn kind_assertion(phrase: &str, kind: &'static str) -> AnyDefinition {
    let definition = create_assertion(
        vec![Part::phrase(phrase).unwrap()],
        SyncImplementation::Schema(kind_schema(kind)),
    )
    .unwrap();
    AnyDefinition::from(definition)
}
