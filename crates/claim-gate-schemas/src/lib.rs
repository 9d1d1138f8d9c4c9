// crates/claim-gate-schemas/src/lib.rs
// ============================================================================
// Module: Claim Gate Schemas
// Description: Concrete schema capabilities for the assertion engine.
// Purpose: Provide the validation backends value slots delegate to.
// Dependencies: claim-gate-core, bigdecimal, jsonschema, time
// ============================================================================

//! ## Overview
//! This crate ships the concrete [`claim_gate_core::Schema`] implementations
//! the engine is exercised with: JSON kind checks, decimal-aware ordering
//! bounds, fixed string sets, closure-backed predicates (sync and
//! async-only), and an adapter over JSON Schema documents. The engine itself
//! never depends on any of these; they reach it only through the schema
//! capability interface.
//!
//! Invariants:
//! - Verdicts are deterministic for identical inputs.
//! - Incomparable or uninterpretable inputs fail closed as invalid.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod any;
pub mod choice;
pub mod compare;
pub mod json_schema;
pub mod kind;
pub mod predicate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use any::AnySchema;
pub use choice::EnumSchema;
pub use compare::BoundSchema;
pub use compare::OrderingOp;
pub use compare::compare_ordered;
pub use compare::contains_value;
pub use compare::in_set;
pub use compare::values_equal;
pub use json_schema::JsonSchema;
pub use kind::JsonKind;
pub use kind::TypeSchema;
pub use predicate::AsyncPredicateSchema;
pub use predicate::PredicateSchema;
