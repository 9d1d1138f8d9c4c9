// crates/claim-gate-assertions/src/lib.rs
// ============================================================================
// Module: Claim Gate Assertions
// Description: Built-in assertion catalog and the default gate facade.
// Purpose: Provide ready-to-use assertions aligned with Claim Gate core.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! This crate ships a representative catalog of built-in assertions (type
//! checks, ordering bounds, equality, containment, emptiness, length, set
//! membership, structural satisfaction, and async yielding) plus the
//! process-wide default gate and its `expect` / `expect_async` facade. The
//! catalog reaches the engine only as data: every built-in is an ordinary
//! definition created through the core authoring factories.
//!
//! Invariants:
//! - The default gate is initialized once and never mutated; extension
//!   always returns a new gate.
//! - Built-ins fail closed: uninterpretable subjects are reported, never
//!   silently accepted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod asynchronous;
pub mod builders;
pub mod collections;
pub mod equality;
pub mod gate;
pub mod ordering;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builders::async_function_assertion;
pub use builders::choice_schema_assertion;
pub use builders::function_assertion;
pub use builders::schema_assertion;
pub use gate::builtin_assertions;
pub use gate::default_gate;
pub use gate::expect;
pub use gate::expect_async;
pub use gate::extend_default;
