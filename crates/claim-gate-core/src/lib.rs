// crates/claim-gate-core/src/lib.rs
// ============================================================================
// Module: Claim Gate Core
// Description: Assertion registration, slot matching, and dispatch engine.
// Purpose: Resolve natural-language assertion calls to registered definitions.
// Dependencies: serde, serde_json, thiserror, async-trait
// ============================================================================

//! ## Overview
//! Claim Gate resolves calls of the shape `(subject, phrase, params...)` to
//! the single best-matching registered assertion definition, validates the
//! arguments against the definition's compiled slots, executes the
//! definition's implementation, and reports failures as structured errors.
//! Both synchronous and asynchronous assertion families are supported, along
//! with negation (`"not "` phrase prefixes), conjunction chains joined by
//! `"and"`, and runtime extension that never mutates an existing pool.
//!
//! Invariants:
//! - Definitions, pools, and phrase indexes are immutable after construction.
//! - Slot validation runs strictly left to right and fails closed.
//! - Dispatch tie-breaks are resolved by counting, never by iteration order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::definition::AnyDefinition;
pub use crate::core::definition::AsyncAssertionDefinition;
pub use crate::core::definition::AsyncImplementation;
pub use crate::core::definition::DefinitionId;
pub use crate::core::definition::ParsedValues;
pub use crate::core::definition::SyncAssertionDefinition;
pub use crate::core::definition::SyncImplementation;
pub use crate::core::definition::create_assertion;
pub use crate::core::definition::create_async_assertion;
pub use crate::core::errors::AmbiguousAssertionError;
pub use crate::core::errors::AssertionError;
pub use crate::core::errors::ErrorCode;
pub use crate::core::errors::ExpectError;
pub use crate::core::errors::ImplementationError;
pub use crate::core::errors::UnknownAssertionError;
pub use crate::core::outcome::AssertionFailure;
pub use crate::core::outcome::AssertionOutcome;
pub use crate::core::outcome::AsyncCheck;
pub use crate::core::outcome::CheckError;
pub use crate::core::outcome::CheckResult;
pub use crate::core::outcome::SyncCheck;
pub use crate::core::phrase::Part;
pub use crate::core::phrase::PhraseChoice;
pub use crate::core::phrase::PhraseLiteral;
pub use crate::core::slots::Slot;
pub use crate::core::slots::compile_slots;
pub use crate::interfaces::Schema;
pub use crate::interfaces::SchemaIssue;
pub use crate::interfaces::SchemaRef;
pub use crate::interfaces::SchemaVerdict;
pub use crate::interfaces::value_kind;
pub use crate::runtime::engine::ClaimGate;
pub use crate::runtime::engine::DeferredAssertion;
pub use crate::runtime::engine::fail;
pub use crate::runtime::pool::AsyncPool;
pub use crate::runtime::pool::SyncPool;
