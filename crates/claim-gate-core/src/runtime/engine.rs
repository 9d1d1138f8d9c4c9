// crates/claim-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Claim Gate Engine
// Description: Dispatch entrypoints, extension registry, deferred assertions.
// Purpose: Bind immutable pools to the public expect surface.
// Dependencies: crate::core, crate::runtime::{dispatch, pool}
// ============================================================================

//! ## Overview
//! A [`ClaimGate`] binds one synchronous and one asynchronous pool and
//! exposes the dispatch entrypoints over them. Extension never mutates: it
//! concatenates the new definitions onto copies of the current pools and
//! returns a fresh gate, so every previously created gate keeps resolving
//! exactly the definitions it was built with. Deferred assertions curry a
//! phrase and parameters into a reusable subject check that also implements
//! the schema capability, which lets assertions nest as matcher values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::definition::AnyDefinition;
use crate::core::definition::AsyncAssertionDefinition;
use crate::core::definition::SyncAssertionDefinition;
use crate::core::errors::AssertionError;
use crate::core::errors::ExpectError;
use crate::interfaces::Schema;
use crate::interfaces::SchemaVerdict;
use crate::runtime::dispatch;
use crate::runtime::pool::AsyncPool;
use crate::runtime::pool::SyncPool;

// ============================================================================
// SECTION: Claim Gate
// ============================================================================

/// Dispatcher pair bound to one synchronous and one asynchronous pool.
///
/// # Invariants
/// - Pools are immutable; extension yields a new gate.
/// - The synchronous entrypoint only consults the synchronous pool, and vice
///   versa.
#[derive(Debug, Clone, Default)]
pub struct ClaimGate {
    /// Synchronous assertion pool.
    sync_pool: Arc<SyncPool>,
    /// Asynchronous assertion pool.
    async_pool: Arc<AsyncPool>,
}

impl ClaimGate {
    /// Creates a gate from definitions of both families.
    #[must_use]
    pub fn new<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = AnyDefinition>,
    {
        let (sync_definitions, async_definitions) = partition(definitions);
        Self {
            sync_pool: Arc::new(SyncPool::new(sync_definitions)),
            async_pool: Arc::new(AsyncPool::new(async_definitions)),
        }
    }

    /// Creates a gate with no registered assertions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Dispatches a synchronous assertion call.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] when the call is unknown or ambiguous, when
    /// the assertion implementation is broken, or when the subject fails the
    /// matched assertion.
    pub fn expect(
        &self,
        subject: &Value,
        phrase: &str,
        params: &[Value],
    ) -> Result<(), ExpectError> {
        dispatch::dispatch_sync(&self.sync_pool, subject, phrase, params)
    }

    /// Dispatches an asynchronous assertion call. Synchronous schemas and
    /// plain values are accepted everywhere an asynchronous counterpart is
    /// expected.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] when the call is unknown or ambiguous, when
    /// the assertion implementation is broken, or when the subject fails the
    /// matched assertion.
    pub async fn expect_async(
        &self,
        subject: &Value,
        phrase: &str,
        params: &[Value],
    ) -> Result<(), ExpectError> {
        dispatch::dispatch_async(&self.async_pool, subject, phrase, params).await
    }

    /// Creates a new gate over the union of the current pools and the given
    /// definitions. Existing definitions keep precedence order; the receiver
    /// is left untouched.
    #[must_use]
    pub fn extend<I>(&self, definitions: I) -> Self
    where
        I: IntoIterator<Item = AnyDefinition>,
    {
        let (sync_definitions, async_definitions) = partition(definitions);
        Self {
            sync_pool: Arc::new(self.sync_pool.extend_with(sync_definitions)),
            async_pool: Arc::new(self.async_pool.extend_with(async_definitions)),
        }
    }

    /// Curries a phrase and parameters into a deferred subject check bound to
    /// this gate.
    #[must_use]
    pub fn expect_it(&self, phrase: &str, params: &[Value]) -> DeferredAssertion {
        DeferredAssertion {
            gate: self.clone(),
            phrase: phrase.to_string(),
            params: params.to_vec(),
        }
    }

    /// Returns the synchronous pool.
    #[must_use]
    pub fn sync_pool(&self) -> &SyncPool {
        &self.sync_pool
    }

    /// Returns the asynchronous pool.
    #[must_use]
    pub fn async_pool(&self) -> &AsyncPool {
        &self.async_pool
    }
}

/// Splits definitions into family-ordered collections, preserving order.
fn partition<I>(
    definitions: I,
) -> (Vec<Arc<SyncAssertionDefinition>>, Vec<Arc<AsyncAssertionDefinition>>)
where
    I: IntoIterator<Item = AnyDefinition>,
{
    let mut sync_definitions = Vec::new();
    let mut async_definitions = Vec::new();
    for definition in definitions {
        match definition {
            AnyDefinition::Sync(definition) => sync_definitions.push(definition),
            AnyDefinition::Async(definition) => async_definitions.push(definition),
        }
    }
    (sync_definitions, async_definitions)
}

// ============================================================================
// SECTION: Deferred Assertions
// ============================================================================

/// A curried assertion: phrase and parameters fixed, subject supplied later.
///
/// Implements the schema capability so a deferred assertion can stand
/// anywhere a schema is accepted, which is what allows nesting assertions as
/// matcher values inside structural parameters.
#[derive(Debug, Clone)]
pub struct DeferredAssertion {
    /// Gate the deferred call dispatches through.
    gate: ClaimGate,
    /// Phrase fixed at currying time.
    phrase: String,
    /// Parameters fixed at currying time.
    params: Vec<Value>,
}

impl DeferredAssertion {
    /// Runs the deferred assertion against a subject.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] exactly as the equivalent direct call would.
    pub fn check_subject(&self, subject: &Value) -> Result<(), ExpectError> {
        self.gate.expect(subject, &self.phrase, &self.params)
    }

    /// Runs the deferred assertion against a subject asynchronously, falling
    /// back to the synchronous family when the phrase is only registered
    /// there.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] exactly as the equivalent direct call would.
    pub async fn check_subject_async(&self, subject: &Value) -> Result<(), ExpectError> {
        match self.gate.expect_async(subject, &self.phrase, &self.params).await {
            Err(error) if error.is_unknown() => self.check_subject(subject),
            outcome => outcome,
        }
    }

    /// Returns the curried phrase.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

#[async_trait]
impl Schema for DeferredAssertion {
    fn label(&self) -> String {
        self.phrase.clone()
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(match self.check_subject(value) {
            Ok(()) => SchemaVerdict::Valid(value.clone()),
            Err(error) => SchemaVerdict::invalid(error.to_string()),
        })
    }

    async fn check_async(&self, value: &Value) -> SchemaVerdict {
        match self.check_subject_async(value).await {
            Ok(()) => SchemaVerdict::Valid(value.clone()),
            Err(error) => SchemaVerdict::invalid(error.to_string()),
        }
    }
}

// ============================================================================
// SECTION: Explicit Failure
// ============================================================================

/// Returns the base assertion failure unconditionally.
#[must_use]
pub fn fail(message: Option<&str>) -> ExpectError {
    ExpectError::Failure(AssertionError::new(message.unwrap_or("explicit failure")))
}
