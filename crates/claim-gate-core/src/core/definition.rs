// crates/claim-gate-core/src/core/definition.rs
// ============================================================================
// Module: Assertion Definitions
// Description: Immutable registered assertion units, sync and async families.
// Purpose: Compile declarations once and parse call arguments against them.
// Dependencies: crate::core::{errors, outcome, phrase, slots}, crate::interfaces
// ============================================================================

//! ## Overview
//! A definition is the immutable registered unit: its declaration parts, the
//! compiled slots, an implementation (schema or function), and a stable
//! synthetic identity plus a human-readable string form. The two execution
//! families are separate types because argument parsing for async-validated
//! parameters must never silently succeed under the synchronous entrypoint:
//! the sync family rejects async-only schemas at construction time.
//!
//! Parsing walks slots strictly left to right, short-circuiting on the first
//! structural mismatch. Literal slots contribute nothing to the
//! implementation-facing values; unknown slots accept anything and mark the
//! parse as non-exact.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::errors::ImplementationError;
use crate::core::outcome::AsyncCheck;
use crate::core::outcome::SyncCheck;
use crate::core::phrase::Part;
use crate::core::phrase::PhraseChoice;
use crate::core::slots::Slot;
use crate::core::slots::compile_slots;
use crate::interfaces::SchemaRef;
use crate::interfaces::SchemaVerdict;

// ============================================================================
// SECTION: Definition Identity
// ============================================================================

/// Next definition identifier; identifiers are process-unique and 1-based.
static NEXT_DEFINITION_ID: AtomicU64 = AtomicU64::new(1);

/// Stable synthetic identifier assigned to every definition at creation.
///
/// # Invariants
/// - Always >= 1 (non-zero, 1-based).
/// - Unique within the process for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(NonZeroU64);

impl DefinitionId {
    /// Allocates the next process-unique identifier.
    fn allocate() -> Self {
        let raw = NEXT_DEFINITION_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only increments.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertion-{}", self.0.get())
    }
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

/// Implementation of a synchronous assertion definition.
#[derive(Clone)]
pub enum SyncImplementation {
    /// Pure validation: the subject is validated against one schema.
    Schema(SchemaRef),
    /// Arbitrary logic over the implementation-facing values.
    Function(SyncCheck),
}

impl fmt::Debug for SyncImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(schema) => f.debug_tuple("Schema").field(&schema.label()).finish(),
            Self::Function(_) => f.write_str("Function"),
        }
    }
}

/// Implementation of an asynchronous assertion definition.
#[derive(Clone)]
pub enum AsyncImplementation {
    /// Pure validation: the subject is validated against one schema.
    Schema(SchemaRef),
    /// Arbitrary async logic over the implementation-facing values.
    Function(Arc<dyn AsyncCheck>),
}

impl fmt::Debug for AsyncImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(schema) => f.debug_tuple("Schema").field(&schema.label()).finish(),
            Self::Function(_) => f.write_str("Function"),
        }
    }
}

// ============================================================================
// SECTION: Parsed Values
// ============================================================================

/// Successful structural match of call arguments against one definition.
///
/// # Invariants
/// - `values[0]` is always the subject: slot 0 is never a literal.
/// - `exact` is false iff at least one slot fell back to unknown.
#[derive(Debug, Clone)]
pub struct ParsedValues {
    /// Implementation-facing arguments: non-literal slots only, in order,
    /// carrying validated (possibly coerced) data for value slots.
    pub values: Vec<Value>,
    /// True iff no slot fell back to the unknown acceptor.
    pub exact: bool,
    /// Cached subject validation for single-subject schema-backed
    /// definitions; present for both accepted and rejected subjects.
    pub subject_verdict: Option<SchemaVerdict>,
}

// ============================================================================
// SECTION: Synchronous Definitions
// ============================================================================

/// Immutable synchronous assertion definition.
///
/// # Invariants
/// - `slots` are compiled from `parts` exactly once, at construction.
/// - No slot or implementation schema is async-only.
pub struct SyncAssertionDefinition {
    /// Stable synthetic identity.
    id: DefinitionId,
    /// Source declaration.
    parts: Vec<Part>,
    /// Compiled per-argument matchers.
    slots: Vec<Slot>,
    /// Validation logic.
    implementation: SyncImplementation,
    /// Human-readable string form built from the parts.
    rendered: String,
}

impl SyncAssertionDefinition {
    /// Creates a synchronous definition from declaration parts and an
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] for structurally invalid parts or when
    /// any schema involved is async-only.
    pub fn new(
        parts: Vec<Part>,
        implementation: SyncImplementation,
    ) -> Result<Self, ImplementationError> {
        let slots = compile_slots(&parts)?;
        for slot in &slots {
            if let Slot::Value(schema) = slot {
                reject_async_only(schema)?;
            }
        }
        if let SyncImplementation::Schema(schema) = &implementation {
            reject_async_only(schema)?;
        }
        let rendered = render_parts(&parts);
        Ok(Self {
            id: DefinitionId::allocate(),
            parts,
            slots,
            implementation,
            rendered,
        })
    }

    /// Returns the definition identity.
    #[must_use]
    pub const fn id(&self) -> DefinitionId {
        self.id
    }

    /// Returns the source declaration.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the compiled slots.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the implementation.
    #[must_use]
    pub const fn implementation(&self) -> &SyncImplementation {
        &self.implementation
    }

    /// Returns the human-readable string form.
    #[must_use]
    pub fn string_form(&self) -> &str {
        &self.rendered
    }

    /// Returns the dispatch phrase choice (slot 1, always a literal).
    #[must_use]
    pub fn dispatch_choice(&self) -> Option<&PhraseChoice> {
        self.slots.get(1).and_then(Slot::as_literal)
    }

    /// Attempts a structural match of raw call arguments against the slots.
    ///
    /// Returns `None` when the arguments do not match. For single-subject
    /// schema-backed definitions the implementation schema is validated
    /// inline and its verdict cached, so the executor need not re-validate;
    /// a rejected subject still matches structurally and fails at execution.
    #[must_use]
    pub fn parse_values(&self, args: &[Value]) -> Option<ParsedValues> {
        let mut parsed = parse_slots_sync(&self.slots, args)?;
        if let SyncImplementation::Schema(schema) = &self.implementation
            && single_subject_shape(&self.slots)
        {
            parsed.subject_verdict = Some(schema.check(&args[0])?);
        }
        Some(parsed)
    }
}

impl fmt::Debug for SyncAssertionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncAssertionDefinition")
            .field("id", &self.id)
            .field("form", &self.rendered)
            .finish()
    }
}

impl fmt::Display for SyncAssertionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

// ============================================================================
// SECTION: Asynchronous Definitions
// ============================================================================

/// Immutable asynchronous assertion definition.
///
/// # Invariants
/// - `slots` are compiled from `parts` exactly once, at construction.
/// - Slots may reference async-only schemas; validation always awaits.
pub struct AsyncAssertionDefinition {
    /// Stable synthetic identity.
    id: DefinitionId,
    /// Source declaration.
    parts: Vec<Part>,
    /// Compiled per-argument matchers.
    slots: Vec<Slot>,
    /// Validation logic.
    implementation: AsyncImplementation,
    /// Human-readable string form built from the parts.
    rendered: String,
}

impl AsyncAssertionDefinition {
    /// Creates an asynchronous definition from declaration parts and an
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] for structurally invalid parts.
    pub fn new(
        parts: Vec<Part>,
        implementation: AsyncImplementation,
    ) -> Result<Self, ImplementationError> {
        let slots = compile_slots(&parts)?;
        let rendered = render_parts(&parts);
        Ok(Self {
            id: DefinitionId::allocate(),
            parts,
            slots,
            implementation,
            rendered,
        })
    }

    /// Returns the definition identity.
    #[must_use]
    pub const fn id(&self) -> DefinitionId {
        self.id
    }

    /// Returns the source declaration.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the compiled slots.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the implementation.
    #[must_use]
    pub const fn implementation(&self) -> &AsyncImplementation {
        &self.implementation
    }

    /// Returns the human-readable string form.
    #[must_use]
    pub fn string_form(&self) -> &str {
        &self.rendered
    }

    /// Returns the dispatch phrase choice (slot 1, always a literal).
    #[must_use]
    pub fn dispatch_choice(&self) -> Option<&PhraseChoice> {
        self.slots.get(1).and_then(Slot::as_literal)
    }

    /// Attempts a structural match of raw call arguments against the slots,
    /// awaiting schema validation as needed.
    pub async fn parse_values_async(&self, args: &[Value]) -> Option<ParsedValues> {
        if args.len() != self.slots.len() {
            return None;
        }
        let mut values = Vec::new();
        let mut exact = true;
        for (slot, arg) in self.slots.iter().zip(args) {
            match slot {
                Slot::Literal(choice) => {
                    let Value::String(text) = arg else {
                        return None;
                    };
                    if !choice.matches(text) {
                        return None;
                    }
                }
                Slot::Unknown => {
                    exact = false;
                    values.push(arg.clone());
                }
                Slot::Value(schema) => match schema.check_async(arg).await {
                    SchemaVerdict::Valid(data) => values.push(data),
                    SchemaVerdict::Invalid(_) => return None,
                },
            }
        }
        let subject_verdict = if let AsyncImplementation::Schema(schema) = &self.implementation
            && single_subject_shape(&self.slots)
        {
            Some(schema.check_async(&args[0]).await)
        } else {
            None
        };
        Some(ParsedValues {
            values,
            exact,
            subject_verdict,
        })
    }
}

impl fmt::Debug for AsyncAssertionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncAssertionDefinition")
            .field("id", &self.id)
            .field("form", &self.rendered)
            .finish()
    }
}

impl fmt::Display for AsyncAssertionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

// ============================================================================
// SECTION: Family Tagging
// ============================================================================

/// A definition of either execution family, as accepted by extension.
#[derive(Debug, Clone)]
pub enum AnyDefinition {
    /// Synchronous family member.
    Sync(Arc<SyncAssertionDefinition>),
    /// Asynchronous family member.
    Async(Arc<AsyncAssertionDefinition>),
}

impl From<Arc<SyncAssertionDefinition>> for AnyDefinition {
    fn from(definition: Arc<SyncAssertionDefinition>) -> Self {
        Self::Sync(definition)
    }
}

impl From<Arc<AsyncAssertionDefinition>> for AnyDefinition {
    fn from(definition: Arc<AsyncAssertionDefinition>) -> Self {
        Self::Async(definition)
    }
}

// ============================================================================
// SECTION: Authoring Factories
// ============================================================================

/// Creates a shared synchronous assertion definition.
///
/// # Errors
///
/// Returns [`ImplementationError`] for structurally invalid parts or when any
/// schema involved is async-only.
pub fn create_assertion(
    parts: Vec<Part>,
    implementation: SyncImplementation,
) -> Result<Arc<SyncAssertionDefinition>, ImplementationError> {
    SyncAssertionDefinition::new(parts, implementation).map(Arc::new)
}

/// Creates a shared asynchronous assertion definition.
///
/// # Errors
///
/// Returns [`ImplementationError`] for structurally invalid parts.
pub fn create_async_assertion(
    parts: Vec<Part>,
    implementation: AsyncImplementation,
) -> Result<Arc<AsyncAssertionDefinition>, ImplementationError> {
    AsyncAssertionDefinition::new(parts, implementation).map(Arc::new)
}

// ============================================================================
// SECTION: Shared Parsing Helpers
// ============================================================================

/// Walks slots left to right against arguments, synchronously.
fn parse_slots_sync(slots: &[Slot], args: &[Value]) -> Option<ParsedValues> {
    if args.len() != slots.len() {
        return None;
    }
    let mut values = Vec::new();
    let mut exact = true;
    for (slot, arg) in slots.iter().zip(args) {
        match slot {
            Slot::Literal(choice) => {
                let Value::String(text) = arg else {
                    return None;
                };
                if !choice.matches(text) {
                    return None;
                }
            }
            Slot::Unknown => {
                exact = false;
                values.push(arg.clone());
            }
            Slot::Value(schema) => match schema.check(arg)? {
                SchemaVerdict::Valid(data) => values.push(data),
                SchemaVerdict::Invalid(_) => return None,
            },
        }
    }
    Some(ParsedValues {
        values,
        exact,
        subject_verdict: None,
    })
}

/// True when slot 0 is the only non-literal slot (the single-subject shape
/// eligible for the cached-verdict optimization).
fn single_subject_shape(slots: &[Slot]) -> bool {
    let mut slots = slots.iter();
    let Some(subject) = slots.next() else {
        return false;
    };
    !subject.is_literal() && slots.all(Slot::is_literal)
}

/// Rejects async-only schemas from the synchronous family.
fn reject_async_only(schema: &SchemaRef) -> Result<(), ImplementationError> {
    if schema.supports_sync() {
        Ok(())
    } else {
        Err(ImplementationError::UnexpectedAsync {
            label: schema.label(),
        })
    }
}

/// Renders the human-readable string form of a declaration.
fn render_parts(parts: &[Part]) -> String {
    let mut rendered = Vec::with_capacity(parts.len() + 1);
    if parts.first().is_some_and(Part::is_phrase) {
        rendered.push("<any>".to_string());
    }
    for part in parts {
        rendered.push(match part {
            Part::Phrase(literal) => format!("'{literal}'"),
            Part::Choice(choice) => format!("'{choice}'"),
            Part::Schema(schema) => format!("<{}>", schema.label()),
        });
    }
    rendered.join(" ")
}
