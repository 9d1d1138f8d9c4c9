// crates/claim-gate-core/src/core/slots.rs
// ============================================================================
// Module: Slot Compiler
// Description: Compile declaration parts into per-argument-position matchers.
// Purpose: Enforce structural rules once, at assertion construction time.
// Dependencies: crate::core::{errors, phrase}, crate::interfaces
// ============================================================================

//! ## Overview
//! The slot compiler turns an author-declared parts sequence into one matcher
//! per expected call-argument position. Structural violations are construction
//! time errors, never silently ignored: parts must be non-empty, the literal
//! `"and"` must be immediately followed by a schema, and a declaration that
//! leads with a schema must name its phrase in second position. Declarations
//! that lead with a phrase receive an implicit unknown subject slot.
//!
//! Compiled slots always have length >= 2 and slot index 1 is always a
//! literal, so the dispatch phrase occupies argument position 1 for every
//! registered assertion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::core::errors::ImplementationError;
use crate::core::phrase::Part;
use crate::core::phrase::PhraseChoice;
use crate::interfaces::SchemaRef;

// ============================================================================
// SECTION: Slot Model
// ============================================================================

/// One compiled matcher for one call-argument position.
#[derive(Clone)]
pub enum Slot {
    /// Phrase literal(s) matched by exact string comparison; never passed to
    /// the implementation.
    Literal(PhraseChoice),
    /// Value validated against a schema.
    Value(SchemaRef),
    /// Accepts any value and marks the parse as non-exact.
    Unknown,
}

impl Slot {
    /// True for literal slots.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the literal choice for literal slots.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&PhraseChoice> {
        match self {
            Self::Literal(choice) => Some(choice),
            Self::Value(_) | Self::Unknown => None,
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(choice) => f.debug_tuple("Literal").field(choice).finish(),
            Self::Value(schema) => f.debug_tuple("Value").field(&schema.label()).finish(),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

// ============================================================================
// SECTION: Compilation
// ============================================================================

/// Compiles declaration parts into slots.
///
/// # Errors
///
/// Returns [`ImplementationError`] when the declaration violates a structural
/// rule: empty parts, `"and"` not followed by a schema, or a leading schema
/// without a phrase in second position.
pub fn compile_slots(parts: &[Part]) -> Result<Vec<Slot>, ImplementationError> {
    let Some(first) = parts.first() else {
        return Err(ImplementationError::EmptyParts);
    };

    // The conjunction keyword is only a clause boundary, never a phrase.
    for (position, part) in parts.iter().enumerate() {
        if let Part::Phrase(literal) = part
            && literal.is_and()
            && !matches!(parts.get(position + 1), Some(Part::Schema(_)))
        {
            return Err(ImplementationError::AndWithoutSchema);
        }
    }

    let mut slots = Vec::with_capacity(parts.len() + 1);
    if first.is_phrase() {
        // Shorthand form: the subject slot is implicit and accepts anything.
        slots.push(Slot::Unknown);
    } else if !matches!(parts.get(1), Some(part) if part.is_phrase()) {
        return Err(ImplementationError::SchemaWithoutPhrase);
    }

    for part in parts {
        slots.push(match part {
            Part::Phrase(literal) => Slot::Literal(PhraseChoice::single(literal.clone())),
            Part::Choice(choice) => Slot::Literal(choice.clone()),
            Part::Schema(schema) => compile_value_slot(schema),
        });
    }

    Ok(slots)
}

/// Compiles a schema part, folding any-accepting schemas into unknown slots.
fn compile_value_slot(schema: &SchemaRef) -> Slot {
    if schema.is_any() {
        Slot::Unknown
    } else {
        Slot::Value(SchemaRef::clone(schema))
    }
}
