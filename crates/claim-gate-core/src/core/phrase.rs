// crates/claim-gate-core/src/core/phrase.rs
// ============================================================================
// Module: Phrase Tokens and Parts
// Description: Validated phrase literals, alias choices, and declaration parts.
// Purpose: Model the author-declared shape of an assertion.
// Dependencies: crate::core::errors, crate::interfaces
// ============================================================================

//! ## Overview
//! An assertion is declared as an ordered sequence of parts: phrase literals,
//! choices of interchangeable literals, and schemas. Phrase text is validated
//! at construction: literals are non-empty and never start with the reserved
//! `"not "` prefix, so negation stripping at dispatch time can never collide
//! with a registered phrase.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::core::errors::ImplementationError;
use crate::interfaces::SchemaRef;

// ============================================================================
// SECTION: Phrase Literal
// ============================================================================

/// One immutable phrase token of an assertion declaration.
///
/// # Invariants
/// - Non-empty.
/// - Never starts with `"not "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhraseLiteral(String);

impl PhraseLiteral {
    /// Creates a validated phrase literal.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] when the text is empty or starts with
    /// the reserved `"not "` prefix.
    pub fn new(text: impl Into<String>) -> Result<Self, ImplementationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ImplementationError::EmptyPhrase);
        }
        if text.starts_with("not ") {
            return Err(ImplementationError::NegatedPhrase {
                phrase: text,
            });
        }
        Ok(Self(text))
    }

    /// Returns the literal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the literal is the conjunction keyword `"and"`.
    #[must_use]
    pub fn is_and(&self) -> bool {
        self.0 == "and"
    }
}

impl fmt::Display for PhraseLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Phrase Literal Choice
// ============================================================================

/// An ordered, non-empty set of interchangeable phrase literals.
///
/// # Invariants
/// - At least one member.
/// - Members never include the conjunction keyword `"and"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhraseChoice(Vec<PhraseLiteral>);

impl PhraseChoice {
    /// Creates a validated choice from its members.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] when the member list is empty or
    /// contains the conjunction keyword.
    pub fn new(members: Vec<PhraseLiteral>) -> Result<Self, ImplementationError> {
        if members.is_empty() {
            return Err(ImplementationError::EmptyChoice);
        }
        if members.iter().any(PhraseLiteral::is_and) {
            return Err(ImplementationError::AndInChoice);
        }
        Ok(Self(members))
    }

    /// Creates a single-member choice from one literal.
    #[must_use]
    pub fn single(literal: PhraseLiteral) -> Self {
        Self(vec![literal])
    }

    /// Returns the choice members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[PhraseLiteral] {
        &self.0
    }

    /// Returns the canonical (first-declared) member.
    #[must_use]
    pub fn canonical(&self) -> &PhraseLiteral {
        &self.0[0]
    }

    /// True when the text equals one member, case-sensitively.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|member| member.as_str() == text)
    }
}

impl fmt::Display for PhraseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self.0.iter().map(PhraseLiteral::as_str).collect();
        f.write_str(&rendered.join("/"))
    }
}

// ============================================================================
// SECTION: Declaration Parts
// ============================================================================

/// One element of an assertion declaration.
#[derive(Clone)]
pub enum Part {
    /// A bare phrase literal.
    Phrase(PhraseLiteral),
    /// A choice of interchangeable phrase literals.
    Choice(PhraseChoice),
    /// A schema validating one call argument.
    Schema(SchemaRef),
}

impl Part {
    /// Creates a phrase part from text.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] when the text violates the phrase
    /// literal invariants.
    pub fn phrase(text: impl Into<String>) -> Result<Self, ImplementationError> {
        Ok(Self::Phrase(PhraseLiteral::new(text)?))
    }

    /// Creates a choice part from alternative texts.
    ///
    /// # Errors
    ///
    /// Returns [`ImplementationError`] when any alternative violates the
    /// phrase invariants or the list is empty.
    pub fn choice<T: Into<String>>(alternatives: Vec<T>) -> Result<Self, ImplementationError> {
        let members = alternatives
            .into_iter()
            .map(PhraseLiteral::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Choice(PhraseChoice::new(members)?))
    }

    /// Creates a schema part.
    #[must_use]
    pub const fn schema(schema: SchemaRef) -> Self {
        Self::Schema(schema)
    }

    /// True for phrase and choice parts.
    #[must_use]
    pub const fn is_phrase(&self) -> bool {
        matches!(self, Self::Phrase(_) | Self::Choice(_))
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phrase(literal) => f.debug_tuple("Phrase").field(literal).finish(),
            Self::Choice(choice) => f.debug_tuple("Choice").field(choice).finish(),
            Self::Schema(schema) => f.debug_tuple("Schema").field(&schema.label()).finish(),
        }
    }
}
