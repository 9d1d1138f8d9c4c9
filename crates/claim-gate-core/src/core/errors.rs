// crates/claim-gate-core/src/core/errors.rs
// ============================================================================
// Module: Claim Gate Error Taxonomy
// Description: Stable error types raised by construction and dispatch.
// Purpose: Distinguish unknown calls, ambiguity, author defects, and failures.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every error leaving the engine is one of four kinds: the call matched no
//! registered assertion, the call matched more than one with equal
//! specificity, the assertion author's own code or declaration is broken, or
//! the subject genuinely failed the assertion. The kinds carry stable
//! [`ErrorCode`] identities because downstream tooling pattern-matches on
//! them; validator failures are always translated into [`AssertionError`]
//! text before they leave the engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Error Codes
// ============================================================================

/// Stable machine-readable error identity.
///
/// # Invariants
/// - Variants and their serialized forms are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No registered assertion structurally matched the call.
    UnknownAssertion,
    /// More than one assertion matched with equal specificity.
    AmbiguousAssertion,
    /// The assertion author's declaration or implementation is broken.
    ImplementationError,
    /// The subject failed (or, negated, passed) the matched assertion.
    AssertionFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnknownAssertion => "unknown_assertion",
            Self::AmbiguousAssertion => "ambiguous_assertion",
            Self::ImplementationError => "implementation_error",
            Self::AssertionFailed => "assertion_failed",
        };
        f.write_str(text)
    }
}

// ============================================================================
// SECTION: Unknown Assertion
// ============================================================================

/// No registered definition's slots matched the call arguments.
///
/// # Invariants
/// - `phrase` is the negation-stripped phrase the caller used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAssertionError {
    /// The phrase that failed to resolve.
    pub phrase: String,
    /// JSON kind of the subject argument.
    pub subject_kind: &'static str,
    /// JSON kinds of the trailing parameters, in call order.
    pub param_kinds: Vec<&'static str>,
}

impl fmt::Display for UnknownAssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no assertion matches phrase \"{}\" (subject: {}, params: [{}])",
            self.phrase,
            self.subject_kind,
            self.param_kinds.join(", ")
        )
    }
}

impl std::error::Error for UnknownAssertionError {}

// ============================================================================
// SECTION: Ambiguous Assertion
// ============================================================================

/// More than one definition matched the call with equal specificity.
///
/// # Invariants
/// - `candidates` holds the string forms of every tied definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousAssertionError {
    /// The phrase that resolved ambiguously.
    pub phrase: String,
    /// String forms of all tied definitions.
    pub candidates: Vec<String>,
    /// True when the tie was between exact matches.
    pub exact: bool,
}

impl fmt::Display for AmbiguousAssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specificity = if self.exact { "exact" } else { "fallback" };
        write!(
            f,
            "phrase \"{}\" matches {} definitions with equal ({}) specificity: {}",
            self.phrase,
            self.candidates.len(),
            specificity,
            self.candidates.join(", ")
        )
    }
}

impl std::error::Error for AmbiguousAssertionError {}

// ============================================================================
// SECTION: Implementation Errors
// ============================================================================

/// Defects in an assertion author's declaration or implementation.
///
/// Raised at construction time for malformed parts and at execution time for
/// misbehaving implementations. Never raised for a subject that merely failed
/// its assertion.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImplementationError {
    /// The parts sequence was empty.
    #[error("assertion parts must not be empty")]
    EmptyParts,
    /// A phrase literal was empty.
    #[error("phrase literal must not be empty")]
    EmptyPhrase,
    /// A phrase literal started with the reserved negation prefix.
    #[error("phrase literal must not start with \"not \": {phrase:?}")]
    NegatedPhrase {
        /// The offending literal.
        phrase: String,
    },
    /// A phrase literal choice had no members.
    #[error("phrase literal choice must not be empty")]
    EmptyChoice,
    /// The literal `"and"` was not immediately followed by a schema part.
    #[error("\"and\" can only appear when followed by a schema")]
    AndWithoutSchema,
    /// The literal `"and"` appeared inside a phrase literal choice.
    #[error("\"and\" is not allowed inside a phrase literal choice")]
    AndInChoice,
    /// A leading subject schema was not followed by a phrase.
    #[error("a leading subject schema must be followed by a phrase literal or choice")]
    SchemaWithoutPhrase,
    /// An async-only schema reached a synchronous execution path.
    #[error("async-only schema \"{label}\" cannot be used by a synchronous assertion")]
    UnexpectedAsync {
        /// Label of the offending schema.
        label: String,
    },
    /// The implementation reported that its own logic misbehaved.
    #[error("assertion implementation misbehaved: {reason}")]
    Broken {
        /// Description of the defect.
        reason: String,
    },
}

// ============================================================================
// SECTION: Assertion Failure
// ============================================================================

/// The expected failure: the subject did not satisfy the matched assertion,
/// or satisfied it under negation.
///
/// # Invariants
/// - `message` is always human-readable; validator issues are pre-rendered.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AssertionError {
    /// Human-readable failure description.
    pub message: String,
    /// Observed subject value, when available.
    pub actual: Option<Value>,
    /// Expected value or shape, when available.
    pub expected: Option<Value>,
    /// Pre-rendered diff between actual and expected, when available.
    pub diff: Option<String>,
    /// True when the failure arose from a negated call that passed.
    pub negated: bool,
    /// String form of the matched definition, when known.
    pub assertion: Option<String>,
}

impl AssertionError {
    /// Creates a failure with a message and no value metadata.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: None,
            expected: None,
            diff: None,
            negated: false,
            assertion: None,
        }
    }

    /// Attaches the observed subject value.
    #[must_use]
    pub fn with_actual(mut self, actual: Value) -> Self {
        self.actual = Some(actual);
        self
    }

    /// Attaches the expected value or shape.
    #[must_use]
    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Attaches the string form of the matched definition.
    #[must_use]
    pub fn with_assertion(mut self, assertion: impl Into<String>) -> Self {
        self.assertion = Some(assertion.into());
        self
    }
}

// ============================================================================
// SECTION: Umbrella Error
// ============================================================================

/// Any error raised by a dispatch call.
///
/// # Invariants
/// - `code()` identities are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpectError {
    /// No registered assertion matched the call.
    #[error("unknown assertion: {0}")]
    Unknown(#[from] UnknownAssertionError),
    /// More than one assertion matched with equal specificity.
    #[error("ambiguous assertion: {0}")]
    Ambiguous(#[from] AmbiguousAssertionError),
    /// The assertion author's declaration or implementation is broken.
    #[error("assertion implementation error: {0}")]
    Implementation(#[from] ImplementationError),
    /// The subject failed the matched assertion.
    #[error(transparent)]
    Failure(#[from] AssertionError),
}

impl ExpectError {
    /// Returns the stable machine-readable error identity.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Unknown(_) => ErrorCode::UnknownAssertion,
            Self::Ambiguous(_) => ErrorCode::AmbiguousAssertion,
            Self::Implementation(_) => ErrorCode::ImplementationError,
            Self::Failure(_) => ErrorCode::AssertionFailed,
        }
    }

    /// True when no registered assertion matched the call.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// True when the call was ambiguous.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }

    /// True when the assertion author's code or declaration is broken.
    #[must_use]
    pub const fn is_implementation(&self) -> bool {
        matches!(self, Self::Implementation(_))
    }

    /// True when the subject genuinely failed the assertion.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
