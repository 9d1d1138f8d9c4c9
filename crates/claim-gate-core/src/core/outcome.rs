// crates/claim-gate-core/src/core/outcome.rs
// ============================================================================
// Module: Assertion Outcomes
// Description: Closed result sum for function-backed assertion checks.
// Purpose: Coerce boolean, schema, and structured-failure shapes once.
// Dependencies: crate::interfaces, async-trait, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Function-backed implementations produce one closed outcome sum instead of
//! being re-interpreted by type at every call site: pass, a structured
//! failure record, or a deferral onto a schema that the executor validates
//! against the subject. Boolean returns are coerced at the adapter boundary
//! via `From<bool>`. An implementation that cannot produce an outcome
//! reports a check error: validation issues (translated exactly like a
//! schema failure) or a defect in its own logic (never swallowed).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::interfaces::SchemaIssue;
use crate::interfaces::SchemaRef;

// ============================================================================
// SECTION: Structured Failure
// ============================================================================

/// Structured explicit-failure record from a function-backed implementation.
///
/// Not an error by itself: a data-carrying "this failed, here's why" record
/// that the executor translates into an assertion failure.
///
/// # Invariants
/// - All fields are optional; a default message is synthesized from the
///   definition's string form when `message` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Human-readable failure description.
    pub message: Option<String>,
    /// Observed value.
    pub actual: Option<Value>,
    /// Expected value or shape.
    pub expected: Option<Value>,
    /// Pre-rendered diff between actual and expected.
    pub diff: Option<String>,
}

impl AssertionFailure {
    /// Creates a failure with a message only.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a failure from observed and expected values.
    #[must_use]
    pub fn mismatch(actual: Value, expected: Value) -> Self {
        Self {
            message: None,
            actual: Some(actual),
            expected: Some(expected),
            diff: None,
        }
    }

    /// Attaches a pre-rendered diff.
    #[must_use]
    pub fn with_diff(mut self, diff: impl Into<String>) -> Self {
        self.diff = Some(diff.into());
        self
    }
}

// ============================================================================
// SECTION: Outcome Sum
// ============================================================================

/// Closed outcome sum produced by function-backed checks.
#[derive(Clone)]
pub enum AssertionOutcome {
    /// The assertion passed.
    Pass,
    /// The assertion failed with structured details.
    Fail(AssertionFailure),
    /// Defer to a schema validated against the subject by the executor.
    Defer(SchemaRef),
}

impl From<bool> for AssertionOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail(AssertionFailure::default())
        }
    }
}

impl fmt::Debug for AssertionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("Pass"),
            Self::Fail(failure) => f.debug_tuple("Fail").field(failure).finish(),
            Self::Defer(schema) => f.debug_tuple("Defer").field(&schema.label()).finish(),
        }
    }
}

// ============================================================================
// SECTION: Check Errors
// ============================================================================

/// Error raised by a function-backed check instead of an outcome.
///
/// # Invariants
/// - `Invalid` is translated exactly like a schema validation failure.
/// - `Broken` is surfaced as an implementation error, never as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Validation issues raised directly by the implementation.
    #[error("validation failed: {}", render_issues(.0))]
    Invalid(Vec<SchemaIssue>),
    /// The implementation's own logic misbehaved.
    #[error("implementation defect: {0}")]
    Broken(String),
}

/// Renders an issue list for the `Invalid` display form.
fn render_issues(issues: &[SchemaIssue]) -> String {
    let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
    rendered.join("; ")
}

/// Result type produced by every function-backed check.
pub type CheckResult = Result<AssertionOutcome, CheckError>;

// ============================================================================
// SECTION: Check Callables
// ============================================================================

/// Synchronous function-backed check over the implementation-facing values.
pub type SyncCheck = Arc<dyn Fn(&[Value]) -> CheckResult + Send + Sync>;

/// Asynchronous function-backed check over the implementation-facing values.
#[async_trait]
pub trait AsyncCheck: Send + Sync {
    /// Runs the check against the parsed values.
    async fn check(&self, values: &[Value]) -> CheckResult;
}
