// crates/claim-gate-core/src/runtime/executor.rs
// ============================================================================
// Module: Assertion Executor
// Description: Run matched implementations and translate their outcomes.
// Purpose: Normalize every outcome shape into pass or a structured error.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The executor runs a matched definition's implementation against the parsed
//! values and folds every outcome shape into a single pass/fail verdict:
//! schema verdicts (cached or freshly validated), closed outcome sums from
//! function-backed checks, deferred schemas, and check errors. Validator
//! issues are always rendered into engine-owned failure text. Inversion is
//! applied at the pass/fail boundary only; implementation defects propagate
//! regardless of inversion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::definition::AsyncAssertionDefinition;
use crate::core::definition::AsyncImplementation;
use crate::core::definition::ParsedValues;
use crate::core::definition::SyncAssertionDefinition;
use crate::core::definition::SyncImplementation;
use crate::core::errors::AssertionError;
use crate::core::errors::ExpectError;
use crate::core::errors::ImplementationError;
use crate::core::outcome::AssertionFailure;
use crate::core::outcome::AssertionOutcome;
use crate::core::outcome::CheckError;
use crate::interfaces::SchemaRef;
use crate::interfaces::SchemaVerdict;

// ============================================================================
// SECTION: Synchronous Execution
// ============================================================================

/// Executes a matched synchronous definition.
///
/// # Errors
///
/// Returns [`ExpectError`] when the subject fails the assertion (or passes a
/// negated one), or when the implementation misbehaves.
pub fn execute_sync(
    definition: &SyncAssertionDefinition,
    parsed: &ParsedValues,
    phrase: &str,
    inverted: bool,
) -> Result<(), ExpectError> {
    let subject = subject_of(parsed);
    let verdict = match definition.implementation() {
        SyncImplementation::Schema(schema) => {
            let schema_verdict = match &parsed.subject_verdict {
                Some(cached) => cached.clone(),
                None => check_sync(schema, subject)?,
            };
            translate_verdict(definition.string_form(), subject, &schema_verdict)
        }
        SyncImplementation::Function(check) => match check(&parsed.values) {
            Ok(AssertionOutcome::Pass) => Ok(()),
            Ok(AssertionOutcome::Fail(failure)) => {
                Err(build_failure_error(definition.string_form(), subject, failure))
            }
            Ok(AssertionOutcome::Defer(schema)) => {
                let schema_verdict = check_sync(&schema, subject)?;
                translate_verdict(definition.string_form(), subject, &schema_verdict)
            }
            Err(CheckError::Invalid(issues)) => {
                let schema_verdict = SchemaVerdict::Invalid(issues);
                translate_verdict(definition.string_form(), subject, &schema_verdict)
            }
            Err(CheckError::Broken(reason)) => {
                return Err(ExpectError::Implementation(ImplementationError::Broken {
                    reason,
                }));
            }
        },
    };
    apply_inversion(verdict, subject, phrase, inverted)
}

/// Runs a schema synchronously, surfacing async-only schemas as author
/// defects instead of awaiting or ignoring them.
fn check_sync(schema: &SchemaRef, subject: &Value) -> Result<SchemaVerdict, ExpectError> {
    schema.check(subject).ok_or_else(|| {
        ExpectError::Implementation(ImplementationError::UnexpectedAsync {
            label: schema.label(),
        })
    })
}

// ============================================================================
// SECTION: Asynchronous Execution
// ============================================================================

/// Executes a matched asynchronous definition.
///
/// # Errors
///
/// Returns [`ExpectError`] when the subject fails the assertion (or passes a
/// negated one), or when the implementation misbehaves.
pub async fn execute_async(
    definition: &AsyncAssertionDefinition,
    parsed: &ParsedValues,
    phrase: &str,
    inverted: bool,
) -> Result<(), ExpectError> {
    let subject = subject_of(parsed);
    let verdict = match definition.implementation() {
        AsyncImplementation::Schema(schema) => {
            let schema_verdict = match &parsed.subject_verdict {
                Some(cached) => cached.clone(),
                None => schema.check_async(subject).await,
            };
            translate_verdict(definition.string_form(), subject, &schema_verdict)
        }
        AsyncImplementation::Function(check) => match check.check(&parsed.values).await {
            Ok(AssertionOutcome::Pass) => Ok(()),
            Ok(AssertionOutcome::Fail(failure)) => {
                Err(build_failure_error(definition.string_form(), subject, failure))
            }
            Ok(AssertionOutcome::Defer(schema)) => {
                let schema_verdict = schema.check_async(subject).await;
                translate_verdict(definition.string_form(), subject, &schema_verdict)
            }
            Err(CheckError::Invalid(issues)) => {
                let schema_verdict = SchemaVerdict::Invalid(issues);
                translate_verdict(definition.string_form(), subject, &schema_verdict)
            }
            Err(CheckError::Broken(reason)) => {
                return Err(ExpectError::Implementation(ImplementationError::Broken {
                    reason,
                }));
            }
        },
    };
    apply_inversion(verdict, subject, phrase, inverted)
}

// ============================================================================
// SECTION: Outcome Translation
// ============================================================================

/// Returns the subject value of a parsed match (slot 0 is never a literal).
fn subject_of(parsed: &ParsedValues) -> &Value {
    parsed.values.first().unwrap_or(&Value::Null)
}

/// Renders validator issues into an engine-owned assertion failure.
fn translate_verdict(
    string_form: &str,
    subject: &Value,
    verdict: &SchemaVerdict,
) -> Result<(), AssertionError> {
    match verdict {
        SchemaVerdict::Valid(_) => Ok(()),
        SchemaVerdict::Invalid(_) => Err(AssertionError::new(verdict.describe_issues())
            .with_actual(subject.clone())
            .with_assertion(string_form)),
    }
}

/// Builds an assertion failure from a structured failure record, synthesizing
/// the default message from the definition's string form when absent.
fn build_failure_error(
    string_form: &str,
    subject: &Value,
    failure: AssertionFailure,
) -> AssertionError {
    let message = failure
        .message
        .unwrap_or_else(|| format!("subject {subject} did not satisfy {string_form}"));
    AssertionError {
        message,
        actual: failure.actual.or_else(|| Some(subject.clone())),
        expected: failure.expected,
        diff: failure.diff,
        negated: false,
        assertion: Some(string_form.to_string()),
    }
}

/// Applies negation semantics at the pass/fail boundary.
fn apply_inversion(
    verdict: Result<(), AssertionError>,
    subject: &Value,
    phrase: &str,
    inverted: bool,
) -> Result<(), ExpectError> {
    if !inverted {
        return verdict.map_err(ExpectError::Failure);
    }
    match verdict {
        // A pass under negation is itself the failure.
        Ok(()) => {
            let mut error =
                AssertionError::new(format!("expected {subject} not {phrase}, but it did"))
                    .with_actual(subject.clone());
            error.negated = true;
            Err(ExpectError::Failure(error))
        }
        Err(_) => Ok(()),
    }
}
