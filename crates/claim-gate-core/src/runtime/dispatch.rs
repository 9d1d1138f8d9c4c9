// crates/claim-gate-core/src/runtime/dispatch.rs
// ============================================================================
// Module: Assertion Dispatcher
// Description: Candidate shortlisting, tie-breaking, and conjunction chains.
// Purpose: Resolve a call to exactly one definition or a structured error.
// Dependencies: crate::core, crate::runtime::{executor, pool}
// ============================================================================

//! ## Overview
//! Dispatch normalizes the phrase (stripping the `"not "` negation prefix),
//! shortlists candidates through the phrase index, asks each candidate for a
//! structural parse of the full argument list, and selects the unique winner
//! by counting: one exact match wins outright, several exact matches are a
//! genuine ambiguity, and fallback matches only win alone. Selection is
//! independent of iteration order.
//!
//! Conjunction chains are resolved entirely by slot matching: the whole call
//! is always matched first, so a definition that declares `"and"` as a
//! literal slot consumes it. Only when nothing matched are the parameters
//! split at every top-level `"and"` and the clauses dispatched independently
//! against the original subject, each with its own negation handling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::definition::ParsedValues;
use crate::core::errors::AmbiguousAssertionError;
use crate::core::errors::ExpectError;
use crate::core::errors::UnknownAssertionError;
use crate::interfaces::value_kind;
use crate::runtime::executor;
use crate::runtime::pool::AsyncPool;
use crate::runtime::pool::SyncPool;

// ============================================================================
// SECTION: Phrase Preprocessing
// ============================================================================

/// Strips the reserved negation prefix, reporting whether it was present.
#[must_use]
pub fn strip_negation(phrase: &str) -> (&str, bool) {
    phrase.strip_prefix("not ").map_or((phrase, false), |stripped| (stripped, true))
}

/// Splits parameters into conjunction clauses at every top-level `"and"`.
///
/// Each clause is `(phrase, params)`. Returns `None` when no split exists:
/// no `"and"` present, or an `"and"` not followed by a phrase string.
fn split_clauses<'a>(phrase: &'a str, params: &'a [Value]) -> Option<Vec<(&'a str, &'a [Value])>> {
    let mut clauses = Vec::new();
    let mut clause_phrase = phrase;
    let mut clause_start = 0;
    let mut cursor = 0;
    while cursor < params.len() {
        if params[cursor].as_str() == Some("and") {
            let Some(Value::String(next_phrase)) = params.get(cursor + 1) else {
                return None;
            };
            clauses.push((clause_phrase, &params[clause_start .. cursor]));
            clause_phrase = next_phrase.as_str();
            clause_start = cursor + 2;
            cursor += 2;
        } else {
            cursor += 1;
        }
    }
    if clauses.is_empty() {
        return None;
    }
    clauses.push((clause_phrase, &params[clause_start ..]));
    Some(clauses)
}

/// Builds the full argument vector `[subject, phrase, params...]`.
fn call_args(subject: &Value, phrase: &str, params: &[Value]) -> Vec<Value> {
    let mut args = Vec::with_capacity(params.len() + 2);
    args.push(subject.clone());
    args.push(Value::String(phrase.to_string()));
    args.extend(params.iter().cloned());
    args
}

/// Builds the unknown-assertion error for a clause.
fn unknown_error(phrase: &str, subject: &Value, params: &[Value]) -> ExpectError {
    ExpectError::Unknown(UnknownAssertionError {
        phrase: phrase.to_string(),
        subject_kind: value_kind(subject),
        param_kinds: params.iter().map(value_kind).collect(),
    })
}

// ============================================================================
// SECTION: Winner Selection
// ============================================================================

/// Selects the unique winner among structural matches by counting.
///
/// # Errors
///
/// Returns [`AmbiguousAssertionError`] when several candidates tie at the
/// same specificity.
fn choose<T>(
    phrase: &str,
    matches: Vec<(T, ParsedValues)>,
    string_form: impl Fn(&T) -> String,
) -> Result<Option<(T, ParsedValues)>, AmbiguousAssertionError> {
    let exact_count = matches.iter().filter(|(_, parsed)| parsed.exact).count();
    if exact_count > 1 {
        return Err(AmbiguousAssertionError {
            phrase: phrase.to_string(),
            candidates: matches
                .iter()
                .filter(|(_, parsed)| parsed.exact)
                .map(|(candidate, _)| string_form(candidate))
                .collect(),
            exact: true,
        });
    }
    if exact_count == 1 {
        return Ok(matches.into_iter().find(|(_, parsed)| parsed.exact));
    }
    if matches.len() > 1 {
        return Err(AmbiguousAssertionError {
            phrase: phrase.to_string(),
            candidates: matches.iter().map(|(candidate, _)| string_form(candidate)).collect(),
            exact: false,
        });
    }
    Ok(matches.into_iter().next())
}

// ============================================================================
// SECTION: Synchronous Dispatch
// ============================================================================

/// Attempts a whole-call synchronous dispatch for one clause.
///
/// Returns `Ok(true)` when a definition matched and passed, `Ok(false)` when
/// nothing matched structurally.
///
/// # Errors
///
/// Returns [`ExpectError`] for failures, ambiguity, and author defects.
fn try_clause_sync(
    pool: &SyncPool,
    subject: &Value,
    phrase: &str,
    params: &[Value],
) -> Result<bool, ExpectError> {
    let (stripped, inverted) = strip_negation(phrase);
    let args = call_args(subject, stripped, params);
    let matches: Vec<_> = pool
        .candidates(stripped)
        .filter_map(|definition| {
            definition.parse_values(&args).map(|parsed| (definition, parsed))
        })
        .collect();
    match choose(stripped, matches, |definition| definition.string_form().to_string())? {
        Some((definition, parsed)) => {
            executor::execute_sync(definition, &parsed, stripped, inverted)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Dispatches a synchronous call, falling back to conjunction splitting when
/// the whole call matched nothing.
///
/// # Errors
///
/// Returns [`ExpectError`] for unknown calls, ambiguity, author defects, and
/// assertion failures.
pub fn dispatch_sync(
    pool: &SyncPool,
    subject: &Value,
    phrase: &str,
    params: &[Value],
) -> Result<(), ExpectError> {
    if try_clause_sync(pool, subject, phrase, params)? {
        return Ok(());
    }
    if let Some(clauses) = split_clauses(phrase, params) {
        for (clause_phrase, clause_params) in clauses {
            if !try_clause_sync(pool, subject, clause_phrase, clause_params)? {
                let (stripped, _) = strip_negation(clause_phrase);
                return Err(unknown_error(stripped, subject, clause_params));
            }
        }
        return Ok(());
    }
    let (stripped, _) = strip_negation(phrase);
    Err(unknown_error(stripped, subject, params))
}

// ============================================================================
// SECTION: Asynchronous Dispatch
// ============================================================================

/// Attempts a whole-call asynchronous dispatch for one clause.
///
/// Returns `Ok(true)` when a definition matched and passed, `Ok(false)` when
/// nothing matched structurally.
///
/// # Errors
///
/// Returns [`ExpectError`] for failures, ambiguity, and author defects.
async fn try_clause_async(
    pool: &AsyncPool,
    subject: &Value,
    phrase: &str,
    params: &[Value],
) -> Result<bool, ExpectError> {
    let (stripped, inverted) = strip_negation(phrase);
    let args = call_args(subject, stripped, params);
    let mut matches = Vec::new();
    // Candidates parse in pool order; selection below is order independent.
    for definition in pool.candidates(stripped) {
        if let Some(parsed) = definition.parse_values_async(&args).await {
            matches.push((definition, parsed));
        }
    }
    match choose(stripped, matches, |definition| definition.string_form().to_string())? {
        Some((definition, parsed)) => {
            executor::execute_async(definition, &parsed, stripped, inverted).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Dispatches an asynchronous call, falling back to conjunction splitting
/// when the whole call matched nothing.
///
/// # Errors
///
/// Returns [`ExpectError`] for unknown calls, ambiguity, author defects, and
/// assertion failures.
pub async fn dispatch_async(
    pool: &AsyncPool,
    subject: &Value,
    phrase: &str,
    params: &[Value],
) -> Result<(), ExpectError> {
    if try_clause_async(pool, subject, phrase, params).await? {
        return Ok(());
    }
    if let Some(clauses) = split_clauses(phrase, params) {
        for (clause_phrase, clause_params) in clauses {
            if !try_clause_async(pool, subject, clause_phrase, clause_params).await? {
                let (stripped, _) = strip_negation(clause_phrase);
                return Err(unknown_error(stripped, subject, clause_params));
            }
        }
        return Ok(());
    }
    let (stripped, _) = strip_negation(phrase);
    Err(unknown_error(stripped, subject, params))
}
