// crates/claim-gate-schemas/src/compare.rs
// ============================================================================
// Module: Value Comparison
// Description: Decimal-aware ordering, equality, and containment over values.
// Purpose: Back the ordering bound schemas and comparison assertions.
// Dependencies: claim-gate-core, bigdecimal, serde_json, time
// ============================================================================

//! ## Overview
//! Comparison is deterministic and fail-closed. Numeric ordering parses both
//! operands into decimals from their stable string representations so
//! integer and float spellings of the same quantity compare equal. String
//! ordering is temporal: RFC3339 date-times first, date-only values second.
//! Incomparable operand kinds yield no ordering and the callers report them
//! as invalid rather than guessing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::str::FromStr;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use claim_gate_core::Schema;
use claim_gate_core::SchemaVerdict;
use claim_gate_core::value_kind;
use serde_json::Number;
use serde_json::Value;
use time::Date;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Ordering Operators
// ============================================================================

/// Ordering operators supported by bound schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingOp {
    /// Strictly greater than the bound.
    Greater,
    /// Greater than or equal to the bound.
    GreaterOrEqual,
    /// Strictly less than the bound.
    Less,
    /// Less than or equal to the bound.
    LessOrEqual,
}

impl OrderingOp {
    /// Returns the operator phrase used in labels and messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Greater => "greater than",
            Self::GreaterOrEqual => "at least",
            Self::Less => "less than",
            Self::LessOrEqual => "at most",
        }
    }

    /// True when the ordering satisfies the operator.
    #[must_use]
    pub const fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Greater => ordering.is_gt(),
            Self::GreaterOrEqual => ordering.is_ge(),
            Self::Less => ordering.is_lt(),
            Self::LessOrEqual => ordering.is_le(),
        }
    }
}

// ============================================================================
// SECTION: Ordering and Equality
// ============================================================================

/// Orders two values when they are comparable: numbers by decimal value,
/// strings by RFC3339 temporal interpretation.
#[must_use]
pub fn compare_ordered(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(left), Some(right)) = (left.as_number(), right.as_number()) {
        return decimal_cmp(left, right);
    }
    if let (Value::String(left), Value::String(right)) = (left, right) {
        return temporal_cmp(left, right);
    }
    None
}

/// Compares values for equality with decimal-aware numeric handling.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            match (decimal_from_number(left), decimal_from_number(right)) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, a)| {
                    right.get(key).is_some_and(|b| values_equal(a, b))
                })
        }
        _ => left == right,
    }
}

/// Evaluates containment: substring for strings, element subset for arrays.
#[must_use]
pub fn contains_value(haystack: &Value, needle: &Value) -> Option<bool> {
    match (haystack, needle) {
        (Value::String(haystack), Value::String(needle)) => Some(haystack.contains(needle)),
        (Value::Array(haystack), needle) => {
            Some(haystack.iter().any(|item| values_equal(item, needle)))
        }
        _ => None,
    }
}

/// Evaluates membership of a scalar value in an expected array.
#[must_use]
pub fn in_set(value: &Value, expected: &Value) -> Option<bool> {
    let Value::Array(members) = expected else {
        return None;
    };
    match value {
        Value::Array(_) | Value::Object(_) => None,
        _ => Some(members.iter().any(|member| values_equal(member, value))),
    }
}

/// Orders numeric values using decimal-aware comparison.
fn decimal_cmp(left: &Number, right: &Number) -> Option<Ordering> {
    let left = decimal_from_number(left)?;
    let right = decimal_from_number(right)?;
    Some(left.cmp(&right))
}

/// Parses a JSON number into `BigDecimal` with a stable string representation.
fn decimal_from_number(number: &Number) -> Option<BigDecimal> {
    let rendered = number.to_string();
    BigDecimal::from_str(&rendered).ok()
}

/// Compares RFC3339 date-time or date-only strings.
fn temporal_cmp(left: &str, right: &str) -> Option<Ordering> {
    if let (Ok(left), Ok(right)) =
        (OffsetDateTime::parse(left, &Rfc3339), OffsetDateTime::parse(right, &Rfc3339))
    {
        return Some(left.cmp(&right));
    }
    let left = parse_rfc3339_date(left)?;
    let right = parse_rfc3339_date(right)?;
    Some(left.cmp(&right))
}

/// Parses an RFC3339 date-only value (YYYY-MM-DD).
fn parse_rfc3339_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = time::Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

// ============================================================================
// SECTION: Bound Schema
// ============================================================================

/// Schema accepting values ordered relative to a fixed bound.
///
/// # Invariants
/// - Incomparable subject kinds are invalid, never accepted.
#[derive(Debug, Clone)]
pub struct BoundSchema {
    /// Ordering operator.
    op: OrderingOp,
    /// Bound the subject is compared against.
    bound: Value,
}

impl BoundSchema {
    /// Creates a bound schema.
    #[must_use]
    pub const fn new(op: OrderingOp, bound: Value) -> Self {
        Self {
            op,
            bound,
        }
    }

    /// Returns the operator.
    #[must_use]
    pub const fn op(&self) -> OrderingOp {
        self.op
    }

    /// Returns the bound.
    #[must_use]
    pub const fn bound(&self) -> &Value {
        &self.bound
    }
}

#[async_trait]
impl Schema for BoundSchema {
    fn label(&self) -> String {
        format!("{} {}", self.op.describe(), self.bound)
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(match compare_ordered(value, &self.bound) {
            Some(ordering) if self.op.accepts(ordering) => SchemaVerdict::Valid(value.clone()),
            Some(_) => SchemaVerdict::invalid(format!(
                "expected a value {} {} but received {value}",
                self.op.describe(),
                self.bound
            )),
            None => SchemaVerdict::invalid(format!(
                "cannot order {} against {}",
                value_kind(value),
                value_kind(&self.bound)
            )),
        })
    }
}
