// crates/claim-gate-assertions/src/ordering.rs
// ============================================================================
// Module: Ordering Assertions
// Description: Built-in comparison assertions over numbers and temporals.
// Purpose: Cover bound, range, and sign checks with decimal-aware ordering.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! Bound assertions defer onto a [`BoundSchema`] built from the parameter, so
//! parsing stays structural and the executor owns failure translation. The
//! range assertion declares the conjunction keyword as a literal slot
//! (`to be within <low> and <high>`), which whole-call matching consumes
//! before any conjunction splitting can see it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use claim_gate_core::AnyDefinition;
use claim_gate_core::AssertionOutcome;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::SchemaRef;
use claim_gate_schemas::BoundSchema;
use claim_gate_schemas::OrderingOp;
use claim_gate_schemas::PredicateSchema;
use claim_gate_schemas::compare_ordered;
use serde_json::json;

use crate::builders::arg;
use crate::builders::function_assertion;
use crate::builders::schema_assertion;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the built-in ordering assertions.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a declaration is malformed; built-in
/// declarations failing is a packaging defect surfaced at gate construction.
pub fn definitions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    Ok(vec![
        bound_assertion(vec!["to be greater than", "to be above"], OrderingOp::Greater)?,
        bound_assertion(vec!["to be at least", "to be gte"], OrderingOp::GreaterOrEqual)?,
        bound_assertion(vec!["to be less than", "to be below"], OrderingOp::Less)?,
        bound_assertion(vec!["to be at most", "to be lte"], OrderingOp::LessOrEqual)?,
        range_assertion()?,
        schema_assertion(
            "to be positive",
            Arc::new(PredicateSchema::new("positive number", |value| {
                compare_ordered(value, &json!(0)).is_some_and(std::cmp::Ordering::is_gt)
            })),
        )?,
        schema_assertion(
            "to be negative",
            Arc::new(PredicateSchema::new("negative number", |value| {
                compare_ordered(value, &json!(0)).is_some_and(std::cmp::Ordering::is_lt)
            })),
        )?,
    ])
}

/// Schema accepting any orderable value (number or temporal string).
fn orderable() -> SchemaRef {
    Arc::new(PredicateSchema::new("orderable value", |value| {
        value.is_number() || value.is_string()
    }))
}

/// Builds a bound assertion deferring onto the parameterized bound schema.
fn bound_assertion(
    aliases: Vec<&str>,
    op: OrderingOp,
) -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![Part::choice(aliases)?, Part::schema(orderable())],
        move |values| {
            let bound = arg(values, 1)?.clone();
            Ok(AssertionOutcome::Defer(Arc::new(BoundSchema::new(op, bound))))
        },
    )
}

/// Builds `to be within <low> and <high>` (inclusive on both ends).
fn range_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![
            Part::phrase("to be within")?,
            Part::schema(orderable()),
            Part::phrase("and")?,
            Part::schema(orderable()),
        ],
        |values| {
            let subject = arg(values, 0)?;
            let low = arg(values, 1)?;
            let high = arg(values, 2)?;
            let above_low =
                compare_ordered(subject, low).is_some_and(std::cmp::Ordering::is_ge);
            let below_high =
                compare_ordered(subject, high).is_some_and(std::cmp::Ordering::is_le);
            Ok(AssertionOutcome::from(above_low && below_high))
        },
    )
}
