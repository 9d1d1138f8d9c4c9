// crates/claim-gate-schemas/src/kind.rs
// ============================================================================
// Module: JSON Kind Schemas
// Description: Schemas accepting values of exactly one JSON kind.
// Purpose: Back the elementary type assertions and parameter slots.
// Dependencies: claim-gate-core, serde_json
// ============================================================================

//! ## Overview
//! A kind schema accepts exactly one JSON kind (string, number, integer,
//! boolean, null, array, object). Failure messages follow the
//! `expected <kind> but received <kind>` form relied upon by failure text
//! matching downstream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use claim_gate_core::Schema;
use claim_gate_core::SchemaVerdict;
use claim_gate_core::value_kind;
use serde_json::Value;

// ============================================================================
// SECTION: Kind Model
// ============================================================================

/// JSON kinds a [`TypeSchema`] can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// UTF-8 string.
    String,
    /// Any JSON number.
    Number,
    /// JSON number with no fractional part.
    Integer,
    /// Boolean.
    Boolean,
    /// Null.
    Null,
    /// Array.
    Array,
    /// Object.
    Object,
}

impl JsonKind {
    /// Returns the kind name used in labels and messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Resolves a kind from its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "null" => Some(Self::Null),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// True when the value belongs to this kind.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

// ============================================================================
// SECTION: Type Schema
// ============================================================================

/// Schema accepting values of exactly one JSON kind.
///
/// # Invariants
/// - Verdicts depend only on the value's kind, never its contents.
#[derive(Debug, Clone, Copy)]
pub struct TypeSchema {
    /// Required JSON kind.
    kind: JsonKind,
}

impl TypeSchema {
    /// Creates a schema requiring the given kind.
    #[must_use]
    pub const fn new(kind: JsonKind) -> Self {
        Self {
            kind,
        }
    }

    /// Schema accepting strings.
    #[must_use]
    pub const fn string() -> Self {
        Self::new(JsonKind::String)
    }

    /// Schema accepting numbers.
    #[must_use]
    pub const fn number() -> Self {
        Self::new(JsonKind::Number)
    }

    /// Schema accepting integers.
    #[must_use]
    pub const fn integer() -> Self {
        Self::new(JsonKind::Integer)
    }

    /// Schema accepting booleans.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::new(JsonKind::Boolean)
    }

    /// Schema accepting null.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(JsonKind::Null)
    }

    /// Schema accepting arrays.
    #[must_use]
    pub const fn array() -> Self {
        Self::new(JsonKind::Array)
    }

    /// Schema accepting objects.
    #[must_use]
    pub const fn object() -> Self {
        Self::new(JsonKind::Object)
    }

    /// Returns the required kind.
    #[must_use]
    pub const fn kind(&self) -> JsonKind {
        self.kind
    }
}

#[async_trait]
impl Schema for TypeSchema {
    fn label(&self) -> String {
        self.kind.name().to_string()
    }

    fn check(&self, value: &Value) -> Option<SchemaVerdict> {
        Some(if self.kind.accepts(value) {
            SchemaVerdict::Valid(value.clone())
        } else {
            SchemaVerdict::invalid(format!(
                "expected {} but received {}",
                self.kind.name(),
                value_kind(value)
            ))
        })
    }
}
