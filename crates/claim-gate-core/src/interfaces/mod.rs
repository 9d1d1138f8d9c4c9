// crates/claim-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Claim Gate Interfaces
// Description: Backend-agnostic schema validation interface.
// Purpose: Define the contract surface used to validate slot values.
// Dependencies: async-trait, serde, serde_json
// ============================================================================

//! ## Overview
//! The engine never validates values itself: every value slot delegates to an
//! opaque [`Schema`] capability. Implementations may validate synchronously,
//! asynchronously, or both; the engine translates their verdicts into its own
//! error taxonomy, so callers never observe which validation backend is in
//! use. Implementations must be deterministic and fail closed on inputs they
//! cannot interpret.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Validation Verdicts
// ============================================================================

/// Single issue reported by a schema validation failure.
///
/// # Invariants
/// - `path` is empty for root-level issues, otherwise a `/`-separated pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    /// Location of the issue within the validated value.
    pub path: String,
    /// Human-readable issue description.
    pub message: String,
}

impl SchemaIssue {
    /// Creates a root-level issue.
    #[must_use]
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: String::new(),
            message: message.into(),
        }
    }

    /// Creates an issue at a nested path.
    #[must_use]
    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} at {}", self.message, self.path)
        }
    }
}

/// Outcome of validating one value against one schema.
///
/// # Invariants
/// - `Valid` carries the validated (possibly coerced) data.
/// - `Invalid` carries at least one issue.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaVerdict {
    /// The value satisfied the schema; carries the accepted data.
    Valid(Value),
    /// The value did not satisfy the schema.
    Invalid(Vec<SchemaIssue>),
}

impl SchemaVerdict {
    /// Creates an invalid verdict with a single root issue.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(vec![SchemaIssue::root(message)])
    }

    /// Returns true when the verdict accepted the value.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Renders the issue list for diagnostics; empty for valid verdicts.
    #[must_use]
    pub fn describe_issues(&self) -> String {
        match self {
            Self::Valid(_) => String::new(),
            Self::Invalid(issues) => {
                let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
                rendered.join("; ")
            }
        }
    }
}

// ============================================================================
// SECTION: Schema Capability
// ============================================================================

/// Backend-agnostic value validator.
///
/// The engine compiles schema parts into value slots and calls [`Schema::check`]
/// (synchronous family) or [`Schema::check_async`] (asynchronous family) on
/// the live argument. Async-only schemas return `None` from `check`; the
/// synchronous family rejects them at definition construction so argument
/// parsing can never silently succeed where an await would be required.
#[async_trait]
pub trait Schema: Send + Sync {
    /// Human-readable label used in diagnostics and string forms.
    fn label(&self) -> String;

    /// True when the schema can validate without awaiting.
    fn supports_sync(&self) -> bool {
        true
    }

    /// True when the schema accepts any value. Any-accepting schemas compile
    /// to unknown slots and mark the parse as non-exact.
    fn is_any(&self) -> bool {
        false
    }

    /// Validates synchronously. Returns `None` when the schema is async-only.
    fn check(&self, value: &Value) -> Option<SchemaVerdict>;

    /// Validates asynchronously. Defaults to the synchronous path, which is
    /// what lets synchronous schemas and plain values flow through the async
    /// entrypoint unchanged. Async-only schemas must override this; the
    /// default fails closed when they do not.
    async fn check_async(&self, value: &Value) -> SchemaVerdict {
        self.check(value).unwrap_or_else(|| {
            SchemaVerdict::invalid("schema requires async validation but provides no async path")
        })
    }
}

/// Shared handle to a schema capability.
pub type SchemaRef = Arc<dyn Schema>;

// ============================================================================
// SECTION: Value Introspection
// ============================================================================

/// Returns the JSON kind name of a value for diagnostics.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
