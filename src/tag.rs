//! Type tags and value classification.
//!
//! [`TypeTag`] is the closed set of shapes a chain can declare; it powers
//! mismatch reports and array element dispatch. [`ValueKind`] classifies
//! what an input value actually turned out to be.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// TYPE TAG
// ============================================================================

/// The declared shape of a chain.
///
/// The set is closed: element dispatch matches it exhaustively, so adding a
/// shape is a compile-visible change everywhere it matters.
///
/// # Examples
///
/// ```
/// use caliper::TypeTag;
/// use serde_json::json;
///
/// assert!(TypeTag::String.admits(&json!("pasta")));
/// assert!(!TypeTag::String.admits(&json!(42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Textual value.
    String,
    /// Numeric value.
    Number,
    /// Boolean value.
    Boolean,
    /// Externally-defined opaque identifier.
    Id,
    /// Ordered sequence.
    Array,
    /// Structured key/value object.
    Object,
}

impl TypeTag {
    /// Lowercase name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Id => "id",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }

    /// Shallow structural check for a value against this tag.
    ///
    /// Identifier format checkers are injected per-chain, so in tag position
    /// `Id` can only enforce the textual floor; deep identifier checking in
    /// element position goes through a nested chain instead.
    pub fn admits(self, value: &Value) -> bool {
        match self {
            TypeTag::String => value.is_string(),
            TypeTag::Number => value.is_number(),
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Id => value.is_string(),
            TypeTag::Array => value.is_array(),
            TypeTag::Object => value.is_object(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// What an input value actually was. Carried in mismatch reports next to the
/// expected [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Explicit null.
    Null,
    /// Boolean value.
    Boolean,
    /// Numeric value.
    Number,
    /// Textual value.
    String,
    /// Ordered sequence.
    Array,
    /// Structured key/value object.
    Object,
}

impl ValueKind {
    /// Classifies a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        ValueKind::of(value)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TESTS
// ============================================================================
