//! Evaluation outcomes and the failure taxonomy.
//!
//! Every failure is data, never a panic: evaluation accessors return
//! `Result<_, Fault>` and the [`Fault`] enum is the whole taxonomy. Nested
//! array-element failures wrap the element's own fault together with its
//! index, so callers can tell "the array is invalid" apart from "element 2
//! is invalid for reason X".

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::tag::{TypeTag, ValueKind};

/// The result of evaluating a chain.
///
/// `Ok(None)` reports an accepted-absent value, `Ok(Some(Value::Null))` an
/// accepted null; any other success carries the original value unchanged.
pub type Outcome = Result<Option<Value>, Fault>;

// ============================================================================
// FAULT
// ============================================================================

/// A validation failure.
///
/// The taxonomy is closed; [`code`](Fault::code) exposes a stable snake_case
/// string per variant for programmatic handling, and the same strings tag
/// the serde representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind")]
pub enum Fault {
    /// A required value was absent.
    #[error("value is required but was absent")]
    #[serde(rename = "required_missing")]
    Missing,

    /// An explicit null arrived on a chain that does not accept null.
    #[error("value must not be null")]
    #[serde(rename = "null_not_allowed")]
    Null,

    /// The value does not match the declared shape.
    #[error("expected {expected}, got {actual}")]
    #[serde(rename = "type_mismatch")]
    Mismatch {
        /// The shape the chain declared.
        expected: TypeTag,
        /// What the value actually was.
        actual: ValueKind,
    },

    /// A named constraint rejected the value.
    #[error("{}", match detail {
        Some(detail) => format!("constraint '{name}' failed: {detail}"),
        None => format!("constraint '{name}' failed"),
    })]
    #[serde(rename = "constraint_failed")]
    Constraint {
        /// Name of the failing constraint (`"min"`, `"or"`, `"validate"`, ...).
        name: &'static str,
        /// Formatted arguments or a probe-supplied message, when available.
        detail: Option<String>,
    },

    /// An array element failed; wraps the element's own fault with its index.
    #[error("element {index} failed: {cause}")]
    #[serde(rename = "each_failed")]
    Element {
        /// Position of the first failing element.
        index: usize,
        /// The element's own failure.
        #[source]
        cause: Box<Fault>,
    },
}

impl Fault {
    /// Mismatch fault for a value that failed a shape check.
    pub fn mismatch(expected: TypeTag, value: &Value) -> Self {
        Fault::Mismatch {
            expected,
            actual: ValueKind::of(value),
        }
    }

    /// Constraint fault with a formatted detail message.
    pub fn constraint(name: &'static str, detail: impl Into<String>) -> Self {
        Fault::Constraint {
            name,
            detail: Some(detail.into()),
        }
    }

    /// Element fault wrapping a nested failure at `index`.
    pub fn element(index: usize, cause: Fault) -> Self {
        Fault::Element {
            index,
            cause: Box::new(cause),
        }
    }

    /// Stable snake_case code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Fault::Missing => "required_missing",
            Fault::Null => "null_not_allowed",
            Fault::Mismatch { .. } => "type_mismatch",
            Fault::Constraint { .. } => "constraint_failed",
            Fault::Element { .. } => "each_failed",
        }
    }

    /// Name of the failing constraint, if this is a constraint fault.
    pub fn constraint_name(&self) -> Option<&'static str> {
        match self {
            Fault::Constraint { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Index of the failing element, if this is an element fault.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            Fault::Element { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Unwraps element wrappers down to the innermost fault.
    ///
    /// Returns `self` when no wrapping is involved.
    pub fn root_cause(&self) -> &Fault {
        match self {
            Fault::Element { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// Checks whether this fault reports a type mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Fault::Mismatch { .. })
    }

    /// Checks whether this fault reports a failed constraint.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Fault::Constraint { .. })
    }

    /// Checks whether this fault wraps an element failure.
    pub fn is_element(&self) -> bool {
        matches!(self, Fault::Element { .. })
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Normalized return of a user probe passed to `validate`.
///
/// Probes may return `bool`, a `Verdict`, or `Result<(), E: Display>`; all
/// three convert into this type, so `true`, `Verdict::Pass` and `Ok(())`
/// mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value is acceptable.
    Pass,
    /// The value is rejected, with no further detail.
    Fail,
    /// The value is rejected with a message.
    Reject(String),
}

impl Verdict {
    /// Converts the verdict into the outcome of a named constraint.
    pub(crate) fn into_outcome(self, name: &'static str) -> Result<(), Fault> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail => Err(Fault::Constraint { name, detail: None }),
            Verdict::Reject(detail) => Err(Fault::constraint(name, detail)),
        }
    }
}

impl From<bool> for Verdict {
    fn from(pass: bool) -> Self {
        if pass { Verdict::Pass } else { Verdict::Fail }
    }
}

impl<E: fmt::Display> From<Result<(), E>> for Verdict {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(error) => Verdict::Reject(error.to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
