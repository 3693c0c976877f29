//! String chains.
//!
//! Length bounds count Unicode scalar values, not bytes, so `"héllo"` is
//! five characters long.

use regex::Regex;
use serde_json::Value;

use super::{Chain, Check, Shape};
use crate::outcome::Fault;
use crate::tag::TypeTag;

// ============================================================================
// TEXT SHAPE
// ============================================================================

/// Shape marker for string chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Shape for Text {
    fn tag(&self) -> TypeTag {
        TypeTag::String
    }

    fn admits(&self, value: &Value) -> bool {
        value.is_string()
    }
}

// ============================================================================
// STRING CONSTRAINTS
// ============================================================================

impl<B> Chain<Text, B> {
    /// Requires at least `min` characters (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: usize) -> Self {
        self.push(Check::rule("min", move |value| {
            // Shape check ran first; non-strings never reach a text check.
            let Some(text) = value.as_str() else { return Ok(()) };
            let len = text.chars().count();
            if len >= min {
                Ok(())
            } else {
                Err(Fault::constraint("min", format!("length {len}, minimum {min}")))
            }
        }))
    }

    /// Requires at most `max` characters (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: usize) -> Self {
        self.push(Check::rule("max", move |value| {
            let Some(text) = value.as_str() else { return Ok(()) };
            let len = text.chars().count();
            if len <= max {
                Ok(())
            } else {
                Err(Fault::constraint("max", format!("length {len}, maximum {max}")))
            }
        }))
    }

    /// Requires the string to match `pattern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper::check;
    /// use regex::Regex;
    ///
    /// let slug = Regex::new("^[a-z0-9-]+$").unwrap();
    /// assert!(check("strawberry-pasta").string().matches(slug).result().is_ok());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(self, pattern: Regex) -> Self {
        self.push(Check::rule("matches", move |value| {
            let Some(text) = value.as_str() else { return Ok(()) };
            if pattern.is_match(text) {
                Ok(())
            } else {
                Err(Fault::constraint("matches", format!("value does not match /{pattern}/")))
            }
        }))
    }
}

// ============================================================================
// TESTS
// ============================================================================
