//! Numeric chains.
//!
//! serde_json numbers are finite by construction, so "is a number" already
//! implies "not NaN". Bounds compare as `f64`.

use serde_json::Value;

use super::{Chain, Check, Shape};
use crate::outcome::Fault;
use crate::tag::TypeTag;

// ============================================================================
// NUMBER SHAPE
// ============================================================================

/// Shape marker for numeric chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Shape for Number {
    fn tag(&self) -> TypeTag {
        TypeTag::Number
    }

    fn admits(&self, value: &Value) -> bool {
        value.is_number()
    }
}

// ============================================================================
// NUMERIC CONSTRAINTS
// ============================================================================

impl<B> Chain<Number, B> {
    /// Requires the value to be at least `min` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: impl Into<f64>) -> Self {
        let min = min.into();
        self.push(Check::rule("min", move |value| {
            let Some(n) = value.as_f64() else { return Ok(()) };
            if n >= min {
                Ok(())
            } else {
                Err(Fault::constraint("min", format!("{n} is below minimum {min}")))
            }
        }))
    }

    /// Requires the value to be at most `max` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: impl Into<f64>) -> Self {
        let max = max.into();
        self.push(Check::rule("max", move |value| {
            let Some(n) = value.as_f64() else { return Ok(()) };
            if n <= max {
                Ok(())
            } else {
                Err(Fault::constraint("max", format!("{n} exceeds maximum {max}")))
            }
        }))
    }

    /// Requires `lo <= value <= hi`, both bounds inclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(self, lo: impl Into<f64>, hi: impl Into<f64>) -> Self {
        let (lo, hi) = (lo.into(), hi.into());
        self.push(Check::rule("range", move |value| {
            let Some(n) = value.as_f64() else { return Ok(()) };
            if n >= lo && n <= hi {
                Ok(())
            } else {
                Err(Fault::constraint("range", format!("{n} is outside {lo}..={hi}")))
            }
        }))
    }

    /// Requires an integral value.
    ///
    /// Integer-typed numbers always pass; a float passes when its
    /// fractional part is zero, so `42.0` counts as integral.
    #[must_use = "builder methods must be chained or built"]
    pub fn int(self) -> Self {
        self.push(Check::rule("int", move |value| {
            let Some(n) = value.as_number() else { return Ok(()) };
            if n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0) {
                Ok(())
            } else {
                Err(Fault::constraint("int", format!("{n} is not an integer")))
            }
        }))
    }
}

// ============================================================================
// TESTS
// ============================================================================
