//! Array chains: length, uniqueness, and per-element validation.

use serde_json::Value;

use super::element::ElementSpec;
use super::{Chain, Check, Shape};
use crate::outcome::{Fault, Verdict};
use crate::tag::TypeTag;

// ============================================================================
// ARRAY SHAPE
// ============================================================================

/// Shape marker for array chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Array;

impl Shape for Array {
    fn tag(&self) -> TypeTag {
        TypeTag::Array
    }

    fn admits(&self, value: &Value) -> bool {
        value.is_array()
    }
}

// ============================================================================
// ARRAY CONSTRAINTS
// ============================================================================

impl<B> Chain<Array, B> {
    /// Requires at least `min` elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, min: usize) -> Self {
        self.push(Check::rule("min", move |value| {
            let Some(items) = value.as_array() else { return Ok(()) };
            let len = items.len();
            if len >= min {
                Ok(())
            } else {
                Err(Fault::constraint("min", format!("{len} element(s), minimum {min}")))
            }
        }))
    }

    /// Requires at most `max` elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, max: usize) -> Self {
        self.push(Check::rule("max", move |value| {
            let Some(items) = value.as_array() else { return Ok(()) };
            let len = items.len();
            if len <= max {
                Ok(())
            } else {
                Err(Fault::constraint("max", format!("{len} element(s), maximum {max}")))
            }
        }))
    }

    /// Fails when any two elements are structurally equal.
    ///
    /// Equality is serde_json structural equality, so `42` and `42.0` are
    /// distinct elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn unique(self) -> Self {
        self.push(Check::rule("unique", move |value| {
            let Some(items) = value.as_array() else { return Ok(()) };
            for (i, a) in items.iter().enumerate() {
                for (j, b) in items.iter().enumerate().skip(i + 1) {
                    if a == b {
                        return Err(Fault::constraint(
                            "unique",
                            format!("elements {i} and {j} are equal"),
                        ));
                    }
                }
            }
            Ok(())
        }))
    }

    /// Appends an element sweep: every element must satisfy `spec`.
    ///
    /// Elements are visited in order and the first failing element aborts
    /// the sweep; the outcome wraps that element's fault with its index.
    /// The sweep sits in the pipeline at its call position, so it can be
    /// combined with (and repeated among) other constraints.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper::{check, defer};
    /// use serde_json::json;
    ///
    /// let scores = check(json!([90, 50, 101]))
    ///     .array()
    ///     .each(defer().number().range(0, 100));
    ///
    /// let fault = scores.result().unwrap_err();
    /// assert_eq!(fault.element_index(), Some(2));
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn each(self, spec: impl Into<ElementSpec>) -> Self {
        let spec = spec.into();
        self.push(Check::rule("each", move |value| {
            let Some(items) = value.as_array() else { return Ok(()) };
            for (index, element) in items.iter().enumerate() {
                spec.check(element)
                    .map_err(|cause| Fault::element(index, cause))?;
            }
            Ok(())
        }))
    }

    /// Element sweep with a bare probe, using the same return conversions
    /// as `validate`.
    #[must_use = "builder methods must be chained or built"]
    pub fn each_validate<V>(self, probe: impl Fn(&Value) -> V + 'static) -> Self
    where
        V: Into<Verdict>,
    {
        self.each(ElementSpec::probe(probe))
    }
}

// ============================================================================
// TESTS
// ============================================================================
