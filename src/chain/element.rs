//! Element expectations for array chains.
//!
//! An element sweep needs to know what each member must satisfy. That is an
//! [`ElementSpec`]: a shallow [`TypeTag`] check, a nested chain run through
//! its full pipeline, or a bare probe. Chains plug in through the
//! [`ElementCheck`] trait; their presence policy and binding are ignored
//! because an element always exists.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{Chain, Check, Shape};
use crate::outcome::{Fault, Verdict};
use crate::tag::TypeTag;

// ============================================================================
// ELEMENT CHECK SEAM
// ============================================================================

/// A validator usable in element position.
pub trait ElementCheck: fmt::Debug {
    /// Validates one array element.
    fn check(&self, element: &Value) -> Result<(), Fault>;
}

impl<S, B> ElementCheck for Chain<S, B>
where
    S: Shape + fmt::Debug,
    B: fmt::Debug,
{
    fn check(&self, element: &Value) -> Result<(), Fault> {
        self.admit(element)
    }
}

// ============================================================================
// ELEMENT SPEC
// ============================================================================

/// What each element of an array must satisfy.
///
/// Built from a [`TypeTag`] (shallow check), any chain (deep check), or a
/// probe via [`ElementSpec::probe`].
///
/// # Examples
///
/// ```
/// use caliper::{check, defer, TypeTag};
/// use serde_json::json;
///
/// // Shallow: every element is a string.
/// let tags = check(json!(["a", "b"])).array().each(TypeTag::String);
/// assert!(tags.result().is_ok());
///
/// // Deep: every element runs a full chain.
/// let scores = check(json!([80, 95])).array().each(defer().number().range(0, 100));
/// assert!(scores.result().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ElementSpec(Spec);

#[derive(Debug, Clone)]
enum Spec {
    Tag(TypeTag),
    Nested(Arc<dyn ElementCheck>),
    Probe(Check),
}

impl ElementSpec {
    /// Element spec from a bare probe, with the same return conversions as
    /// `validate`.
    pub fn probe<V>(probe: impl Fn(&Value) -> V + 'static) -> Self
    where
        V: Into<Verdict>,
    {
        ElementSpec(Spec::Probe(Check::probe("each", probe)))
    }

    /// Element spec from any custom element validator.
    pub fn nested(check: impl ElementCheck + 'static) -> Self {
        ElementSpec(Spec::Nested(Arc::new(check)))
    }

    pub(crate) fn check(&self, element: &Value) -> Result<(), Fault> {
        match &self.0 {
            Spec::Tag(tag) => {
                if tag.admits(element) {
                    Ok(())
                } else {
                    Err(Fault::mismatch(*tag, element))
                }
            }
            Spec::Nested(chain) => chain.check(element),
            Spec::Probe(check) => check.run(element),
        }
    }
}

impl From<TypeTag> for ElementSpec {
    fn from(tag: TypeTag) -> Self {
        ElementSpec(Spec::Tag(tag))
    }
}

impl<S, B> From<Chain<S, B>> for ElementSpec
where
    S: Shape + fmt::Debug + 'static,
    B: fmt::Debug + 'static,
{
    fn from(chain: Chain<S, B>) -> Self {
        ElementSpec(Spec::Nested(Arc::new(chain)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
