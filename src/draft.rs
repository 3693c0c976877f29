//! Entry factory: free constructors and the pre-typed builder.
//!
//! A [`Draft`] carries the presence policy and the binding before a shape
//! is chosen. Flag setters return the draft, so `optional().nullable()` and
//! `nullable().optional()` mean the same thing; each shape method consumes
//! the draft and fixes the chain's type.

use serde_json::Value;

use crate::chain::array::Array;
use crate::chain::boolean::Boolean;
use crate::chain::ident::Id;
use crate::chain::number::Number;
use crate::chain::object::Object;
use crate::chain::text::Text;
use crate::chain::{Bound, Chain, Deferred, Policy};
use crate::tag::TypeTag;

// ============================================================================
// FREE CONSTRUCTORS
// ============================================================================

/// Starts an eager chain over a present value.
///
/// # Examples
///
/// ```
/// use caliper::check;
///
/// assert!(check(42).number().int().result().is_ok());
/// ```
pub fn check(value: impl Into<Value>) -> Draft<Bound> {
    Draft {
        policy: Policy::default(),
        binding: Bound(Some(value.into())),
    }
}

/// Starts an eager chain over a possibly-absent value.
///
/// `None` is the absent input; `Some(Value::Null)` is an explicit null,
/// which is a different thing.
pub fn check_opt(value: Option<Value>) -> Draft<Bound> {
    Draft {
        policy: Policy::default(),
        binding: Bound(value),
    }
}

/// Starts an eager chain over an absent value.
pub fn absent() -> Draft<Bound> {
    check_opt(None)
}

/// Starts a lazy chain; the value arrives at evaluation time.
///
/// # Examples
///
/// ```
/// use caliper::defer;
///
/// let name = defer().string().min(3).max(20);
/// assert!(name.result_for("alice").is_ok());
/// assert!(name.result_for("xy").is_err());
/// ```
pub fn defer() -> Draft<Deferred> {
    Draft {
        policy: Policy::default(),
        binding: Deferred,
    }
}

// ============================================================================
// DRAFT
// ============================================================================

/// Pre-typed builder carrying the presence policy and the binding.
#[derive(Debug, Clone)]
pub struct Draft<B> {
    policy: Policy,
    binding: B,
}

impl<B> Draft<B> {
    /// Accepts absent input.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.policy.optional = true;
        self
    }

    /// Accepts explicit null input.
    #[must_use = "builder methods must be chained or built"]
    pub fn nullable(mut self) -> Self {
        self.policy.nullable = true;
        self
    }

    /// String chain.
    pub fn string(self) -> Chain<Text, B> {
        Chain::new(self.policy, Text, self.binding)
    }

    /// Numeric chain.
    pub fn number(self) -> Chain<Number, B> {
        Chain::new(self.policy, Number, self.binding)
    }

    /// Boolean chain.
    pub fn boolean(self) -> Chain<Boolean, B> {
        Chain::new(self.policy, Boolean, self.binding)
    }

    /// Identifier chain; `checker` is the injected format predicate.
    pub fn id(self, checker: impl Fn(&Value) -> bool + 'static) -> Chain<Id, B> {
        Chain::new(self.policy, Id::new(checker), self.binding)
    }

    /// Array chain.
    pub fn array(self) -> Chain<Array, B> {
        Chain::new(self.policy, Array, self.binding)
    }

    /// Array chain whose elements must match `tag`; shorthand for
    /// `array().each(tag)`.
    pub fn array_of(self, tag: TypeTag) -> Chain<Array, B> {
        self.array().each(tag)
    }

    /// Object chain.
    pub fn object(self) -> Chain<Object, B> {
        Chain::new(self.policy, Object, self.binding)
    }
}

// ============================================================================
// TESTS
// ============================================================================
