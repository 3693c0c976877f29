//! The chain state machine.
//!
//! A [`Chain`] owns a presence [`Policy`], a shape, an ordered constraint
//! pipeline, and a binding state. The binding is a typestate: [`Bound`]
//! chains captured their input at construction and expose the eager
//! accessors, [`Deferred`] chains take the value at evaluation time and
//! expose the supply accessors. Mixing the two is a compile error, not a
//! runtime surprise.
//!
//! One evaluation engine serves every shape: presence gate, null gate,
//! implicit shape check, then user constraints in insertion order with
//! short-circuit on the first failure.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use smallvec::SmallVec;

use crate::outcome::{Fault, Verdict};
use crate::tag::TypeTag;

pub mod array;
pub mod boolean;
pub mod element;
pub mod ident;
pub mod number;
pub mod object;
pub mod text;

// ============================================================================
// POLICY
// ============================================================================

/// Presence policy, fixed at construction time.
///
/// Both flags default to off: a plain chain requires a present, non-null
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policy {
    /// Absent input is acceptable.
    pub optional: bool,
    /// Explicit null input is acceptable.
    pub nullable: bool,
}

// ============================================================================
// BINDING STATE
// ============================================================================

/// Binding of an eager chain: the input was captured at construction,
/// `None` meaning the value was absent.
#[derive(Debug, Clone)]
pub struct Bound(pub(crate) Option<Value>);

/// Binding of a lazy chain: the value arrives at evaluation time, so one
/// deferred chain can validate any number of values.
#[derive(Debug, Clone, Copy)]
pub struct Deferred;

// ============================================================================
// SHAPE
// ============================================================================

/// The declared type of a chain.
///
/// Supplies the tag used in mismatch reports and element dispatch, and the
/// implicit check that runs before any user constraint.
pub trait Shape {
    /// Tag reported on mismatch and used in element dispatch.
    fn tag(&self) -> TypeTag;

    /// Whether a value matches this shape.
    fn admits(&self, value: &Value) -> bool;
}

// ============================================================================
// CHECK
// ============================================================================

type CheckFn = dyn Fn(&Value) -> Result<(), Fault>;

/// One named constraint in a chain's pipeline.
///
/// Checks only ever see present, shape-conforming values: the engine gates
/// absent and null inputs and runs the shape check first.
#[derive(Clone)]
pub(crate) struct Check {
    name: &'static str,
    test: Arc<CheckFn>,
}

impl Check {
    /// Wraps a closure that produces its own fault.
    pub(crate) fn rule(
        name: &'static str,
        test: impl Fn(&Value) -> Result<(), Fault> + 'static,
    ) -> Self {
        Self {
            name,
            test: Arc::new(test),
        }
    }

    /// Wraps a user probe, normalizing its return through [`Verdict`].
    pub(crate) fn probe<V>(name: &'static str, probe: impl Fn(&Value) -> V + 'static) -> Self
    where
        V: Into<Verdict>,
    {
        Self::rule(name, move |value| {
            let verdict: Verdict = probe(value).into();
            verdict.into_outcome(name)
        })
    }

    pub(crate) fn run(&self, value: &Value) -> Result<(), Fault> {
        (self.test)(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// A single validator: policy, shape, and an ordered constraint pipeline.
///
/// `S` is the declared shape; `B` is the binding state ([`Bound`] or
/// [`Deferred`]). Constraint methods consume and return the chain, so
/// chains read as one fluent expression.
///
/// # Examples
///
/// ```
/// use caliper::check;
///
/// assert!(check("strawberry").string().min(8).result().is_ok());
/// assert!(check("pasta").string().min(8).result().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Chain<S, B> {
    policy: Policy,
    shape: S,
    checks: SmallVec<[Check; 4]>,
    binding: B,
}

impl<S, B> Chain<S, B> {
    pub(crate) fn new(policy: Policy, shape: S, binding: B) -> Self {
        Self {
            policy,
            shape,
            checks: SmallVec::new(),
            binding,
        }
    }

    pub(crate) fn push(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Presence policy fixed at construction.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Appends a custom constraint.
    ///
    /// The probe returns anything convertible to a [`Verdict`]: `bool`,
    /// `Verdict` itself, or `Result<(), E: Display>` (the error's message
    /// becomes the fault detail).
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper::check;
    ///
    /// let no_spaces = check("strawberry_pasta")
    ///     .string()
    ///     .validate(|v| v.as_str().is_some_and(|s| !s.contains(' ')));
    /// assert!(no_spaces.result().is_ok());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn validate<V>(self, probe: impl Fn(&Value) -> V + 'static) -> Self
    where
        V: Into<Verdict>,
    {
        let check = Check::probe("validate", probe);
        self.push(check)
    }

    /// Requires the value to equal one of the candidates.
    ///
    /// A singleton behaves identically to a one-element set, and a
    /// `Value::Array` argument is always read as a candidate set. Equality
    /// is serde_json structural equality, so `42` and `42.0` are distinct
    /// candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper::check;
    ///
    /// assert!(check("pasta").string().or(["strawberry", "pasta"]).result().is_ok());
    /// assert!(check("alice").string().or(["strawberry", "pasta"]).result().is_err());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn or(self, candidates: impl IntoCandidates) -> Self {
        let pool = candidates.into_candidates();
        let listed = pool
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.push(Check::rule("or", move |value| {
            if pool.iter().any(|candidate| candidate == value) {
                Ok(())
            } else {
                Err(Fault::constraint("or", format!("value is not one of [{listed}]")))
            }
        }))
    }
}

// ============================================================================
// EVALUATION ENGINE
// ============================================================================

impl<S: Shape, B> Chain<S, B> {
    /// Declared type tag of this chain.
    pub fn tag(&self) -> TypeTag {
        self.shape.tag()
    }

    /// Runs the full pipeline against one input.
    ///
    /// The order is load-bearing: presence gate, null gate, shape check,
    /// then user checks in insertion order. The first failure becomes the
    /// outcome and nothing after it runs.
    fn run(&self, input: Option<&Value>) -> Result<Option<Value>, Fault> {
        let value = match input {
            None => {
                return if self.policy.optional {
                    Ok(None)
                } else {
                    Err(Fault::Missing)
                };
            }
            Some(Value::Null) => {
                return if self.policy.nullable {
                    Ok(Some(Value::Null))
                } else {
                    Err(Fault::Null)
                };
            }
            Some(value) => value,
        };
        self.admit(value)?;
        Ok(Some(value.clone()))
    }

    /// Shape check plus user checks, for a value known to be present.
    ///
    /// Also the element-position pipeline: presence policy does not apply
    /// there because an element always exists.
    pub(crate) fn admit(&self, value: &Value) -> Result<(), Fault> {
        if !self.shape.admits(value) {
            return Err(Fault::mismatch(self.shape.tag(), value));
        }
        for check in &self.checks {
            check.run(value)?;
        }
        Ok(())
    }
}

// ============================================================================
// EAGER ACCESSORS
// ============================================================================

impl<S: Shape> Chain<S, Bound> {
    /// Outcome-only accessor: `Ok(())` on success, the fault otherwise.
    pub fn result(&self) -> Result<(), Fault> {
        self.run(self.binding.0.as_ref()).map(|_| ())
    }

    /// Paired accessor: the validated value on success, the fault otherwise.
    ///
    /// `Ok(None)` reports an accepted-absent value and
    /// `Ok(Some(Value::Null))` an accepted null. Failure is only ever the
    /// `Err` arm, so falsy successes like `0` or `""` are never confused
    /// with it.
    pub fn get(&self) -> Result<Option<Value>, Fault> {
        self.run(self.binding.0.as_ref())
    }
}

// ============================================================================
// LAZY ACCESSORS
// ============================================================================

impl<S: Shape> Chain<S, Deferred> {
    /// General supply accessor; `None` supplies "absent".
    pub fn supply(&self, input: Option<&Value>) -> Result<Option<Value>, Fault> {
        self.run(input)
    }

    /// Outcome-only accessor for a now-available value.
    pub fn result_for(&self, value: impl Into<Value>) -> Result<(), Fault> {
        self.run(Some(&value.into())).map(|_| ())
    }

    /// Paired accessor for a now-available value.
    pub fn get_for(&self, value: impl Into<Value>) -> Result<Option<Value>, Fault> {
        self.run(Some(&value.into()))
    }
}

// ============================================================================
// CANDIDATE SETS
// ============================================================================

/// Conversion into the candidate pool for [`Chain::or`].
pub trait IntoCandidates {
    /// The candidate pool, in declaration order.
    fn into_candidates(self) -> Vec<Value>;
}

/// A `Value::Array` is a set of candidates; any other value is a singleton.
impl IntoCandidates for Value {
    fn into_candidates(self) -> Vec<Value> {
        match self {
            Value::Array(items) => items,
            single => vec![single],
        }
    }
}

impl<T: Into<Value>> IntoCandidates for Vec<T> {
    fn into_candidates(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoCandidates for [T; N] {
    fn into_candidates(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! singleton_candidates {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCandidates for $ty {
                fn into_candidates(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

singleton_candidates!(&str, String, bool, i32, i64, u32, u64, f64);

// ============================================================================
// TESTS
// ============================================================================
