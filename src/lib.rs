//! # caliper
//!
//! Fluent validation chains for JSON values.
//!
//! A chain declares an expected shape (string, number, boolean, identifier,
//! array, object), accumulates constraints, and evaluates on demand. Three
//! independent axes compose freely: `optional` (absent input is fine),
//! `nullable` (explicit null is fine), and eager vs lazy binding (the value
//! is captured at construction, or supplied at evaluation time).
//!
//! ## Quick start
//!
//! ```
//! use caliper::check;
//!
//! assert!(check("strawberry").string().min(8).result().is_ok());
//! assert!(check("pasta").string().min(8).result().is_err());
//! ```
//!
//! ## Presence policy
//!
//! Absent and null are different things: `check_opt(None)` is absent,
//! `Value::Null` is an explicit null, and each has its own flag.
//!
//! ```
//! use caliper::{absent, check};
//! use serde_json::Value;
//!
//! assert!(absent().string().result().is_err());
//! assert!(absent().optional().string().result().is_ok());
//!
//! assert!(check(Value::Null).string().result().is_err());
//! assert!(check(Value::Null).nullable().string().result().is_ok());
//! ```
//!
//! ## Lazy chains
//!
//! A deferred chain is a reusable template; the eager accessors simply do
//! not exist on it, so "evaluated before a value arrived" is a compile
//! error rather than a runtime state.
//!
//! ```
//! use caliper::defer;
//!
//! let name = defer().string().min(3).max(20);
//! assert!(name.result_for("alice").is_ok());
//! assert!(name.result_for("xy").is_err());
//! ```
//!
//! ## Arrays and element sweeps
//!
//! ```
//! use caliper::{check, defer, TypeTag};
//! use serde_json::json;
//!
//! let tags = check(json!(["rust", "json"])).array_of(TypeTag::String).unique();
//! assert!(tags.result().is_ok());
//!
//! let scores = check(json!([90, 150])).array().each(defer().number().range(0, 100));
//! assert_eq!(scores.result().unwrap_err().element_index(), Some(1));
//! ```
//!
//! ## Outcomes
//!
//! Failures are data: every accessor returns a `Result` whose error is the
//! closed [`Fault`] taxonomy, with stable codes and nested element context.
//! The paired accessors ([`get`](Chain::get) / `get_for`) carry the
//! validated value, so falsy successes like `0` or `""` are never confused
//! with failure.

pub mod chain;
pub mod draft;
pub mod outcome;
pub mod prelude;
pub mod tag;

pub use chain::array::Array;
pub use chain::boolean::Boolean;
pub use chain::element::{ElementCheck, ElementSpec};
pub use chain::ident::Id;
pub use chain::number::Number;
pub use chain::object::Object;
pub use chain::text::Text;
pub use chain::{Bound, Chain, Deferred, IntoCandidates, Policy, Shape};
pub use draft::{Draft, absent, check, check_opt, defer};
pub use outcome::{Fault, Outcome, Verdict};
pub use tag::{TypeTag, ValueKind};
