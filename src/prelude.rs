//! Prelude module for convenient imports.
//!
//! Provides a single `use caliper::prelude::*;` import that brings in the
//! entry constructors, the chain types, and the outcome vocabulary.
//!
//! # Examples
//!
//! ```
//! use caliper::prelude::*;
//!
//! let tags = defer().array_of(TypeTag::String).min(1).unique();
//! assert!(tags.result_for(vec!["a", "b"]).is_ok());
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::draft::{Draft, absent, check, check_opt, defer};

// ============================================================================
// CHAINS AND SHAPES
// ============================================================================

pub use crate::chain::array::Array;
pub use crate::chain::boolean::Boolean;
pub use crate::chain::element::{ElementCheck, ElementSpec};
pub use crate::chain::ident::Id;
pub use crate::chain::number::Number;
pub use crate::chain::object::Object;
pub use crate::chain::text::Text;
pub use crate::chain::{Bound, Chain, Deferred, IntoCandidates, Policy, Shape};

// ============================================================================
// OUTCOMES
// ============================================================================

pub use crate::outcome::{Fault, Outcome, Verdict};
pub use crate::tag::{TypeTag, ValueKind};
