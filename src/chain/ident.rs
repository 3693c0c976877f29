//! Identifier chains.
//!
//! The identifier format is externally defined: the chain receives a pure
//! predicate at construction and runs it as the shape check, so ULIDs,
//! UUIDs, or any house format plug in without the engine knowing which.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Shape;
use crate::tag::TypeTag;

/// Shape marker for identifier chains; owns the injected format checker.
#[derive(Clone)]
pub struct Id {
    checker: Arc<dyn Fn(&Value) -> bool>,
}

impl Id {
    pub(crate) fn new(checker: impl Fn(&Value) -> bool + 'static) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

impl Shape for Id {
    fn tag(&self) -> TypeTag {
        TypeTag::Id
    }

    fn admits(&self, value: &Value) -> bool {
        (self.checker)(value)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Id").finish_non_exhaustive()
    }
}
