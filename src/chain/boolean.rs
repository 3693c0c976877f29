//! Boolean chains.

use serde_json::Value;

use super::Shape;
use crate::tag::TypeTag;

/// Shape marker for boolean chains.
///
/// Booleans carry no type-specific constraints; `validate` and `or` from
/// the base chain cover everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Shape for Boolean {
    fn tag(&self) -> TypeTag {
        TypeTag::Boolean
    }

    fn admits(&self, value: &Value) -> bool {
        value.is_boolean()
    }
}
