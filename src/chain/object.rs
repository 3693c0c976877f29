//! Object chains.
//!
//! A JSON object is non-null and non-array by construction, so the shape
//! check is a plain `is_object`. Structural requirements on fields go
//! through `validate`.

use serde_json::Value;

use super::Shape;
use crate::tag::TypeTag;

/// Shape marker for object chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Object;

impl Shape for Object {
    fn tag(&self) -> TypeTag {
        TypeTag::Object
    }

    fn admits(&self, value: &Value) -> bool {
        value.is_object()
    }
}
