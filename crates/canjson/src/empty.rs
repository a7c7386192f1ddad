//! Emptiness predicate used by omit-if-empty fields.
//!
//! The rule is one level deep: containers are judged by their own length only,
//! never by their elements. `Dynamic` is the single layer that is looked
//! through.

use crate::options::DynamicEmptiness;
use crate::value::Value;

impl Value {
    /// Emptiness with the default dynamic rule ([`DynamicEmptiness::Unwrap`]).
    pub fn is_empty(&self) -> bool {
        self.is_empty_with(DynamicEmptiness::Unwrap)
    }

    pub fn is_empty_with(&self, dynamic: DynamicEmptiness) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            // -0.0 == 0.0 holds, NaN never equals zero
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Seq(elems) => elems.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Struct(_) => false,
            Value::Dynamic(inner) => match dynamic {
                DynamicEmptiness::Unwrap => inner.is_empty_with(dynamic),
                DynamicEmptiness::AbsentOnly => inner.resolve().is_null(),
            },
            // must reach the encoder so it can fail
            Value::Unsupported(_) => false,
        }
    }
}
