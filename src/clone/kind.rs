// SPDX-License-Identifier: FSL-1.1
use crate::Value;

/// The shape classes the deep clone dispatches on. Classification checks them
/// in declaration order: a value is a sequence before it is a record, and a
/// record before it is a primitive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Ordered collection, cloned element-wise
    Sequence,
    /// Plain string-keyed record, cloned field-wise
    Record,
    /// Immutable value, shared as-is
    Primitive,
    /// Anything that cannot be duplicated: functions, maps, sets
    Unsupported,
}

impl Kind {
    /// true for every class the deep clone can copy
    pub fn is_cloneable(&self) -> bool {
        *self != Kind::Unsupported
    }
}

impl Value {
    /// classify this value for the deep clone
    pub fn kind(&self) -> Kind {
        if self.is_array() {
            Kind::Sequence
        } else if self.is_object() {
            Kind::Record
        } else if self.is_primitive() {
            Kind::Primitive
        } else {
            Kind::Unsupported
        }
    }

    /// true if the value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// true if the value is a plain record; maps and sets are not records
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// true if the value is a number, bigint, boolean, symbol, string, null
    /// or undefined
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Number(_)
                | Value::BigInt(_)
                | Value::Bool(_)
                | Value::Symbol(_)
                | Value::Str(_)
                | Value::Undefined
                | Value::Null
        )
    }
}
