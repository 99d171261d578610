// SPDX-License-Identifier: FSL-1.1
use crate::Value;

/// Trait for values with a truthiness. `false`, zero, NaN, the empty string,
/// null, undefined and `None` are falsy, everything else is truthy.
pub trait Truthy {
    /// true if the value is truthy
    fn is_truthy(&self) -> bool;
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.is_truthy(),
            Value::BigInt(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        for v in [
            Value::from(false),
            Value::from(0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::BigInt(0),
            Value::from(""),
            Value::Null,
            Value::Undefined,
        ] {
            assert!(!v.is_truthy(), "{:?}", v);
        }
    }

    #[test]
    fn test_truthy_values() {
        for v in [
            Value::from(true),
            Value::from(-1),
            Value::BigInt(1),
            Value::from("0"),
            Value::array(Vec::<Value>::new()),
            Value::object(Vec::<(String, Value)>::new()),
            Value::symbol(""),
            Value::function(|_| Value::Undefined),
        ] {
            assert!(v.is_truthy(), "{:?}", v);
        }
    }

    #[test]
    fn test_native_values() {
        assert!(1u8.is_truthy());
        assert!(!0i64.is_truthy());
        assert!(!f32::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some("x".to_string()).is_truthy());
    }
}
