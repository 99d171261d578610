// SPDX-License-Identifier: FSL-1.1
use crate::{clone::Kind, error::CloneError, Error, Value};
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};
use tracing::debug;

/// Trait for values that can be copied without sharing any mutable storage
/// with the original.
///
/// Rust's own `HashMap` and `HashSet` deliberately have no implementation, so
/// a stack holding them cannot use the default clone strategy.
pub trait DeepClone: Sized {
    /// recursively copy the value
    fn deep_clone(&self) -> Result<Self, Error>;
}

/// Recursively clones `value`. Arrays and plain records are copied at every
/// depth, primitives are shared, anything else fails with
/// [`CloneError::UnsupportedType`]. There is no cycle detection.
pub fn deep_simple_clone<T: DeepClone>(value: &T) -> Result<T, Error> {
    value.deep_clone()
}

/// Clones a sequence element by element
pub fn clone_array<T: DeepClone>(items: &[T]) -> Result<Vec<T>, Error> {
    items.iter().map(DeepClone::deep_clone).collect()
}

/// Clones a plain record field by field
pub fn clone_object<T: DeepClone>(
    fields: &BTreeMap<String, T>,
) -> Result<BTreeMap<String, T>, Error> {
    fields
        .iter()
        .map(|(k, v)| v.deep_clone().map(|v| (k.clone(), v)))
        .collect()
}

impl DeepClone for Value {
    fn deep_clone(&self) -> Result<Self, Error> {
        match (self.kind(), self) {
            (Kind::Sequence, Value::Array(a)) => {
                let items = clone_array(a.borrow().as_slice())?;
                Ok(Value::Array(Rc::new(RefCell::new(items))))
            }
            (Kind::Record, Value::Object(o)) => {
                let fields = clone_object(&*o.borrow())?;
                Ok(Value::Object(Rc::new(RefCell::new(fields))))
            }
            (Kind::Primitive, _) => Ok(self.clone()),
            _ => {
                debug!(type_name = self.type_name(), "deep clone rejected value");
                Err(CloneError::UnsupportedType(self.type_name()).into())
            }
        }
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Result<Self, Error> {
        clone_array(self)
    }
}

impl<T: DeepClone> DeepClone for BTreeMap<String, T> {
    fn deep_clone(&self) -> Result<Self, Error> {
        clone_object(self)
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Result<Self, Error> {
        self.as_ref().map(DeepClone::deep_clone).transpose()
    }
}

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone(&self) -> Result<Self, Error> {
        Ok(Box::new(self.as_ref().deep_clone()?))
    }
}

macro_rules! impl_deep_clone_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepClone for $t {
                fn deep_clone(&self) -> Result<Self, Error> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

impl_deep_clone_primitive!(
    (), bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    String, &'static str,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        let arr = Value::array(Vec::<Value>::new());
        let cloned = deep_simple_clone(&arr).unwrap();
        assert_eq!(arr, cloned);
        assert!(!arr.identical(&cloned));
    }

    #[test]
    fn test_nested_arrays() {
        let arr = Value::array([Value::array([1, 2]), Value::array([3, 4])]);
        let cloned = deep_simple_clone(&arr).unwrap();
        assert_eq!(arr, cloned);
        assert!(!arr.identical(&cloned));
        assert!(!arr.at(0).unwrap().identical(&cloned.at(0).unwrap()));
        assert!(!arr.at(1).unwrap().identical(&cloned.at(1).unwrap()));
    }

    #[test]
    fn test_nested_records() {
        let obj = Value::object([("foo", Value::object([("bar", Value::object([("baz", "qux")]))]))]);
        let cloned = deep_simple_clone(&obj).unwrap();
        assert_eq!(obj, cloned);
        let (foo, cloned_foo) = (obj.get("foo").unwrap(), cloned.get("foo").unwrap());
        assert!(!foo.identical(&cloned_foo));
        assert!(!foo.get("bar").unwrap().identical(&cloned_foo.get("bar").unwrap()));
    }

    #[test]
    fn test_primitives_are_shared() {
        let sym = Value::symbol("s");
        assert!(sym.identical(&deep_simple_clone(&sym).unwrap()));
        assert_eq!(Value::BigInt(1), deep_simple_clone(&Value::BigInt(1)).unwrap());
        assert_eq!(Value::Null, deep_simple_clone(&Value::Null).unwrap());
        assert_eq!(Value::Undefined, deep_simple_clone(&Value::Undefined).unwrap());
    }

    #[test]
    fn test_unsupported_is_an_error() {
        let f = Value::function(|_| Value::Undefined);
        assert!(matches!(
            deep_simple_clone(&f),
            Err(Error::Clone(CloneError::UnsupportedType("function")))
        ));
        assert!(matches!(
            deep_simple_clone(&Value::map([(1, "one")])),
            Err(Error::Clone(CloneError::UnsupportedType("map")))
        ));
        assert!(matches!(
            deep_simple_clone(&Value::set([1])),
            Err(Error::Clone(CloneError::UnsupportedType("set")))
        ));
    }

    #[test]
    fn test_nested_unsupported_is_an_error() {
        let obj = Value::object([("foo", Value::set([1, 2, 3]))]);
        assert!(matches!(
            deep_simple_clone(&obj),
            Err(Error::Clone(CloneError::UnsupportedType("set")))
        ));
        let arr = Value::array([Value::from(1), Value::map([("a", 1)])]);
        assert!(matches!(
            deep_simple_clone(&arr),
            Err(Error::Clone(CloneError::UnsupportedType("map")))
        ));
    }

    #[test]
    fn test_native_types() {
        let v: Vec<Option<String>> = vec![Some("a".to_string()), None];
        assert_eq!(v, deep_simple_clone(&v).unwrap());

        let mut m = BTreeMap::new();
        m.insert("k".to_string(), vec![1u8, 2, 3]);
        assert_eq!(m, clone_object(&m).unwrap());

        let b = Box::new(vec![vec![1.5f64]]);
        assert_eq!(b, b.deep_clone().unwrap());
    }
}
