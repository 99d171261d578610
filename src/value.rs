// SPDX-License-Identifier: FSL-1.1
use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

/// Shared, mutable storage behind array and set values
pub type Array = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable storage behind plain record values
pub type Object = Rc<RefCell<BTreeMap<String, Value>>>;

/// Shared, mutable storage behind map values
pub type Entries = Rc<RefCell<Vec<(Value, Value)>>>;

/// A callable value
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// A dynamically typed value. Arrays, records, maps, sets and functions are
/// reference values: `Clone` shares the underlying storage, `deep_clone`
/// does not.
#[derive(Clone, Default)]
pub enum Value {
    /// The undefined value
    #[default]
    Undefined,
    /// The null value
    Null,
    /// A boolean
    Bool(bool),
    /// A double precision number
    Number(f64),
    /// An arbitrary precision integer, bounded here to 128 bits
    BigInt(i128),
    /// A unique symbol; two symbols are equal only if they are the same symbol
    Symbol(Rc<str>),
    /// An immutable string
    Str(String),
    /// An ordered sequence of values
    Array(Array),
    /// A plain record of string-keyed fields
    Object(Object),
    /// A keyed collection with arbitrary value keys
    Map(Entries),
    /// A collection of unique values
    Set(Array),
    /// A function
    Function(NativeFn),
}

impl Value {
    /// creates an array value from the items
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Rc::new(RefCell::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    /// creates a plain record value from the key-value fields
    pub fn object<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(Rc::new(RefCell::new(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )))
    }

    /// creates a map value, later entries overwrite earlier ones with an equal key
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut map: Vec<(Value, Value)> = Vec::new();
        for (k, v) in entries {
            let (k, v) = (k.into(), v.into());
            match map.iter_mut().find(|(key, _)| *key == k) {
                Some(entry) => entry.1 = v,
                None => map.push((k, v)),
            }
        }
        Value::Map(Rc::new(RefCell::new(map)))
    }

    /// creates a set value, duplicate members are dropped
    pub fn set<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut set: Vec<Value> = Vec::new();
        for m in members {
            let m = m.into();
            if !set.contains(&m) {
                set.push(m);
            }
        }
        Value::Set(Rc::new(RefCell::new(set)))
    }

    /// creates a new, unique symbol with the given description
    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Rc::from(description))
    }

    /// wraps a closure as a function value
    pub fn function(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::Function(Rc::new(f))
    }

    /// the name of the runtime type of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Function(_) => "function",
        }
    }

    /// true if both values are the same value: reference values must share
    /// storage, primitives must be equal
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) | (Value::Set(a), Value::Set(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => self == other,
        }
    }

    /// get the array storage if this is an array
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// get the record storage if this is a plain record
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// get a field of a plain record; the result shares storage with the field
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object()?.borrow().get(key).cloned()
    }

    /// get an element of an array; the result shares storage with the element
    pub fn at(&self, index: usize) -> Option<Value> {
        self.as_array()?.borrow().get(index).cloned()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // NaN equals NaN, zero equals negative zero
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::Set(a), Value::Set(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Function(a), Value::Function(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Symbol(s) => write!(f, "Symbol({})", s),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(a) => f.debug_list().entries(a.borrow().iter()).finish(),
            Value::Object(o) => f.debug_map().entries(o.borrow().iter()).finish(),
            Value::Map(m) => {
                write!(f, "Map ")?;
                f.debug_map()
                    .entries(m.borrow().iter().map(|(k, v)| (k, v)))
                    .finish()
            }
            Value::Set(s) => {
                write!(f, "Set ")?;
                f.debug_set().entries(s.borrow().iter()).finish()
            }
            Value::Function(_) => write!(f, "Function"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(fields)))
    }
}
