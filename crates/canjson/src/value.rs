//! Closed value model consumed by the encoder.

use std::collections::HashMap;

/// Backing store for `Value::Map`. Iteration order is irrelevant; the encoder
/// sorts keys before emission.
pub type Map = HashMap<String, Value>;

/// Kinds of value with no JSON representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedKind {
    Func,
    Chan,
    Complex,
    UnsafePointer,
    /// Non-finite float (NaN, +Inf, -Inf)
    NonFinite,
    /// Unsigned integer above `i64::MAX`
    IntegerOverflow,
    Other(String),
}

impl core::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UnsupportedKind::Func => f.write_str("func"),
            UnsupportedKind::Chan => f.write_str("chan"),
            UnsupportedKind::Complex => f.write_str("complex"),
            UnsupportedKind::UnsafePointer => f.write_str("unsafe pointer"),
            UnsupportedKind::NonFinite => f.write_str("non-finite float"),
            UnsupportedKind::IntegerOverflow => f.write_str("integer out of i64 range"),
            UnsupportedKind::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Map),
    Struct(Vec<Field>),
    Dynamic(Box<Value>),
    Unsupported(UnsupportedKind),
}

/// One member of a `Value::Struct`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub omit_if_empty: bool,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(), omit_if_empty: false, value }
    }

    pub fn omit_empty(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(), omit_if_empty: true, value }
    }

    /// True when the encoder will leave this field out of its object.
    pub fn is_omitted(&self, options: &crate::options::Options) -> bool {
        self.omit_if_empty && self.value.is_empty_with(options.dynamic_emptiness)
    }
}

impl Value {
    /// Wrap a value as type-erased. `None` becomes a dynamic `Null`.
    pub fn dynamic(inner: Option<Value>) -> Value {
        Value::Dynamic(Box::new(inner.unwrap_or(Value::Null)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Strip every `Dynamic` layer.
    pub fn resolve(&self) -> &Value {
        let mut v = self;
        while let Value::Dynamic(inner) = v {
            v = inner;
        }
        v
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elems: Vec<Value>) -> Self {
        Value::Seq(elems)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Vec<Field>> for Value {
    fn from(fields: Vec<Field>) -> Self {
        Value::Struct(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}
