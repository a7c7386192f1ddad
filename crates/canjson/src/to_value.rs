//! Conversion of native Rust data into the value model.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::Result;
use crate::value::{Map, UnsupportedKind, Value};

/// Resolve `self` into exactly one [`Value`] variant.
pub trait ToValue {
    fn to_value(&self) -> Result<Value>;
}

/// A type-erased member. Encodes as `Value::Dynamic`; an empty `Any` holds
/// `Null`.
#[derive(Default)]
pub struct Any(Option<Box<dyn ToValue + Send + Sync>>);

impl Any {
    pub fn new<T: ToValue + Send + Sync + 'static>(value: T) -> Self {
        Any(Some(Box::new(value)))
    }

    pub fn none() -> Self {
        Any(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl core::fmt::Debug for Any {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            None => f.write_str("Any(None)"),
            Some(_) => f.write_str("Any(..)"),
        }
    }
}

impl ToValue for Any {
    fn to_value(&self) -> Result<Value> {
        let inner = match &self.0 {
            Some(v) => v.to_value()?,
            None => Value::Null,
        };
        Ok(Value::Dynamic(Box::new(inner)))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl ToValue for UnsupportedKind {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Unsupported(self.clone()))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

macro_rules! int_to_value {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Result<Value> {
                Ok(Value::Int(i64::from(*self)))
            }
        })*
    };
}

int_to_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int_to_value {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Result<Value> {
                Ok(match i64::try_from(*self) {
                    Ok(n) => Value::Int(n),
                    Err(_) => Value::Unsupported(UnsupportedKind::IntegerOverflow),
                })
            }
        })*
    };
}

wide_int_to_value!(isize, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Float(crate::number::widen_f32(*self)))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Float(*self))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Str(self.to_string()))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Str(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Str(self.clone()))
    }
}

impl ToValue for () {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Null)
    }
}

// Absent references normalize to Null.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Value> {
        let elems = self.iter().map(ToValue::to_value).collect::<Result<Vec<_>>>()?;
        Ok(Value::Seq(elems))
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Result<Value> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Value> {
        self.as_slice().to_value()
    }
}

fn collect_map<'a, K, V, I>(entries: I) -> Result<Value>
where
    K: AsRef<str> + 'a,
    V: ToValue + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut out = Map::new();
    for (k, v) in entries {
        out.insert(k.as_ref().to_string(), v.to_value()?);
    }
    Ok(Value::Map(out))
}

impl<K: AsRef<str>, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Result<Value> {
        collect_map(self.iter())
    }
}

impl<K: AsRef<str>, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Result<Value> {
        collect_map(self.iter())
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> ToValue for chrono::DateTime<Tz>
where
    Tz::Offset: core::fmt::Display,
{
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Str(self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)))
    }
}
