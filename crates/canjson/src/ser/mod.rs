//! Serde encoding helpers: any `Serialize` type through the value model.

use serde::Serialize;

use crate::{Result, options::Options, value::Value};

mod value_builder;

/// Build the value tree for a `Serialize` type without encoding it.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value_builder::to_value(value)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    crate::encode::encode_value_to_string(&v, options)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Vec<u8>> {
    to_string(value, options).map(String::into_bytes)
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(mut writer: W, value: &T, options: &Options) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
