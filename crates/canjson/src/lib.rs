#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
mod empty;
pub mod keys;
pub mod encode;
pub mod fields;
pub mod to_value;
mod number;

#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::fields::Record;
pub use crate::options::{DynamicEmptiness, Options};
pub use crate::to_value::{Any, ToValue};
pub use crate::value::{Field, Map, UnsupportedKind, Value};

use std::io::Write;

/// Encode a value tree as compact canonical JSON with default options.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    encode_with(value, &Options::default())
}

pub fn encode_with(value: &Value, options: &Options) -> Result<Vec<u8>> {
    encode_to_string(value, options).map(String::into_bytes)
}

pub fn encode_to_string(value: &Value, options: &Options) -> Result<String> {
    crate::encode::encode_value_to_string(value, options)
}

/// Nothing reaches `writer` unless the whole tree encodes.
pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

pub fn to_vec<T: ToValue + ?Sized>(value: &T) -> Result<Vec<u8>> {
    encode(&value.to_value()?)
}

pub fn to_string<T: ToValue + ?Sized>(value: &T) -> Result<String> {
    to_string_with(value, &Options::default())
}

pub fn to_string_with<T: ToValue + ?Sized>(value: &T, options: &Options) -> Result<String> {
    encode_to_string(&value.to_value()?, options)
}

pub fn to_writer<W: Write, T: ToValue + ?Sized>(writer: W, value: &T, options: &Options) -> Result<()> {
    encode_to_writer(writer, &value.to_value()?, options)
}
