//! Encoding pipeline: Value tree to compact canonical JSON text.

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::{Result, options::Options, value::Value};

pub fn encode_value_to_string(value: &Value, options: &Options) -> Result<String> {
    let mut w = writer::JsonWriter::new(options.escape_html);
    if let Err(e) = encoders::encode_value(value, &mut w, options) {
        // partial output is dropped with the writer
        tracing::debug!(error = %e, "encode failed");
        return Err(e);
    }
    Ok(w.into_string())
}
