use crate::{
    Result,
    encode::{primitives, writer::JsonWriter},
    error::Error,
    keys::sorted_entries,
    number::format_canonical_f64,
    options::Options,
    value::Value,
};

pub fn encode_value(value: &Value, w: &mut JsonWriter, opts: &Options) -> Result<()> {
    match value {
        Value::Null => w.raw(primitives::format_null()),
        Value::Bool(b) => w.raw(primitives::format_bool(*b)),
        Value::Int(n) => w.raw(&n.to_string()),
        Value::Float(f) => w.raw(&format_canonical_f64(*f)?),
        Value::Str(s) => w.string(s),
        Value::Seq(elems) => {
            // elements are never omitted, empty or not
            w.byte('[');
            for (i, elem) in elems.iter().enumerate() {
                if i > 0 {
                    w.byte(',');
                }
                encode_value(elem, w, opts)?;
            }
            w.byte(']');
        }
        Value::Map(entries) => {
            w.byte('{');
            for (i, (k, v)) in sorted_entries(entries).into_iter().enumerate() {
                w.key(i == 0, k);
                encode_value(v, w, opts)?;
            }
            w.byte('}');
        }
        Value::Struct(fields) => {
            w.byte('{');
            let mut first = true;
            for field in fields {
                if field.is_omitted(opts) {
                    tracing::trace!(field = %field.name, "omitting empty field");
                    continue;
                }
                w.key(first, &field.name);
                first = false;
                encode_value(&field.value, w, opts)?;
            }
            w.byte('}');
        }
        Value::Dynamic(inner) => encode_value(inner, w, opts)?,
        Value::Unsupported(kind) => return Err(Error::unsupported(kind.clone())),
    }
    Ok(())
}
