#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use canjson::{Field, Map, Value};

const MAX_DEPTH: usize = 8;
const MAX_SEQ_SIZE: usize = 20;
const MAX_FIELDS: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Int(u.arbitrary()?),
            3 => {
                let f: f64 = u.arbitrary()?;
                if f.is_finite() { Value::Float(f) } else { Value::Null }
            }
            4 => Value::Str(u.arbitrary()?),
            5 => {
                let size = u.int_in_range(0..=MAX_SEQ_SIZE)?;
                let mut elems = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    elems.push(fv.to_value(u, depth + 1)?);
                }
                Value::Seq(elems)
            }
            6 | 7 => {
                let size = u.int_in_range(0..=MAX_FIELDS)?;
                let mut m = Map::new();
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    m.insert(key, fv.to_value(u, depth + 1)?);
                }
                Value::Map(m)
            }
            8 => {
                let size = u.int_in_range(0..=MAX_FIELDS)?;
                let mut fields = Vec::with_capacity(size);
                for i in 0..size {
                    let omit: bool = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    let value = fv.to_value(u, depth + 1)?;
                    fields.push(Field { name: format!("f{i}"), omit_if_empty: omit, value });
                }
                Value::Struct(fields)
            }
            _ => {
                let fv: FuzzValue = u.arbitrary()?;
                let present: bool = u.arbitrary()?;
                let inner = if present { Some(fv.to_value(u, depth + 1)?) } else { None };
                Value::dynamic(inner)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let out = canjson::encode(&value).expect("finite trees always encode");
            let parsed: serde_json::Value = serde_json::from_slice(&out)
                .unwrap_or_else(|e| panic!("invalid JSON: {e}\n{}", String::from_utf8_lossy(&out)));
            assert_eq!(out, canjson::encode(&value).expect("second encode"));
            // only the root's own omit-if-empty fields may be missing
            if let (Value::Struct(fields), Some(obj)) = (&value, parsed.as_object()) {
                let kept = fields.iter().filter(|f| !(f.omit_if_empty && f.value.is_empty())).count();
                assert_eq!(obj.len(), kept);
            }
        }
    }
});
