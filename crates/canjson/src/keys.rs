//! Deterministic ordering for map keys.

use crate::value::{Map, Value};

/// Entries of `map` ordered ascending by key bytes.
///
/// Byte order of UTF-8 text equals Unicode scalar order, so `str::cmp` is the
/// ordinal comparison the output contract asks for.
pub fn sorted_entries(map: &Map) -> Vec<(&str, &Value)> {
    let mut entries: Vec<(&str, &Value)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
