#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(s) {
            let value = canjson::Value::from(&json_value);
            if let Ok(out) = canjson::encode(&value) {
                let back: serde_json::Value = serde_json::from_slice(&out)
                    .unwrap_or_else(|e| panic!("encoder produced invalid JSON: {e}\n{}", String::from_utf8_lossy(&out)));
                // canonical output is a fixed point
                let again = canjson::encode(&canjson::Value::from(&back)).expect("re-encode");
                assert_eq!(out, again);
            }

            let html = canjson::Options::default().escape_html(true);
            let _ = canjson::encode_with(&canjson::json::omit_empty_members(&json_value), &html);
        }
    }
});
