use core::fmt::Write as _;

fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

fn is_html_sensitive(c: char) -> bool {
    matches!(c, '<' | '>' | '&' | '\u{2028}' | '\u{2029}')
}

/// Append `s` as a quoted JSON string.
pub fn escape_and_quote_into(out: &mut String, s: &str, escape_html: bool) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if is_control(c) || (escape_html && is_html_sensitive(c)) => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub fn escape_and_quote(s: &str, escape_html: bool) -> String {
    let mut out = String::new();
    escape_and_quote_into(&mut out, s, escape_html);
    out
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}
