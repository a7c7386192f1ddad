use crate::encode::primitives;

/// Append-only buffer for compact JSON text.
pub struct JsonWriter {
    out: String,
    escape_html: bool,
}

impl JsonWriter {
    pub fn new(escape_html: bool) -> Self {
        Self { out: String::new(), escape_html }
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn byte(&mut self, c: char) {
        self.out.push(c);
    }

    pub fn string(&mut self, s: &str) {
        primitives::escape_and_quote_into(&mut self.out, s, self.escape_html);
    }

    /// Write `"key":`, preceded by a comma unless this is the first member.
    pub fn key(&mut self, first: bool, key: &str) {
        if !first {
            self.out.push(',');
        }
        self.string(key);
        self.out.push(':');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
