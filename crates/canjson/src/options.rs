/// How a `Dynamic` value is judged by the emptiness predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DynamicEmptiness {
    /// Unwrap the dynamic layer and test the payload; a dynamic zero is empty.
    #[default]
    Unwrap,
    /// Only a dynamic value holding nothing (`Null`) is empty.
    AbsentOnly,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Escape `<`, `>`, `&`, U+2028 and U+2029 so output is safe to embed in HTML.
    pub escape_html: bool,
    /// Emptiness rule applied to `Dynamic` fields under omit-if-empty
    pub dynamic_emptiness: DynamicEmptiness,
}

impl Options {
    pub fn escape_html(mut self, on: bool) -> Self {
        self.escape_html = on;
        self
    }

    pub fn dynamic_emptiness(mut self, mode: DynamicEmptiness) -> Self {
        self.dynamic_emptiness = mode;
        self
    }
}
