/// One payload part as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Transport-assigned content id, possibly wrapped (`<...>`, `cid:`).
    pub id: String,
    /// MIME headers in transport order; names may repeat.
    pub headers: Vec<(String, String)>,
}

impl Attachment {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), headers: Vec::new() }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
