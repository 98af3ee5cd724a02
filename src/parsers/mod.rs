pub mod html;


/// One `<script>` element found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReference {
    /// Position among all script elements of the page, in document order
    pub index: usize,
    /// Text content of the element (empty when the tag has no body)
    pub inline_body: String,
    /// Non-empty `src` attribute, if present
    pub src: Option<String>,
}

impl ScriptReference {
    /// Creates a new script reference, treating an empty `src` as absent
    pub fn new(index: usize, inline_body: String, src: Option<String>) -> Self {
        Self {
            index,
            inline_body,
            src: src.filter(|s| !s.is_empty()),
        }
    }

    /// Whether the element carries script text of its own
    pub fn has_inline(&self) -> bool {
        !self.inline_body.is_empty()
    }

    /// Whether the element points at an external script
    pub fn is_external(&self) -> bool {
        self.src.is_some()
    }

    /// File name used for this script's artifacts
    pub fn file_name(&self) -> String {
        format!("{}.js", self.index)
    }
}

/// Decode raw page bytes for parsing. Invalid UTF-8 is replaced rather than
/// rejected so a badly encoded page still yields its scripts.
pub fn decode_page(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
