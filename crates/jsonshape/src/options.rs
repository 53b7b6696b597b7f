use crate::case::FieldNameMapping;

/// Per-container policy for sub-encoders that produced no output.
///
/// When a list element, tuple element, or record field encodes to an empty
/// byte sequence, the enclosing encoder either rewrites it to the literal
/// `null` (flag set) or omits the element entirely, emitting no comma for it
/// (flag clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyEncodeAsNull {
    pub list: bool,
    pub tuple: bool,
    pub record: bool,
}

impl Default for EmptyEncodeAsNull {
    fn default() -> Self {
        Self {
            list: false,
            tuple: true,
            record: true,
        }
    }
}

/// Configuration handle threaded through every encode and decode call.
///
/// The handle is immutable and `Copy`; sub-decoders always receive the same
/// handle their parent received, so a single `CodecOptions` governs a whole
/// encode or decode tree.
///
/// # Examples
///
/// ```rust
/// use jsonshape::{CodecOptions, FieldNameMapping};
///
/// let opts = CodecOptions::new()
///     .with_field_name_mapping(FieldNameMapping::PascalCase)
///     .with_skip_missing_properties(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// How external object keys relate to internal field names.
    ///
    /// Internal names are assumed camelCase; the mapping rewrites them to the
    /// external convention on encode and back on decode.
    ///
    /// # Default
    ///
    /// [`FieldNameMapping::Default`] (keys used verbatim)
    pub field_name_mapping: FieldNameMapping,

    /// Whether unknown object fields are scanned and discarded.
    ///
    /// When `false`, encountering any field the record does not recognize
    /// fails the decode.
    ///
    /// # Default
    ///
    /// `true`
    pub skip_missing_properties: bool,

    /// Whether a literal `null` in value position is rewritten to an empty
    /// byte sequence before the sub-decoder runs.
    ///
    /// This lets optional-like types treat absence and `null` uniformly. The
    /// unconsumed tail reported after the rewrite always begins right after
    /// the consumed `null`, never inside the empty rewrite.
    ///
    /// # Default
    ///
    /// `true`
    pub null_decode_as_empty: bool,

    /// Empty-output policy per container kind, see [`EmptyEncodeAsNull`].
    ///
    /// # Default
    ///
    /// `{ list: false, tuple: true, record: true }`
    pub empty_encode_as_null: EmptyEncodeAsNull,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            field_name_mapping: FieldNameMapping::Default,
            skip_missing_properties: true,
            null_decode_as_empty: true,
            empty_encode_as_null: EmptyEncodeAsNull::default(),
        }
    }
}

impl CodecOptions {
    /// Creates the default option bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field-name mapping used for object keys.
    #[must_use]
    pub fn with_field_name_mapping(mut self, mapping: FieldNameMapping) -> Self {
        self.field_name_mapping = mapping;
        self
    }

    /// Sets whether unknown object fields are skipped instead of failing.
    #[must_use]
    pub fn with_skip_missing_properties(mut self, skip: bool) -> Self {
        self.skip_missing_properties = skip;
        self
    }

    /// Sets whether a literal `null` is handed to sub-decoders as empty input.
    #[must_use]
    pub fn with_null_decode_as_empty(mut self, rewrite: bool) -> Self {
        self.null_decode_as_empty = rewrite;
        self
    }

    /// Sets the empty-output policy per container kind.
    #[must_use]
    pub fn with_empty_encode_as_null(mut self, policy: EmptyEncodeAsNull) -> Self {
        self.empty_encode_as_null = policy;
        self
    }
}
