//! Discriminated-tag encoding: `{"Name":[arg1,arg2]}`.

use alloc::vec::Vec;

use crate::{encode::Encode, options::CodecOptions, string::encode_str};

/// Writes one tag with its payload arguments.
///
/// The tag name is emitted verbatim: field-name mapping applies to record
/// fields, never to tag names. Arguments are encoded with the current
/// options, comma-separated in call order. There is no tag decoder.
///
/// # Examples
///
/// ```rust
/// use jsonshape::{CodecOptions, TagWriter};
///
/// let opts = CodecOptions::default();
/// let mut buf = Vec::new();
/// let mut tag = TagWriter::begin(&mut buf, &opts, "Pair");
/// tag.arg(&1u8).arg(&"x");
/// tag.end();
/// assert_eq!(buf, br#"{"Pair":[1,"x"]}"#);
/// ```
pub struct TagWriter<'b> {
    buf: &'b mut Vec<u8>,
    opts: &'b CodecOptions,
    wrote: bool,
}

impl<'b> TagWriter<'b> {
    pub fn begin(buf: &'b mut Vec<u8>, opts: &'b CodecOptions, name: &str) -> Self {
        buf.push(b'{');
        encode_str(name, buf);
        buf.extend_from_slice(b":[");
        Self {
            buf,
            opts,
            wrote: false,
        }
    }

    pub fn arg<T: ?Sized + Encode>(&mut self, value: &T) -> &mut Self {
        if self.wrote {
            self.buf.push(b',');
        }
        value.encode(self.buf, self.opts);
        self.wrote = true;
        self
    }

    pub fn end(self) {
        self.buf.extend_from_slice(b"]}");
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TagWriter;
    use crate::{case::FieldNameMapping, options::CodecOptions};

    #[test]
    fn no_arguments() {
        let opts = CodecOptions::default();
        let mut buf = Vec::new();
        TagWriter::begin(&mut buf, &opts, "Unit").end();
        assert_eq!(buf, br#"{"Unit":[]}"#);
    }

    #[test]
    fn arguments_in_call_order() {
        let opts = CodecOptions::default();
        let mut buf = Vec::new();
        let mut tag = TagWriter::begin(&mut buf, &opts, "Rgb");
        tag.arg(&255u8).arg(&128u8).arg(&0u8);
        tag.end();
        assert_eq!(buf, br#"{"Rgb":[255,128,0]}"#);
    }

    #[test]
    fn tag_name_escapes_but_never_case_maps() {
        let opts =
            CodecOptions::default().with_field_name_mapping(FieldNameMapping::SnakeCase);
        let mut buf = Vec::new();
        TagWriter::begin(&mut buf, &opts, "SomeTag").end();
        assert_eq!(buf, br#"{"SomeTag":[]}"#);
    }
}
