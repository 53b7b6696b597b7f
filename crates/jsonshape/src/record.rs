//! Record (object) codec.
//!
//! Decoding steps a caller-supplied builder through each object field: the
//! framing, key decoding, case mapping, and unknown-field handling live
//! here, while the builder owns the per-field sub-decoders and the final
//! assembly. Encoding is the mirror image through [`RecordWriter`].

use alloc::{string::String, vec::Vec};

use crate::{
    decode::{Decode, Decoded},
    encode::{empty_to_null, Encode},
    error::DecodeError,
    options::CodecOptions,
    scan::eat_whitespace,
    skip::skip_value,
    string::encode_str,
};

/// What a record builder did with one object field.
pub enum FieldStep<'a> {
    /// Field recognized and its value consumed; holds the input remaining
    /// after the value.
    Consumed(&'a [u8]),
    /// Field recognized but its value failed to decode; holds the `rest` at
    /// the failure point.
    Malformed(&'a [u8]),
    /// The name is not a field of this record.
    Unknown,
}

/// Accumulates record fields by name.
///
/// [`decode_record`] hands the builder each internal (case-mapped) field name
/// together with the bytes of its value, then asks it to finish once the
/// closing brace arrives. Builders run their per-field sub-decoder through
/// [`crate::decode_field`] so the null-as-empty rewrite applies, and must
/// return a tail of the `input` they were handed. A name seen twice simply
/// steps the builder twice; the last value wins.
pub trait BuildRecord: Sized {
    type Value;

    fn field<'a>(&mut self, name: &str, input: &'a [u8], opts: &CodecOptions) -> FieldStep<'a>;

    fn finish(self, opts: &CodecOptions) -> Result<Self::Value, DecodeError>;
}

/// Decodes one JSON object by stepping `builder` through its fields.
///
/// Unknown fields are consumed by the skip-value scanner when
/// `skip_missing_properties` is set and fail the decode otherwise.
pub fn decode_record<'a, B: BuildRecord>(
    mut builder: B,
    input: &'a [u8],
    opts: &CodecOptions,
) -> Decoded<'a, B::Value> {
    let mut pos = eat_whitespace(input);
    if input.get(pos) != Some(&b'{') {
        return Decoded::fail(input);
    }
    pos += 1;

    let ws = eat_whitespace(&input[pos..]);
    if input.get(pos + ws) == Some(&b'}') {
        return finish(builder, &input[pos + ws + 1..], opts);
    }

    loop {
        // Field name, colon, value.
        pos += eat_whitespace(&input[pos..]);
        let key = String::decode(&input[pos..], opts);
        let key = match key.result {
            Ok(name) => {
                pos = input.len() - key.rest.len();
                name
            }
            Err(_) => return Decoded::fail(key.rest),
        };

        pos += eat_whitespace(&input[pos..]);
        if input.get(pos) != Some(&b':') {
            return Decoded::fail(&input[pos..]);
        }
        pos += 1;
        pos += eat_whitespace(&input[pos..]);

        let name = opts.field_name_mapping.to_internal(&key);
        let value = &input[pos..];
        match builder.field(&name, value, opts) {
            FieldStep::Consumed(rest) => pos = input.len() - rest.len(),
            FieldStep::Malformed(rest) => return Decoded::fail(rest),
            FieldStep::Unknown => {
                if !opts.skip_missing_properties {
                    return Decoded::fail(value);
                }
                match skip_value(value) {
                    Some(consumed) => pos += consumed,
                    None => return Decoded::fail(value),
                }
            }
        }

        pos += eat_whitespace(&input[pos..]);
        match input.get(pos) {
            Some(&b',') => pos += 1,
            Some(&b'}') => return finish(builder, &input[pos + 1..], opts),
            _ => return Decoded::fail(&input[pos..]),
        }
    }
}

fn finish<'a, B: BuildRecord>(
    builder: B,
    rest: &'a [u8],
    opts: &CodecOptions,
) -> Decoded<'a, B::Value> {
    match builder.finish(opts) {
        Ok(value) => Decoded::ok(value, rest),
        Err(err) => Decoded {
            result: Err(err),
            rest,
        },
    }
}

/// Writes one object, field by field.
///
/// Each value is encoded into a scratch buffer first. An empty result is
/// rewritten to `null` or dropped (no key, no comma) per the record policy,
/// and field names go through the configured mapping on their way out.
/// Fields appear in call order.
pub struct RecordWriter<'b> {
    buf: &'b mut Vec<u8>,
    opts: &'b CodecOptions,
    scratch: Vec<u8>,
    wrote: bool,
}

impl<'b> RecordWriter<'b> {
    pub fn begin(buf: &'b mut Vec<u8>, opts: &'b CodecOptions) -> Self {
        buf.push(b'{');
        Self {
            buf,
            opts,
            scratch: Vec::new(),
            wrote: false,
        }
    }

    /// Encodes one field. `name` is the internal field name.
    pub fn field<T: ?Sized + Encode>(&mut self, name: &str, value: &T) -> &mut Self {
        self.scratch.clear();
        value.encode(&mut self.scratch, self.opts);
        empty_to_null(&mut self.scratch, self.opts.empty_encode_as_null.record);
        if self.scratch.is_empty() {
            return self;
        }
        if self.wrote {
            self.buf.push(b',');
        }
        let key = self.opts.field_name_mapping.to_external(name);
        encode_str(&key, self.buf);
        self.buf.push(b':');
        self.buf.extend_from_slice(&self.scratch);
        self.wrote = true;
        self
    }

    pub fn end(self) {
        self.buf.push(b'}');
    }
}
