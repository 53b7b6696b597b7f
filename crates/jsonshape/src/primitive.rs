//! Booleans and optional values.

use alloc::vec::Vec;

use crate::{
    decode::{Decode, Decoded},
    encode::Encode,
    options::CodecOptions,
};

impl Encode for bool {
    fn encode(&self, buf: &mut Vec<u8>, _opts: &CodecOptions) {
        buf.extend_from_slice(if *self { b"true" } else { b"false" });
    }
}

impl Decode for bool {
    fn decode<'a>(input: &'a [u8], _opts: &CodecOptions) -> Decoded<'a, Self> {
        if input.starts_with(b"true") {
            Decoded::ok(true, &input[4..])
        } else if input.starts_with(b"false") {
            Decoded::ok(false, &input[5..])
        } else {
            Decoded::fail(input)
        }
    }
}

/// `None` emits nothing at all; the enclosing list, tuple, or record then
/// rewrites the empty output to `null` or omits the slot, per
/// `empty_encode_as_null`.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        if let Some(value) = self {
            value.encode(buf, opts);
        }
    }
}

/// Empty input decodes as `None`. This is the slice the null-as-empty
/// rewrite hands over when the value position held `null`, so absence and
/// `null` land on the same representation.
impl<T: Decode> Decode for Option<T> {
    fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
        if input.is_empty() {
            Decoded::ok(None, input)
        } else {
            T::decode(input, opts).map(Some)
        }
    }
}
