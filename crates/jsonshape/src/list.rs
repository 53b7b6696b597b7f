//! List codec and the shared sequence writer.

use alloc::vec::Vec;

use crate::{
    decode::{decode_field, Decode, Decoded},
    encode::{empty_to_null, Encode},
    options::CodecOptions,
    scan::eat_whitespace,
};

/// Writes comma-separated elements between `[` and `]`.
///
/// Owns the empty-element policy shared by list and tuple encoding: each
/// element is encoded into a scratch buffer first, an empty result is either
/// rewritten to `null` or dropped without a comma, and commas only ever
/// separate elements that actually made it into the output.
pub(crate) struct SeqWriter<'b> {
    buf: &'b mut Vec<u8>,
    opts: &'b CodecOptions,
    empty_as_null: bool,
    scratch: Vec<u8>,
    wrote: bool,
}

impl<'b> SeqWriter<'b> {
    pub(crate) fn begin(buf: &'b mut Vec<u8>, opts: &'b CodecOptions, empty_as_null: bool) -> Self {
        buf.push(b'[');
        Self {
            buf,
            opts,
            empty_as_null,
            scratch: Vec::new(),
            wrote: false,
        }
    }

    pub(crate) fn element<T: ?Sized + Encode>(&mut self, value: &T) {
        self.scratch.clear();
        value.encode(&mut self.scratch, self.opts);
        empty_to_null(&mut self.scratch, self.empty_as_null);
        if self.scratch.is_empty() {
            return;
        }
        if self.wrote {
            self.buf.push(b',');
        }
        self.buf.extend_from_slice(&self.scratch);
        self.wrote = true;
    }

    pub(crate) fn end(self) {
        self.buf.push(b']');
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        let mut seq = SeqWriter::begin(buf, opts, opts.empty_encode_as_null.list);
        for value in self {
            seq.element(value);
        }
        seq.end();
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        self.as_slice().encode(buf, opts);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
        // Opening bracket, possibly behind whitespace.
        let mut pos = eat_whitespace(input);
        if input.get(pos) != Some(&b'[') {
            return Decoded::fail(input);
        }
        pos += 1;

        let ws = eat_whitespace(&input[pos..]);
        if input.get(pos + ws) == Some(&b']') {
            return Decoded::ok(Vec::new(), &input[pos + ws + 1..]);
        }

        // Element, then `,` or `]`.
        let mut items = Vec::new();
        loop {
            pos += eat_whitespace(&input[pos..]);
            let element = decode_field::<T>(&input[pos..], opts);
            match element.result {
                Ok(value) => items.push(value),
                Err(_) => return Decoded::fail(element.rest),
            }
            pos = input.len() - element.rest.len();

            pos += eat_whitespace(&input[pos..]);
            match input.get(pos) {
                Some(&b',') => pos += 1,
                Some(&b']') => return Decoded::ok(items, &input[pos + 1..]),
                _ => return Decoded::fail(&input[pos..]),
            }
        }
    }
}
