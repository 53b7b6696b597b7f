//! Tuple codec: fixed-arity sequences with a distinct type per position.

use alloc::vec::Vec;

use crate::{
    decode::{decode_field, Decode, Decoded},
    encode::Encode,
    error::DecodeError,
    list::SeqWriter,
    options::CodecOptions,
    scan::eat_whitespace,
};

/// What a tuple builder did with the element at one position.
pub enum ElementStep<'a> {
    /// Element decoded and stored; holds the input remaining after it.
    Consumed(&'a [u8]),
    /// Element recognized by position but its bytes failed to decode; holds
    /// the `rest` at the failure point.
    Malformed(&'a [u8]),
    /// The position is past the tuple's arity.
    TooLong,
}

/// Accumulates tuple elements position by position.
///
/// [`decode_tuple`] drives the builder through each element and then asks it
/// to finish. Builders run their per-position sub-decoder through
/// [`decode_field`] so the null-as-empty rewrite applies, and must return a
/// tail of the `input` they were handed.
pub trait BuildTuple: Sized {
    type Value;

    fn element<'a>(
        &mut self,
        index: usize,
        input: &'a [u8],
        opts: &CodecOptions,
    ) -> ElementStep<'a>;

    fn finish(self, opts: &CodecOptions) -> Result<Self::Value, DecodeError>;
}

/// Decodes `[e0,e1,...]` by stepping `builder` through each position.
///
/// A position past the arity (`TooLong`) fails the decode: the element would
/// have to be fed to a decoder that accepts anything, and no such decoder
/// exists, so the loop stops there and reports `TooShort`.
pub fn decode_tuple<'a, B: BuildTuple>(
    mut builder: B,
    input: &'a [u8],
    opts: &CodecOptions,
) -> Decoded<'a, B::Value> {
    let mut pos = eat_whitespace(input);
    if input.get(pos) != Some(&b'[') {
        return Decoded::fail(input);
    }
    pos += 1;

    let ws = eat_whitespace(&input[pos..]);
    if input.get(pos + ws) == Some(&b']') {
        return finish(builder, &input[pos + ws + 1..], opts);
    }

    let mut index = 0;
    loop {
        pos += eat_whitespace(&input[pos..]);
        match builder.element(index, &input[pos..], opts) {
            ElementStep::Consumed(rest) => pos = input.len() - rest.len(),
            ElementStep::Malformed(rest) => return Decoded::fail(rest),
            ElementStep::TooLong => return Decoded::fail(&input[pos..]),
        }
        index += 1;

        pos += eat_whitespace(&input[pos..]);
        match input.get(pos) {
            Some(&b',') => pos += 1,
            Some(&b']') => return finish(builder, &input[pos + 1..], opts),
            _ => return Decoded::fail(&input[pos..]),
        }
    }
}

fn finish<'a, B: BuildTuple>(
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

macro_rules! tuple_codec {
    ($builder:ident; $(($idx:tt, $T:ident)),+) => {
        impl<$($T: Encode),+> Encode for ($($T,)+) {
            fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
                let mut seq = SeqWriter::begin(buf, opts, opts.empty_encode_as_null.tuple);
                $( seq.element(&self.$idx); )+
                seq.end();
            }
        }

        impl<$($T: Decode),+> Decode for ($($T,)+) {
            fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
                struct $builder<$($T),+>($(Option<$T>,)+);

                impl<$($T: Decode),+> BuildTuple for $builder<$($T),+> {
                    type Value = ($($T,)+);

                    fn element<'a>(
                        &mut self,
                        index: usize,
                        input: &'a [u8],
                        opts: &CodecOptions,
                    ) -> ElementStep<'a> {
                        match index {
                            $(
                                $idx => {
                                    let d = decode_field::<$T>(input, opts);
                                    match d.result {
                                        Ok(value) => {
                                            self.$idx = Some(value);
                                            ElementStep::Consumed(d.rest)
                                        }
                                        Err(_) => ElementStep::Malformed(d.rest),
                                    }
                                }
                            )+
                            _ => ElementStep::TooLong,
                        }
                    }

                    #[allow(non_snake_case)]
                    fn finish(self, _opts: &CodecOptions) -> Result<Self::Value, DecodeError> {
                        match self {
                            $builder($(Some($T),)+) => Ok(($($T,)+)),
                            _ => Err(DecodeError::TooShort),
                        }
                    }
                }

                decode_tuple($builder($(None::<$T>,)+), input, opts)
            }
        }
    };
}

tuple_codec!(PairBuilder; (0, A), (1, B));
tuple_codec!(TripleBuilder; (0, A), (1, B), (2, C));
tuple_codec!(QuadBuilder; (0, A), (1, B), (2, C), (3, D));

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::encode::to_vec;

    #[test]
    fn pair_decodes_with_interior_whitespace() {
        let opts = CodecOptions::default();
        let d = <(u32, String)>::decode(b"[ 123,\n\"apples\" ]", &opts);
        assert_eq!(d.result, Ok((123, String::from("apples"))));
        assert!(d.rest.is_empty());
    }

    #[test]
    fn too_few_elements_fail_at_finish() {
        let opts = CodecOptions::default();
        let d = <(u32, u32)>::decode(b"[1]", &opts);
        assert_eq!(d.result, Err(DecodeError::TooShort));
    }

    #[test]
    fn too_many_elements_fail() {
        let opts = CodecOptions::default();
        let d = <(u32, u32)>::decode(b"[1,2,3]", &opts);
        assert_eq!(d.result, Err(DecodeError::TooShort));
        assert_eq!(d.rest, b"3]");
    }

    #[test]
    fn malformed_element_surfaces_its_position() {
        let opts = CodecOptions::default();
        let d = <(u32, u32)>::decode(b"[1,x]", &opts);
        assert_eq!(d.result, Err(DecodeError::TooShort));
        assert_eq!(d.rest, b"x]");
    }

    #[test]
    fn triple_and_quad_round_trip() {
        let opts = CodecOptions::default();
        let triple = (1u8, String::from("x"), true);
        let bytes = to_vec(&triple, &opts);
        assert_eq!(bytes, br#"[1,"x",true]"#);
        let d = <(u8, String, bool)>::decode(&bytes, &opts);
        assert_eq!(d.result, Ok(triple));

        let quad = (1u8, 2u16, 3u32, 4u64);
        let bytes = to_vec(&quad, &opts);
        let d = <(u8, u16, u32, u64)>::decode(&bytes, &opts);
        assert_eq!(d.result, Ok(quad));
    }

    #[test]
    fn optional_slot_takes_null() {
        let opts = CodecOptions::default();
        let d = <(u32, Option<u32>)>::decode(b"[7,null]", &opts);
        assert_eq!(d.result, Ok((7, None)));
    }

    #[test]
    fn empty_slot_encodes_null_under_the_tuple_policy() {
        // The default tuple policy rewrites empty slots to null, keeping
        // positions aligned.
        let opts = CodecOptions::default();
        let bytes = to_vec(&(None::<u32>, 2u32), &opts);
        assert_eq!(bytes, b"[null,2]");
    }
}
