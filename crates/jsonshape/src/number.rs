//! Number scanning and the numeric codec.
//!
//! The scanner recognizes this grammar, a subset of RFC 8259 with two
//! permissive extensions (`+` after `e`, uppercase `E`):
//!
//! ```text
//! number := [-]? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?
//! ```
//!
//! A scalar must end at a valid terminator byte (`]`, `,`, `}`, whitespace)
//! or at the end of input; anything else invalidates the whole literal.

use alloc::{
    string::ToString,
    vec::Vec,
};
use core::{fmt::Display, str::FromStr};

use crate::{
    decode::{Decode, Decoded},
    encode::Encode,
    options::CodecOptions,
    scan::is_value_terminator,
};

/// Longest literal the scanner accepts. 21 bytes is enough for any 64-bit
/// float; longer literals are rejected rather than truncated.
const MAX_NUMBER_LEN: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberScan {
    Start,
    Minus,
    Zero,
    Integer,
    FractionStart,
    Fraction,
    ExponentStart,
    ExponentSign,
    Exponent,
}

/// Length of the numeric literal at the head of `input`, or 0 if no valid
/// number starts here.
pub(crate) fn scan_number(input: &[u8]) -> usize {
    use NumberScan::*;

    let mut state = Start;
    for (i, &b) in input.iter().enumerate() {
        state = match (state, b) {
            (Start, b'-') => Minus,
            (Start | Minus, b'0') => Zero,
            (Start | Minus, b'1'..=b'9') => Integer,
            (Integer, b'0'..=b'9') => Integer,
            (Zero | Integer, b'.') => FractionStart,
            (FractionStart | Fraction, b'0'..=b'9') => Fraction,
            (Zero | Integer | Fraction, b'e' | b'E') => ExponentStart,
            (ExponentStart, b'+' | b'-') => ExponentSign,
            (ExponentStart | ExponentSign | Exponent, b'0'..=b'9') => Exponent,
            (Zero | Integer | Fraction | Exponent, _) if is_value_terminator(b) => return i,
            _ => return 0,
        };
        if i + 1 > MAX_NUMBER_LEN {
            return 0;
        }
    }

    // Ran off the end of the slice: accept only a complete literal.
    match state {
        Zero | Integer | Fraction | Exponent => input.len(),
        _ => 0,
    }
}

fn parse<T: FromStr>(bytes: &[u8]) -> Option<T> {
    core::str::from_utf8(bytes).ok().and_then(|s| s.parse().ok())
}

/// Decodes any numeric type the host can parse from decimal text.
///
/// The scanned literal is normalized before parsing: a `+` in the exponent
/// sign position is stripped and `E` is lowered to `e`, for the benefit of
/// parsers that accept neither form. Scan or parse failure is `TooShort`.
pub fn decode_number<'a, T: FromStr>(input: &'a [u8], _opts: &CodecOptions) -> Decoded<'a, T> {
    let len = scan_number(input);
    if len == 0 {
        return Decoded::fail(input);
    }
    let raw = &input[..len];

    let parsed = if raw.contains(&b'+') || raw.contains(&b'E') {
        let mut norm = Vec::with_capacity(raw.len());
        for &b in raw {
            match b {
                b'+' => {}
                b'E' => norm.push(b'e'),
                _ => norm.push(b),
            }
        }
        parse(&norm)
    } else {
        parse(raw)
    };

    match parsed {
        Some(value) => Decoded::ok(value, &input[len..]),
        None => Decoded::fail(input),
    }
}

/// Appends the host's default decimal rendering of `value`.
pub fn encode_number<T: Display>(value: &T, buf: &mut Vec<u8>) {
    buf.extend_from_slice(value.to_string().as_bytes());
}

macro_rules! number_codec {
    ($($ty:ty),* $(,)?) => {$(
        impl Encode for $ty {
            fn encode(&self, buf: &mut Vec<u8>, _opts: &CodecOptions) {
                encode_number(self, buf);
            }
        }

        impl Decode for $ty {
            fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self> {
                decode_number(input, opts)
            }
        }
    )*};
}

number_codec!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
