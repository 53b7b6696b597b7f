//! Decoder trait and result model.

use crate::{error::DecodeError, options::CodecOptions};

/// Outcome of a decode attempt: the parsed value or the failure, plus the
/// unconsumed suffix of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<'a, T> {
    pub result: Result<T, DecodeError>,
    /// Unconsumed suffix of the decoder's input. On failure this sits at the
    /// point where progress stopped, so callers can locate the bad region.
    pub rest: &'a [u8],
}

impl<'a, T> Decoded<'a, T> {
    pub(crate) fn ok(value: T, rest: &'a [u8]) -> Self {
        Self {
            result: Ok(value),
            rest,
        }
    }

    pub(crate) fn fail(rest: &'a [u8]) -> Self {
        Self {
            result: Err(DecodeError::TooShort),
            rest,
        }
    }

    /// Applies `f` to the parsed value, leaving failure and `rest` intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<'a, U> {
        Decoded {
            result: self.result.map(f),
            rest: self.rest,
        }
    }
}

/// A type that can be decoded from the head of a JSON byte slice.
///
/// Input must start at the first byte of the value; whitespace between
/// structural tokens belongs to the enclosing scanner. The returned `rest`
/// is always a suffix of `input`.
pub trait Decode: Sized {
    fn decode<'a>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, Self>;
}

/// Decodes one value from the head of `input`.
///
/// # Examples
///
/// ```rust
/// use jsonshape::{from_slice, CodecOptions};
///
/// let d = from_slice::<u32>(b"42", &CodecOptions::default());
/// assert_eq!(d.result, Ok(42));
/// assert!(d.rest.is_empty());
/// ```
pub fn from_slice<'a, T: Decode>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, T> {
    T::decode(input, opts)
}

/// Runs a sub-decoder in field or element position.
///
/// When `null_decode_as_empty` is set and the value is the literal `null`,
/// the sub-decoder sees an empty slice instead, and the returned `rest`
/// begins right after the consumed `null` regardless of what the sub-decoder
/// reported. Composite decoders route every field and element decode through
/// here.
pub fn decode_field<'a, T: Decode>(input: &'a [u8], opts: &CodecOptions) -> Decoded<'a, T> {
    if opts.null_decode_as_empty && input.starts_with(b"null") {
        let inner = T::decode(&[], opts);
        Decoded {
            result: inner.result,
            rest: &input[4..],
        }
    } else {
        T::decode(input, opts)
    }
}
