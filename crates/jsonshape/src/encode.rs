//! Encoder trait and composition helpers.

use alloc::vec::Vec;

use crate::options::CodecOptions;

/// A value that appends its JSON form to an output buffer.
///
/// Encoding is total: it cannot fail and never leaves partial output behind.
pub trait Encode {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions);
}

impl<T: ?Sized + Encode> Encode for &T {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        (**self).encode(buf, opts);
    }
}

/// Wraps a closure as a composable encoder, for values that have no `Encode`
/// impl of their own or need one-off treatment.
///
/// # Examples
///
/// ```rust
/// use jsonshape::{to_vec, CodecOptions, EncodeFn};
///
/// let upper = EncodeFn(|buf: &mut Vec<u8>, _opts: &CodecOptions| {
///     buf.extend_from_slice(b"\"HI\"");
/// });
/// assert_eq!(to_vec(&upper, &CodecOptions::default()), b"\"HI\"");
/// ```
pub struct EncodeFn<F>(pub F);

impl<F: Fn(&mut Vec<u8>, &CodecOptions)> Encode for EncodeFn<F> {
    fn encode(&self, buf: &mut Vec<u8>, opts: &CodecOptions) {
        (self.0)(buf, opts);
    }
}

/// Encodes `value` into a fresh buffer.
pub fn to_vec<T: ?Sized + Encode>(value: &T, opts: &CodecOptions) -> Vec<u8> {
    let mut buf = Vec::new();
    value.encode(&mut buf, opts);
    buf
}

/// Rewrites an empty sub-encoder output to the literal `null` when the
/// enclosing container's policy asks for it.
pub(crate) fn empty_to_null(bytes: &mut Vec<u8>, rewrite: bool) {
    if rewrite && bytes.is_empty() {
        bytes.extend_from_slice(b"null");
    }
}
