//! Schema-driven JSON codec over byte slices.
//!
//! Encoders append RFC 8259 text to a caller-owned buffer and cannot fail.
//! Decoders consume a prefix of a byte slice and return the parsed value
//! together with the unconsumed tail, or [`DecodeError::TooShort`] with the
//! tail at the failure point. Record and tuple decoders are composed from a
//! caller-supplied stepping builder, so the schema lives with the caller and
//! the byte-level state machines live here.
//!
//! ```rust
//! use jsonshape::{from_slice, to_vec, CodecOptions};
//!
//! let opts = CodecOptions::default();
//! assert_eq!(to_vec(&vec![1u8, 2, 3], &opts), b"[1,2,3]");
//!
//! let d = from_slice::<Vec<u8>>(b"[1, 2, 3] tail", &opts);
//! assert_eq!(d.result, Ok(vec![1, 2, 3]));
//! assert_eq!(d.rest, b" tail");
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod case;
mod decode;
mod encode;
mod error;
mod list;
mod number;
mod options;
mod primitive;
mod record;
mod scan;
mod skip;
mod string;
mod tag;
mod tuple;

pub use case::FieldNameMapping;
pub use decode::{decode_field, from_slice, Decode, Decoded};
pub use encode::{to_vec, Encode, EncodeFn};
pub use error::DecodeError;
pub use number::{decode_number, encode_number};
pub use options::{CodecOptions, EmptyEncodeAsNull};
pub use record::{decode_record, BuildRecord, FieldStep, RecordWriter};
pub use tag::TagWriter;
pub use tuple::{decode_tuple, BuildTuple, ElementStep};
