use thiserror::Error;

/// The single failure kind surfaced by every decoder in this crate.
///
/// `TooShort` means "the current decoder cannot make progress on these
/// bytes": a scanner reached an invalid byte, a numeric parse failed, decoded
/// string content was not UTF-8, a required structural character was absent,
/// or an unknown field appeared while unknown fields are not skippable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input does not hold a complete value of the expected shape")]
    TooShort,
}
