//! Bidirectional field-name case mapping.
//!
//! Transforms operate on ASCII bytes only. Case toggling uses the ASCII rule
//! that `A-Z` and `a-z` differ by 32; any other byte passes through, so
//! multi-byte UTF-8 sequences in a name survive every transform untouched.

use alloc::{string::String, vec::Vec};

/// How external object keys relate to internal field names.
///
/// Internal field names are assumed to be camelCase. On encode the mapping
/// rewrites an internal name to the external convention; on decode it
/// rewrites an external key back to the internal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNameMapping {
    /// Keys are the internal names, used verbatim.
    #[default]
    Default,
    /// `fruitCount` externally becomes `fruit_count`.
    SnakeCase,
    /// `fruitCount` externally becomes `FruitCount`.
    PascalCase,
    /// `fruitCount` externally becomes `fruit-count`.
    KebabCase,
    /// Keys are camelCase on both sides.
    CamelCase,
    /// Caller-supplied transform, applied verbatim in both directions.
    Custom(fn(&str) -> String),
}

impl FieldNameMapping {
    /// Maps an internal field name to the external object key.
    ///
    /// # Panics
    ///
    /// Panics if the transform output is not UTF-8. The built-in transforms
    /// only touch ASCII bytes and cannot trip this; it guards `Custom`-style
    /// misuse, which indicates a host bug rather than a data problem.
    #[must_use]
    pub fn to_external(&self, name: &str) -> String {
        match self {
            Self::Default | Self::CamelCase => name.into(),
            Self::SnakeCase => camel_to_delimited(name, b'_'),
            Self::KebabCase => camel_to_delimited(name, b'-'),
            Self::PascalCase => toggle_first(name),
            Self::Custom(f) => f(name),
        }
    }

    /// Maps an external object key back to the internal field name.
    ///
    /// # Panics
    ///
    /// Same condition as [`FieldNameMapping::to_external`].
    #[must_use]
    pub fn to_internal(&self, name: &str) -> String {
        match self {
            Self::Default | Self::CamelCase => name.into(),
            Self::SnakeCase => delimited_to_camel(name, b'_'),
            Self::KebabCase => delimited_to_camel(name, b'-'),
            Self::PascalCase => toggle_first(name),
            Self::Custom(f) => f(name),
        }
    }
}

#[inline]
fn toggle_ascii_case(b: u8) -> u8 {
    if b.is_ascii_alphabetic() {
        b ^ 0x20
    } else {
        b
    }
}

/// camelCase to `fruit_count` / `fruit-count`: a separator plus the lowered
/// byte replaces every uppercase byte.
fn camel_to_delimited(name: &str, sep: u8) -> String {
    let mut out = Vec::with_capacity(name.len() + 4);
    for &b in name.as_bytes() {
        if b.is_ascii_uppercase() {
            out.push(sep);
            out.push(b ^ 0x20);
        } else {
            out.push(b);
        }
    }
    into_name(out)
}

/// `fruit_count` / `fruit-count` to camelCase: separators are dropped and the
/// first byte of each following segment is uppercased.
fn delimited_to_camel(name: &str, sep: u8) -> String {
    let mut out = Vec::with_capacity(name.len());
    let mut raise = false;
    for &b in name.as_bytes() {
        if b == sep {
            raise = true;
            continue;
        }
        out.push(if raise && b.is_ascii_lowercase() {
            b ^ 0x20
        } else {
            b
        });
        raise = false;
    }
    into_name(out)
}

fn toggle_first(name: &str) -> String {
    let mut out = name.as_bytes().to_vec();
    if let Some(b) = out.first_mut() {
        *b = toggle_ascii_case(*b);
    }
    into_name(out)
}

fn into_name(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("case mapping produced invalid UTF-8")
}
