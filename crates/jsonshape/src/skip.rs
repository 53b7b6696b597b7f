//! Skip-value scanner: consumes exactly one JSON value in field position.
//!
//! Used by the record decoder to discard the value of an unknown field
//! without running any value decoder. One loop over the bytes with a tagged
//! state; nesting depth lives in the state, not on the call stack, so input
//! depth cannot overflow anything.

/// Scanner state. Array and object interiors carry their own nesting depth.
/// Only the matching bracket kind is structural inside each interior: while
/// scanning for the `]` that closes an array, braces are plain bytes, and
/// vice versa, so the two depths never need to interact. String interiors
/// make both bracket kinds plain bytes, and a backslash shields whatever
/// byte follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    Value,
    InString,
    StringEscape,
    InArray(u32),
    ArrayString(u32),
    ArrayStringEscape(u32),
    InObject(u32),
    ObjectString(u32),
    ObjectStringEscape(u32),
}

/// Consumes one complete value starting at `input[0]`, stopping just before
/// the `,` or `}` that follows it (neither is consumed). Returns the number
/// of bytes consumed, or `None` if the input ends inside the value.
pub(crate) fn skip_value(input: &[u8]) -> Option<usize> {
    use SkipState::*;

    let mut state = Value;
    for (i, &b) in input.iter().enumerate() {
        state = match (state, b) {
            (Value, b',' | b'}') => return Some(i),
            (Value, b'[') => InArray(0),
            (Value, b'{') => InObject(0),
            (Value, b'"') => InString,
            (Value, _) => Value,

            (InString, b'"') => Value,
            (InString, b'\\') => StringEscape,
            (InString, _) => InString,
            (StringEscape, _) => InString,

            (InArray(n), b'"') => ArrayString(n),
            (InArray(0), b']') => Value,
            (InArray(n), b']') => InArray(n - 1),
            (InArray(n), b'[') => InArray(n + 1),
            (InArray(n), _) => InArray(n),
            (ArrayString(n), b'"') => InArray(n),
            (ArrayString(n), b'\\') => ArrayStringEscape(n),
            (ArrayString(n), _) => ArrayString(n),
            (ArrayStringEscape(n), _) => ArrayString(n),

            (InObject(n), b'"') => ObjectString(n),
            (InObject(0), b'}') => Value,
            (InObject(n), b'}') => InObject(n - 1),
            (InObject(n), b'{') => InObject(n + 1),
            (InObject(n), _) => InObject(n),
            (ObjectString(n), b'"') => InObject(n),
            (ObjectString(n), b'\\') => ObjectStringEscape(n),
            (ObjectString(n), _) => ObjectString(n),
            (ObjectStringEscape(n), _) => ObjectString(n),
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::skip_value;

    fn skipped(input: &[u8]) -> &[u8] {
        let n = skip_value(input).expect("value should be skippable");
        &input[..n]
    }

    #[test]
    fn scalars() {
        assert_eq!(skipped(b"123,"), b"123");
        assert_eq!(skipped(b"true}"), b"true");
        assert_eq!(skipped(b"null,"), b"null");
        assert_eq!(skipped(b"1.5e3 ,"), b"1.5e3 ");
    }

    #[test]
    fn strings_with_structural_bytes_inside() {
        assert_eq!(skipped(br#""a}}}}b","#), br#""a}}}}b""#);
        assert_eq!(skipped(br#""a]]]]b"}"#), br#""a]]]]b""#);
        assert_eq!(skipped(br#""a\"b","#), br#""a\"b""#);
        assert_eq!(skipped(br#""a,b","#), br#""a,b""#);
    }

    #[test]
    fn nested_arrays() {
        assert_eq!(skipped(b"[1,[2,[3]],4],"), b"[1,[2,[3]],4]");
        assert_eq!(skipped(b"[],"), b"[]");
    }

    #[test]
    fn nested_objects() {
        assert_eq!(
            skipped(br#"{"a":{"b":{"c":1}}},"#),
            br#"{"a":{"b":{"c":1}}}"#
        );
        assert_eq!(skipped(b"{}}"), b"{}");
    }

    #[test]
    fn mixed_nesting_with_hostile_strings() {
        assert_eq!(
            skipped(br#"{"fieldA":6,"nested":{"nestField":"ab}}}}}cd"}},"#),
            br#"{"fieldA":6,"nested":{"nestField":"ab}}}}}cd"}}"#
        );
        assert_eq!(
            skipped(br#"[{"x":"]"},[["}"]]],"#),
            br#"[{"x":"]"},[["}"]]]"#
        );
    }

    #[test]
    fn objects_inside_arrays_do_not_disturb_bracket_depth() {
        assert_eq!(skipped(b"[{},{}],"), b"[{},{}]");
        assert_eq!(skipped(br#"{"a":[1,2],"b":[3]},"#), br#"{"a":[1,2],"b":[3]}"#);
    }

    #[test]
    fn truncated_values_are_not_skippable() {
        assert!(skip_value(b"[1,2").is_none());
        assert!(skip_value(br#""unterminated"#).is_none());
        assert!(skip_value(b"123").is_none());
        assert!(skip_value(br#"{"a":1"#).is_none());
    }

    #[test]
    fn terminator_is_not_consumed() {
        let input = br#"[1],"x":2"#;
        let n = skip_value(input).unwrap();
        assert_eq!(&input[n..], br#","x":2"#);
    }
}
