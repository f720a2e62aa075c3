//! Text helpers shared by the configuration loader and the role mapper.

/// Splits a delimited list into trimmed, non-empty tokens.
///
/// Commas, semicolons, and ASCII whitespace all delimit. Both the
/// configuration loader and the role mapper use this tokenizer, so
/// `default.roles = a, b;c` and an attribute value of `a b;c` parse
/// identically.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c == ';' || c.is_ascii_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reinterprets a Latin-1-decoded header value as UTF-8.
///
/// Upstream proxies commonly emit UTF-8 header bytes that the host decodes
/// as Latin-1, one char per byte. This re-encodes each char as its byte and
/// validates the sequence as UTF-8. Returns `None` when the input holds
/// chars above U+00FF (so it was never a byte-per-char decode) or when the
/// bytes are not valid UTF-8; callers keep the original value in that case.
#[must_use]
pub fn reinterpret_utf8(value: &str) -> Option<String> {
    let bytes: Option<Vec<u8>> = value.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect();
    String::from_utf8(bytes?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_delimiter() {
        assert_eq!(
            split_list("confluence-users, staff;alumni editors"),
            vec!["confluence-users", "staff", "alumni", "editors"]
        );
    }

    #[test]
    fn drops_empty_tokens() {
        assert_eq!(split_list(" ,; staff ,, "), vec!["staff"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" ;,; ").is_empty());
    }

    #[test]
    fn reinterprets_mojibake_as_utf8() {
        // "Jürgen" sent as UTF-8 bytes and decoded as Latin-1.
        assert_eq!(reinterpret_utf8("J\u{c3}\u{bc}rgen").as_deref(), Some("Jürgen"));
    }

    #[test]
    fn plain_ascii_is_unchanged() {
        assert_eq!(reinterpret_utf8("jdoe").as_deref(), Some("jdoe"));
    }

    #[test]
    fn rejects_values_that_were_not_byte_decoded() {
        // Already contains a char above U+00FF: not a Latin-1 decode.
        assert_eq!(reinterpret_utf8("名前"), None);
    }

    #[test]
    fn rejects_invalid_utf8_sequences() {
        // 0xFF is never valid in UTF-8.
        assert_eq!(reinterpret_utf8("\u{ff}\u{fe}"), None);
    }
}
