//! Minimal properties-format parser.
//!
//! The authenticator's configuration ships as a Java-style properties file.
//! This parser covers the subset those files actually use: `key=value` and
//! `key: value` lines, `#` and `!` comments, blank lines, and
//! trailing-backslash continuations. Escape sequences beyond the
//! continuation are passed through untouched.

use std::collections::HashMap;

/// Parses properties-format text into a key/value map.
///
/// Later occurrences of a key overwrite earlier ones. Lines without a
/// separator are ignored.
#[must_use]
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut pending = String::new();

    for raw_line in text.lines() {
        let line = raw_line.trim_start();

        if pending.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
        {
            continue;
        }

        if let Some(stem) = line.strip_suffix('\\') {
            pending.push_str(stem);
            continue;
        }

        pending.push_str(line);
        let logical = std::mem::take(&mut pending);

        match split_entry(&logical) {
            Some((key, value)) => {
                map.insert(key, value);
            }
            None => {
                tracing::debug!(line = %logical, "skipping properties line without separator");
            }
        }
    }

    // A dangling continuation still forms a final logical line.
    if !pending.is_empty() {
        if let Some((key, value)) = split_entry(&pending) {
            map.insert(key, value);
        }
    }

    map
}

fn split_entry(line: &str) -> Option<(String, String)> {
    let sep = line.find(|c| c == '=' || c == ':')?;
    let key = line[..sep].trim();
    if key.is_empty() {
        return None;
    }
    let value = line[sep + 1..].trim();
    Some((key.to_owned(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_entries() {
        let props = parse_properties("create.users=true\nheader.email: X-Shib-Mail\n");

        assert_eq!(props.get("create.users").map(String::as_str), Some("true"));
        assert_eq!(props.get("header.email").map(String::as_str), Some("X-Shib-Mail"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let props = parse_properties("# comment\n! also a comment\n\ncreate.users=true\n");

        assert_eq!(props.len(), 1);
        assert!(props.contains_key("create.users"));
    }

    #[test]
    fn joins_continuation_lines() {
        let props = parse_properties("default.roles=confluence-users, \\\n    staff\n");

        assert_eq!(
            props.get("default.roles").map(String::as_str),
            Some("confluence-users, staff")
        );
    }

    #[test]
    fn later_duplicate_keys_win() {
        let props = parse_properties("update.info=false\nupdate.info=true\n");

        assert_eq!(props.get("update.info").map(String::as_str), Some("true"));
    }

    #[test]
    fn lines_without_separator_are_ignored() {
        let props = parse_properties("not a property line\ncreate.users=true\n");

        assert_eq!(props.len(), 1);
    }
}
