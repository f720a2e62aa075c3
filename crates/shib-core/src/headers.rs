//! Inbound request-header multimap.
//!
//! The upstream proxy delivers identity attributes as plain HTTP headers.
//! Header names are matched case-insensitively and with surrounding
//! whitespace ignored; values are kept exactly as received. Values that
//! arrived as raw bytes are carried as Latin-1-decoded strings so that
//! [`crate::text::reinterpret_utf8`] can recover the original byte sequence.

use std::slice::Iter;

/// A multimap of inbound request headers.
///
/// Insertion order is preserved and a name may appear any number of times;
/// lookups compare names case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

fn name_matches(stored: &str, wanted: &str) -> bool {
    stored.trim().eq_ignore_ascii_case(wanted.trim())
}

impl Headers {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header entry, keeping any existing values for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Returns the first value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| name_matches(n, name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns all values for `name` in insertion order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| name_matches(n, name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over all `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, (String, String)> {
        self.entries.iter()
    }

    /// Returns the number of header entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&http::HeaderMap> for Headers {
    /// Converts a host framework header map.
    ///
    /// Header values are decoded byte-for-byte as Latin-1 rather than UTF-8,
    /// so a value the proxy sent as UTF-8 bytes survives losslessly and can
    /// be recovered later by reinterpretation.
    fn from(map: &http::HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map {
            let decoded: String = value.as_bytes().iter().map(|&b| char::from(b)).collect();
            headers.insert(name.as_str(), decoded);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let headers: Headers = [("X-Shib-Mail", "jdoe@example.edu")].into_iter().collect();

        assert_eq!(headers.get("x-shib-mail"), Some("jdoe@example.edu"));
        assert_eq!(headers.get(" X-SHIB-MAIL "), Some("jdoe@example.edu"));
        assert_eq!(headers.get("x-shib-name"), None);
    }

    #[test]
    fn repeated_names_keep_all_values() {
        let mut headers = Headers::new();
        headers.insert("X-Shib-Entitlement", "staff");
        headers.insert("x-shib-entitlement", "alumni");

        assert_eq!(headers.get("X-Shib-Entitlement"), Some("staff"));
        let values: Vec<&str> = headers.all("X-Shib-Entitlement").collect();
        assert_eq!(values, vec!["staff", "alumni"]);
    }

    #[test]
    fn header_map_values_decode_as_latin1() {
        let mut map = http::HeaderMap::new();
        // UTF-8 bytes for "Jürgen"; as Latin-1 chars they read "JÃ¼rgen".
        map.insert(
            "x-shib-fullname",
            http::HeaderValue::from_bytes(b"J\xc3\xbcrgen").unwrap(),
        );

        let headers = Headers::from(&map);
        assert_eq!(headers.get("x-shib-fullname"), Some("J\u{c3}\u{bc}rgen"));
    }
}
