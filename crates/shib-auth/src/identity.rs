//! Identity normalization.
//!
//! The upstream proxy asserts a raw identity out-of-band and may supply
//! display name and email in configured headers. Normalization is pure: the
//! same inputs always produce the same record, and normalizing an already
//! normalized id changes nothing.

use shib_config::ShibAuthConfig;
use shib_core::text::reinterpret_utf8;
use shib_core::Headers;

use crate::error::{AuthError, AuthResult};

/// The normalized identity for one request.
///
/// Transient — built per request and never persisted; the directory owns
/// durable account state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIdentity {
    /// Asserted identity, lowercased.
    pub id: String,
    /// Display name from the configured header, or the id when the header
    /// is absent or blank.
    pub full_name: String,
    /// Email from the configured header, lowercased; `None` when absent or
    /// blank.
    pub email: Option<String>,
}

/// Normalizes the asserted identity and profile headers for one request.
///
/// ## Errors
///
/// Returns [`AuthError::MissingIdentity`] when no identity was asserted or
/// it is blank; the caller must treat the request as unauthenticated.
pub fn resolve(
    raw_id: Option<&str>,
    headers: &Headers,
    config: &ShibAuthConfig,
) -> AuthResult<NormalizedIdentity> {
    let id = match raw_id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_lowercase(),
        _ => return Err(AuthError::MissingIdentity),
    };

    let full_name = match header_value(headers, &config.full_name_header, config) {
        Some(name) => name,
        None => id.clone(),
    };

    let email = header_value(headers, &config.email_header, config).map(|e| e.to_lowercase());

    tracing::debug!(id = %id, full_name = %full_name, email = ?email, "normalized identity");

    Ok(NormalizedIdentity {
        id,
        full_name,
        email,
    })
}

/// Reads a profile header, applying UTF-8 reinterpretation when configured.
///
/// Blank values count as absent. Reinterpretation applies to the header
/// value; when it fails the raw value is kept.
fn header_value(headers: &Headers, name: &str, config: &ShibAuthConfig) -> Option<String> {
    if name.trim().is_empty() {
        return None;
    }

    let raw = headers.get(name)?;
    let value = if config.convert_to_utf8 {
        reinterpret_utf8(raw).unwrap_or_else(|| raw.to_owned())
    } else {
        raw.to_owned()
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShibAuthConfig {
        ShibAuthConfig::builder()
            .full_name_header("X-Shib-DisplayName")
            .email_header("X-Shib-Mail")
            .build()
    }

    #[test]
    fn lowercases_the_asserted_id() {
        let identity = resolve(Some("JDoe"), &Headers::new(), &config()).unwrap();
        assert_eq!(identity.id, "jdoe");
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = resolve(Some("JDoe"), &Headers::new(), &config()).unwrap();
        let second = resolve(Some(&first.id), &Headers::new(), &config()).unwrap();
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn missing_or_blank_id_fails() {
        assert!(resolve(None, &Headers::new(), &config())
            .unwrap_err()
            .is_missing_identity());
        assert!(resolve(Some("   "), &Headers::new(), &config())
            .unwrap_err()
            .is_missing_identity());
    }

    #[test]
    fn full_name_falls_back_to_id() {
        let identity = resolve(Some("jdoe"), &Headers::new(), &config()).unwrap();
        assert_eq!(identity.full_name, "jdoe");

        let headers: Headers = [("X-Shib-DisplayName", "  ")].into_iter().collect();
        let identity = resolve(Some("jdoe"), &headers, &config()).unwrap();
        assert_eq!(identity.full_name, "jdoe");
    }

    #[test]
    fn profile_headers_are_read_case_insensitively() {
        let headers: Headers = [
            ("x-shib-displayname", "John Doe"),
            ("X-SHIB-MAIL", "JDoe@Example.EDU"),
        ]
        .into_iter()
        .collect();

        let identity = resolve(Some("jdoe"), &headers, &config()).unwrap();
        assert_eq!(identity.full_name, "John Doe");
        assert_eq!(identity.email.as_deref(), Some("jdoe@example.edu"));
    }

    #[test]
    fn email_is_none_when_header_absent() {
        let identity = resolve(Some("jdoe"), &Headers::new(), &config()).unwrap();
        assert_eq!(identity.email, None);
    }

    #[test]
    fn utf8_reinterpretation_applies_to_profile_values() {
        let config = ShibAuthConfig::builder()
            .full_name_header("X-Shib-DisplayName")
            .email_header("X-Shib-Mail")
            .convert_to_utf8(true)
            .build();

        // "Jürgen Müller" as UTF-8 bytes decoded Latin-1 by the host.
        let headers: Headers = [("X-Shib-DisplayName", "J\u{c3}\u{bc}rgen M\u{c3}\u{bc}ller")]
            .into_iter()
            .collect();

        let identity = resolve(Some("jmueller"), &headers, &config).unwrap();
        assert_eq!(identity.full_name, "Jürgen Müller");
    }

    #[test]
    fn failed_reinterpretation_keeps_the_raw_value() {
        let config = ShibAuthConfig::builder()
            .full_name_header("X-Shib-DisplayName")
            .convert_to_utf8(true)
            .build();

        // Plain Latin-1 "José" is not valid UTF-8 byte-wise.
        let headers: Headers = [("X-Shib-DisplayName", "Jos\u{e9}")].into_iter().collect();

        let identity = resolve(Some("jose"), &headers, &config).unwrap();
        assert_eq!(identity.full_name, "Jos\u{e9}");
    }

    #[test]
    fn unconfigured_profile_headers_are_ignored() {
        let config = ShibAuthConfig::default();
        let headers: Headers = [("X-Shib-DisplayName", "John Doe")].into_iter().collect();

        let identity = resolve(Some("jdoe"), &headers, &config).unwrap();
        assert_eq!(identity.full_name, "jdoe");
        assert_eq!(identity.email, None);
    }
}
