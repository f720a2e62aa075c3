//! Fail-soft configuration loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use shib_core::text::split_list;

use crate::config::ShibAuthConfig;
use crate::error::ConfigError;
use crate::keys;

/// Builds a configuration from raw key/value properties.
///
/// Boolean keys parse non-strictly: any value other than a case-insensitive
/// `true` — including absence — yields `false`. List keys use the same
/// comma/semicolon/whitespace tokenizer as the role mapper. Every key is
/// additionally scanned for the role-mapping prefix; the suffix (lowercased)
/// becomes the attribute-value key and the property value parses as the
/// group list. Duplicate keys cannot reach this function — the properties
/// parser already keeps only the last occurrence.
#[must_use]
pub fn from_properties(props: &HashMap<String, String>) -> ShibAuthConfig {
    let mut config = ShibAuthConfig {
        create_users: bool_prop(props, keys::CREATE_USERS),
        update_info: bool_prop(props, keys::UPDATE_INFO),
        update_roles: bool_prop(props, keys::UPDATE_ROLES),
        convert_to_utf8: bool_prop(props, keys::CONVERT_TO_UTF8),
        ..ShibAuthConfig::default()
    };

    tracing::debug!(
        create_users = config.create_users,
        update_info = config.update_info,
        update_roles = config.update_roles,
        convert_to_utf8 = config.convert_to_utf8,
        "loaded authenticator flags"
    );

    if let Some(roles) = props.get(keys::DEFAULT_ROLES) {
        config.default_roles = split_list(roles);
    }

    if let Some(name) = props.get(keys::FULLNAME_HEADER) {
        config.full_name_header = name.trim().to_owned();
    }

    if let Some(name) = props.get(keys::EMAIL_HEADER) {
        config.email_header = name.trim().to_owned();
    }

    if let Some(names) = props.get(keys::ROLES_ATTRIB_NAMES) {
        config.attrib_header_names = split_list(names)
            .into_iter()
            .map(|n| n.to_lowercase())
            .collect();
    }

    for (key, value) in props {
        let lowered = key.trim().to_lowercase();

        if let Some(attribute_value) = lowered.strip_prefix(keys::ROLES_ATTRIB_VALUE_PREFIX) {
            tracing::debug!(key = %key, "found role mapping declaration");
            config
                .role_mapping
                .insert(attribute_value.to_owned(), split_list(value));
        }
    }

    config
}

/// Loads configuration from a properties file, failing soft.
///
/// On any I/O failure the conservative default configuration is returned
/// together with the error so the caller can surface it; process start is
/// never aborted by configuration trouble.
#[must_use]
pub fn load(path: impl AsRef<Path>) -> (ShibAuthConfig, Option<ConfigError>) {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => (from_properties(&crate::properties::parse_properties(&text)), None),
        Err(source) => {
            let error = ConfigError::io(path.display().to_string(), source);
            tracing::warn!(error = %error, "unable to read properties, using defaults");
            (ShibAuthConfig::default(), Some(error))
        }
    }
}

fn bool_prop(props: &HashMap<String, String>, key: &str) -> bool {
    props
        .get(key)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::parse_properties;

    fn props(text: &str) -> HashMap<String, String> {
        parse_properties(text)
    }

    #[test]
    fn bools_parse_non_strictly() {
        let config = from_properties(&props(
            "create.users=TRUE\nupdate.info=yes\nupdate.roles=1\nconvert.to.utf8=true\n",
        ));

        assert!(config.create_users);
        assert!(!config.update_info);
        assert!(!config.update_roles);
        assert!(config.convert_to_utf8);
    }

    #[test]
    fn absent_bools_default_to_false() {
        let config = from_properties(&props(""));

        assert!(!config.create_users);
        assert!(!config.update_info);
        assert!(!config.update_roles);
        assert!(!config.convert_to_utf8);
    }

    #[test]
    fn convert_flag_lands_on_its_own_field() {
        // The flag must not bleed into update.roles.
        let config = from_properties(&props("convert.to.utf8=true\n"));

        assert!(config.convert_to_utf8);
        assert!(!config.update_roles);
    }

    #[test]
    fn default_roles_tokenize_on_any_delimiter() {
        let config = from_properties(&props("default.roles=confluence-users, staff;alumni\n"));

        assert_eq!(config.default_roles, vec!["confluence-users", "staff", "alumni"]);
    }

    #[test]
    fn attrib_header_names_are_lowercased() {
        let config = from_properties(&props(
            "header.dynamicroles.attributenames=X-Shib-Entitlement, X-Shib-Affiliation\n",
        ));

        assert!(config.attrib_header_names.contains("x-shib-entitlement"));
        assert!(config.attrib_header_names.contains("x-shib-affiliation"));
        assert_eq!(config.attrib_header_names.len(), 2);
    }

    #[test]
    fn role_mappings_are_scanned_by_prefix() {
        let config = from_properties(&props(
            "header.dynamicroles.attributeValue.Staff=confluence-users, staff-group\n\
             header.dynamicroles.attributeValue.alumni=alumni-group\n\
             header.dynamicroles.attributenames=x-shib-entitlement\n",
        ));

        assert_eq!(
            config.mapped_groups("staff"),
            Some(&["confluence-users".to_owned(), "staff-group".to_owned()][..])
        );
        assert_eq!(config.mapped_groups("alumni"), Some(&["alumni-group".to_owned()][..]));
        // The attribute-names key itself is not a mapping entry.
        assert_eq!(config.role_mapping.len(), 2);
    }

    #[test]
    fn profile_headers_are_taken_verbatim() {
        let config = from_properties(&props(
            "header.fullname=X-Shib-DisplayName\nheader.email=X-Shib-Mail\n",
        ));

        assert_eq!(config.full_name_header, "X-Shib-DisplayName");
        assert_eq!(config.email_header, "X-Shib-Mail");
    }

    #[test]
    fn unreadable_file_fails_soft() {
        let (config, error) = load("/nonexistent/remoteUserAuthenticator.properties");

        assert!(!config.create_users);
        assert!(config.role_mapping.is_empty());
        assert!(error.is_some());
    }
}
