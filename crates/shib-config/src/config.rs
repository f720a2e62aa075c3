//! The immutable configuration value.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Validated authenticator configuration.
///
/// Constructed once at process start — from properties via
/// [`crate::loader::load`] or directly via [`ShibAuthConfig::builder`] — and
/// never mutated thereafter. Share it across concurrent requests with an
/// `Arc`; readers need no synchronization.
///
/// All header names and mapping keys are held lowercased; comparisons against
/// inbound data are case-insensitive and whitespace-trimmed throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShibAuthConfig {
    /// Auto-provision accounts for identities the directory doesn't know.
    pub create_users: bool,

    /// Overwrite name/email on existing accounts at login.
    pub update_info: bool,

    /// Re-sync roles on every login rather than only at creation.
    pub update_roles: bool,

    /// Reinterpret header byte values as UTF-8 before use.
    pub convert_to_utf8: bool,

    /// Roles granted to every user whenever a role sync runs.
    pub default_roles: Vec<String>,

    /// Header carrying the display name.
    pub full_name_header: String,

    /// Header carrying the email address.
    pub email_header: String,

    /// Header names (lowercased) scanned for role-bearing attributes.
    /// Empty means dynamic role mapping is disabled.
    pub attrib_header_names: HashSet<String>,

    /// Attribute value (lowercased) to the group names it grants.
    pub role_mapping: HashMap<String, Vec<String>>,
}

impl Default for ShibAuthConfig {
    /// The conservative configuration used when loading fails: no
    /// provisioning, no profile or role sync, no mapping rules.
    fn default() -> Self {
        Self {
            create_users: false,
            update_info: false,
            update_roles: false,
            convert_to_utf8: false,
            default_roles: Vec::new(),
            full_name_header: String::new(),
            email_header: String::new(),
            attrib_header_names: HashSet::new(),
            role_mapping: HashMap::new(),
        }
    }
}

impl ShibAuthConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ShibAuthConfigBuilder {
        ShibAuthConfigBuilder::default()
    }

    /// Returns the group names mapped to an attribute value, if any.
    ///
    /// The lookup key must already be lowercased; the role mapper lowercases
    /// tokens before calling in.
    #[must_use]
    pub fn mapped_groups(&self, attribute_value: &str) -> Option<&[String]> {
        self.role_mapping.get(attribute_value).map(Vec::as_slice)
    }

    /// Returns true when dynamic role mapping is enabled.
    #[must_use]
    pub fn has_dynamic_roles(&self) -> bool {
        !self.attrib_header_names.is_empty()
    }
}

/// Builder for [`ShibAuthConfig`].
///
/// Header names and mapping keys are lowercased and trimmed on the way in,
/// so hand-built configurations obey the same case-insensitivity invariant
/// as loaded ones.
#[derive(Debug, Default)]
pub struct ShibAuthConfigBuilder {
    config: ShibAuthConfig,
}

impl ShibAuthConfigBuilder {
    /// Enables or disables auto-provisioning.
    #[must_use]
    pub fn create_users(mut self, enabled: bool) -> Self {
        self.config.create_users = enabled;
        self
    }

    /// Enables or disables profile sync for existing accounts.
    #[must_use]
    pub fn update_info(mut self, enabled: bool) -> Self {
        self.config.update_info = enabled;
        self
    }

    /// Enables or disables role re-sync on every login.
    #[must_use]
    pub fn update_roles(mut self, enabled: bool) -> Self {
        self.config.update_roles = enabled;
        self
    }

    /// Enables or disables UTF-8 reinterpretation of header values.
    #[must_use]
    pub fn convert_to_utf8(mut self, enabled: bool) -> Self {
        self.config.convert_to_utf8 = enabled;
        self
    }

    /// Sets the roles granted to every synced user.
    #[must_use]
    pub fn default_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.default_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the header carrying the display name.
    #[must_use]
    pub fn full_name_header(mut self, name: impl Into<String>) -> Self {
        self.config.full_name_header = name.into();
        self
    }

    /// Sets the header carrying the email address.
    #[must_use]
    pub fn email_header(mut self, name: impl Into<String>) -> Self {
        self.config.email_header = name.into();
        self
    }

    /// Adds a header name to scan for role-bearing attributes.
    #[must_use]
    pub fn attrib_header(mut self, name: impl AsRef<str>) -> Self {
        self.config
            .attrib_header_names
            .insert(name.as_ref().trim().to_lowercase());
        self
    }

    /// Maps an attribute value to the group names it grants.
    ///
    /// Mapping a value twice overwrites the earlier entry, matching how
    /// duplicate configuration keys behave.
    #[must_use]
    pub fn map_role<I, S>(mut self, attribute_value: impl AsRef<str>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.role_mapping.insert(
            attribute_value.as_ref().trim().to_lowercase(),
            groups.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ShibAuthConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_conservative() {
        let config = ShibAuthConfig::default();

        assert!(!config.create_users);
        assert!(!config.update_info);
        assert!(!config.update_roles);
        assert!(!config.convert_to_utf8);
        assert!(config.default_roles.is_empty());
        assert!(config.role_mapping.is_empty());
        assert!(!config.has_dynamic_roles());
    }

    #[test]
    fn builder_lowercases_mapping_keys_and_header_names() {
        let config = ShibAuthConfig::builder()
            .attrib_header(" X-Shib-Entitlement ")
            .map_role("Staff", ["confluence-users", "staff-group"])
            .build();

        assert!(config.attrib_header_names.contains("x-shib-entitlement"));
        assert_eq!(
            config.mapped_groups("staff"),
            Some(&["confluence-users".to_owned(), "staff-group".to_owned()][..])
        );
        assert_eq!(config.mapped_groups("Staff"), None);
    }

    #[test]
    fn remapping_a_value_overwrites() {
        let config = ShibAuthConfig::builder()
            .map_role("staff", ["old-group"])
            .map_role("staff", ["new-group"])
            .build();

        assert_eq!(config.mapped_groups("staff"), Some(&["new-group".to_owned()][..]));
    }
}
