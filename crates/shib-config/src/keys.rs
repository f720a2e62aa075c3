//! Recognized configuration property keys.

/// Enables auto-provisioning of unknown identities.
pub const CREATE_USERS: &str = "create.users";

/// Enables name/email synchronization for existing accounts on login.
pub const UPDATE_INFO: &str = "update.info";

/// Enables role re-synchronization on every login, not just creation.
pub const UPDATE_ROLES: &str = "update.roles";

/// Enables reinterpretation of header byte values as UTF-8.
pub const CONVERT_TO_UTF8: &str = "convert.to.utf8";

/// Delimited list of roles granted to every synced user.
pub const DEFAULT_ROLES: &str = "default.roles";

/// Name of the header carrying the user's display name.
pub const FULLNAME_HEADER: &str = "header.fullname";

/// Name of the header carrying the user's email address.
pub const EMAIL_HEADER: &str = "header.email";

/// Delimited list of header names scanned for role-bearing attributes.
pub const ROLES_ATTRIB_NAMES: &str = "header.dynamicroles.attributenames";

/// Prefix of mapping entries: the suffix is the (lowercased) attribute value
/// and the property value is the delimited list of group names it maps to.
pub const ROLES_ATTRIB_VALUE_PREFIX: &str = "header.dynamicroles.attributevalue.";
