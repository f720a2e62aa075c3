//! Attribute-to-group mapping.
//!
//! Admin-authored rules translate externally-supplied attribute values into
//! local group names. Matching is case-insensitive on both header names and
//! attribute values, and the result is strictly a set: callers must not
//! rely on any assignment order.

use std::collections::HashSet;

use shib_config::ShibAuthConfig;
use shib_core::text::{reinterpret_utf8, split_list};
use shib_core::Headers;

/// Computes the effective group set asserted by the request headers.
///
/// Returns the empty set immediately when no attribute header names are
/// configured. Otherwise every header whose trimmed-lowercased name is
/// configured contributes: its value is tokenized on commas, semicolons,
/// and whitespace, and each lowercased token that appears in the role
/// mapping unions its group list into the result. Unmapped tokens are
/// ignored, an empty header value contributes nothing, and repeated headers
/// under the same name contribute independently.
#[must_use]
pub fn compute_roles(headers: &Headers, config: &ShibAuthConfig) -> HashSet<String> {
    if !config.has_dynamic_roles() {
        return HashSet::new();
    }

    let mut groups = HashSet::new();

    for (name, value) in headers.iter() {
        let lowered_name = name.trim().to_lowercase();
        if !config.attrib_header_names.contains(&lowered_name) {
            continue;
        }

        // Reinterpretation targets the header value, never the name.
        let value = if config.convert_to_utf8 {
            reinterpret_utf8(value).unwrap_or_else(|| value.to_owned())
        } else {
            value.to_owned()
        };

        for token in split_list(&value) {
            let token = token.to_lowercase();
            if let Some(mapped) = config.mapped_groups(&token) {
                tracing::debug!(attribute = %token, groups = ?mapped, "mapped attribute value");
                groups.extend(mapped.iter().cloned());
            }
        }
    }

    groups.retain(|g| !g.trim().is_empty());
    groups
}
