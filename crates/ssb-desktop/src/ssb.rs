//! SSB identity value type.
//!
//! The identity is owned by the external SSB registry; this crate consumes it
//! read-only and uses both fields verbatim when deriving paths and descriptor
//! text. Callers are responsible for `id` being a stable, filesystem-safe
//! identifier (no path separators).

use serde::{Deserialize, Serialize};

/// Identity of a site-specific browser, as supplied by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSpecificBrowser {
    /// Opaque stable identifier.
    pub id: String,
    /// Display name shown in the launcher.
    pub name: String,
}

impl SiteSpecificBrowser {
    /// Create an identity from its two fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
