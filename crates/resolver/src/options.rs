//! Resolver configuration.
//!
//! ```json
//! { "ignoredPropertyNames": ["Age", "Password"] }
//! ```

use serde::{Deserialize, Serialize};
use vmwire_core::{IgnoreSet, Result};

/// Externally supplied resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ResolverOptions {
    /// Property names to always suppress, in addition to ignore-marked ones
    pub ignored_property_names: Vec<String>,
}

impl ResolverOptions {
    /// Parse options from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The configured names as an [`IgnoreSet`]
    pub fn ignore_set(&self) -> IgnoreSet {
        self.ignored_property_names.iter().cloned().collect()
    }
}
