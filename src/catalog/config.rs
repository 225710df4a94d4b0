//! Catalog configuration.

use serde::Deserialize;

use crate::Result;

/// Catalog construction options. Every field has a default, so `{}` is a valid
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Register the built-in families on construction.
    pub load_builtins: bool,
    /// Turn lenient duplicate registrations into errors.
    pub strict_duplicates: bool,
    /// Synthesize `SI[...]` families for products without a named family.
    pub synthesize_si_units: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_builtins: true,
            strict_duplicates: false,
            synthesize_si_units: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// No built-ins, otherwise defaults.
    pub fn empty() -> Self {
        Self { load_builtins: false, ..Self::default() }
    }
}
