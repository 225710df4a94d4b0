//! Localized unit names and abbreviations.

use hashbrown::HashMap;

/// Maps `(locale, key)` to a display string.
///
/// Units carrying a name or abbreviation key resolve through this; a `None`
/// falls back to the unit's built-in text.
pub trait Localizer: Send + Sync {
    fn lookup(&self, locale: &str, key: &str) -> Option<String>;
}

/// Map-backed localizer for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    entries: HashMap<(String, String), String>,
}

impl StaticLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.entries.insert((locale.into(), key.into()), text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for StaticLocalizer {
    fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        self.entries.get(&(locale.to_string(), key.to_string())).cloned()
    }
}
