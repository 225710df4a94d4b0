//! Units: named scales bound to a family and its SI signature.
//!
//! A [`Unit`] is a cheap shared handle. Units are created through the
//! [`Catalog`](crate::Catalog), which resolves the scale chain and the family's
//! standard unit before handing the unit out; after that nothing about a unit
//! changes.

pub mod locale;
pub mod prefix;
pub mod scale;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::dimension::SiDimensions;
pub use locale::{Localizer, StaticLocalizer};
pub use prefix::SiPrefix;
pub use scale::{ConversionFn, CustomScale, Scale};

// ============================================================================
// UnitSystem
// ============================================================================

/// The measurement system a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    SiBase,
    SiDerived,
    SiAccepted,
    Cgs,
    CgsEsu,
    CgsEmu,
    Imperial,
    UsCustomary,
    Mts,
    Other,
}

impl UnitSystem {
    pub fn is_si(self) -> bool {
        matches!(self, UnitSystem::SiBase | UnitSystem::SiDerived | UnitSystem::SiAccepted)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnitSystem::SiBase => "SI base",
            UnitSystem::SiDerived => "SI derived",
            UnitSystem::SiAccepted => "SI accepted",
            UnitSystem::Cgs => "CGS",
            UnitSystem::CgsEsu => "CGS (ESU)",
            UnitSystem::CgsEmu => "CGS (EMU)",
            UnitSystem::Imperial => "Imperial",
            UnitSystem::UsCustomary => "US customary",
            UnitSystem::Mts => "MTS",
            UnitSystem::Other => "other",
        };
        f.write_str(s)
    }
}

// ============================================================================
// UnitDef
// ============================================================================

/// The naming part of a unit, supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDef {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub system: UnitSystem,
    pub name_key: Option<String>,
    pub abbreviation_key: Option<String>,
}

impl UnitDef {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        system: UnitSystem,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            abbreviation: abbreviation.into(),
            system,
            name_key: None,
            abbreviation_key: None,
        }
    }

    /// Attach localizer keys for the name and abbreviation.
    pub fn localized(mut self, name_key: impl Into<String>, abbreviation_key: impl Into<String>) -> Self {
        self.name_key = Some(name_key.into());
        self.abbreviation_key = Some(abbreviation_key.into());
        self
    }

    /// `kilo` + `meter`, `k` + `m`.
    pub fn with_prefix(&self, prefix: SiPrefix) -> Self {
        Self {
            id: format!("{}{}", prefix.id(), self.id),
            name: format!("{}{}", prefix.name(), self.name),
            abbreviation: format!("{}{}", prefix.symbol(), self.abbreviation),
            system: self.system,
            name_key: None,
            abbreviation_key: None,
        }
    }
}

// ============================================================================
// Unit
// ============================================================================

/// Whether a unit measures a point (absolute) or a difference (relative).
#[derive(Debug, Clone)]
pub enum UnitKind {
    Relative,
    /// Paired with the relative unit of the same size in the relative family.
    Absolute { relative: Unit },
}

/// A registered unit.
#[derive(Clone)]
pub struct Unit {
    inner: Arc<UnitInner>,
}

struct UnitInner {
    def: UnitDef,
    scale: Scale,
    family: String,
    dimensions: SiDimensions,
    kind: UnitKind,
    /// `None` for the family's standard unit itself.
    standard: Option<Unit>,
}

impl Unit {
    pub(crate) fn new(
        def: UnitDef,
        scale: Scale,
        family: &str,
        dimensions: SiDimensions,
        kind: UnitKind,
        standard: Option<Unit>,
    ) -> Self {
        Self {
            inner: Arc::new(UnitInner {
                def,
                scale,
                family: family.to_string(),
                dimensions,
                kind,
                standard,
            }),
        }
    }

    pub fn id(&self) -> &str { &self.inner.def.id }
    pub fn name(&self) -> &str { &self.inner.def.name }
    pub fn abbreviation(&self) -> &str { &self.inner.def.abbreviation }
    pub fn system(&self) -> UnitSystem { self.inner.def.system }
    pub fn def(&self) -> &UnitDef { &self.inner.def }
    pub fn scale(&self) -> &Scale { &self.inner.scale }
    pub fn family(&self) -> &str { &self.inner.family }
    pub fn dimensions(&self) -> SiDimensions { self.inner.dimensions }
    pub fn kind(&self) -> &UnitKind { &self.inner.kind }

    pub fn is_absolute(&self) -> bool {
        matches!(self.inner.kind, UnitKind::Absolute { .. })
    }

    /// The paired relative unit, for absolute units.
    pub fn relative_unit(&self) -> Option<&Unit> {
        match &self.inner.kind {
            UnitKind::Absolute { relative } => Some(relative),
            UnitKind::Relative => None,
        }
    }

    /// The standard unit of this unit's family.
    pub fn standard_unit(&self) -> Unit {
        match &self.inner.standard {
            Some(standard) => standard.clone(),
            None => self.clone(),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.inner.standard.is_none()
    }

    pub fn to_standard(&self, value: f64) -> f64 {
        self.inner.scale.to_standard(value)
    }

    pub fn from_standard(&self, standard: f64) -> f64 {
        self.inner.scale.from_standard(standard)
    }

    pub fn localized_name(&self, localizer: &dyn Localizer, locale: &str) -> String {
        self.inner
            .def
            .name_key
            .as_deref()
            .and_then(|key| localizer.lookup(locale, key))
            .unwrap_or_else(|| self.inner.def.name.clone())
    }

    pub fn localized_abbreviation(&self, localizer: &dyn Localizer, locale: &str) -> String {
        self.inner
            .def
            .abbreviation_key
            .as_deref()
            .and_then(|key| localizer.lookup(locale, key))
            .unwrap_or_else(|| self.inner.def.abbreviation.clone())
    }

    /// Same registered unit (identity or family + id).
    pub fn same_as(&self, other: &Unit) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.family == other.inner.family && self.inner.def.id == other.inner.def.id)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.family.hash(state);
        self.inner.def.id.hash(state);
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.inner.def.id)
            .field("family", &self.inner.family)
            .field("scale", &self.inner.scale)
            .field("absolute", &self.is_absolute())
            .finish()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.def.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new(
            UnitDef::new("m", "meter", "m", UnitSystem::SiBase),
            Scale::identity(),
            "Length",
            SiDimensions::parse("m").unwrap(),
            UnitKind::Relative,
            None,
        )
    }

    #[test]
    fn test_standard_unit_is_self() {
        let m = meter();
        assert!(m.is_standard());
        assert_eq!(m.standard_unit(), m);
    }

    #[test]
    fn test_derived_unit_refers_to_standard() {
        let m = meter();
        let km = Unit::new(
            UnitDef::new("m", "meter", "m", UnitSystem::SiBase).with_prefix(SiPrefix::Kilo),
            Scale::linear(1000.0).unwrap(),
            "Length",
            m.dimensions(),
            UnitKind::Relative,
            Some(m.clone()),
        );
        assert_eq!(km.id(), "km");
        assert_eq!(km.name(), "kilometer");
        assert_eq!(km.standard_unit(), m);
        assert_eq!(km.to_standard(1.5), 1500.0);
        assert_eq!(km.to_string(), "km");
        assert_ne!(km, m);
    }

    #[test]
    fn test_localized_name_falls_back() {
        let mut loc = StaticLocalizer::new();
        loc.insert("fr", "Length.m", "mètre");
        let plain = meter();
        assert_eq!(plain.localized_name(&loc, "fr"), "meter");

        let keyed = Unit::new(
            UnitDef::new("m", "meter", "m", UnitSystem::SiBase).localized("Length.m", "Length.m.abbr"),
            Scale::identity(),
            "Length",
            SiDimensions::parse("m").unwrap(),
            UnitKind::Relative,
            None,
        );
        assert_eq!(keyed.localized_name(&loc, "fr"), "mètre");
        assert_eq!(keyed.localized_name(&loc, "de"), "meter");
        assert_eq!(keyed.localized_abbreviation(&loc, "fr"), "m");
    }

    #[test]
    fn test_micro_prefix_id_is_ascii() {
        let def = UnitDef::new("s", "second", "s", UnitSystem::SiBase).with_prefix(SiPrefix::Micro);
        assert_eq!(def.id, "mus");
        assert_eq!(def.abbreviation, "μs");
    }
}
