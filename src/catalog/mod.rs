//! The unit catalog.
//!
//! A [`Catalog`] maps family names to family records (signature, kind, standard
//! unit, units) and canonical signatures to the families registered under them.
//! It is an explicit value: construct one at startup, register units into it,
//! and pass it to the arithmetic that needs to pick result units.
//!
//! ## Locking
//!
//! One `RwLock` guards the whole registry, so a registration validates and
//! mutates under a single write guard and either fully applies or leaves the
//! catalog untouched. Readers never observe a half-registered family.
//!
//! ## Limitations
//!
//! - **Append-only**: families and units cannot be removed.
//! - **No ordering** between concurrent registrations.

pub mod builtin;
pub mod config;
pub mod family;
pub mod money;

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace, warn};

use crate::dimension::SiDimensions;
use crate::ops::{self, Op, OPERATIONS};
use crate::unit::{Scale, SiPrefix, Unit, UnitDef, UnitKind, UnitSystem};
use crate::{Error, Result};

pub use config::CatalogConfig;
pub use family::{Family, FamilyKind};
pub use money::{CurrencyProvider, FixedCurrencies};

/// Relative tolerance when matching an absolute unit's factor to its relative unit.
const FACTOR_TOLERANCE: f64 = 1e-12;

// ============================================================================
// Catalog
// ============================================================================

/// Registry of unit families.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: CatalogConfig,
    registry: RwLock<Registry>,
    /// Set once the built-ins are registered.
    builtins_loaded: Mutex<bool>,
}

#[derive(Clone, Default)]
struct Registry {
    families: HashMap<String, Family>,
    /// canonical signature → family names, in registration order
    by_signature: HashMap<String, Vec<String>>,
}

impl Registry {
    fn family(&self, name: &str) -> Result<&Family> {
        self.families
            .get(name)
            .ok_or_else(|| Error::UnknownFamily(name.to_string()))
    }

    fn insert_family(&mut self, family: Family) {
        trace!(family = %family.name, unit = family.standard.id(), "registered standard unit");
        self.by_signature
            .entry(family.dimensions.normalize())
            .or_default()
            .push(family.name.clone());
        self.families.insert(family.name.clone(), family);
    }
}

impl Catalog {
    /// A catalog with nothing registered.
    pub fn empty() -> Self {
        Self::from_parts(CatalogConfig::empty())
    }

    /// A catalog with the default configuration and the built-in families.
    pub fn standard() -> Result<Self> {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        let load = config.load_builtins;
        let catalog = Self::from_parts(config);
        if load {
            catalog.load_builtins()?;
        }
        Ok(catalog)
    }

    fn from_parts(config: CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                config,
                registry: RwLock::new(Registry::default()),
                builtins_loaded: Mutex::new(false),
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Register the built-in families. Idempotent.
    pub fn load_builtins(&self) -> Result<()> {
        let mut loaded = self.inner.builtins_loaded.lock();
        if *loaded {
            return Ok(());
        }
        let families = builtin::register_builtins(self)?;
        *loaded = true;
        debug!(families, units = self.unit_count(), "loaded built-in units");
        Ok(())
    }

    // ========================================================================
    // Family registration
    // ========================================================================

    /// Register a relative family with its standard unit.
    ///
    /// Re-registering an identical family is a lenient duplicate; a different
    /// signature, kind or standard unit is a conflict.
    pub fn register_family(&self, family: &str, signature: &str, standard: UnitDef) -> Result<Unit> {
        let dimensions = SiDimensions::parse(signature)?;
        let mut registry = self.inner.registry.write();
        self.register_family_in(&mut registry, family, dimensions, standard)
    }

    fn register_family_in(
        &self,
        registry: &mut Registry,
        family: &str,
        dimensions: SiDimensions,
        standard: UnitDef,
    ) -> Result<Unit> {
        if let Some(existing) = registry.families.get(family) {
            let same = existing.dimensions == dimensions
                && existing.kind == FamilyKind::Relative
                && existing.standard.def() == &standard;
            return if same {
                self.lenient_duplicate(family, &existing.standard)
            } else {
                Err(Error::RegistrationConflict(format!(
                    "family {family} already registered as {} with standard unit {}",
                    existing.dimensions, existing.standard.id()
                )))
            };
        }

        let unit = Unit::new(standard, Scale::identity(), family, dimensions, UnitKind::Relative, None);
        registry.insert_family(Family {
            name: family.to_string(),
            dimensions,
            kind: FamilyKind::Relative,
            standard: unit.clone(),
            units: vec![unit.clone()],
            synthesized: false,
        });
        debug!(family, signature = %dimensions, "registered family");
        Ok(unit)
    }

    /// Register an absolute family paired with an existing relative family.
    ///
    /// The standard unit is paired with the relative family's standard unit.
    pub fn register_absolute_family(
        &self,
        family: &str,
        relative_family: &str,
        standard: UnitDef,
    ) -> Result<Unit> {
        let mut registry = self.inner.registry.write();
        let relative = registry.family(relative_family)?;
        if relative.is_absolute() {
            return Err(Error::RegistrationConflict(format!(
                "{family} cannot pair with {relative_family}, which is itself absolute"
            )));
        }
        let dimensions = relative.dimensions;
        let relative_standard = relative.standard.clone();
        let kind = FamilyKind::Absolute { relative: relative_family.to_string() };

        if let Some(existing) = registry.families.get(family) {
            let same = existing.kind == kind && existing.standard.def() == &standard;
            return if same {
                self.lenient_duplicate(family, &existing.standard)
            } else {
                Err(Error::RegistrationConflict(format!(
                    "family {family} already registered with a different pairing or standard unit"
                )))
            };
        }

        let unit = Unit::new(
            standard,
            Scale::linear_offset(1.0, 0.0)?,
            family,
            dimensions,
            UnitKind::Absolute { relative: relative_standard },
            None,
        );
        registry.insert_family(Family {
            name: family.to_string(),
            dimensions,
            kind,
            standard: unit.clone(),
            units: vec![unit.clone()],
            synthesized: false,
        });
        debug!(family, relative = relative_family, "registered absolute family");
        Ok(unit)
    }

    // ========================================================================
    // Unit derivation
    // ========================================================================

    /// `new = factor × reference`, chaining the reference's own factor.
    pub fn derive_linear(&self, reference: &Unit, factor: f64, def: UnitDef) -> Result<Unit> {
        if reference.is_absolute() {
            return Err(Error::UsageError(format!(
                "{} is absolute; derive absolute units with derive_absolute",
                reference.id()
            )));
        }
        let scale = reference.scale().chained(factor)?;
        self.insert_unit(reference.family(), def, scale, UnitKind::Relative)
    }

    /// An absolute unit with `standard = value × factor + offset`, paired with
    /// `relative`, which must have the same factor.
    pub fn derive_absolute(
        &self,
        family: &str,
        factor: f64,
        offset: f64,
        relative: &Unit,
        def: UnitDef,
    ) -> Result<Unit> {
        let scale = Scale::linear_offset(factor, offset)?;
        {
            let registry = self.inner.registry.read();
            let fam = registry.family(family)?;
            let Some(relative_family) = fam.relative_family() else {
                return Err(Error::UsageError(format!("{family} is not an absolute family")));
            };
            if relative.family() != relative_family {
                return Err(Error::IncompatibleUnits {
                    left: format!("{family} (pairs with {relative_family})"),
                    right: format!("{} ({})", relative.id(), relative.family()),
                });
            }
        }
        let rel_factor = relative.scale().factor();
        if ((rel_factor - factor) / factor).abs() > FACTOR_TOLERANCE {
            return Err(Error::RegistrationConflict(format!(
                "absolute unit {} has factor {factor} but its relative unit {} has factor {rel_factor}",
                def.id,
                relative.id()
            )));
        }
        self.insert_unit(family, def, scale, UnitKind::Absolute { relative: relative.clone() })
    }

    /// A relative unit with an arbitrary scale.
    pub fn derive_custom(&self, family: &str, scale: Scale, def: UnitDef) -> Result<Unit> {
        self.insert_unit(family, def, scale, UnitKind::Relative)
    }

    /// A unit composed from powers of other units, e.g. `km/h²` from
    /// `[(km, 1), (h, -2)]`. The composed dimensions must equal the family's.
    pub fn compose(&self, family: &str, parts: &[(&Unit, i32)], def: UnitDef) -> Result<Unit> {
        let mut dimensions = SiDimensions::dimensionless();
        let mut factor = 1.0;
        for (unit, power) in parts {
            if unit.is_absolute() || !unit.scale().is_linear() {
                return Err(Error::UsageError(format!(
                    "{} cannot take part in a composed unit: only linear relative units can",
                    unit.id()
                )));
            }
            dimensions = dimensions.multiply(&unit.dimensions().pow(*power)?)?;
            factor *= unit.scale().factor().powi(*power);
        }
        let expected = self.family(family)?.dimensions;
        if dimensions != expected {
            return Err(Error::DimensionMismatch {
                context: format!("composing {} for {family}", def.id),
                expected: expected.normalize(),
                got: dimensions.normalize(),
            });
        }
        self.insert_unit(family, def, Scale::linear(factor)?, UnitKind::Relative)
    }

    /// A decimal-prefixed copy of a linear unit (`k` + `m`).
    pub fn derive_prefixed(&self, unit: &Unit, prefix: SiPrefix) -> Result<Unit> {
        if !unit.scale().is_linear() {
            return Err(Error::UsageError(format!("cannot prefix non-linear unit {}", unit.id())));
        }
        self.derive_linear(unit, prefix.factor(), unit.def().with_prefix(prefix))
    }

    fn insert_unit(&self, family: &str, def: UnitDef, scale: Scale, kind: UnitKind) -> Result<Unit> {
        let mut registry = self.inner.registry.write();
        self.insert_unit_in(&mut registry, family, def, scale, kind)
    }

    fn insert_unit_in(
        &self,
        registry: &mut Registry,
        family: &str,
        def: UnitDef,
        scale: Scale,
        kind: UnitKind,
    ) -> Result<Unit> {
        let fam = registry.family(family)?;

        for existing in &fam.units {
            let same_id = existing.id() == def.id;
            let same_abbreviation = existing.abbreviation() == def.abbreviation;
            if !same_id && !same_abbreviation {
                continue;
            }
            if same_id && same_abbreviation && existing.name() == def.name && existing.scale() == &scale {
                return self.lenient_duplicate(family, existing);
            }
            return Err(Error::RegistrationConflict(format!(
                "{family} already has unit {} ({}) clashing with {} ({})",
                existing.id(),
                existing.abbreviation(),
                def.id,
                def.abbreviation
            )));
        }

        let unit = Unit::new(def, scale, family, fam.dimensions, kind, Some(fam.standard.clone()));
        if let Some(fam) = registry.families.get_mut(family) {
            fam.units.push(unit.clone());
        }
        trace!(family, unit = unit.id(), scale = ?unit.scale(), "registered unit");
        Ok(unit)
    }

    fn lenient_duplicate(&self, family: &str, existing: &Unit) -> Result<Unit> {
        if self.inner.config.strict_duplicates {
            return Err(Error::RegistrationConflict(format!(
                "duplicate registration of {} in {family}",
                existing.id()
            )));
        }
        warn!(family, unit = existing.id(), "ignoring duplicate registration");
        Ok(existing.clone())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn family(&self, name: &str) -> Result<Family> {
        self.inner.registry.read().family(name).cloned()
    }

    pub fn contains_family(&self, name: &str) -> bool {
        self.inner.registry.read().families.contains_key(name)
    }

    /// Family names, sorted.
    pub fn families(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.registry.read().families.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn standard_unit(&self, family: &str) -> Result<Unit> {
        Ok(self.inner.registry.read().family(family)?.standard.clone())
    }

    /// Find a unit by id, then by abbreviation, then by signature (which
    /// yields the standard unit).
    pub fn unit(&self, family: &str, key: &str) -> Result<Unit> {
        let registry = self.inner.registry.read();
        let fam = registry.family(family)?;
        if let Some(unit) = fam.find(key) {
            return Ok(unit.clone());
        }
        match SiDimensions::parse(key) {
            Ok(dims) if dims == fam.dimensions => Ok(fam.standard.clone()),
            _ => Err(Error::UnknownUnit { family: family.to_string(), unit: key.to_string() }),
        }
    }

    pub fn units_of(&self, family: &str) -> Result<Vec<Unit>> {
        Ok(self.inner.registry.read().family(family)?.units.clone())
    }

    /// Families registered under `dimensions`, in registration order.
    pub fn families_with_signature(&self, dimensions: &SiDimensions) -> Vec<String> {
        self.inner
            .registry
            .read()
            .by_signature
            .get(&dimensions.normalize())
            .cloned()
            .unwrap_or_default()
    }

    pub fn unit_count(&self) -> usize {
        self.inner.registry.read().families.values().map(|f| f.units.len()).sum()
    }

    // ========================================================================
    // Result units
    // ========================================================================

    /// The standard unit of the `SI[sig]` family, creating it on first use.
    pub fn lookup_or_create_si_unit(&self, dimensions: &SiDimensions) -> Result<Unit> {
        let name = family::si_family_name(dimensions);
        let mut registry = self.inner.registry.write();
        if let Some(existing) = registry.families.get(&name) {
            return Ok(existing.standard.clone());
        }
        if !self.inner.config.synthesize_si_units {
            return Err(Error::UsageError(format!(
                "no family registered for signature {dimensions}"
            )));
        }
        let sig = dimensions.normalize();
        let def = UnitDef::new(sig.clone(), sig.clone(), sig, UnitSystem::SiDerived);
        let unit = Unit::new(def, Scale::identity(), &name, *dimensions, UnitKind::Relative, None);
        registry.insert_family(Family {
            name: name.clone(),
            dimensions: *dimensions,
            kind: FamilyKind::Relative,
            standard: unit.clone(),
            units: vec![unit.clone()],
            synthesized: true,
        });
        debug!(family = %name, "synthesized SI family");
        Ok(unit)
    }

    /// The unit of `left op right`: the operator-table row if there is one, else
    /// the only named relative family with the computed signature, else the
    /// synthesized `SI[sig]` family. Always a standard unit.
    pub fn result_unit(&self, left: &Unit, op: Op, right: &Unit) -> Result<Unit> {
        let dimensions = op.apply(&left.dimensions(), &right.dimensions())?;

        if let Some(row) = ops::lookup(left.family(), op, right.family()) {
            let registry = self.inner.registry.read();
            if let Some(fam) = registry.families.get(row.result) {
                if fam.dimensions != dimensions {
                    return Err(Error::DimensionMismatch {
                        context: row.to_string(),
                        expected: fam.dimensions.normalize(),
                        got: dimensions.normalize(),
                    });
                }
                return Ok(fam.standard.clone());
            }
        }

        {
            let registry = self.inner.registry.read();
            if let Some(names) = registry.by_signature.get(&dimensions.normalize()) {
                let mut named = names
                    .iter()
                    .filter_map(|n| registry.families.get(n))
                    .filter(|f| !f.synthesized && !f.is_absolute());
                if let (Some(only), None) = (named.next(), named.next()) {
                    return Ok(only.standard.clone());
                }
            }
        }

        self.lookup_or_create_si_unit(&dimensions)
    }

    /// Check every operator-table row whose families are all registered.
    /// Returns the number of rows checked.
    pub fn validate_operations(&self) -> Result<usize> {
        let registry = self.inner.registry.read();
        let mut checked = 0;
        for row in OPERATIONS {
            let (Some(left), Some(right), Some(result)) = (
                registry.families.get(row.left),
                registry.families.get(row.right),
                registry.families.get(row.result),
            ) else {
                continue;
            };
            let computed = row.op.apply(&left.dimensions, &right.dimensions)?;
            if computed != result.dimensions {
                return Err(Error::DimensionMismatch {
                    context: row.to_string(),
                    expected: result.dimensions.normalize(),
                    got: computed.normalize(),
                });
            }
            checked += 1;
        }
        Ok(checked)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.registry.read();
        f.debug_struct("Catalog")
            .field("families", &registry.families.len())
            .field("config", &self.inner.config)
            .finish()
    }
}
