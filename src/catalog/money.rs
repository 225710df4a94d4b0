//! Money and the money-derived families.
//!
//! The catalog knows nothing about currencies by itself; a [`CurrencyProvider`]
//! names the standard currency (and optionally others with fixed rates), and
//! [`Catalog::register_money`] turns that into families under the `$` dimension.

use tracing::debug;

use super::family::*;
use super::Catalog;
use crate::dimension::{BaseDimension, SiDimensions};
use crate::unit::{Scale, Unit, UnitDef, UnitKind, UnitSystem};
use crate::Result;

/// Supplies the currencies the catalog registers.
pub trait CurrencyProvider: Send + Sync {
    /// The currency whose value is the standard value of the Money family.
    fn standard_currency(&self) -> UnitDef;

    /// Other currencies with their worth in the standard currency.
    fn other_currencies(&self) -> Vec<(UnitDef, f64)> {
        Vec::new()
    }
}

/// A provider with a fixed currency list.
#[derive(Debug, Clone)]
pub struct FixedCurrencies {
    standard: UnitDef,
    others: Vec<(UnitDef, f64)>,
}

impl FixedCurrencies {
    /// `FixedCurrencies::new("EUR", "euro", "€")`
    pub fn new(code: &str, name: &str, symbol: &str) -> Self {
        Self {
            standard: UnitDef::new(code, name, symbol, UnitSystem::Other),
            others: Vec::new(),
        }
    }

    /// Add a currency worth `rate` units of the standard currency.
    pub fn with_rate(mut self, code: &str, name: &str, symbol: &str, rate: f64) -> Self {
        self.others.push((UnitDef::new(code, name, symbol, UnitSystem::Other), rate));
        self
    }
}

impl CurrencyProvider for FixedCurrencies {
    fn standard_currency(&self) -> UnitDef {
        self.standard.clone()
    }

    fn other_currencies(&self) -> Vec<(UnitDef, f64)> {
        self.others.clone()
    }
}

/// family, signature, per-unit id, per-unit abbreviation
const MONEY_DERIVED: [(&str, &str, &str, &str); 6] = [
    (MONEY_PER_LENGTH, "$/m", "m", "m"),
    (MONEY_PER_DURATION, "$/s", "s", "s"),
    (MONEY_PER_MASS, "$/kg", "kg", "kg"),
    (MONEY_PER_ENERGY, "$s2/kgm2", "J", "J"),
    (MONEY_PER_AREA, "$/m2", "m2", "m²"),
    (MONEY_PER_VOLUME, "$/m3", "m3", "m³"),
];

impl Catalog {
    /// Register Money (signature `$`) in the provider's standard currency, the
    /// provider's other currencies, and the money-derived families. Returns the
    /// standard currency unit.
    ///
    /// Either everything is registered or, on the first conflict, nothing is.
    pub fn register_money(&self, provider: &dyn CurrencyProvider) -> Result<Unit> {
        let currency = provider.standard_currency();
        let mut derived = Vec::with_capacity(MONEY_DERIVED.len());
        for (family, signature, per_id, per_abbreviation) in MONEY_DERIVED {
            let def = UnitDef::new(
                format!("{}/{per_id}", currency.id),
                format!("{} per {per_id}", currency.name),
                format!("{}/{per_abbreviation}", currency.abbreviation),
                UnitSystem::Other,
            );
            derived.push((family, SiDimensions::parse(signature)?, def));
        }
        let mut rates = Vec::new();
        for (def, rate) in provider.other_currencies() {
            rates.push((Scale::linear(rate)?, def));
        }

        let mut registry = self.inner.registry.write();
        let mut staged = registry.clone();
        let money = self.register_family_in(&mut staged, MONEY, SiDimensions::of(BaseDimension::Money), currency.clone())?;
        for (scale, def) in rates {
            self.insert_unit_in(&mut staged, MONEY, def, scale, UnitKind::Relative)?;
        }
        for (family, dimensions, def) in derived {
            self.register_family_in(&mut staged, family, dimensions, def)?;
        }
        *registry = staged;

        debug!(currency = %currency.id, "registered money families");
        Ok(money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Op;
    use crate::Error;

    #[test]
    fn test_register_money() {
        let catalog = Catalog::standard().unwrap();
        let provider = FixedCurrencies::new("EUR", "euro", "€").with_rate("USD", "US dollar", "$", 0.92);
        let eur = catalog.register_money(&provider).unwrap();

        assert_eq!(eur.dimensions(), SiDimensions::parse("$").unwrap());
        assert_eq!(catalog.unit(MONEY, "USD").unwrap().scale().factor(), 0.92);
        assert_eq!(catalog.standard_unit(MONEY_PER_ENERGY).unwrap().abbreviation(), "€/J");

        let energy = catalog.standard_unit(ENERGY).unwrap();
        let per = catalog.result_unit(&eur, Op::Divide, &energy).unwrap();
        assert_eq!(per.family(), MONEY_PER_ENERGY);
    }

    #[test]
    fn test_register_money_twice_is_lenient() {
        let catalog = Catalog::standard().unwrap();
        let provider = FixedCurrencies::new("EUR", "euro", "€");
        let first = catalog.register_money(&provider).unwrap();
        let second = catalog.register_money(&provider).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_conflict_leaves_catalog_untouched() {
        let catalog = Catalog::standard().unwrap();
        catalog
            .register_family(MONEY_PER_MASS, "$/m", UnitDef::new("odd", "odd", "odd", UnitSystem::Other))
            .unwrap();
        let families = catalog.families().len();
        let units = catalog.unit_count();

        let provider = FixedCurrencies::new("EUR", "euro", "€").with_rate("USD", "US dollar", "$", 0.92);
        let err = catalog.register_money(&provider).unwrap_err();
        assert!(matches!(err, Error::RegistrationConflict(_)));

        assert!(!catalog.contains_family(MONEY));
        assert!(!catalog.contains_family(MONEY_PER_LENGTH));
        assert_eq!(catalog.families().len(), families);
        assert_eq!(catalog.unit_count(), units);
        assert_eq!(catalog.families_with_signature(&SiDimensions::parse("$").unwrap()), Vec::<String>::new());
    }

    #[test]
    fn test_invalid_rate_registers_nothing() {
        let catalog = Catalog::standard().unwrap();
        let provider = FixedCurrencies::new("EUR", "euro", "€").with_rate("XXX", "broken", "X", 0.0);
        assert!(catalog.register_money(&provider).is_err());
        assert!(!catalog.contains_family(MONEY));
    }
}
