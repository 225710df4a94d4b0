//! Family records and the names of the built-in families.

use crate::dimension::SiDimensions;
use crate::unit::Unit;

pub const DIMENSIONLESS: &str = "Dimensionless";
pub const LENGTH: &str = "Length";
pub const POSITION: &str = "Position";
pub const AREA: &str = "Area";
pub const VOLUME: &str = "Volume";
pub const DURATION: &str = "Duration";
pub const TIME: &str = "Time";
pub const MASS: &str = "Mass";
pub const SPEED: &str = "Speed";
pub const ACCELERATION: &str = "Acceleration";
pub const FORCE: &str = "Force";
pub const ENERGY: &str = "Energy";
pub const TORQUE: &str = "Torque";
pub const POWER: &str = "Power";
pub const PRESSURE: &str = "Pressure";
pub const FREQUENCY: &str = "Frequency";
pub const DENSITY: &str = "Density";
pub const FLOW_VOLUME: &str = "FlowVolume";
pub const FLOW_MASS: &str = "FlowMass";
pub const ELECTRICAL_CURRENT: &str = "ElectricalCurrent";
pub const ELECTRICAL_CHARGE: &str = "ElectricalCharge";
pub const ELECTRICAL_POTENTIAL: &str = "ElectricalPotential";
pub const ELECTRICAL_RESISTANCE: &str = "ElectricalResistance";
pub const TEMPERATURE: &str = "Temperature";
pub const ABSOLUTE_TEMPERATURE: &str = "AbsoluteTemperature";
pub const ANGLE: &str = "Angle";
pub const DIRECTION: &str = "Direction";
pub const SOLID_ANGLE: &str = "SolidAngle";
pub const AMOUNT_OF_SUBSTANCE: &str = "AmountOfSubstance";
pub const LUMINOUS_INTENSITY: &str = "LuminousIntensity";

pub const MONEY: &str = "Money";
pub const MONEY_PER_LENGTH: &str = "MoneyPerLength";
pub const MONEY_PER_DURATION: &str = "MoneyPerDuration";
pub const MONEY_PER_MASS: &str = "MoneyPerMass";
pub const MONEY_PER_ENERGY: &str = "MoneyPerEnergy";
pub const MONEY_PER_AREA: &str = "MoneyPerArea";
pub const MONEY_PER_VOLUME: &str = "MoneyPerVolume";

/// Prefix of families synthesized for signatures without a named family.
pub const SI_PREFIX: &str = "SI";

/// `SI[kgm/s3]`
pub fn si_family_name(dimensions: &SiDimensions) -> String {
    format!("{SI_PREFIX}[{}]", dimensions.normalize())
}

/// Whether a family measures points or differences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyKind {
    Relative,
    /// Paired with exactly one relative family.
    Absolute { relative: String },
}

/// A snapshot of one registered family.
#[derive(Debug, Clone)]
pub struct Family {
    pub(crate) name: String,
    pub(crate) dimensions: SiDimensions,
    pub(crate) kind: FamilyKind,
    pub(crate) standard: Unit,
    pub(crate) units: Vec<Unit>,
    pub(crate) synthesized: bool,
}

impl Family {
    pub fn name(&self) -> &str { &self.name }
    pub fn dimensions(&self) -> SiDimensions { self.dimensions }
    pub fn signature(&self) -> String { self.dimensions.normalize() }
    pub fn kind(&self) -> &FamilyKind { &self.kind }
    pub fn standard_unit(&self) -> &Unit { &self.standard }
    /// Units in registration order; the standard unit comes first.
    pub fn units(&self) -> &[Unit] { &self.units }
    /// Created on demand for an otherwise unnamed signature.
    pub fn is_synthesized(&self) -> bool { self.synthesized }

    pub fn is_absolute(&self) -> bool {
        matches!(self.kind, FamilyKind::Absolute { .. })
    }

    /// The paired relative family name, for absolute families.
    pub fn relative_family(&self) -> Option<&str> {
        match &self.kind {
            FamilyKind::Absolute { relative } => Some(relative),
            FamilyKind::Relative => None,
        }
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.id() == key)
            .or_else(|| self.units.iter().find(|u| u.abbreviation() == key))
    }
}
