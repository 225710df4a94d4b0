//! Built-in families and units.
//!
//! Registered through the same public API users have: standard units via
//! `register_family`, the rest via reference chains (`derive_linear`),
//! composition (`compose`), prefixes and absolute derivations.

use std::f64::consts::PI;

use super::family::*;
use super::Catalog;
use crate::unit::{Scale, SiPrefix, Unit, UnitDef, UnitSystem};
use crate::unit::UnitSystem::{Imperial, Other, SiAccepted, SiBase, SiDerived, UsCustomary, Cgs};
use crate::Result;

/// Seconds from 1970-01-01T00:00Z to 2000-01-01T12:00Z.
pub const J2000_OFFSET_S: f64 = 946_728_000.0;
/// Seconds from 1970-01-01T00:00Z back to 0001-01-01T00:00Z.
pub const YEAR1_OFFSET_S: f64 = -62_135_596_800.0;
/// Standard gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

fn def(family: &str, id: &str, name: &str, abbreviation: &str, system: UnitSystem) -> UnitDef {
    UnitDef::new(id, name, abbreviation, system)
        .localized(format!("{family}.{id}.name"), format!("{family}.{id}.abbreviation"))
}

/// Register every built-in family. Returns the number of families added.
pub(crate) fn register_builtins(catalog: &Catalog) -> Result<usize> {
    let before = catalog.families().len();

    catalog.register_family(DIMENSIONLESS, "1", def(DIMENSIONLESS, "unit", "unit", "", SiDerived))?;

    let base = base_units(catalog)?;
    geometry(catalog, &base)?;
    time(catalog, &base)?;
    mechanics(catalog, &base)?;
    electrical(catalog)?;
    thermal(catalog)?;
    angles(catalog)?;

    let mol = catalog.register_family(AMOUNT_OF_SUBSTANCE, "mol", def(AMOUNT_OF_SUBSTANCE, "mol", "mole", "mol", SiBase))?;
    for prefix in [SiPrefix::Micro, SiPrefix::Milli, SiPrefix::Kilo] {
        catalog.derive_prefixed(&mol, prefix)?;
    }
    catalog.register_family(LUMINOUS_INTENSITY, "cd", def(LUMINOUS_INTENSITY, "cd", "candela", "cd", SiBase))?;

    Ok(catalog.families().len() - before)
}

/// Units other sections compose with.
struct BaseUnits {
    m: Unit,
    km: Unit,
    cm: Unit,
    mm: Unit,
    inch: Unit,
    ft: Unit,
    mi: Unit,
    nmi: Unit,
    s: Unit,
    min: Unit,
    h: Unit,
    day: Unit,
    kg: Unit,
    g: Unit,
    lb: Unit,
}

// ============================================================================
// Length, Duration, Mass
// ============================================================================

fn base_units(catalog: &Catalog) -> Result<BaseUnits> {
    let m = catalog.register_family(LENGTH, "m", def(LENGTH, "m", "meter", "m", SiBase))?;
    let km = catalog.derive_prefixed(&m, SiPrefix::Kilo)?;
    catalog.derive_prefixed(&m, SiPrefix::Deci)?;
    let cm = catalog.derive_prefixed(&m, SiPrefix::Centi)?;
    let mm = catalog.derive_prefixed(&m, SiPrefix::Milli)?;
    catalog.derive_prefixed(&m, SiPrefix::Micro)?;
    catalog.derive_prefixed(&m, SiPrefix::Nano)?;
    let inch = catalog.derive_linear(&m, 0.0254, def(LENGTH, "in", "inch", "in", Imperial))?;
    let ft = catalog.derive_linear(&inch, 12.0, def(LENGTH, "ft", "foot", "ft", Imperial))?;
    catalog.derive_linear(&ft, 3.0, def(LENGTH, "yd", "yard", "yd", Imperial))?;
    let mi = catalog.derive_linear(&ft, 5280.0, def(LENGTH, "mi", "mile", "mi", Imperial))?;
    let nmi = catalog.derive_linear(&m, 1852.0, def(LENGTH, "NM", "nautical mile", "NM", Other))?;
    catalog.derive_linear(&m, 1e-10, def(LENGTH, "A", "ångström", "Å", Other))?;
    catalog.derive_linear(&m, 149_597_870_700.0, def(LENGTH, "AU", "astronomical unit", "AU", SiAccepted))?;
    catalog.derive_linear(&m, 9.460_730_472_580_8e15, def(LENGTH, "ly", "light-year", "ly", Other))?;
    catalog.derive_linear(&m, 3.085_677_581_491_367e16, def(LENGTH, "pc", "parsec", "pc", Other))?;

    let s = catalog.register_family(DURATION, "s", def(DURATION, "s", "second", "s", SiBase))?;
    for prefix in [SiPrefix::Milli, SiPrefix::Micro, SiPrefix::Nano] {
        catalog.derive_prefixed(&s, prefix)?;
    }
    let min = catalog.derive_linear(&s, 60.0, def(DURATION, "min", "minute", "min", SiAccepted))?;
    let h = catalog.derive_linear(&min, 60.0, def(DURATION, "h", "hour", "h", SiAccepted))?;
    let day = catalog.derive_linear(&h, 24.0, def(DURATION, "day", "day", "d", SiAccepted))?;
    catalog.derive_linear(&day, 7.0, def(DURATION, "wk", "week", "wk", Other))?;

    let kg = catalog.register_family(MASS, "kg", def(MASS, "kg", "kilogram", "kg", SiBase))?;
    let g = catalog.derive_linear(&kg, 1e-3, def(MASS, "g", "gram", "g", SiBase))?;
    catalog.derive_prefixed(&g, SiPrefix::Milli)?;
    catalog.derive_prefixed(&g, SiPrefix::Micro)?;
    catalog.derive_linear(&kg, 1000.0, def(MASS, "t", "tonne", "t", SiAccepted))?;
    let lb = catalog.derive_linear(&kg, 0.453_592_37, def(MASS, "lb", "pound", "lb", Imperial))?;
    catalog.derive_linear(&lb, 1.0 / 16.0, def(MASS, "oz", "ounce", "oz", Imperial))?;
    catalog.derive_linear(&lb, 2000.0, def(MASS, "ton_short", "short ton", "ton (short)", UsCustomary))?;

    Ok(BaseUnits { m, km, cm, mm, inch, ft, mi, nmi, s, min, h, day, kg, g, lb })
}

// ============================================================================
// Position, Area, Volume
// ============================================================================

fn geometry(catalog: &Catalog, b: &BaseUnits) -> Result<()> {
    catalog.register_absolute_family(POSITION, LENGTH, def(POSITION, "m", "meter", "m", SiBase))?;
    for (rel, factor) in [(&b.km, 1000.0), (&b.cm, 0.01), (&b.mm, 0.001), (&b.ft, b.ft.scale().factor())] {
        let rel_def = rel.def();
        catalog.derive_absolute(
            POSITION,
            factor,
            0.0,
            rel,
            def(POSITION, &rel_def.id, &rel_def.name, &rel_def.abbreviation, rel_def.system),
        )?;
    }

    catalog.register_family(AREA, "m2", def(AREA, "m2", "square meter", "m²", SiDerived))?;
    catalog.compose(AREA, &[(&b.km, 2)], def(AREA, "km2", "square kilometer", "km²", SiDerived))?;
    catalog.compose(AREA, &[(&b.cm, 2)], def(AREA, "cm2", "square centimeter", "cm²", SiDerived))?;
    catalog.compose(AREA, &[(&b.mm, 2)], def(AREA, "mm2", "square millimeter", "mm²", SiDerived))?;
    let m2 = catalog.standard_unit(AREA)?;
    catalog.derive_linear(&m2, 100.0, def(AREA, "a", "are", "a", Other))?;
    catalog.derive_linear(&m2, 1e4, def(AREA, "ha", "hectare", "ha", SiAccepted))?;
    catalog.compose(AREA, &[(&b.inch, 2)], def(AREA, "in2", "square inch", "in²", Imperial))?;
    catalog.compose(AREA, &[(&b.ft, 2)], def(AREA, "ft2", "square foot", "ft²", Imperial))?;
    catalog.compose(AREA, &[(&b.mi, 2)], def(AREA, "mi2", "square mile", "mi²", Imperial))?;
    catalog.derive_linear(&m2, 4_046.856_422_4, def(AREA, "ac", "acre", "ac", Imperial))?;

    let m3 = catalog.register_family(VOLUME, "m3", def(VOLUME, "m3", "cubic meter", "m³", SiDerived))?;
    let liter = catalog.derive_linear(&m3, 1e-3, def(VOLUME, "L", "liter", "L", SiAccepted))?;
    catalog.derive_prefixed(&liter, SiPrefix::Milli)?;
    catalog.compose(VOLUME, &[(&b.cm, 3)], def(VOLUME, "cm3", "cubic centimeter", "cm³", SiDerived))?;
    catalog.compose(VOLUME, &[(&b.km, 3)], def(VOLUME, "km3", "cubic kilometer", "km³", SiDerived))?;
    catalog.compose(VOLUME, &[(&b.inch, 3)], def(VOLUME, "in3", "cubic inch", "in³", Imperial))?;
    catalog.compose(VOLUME, &[(&b.ft, 3)], def(VOLUME, "ft3", "cubic foot", "ft³", Imperial))?;
    catalog.derive_linear(&m3, 3.785_411_784e-3, def(VOLUME, "gal_US", "gallon (US)", "gal(US)", UsCustomary))?;
    catalog.derive_linear(&m3, 4.546_09e-3, def(VOLUME, "gal_imp", "gallon (imperial)", "gal(imp)", Imperial))?;
    Ok(())
}

// ============================================================================
// Time (absolute), Frequency
// ============================================================================

fn time(catalog: &Catalog, b: &BaseUnits) -> Result<()> {
    catalog.register_absolute_family(TIME, DURATION, def(TIME, "s", "second (Unix epoch)", "s", SiBase))?;
    catalog.derive_absolute(TIME, 1.0, J2000_OFFSET_S, &b.s, def(TIME, "s_J2000", "second (J2000)", "s(J2000)", SiBase))?;
    catalog.derive_absolute(TIME, 1.0, YEAR1_OFFSET_S, &b.s, def(TIME, "s_Y1", "second (year 1)", "s(Y1)", SiBase))?;
    catalog.derive_absolute(TIME, 60.0, 0.0, &b.min, def(TIME, "min", "minute (Unix epoch)", "min", SiAccepted))?;
    catalog.derive_absolute(TIME, 3600.0, 0.0, &b.h, def(TIME, "h", "hour (Unix epoch)", "h", SiAccepted))?;
    catalog.derive_absolute(TIME, 86_400.0, 0.0, &b.day, def(TIME, "day", "day (Unix epoch)", "d", SiAccepted))?;

    let hz = catalog.register_family(FREQUENCY, "1/s", def(FREQUENCY, "Hz", "hertz", "Hz", SiDerived))?;
    for prefix in [SiPrefix::Kilo, SiPrefix::Mega, SiPrefix::Giga] {
        catalog.derive_prefixed(&hz, prefix)?;
    }
    catalog.compose(FREQUENCY, &[(&b.min, -1)], def(FREQUENCY, "rpm", "revolutions per minute", "rpm", Other))?;
    Ok(())
}

// ============================================================================
// Speed .. Pressure, Density, flows
// ============================================================================

fn mechanics(catalog: &Catalog, b: &BaseUnits) -> Result<()> {
    catalog.register_family(SPEED, "m/s", def(SPEED, "m/s", "meter per second", "m/s", SiDerived))?;
    let kmh = catalog.compose(SPEED, &[(&b.km, 1), (&b.h, -1)], def(SPEED, "km/h", "kilometer per hour", "km/h", SiAccepted))?;
    catalog.compose(SPEED, &[(&b.mi, 1), (&b.h, -1)], def(SPEED, "mi/h", "mile per hour", "mph", Imperial))?;
    catalog.compose(SPEED, &[(&b.ft, 1), (&b.s, -1)], def(SPEED, "ft/s", "foot per second", "fps", Imperial))?;
    catalog.compose(SPEED, &[(&b.nmi, 1), (&b.h, -1)], def(SPEED, "kt", "knot", "kt", Other))?;

    let mps2 = catalog.register_family(ACCELERATION, "m/s2", def(ACCELERATION, "m/s2", "meter per second squared", "m/s²", SiDerived))?;
    catalog.compose(ACCELERATION, &[(&b.km, 1), (&b.h, -2)], def(ACCELERATION, "km/h2", "kilometer per hour squared", "km/h²", SiAccepted))?;
    catalog.compose(ACCELERATION, &[(&kmh, 1), (&b.s, -1)], def(ACCELERATION, "km/h/s", "kilometer per hour per second", "km/h/s", SiAccepted))?;
    catalog.compose(ACCELERATION, &[(&b.ft, 1), (&b.s, -2)], def(ACCELERATION, "ft/s2", "foot per second squared", "ft/s²", Imperial))?;
    catalog.compose(ACCELERATION, &[(&b.cm, 1), (&b.s, -2)], def(ACCELERATION, "Gal", "gal", "Gal", Cgs))?;
    let g0 = catalog.derive_linear(&mps2, STANDARD_GRAVITY, def(ACCELERATION, "g0", "standard gravity", "g", Other))?;

    let n = catalog.register_family(FORCE, "kgm/s2", def(FORCE, "N", "newton", "N", SiDerived))?;
    catalog.derive_prefixed(&n, SiPrefix::Kilo)?;
    catalog.derive_prefixed(&n, SiPrefix::Mega)?;
    catalog.compose(FORCE, &[(&b.g, 1), (&b.cm, 1), (&b.s, -2)], def(FORCE, "dyn", "dyne", "dyn", Cgs))?;
    let kgf = catalog.compose(FORCE, &[(&b.kg, 1), (&g0, 1)], def(FORCE, "kgf", "kilogram-force", "kgf", Other))?;
    let lbf = catalog.compose(FORCE, &[(&b.lb, 1), (&g0, 1)], def(FORCE, "lbf", "pound-force", "lbf", Imperial))?;

    let j = catalog.register_family(ENERGY, "kgm2/s2", def(ENERGY, "J", "joule", "J", SiDerived))?;
    for prefix in [SiPrefix::Kilo, SiPrefix::Mega, SiPrefix::Giga] {
        catalog.derive_prefixed(&j, prefix)?;
    }
    let wh = catalog.derive_linear(&j, 3600.0, def(ENERGY, "Wh", "watt-hour", "Wh", SiAccepted))?;
    catalog.derive_prefixed(&wh, SiPrefix::Kilo)?;
    catalog.derive_prefixed(&wh, SiPrefix::Mega)?;
    let cal = catalog.derive_linear(&j, 4.184, def(ENERGY, "cal", "calorie", "cal", Other))?;
    catalog.derive_prefixed(&cal, SiPrefix::Kilo)?;
    catalog.derive_linear(&j, 1.602_176_634e-19, def(ENERGY, "eV", "electronvolt", "eV", Other))?;
    catalog.compose(ENERGY, &[(&b.g, 1), (&b.cm, 2), (&b.s, -2)], def(ENERGY, "erg", "erg", "erg", Cgs))?;
    catalog.compose(ENERGY, &[(&lbf, 1), (&b.ft, 1)], def(ENERGY, "ft.lbf", "foot-pound", "ft.lbf", Imperial))?;

    catalog.register_family(TORQUE, "kgm2/s2", def(TORQUE, "N.m", "newton meter", "N.m", SiDerived))?;
    catalog.compose(TORQUE, &[(&kgf, 1), (&b.m, 1)], def(TORQUE, "kgf.m", "meter kilogram-force", "kgf.m", Other))?;
    catalog.compose(TORQUE, &[(&lbf, 1), (&b.ft, 1)], def(TORQUE, "lbf.ft", "pound-foot", "lbf.ft", Imperial))?;

    let w = catalog.register_family(POWER, "kgm2/s3", def(POWER, "W", "watt", "W", SiDerived))?;
    for prefix in [SiPrefix::Milli, SiPrefix::Kilo, SiPrefix::Mega, SiPrefix::Giga] {
        catalog.derive_prefixed(&w, prefix)?;
    }
    catalog.derive_linear(&w, 735.498_75, def(POWER, "hp_M", "horsepower (metric)", "hp(M)", Other))?;
    catalog.derive_linear(&w, 745.699_871_582_270_2, def(POWER, "hp", "horsepower (mechanical)", "hp", Imperial))?;
    catalog.compose(POWER, &[(&lbf, 1), (&b.ft, 1), (&b.s, -1)], def(POWER, "ft.lbf/s", "foot-pound per second", "ft.lbf/s", Imperial))?;

    let pa = catalog.register_family(PRESSURE, "kg/ms2", def(PRESSURE, "Pa", "pascal", "Pa", SiDerived))?;
    for prefix in [SiPrefix::Hecto, SiPrefix::Kilo, SiPrefix::Mega] {
        catalog.derive_prefixed(&pa, prefix)?;
    }
    let bar = catalog.derive_linear(&pa, 1e5, def(PRESSURE, "bar", "bar", "bar", Other))?;
    catalog.derive_prefixed(&bar, SiPrefix::Milli)?;
    let atm = catalog.derive_linear(&pa, 101_325.0, def(PRESSURE, "atm", "atmosphere (standard)", "atm", Other))?;
    catalog.derive_linear(&atm, 1.0 / 760.0, def(PRESSURE, "Torr", "torr", "Torr", Other))?;
    catalog.derive_linear(&pa, 133.322_387_415, def(PRESSURE, "mmHg", "millimeter of mercury", "mmHg", Other))?;
    catalog.compose(PRESSURE, &[(&lbf, 1), (&b.inch, -2)], def(PRESSURE, "psi", "pound per square inch", "psi", Imperial))?;

    catalog.register_family(DENSITY, "kg/m3", def(DENSITY, "kg/m3", "kilogram per cubic meter", "kg/m³", SiDerived))?;
    catalog.compose(DENSITY, &[(&b.g, 1), (&b.cm, -3)], def(DENSITY, "g/cm3", "gram per cubic centimeter", "g/cm³", SiDerived))?;
    catalog.compose(DENSITY, &[(&b.lb, 1), (&b.ft, -3)], def(DENSITY, "lb/ft3", "pound per cubic foot", "lb/ft³", Imperial))?;

    catalog.register_family(FLOW_VOLUME, "m3/s", def(FLOW_VOLUME, "m3/s", "cubic meter per second", "m³/s", SiDerived))?;
    let liter = catalog.unit(VOLUME, "L")?;
    let gal = catalog.unit(VOLUME, "gal_US")?;
    catalog.compose(FLOW_VOLUME, &[(&b.m, 3), (&b.h, -1)], def(FLOW_VOLUME, "m3/h", "cubic meter per hour", "m³/h", SiAccepted))?;
    catalog.compose(FLOW_VOLUME, &[(&liter, 1), (&b.s, -1)], def(FLOW_VOLUME, "L/s", "liter per second", "L/s", SiAccepted))?;
    catalog.compose(FLOW_VOLUME, &[(&liter, 1), (&b.min, -1)], def(FLOW_VOLUME, "L/min", "liter per minute", "L/min", SiAccepted))?;
    catalog.compose(FLOW_VOLUME, &[(&gal, 1), (&b.min, -1)], def(FLOW_VOLUME, "gal/min", "gallon (US) per minute", "gal/min", UsCustomary))?;

    catalog.register_family(FLOW_MASS, "kg/s", def(FLOW_MASS, "kg/s", "kilogram per second", "kg/s", SiDerived))?;
    catalog.compose(FLOW_MASS, &[(&b.kg, 1), (&b.h, -1)], def(FLOW_MASS, "kg/h", "kilogram per hour", "kg/h", SiAccepted))?;
    catalog.compose(FLOW_MASS, &[(&b.lb, 1), (&b.s, -1)], def(FLOW_MASS, "lb/s", "pound per second", "lb/s", Imperial))?;
    Ok(())
}

// ============================================================================
// Electrical
// ============================================================================

fn electrical(catalog: &Catalog) -> Result<()> {
    let a = catalog.register_family(ELECTRICAL_CURRENT, "A", def(ELECTRICAL_CURRENT, "A", "ampere", "A", SiBase))?;
    let ma = catalog.derive_prefixed(&a, SiPrefix::Milli)?;
    catalog.derive_prefixed(&a, SiPrefix::Micro)?;
    catalog.derive_prefixed(&a, SiPrefix::Kilo)?;

    let h = catalog.unit(DURATION, "h")?;
    catalog.register_family(ELECTRICAL_CHARGE, "sA", def(ELECTRICAL_CHARGE, "C", "coulomb", "C", SiDerived))?;
    catalog.compose(ELECTRICAL_CHARGE, &[(&a, 1), (&h, 1)], def(ELECTRICAL_CHARGE, "Ah", "ampere-hour", "Ah", Other))?;
    catalog.compose(ELECTRICAL_CHARGE, &[(&ma, 1), (&h, 1)], def(ELECTRICAL_CHARGE, "mAh", "milliampere-hour", "mAh", Other))?;

    let v = catalog.register_family(ELECTRICAL_POTENTIAL, "kgm2/s3A", def(ELECTRICAL_POTENTIAL, "V", "volt", "V", SiDerived))?;
    for prefix in [SiPrefix::Micro, SiPrefix::Milli, SiPrefix::Kilo, SiPrefix::Mega] {
        catalog.derive_prefixed(&v, prefix)?;
    }

    let ohm = catalog.register_family(
        ELECTRICAL_RESISTANCE,
        "kgm2/s3A2",
        def(ELECTRICAL_RESISTANCE, "ohm", "ohm", "Ω", SiDerived),
    )?;
    for prefix in [SiPrefix::Milli, SiPrefix::Kilo, SiPrefix::Mega] {
        catalog.derive_prefixed(&ohm, prefix)?;
    }
    Ok(())
}

// ============================================================================
// Temperature
// ============================================================================

fn thermal(catalog: &Catalog) -> Result<()> {
    let k = catalog.register_family(TEMPERATURE, "K", def(TEMPERATURE, "K", "kelvin", "K", SiBase))?;
    let dc = catalog.derive_linear(&k, 1.0, def(TEMPERATURE, "degC", "degree Celsius", "°C", SiDerived))?;
    let df = catalog.derive_linear(&k, 5.0 / 9.0, def(TEMPERATURE, "degF", "degree Fahrenheit", "°F", Imperial))?;
    let dr = catalog.derive_linear(&k, 5.0 / 9.0, def(TEMPERATURE, "degR", "degree Rankine", "°R", Imperial))?;

    catalog.register_absolute_family(ABSOLUTE_TEMPERATURE, TEMPERATURE, def(ABSOLUTE_TEMPERATURE, "K", "kelvin", "K", SiBase))?;
    catalog.derive_absolute(ABSOLUTE_TEMPERATURE, 1.0, 273.15, &dc, def(ABSOLUTE_TEMPERATURE, "degC", "degree Celsius", "°C", SiDerived))?;
    catalog.derive_absolute(
        ABSOLUTE_TEMPERATURE,
        5.0 / 9.0,
        459.67 * 5.0 / 9.0,
        &df,
        def(ABSOLUTE_TEMPERATURE, "degF", "degree Fahrenheit", "°F", Imperial),
    )?;
    catalog.derive_absolute(ABSOLUTE_TEMPERATURE, 5.0 / 9.0, 0.0, &dr, def(ABSOLUTE_TEMPERATURE, "degR", "degree Rankine", "°R", Imperial))?;
    Ok(())
}

// ============================================================================
// Angle, Direction, SolidAngle
// ============================================================================

fn angles(catalog: &Catalog) -> Result<()> {
    let rad = catalog.register_family(ANGLE, "rad", def(ANGLE, "rad", "radian", "rad", SiDerived))?;
    let deg = catalog.derive_linear(&rad, PI / 180.0, def(ANGLE, "deg", "degree", "°", Other))?;
    let arcmin = catalog.derive_linear(&deg, 1.0 / 60.0, def(ANGLE, "arcmin", "arcminute", "'", Other))?;
    catalog.derive_linear(&arcmin, 1.0 / 60.0, def(ANGLE, "arcsec", "arcsecond", "\"", Other))?;
    catalog.derive_linear(&rad, PI / 200.0, def(ANGLE, "grad", "gradian", "grad", Other))?;
    catalog.derive_custom(ANGLE, Scale::grade(0.01)?, def(ANGLE, "percent", "percent slope", "%", Other))?;

    catalog.register_absolute_family(DIRECTION, ANGLE, def(DIRECTION, "rad_E", "radian (east)", "rad(E)", SiDerived))?;
    catalog.derive_absolute(DIRECTION, PI / 180.0, 0.0, &deg, def(DIRECTION, "deg_E", "degree (east)", "°(E)", Other))?;
    catalog.derive_absolute(DIRECTION, 1.0, PI / 2.0, &rad, def(DIRECTION, "rad_N", "radian (north)", "rad(N)", SiDerived))?;
    catalog.derive_absolute(DIRECTION, PI / 180.0, PI / 2.0, &deg, def(DIRECTION, "deg_N", "degree (north)", "°(N)", Other))?;

    let sr = catalog.register_family(SOLID_ANGLE, "sr", def(SOLID_ANGLE, "sr", "steradian", "sr", SiDerived))?;
    catalog.derive_linear(&sr, (PI / 180.0) * (PI / 180.0), def(SOLID_ANGLE, "deg2", "square degree", "°²", Other))?;
    Ok(())
}
