//! Decimal SI prefixes and the unit ids, names and factors they produce.

/// Decimal SI prefixes, yocto through yotta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl SiPrefix {
    pub const ALL: [SiPrefix; 20] = [
        SiPrefix::Yocto, SiPrefix::Zepto, SiPrefix::Atto, SiPrefix::Femto,
        SiPrefix::Pico, SiPrefix::Nano, SiPrefix::Micro, SiPrefix::Milli,
        SiPrefix::Centi, SiPrefix::Deci, SiPrefix::Deca, SiPrefix::Hecto,
        SiPrefix::Kilo, SiPrefix::Mega, SiPrefix::Giga, SiPrefix::Tera,
        SiPrefix::Peta, SiPrefix::Exa, SiPrefix::Zetta, SiPrefix::Yotta,
    ];

    pub fn exponent(self) -> i32 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            SiPrefix::Yocto => 1e-24,
            SiPrefix::Zepto => 1e-21,
            SiPrefix::Atto => 1e-18,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Deci => 1e-1,
            SiPrefix::Deca => 1e1,
            SiPrefix::Hecto => 1e2,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Mega => 1e6,
            SiPrefix::Giga => 1e9,
            SiPrefix::Tera => 1e12,
            SiPrefix::Peta => 1e15,
            SiPrefix::Exa => 1e18,
            SiPrefix::Zetta => 1e21,
            SiPrefix::Yotta => 1e24,
        }
    }

    /// Abbreviation prepended to a unit's abbreviation (`k`, `μ`, `da`).
    pub fn symbol(self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "μ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    /// Name prepended to a unit's name (`kilo` + `meter`).
    pub fn name(self) -> &'static str {
        match self {
            SiPrefix::Yocto => "yocto",
            SiPrefix::Zepto => "zepto",
            SiPrefix::Atto => "atto",
            SiPrefix::Femto => "femto",
            SiPrefix::Pico => "pico",
            SiPrefix::Nano => "nano",
            SiPrefix::Micro => "micro",
            SiPrefix::Milli => "milli",
            SiPrefix::Centi => "centi",
            SiPrefix::Deci => "deci",
            SiPrefix::Deca => "deca",
            SiPrefix::Hecto => "hecto",
            SiPrefix::Kilo => "kilo",
            SiPrefix::Mega => "mega",
            SiPrefix::Giga => "giga",
            SiPrefix::Tera => "tera",
            SiPrefix::Peta => "peta",
            SiPrefix::Exa => "exa",
            SiPrefix::Zetta => "zetta",
            SiPrefix::Yotta => "yotta",
        }
    }

    /// Id prefix; ASCII so ids stay typeable (`mu` for micro).
    pub fn id(self) -> &'static str {
        match self {
            SiPrefix::Micro => "mu",
            other => other.symbol(),
        }
    }
}
