//! SI-dimension signatures.
//!
//! A signature is an exponent per base dimension, in the fixed order
//! `rad, sr, kg, m, s, A, K, mol, cd, $`. Signatures are written as compact
//! strings (`"kgm2/s3A2"`) or with separators (`"kg.m2.s-3.A-2"`); both parse to
//! the same [`SiDimensions`], and [`SiDimensions::normalize`] produces the
//! canonical lookup key.

pub mod lexer;

use std::fmt;
use std::str::FromStr;

use lexer::TokenKind;
use crate::{Error, Result};

/// Number of tracked base dimensions.
pub const DIMENSION_COUNT: usize = 10;

/// A base dimension. Declaration order is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    Angle,
    SolidAngle,
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Money,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; DIMENSION_COUNT] = [
        BaseDimension::Angle,
        BaseDimension::SolidAngle,
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
        BaseDimension::Money,
    ];

    /// Position in the exponent array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Signature symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Angle => "rad",
            BaseDimension::SolidAngle => "sr",
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::AmountOfSubstance => "mol",
            BaseDimension::LuminousIntensity => "cd",
            BaseDimension::Money => "$",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Exponents over the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SiDimensions {
    exponents: [i32; DIMENSION_COUNT],
}

impl SiDimensions {
    /// The dimensionless signature `"1"`.
    pub const DIMENSIONLESS: SiDimensions = SiDimensions { exponents: [0; DIMENSION_COUNT] };

    pub fn dimensionless() -> Self {
        Self::DIMENSIONLESS
    }

    /// A single base dimension to the first power.
    pub fn of(dim: BaseDimension) -> Self {
        Self::DIMENSIONLESS.with(dim, 1)
    }

    /// Copy with one exponent replaced.
    pub fn with(mut self, dim: BaseDimension, exponent: i32) -> Self {
        self.exponents[dim.index()] = exponent;
        self
    }

    pub fn from_exponents(exponents: [i32; DIMENSION_COUNT]) -> Self {
        Self { exponents }
    }

    pub fn exponents(&self) -> &[i32; DIMENSION_COUNT] {
        &self.exponents
    }

    pub fn exponent(&self, dim: BaseDimension) -> i32 {
        self.exponents[dim.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Parse a signature string.
    ///
    /// Symbols may carry a signed integer exponent; repeated symbols merge. One `/`
    /// separates numerator from denominator, and denominator exponents are negated.
    /// `"1"` and `""` are dimensionless; `"1/s"` is accepted.
    pub fn parse(signature: &str) -> Result<Self> {
        let tokens = lexer::tokenize(signature)?;
        let mut dims = Self::DIMENSIONLESS;
        let mut sign = 1;
        let mut in_denominator = false;
        let mut section_empty = true;

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            match token.kind {
                TokenKind::Symbol(dim) => {
                    let mut exponent = 1;
                    if let Some(next) = tokens.get(i + 1) {
                        if let TokenKind::Integer(n) = next.kind {
                            exponent = n;
                            i += 1;
                        }
                    }
                    let slot = &mut dims.exponents[dim.index()];
                    let merged = exponent.checked_mul(sign).and_then(|e| slot.checked_add(e));
                    *slot = merged.ok_or_else(|| Error::SyntaxError {
                        signature: signature.to_string(),
                        position: token.span.start,
                        message: format!("exponent of '{dim}' overflows"),
                    })?;
                    section_empty = false;
                }
                // "1", "1/s"
                TokenKind::Integer(1) if section_empty => {
                    section_empty = false;
                }
                TokenKind::Integer(n) => {
                    return Err(Error::SyntaxError {
                        signature: signature.to_string(),
                        position: token.span.start,
                        message: format!("exponent {n} does not follow a dimension symbol"),
                    });
                }
                TokenKind::Slash => {
                    if in_denominator {
                        return Err(Error::SyntaxError {
                            signature: signature.to_string(),
                            position: token.span.start,
                            message: "more than one '/'".into(),
                        });
                    }
                    if section_empty {
                        return Err(Error::SyntaxError {
                            signature: signature.to_string(),
                            position: token.span.start,
                            message: "'/' without a numerator (use \"1/...\")".into(),
                        });
                    }
                    in_denominator = true;
                    sign = -1;
                    section_empty = true;
                }
                TokenKind::Eof => {
                    if in_denominator && section_empty {
                        return Err(Error::SyntaxError {
                            signature: signature.to_string(),
                            position: token.span.start,
                            message: "empty denominator".into(),
                        });
                    }
                    break;
                }
            }
            i += 1;
        }

        Ok(dims)
    }

    /// Canonical lookup key: merged, zero-free, canonically ordered.
    pub fn normalize(&self) -> String {
        let mut numerator = String::new();
        let mut denominator = String::new();
        for dim in BaseDimension::ALL {
            let e = self.exponent(dim);
            let target = match e.cmp(&0) {
                std::cmp::Ordering::Greater => &mut numerator,
                std::cmp::Ordering::Less => &mut denominator,
                std::cmp::Ordering::Equal => continue,
            };
            target.push_str(dim.symbol());
            if e.abs() != 1 {
                target.push_str(&e.abs().to_string());
            }
        }
        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => "1".to_string(),
            (false, true) => numerator,
            (true, false) => format!("1/{denominator}"),
            (false, false) => format!("{numerator}/{denominator}"),
        }
    }

    /// Elementwise sum of exponents.
    pub fn multiply(&self, other: &SiDimensions) -> Result<SiDimensions> {
        self.combine(other, "×", i32::checked_add)
    }

    /// Elementwise difference of exponents.
    pub fn divide(&self, other: &SiDimensions) -> Result<SiDimensions> {
        self.combine(other, "/", i32::checked_sub)
    }

    pub fn invert(&self) -> Result<SiDimensions> {
        self.pow(-1)
    }

    pub fn pow(&self, n: i32) -> Result<SiDimensions> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = e
                .checked_mul(n)
                .ok_or_else(|| Error::UsageError(format!("exponent overflow in ({self})^{n}")))?;
        }
        Ok(SiDimensions { exponents })
    }

    fn combine(&self, other: &SiDimensions, op: &str, f: fn(i32, i32) -> Option<i32>) -> Result<SiDimensions> {
        let mut exponents = self.exponents;
        for (e, &o) in exponents.iter_mut().zip(&other.exponents) {
            *e = f(*e, o)
                .ok_or_else(|| Error::UsageError(format!("exponent overflow in {self} {op} {other}")))?;
        }
        Ok(SiDimensions { exponents })
    }
}

impl fmt::Display for SiDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

impl FromStr for SiDimensions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("kgm2/s3A2", "kgm2/s3A2")]
    #[case("kg.m2.s-3.A-2", "kgm2/s3A2")]
    #[case("m2kg/A2s3", "kgm2/s3A2")]
    #[case("m.m", "m2")]
    #[case("m^2", "m2")]
    #[case("kg m / s2", "kgm/s2")]
    #[case("1/s", "1/s")]
    #[case("s-1", "1/s")]
    #[case("1", "1")]
    #[case("", "1")]
    #[case("m/m", "1")]
    #[case("$/m3", "$/m3")]
    #[case("rad/s", "rad/s")]
    #[case("molcd", "molcd")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(SiDimensions::parse(input).unwrap().normalize(), expected);
    }

    #[test]
    fn test_canonical_form_reparses() {
        for sig in ["kgm2/s3A2", "1/s", "radsrkgmsAKmolcd$", "kg/m3", "1"] {
            let dims = SiDimensions::parse(sig).unwrap();
            assert_eq!(SiDimensions::parse(&dims.normalize()).unwrap(), dims);
        }
    }

    #[test]
    fn test_denominator_negates() {
        let dims = SiDimensions::parse("kgm2/s3A2").unwrap();
        assert_eq!(dims.exponent(BaseDimension::Mass), 1);
        assert_eq!(dims.exponent(BaseDimension::Length), 2);
        assert_eq!(dims.exponent(BaseDimension::Time), -3);
        assert_eq!(dims.exponent(BaseDimension::Current), -2);
    }

    #[test]
    fn test_algebra() {
        let length = SiDimensions::of(BaseDimension::Length);
        let time = SiDimensions::of(BaseDimension::Time);
        assert_eq!(length.multiply(&length).unwrap().normalize(), "m2");
        assert_eq!(length.divide(&time).unwrap().normalize(), "m/s");
        assert_eq!(time.invert().unwrap().normalize(), "1/s");
        assert_eq!(length.pow(3).unwrap().normalize(), "m3");
        assert!(length.divide(&length).unwrap().is_dimensionless());
    }

    #[test]
    fn test_force_times_length_is_energy() {
        let force: SiDimensions = "kgm/s2".parse().unwrap();
        let length: SiDimensions = "m".parse().unwrap();
        let energy: SiDimensions = "kgm2/s2".parse().unwrap();
        assert_eq!(force.multiply(&length).unwrap(), energy);
    }

    #[rstest]
    #[case("m/s/s", 3)]
    #[case("/s", 0)]
    #[case("m/", 2)]
    #[case("2m", 0)]
    #[case("kgq", 2)]
    fn test_malformed(#[case] input: &str, #[case] expected_position: usize) {
        match SiDimensions::parse(input) {
            Err(Error::SyntaxError { position, signature, .. }) => {
                assert_eq!(position, expected_position);
                assert_eq!(signature, input);
            }
            other => panic!("expected syntax error for {input:?}, got {other:?}"),
        }
    }

    #[rstest]
    #[case("m/s-2147483648")]
    #[case("m2147483647m")]
    #[case("s-2147483648s-1")]
    fn test_exponent_overflow_is_syntax_error(#[case] input: &str) {
        let err = SiDimensions::parse(input).unwrap_err();
        assert!(matches!(err, Error::SyntaxError { .. }), "{err:?}");
        assert_eq!(err.kind(), crate::ErrorKind::Format);
    }

    #[rstest]
    #[case::multiply(SiDimensions::parse("m2147483647").unwrap().multiply(&SiDimensions::parse("m").unwrap()))]
    #[case::divide(SiDimensions::parse("s-2147483647").unwrap().divide(&SiDimensions::parse("s2").unwrap()))]
    #[case::pow(SiDimensions::parse("m2147483647").unwrap().pow(2))]
    #[case::invert(SiDimensions::from_exponents([0, 0, 0, i32::MIN, 0, 0, 0, 0, 0, 0]).invert())]
    fn test_algebra_overflow_is_usage_error(#[case] result: Result<SiDimensions>) {
        let err = result.unwrap_err();
        assert!(matches!(err, Error::UsageError(_)), "{err:?}");
    }
}
