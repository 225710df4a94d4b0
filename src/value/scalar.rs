//! A single value bound to a unit.

use std::cmp::Ordering;
use std::fmt;

use crate::catalog::Catalog;
use crate::dimension::SiDimensions;
use crate::ops::Op;
use crate::unit::Unit;
use crate::{Error, Result};
use super::{combine, incompatible, same_family, AddOp, Combination, Element, MathFn, Tag};

/// An immutable (standard value, display unit) pair.
#[derive(Clone)]
pub struct Scalar<T: Element = f64> {
    standard: T,
    unit: Unit,
}

macro_rules! math_methods {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> Self {
                self.apply(MathFn::$f)
            }
        )*
    };
}

impl<T: Element> Scalar<T> {
    /// A value expressed in `unit`.
    pub fn new(value: T, unit: &Unit) -> Self {
        Self {
            standard: T::from_double(unit.to_standard(value.to_double())),
            unit: unit.clone(),
        }
    }

    /// A standard value, displayed in `unit`.
    pub fn from_standard(standard: T, unit: &Unit) -> Self {
        Self { standard, unit: unit.clone() }
    }

    pub fn zero(unit: &Unit) -> Self {
        Self::new(T::zero(), unit)
    }

    pub fn standard(&self) -> T {
        self.standard
    }

    /// The value in the display unit.
    pub fn in_unit(&self) -> T {
        T::from_double(self.unit.from_standard(self.standard.to_double()))
    }

    /// The value expressed in another unit of the same family.
    pub fn in_unit_of(&self, unit: &Unit) -> Result<T> {
        same_family(&self.unit, unit)?;
        Ok(T::from_double(unit.from_standard(self.standard.to_double())))
    }

    /// The same quantity displayed in another unit of the same family.
    pub fn express_as(&self, unit: &Unit) -> Result<Self> {
        same_family(&self.unit, unit)?;
        Ok(Self::from_standard(self.standard, unit))
    }

    pub fn unit(&self) -> &Unit { &self.unit }
    pub fn tag(&self) -> Tag { Tag::of(&self.unit) }
    pub fn family(&self) -> &str { self.unit.family() }
    pub fn dimensions(&self) -> SiDimensions { self.unit.dimensions() }

    // ========================================================================
    // Addition and subtraction
    // ========================================================================

    pub fn plus(&self, other: &Scalar<T>) -> Result<Self> {
        self.add_sub(AddOp::Plus, other)
    }

    pub fn minus(&self, other: &Scalar<T>) -> Result<Self> {
        self.add_sub(AddOp::Minus, other)
    }

    fn add_sub(&self, op: AddOp, other: &Scalar<T>) -> Result<Self> {
        Ok(match combine(&self.unit, op, &other.unit)? {
            Combination::Fast(unit) => Self::new(op.apply(self.in_unit(), other.in_unit()), &unit),
            Combination::Slow(unit) => Self::from_standard(op.apply(self.standard, other.standard), &unit),
        })
    }

    // ========================================================================
    // Multiplication and division
    // ========================================================================

    /// Product of two relative quantities, in the standard unit of the family
    /// the catalog picks for it.
    pub fn multiply_by(&self, other: &Scalar<T>, catalog: &Catalog) -> Result<Scalar<T>> {
        self.mul_div(Op::Multiply, other, catalog)
    }

    pub fn divide_by(&self, other: &Scalar<T>, catalog: &Catalog) -> Result<Scalar<T>> {
        self.mul_div(Op::Divide, other, catalog)
    }

    fn mul_div(&self, op: Op, other: &Scalar<T>, catalog: &Catalog) -> Result<Scalar<T>> {
        if self.unit.is_absolute() || other.unit.is_absolute() {
            return Err(Error::UsageError(format!(
                "cannot {op:?} absolute values ({} {op} {})",
                self.family(),
                other.family()
            )));
        }
        let unit = catalog.result_unit(&self.unit, op, &other.unit)?;
        let standard = match op {
            Op::Multiply => self.standard * other.standard,
            Op::Divide => self.standard / other.standard,
        };
        Ok(Scalar::from_standard(standard, &unit))
    }

    /// Scale a relative value by a plain number, keeping the unit.
    pub fn times(&self, factor: T) -> Result<Self> {
        self.require_relative("scale")?;
        Ok(Self::new(self.in_unit() * factor, &self.unit))
    }

    pub fn divided(&self, divisor: T) -> Result<Self> {
        self.require_relative("divide")?;
        Ok(Self::new(self.in_unit() / divisor, &self.unit))
    }

    fn require_relative(&self, what: &str) -> Result<()> {
        if self.unit.is_absolute() {
            return Err(Error::UsageError(format!(
                "cannot {what} absolute {} value",
                self.family()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Math
    // ========================================================================

    /// Apply `f` to the display value, keeping the unit.
    pub fn apply(&self, f: MathFn) -> Self {
        Self::new(f.apply(self.in_unit()), &self.unit)
    }

    math_methods! {
        abs => Abs, acos => Acos, asin => Asin, atan => Atan, cbrt => Cbrt,
        ceil => Ceil, cos => Cos, cosh => Cosh, exp => Exp, expm1 => Expm1,
        floor => Floor, log => Log, log10 => Log10, log1p => Log1p, neg => Neg,
        rint => Rint, round => Round, signum => Signum, sin => Sin, sinh => Sinh,
        sqrt => Sqrt, tan => Tan, tanh => Tanh, inv => Inv,
    }

    pub fn pow(&self, exponent: f64) -> Self {
        self.apply(MathFn::Pow(exponent))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `zero + (one − zero) × ratio`, displayed in `zero`'s unit.
    pub fn interpolate(zero: &Scalar<T>, one: &Scalar<T>, ratio: T) -> Result<Self> {
        same_family(&zero.unit, &one.unit)?;
        let standard = zero.standard + (one.standard - zero.standard) * ratio;
        Ok(Self::from_standard(standard, &zero.unit))
    }

    pub fn min(&self, other: &Scalar<T>) -> Result<Self> {
        Ok(if self.compare(other)? == Ordering::Greater { other.clone() } else { self.clone() })
    }

    pub fn max(&self, other: &Scalar<T>) -> Result<Self> {
        Ok(if self.compare(other)? == Ordering::Less { other.clone() } else { self.clone() })
    }

    /// Order by standard value within one family.
    pub fn compare(&self, other: &Scalar<T>) -> Result<Ordering> {
        self.partial_cmp(other).ok_or_else(|| incompatible(&self.unit, &other.unit))
    }
}

impl<T: Element> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        self.unit.family() == other.unit.family() && self.standard == other.standard
    }
}

impl<T: Element> PartialOrd for Scalar<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit.family() != other.unit.family() {
            return None;
        }
        self.standard.partial_cmp(&other.standard)
    }
}

impl<T: Element> fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("standard", &self.standard)
            .field("unit", &self.unit.id())
            .field("family", &self.unit.family())
            .finish()
    }
}

impl<T: Element> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviation = self.unit.abbreviation();
        if abbreviation.is_empty() {
            write!(f, "{}", self.in_unit())
        } else {
            write!(f, "{} {}", self.in_unit(), abbreviation)
        }
    }
}
