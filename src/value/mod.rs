//! Scalars and vectors bound to units.
//!
//! Values are kept as standard values (the family's standard unit) next to the
//! unit they are displayed in. Addition and subtraction follow the
//! absolute/relative rules in [`combine`]; multiplication and division ask the
//! [`Catalog`](crate::Catalog) for the result family.

pub mod math;
pub mod scalar;
pub mod storage;
pub mod vector;

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::unit::Unit;
use crate::{Error, Result};

pub use math::MathFn;
pub use scalar::Scalar;
pub use storage::{SparseData, VectorData};
pub use vector::Vector;

// ============================================================================
// Element precision
// ============================================================================

/// Floating-point element type of scalars and vectors.
pub trait Element: Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn to_double(self) -> f64;
    fn from_double(value: f64) -> Self;
}

impl Element for f64 {
    fn to_double(self) -> f64 { self }
    fn from_double(value: f64) -> Self { value }
}

impl Element for f32 {
    fn to_double(self) -> f64 { self as f64 }
    fn from_double(value: f64) -> Self { value as f32 }
}

// ============================================================================
// Tags and flags
// ============================================================================

/// Whether a value is a point (absolute) or a difference (relative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Absolute,
    Relative,
}

impl Tag {
    pub fn of(unit: &Unit) -> Self {
        if unit.is_absolute() { Tag::Absolute } else { Tag::Relative }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Absolute => f.write_str("absolute"),
            Tag::Relative => f.write_str("relative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    Dense,
    Sparse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutability {
    Mutable,
    Immutable,
}

// ============================================================================
// Addition and subtraction rules
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Plus,
    Minus,
}

impl AddOp {
    pub fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            AddOp::Plus => a + b,
            AddOp::Minus => a - b,
        }
    }
}

/// How to combine two operands.
#[derive(Debug, Clone)]
pub enum Combination {
    /// Combine display values; the result is displayed in this unit.
    Fast(Unit),
    /// Combine standard values; the result is in this (standard) unit.
    Slow(Unit),
}

impl Combination {
    pub fn unit(&self) -> &Unit {
        match self {
            Combination::Fast(unit) | Combination::Slow(unit) => unit,
        }
    }
}

/// Decide the result of `left op right`.
///
/// | left | op | right | result |
/// |------|----|-------|--------|
/// | Rel  | ±  | Rel   | Rel    |
/// | Abs  | ±  | Rel   | Abs    |
/// | Rel  | +  | Abs   | Abs    |
/// | Abs  | −  | Abs   | Rel    |
///
/// `Abs + Abs` and `Rel − Abs` are usage errors, as is mixing unrelated families.
pub fn combine(left: &Unit, op: AddOp, right: &Unit) -> Result<Combination> {
    match (left.relative_unit(), right.relative_unit()) {
        (None, None) => {
            same_family(left, right)?;
            Ok(if left.same_as(right) {
                Combination::Fast(left.clone())
            } else {
                Combination::Slow(left.standard_unit())
            })
        }
        (Some(paired), None) => {
            paired_family(left, paired, right)?;
            Ok(if right.same_as(paired) {
                Combination::Fast(left.clone())
            } else {
                Combination::Slow(left.standard_unit())
            })
        }
        (None, Some(paired)) => {
            if op == AddOp::Minus {
                return Err(Error::UsageError(format!(
                    "cannot subtract absolute {} from relative {}",
                    right.family(),
                    left.family()
                )));
            }
            paired_family(right, paired, left)?;
            Ok(if left.same_as(paired) {
                Combination::Fast(right.clone())
            } else {
                Combination::Slow(right.standard_unit())
            })
        }
        (Some(paired), Some(_)) => {
            if op == AddOp::Plus {
                return Err(Error::UsageError(format!(
                    "cannot add two absolute {} values",
                    left.family()
                )));
            }
            same_family(left, right)?;
            Ok(if left.same_as(right) {
                Combination::Fast(paired.clone())
            } else {
                Combination::Slow(paired.standard_unit())
            })
        }
    }
}

pub(crate) fn same_family(left: &Unit, right: &Unit) -> Result<()> {
    if left.family() != right.family() {
        return Err(incompatible(left, right));
    }
    Ok(())
}

fn paired_family(absolute: &Unit, paired: &Unit, relative: &Unit) -> Result<()> {
    if paired.family() != relative.family() {
        return Err(incompatible(absolute, relative));
    }
    Ok(())
}

pub(crate) fn incompatible(left: &Unit, right: &Unit) -> Error {
    Error::IncompatibleUnits {
        left: format!("{} ({})", left.id(), left.family()),
        right: format!("{} ({})", right.id(), right.family()),
    }
}
