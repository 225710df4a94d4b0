//! The operator table.
//!
//! Each row states that `left op right` yields `result`, by family name. The
//! catalog consults the table first when picking the family of a product or
//! quotient, which is how `Force × Length` lands in Energy rather than Torque
//! (both are `kgm2/s2`). [`Catalog::validate_operations`](crate::Catalog::validate_operations)
//! checks every row against the registered signatures.

use std::fmt;

use crate::catalog::family::*;
use crate::dimension::SiDimensions;
use crate::Result;

/// A dimension-changing binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Multiply,
    Divide,
}

impl Op {
    pub fn apply(self, left: &SiDimensions, right: &SiDimensions) -> Result<SiDimensions> {
        match self {
            Op::Multiply => left.multiply(right),
            Op::Divide => left.divide(right),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Multiply => f.write_str("×"),
            Op::Divide => f.write_str("/"),
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub left: &'static str,
    pub op: Op,
    pub right: &'static str,
    pub result: &'static str,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.op, self.right, self.result)
    }
}

const fn mul(left: &'static str, right: &'static str, result: &'static str) -> Operation {
    Operation { left, op: Op::Multiply, right, result }
}

const fn div(left: &'static str, right: &'static str, result: &'static str) -> Operation {
    Operation { left, op: Op::Divide, right, result }
}

pub static OPERATIONS: &[Operation] = &[
    // Geometry
    mul(LENGTH, LENGTH, AREA),
    mul(LENGTH, AREA, VOLUME),
    mul(AREA, LENGTH, VOLUME),
    div(AREA, LENGTH, LENGTH),
    div(VOLUME, LENGTH, AREA),
    div(VOLUME, AREA, LENGTH),
    div(LENGTH, LENGTH, DIMENSIONLESS),

    // Kinematics
    div(LENGTH, DURATION, SPEED),
    div(LENGTH, SPEED, DURATION),
    mul(SPEED, DURATION, LENGTH),
    mul(DURATION, SPEED, LENGTH),
    div(SPEED, DURATION, ACCELERATION),
    mul(ACCELERATION, DURATION, SPEED),
    mul(DURATION, ACCELERATION, SPEED),
    mul(FREQUENCY, LENGTH, SPEED),
    mul(LENGTH, FREQUENCY, SPEED),
    div(SPEED, LENGTH, FREQUENCY),
    div(DIMENSIONLESS, DURATION, FREQUENCY),
    mul(FREQUENCY, DURATION, DIMENSIONLESS),
    mul(DURATION, FREQUENCY, DIMENSIONLESS),
    div(DURATION, DURATION, DIMENSIONLESS),

    // Mechanics
    mul(MASS, ACCELERATION, FORCE),
    mul(ACCELERATION, MASS, FORCE),
    div(FORCE, MASS, ACCELERATION),
    div(FORCE, ACCELERATION, MASS),
    mul(FORCE, LENGTH, ENERGY),
    mul(LENGTH, FORCE, ENERGY),
    div(ENERGY, LENGTH, FORCE),
    div(ENERGY, FORCE, LENGTH),
    div(FORCE, AREA, PRESSURE),
    mul(PRESSURE, AREA, FORCE),
    mul(AREA, PRESSURE, FORCE),
    div(ENERGY, VOLUME, PRESSURE),
    div(ENERGY, DURATION, POWER),
    div(ENERGY, POWER, DURATION),
    mul(POWER, DURATION, ENERGY),
    mul(DURATION, POWER, ENERGY),
    mul(FORCE, SPEED, POWER),
    mul(SPEED, FORCE, POWER),
    div(POWER, SPEED, FORCE),
    div(POWER, FORCE, SPEED),
    div(MASS, MASS, DIMENSIONLESS),

    // Flow and density
    div(MASS, VOLUME, DENSITY),
    div(MASS, DENSITY, VOLUME),
    mul(DENSITY, VOLUME, MASS),
    mul(VOLUME, DENSITY, MASS),
    div(VOLUME, DURATION, FLOW_VOLUME),
    mul(FLOW_VOLUME, DURATION, VOLUME),
    mul(DURATION, FLOW_VOLUME, VOLUME),
    div(MASS, DURATION, FLOW_MASS),
    mul(FLOW_MASS, DURATION, MASS),
    mul(DURATION, FLOW_MASS, MASS),

    // Electricity
    mul(ELECTRICAL_CURRENT, DURATION, ELECTRICAL_CHARGE),
    mul(DURATION, ELECTRICAL_CURRENT, ELECTRICAL_CHARGE),
    div(ELECTRICAL_CHARGE, DURATION, ELECTRICAL_CURRENT),
    div(POWER, ELECTRICAL_CURRENT, ELECTRICAL_POTENTIAL),
    div(POWER, ELECTRICAL_POTENTIAL, ELECTRICAL_CURRENT),
    mul(ELECTRICAL_POTENTIAL, ELECTRICAL_CURRENT, POWER),
    mul(ELECTRICAL_CURRENT, ELECTRICAL_POTENTIAL, POWER),
    div(ELECTRICAL_POTENTIAL, ELECTRICAL_CURRENT, ELECTRICAL_RESISTANCE),
    div(ELECTRICAL_POTENTIAL, ELECTRICAL_RESISTANCE, ELECTRICAL_CURRENT),
    mul(ELECTRICAL_CURRENT, ELECTRICAL_RESISTANCE, ELECTRICAL_POTENTIAL),
    mul(ELECTRICAL_RESISTANCE, ELECTRICAL_CURRENT, ELECTRICAL_POTENTIAL),
    div(ENERGY, ELECTRICAL_CHARGE, ELECTRICAL_POTENTIAL),

    // Money
    div(MONEY, MONEY, DIMENSIONLESS),
    div(MONEY, LENGTH, MONEY_PER_LENGTH),
    div(MONEY, DURATION, MONEY_PER_DURATION),
    div(MONEY, MASS, MONEY_PER_MASS),
    div(MONEY, ENERGY, MONEY_PER_ENERGY),
    div(MONEY, AREA, MONEY_PER_AREA),
    div(MONEY, VOLUME, MONEY_PER_VOLUME),
    div(MONEY, MONEY_PER_LENGTH, LENGTH),
    mul(MONEY_PER_LENGTH, LENGTH, MONEY),
    mul(LENGTH, MONEY_PER_LENGTH, MONEY),
    mul(MONEY_PER_DURATION, DURATION, MONEY),
    mul(DURATION, MONEY_PER_DURATION, MONEY),
    mul(MONEY_PER_MASS, MASS, MONEY),
    mul(MASS, MONEY_PER_MASS, MONEY),
    mul(MONEY_PER_ENERGY, ENERGY, MONEY),
    mul(ENERGY, MONEY_PER_ENERGY, MONEY),
    mul(MONEY_PER_AREA, AREA, MONEY),
    mul(AREA, MONEY_PER_AREA, MONEY),
    mul(MONEY_PER_VOLUME, VOLUME, MONEY),
    mul(VOLUME, MONEY_PER_VOLUME, MONEY),
];

/// Find the row for `left op right`.
pub fn lookup(left: &str, op: Op, right: &str) -> Option<&'static Operation> {
    OPERATIONS
        .iter()
        .find(|row| row.op == op && row.left == left && row.right == right)
}
