//! Conversion between a unit's display value and its family's standard value.

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// A monotonic conversion function.
pub type ConversionFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// How a unit's display value maps onto the standard value of its family.
#[derive(Clone)]
pub enum Scale {
    /// `standard = value × factor`
    Linear { factor: f64 },
    /// `standard = value × factor + offset`
    LinearOffset { factor: f64, offset: f64 },
    /// Arbitrary monotonic pair; only the inverse property is guaranteed.
    Custom(CustomScale),
}

/// A named forward/backward function pair.
///
/// `factor` is the multiplier applied to the display value before `forward`, so
/// custom scales can be chained through reference units like linear ones.
#[derive(Clone)]
pub struct CustomScale {
    label: String,
    factor: f64,
    forward: ConversionFn,
    backward: ConversionFn,
}

impl CustomScale {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Scale {
    /// The standard unit's scale.
    pub fn identity() -> Self {
        Scale::Linear { factor: 1.0 }
    }

    pub fn linear(factor: f64) -> Result<Self> {
        check_factor(factor)?;
        Ok(Scale::Linear { factor })
    }

    pub fn linear_offset(factor: f64, offset: f64) -> Result<Self> {
        check_factor(factor)?;
        if !offset.is_finite() {
            return Err(Error::InvalidScale(format!("offset {offset} is not finite")));
        }
        Ok(Scale::LinearOffset { factor, offset })
    }

    /// A custom scale from a forward (`display → standard`) and backward function.
    pub fn custom<F, B>(label: impl Into<String>, forward: F, backward: B) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        B: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Scale::Custom(CustomScale {
            label: label.into(),
            factor: 1.0,
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        })
    }

    /// Slope scale: `standard = atan(value × factor)` in radians.
    ///
    /// A factor of `0.01` gives percent grade.
    pub fn grade(factor: f64) -> Result<Self> {
        check_factor(factor)?;
        Ok(Scale::Custom(CustomScale {
            label: "grade".into(),
            factor,
            forward: Arc::new(f64::atan),
            backward: Arc::new(f64::tan),
        }))
    }

    pub fn to_standard(&self, value: f64) -> f64 {
        match self {
            Scale::Linear { factor } => value * factor,
            Scale::LinearOffset { factor, offset } => value * factor + offset,
            Scale::Custom(c) => (c.forward)(value * c.factor),
        }
    }

    pub fn from_standard(&self, standard: f64) -> f64 {
        match self {
            Scale::Linear { factor } => standard / factor,
            Scale::LinearOffset { factor, offset } => (standard - offset) / factor,
            Scale::Custom(c) => (c.backward)(standard) / c.factor,
        }
    }

    /// Multiplier relative to the standard unit.
    pub fn factor(&self) -> f64 {
        match self {
            Scale::Linear { factor } | Scale::LinearOffset { factor, .. } => *factor,
            Scale::Custom(c) => c.factor,
        }
    }

    pub fn offset(&self) -> f64 {
        match self {
            Scale::LinearOffset { offset, .. } => *offset,
            _ => 0.0,
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Scale::Linear { .. })
    }

    /// Factor 1, offset 0.
    pub fn is_identity(&self) -> bool {
        match self {
            Scale::Linear { factor } => *factor == 1.0,
            Scale::LinearOffset { factor, offset } => *factor == 1.0 && *offset == 0.0,
            Scale::Custom(_) => false,
        }
    }

    /// The scale of a unit defined as `local_factor` of a unit with this scale.
    pub fn chained(&self, local_factor: f64) -> Result<Self> {
        check_factor(local_factor)?;
        let factor = self.factor() * local_factor;
        check_factor(factor)?;
        Ok(match self {
            Scale::Linear { .. } => Scale::Linear { factor },
            Scale::LinearOffset { offset, .. } => Scale::LinearOffset { factor, offset: *offset },
            Scale::Custom(c) => Scale::Custom(CustomScale { factor, ..c.clone() }),
        })
    }
}

fn check_factor(factor: f64) -> Result<()> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(Error::InvalidScale(format!("factor {factor} must be finite and non-zero")));
    }
    Ok(())
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scale::Linear { factor: a }, Scale::Linear { factor: b }) => a == b,
            (
                Scale::LinearOffset { factor: fa, offset: oa },
                Scale::LinearOffset { factor: fb, offset: ob },
            ) => fa == fb && oa == ob,
            (Scale::Custom(a), Scale::Custom(b)) => a.label == b.label && a.factor == b.factor,
            _ => false,
        }
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Linear { factor } => f.debug_struct("Linear").field("factor", factor).finish(),
            Scale::LinearOffset { factor, offset } => f
                .debug_struct("LinearOffset")
                .field("factor", factor)
                .field("offset", offset)
                .finish(),
            Scale::Custom(c) => f
                .debug_struct("Custom")
                .field("label", &c.label)
                .field("factor", &c.factor)
                .finish_non_exhaustive(),
        }
    }
}
