//! # quantities-rs: physical quantities with units
//!
//! Scalars and vectors of measured values that carry their unit, checked
//! against SI dimensions.
//!
//! ## Design Principles
//!
//! 1. **Explicit catalog**: every family and unit lives in a [`Catalog`] value
//! 2. **Standard storage**: values are held in the family's standard unit and
//!    converted only at the edges
//! 3. **Tags at the boundary**: absolute and relative values are distinguished
//!    by their unit and checked when operands meet
//! 4. **Static operator table**: [`OPERATIONS`] maps family pairs to result
//!    families
//!
//! ## Quick Start
//!
//! ```rust
//! use quantities::{Catalog, Scalar};
//!
//! # fn example() -> quantities::Result<()> {
//! let catalog = Catalog::standard()?;
//! let m = catalog.unit("Length", "m")?;
//! let area = Scalar::new(3.0, &m).multiply_by(&Scalar::new(2.0, &m), &catalog)?;
//! assert_eq!(area.family(), "Area");
//! assert_eq!(area.standard(), 6.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dimension`] | SI exponent vectors and signature parsing |
//! | [`unit`] | Scales, prefixes, units and localization |
//! | [`catalog`] | Families, built-in units, money |
//! | [`ops`] | The multiply/divide operator table |
//! | [`value`] | Scalars, vectors and their storage |

// ============================================================================
// Modules
// ============================================================================

pub mod catalog;
pub mod dimension;
pub mod ops;
pub mod unit;
pub mod value;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, CatalogConfig, CurrencyProvider, Family, FamilyKind, FixedCurrencies};
pub use dimension::{BaseDimension, SiDimensions};
pub use ops::{Op, Operation, OPERATIONS};
pub use unit::{Localizer, Scale, SiPrefix, StaticLocalizer, Unit, UnitDef, UnitKind, UnitSystem};
pub use value::{Element, MathFn, Mutability, Scalar, StorageType, Tag, Vector};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Signature syntax error in {signature:?} at position {position}: {message}")]
    SyntaxError { signature: String, position: usize, message: String },

    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("Incompatible units: {left} and {right}")]
    IncompatibleUnits { left: String, right: String },

    #[error("Dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch { context: String, expected: String, got: String },

    #[error("Unknown family: {0}")]
    UnknownFamily(String),

    #[error("Unknown unit {unit:?} in family {family}")]
    UnknownUnit { family: String, unit: String },

    #[error("Registration conflict: {0}")]
    RegistrationConflict(String),
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: signatures, scale parameters, config.
    Format,
    /// The operation is undefined for these values.
    Domain,
    /// The API was used in a way the values or units do not allow.
    Usage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SyntaxError { .. } | Error::InvalidScale(_) | Error::Config(_) => ErrorKind::Format,
            Error::DomainError(_) | Error::IndexOutOfBounds { .. } => ErrorKind::Domain,
            Error::UsageError(_)
            | Error::IncompatibleUnits { .. }
            | Error::DimensionMismatch { .. }
            | Error::UnknownFamily(_)
            | Error::UnknownUnit { .. }
            | Error::RegistrationConflict(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
