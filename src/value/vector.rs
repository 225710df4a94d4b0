//! Vectors of values sharing one unit.
//!
//! A [`Vector`] holds standard values in dense or sparse storage behind an
//! `Arc`. [`Vector::mutable`] and [`Vector::immutable`] hand out views on the
//! same buffer; the first mutation through a mutable view copies the buffer if
//! anything else still shares it, so other views never see the change.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::ops::Op;
use crate::unit::Unit;
use crate::{Error, Result};
use super::{
    combine, incompatible, same_family, AddOp, Element, MathFn, Mutability, Scalar, StorageType,
    Tag, VectorData,
};

#[derive(Clone)]
pub struct Vector<T: Element = f64> {
    data: Arc<VectorData<T>>,
    unit: Unit,
    mutability: Mutability,
}

macro_rules! math_methods {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            pub fn $name(&mut self) -> Result<&mut Self> {
                self.apply(MathFn::$f)
            }
        )*
    };
}

impl<T: Element> Vector<T> {
    // ========================================================================
    // Construction (all immutable)
    // ========================================================================

    /// Values expressed in `unit`.
    pub fn new(values: &[T], unit: &Unit, storage: StorageType) -> Self {
        let standard = values.iter().map(|&v| to_standard(unit, v)).collect();
        Self::from_parts(VectorData::new(standard, storage), unit)
    }

    /// Standard values, displayed in `unit`.
    pub fn from_standard(values: &[T], unit: &Unit, storage: StorageType) -> Self {
        Self::from_parts(VectorData::new(values.to_vec(), storage), unit)
    }

    /// `size` elements; indices missing from `values` are zero (in `unit`).
    pub fn from_map(values: &BTreeMap<usize, T>, size: usize, unit: &Unit, storage: StorageType) -> Result<Self> {
        check_keys(values.keys(), size)?;
        let mut dense = vec![T::zero(); size];
        for (&i, &v) in values {
            dense[i] = v;
        }
        Ok(Self::new(&dense, unit, storage))
    }

    /// Displayed in the first scalar's unit; all scalars must share its family
    /// and tag.
    pub fn from_scalars(scalars: &[Scalar<T>], storage: StorageType) -> Result<Self> {
        let first = scalars
            .first()
            .ok_or_else(|| Error::UsageError("cannot build a vector from no scalars".into()))?;
        let unit = first.unit().clone();
        let mut standard = Vec::with_capacity(scalars.len());
        for s in scalars {
            check_compatible(&unit, s.unit())?;
            standard.push(s.standard());
        }
        Ok(Self::from_parts(VectorData::new(standard, storage), &unit))
    }

    /// Like [`Vector::from_scalars`] with unset indices reading as zero.
    pub fn from_scalar_map(scalars: &BTreeMap<usize, Scalar<T>>, size: usize, storage: StorageType) -> Result<Self> {
        let first = scalars
            .values()
            .next()
            .ok_or_else(|| Error::UsageError("cannot build a vector from no scalars".into()))?;
        check_keys(scalars.keys(), size)?;
        let unit = first.unit().clone();
        let zero = to_standard(&unit, T::zero());
        let mut standard = vec![zero; size];
        for (&i, s) in scalars {
            check_compatible(&unit, s.unit())?;
            standard[i] = s.standard();
        }
        Ok(Self::from_parts(VectorData::new(standard, storage), &unit))
    }

    /// `size` zeros in `unit`.
    pub fn zeros(size: usize, unit: &Unit, storage: StorageType) -> Self {
        Self::new(&vec![T::zero(); size], unit, storage)
    }

    fn from_parts(data: VectorData<T>, unit: &Unit) -> Self {
        Self { data: Arc::new(data), unit: unit.clone(), mutability: Mutability::Immutable }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn unit(&self) -> &Unit { &self.unit }
    pub fn tag(&self) -> Tag { Tag::of(&self.unit) }
    pub fn family(&self) -> &str { self.unit.family() }
    pub fn size(&self) -> usize { self.data.size() }
    pub fn storage_type(&self) -> StorageType { self.data.storage_type() }
    pub fn mutability(&self) -> Mutability { self.mutability }
    pub fn is_mutable(&self) -> bool { self.mutability == Mutability::Mutable }
    pub fn data(&self) -> &VectorData<T> { &self.data }

    /// Non-zero standard values.
    pub fn cardinality(&self) -> usize {
        self.data.cardinality()
    }

    /// Sum of the standard values.
    pub fn zsum(&self) -> T {
        self.data.sum()
    }

    pub fn get(&self, index: usize) -> Result<Scalar<T>> {
        Ok(Scalar::from_standard(self.standard(index)?, &self.unit))
    }

    pub fn standard(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.data.get(index))
    }

    pub fn in_unit(&self, index: usize) -> Result<T> {
        Ok(from_standard(&self.unit, self.standard(index)?))
    }

    pub fn values_standard(&self) -> Vec<T> {
        self.data.to_vec()
    }

    pub fn values_in_unit(&self) -> Vec<T> {
        self.data.to_vec().into_iter().map(|v| from_standard(&self.unit, v)).collect()
    }

    /// The elements as scalars in this vector's unit.
    pub fn iter(&self) -> impl Iterator<Item = Scalar<T>> + '_ {
        (0..self.size()).map(move |i| Scalar::from_standard(self.data.get(i), &self.unit))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let size = self.size();
        if index >= size {
            return Err(Error::IndexOutOfBounds { index, size });
        }
        Ok(())
    }

    // ========================================================================
    // Views and conversions
    // ========================================================================

    /// A mutable view sharing this buffer until either side writes.
    pub fn mutable(&self) -> Self {
        Self { mutability: Mutability::Mutable, ..self.clone() }
    }

    pub fn immutable(&self) -> Self {
        Self { mutability: Mutability::Immutable, ..self.clone() }
    }

    pub fn to_dense(&self) -> Self {
        self.with_data(self.data.to_storage(StorageType::Dense))
    }

    pub fn to_sparse(&self) -> Self {
        self.with_data(self.data.to_storage(StorageType::Sparse))
    }

    /// The same values displayed in another unit of the same family.
    pub fn express_as(&self, unit: &Unit) -> Result<Self> {
        check_compatible(&self.unit, unit)?;
        Ok(Self { unit: unit.clone(), ..self.clone() })
    }

    fn with_data(&self, data: VectorData<T>) -> Self {
        Self { data: Arc::new(data), unit: self.unit.clone(), mutability: self.mutability }
    }

    // ========================================================================
    // In-place mutation (mutable views only)
    // ========================================================================

    fn check_mutable(&self) -> Result<()> {
        if self.mutability == Mutability::Immutable {
            return Err(Error::UsageError("cannot modify an immutable vector".into()));
        }
        Ok(())
    }

    fn data_mut(&mut self) -> Result<&mut VectorData<T>> {
        self.check_mutable()?;
        Ok(Arc::make_mut(&mut self.data))
    }

    pub fn set(&mut self, index: usize, value: &Scalar<T>) -> Result<&mut Self> {
        check_compatible(&self.unit, value.unit())?;
        self.set_standard(index, value.standard())
    }

    pub fn set_standard(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.check_mutable()?;
        self.check_index(index)?;
        self.data_mut()?.set(index, value);
        Ok(self)
    }

    pub fn set_in_unit(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let standard = to_standard(&self.unit, value);
        self.set_standard(index, standard)
    }

    /// Set element `index` to `value` expressed in `unit`, which must be
    /// compatible with this vector's unit.
    pub fn set_in_unit_of(&mut self, index: usize, value: T, unit: &Unit) -> Result<&mut Self> {
        check_compatible(&self.unit, unit)?;
        self.set_standard(index, to_standard(unit, value))
    }

    /// Apply `f` to every display value, keeping the unit.
    pub fn apply(&mut self, f: MathFn) -> Result<&mut Self> {
        let unit = self.unit.clone();
        self.data_mut()?
            .map_in_place(|v| to_standard(&unit, f.apply(from_standard(&unit, v))));
        Ok(self)
    }

    math_methods! {
        abs => Abs, acos => Acos, asin => Asin, atan => Atan, cbrt => Cbrt,
        ceil => Ceil, cos => Cos, cosh => Cosh, exp => Exp, expm1 => Expm1,
        floor => Floor, log => Log, log10 => Log10, log1p => Log1p, neg => Neg,
        rint => Rint, round => Round, signum => Signum, sin => Sin, sinh => Sinh,
        sqrt => Sqrt, tan => Tan, tanh => Tanh, inv => Inv,
    }

    pub fn pow(&mut self, exponent: f64) -> Result<&mut Self> {
        self.apply(MathFn::Pow(exponent))
    }

    /// Add `increment` to every element. The result must keep this vector's
    /// family, so an absolute increment is rejected.
    pub fn increment_by(&mut self, increment: &Scalar<T>) -> Result<&mut Self> {
        self.shift(AddOp::Plus, increment)
    }

    pub fn decrement_by(&mut self, decrement: &Scalar<T>) -> Result<&mut Self> {
        self.shift(AddOp::Minus, decrement)
    }

    fn shift(&mut self, op: AddOp, other: &Scalar<T>) -> Result<&mut Self> {
        let combination = combine(&self.unit, op, other.unit())?;
        if combination.unit().family() != self.unit.family() {
            return Err(Error::UsageError(format!(
                "{op:?} with {} would turn this {} vector into {}",
                other.family(),
                self.family(),
                combination.unit().family()
            )));
        }
        let delta = other.standard();
        self.data_mut()?.map_in_place(|v| op.apply(v, delta));
        Ok(self)
    }

    /// Multiply every element by a plain number.
    pub fn scale_by(&mut self, factor: T) -> Result<&mut Self> {
        self.require_relative("scale")?;
        self.data_mut()?.map_in_place(|v| v * factor);
        Ok(self)
    }

    pub fn divide_by_factor(&mut self, divisor: T) -> Result<&mut Self> {
        self.require_relative("divide")?;
        self.data_mut()?.map_in_place(|v| v / divisor);
        Ok(self)
    }

    /// Divide every standard value by [`Vector::zsum`], so the standard values
    /// sum to one. A zero sum is a domain error and leaves the vector unchanged.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        self.check_mutable()?;
        self.require_relative("normalize")?;
        let sum = self.zsum();
        if sum.is_zero() {
            return Err(Error::DomainError(format!(
                "cannot normalize {} vector with zero sum",
                self.family()
            )));
        }
        self.data_mut()?.map_in_place(|v| v / sum);
        Ok(self)
    }

    /// Add `other` element by element. The result must keep this vector's
    /// family, so only relative vectors of the same family can be added.
    pub fn increment_by_vector(&mut self, other: &Vector<T>) -> Result<&mut Self> {
        self.shift_elements(AddOp::Plus, other)
    }

    pub fn decrement_by_vector(&mut self, other: &Vector<T>) -> Result<&mut Self> {
        self.shift_elements(AddOp::Minus, other)
    }

    fn shift_elements(&mut self, op: AddOp, other: &Vector<T>) -> Result<&mut Self> {
        self.check_mutable()?;
        self.check_size(other)?;
        let combination = combine(&self.unit, op, &other.unit)?;
        if combination.unit().family() != self.unit.family() {
            return Err(Error::UsageError(format!(
                "element-wise {op:?} with {} would turn this {} vector into {}",
                other.family(),
                self.family(),
                combination.unit().family()
            )));
        }
        let data = self.data.zip_with(&other.data, |a, b| op.apply(a, b));
        self.replace_data(data);
        Ok(self)
    }

    /// Multiply element by element with dimensionless `factors`.
    pub fn scale_by_vector(&mut self, factors: &Vector<T>) -> Result<&mut Self> {
        self.scale_elements(Op::Multiply, factors)
    }

    pub fn divide_by_vector(&mut self, divisors: &Vector<T>) -> Result<&mut Self> {
        self.scale_elements(Op::Divide, divisors)
    }

    fn scale_elements(&mut self, op: Op, factors: &Vector<T>) -> Result<&mut Self> {
        self.check_mutable()?;
        self.check_size(factors)?;
        self.require_relative("scale")?;
        if factors.unit.is_absolute() || !factors.unit.dimensions().is_dimensionless() {
            return Err(Error::UsageError(format!(
                "element-wise factors must be relative and dimensionless, not {}",
                factors.family()
            )));
        }
        let data = match op {
            Op::Multiply => self.data.zip_with(&factors.data, |a, b| a * b),
            Op::Divide => self.data.zip_with(&factors.data, |a, b| a / b),
        };
        self.replace_data(data);
        Ok(self)
    }

    /// Keeps this vector's storage type.
    fn replace_data(&mut self, data: VectorData<T>) {
        let storage = self.storage_type();
        self.data = Arc::new(data.to_storage(storage));
    }

    fn require_relative(&self, what: &str) -> Result<()> {
        if self.unit.is_absolute() {
            return Err(Error::UsageError(format!("cannot {what} absolute {} vector", self.family())));
        }
        Ok(())
    }

    // ========================================================================
    // Non-mutating arithmetic
    // ========================================================================

    pub fn plus(&self, other: &Vector<T>) -> Result<Self> {
        self.add_sub(AddOp::Plus, other)
    }

    pub fn minus(&self, other: &Vector<T>) -> Result<Self> {
        self.add_sub(AddOp::Minus, other)
    }

    fn add_sub(&self, op: AddOp, other: &Vector<T>) -> Result<Self> {
        self.check_size(other)?;
        let combination = combine(&self.unit, op, &other.unit)?;
        let data = self.data.zip_with(&other.data, |a, b| op.apply(a, b));
        Ok(Self { data: Arc::new(data), unit: combination.unit().clone(), mutability: self.mutability })
    }

    /// Element-wise product; the result unit comes from the catalog.
    pub fn times_elements(&self, other: &Vector<T>, catalog: &Catalog) -> Result<Self> {
        self.mul_div(Op::Multiply, other, catalog)
    }

    pub fn divide_elements(&self, other: &Vector<T>, catalog: &Catalog) -> Result<Self> {
        self.mul_div(Op::Divide, other, catalog)
    }

    fn mul_div(&self, op: Op, other: &Vector<T>, catalog: &Catalog) -> Result<Self> {
        self.check_size(other)?;
        if self.unit.is_absolute() || other.unit.is_absolute() {
            return Err(Error::UsageError(format!(
                "element-wise {} {op} {} needs relative operands",
                self.family(),
                other.family()
            )));
        }
        let unit = catalog.result_unit(&self.unit, op, &other.unit)?;
        let data = match op {
            Op::Multiply => self.data.zip_with(&other.data, |a, b| a * b),
            Op::Divide => self.data.zip_with(&other.data, |a, b| a / b),
        };
        Ok(Self { data: Arc::new(data), unit, mutability: self.mutability })
    }

    /// A copy with `f` applied, leaving this vector untouched.
    pub fn mapped(&self, f: MathFn) -> Result<Self> {
        let mut copy = self.mutable();
        copy.apply(f)?;
        copy.mutability = self.mutability;
        Ok(copy)
    }

    fn check_size(&self, other: &Vector<T>) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::UsageError(format!(
                "vector sizes differ: {} vs {}",
                self.size(),
                other.size()
            )));
        }
        Ok(())
    }
}

fn to_standard<T: Element>(unit: &Unit, value: T) -> T {
    T::from_double(unit.to_standard(value.to_double()))
}

fn from_standard<T: Element>(unit: &Unit, value: T) -> T {
    T::from_double(unit.from_standard(value.to_double()))
}

fn check_keys<'a>(mut keys: impl Iterator<Item = &'a usize>, size: usize) -> Result<()> {
    match keys.find(|&&k| k >= size) {
        Some(&k) => Err(Error::UsageError(format!("index {k} outside vector of size {size}"))),
        None => Ok(()),
    }
}

fn check_compatible(unit: &Unit, other: &Unit) -> Result<()> {
    same_family(unit, other)?;
    if unit.is_absolute() != other.is_absolute() {
        return Err(incompatible(unit, other));
    }
    Ok(())
}

impl<T: Element> PartialEq for Vector<T> {
    /// Same family and standard values, regardless of storage or mutability.
    fn eq(&self, other: &Self) -> bool {
        self.unit.family() == other.unit.family()
            && self.size() == other.size()
            && self.data.to_vec() == other.data.to_vec()
    }
}

impl<T: Element> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("unit", &self.unit.id())
            .field("family", &self.unit.family())
            .field("mutability", &self.mutability)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values_in_unit().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "] {}", self.unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::family::*;
    use crate::ErrorKind;
    use float_eq::assert_float_eq;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    #[test]
    fn test_construction_forms_agree() {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let from_slice = Vector::new(&[0.0, 2.0, 0.0, 5.0], &km, StorageType::Dense);

        let map: BTreeMap<usize, f64> = [(1, 2.0), (3, 5.0)].into_iter().collect();
        let from_map = Vector::from_map(&map, 4, &km, StorageType::Sparse).unwrap();

        let scalars: Vec<_> = [0.0, 2.0, 0.0, 5.0].iter().map(|&v| Scalar::new(v, &km)).collect();
        let from_scalars = Vector::from_scalars(&scalars, StorageType::Dense).unwrap();

        let scalar_map: BTreeMap<usize, Scalar> = [(1, Scalar::new(2.0, &km)), (3, Scalar::new(5.0, &km))].into_iter().collect();
        let from_scalar_map = Vector::from_scalar_map(&scalar_map, 4, StorageType::Sparse).unwrap();

        assert_eq!(from_slice, from_map);
        assert_eq!(from_slice, from_scalars);
        assert_eq!(from_slice, from_scalar_map);
        assert_eq!(from_map.storage_type(), StorageType::Sparse);
        assert_eq!(from_slice.values_standard(), vec![0.0, 2000.0, 0.0, 5000.0]);
    }

    #[test]
    fn test_construction_errors() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let map: BTreeMap<usize, f64> = [(4, 1.0)].into_iter().collect();
        assert_eq!(Vector::from_map(&map, 4, &m, StorageType::Dense).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(Vector::<f64>::from_scalars(&[], StorageType::Dense).unwrap_err().kind(), ErrorKind::Usage);

        let mixed = [Scalar::new(1.0, &m), Scalar::new(1.0, &c.standard_unit(MASS).unwrap())];
        assert!(matches!(Vector::from_scalars(&mixed, StorageType::Dense), Err(Error::IncompatibleUnits { .. })));
    }

    #[test]
    fn test_accessors() {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let v = Vector::new(&[1.0, 0.0, 3.0], &km, StorageType::Sparse);
        assert_eq!(v.size(), 3);
        assert_eq!(v.cardinality(), 2);
        assert_eq!(v.zsum(), 4000.0);
        assert_eq!(v.standard(2).unwrap(), 3000.0);
        assert_eq!(v.in_unit(1).unwrap(), 0.0);
        assert_eq!(v.get(0).unwrap(), Scalar::new(1.0, &km));
        assert!(matches!(v.get(3), Err(Error::IndexOutOfBounds { index: 3, size: 3 })));
        assert_eq!(v.to_string(), "[1, 0, 3] km");
    }

    #[test]
    fn test_immutable_rejects_mutation() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let mut v = Vector::new(&[1.0, 2.0], &m, StorageType::Dense);
        assert_eq!(v.set_standard(0, 5.0).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(v.set_standard(7, 5.0).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(v.abs().unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(v.normalize().unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(v.values_standard(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_mutable_view_is_isolated() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let original = Vector::new(&[1.0, 2.0, 3.0], &m, StorageType::Dense);
        let mut view = original.mutable();
        view.set_in_unit(1, 20.0).unwrap().scale_by(2.0).unwrap();
        assert_eq!(view.values_standard(), vec![2.0, 40.0, 6.0]);
        assert_eq!(original.values_standard(), vec![1.0, 2.0, 3.0]);

        let frozen = view.immutable();
        view.set_standard(0, 0.0).unwrap();
        assert_eq!(frozen.standard(0).unwrap(), 2.0);
    }

    #[test]
    fn test_unary_ops_on_display_values() {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let mut v = Vector::new(&[4.0, 0.0, 9.0], &km, StorageType::Sparse).mutable();
        v.sqrt().unwrap();
        assert_eq!(v.values_in_unit(), vec![2.0, 0.0, 3.0]);
        assert_eq!(v.storage_type(), StorageType::Sparse);
        v.neg().unwrap().abs().unwrap();
        assert_eq!(v.values_in_unit(), vec![2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_increment_absolute_vector() {
        let c = catalog();
        let abs_c = c.unit(ABSOLUTE_TEMPERATURE, "degC").unwrap();
        let rel_k = c.standard_unit(TEMPERATURE).unwrap();
        let mut temps = Vector::new(&[10.0, 20.0], &abs_c, StorageType::Dense).mutable();
        temps.increment_by(&Scalar::new(5.0, &rel_k)).unwrap();
        let shown = temps.values_in_unit();
        assert_float_eq!(shown[0], 15.0, abs <= 1e-9);
        assert_float_eq!(shown[1], 25.0, abs <= 1e-9);

        let abs_k = c.standard_unit(ABSOLUTE_TEMPERATURE).unwrap();
        let err = temps.increment_by(&Scalar::new(5.0, &abs_k)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(temps.decrement_by(&Scalar::new(5.0, &abs_k)).unwrap_err().kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_normalize() {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let mut v = Vector::new(&[1.0, 3.0], &km, StorageType::Dense).mutable();
        v.normalize().unwrap();
        assert_eq!(v.unit(), &km);
        assert_eq!(v.values_standard(), vec![0.25, 0.75]);
        assert_eq!(v.zsum(), 1.0);
        let shown = v.values_in_unit();
        assert_float_eq!(shown[0], 0.00025, rmax <= 1e-12);
        assert_float_eq!(shown[1], 0.00075, rmax <= 1e-12);
    }

    #[test]
    fn test_normalize_zero_sum_unchanged() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let mut v = Vector::new(&[-4.0, 4.0, -1.0, 1.0, 0.0], &m, StorageType::Dense).mutable();
        let err = v.normalize().unwrap_err();
        assert!(matches!(err, Error::DomainError(_)));
        assert_eq!(v.values_standard(), vec![-4.0, 4.0, -1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_plus_minus() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let km = c.unit(LENGTH, "km").unwrap();
        let a = Vector::new(&[1.0, 0.0, 0.0], &km, StorageType::Sparse);
        let b = Vector::new(&[0.0, 0.0, 500.0], &m, StorageType::Sparse);
        let sum = a.plus(&b).unwrap();
        assert_eq!(sum.unit(), &m);
        assert_eq!(sum.storage_type(), StorageType::Sparse);
        assert_eq!(sum.values_standard(), vec![1000.0, 0.0, 500.0]);

        let same = a.plus(&a).unwrap();
        assert_eq!(same.unit(), &km);

        let short = Vector::new(&[1.0], &m, StorageType::Dense);
        assert_eq!(a.minus(&short).unwrap_err().kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_times_elements() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let s = c.standard_unit(DURATION).unwrap();
        let d = Vector::new(&[10.0, 20.0], &m, StorageType::Dense);
        let t = Vector::new(&[2.0, 4.0], &s, StorageType::Dense);
        let v = d.divide_elements(&t, &c).unwrap();
        assert_eq!(v.family(), SPEED);
        assert_eq!(v.values_standard(), vec![5.0, 5.0]);
        let back = v.times_elements(&t, &c).unwrap();
        assert_eq!(back.family(), LENGTH);
    }

    #[test]
    fn test_mapped_leaves_original() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let v = Vector::new(&[-1.0, 2.0], &m, StorageType::Dense);
        let mapped = v.mapped(MathFn::Abs).unwrap();
        assert_eq!(mapped.values_standard(), vec![1.0, 2.0]);
        assert!(!mapped.is_mutable());
        assert_eq!(v.values_standard(), vec![-1.0, 2.0]);
    }

    #[test]
    fn test_out_of_range_write_on_mutable_view() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let mut v = Vector::new(&[1.0, 2.0], &m, StorageType::Dense).mutable();
        assert!(matches!(v.set_standard(2, 1.0), Err(Error::IndexOutOfBounds { index: 2, size: 2 })));
    }

    #[test]
    fn test_set_in_unit_of() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let km = c.unit(LENGTH, "km").unwrap();
        let mut v = Vector::<f64>::zeros(3, &m, StorageType::Sparse).mutable();
        v.set_in_unit_of(1, 2.5, &km).unwrap();
        assert_eq!(v.values_standard(), vec![0.0, 2500.0, 0.0]);

        let kg = c.standard_unit(MASS).unwrap();
        assert!(matches!(v.set_in_unit_of(0, 1.0, &kg), Err(Error::IncompatibleUnits { .. })));
        let pos = c.standard_unit(POSITION).unwrap();
        assert!(v.set_in_unit_of(0, 1.0, &pos).is_err());
        assert_eq!(v.cardinality(), 1);
    }

    #[test]
    fn test_iter_yields_scalars() {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let v = Vector::new(&[1.0, 0.0, 2.5], &km, StorageType::Sparse);
        let scalars: Vec<Scalar> = v.iter().collect();
        assert_eq!(scalars.len(), 3);
        assert!(scalars.iter().all(|s| s.unit() == &km));
        assert_eq!(scalars.iter().map(|s| s.standard()).collect::<Vec<_>>(), vec![1000.0, 0.0, 2500.0]);
        assert_eq!(scalars[2].in_unit(), 2.5);
    }

    #[test]
    fn test_increment_by_vector() {
        let c = catalog();
        let m = c.standard_unit(LENGTH).unwrap();
        let km = c.unit(LENGTH, "km").unwrap();
        let mut v = Vector::new(&[1.0, 2.0, 0.0], &km, StorageType::Sparse).mutable();
        let delta = Vector::new(&[500.0, 0.0, 250.0], &m, StorageType::Dense);
        v.increment_by_vector(&delta).unwrap();
        assert_eq!(v.unit(), &km);
        assert_eq!(v.storage_type(), StorageType::Sparse);
        assert_eq!(v.values_standard(), vec![1500.0, 2000.0, 250.0]);

        v.decrement_by_vector(&delta).unwrap().decrement_by_vector(&delta).unwrap();
        assert_eq!(v.values_standard(), vec![500.0, 2000.0, -250.0]);

        let short = Vector::new(&[1.0], &m, StorageType::Dense);
        assert_eq!(v.increment_by_vector(&short).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(v.immutable().increment_by_vector(&delta).unwrap_err().kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_increment_absolute_by_vector() {
        let c = catalog();
        let abs_c = c.unit(ABSOLUTE_TEMPERATURE, "degC").unwrap();
        let rel_k = c.standard_unit(TEMPERATURE).unwrap();
        let mut temps = Vector::new(&[10.0, 20.0], &abs_c, StorageType::Dense).mutable();
        temps.increment_by_vector(&Vector::new(&[1.0, -2.0], &rel_k, StorageType::Dense)).unwrap();
        let shown = temps.values_in_unit();
        assert_float_eq!(shown[0], 11.0, abs <= 1e-9);
        assert_float_eq!(shown[1], 18.0, abs <= 1e-9);

        let other = Vector::new(&[1.0, 1.0], &abs_c, StorageType::Dense);
        assert_eq!(temps.increment_by_vector(&other).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(temps.decrement_by_vector(&other).unwrap_err().kind(), ErrorKind::Usage);
        assert_float_eq!(temps.in_unit(0).unwrap(), 11.0, abs <= 1e-9);
    }

    #[test]
    fn test_scale_and_divide_by_vector() {
        let c = catalog();
        let kg = c.standard_unit(MASS).unwrap();
        let one = c.standard_unit(DIMENSIONLESS).unwrap();
        let mut v = Vector::new(&[2.0, 4.0, 0.0], &kg, StorageType::Dense).mutable();
        let factors = Vector::new(&[3.0, 0.5, 7.0], &one, StorageType::Dense);
        v.scale_by_vector(&factors).unwrap();
        assert_eq!(v.values_standard(), vec![6.0, 2.0, 0.0]);
        v.divide_by_vector(&factors).unwrap();
        assert_eq!(v.values_standard(), vec![2.0, 4.0, 0.0]);
        assert_eq!(v.unit(), &kg);

        let lengths = Vector::new(&[1.0, 1.0, 1.0], &c.standard_unit(LENGTH).unwrap(), StorageType::Dense);
        assert_eq!(v.scale_by_vector(&lengths).unwrap_err().kind(), ErrorKind::Usage);
    }
}
