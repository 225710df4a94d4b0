//! End-to-end tests for vectors: dense and sparse storage, mutable views,
//! normalization and element-wise arithmetic.

use std::collections::BTreeMap;

use float_eq::assert_float_eq;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quantities::catalog::family::*;
use quantities::{Catalog, Error, ErrorKind, MathFn, Scalar, StorageType, Tag, Vector};

fn catalog() -> Catalog {
    Catalog::standard().unwrap()
}

// ============================================================================
// 1. Normalization
// ============================================================================

#[test]
fn test_normalize_zero_sum_is_domain_error() {
    let c = catalog();
    let m = c.standard_unit(LENGTH).unwrap();
    let values = [-4.0, 4.0, -1.0, 1.0, 0.0];

    for storage in [StorageType::Dense, StorageType::Sparse] {
        let mut v = Vector::new(&values, &m, storage).mutable();
        let err = v.normalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(v.values_in_unit(), values.to_vec());
    }
}

#[test]
fn test_normalize_fractions() {
    let c = catalog();
    let kg = c.standard_unit(MASS).unwrap();
    let mut v = Vector::new(&[1.0, 0.0, 2.0, 5.0], &kg, StorageType::Sparse).mutable();
    v.normalize().unwrap();
    assert_float_eq!(v.zsum(), 1.0, rmax <= 1e-12);
    let fractions = v.values_standard();
    assert_float_eq!(fractions[0], 0.125, rmax <= 1e-12);
    assert_float_eq!(fractions[2], 0.25, rmax <= 1e-12);
    assert_float_eq!(fractions[3], 0.625, rmax <= 1e-12);
    assert_eq!(fractions[1], 0.0);
}

#[test]
fn test_normalize_works_on_standard_values() {
    let c = catalog();
    let g = c.unit(MASS, "g").unwrap();
    let mut v = Vector::new(&[250.0, 750.0], &g, StorageType::Dense).mutable();
    v.normalize().unwrap();
    let kilograms = v.values_standard();
    assert_float_eq!(kilograms[0], 0.25, rmax <= 1e-12);
    assert_float_eq!(kilograms[1], 0.75, rmax <= 1e-12);
    assert_eq!(v.unit(), &g);
    let grams: Vec<f64> = v.iter().map(|s| s.in_unit()).collect();
    assert_float_eq!(grams[0], 250.0, rmax <= 1e-12);
    assert_float_eq!(grams[1], 750.0, rmax <= 1e-12);
}

#[test]
fn test_normalize_absolute_rejected() {
    let c = catalog();
    let abs_c = c.unit(ABSOLUTE_TEMPERATURE, "degC").unwrap();
    let mut v = Vector::new(&[1.0, 2.0], &abs_c, StorageType::Dense).mutable();
    assert_eq!(v.normalize().unwrap_err().kind(), ErrorKind::Usage);
}

// ============================================================================
// 2. Mutability
// ============================================================================

#[test]
fn test_mutation_does_not_leak_between_views() {
    let c = catalog();
    let s = c.standard_unit(DURATION).unwrap();
    let base = Vector::new(&[1.0, 2.0, 3.0], &s, StorageType::Sparse);
    let mut a = base.mutable();
    let mut b = base.mutable();

    a.set_standard(0, 10.0).unwrap();
    b.increment_by(&Scalar::new(1.0, &s)).unwrap();

    assert_eq!(base.values_standard(), vec![1.0, 2.0, 3.0]);
    assert_eq!(a.values_standard(), vec![10.0, 2.0, 3.0]);
    assert_eq!(b.values_standard(), vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_immutable_view_rejects_every_mutator() {
    let c = catalog();
    let s = c.standard_unit(DURATION).unwrap();
    let mut v = Vector::new(&[1.0, 2.0], &s, StorageType::Dense);
    let one = Scalar::new(1.0, &s);

    assert_eq!(v.set(0, &one).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.set_in_unit(0, 1.0).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.increment_by(&one).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.decrement_by(&one).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.scale_by(2.0).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.divide_by_factor(2.0).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.pow(2.0).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(v.values_standard(), vec![1.0, 2.0]);
}

#[test]
fn test_chained_mutation() {
    let c = catalog();
    let km = c.unit(LENGTH, "km").unwrap();
    let m = c.standard_unit(LENGTH).unwrap();
    let mut v = Vector::new(&[1.0, 2.0], &km, StorageType::Dense).mutable();
    v.scale_by(3.0).unwrap().decrement_by(&Scalar::new(500.0, &m)).unwrap();
    assert_eq!(v.values_standard(), vec![2500.0, 5500.0]);
    assert_eq!(v.unit(), &km);
}

// ============================================================================
// 3. Dense and sparse storage
// ============================================================================

#[test]
fn test_storage_conversion() {
    let c = catalog();
    let w = c.standard_unit(POWER).unwrap();
    let dense = Vector::new(&[0.0, 0.0, 3.5, 0.0], &w, StorageType::Dense);
    let sparse = dense.to_sparse();
    assert_eq!(sparse.storage_type(), StorageType::Sparse);
    assert_eq!(sparse.cardinality(), 1);
    assert_eq!(sparse.to_dense().storage_type(), StorageType::Dense);
    assert_eq!(sparse.to_dense(), dense);
}

#[test]
fn test_sparse_set_and_get() {
    let c = catalog();
    let m = c.standard_unit(LENGTH).unwrap();
    let mut v = Vector::<f64>::zeros(1000, &m, StorageType::Sparse).mutable();
    v.set_standard(999, 4.0).unwrap().set_standard(3, 1.0).unwrap();
    assert_eq!(v.cardinality(), 2);
    assert_eq!(v.standard(999).unwrap(), 4.0);
    assert_eq!(v.zsum(), 5.0);
    v.set_standard(3, 0.0).unwrap();
    assert_eq!(v.cardinality(), 1);
    assert!(matches!(v.set_standard(1000, 1.0), Err(Error::IndexOutOfBounds { index: 1000, size: 1000 })));
}

#[test]
fn test_from_scalar_map_fills_zeros() {
    let c = catalog();
    let abs_c = c.unit(ABSOLUTE_TEMPERATURE, "degC").unwrap();
    let map: BTreeMap<usize, Scalar> = [(2, Scalar::new(5.0, &abs_c))].into_iter().collect();
    let v = Vector::from_scalar_map(&map, 3, StorageType::Dense).unwrap();
    assert_eq!(v.tag(), Tag::Absolute);
    assert_float_eq!(v.in_unit(0).unwrap(), 0.0, abs <= 1e-9);
    assert_float_eq!(v.in_unit(2).unwrap(), 5.0, abs <= 1e-9);
}

proptest! {
    #[test]
    fn dense_and_sparse_agree(
        values in prop::collection::vec(prop_oneof![Just(0.0f64), -1.0e6f64..1.0e6], 1..40),
        delta in -1.0e3f64..1.0e3,
    ) {
        let c = catalog();
        let km = c.unit(LENGTH, "km").unwrap();
        let m = c.standard_unit(LENGTH).unwrap();
        let dense = Vector::new(&values, &km, StorageType::Dense);
        let sparse = Vector::new(&values, &km, StorageType::Sparse);

        prop_assert_eq!(dense.values_standard(), sparse.values_standard());
        prop_assert_eq!(dense.cardinality(), sparse.cardinality());
        prop_assert_eq!(dense.zsum(), sparse.zsum());

        let sum_dense = dense.plus(&sparse).unwrap();
        let sum_sparse = sparse.plus(&sparse).unwrap();
        prop_assert_eq!(sum_dense.values_standard(), sum_sparse.values_standard());

        let mut shifted_dense = dense.mutable();
        let mut shifted_sparse = sparse.mutable();
        shifted_dense.increment_by(&Scalar::new(delta, &m)).unwrap();
        shifted_sparse.increment_by(&Scalar::new(delta, &m)).unwrap();
        prop_assert_eq!(shifted_dense.values_standard(), shifted_sparse.values_standard());

        prop_assert_eq!(sparse.to_dense().to_sparse().values_standard(), sparse.values_standard());
    }
}

// ============================================================================
// 4. Element-wise arithmetic
// ============================================================================

#[test]
fn test_power_from_energy_over_duration() {
    let c = catalog();
    let kwh = c.unit(ENERGY, "kWh").unwrap();
    let h = c.unit(DURATION, "h").unwrap();
    let energy = Vector::new(&[1.0, 2.0, 0.0], &kwh, StorageType::Sparse);
    let hours = Vector::new(&[1.0, 4.0, 1.0], &h, StorageType::Dense);
    let power = energy.divide_elements(&hours, &c).unwrap();
    assert_eq!(power.family(), POWER);
    assert_eq!(power.unit().id(), "W");
    let watts = power.values_in_unit();
    assert_float_eq!(watts[0], 1000.0, rmax <= 1e-12);
    assert_float_eq!(watts[1], 500.0, rmax <= 1e-12);
    assert_eq!(watts[2], 0.0);
}

#[test]
fn test_absolute_vector_differences() {
    let c = catalog();
    let abs_f = c.unit(ABSOLUTE_TEMPERATURE, "degF").unwrap();
    let morning = Vector::new(&[50.0, 60.0], &abs_f, StorageType::Dense);
    let evening = Vector::new(&[68.0, 59.0], &abs_f, StorageType::Dense);
    let change = evening.minus(&morning).unwrap();
    assert_eq!(change.tag(), Tag::Relative);
    assert_eq!(change.unit().id(), "degF");
    let shown = change.values_in_unit();
    assert_float_eq!(shown[0], 18.0, abs <= 1e-9);
    assert_float_eq!(shown[1], -1.0, abs <= 1e-9);

    assert_eq!(evening.plus(&morning).unwrap_err().kind(), ErrorKind::Usage);
    assert_eq!(evening.times_elements(&morning, &c).unwrap_err().kind(), ErrorKind::Usage);
}

#[test]
fn test_mapped_and_express_as() {
    let c = catalog();
    let m = c.standard_unit(LENGTH).unwrap();
    let km = c.unit(LENGTH, "km").unwrap();
    let v = Vector::new(&[-1500.0, 2500.0], &m, StorageType::Dense);
    let in_km = v.express_as(&km).unwrap().mapped(MathFn::Abs).unwrap();
    assert_eq!(in_km.values_in_unit(), vec![1.5, 2.5]);
    assert_eq!(in_km.to_string(), "[1.5, 2.5] km");

    let kg = c.standard_unit(MASS).unwrap();
    assert!(matches!(v.express_as(&kg), Err(Error::IncompatibleUnits { .. })));
}
