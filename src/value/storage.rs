//! Dense and sparse element storage.
//!
//! Both forms hold standard values. Sparse storage keeps sorted indices with
//! their non-zero values; every other index reads as zero.

use super::{Element, StorageType};

#[derive(Debug, Clone, PartialEq)]
pub enum VectorData<T> {
    Dense(Vec<T>),
    Sparse(SparseData<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparseData<T> {
    /// Strictly increasing.
    indices: Vec<usize>,
    values: Vec<T>,
    size: usize,
}

impl<T: Element> SparseData<T> {
    pub fn empty(size: usize) -> Self {
        Self { indices: Vec::new(), values: Vec::new(), size }
    }

    /// Keep the non-zero entries of `dense`.
    pub fn from_dense(dense: &[T]) -> Self {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (i, &v) in dense.iter().enumerate() {
            if !v.is_zero() {
                indices.push(i);
                values.push(v);
            }
        }
        Self { indices, values, size: dense.len() }
    }

    pub fn indices(&self) -> &[usize] { &self.indices }
    pub fn values(&self) -> &[T] { &self.values }

    fn get(&self, index: usize) -> T {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => T::zero(),
        }
    }

    /// Writing zero drops the entry.
    fn set(&mut self, index: usize, value: T) {
        match self.indices.binary_search(&index) {
            Ok(pos) if value.is_zero() => {
                self.indices.remove(pos);
                self.values.remove(pos);
            }
            Ok(pos) => self.values[pos] = value,
            Err(_) if value.is_zero() => {}
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
            }
        }
    }

    fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.size];
        for (&i, &v) in self.indices.iter().zip(&self.values) {
            dense[i] = v;
        }
        dense
    }

    fn retain_non_zero(&mut self) {
        let mut keep = self.values.iter().map(|v| !v.is_zero());
        self.indices.retain(|_| keep.next().unwrap_or(false));
        self.values.retain(|v| !v.is_zero());
    }
}

impl<T: Element> VectorData<T> {
    pub fn new(dense: Vec<T>, storage: StorageType) -> Self {
        match storage {
            StorageType::Dense => VectorData::Dense(dense),
            StorageType::Sparse => VectorData::Sparse(SparseData::from_dense(&dense)),
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            VectorData::Dense(_) => StorageType::Dense,
            VectorData::Sparse(_) => StorageType::Sparse,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            VectorData::Dense(v) => v.len(),
            VectorData::Sparse(s) => s.size,
        }
    }

    /// Caller checks bounds.
    pub fn get(&self, index: usize) -> T {
        match self {
            VectorData::Dense(v) => v[index],
            VectorData::Sparse(s) => s.get(index),
        }
    }

    /// Caller checks bounds.
    pub fn set(&mut self, index: usize, value: T) {
        match self {
            VectorData::Dense(v) => v[index] = value,
            VectorData::Sparse(s) => s.set(index, value),
        }
    }

    /// Number of non-zero elements.
    pub fn cardinality(&self) -> usize {
        match self {
            VectorData::Dense(v) => v.iter().filter(|x| !x.is_zero()).count(),
            VectorData::Sparse(s) => s.values.iter().filter(|x| !x.is_zero()).count(),
        }
    }

    pub fn sum(&self) -> T {
        let values = match self {
            VectorData::Dense(v) => v.as_slice(),
            VectorData::Sparse(s) => s.values.as_slice(),
        };
        values.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    pub fn to_vec(&self) -> Vec<T> {
        match self {
            VectorData::Dense(v) => v.clone(),
            VectorData::Sparse(s) => s.to_dense(),
        }
    }

    pub fn to_storage(&self, storage: StorageType) -> Self {
        match (self, storage) {
            (VectorData::Dense(_), StorageType::Dense) | (VectorData::Sparse(_), StorageType::Sparse) => self.clone(),
            (VectorData::Sparse(s), StorageType::Dense) => VectorData::Dense(s.to_dense()),
            (VectorData::Dense(v), StorageType::Sparse) => VectorData::Sparse(SparseData::from_dense(v)),
        }
    }

    /// Apply `f` to every element. Sparse storage turns dense when `f(0) != 0`.
    pub fn map_in_place(&mut self, f: impl Fn(T) -> T) {
        match self {
            VectorData::Dense(v) => v.iter_mut().for_each(|x| *x = f(*x)),
            VectorData::Sparse(s) => {
                if f(T::zero()).is_zero() {
                    s.values.iter_mut().for_each(|x| *x = f(*x));
                    s.retain_non_zero();
                } else {
                    let mut dense = s.to_dense();
                    dense.iter_mut().for_each(|x| *x = f(*x));
                    *self = VectorData::Dense(dense);
                }
            }
        }
    }

    /// Combine element-wise with `other` (same size). Two sparse operands give a
    /// sparse result when `f(0, 0) == 0`; everything else is dense.
    pub fn zip_with(&self, other: &VectorData<T>, f: impl Fn(T, T) -> T) -> VectorData<T> {
        if let (VectorData::Sparse(a), VectorData::Sparse(b)) = (self, other) {
            if f(T::zero(), T::zero()).is_zero() {
                return VectorData::Sparse(merge(a, b, f));
            }
        }
        let a = self.to_vec();
        let b = other.to_vec();
        VectorData::Dense(a.into_iter().zip(b).map(|(x, y)| f(x, y)).collect())
    }
}

fn merge<T: Element>(a: &SparseData<T>, b: &SparseData<T>, f: impl Fn(T, T) -> T) -> SparseData<T> {
    let mut out = SparseData::empty(a.size);
    let (mut i, mut j) = (0, 0);
    while i < a.indices.len() || j < b.indices.len() {
        let ai = a.indices.get(i).copied().unwrap_or(usize::MAX);
        let bj = b.indices.get(j).copied().unwrap_or(usize::MAX);
        let (index, value) = if ai == bj {
            i += 1;
            j += 1;
            (ai, f(a.values[i - 1], b.values[j - 1]))
        } else if ai < bj {
            i += 1;
            (ai, f(a.values[i - 1], T::zero()))
        } else {
            j += 1;
            (bj, f(T::zero(), b.values[j - 1]))
        };
        if !value.is_zero() {
            out.indices.push(index);
            out.values.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sparse_get_set() {
        let mut data = VectorData::new(vec![0.0, 2.0, 0.0, 4.0], StorageType::Sparse);
        assert_eq!(data.get(0), 0.0);
        assert_eq!(data.get(3), 4.0);
        data.set(2, 3.0);
        data.set(1, 0.0);
        assert_eq!(data.to_vec(), vec![0.0, 0.0, 3.0, 4.0]);
        assert_eq!(data.cardinality(), 2);
        if let VectorData::Sparse(s) = &data {
            assert_eq!(s.indices(), &[2, 3]);
        } else {
            panic!("expected sparse");
        }
    }

    #[test]
    fn test_dense_sparse_round_trip() {
        let values = vec![0.0, -1.5, 0.0, 0.0, 7.0];
        let dense = VectorData::new(values.clone(), StorageType::Dense);
        let sparse = dense.to_storage(StorageType::Sparse);
        assert_eq!(sparse.storage_type(), StorageType::Sparse);
        assert_eq!(sparse.to_storage(StorageType::Dense), dense);
        assert_eq!(sparse.sum(), dense.sum());
        assert_eq!(sparse.size(), 5);
    }

    #[test]
    fn test_map_keeps_sparse_when_zero_preserved() {
        let mut data = VectorData::new(vec![0.0, 4.0, 0.0, 9.0], StorageType::Sparse);
        data.map_in_place(f64::sqrt);
        assert_eq!(data.storage_type(), StorageType::Sparse);
        assert_eq!(data.to_vec(), vec![0.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_map_densifies_when_zero_moves() {
        let mut data = VectorData::new(vec![0.0, 1.0], StorageType::Sparse);
        data.map_in_place(|x| x + 1.0);
        assert_eq!(data, VectorData::Dense(vec![1.0, 2.0]));
    }

    #[test]
    fn test_zip_sparse_merge() {
        let a = VectorData::new(vec![1.0, 0.0, 2.0, 0.0], StorageType::Sparse);
        let b = VectorData::new(vec![0.0, 3.0, -2.0, 0.0], StorageType::Sparse);
        let sum = a.zip_with(&b, |x, y| x + y);
        assert_eq!(sum.storage_type(), StorageType::Sparse);
        assert_eq!(sum.to_vec(), vec![1.0, 3.0, 0.0, 0.0]);
        assert_eq!(sum.cardinality(), 2);

        let quotient = a.zip_with(&b, |x, y| x / y);
        assert_eq!(quotient.storage_type(), StorageType::Dense);
    }
}
