use crate::dimension::{Dimension, DIMENSION_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::{Index, Mul};

/// Added to every norm before dividing so an all-zero vector normalises to zero
pub const NORM_EPSILON: f64 = 1e-9;

/// A point in dimension space, one component per [`Dimension`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: [f64; DIMENSION_COUNT],
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; DIMENSION_COUNT]) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            data: [0.0; DIMENSION_COUNT],
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn get(&self, dim: Dimension) -> f64 {
        self.data[dim.index()]
    }

    /// L2 norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Unit-length copy, dividing by `norm + NORM_EPSILON`
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let inv_norm = 1.0 / (self.norm() + NORM_EPSILON);
        self * inv_norm
    }

    /// Cosine similarity as the dot product of both normalised vectors
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        self.normalized().dot(&other.normalized())
    }
}

impl Index<Dimension> for Vector {
    type Output = f64;

    fn index(&self, dim: Dimension) -> &f64 {
        &self.data[dim.index()]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.data.map(|x| x * scalar))
    }
}

/// Round to one decimal place, ties to even (`56.25` -> `56.2`)
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = Vector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let v2 = Vector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = Vector::new([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(v1.cosine_similarity(&v3).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalizes_to_zero() {
        let zero = Vector::zeros();
        let normalized = zero.normalized();
        assert!(normalized.as_slice().iter().all(|x| *x == 0.0));
        let other = Vector::new([1.0; DIMENSION_COUNT]);
        assert_eq!(zero.cosine_similarity(&other), 0.0);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let v = Vector::new([3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((v.normalized().norm() - 1.0).abs() < 1e-6);
        assert_eq!(v[Dimension::Peaceful], 4.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(99.43663), 99.4);
        assert_eq!(round1(87.96), 88.0);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(56.25), 56.2);
        assert_eq!(round1(81.25), 81.2);
        assert_eq!(round1(56.75), 56.8);
        assert_eq!(round1(12.5), 12.5);
    }
}
