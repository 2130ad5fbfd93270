use crate::{error::IntegrationError, traits::Scalar};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, fixed-length sequence of scalar values: the instantaneous
/// condition of every tracked variable at one time point.
///
/// Vectors are immutable values. Every arithmetic operation returns a new
/// vector; states already handed out as part of a trajectory are never
/// touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateVector<T>(Vec<T>);

impl<T: Scalar> StateVector<T> {
    pub fn new(components: Vec<T>) -> Self {
        Self(components)
    }

    pub fn from_slice(components: &[T]) -> Self {
        Self(components.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[T] {
        &self.0
    }

    pub fn into_components(self) -> Vec<T> {
        self.0
    }

    /// Elementwise sum of two vectors of equal length.
    pub fn add(&self, other: &Self) -> Result<Self, IntegrationError> {
        if self.len() != other.len() {
            return Err(IntegrationError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        let mut out = self.0.clone();
        for i in 0..out.len() {
            out[i] = out[i] + other.0[i];
        }
        Ok(Self(out))
    }

    /// Every component multiplied by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self(self.0.iter().map(|&x| x * k).collect())
    }

    /// Linear combination `sum(c_i * v_i)` over `(coefficient, vector)`
    /// terms. Equivalent to repeated `add`/`scale`; this is what the stage
    /// states and the weighted stage sum are built from.
    ///
    /// All vectors must share the length of the first term; an empty term
    /// list yields an empty vector.
    pub fn combine(terms: &[(T, &Self)]) -> Result<Self, IntegrationError> {
        let mut iter = terms.iter();
        let Some(&(c0, v0)) = iter.next() else {
            return Ok(Self(Vec::new()));
        };
        let mut out = v0.scale(c0);
        for &(c, v) in iter {
            if v.len() != out.len() {
                return Err(IntegrationError::DimensionMismatch {
                    expected: out.len(),
                    found: v.len(),
                });
            }
            for i in 0..out.0.len() {
                out.0[i] = out.0[i] + c * v.0[i];
            }
        }
        Ok(out)
    }

    /// Index of the first NaN or infinite component, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|x| !x.is_finite())
    }
}

impl<T: Scalar> From<Vec<T>> for StateVector<T> {
    fn from(components: Vec<T>) -> Self {
        Self(components)
    }
}

impl<T: Scalar> Index<usize> for StateVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}
