use crate::{
    state::StateVector,
    traits::{RightHandSide, Scalar},
};
use nalgebra::{DMatrix, DVector};

/// Two-species Lotka-Volterra predator-prey dynamics.
///
/// State layout is `[prey, predator]`:
///
/// ```text
/// prey'     = prey * (prey_growth - predation * predator)
/// predator' = predator * (predator_gain * prey - predator_death)
/// ```
///
/// The system is autonomous; the time argument is ignored.
#[derive(Debug, Clone, Copy)]
pub struct LotkaVolterra<T> {
    pub prey_growth: T,
    pub predation: T,
    pub predator_gain: T,
    pub predator_death: T,
}

impl<T: Scalar> LotkaVolterra<T> {
    pub fn new(prey_growth: T, predation: T, predator_gain: T, predator_death: T) -> Self {
        Self {
            prey_growth,
            predation,
            predator_gain,
            predator_death,
        }
    }
}

impl<T: Scalar> RightHandSide<T> for LotkaVolterra<T> {
    /// Expects a two-component state.
    fn eval(&self, _t: T, y: &StateVector<T>) -> StateVector<T> {
        let prey = y[0] * (self.prey_growth - self.predation * y[1]);
        let predator = y[1] * (self.predator_gain * y[0] - self.predator_death);
        StateVector::new(vec![prey, predator])
    }
}

/// Linear dynamics `y' = A * y` with a constant coefficient matrix.
///
/// The exact solution `y(t) = exp(A t) * y0` makes this the reference case
/// for checking a solver's convergence order.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
}

impl LinearSystem {
    /// The state length must equal the matrix's column count; evaluation
    /// panics otherwise. A non-square matrix yields rates of the wrong
    /// length, which the stepper rejects as a dimension mismatch.
    pub fn new(matrix: DMatrix<f64>) -> Self {
        Self { matrix }
    }
}

impl RightHandSide<f64> for LinearSystem {
    fn eval(&self, _t: f64, y: &StateVector<f64>) -> StateVector<f64> {
        let rate = &self.matrix * DVector::from_column_slice(y.components());
        StateVector::new(rate.iter().copied().collect())
    }
}
