use crate::{
    error::IntegrationError,
    state::StateVector,
    traits::{RightHandSide, Scalar, Stepper},
};

/// Classic Runge-Kutta 4th order fixed-step solver.
///
/// Four right-hand-side evaluations per step; local truncation error is
/// `O(h^5)`, global error `O(h^4)` for a sufficiently smooth right-hand
/// side. The evaluation points and weights are what define the method's
/// order and are not configurable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl<T: Scalar> Stepper<T> for Rk4 {
    fn step(
        &self,
        f: &impl RightHandSide<T>,
        t: T,
        y: &StateVector<T>,
        h: T,
    ) -> Result<StateVector<T>, IntegrationError> {
        if !h.is_finite() || h <= T::zero() {
            return Err(IntegrationError::InvalidStepSize {
                h: h.to_f64().unwrap_or(f64::NAN),
            });
        }

        let one = T::one();
        let two = T::from_f64(2.0).unwrap();
        let half_h = h * T::from_f64(0.5).unwrap();
        let sixth_h = h * T::from_f64(1.0 / 6.0).unwrap();

        // k1 = f(t, y)
        let k1 = f.eval(t, y);

        // k2 = f(t + h/2, y + h/2 * k1)
        let k2 = f.eval(t + half_h, &StateVector::combine(&[(one, y), (half_h, &k1)])?);

        // k3 = f(t + h/2, y + h/2 * k2)
        let k3 = f.eval(t + half_h, &StateVector::combine(&[(one, y), (half_h, &k2)])?);

        // k4 = f(t + h, y + h * k3)
        let k4 = f.eval(t + h, &StateVector::combine(&[(one, y), (h, &k3)])?);

        // y_next = y + h/6 * (k1 + 2*k2 + 2*k3 + k4)
        let y_next = StateVector::combine(&[
            (one, y),
            (sixth_h, &k1),
            (sixth_h * two, &k2),
            (sixth_h * two, &k3),
            (sixth_h, &k4),
        ])?;

        if let Some(index) = y_next.first_non_finite() {
            return Err(IntegrationError::NonFiniteState {
                index,
                time: (t + h).to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(y_next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_is_exact_for_cubic_time_dependence() {
        // y' = 3t^2 has solution y = t^3; the RK4 quadrature is exact for
        // polynomial rates up to degree three, so one step carries no error
        // at all. Only holds if the stage times are the true elapsed times.
        let f = |t: f64, _y: &StateVector<f64>| StateVector::new(vec![3.0 * t * t]);
        let y = StateVector::new(vec![1.0]);

        let next = Rk4.step(&f, 1.0, &y, 0.5).unwrap();
        assert_relative_eq!(next[0], 1.5_f64.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn step_matches_exponential_to_fifth_order() {
        // y' = y from y(0) = 1: one RK4 step reproduces the Taylor series
        // of e^h through the h^4 term, so the defect is about h^5 / 5!.
        let f = |_t: f64, y: &StateVector<f64>| y.scale(1.0);
        let y = StateVector::new(vec![1.0]);
        let h = 0.1;

        let next = Rk4.step(&f, 0.0, &y, h).unwrap();
        let expected: f64 = (0..=4).map(|j| h.powi(j) / factorial(j)).sum();
        assert_relative_eq!(next[0], expected, max_relative = 1e-14);
        assert!((next[0] - h.exp()).abs() < 1e-7);
    }

    #[test]
    fn step_rejects_bad_step_sizes() {
        let f = |_t: f64, y: &StateVector<f64>| y.scale(1.0);
        let y = StateVector::new(vec![1.0]);

        for h in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = Rk4.step(&f, 0.0, &y, h);
            assert!(
                matches!(result, Err(IntegrationError::InvalidStepSize { .. })),
                "h = {h} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn step_reports_rate_dimension_mismatch() {
        // The rate vector must match the state's length on every stage.
        let f = |_t: f64, _y: &StateVector<f64>| StateVector::new(vec![1.0]);
        let y = StateVector::new(vec![1.0, 2.0]);

        assert_eq!(
            Rk4.step(&f, 0.0, &y, 0.1),
            Err(IntegrationError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn step_surfaces_overflow_as_non_finite_state() {
        let f = |_t: f64, y: &StateVector<f64>| y.scale(1e308);
        let y = StateVector::new(vec![1.0]);

        let result = Rk4.step(&f, 0.0, &y, 1.0);
        assert!(
            matches!(result, Err(IntegrationError::NonFiniteState { index: 0, .. })),
            "overflow should surface as NonFiniteState, got {result:?}"
        );
    }

    fn factorial(n: i32) -> f64 {
        (1..=n).map(f64::from).product()
    }
}
