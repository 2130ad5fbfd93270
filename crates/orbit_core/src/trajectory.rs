use crate::{
    error::IntegrationError,
    solvers::Rk4,
    state::StateVector,
    traits::{RightHandSide, Scalar, Stepper},
};
use serde::{Deserialize, Serialize};

/// One time-stamped state produced during integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<T> {
    pub time: T,
    pub state: StateVector<T>,
}

/// The full discretized solution of one integration run: an ordered sequence
/// of samples with strictly increasing times, one step size apart, starting
/// at the initial condition. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<T> {
    pub samples: Vec<Sample<T>>,
}

impl<T: Scalar> Trajectory<T> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample<T>> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample<T>> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    /// The sampled times, in order.
    pub fn times(&self) -> Vec<T> {
        self.samples.iter().map(|s| s.time).collect()
    }
}

/// Integrates `y' = f(t, y)` from `(t0, y0)` to `tf` with the classical RK4
/// stepper and step size `h`.
///
/// See [`integrate_with`] for the full contract.
pub fn integrate<T: Scalar>(
    f: &impl RightHandSide<T>,
    y0: StateVector<T>,
    t0: T,
    tf: T,
    h: T,
) -> Result<Trajectory<T>, IntegrationError> {
    integrate_with(&Rk4, f, y0, t0, tf, h)
}

/// Integrates `y' = f(t, y)` from `(t0, y0)` to `tf` with a caller-chosen
/// stepper.
///
/// The trajectory starts with `(t0, y0)` exactly and takes
/// `floor((tf - t0) / h)` steps, so it holds one sample more than that. The
/// loop iterates over the pre-computed step count and stamps each sample
/// with `t0 + i * h`; accumulating time and comparing it against `tf` would
/// drift over long runs.
///
/// Fails with `InvalidStepSize` if `h` is not finite and positive or if
/// `tf <= t0`, and with `DimensionMismatch` if `y0` is empty. Any failure
/// from an individual step aborts the run; the partial trajectory is
/// discarded, never returned.
pub fn integrate_with<T: Scalar>(
    stepper: &impl Stepper<T>,
    f: &impl RightHandSide<T>,
    y0: StateVector<T>,
    t0: T,
    tf: T,
    h: T,
) -> Result<Trajectory<T>, IntegrationError> {
    let invalid = || IntegrationError::InvalidStepSize {
        h: h.to_f64().unwrap_or(f64::NAN),
    };

    if !h.is_finite() || h <= T::zero() || !(tf > t0) {
        return Err(invalid());
    }
    if y0.is_empty() {
        return Err(IntegrationError::DimensionMismatch {
            expected: 1,
            found: 0,
        });
    }

    let steps = ((tf - t0) / h).floor().to_usize().ok_or_else(invalid)?;

    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(Sample { time: t0, state: y0 });

    for i in 0..steps {
        let t = t0 + T::from_usize(i).unwrap() * h;
        let next = stepper.step(f, t, &samples[i].state, h)?;
        samples.push(Sample {
            time: t0 + T::from_usize(i + 1).unwrap() * h,
            state: next,
        });
    }

    Ok(Trajectory { samples })
}
