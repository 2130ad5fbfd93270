use crate::{error::IntegrationError, state::StateVector};
use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in integrated systems.
/// Must support floating-point arithmetic, debug printing, and conversion
/// to and from `f64`.
pub trait Scalar: Float + FromPrimitive + ToPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + ToPrimitive + Debug + 'static> Scalar for T {}

/// The right-hand side of a first-order ODE system, `y' = f(t, y)`.
///
/// Implementations must be pure: deterministic, side-effect-free, and
/// reentrant. The integrator evaluates the right-hand side up to four times
/// per step and never inspects it beyond calling `eval`.
///
/// Any closure of the matching shape is a right-hand side, so models can be
/// passed inline:
///
/// ```ignore
/// let decay = |_t: f64, y: &StateVector<f64>| y.scale(-0.5);
/// let trajectory = integrate(&decay, y0, 0.0, 10.0, 0.01)?;
/// ```
pub trait RightHandSide<T: Scalar> {
    /// Evaluates the instantaneous rate of change at `(t, y)`.
    ///
    /// The returned vector must have the same length as `y`; the stepper
    /// reports a `DimensionMismatch` if it does not.
    fn eval(&self, t: T, y: &StateVector<T>) -> StateVector<T>;
}

impl<T: Scalar, F> RightHandSide<T> for F
where
    F: Fn(T, &StateVector<T>) -> StateVector<T>,
{
    fn eval(&self, t: T, y: &StateVector<T>) -> StateVector<T> {
        self(t, y)
    }
}

/// A trait for solvers that can advance a state one step forward.
pub trait Stepper<T: Scalar> {
    /// Produces the state at `t + h` from the state `y` at `t`.
    ///
    /// Fails with `InvalidStepSize` if `h` is not finite and positive,
    /// `DimensionMismatch` if a stage evaluation changes the state length,
    /// or `NonFiniteState` if the advanced state blew up.
    fn step(
        &self,
        f: &impl RightHandSide<T>,
        t: T,
        y: &StateVector<T>,
        h: T,
    ) -> Result<StateVector<T>, IntegrationError>;
}
