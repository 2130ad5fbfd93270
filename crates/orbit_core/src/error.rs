use thiserror::Error;

/// Failure conditions surfaced by steppers and the trajectory driver.
///
/// All of these abort the run that raised them. A single corrupted state
/// makes every later sample meaningless, so there is no retry, no partial
/// result, and no default-value substitution anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntegrationError {
    /// Two vectors that must agree in length did not, e.g. a right-hand-side
    /// evaluation returned a different number of components than the state
    /// it was evaluated at.
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The step size was zero, negative, or non-finite, or the requested
    /// time span was empty.
    #[error("invalid step size {h}: the step must be finite and positive and the time span non-empty")]
    InvalidStepSize { h: f64 },

    /// A freshly computed state contained a NaN or infinite component,
    /// signalling numerical blow-up or an ill-posed right-hand side.
    #[error("non-finite value in state component {index} at t = {time}")]
    NonFiniteState { index: usize, time: f64 },
}
