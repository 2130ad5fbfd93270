//! The `orbit_core` crate is the numerical engine for Orbit: a fixed-step
//! explicit integrator for systems of first-order ordinary differential
//! equations.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `RightHandSide` (the
//!   caller-supplied derivative map), `Stepper` (single-step solvers).
//! - **State**: `StateVector`, the immutable per-sample value type with the
//!   elementwise arithmetic the stage combinations need.
//! - **Solvers**: the classical fixed-step RK4 stepper.
//! - **Trajectory**: the time-stamped sample sequence and the `integrate`
//!   driver that assembles it.
//! - **Systems**: ready-made right-hand sides (Lotka-Volterra, constant
//!   linear systems).

pub mod error;
pub mod solvers;
pub mod state;
pub mod systems;
pub mod trajectory;
pub mod traits;
