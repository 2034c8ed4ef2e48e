#![forbid(unsafe_code)]

//! Closed-form evaluation of damped spring motion.
//!
//! A [`RegimeSolver`] precomputes the integration constants of the active
//! damping regime from a spring, an initial offset from the target, and an
//! initial velocity. Evaluation is fully analytic: no iterative stepping,
//! no per-frame integration error, and the same `(solver, time)` pair always
//! produces bit-identical output.
//!
//! Positions here are *offsets from the target*. A solver built with
//! `distance = start - end` decays toward zero, and the absolute value is
//! recovered as `end + solver.position(time)` — which is exactly what
//! [`sample_position`] does.
//!
//! # Invariants
//!
//! 1. Exactly one regime variant is selected per construction, by comparing
//!    the squared damping ratio against 1.0.
//! 2. `position(0) == distance` and `velocity(0) == velocity` (up to
//!    floating-point rounding) for every variant.
//! 3. Evaluation never mutates; solvers are `Copy`.
//!
//! # Failure Modes
//!
//! - Large times with near-zero damping: the returned magnitude is bounded
//!   by the initial amplitude but the phase cycles forever, so "settled"
//!   predicates may never hold.
//! - Negative time is mathematically defined (the solution extends to all of
//!   ℝ) but physically meaningless; magnitudes grow exponentially there.

use crate::spring::{DampingRegime, Spring};

/// Precomputed closed-form coefficients for one damping regime.
///
/// The variant is chosen by [`Spring::regime`] at construction; evaluation
/// dispatches with an exhaustive match, so adding a regime is a compile
/// error until every evaluator handles it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegimeSolver {
    /// Two distinct real characteristic roots. `r1` carries the minus root
    /// of the discriminant and `r2` the plus root; each root multiplies its
    /// own exponential, so the pairing with `c1`/`c2` is load-bearing.
    Overdamped { r1: f64, r2: f64, c1: f64, c2: f64 },
    /// One repeated real root `r`.
    CriticallyDamped { r: f64, c1: f64, c2: f64 },
    /// Complex-conjugate roots; `omega` is the damped angular frequency.
    Underdamped {
        omega: f64,
        r: f64,
        c1: f64,
        c2: f64,
    },
}

impl RegimeSolver {
    /// Precompute the solver for `spring`, starting `distance` away from the
    /// target with an initial `velocity`.
    #[must_use]
    pub fn new(spring: &Spring, distance: f64, velocity: f64) -> Self {
        let mass = spring.mass();
        let stiffness = spring.stiffness();
        let damping = spring.damping();

        match spring.regime() {
            DampingRegime::Overdamped => {
                let cmk = damping * damping - 4.0 * mass * stiffness;
                let r1 = (-damping - cmk.sqrt()) / (2.0 * mass);
                let r2 = (-damping + cmk.sqrt()) / (2.0 * mass);
                let c2 = (velocity - r1 * distance) / (r2 - r1);
                let c1 = distance - c2;
                Self::Overdamped { r1, r2, c1, c2 }
            }
            DampingRegime::CriticallyDamped => {
                let r = -damping / (2.0 * mass);
                let c1 = distance;
                let c2 = velocity - r * distance;
                Self::CriticallyDamped { r, c1, c2 }
            }
            DampingRegime::Underdamped => {
                let omega = (4.0 * mass * stiffness - damping * damping).sqrt() / (2.0 * mass);
                let r = -damping / (2.0 * mass);
                let c1 = distance;
                let c2 = (velocity - r * distance) / omega;
                Self::Underdamped { omega, r, c1, c2 }
            }
        }
    }

    /// Offset from the target at `time`.
    #[must_use]
    pub fn position(&self, time: f64) -> f64 {
        match *self {
            Self::Overdamped { r1, r2, c1, c2 } => {
                c1 * (r1 * time).exp() + c2 * (r2 * time).exp()
            }
            Self::CriticallyDamped { r, c1, c2 } => (c1 + c2 * time) * (r * time).exp(),
            Self::Underdamped { omega, r, c1, c2 } => {
                (r * time).exp() * (c1 * (omega * time).cos() + c2 * (omega * time).sin())
            }
        }
    }

    /// Rate of change of the offset at `time`.
    #[must_use]
    pub fn velocity(&self, time: f64) -> f64 {
        match *self {
            Self::Overdamped { r1, r2, c1, c2 } => {
                c1 * r1 * (r1 * time).exp() + c2 * r2 * (r2 * time).exp()
            }
            Self::CriticallyDamped { r, c1, c2 } => {
                let power = (r * time).exp();
                r * (c1 + c2 * time) * power + c2 * power
            }
            Self::Underdamped { omega, r, c1, c2 } => {
                let power = (r * time).exp();
                let cosine = (omega * time).cos();
                let sine = (omega * time).sin();
                power * (c2 * omega * cosine - c1 * omega * sine)
                    + r * power * (c2 * sine + c1 * cosine)
            }
        }
    }
}

/// Absolute position at `time` of a spring released from `start` toward
/// `end` with an initial `start_velocity`.
#[must_use]
pub fn sample_position(
    time: f64,
    spring: &Spring,
    start: f64,
    end: f64,
    start_velocity: f64,
) -> f64 {
    end + RegimeSolver::new(spring, start - end, start_velocity).position(time)
}

/// Velocity at `time` of a spring released `distance` away from its target
/// with an initial `start_velocity`.
#[must_use]
pub fn sample_velocity(time: f64, spring: &Spring, distance: f64, start_velocity: f64) -> f64 {
    RegimeSolver::new(spring, distance, start_velocity).velocity(time)
}

/// Canonical position sample: released at rest from 0, easing toward 1.
#[must_use]
pub fn position(time: f64, spring: &Spring) -> f64 {
    sample_position(time, spring, 0.0, 1.0, 0.0)
}

/// Canonical velocity sample: released at rest one unit below the target.
#[must_use]
pub fn velocity(time: f64, spring: &Spring) -> f64 {
    sample_velocity(time, spring, -1.0, 0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
