#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Closed-form damped-spring easing curves.
//!
//! # Role
//! `springcurve` is a pure computational library: it evaluates the analytic
//! solution of a damped harmonic oscillator and exposes it as a normalized
//! easing curve for animation hosts. There is no clock, no integration loop,
//! and no retained simulation state — every sample is a pure function of the
//! requested animation fraction and an immutable configuration.
//!
//! # Primary responsibilities
//! - **[`Spring`]**: physical constants {mass, stiffness, damping}, derived
//!   quantities, and damping-regime classification.
//! - **[`RegimeSolver`]**: the exact closed-form solution for the active
//!   regime (overdamped, critically damped, underdamped).
//! - **[`SpringCurve`]**: a percent-driven façade mapping an animation
//!   fraction in `[0, 1]` to position and velocity, with settle predicates.
//! - **[`BakedCurve`]**: a keyframe snapshot of the analytic curve with
//!   cubic-Hermite evaluation, for consumers that want a reusable
//!   interpolant instead of a per-tick function call.
//!
//! # How it fits in a system
//! An animation host owns timing: it advances a fraction `percent_done` each
//! tick and calls [`SpringCurve::position`] (and occasionally
//! [`SpringCurve::velocity`], [`SpringCurve::is_done`], or
//! [`SpringCurve::is_settling`]) to drive whatever value it is easing.
//! Because evaluation never mutates, configurations are `Copy` and safe to
//! share across threads without coordination.
//!
//! # Example
//!
//! ```
//! use springcurve::SpringCurve;
//!
//! let curve = SpringCurve::OVERSHOOT;
//!
//! // The curve eases from 0 toward 1, passing the target once on the way.
//! assert!((curve.position(0.0)).abs() < 1e-9);
//! assert!(curve.position(0.5) > 1.0);
//! assert!(curve.is_done(1.0));
//! ```

pub mod baked;
pub mod curve;
pub mod solver;
pub mod spring;

pub use baked::{BakedCurve, Keyframe};
pub use curve::{SettleAccuracy, SpringCurve};
pub use solver::RegimeSolver;
pub use spring::{DampingRegime, Spring, SpringError};
