#![forbid(unsafe_code)]

//! Percent-driven spring easing curve.
//!
//! A [`SpringCurve`] maps a normalized animation fraction to spring motion:
//! `percent_done = 0` is the start of the animation, `percent_done = 1` is
//! the end, and the sampled position eases from 0 toward 1, exceeding 1 by
//! roughly the configured overshoot fraction before settling. The mapping
//! stretches the fraction over `oscillations` half-periods of the unit
//! spring, so the same fraction always lands on the same phase of the
//! motion regardless of how the host paces its ticks.
//!
//! The configuration is a plain `Copy` value; all sampling is pure. Hosts
//! that prefer a reusable interpolant over a per-tick closed-form call can
//! snapshot the curve once with [`SpringCurve::bake`].
//!
//! # Invariants
//!
//! 1. `position`/`velocity` are pure functions of `(self, percent_done)` —
//!    identical inputs return bit-identical results.
//! 2. `position(0) == 0` and, for any overshoot below 1, `position(p) → 1`
//!    as `p` grows.
//! 3. Construction sanitizes the tunables: oscillations are clamped to be
//!    non-negative and the overshoot fraction to `[0, 1]`.
//!
//! # Failure Modes
//!
//! - `percent_done` outside `[0, 1]` is supported (that is how hosts stretch
//!   a bounce past its nominal end), but far outside the domain the returned
//!   displacement is unbounded for lightly damped configurations.
//! - `oscillations == 0` collapses the time mapping: every sample lands at
//!   the start of the motion and [`SpringCurve::is_settling`] never turns
//!   true.
//! - [`SpringCurve::bake`] allocates one key per half-oscillation, so an
//!   astronomically large oscillation count allocates accordingly.

use std::f64::consts::{PI, TAU};

use crate::baked::{BakedCurve, Keyframe};
use crate::solver;
use crate::spring::Spring;

/// Period of the unit spring (mass = stiffness = 1): `2π·sqrt(m/k)`.
///
/// [`SpringCurve`] fixes mass and stiffness at 1 and tunes feel entirely
/// through the overshoot fraction, so the period is a constant.
const UNIT_PERIOD: f64 = TAU;

/// Default tolerance for [`SpringCurve::is_done`].
const DONE_EPSILON: f64 = 0.01;

/// Baked tangents store the analytic velocity scaled by this factor.
const TANGENT_SCALE: f64 = 10.0;

/// Tangent magnitudes below this snap to exactly zero when baking.
const TANGENT_SNAP: f64 = 1e-9;

/// How close the curve ends to its target, graded with the thresholds used
/// for authoring feedback: within 0.1%, within 1%, or further off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleAccuracy {
    /// Ends within 0.1% of the target value.
    Exact,
    /// Ends within 1% of the target value.
    Near,
    /// Ends more than 1% off the target value.
    Off,
}

/// A spring easing curve driven by a normalized animation fraction.
///
/// `oscillations` counts the half-periods traversed over the `[0, 1]`
/// domain; `overshoot_percent` is the fraction by which the response may
/// exceed the target before settling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringCurve {
    oscillations: f64,
    overshoot_percent: f64,
}

impl SpringCurve {
    /// Gentle settle with minimal overshoot.
    pub const EASE: Self = Self {
        oscillations: 2.0,
        overshoot_percent: 0.001,
    };

    /// Visible bounce: passes the target by 2.5% before settling.
    pub const OVERSHOOT: Self = Self {
        oscillations: 2.0,
        overshoot_percent: 0.025,
    };

    /// Create a curve from an oscillation count and an overshoot fraction.
    ///
    /// Oscillations are clamped to be non-negative and the overshoot to
    /// `[0, 1]`; non-finite input collapses to 0.
    #[must_use]
    pub fn new(oscillations: f64, overshoot_percent: f64) -> Self {
        Self {
            oscillations: if oscillations.is_finite() {
                oscillations.max(0.0)
            } else {
                0.0
            },
            overshoot_percent: if overshoot_percent.is_finite() {
                overshoot_percent.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    /// Set the oscillation count (builder pattern). Clamped to minimum 0.
    #[must_use]
    pub fn with_oscillations(self, oscillations: f64) -> Self {
        Self::new(oscillations, self.overshoot_percent)
    }

    /// Set the overshoot fraction (builder pattern). Clamped to `[0, 1]`.
    #[must_use]
    pub fn with_overshoot_percent(self, overshoot_percent: f64) -> Self {
        Self::new(self.oscillations, overshoot_percent)
    }

    /// Number of half-periods traversed over the full `[0, 1]` domain.
    #[inline]
    #[must_use]
    pub fn oscillations(&self) -> f64 {
        self.oscillations
    }

    /// Fraction by which the response may exceed the target.
    #[inline]
    #[must_use]
    pub fn overshoot_percent(&self) -> f64 {
        self.overshoot_percent
    }

    /// Solver-time length of the `[0, 1]` percent domain.
    #[must_use]
    pub fn unscaled_duration(&self) -> f64 {
        UNIT_PERIOD * self.oscillations
    }

    /// The unit spring this curve evaluates.
    #[must_use]
    pub fn spring(&self) -> Spring {
        Spring::from_overshoot(self.overshoot_percent)
    }

    /// Sampled position at `percent_done`: 0 at the start, easing toward 1.
    ///
    /// The returned value is not clamped — exceeding 1 mid-flight is the
    /// point of a spring curve.
    #[must_use]
    pub fn position(&self, percent_done: f64) -> f64 {
        solver::position(percent_done * self.unscaled_duration(), &self.spring())
    }

    /// Sampled velocity at `percent_done`.
    #[must_use]
    pub fn velocity(&self, percent_done: f64) -> f64 {
        solver::velocity(percent_done * self.unscaled_duration(), &self.spring())
    }

    /// Whether the animation has effectively finished at `percent_done`,
    /// using the default tolerance of 0.01.
    #[must_use]
    pub fn is_done(&self, percent_done: f64) -> bool {
        self.is_done_within(percent_done, DONE_EPSILON)
    }

    /// Whether the animation has effectively finished at `percent_done`.
    ///
    /// Requires both the position to sit within `epsilon` of the unit target
    /// and the velocity magnitude to be at most `epsilon`. A curve that is
    /// crossing the target at speed therefore still reads "not done".
    #[must_use]
    pub fn is_done_within(&self, percent_done: f64, epsilon: f64) -> bool {
        let position_error = (1.0 - self.position(percent_done).abs()).abs();
        let velocity_error = self.velocity(percent_done).abs();
        position_error <= epsilon && velocity_error <= epsilon
    }

    /// Whether the motion is past its first half-oscillation at
    /// `percent_done`.
    ///
    /// Hosts use this as the boundary after which the trajectory is close
    /// enough to monotonic decay that the target can be redirected without a
    /// visible pop. With `oscillations == 0` the threshold is infinite and
    /// the predicate never turns true.
    #[must_use]
    pub fn is_settling(&self, percent_done: f64) -> bool {
        percent_done > 1.0 / (self.oscillations * 2.0)
    }

    /// Grade how close the curve ends to its target at `percent_done = 1`.
    #[must_use]
    pub fn settle_accuracy(&self) -> SettleAccuracy {
        let distance = (self.position(1.0) - 1.0).abs();
        if distance <= 0.001 {
            SettleAccuracy::Exact
        } else if distance <= 0.01 {
            SettleAccuracy::Near
        } else {
            SettleAccuracy::Off
        }
    }

    /// Snapshot the analytic curve into keyframes with tangents.
    ///
    /// Samples `floor(2·oscillations) + 2` points spaced `π` apart in solver
    /// time (one per half-oscillation), scaled back into the `[0, 1]`
    /// percent domain and clamped to it. Each keyframe stores the analytic
    /// position and, as both tangents, the analytic velocity scaled by 10
    /// (snapped to exactly 0 near zero). Samples whose clamped time
    /// collides with an already-emitted key are dropped, matching host
    /// curve containers that reject duplicate key times.
    #[must_use]
    pub fn bake(&self) -> BakedCurve {
        let duration = self.unscaled_duration();
        let num_samples = (2.0 * self.oscillations).floor() as usize + 2;

        let mut keys: Vec<Keyframe> = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            let time = if duration > 0.0 {
                (i as f64 * PI / duration).clamp(0.0, 1.0)
            } else if i == 0 {
                // Degenerate zero-length domain: hold the constant sample
                // at both ends.
                0.0
            } else {
                1.0
            };

            if keys.last().is_some_and(|k| k.time == time) {
                continue;
            }

            let mut tangent = self.velocity(time) * TANGENT_SCALE;
            if tangent.abs() < TANGENT_SNAP {
                tangent = 0.0;
            }

            keys.push(Keyframe::new(time, self.position(time), tangent));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            keys = keys.len(),
            oscillations = self.oscillations,
            overshoot_percent = self.overshoot_percent,
            "baked spring curve"
        );

        BakedCurve::from_keys(keys)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
