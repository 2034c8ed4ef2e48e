#![forbid(unsafe_code)]

//! Baked keyframe curves with cubic-Hermite evaluation.
//!
//! A [`BakedCurve`] is a fixed snapshot of an analytic curve: an ordered
//! run of keyframes, each carrying a value and in/out tangents. Evaluation
//! interpolates between neighboring keys with the cubic Hermite basis, so a
//! consumer can sample the shape at arbitrary times without re-deriving the
//! closed form — the usual trade for curve assets shared across an
//! animation system.
//!
//! # Invariants
//!
//! 1. Keys are strictly increasing in time. [`BakedCurve::from_keys`] sorts
//!    its input and keeps the first key of any duplicate time.
//! 2. Evaluating exactly at a knot returns that key's stored value (and
//!    tangent), not an interpolated approximation.
//! 3. Outside the key range the curve is constant: the boundary key's value,
//!    with zero velocity.

/// A single sampled keyframe with Hermite tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Sample time, in the baked curve's domain.
    pub time: f64,
    /// Curve value at `time`.
    pub value: f64,
    /// Tangent used when this key ends a segment.
    pub in_tangent: f64,
    /// Tangent used when this key starts a segment.
    pub out_tangent: f64,
}

impl Keyframe {
    /// Keyframe with matching in/out tangents.
    #[must_use]
    pub const fn new(time: f64, value: f64, tangent: f64) -> Self {
        Self {
            time,
            value,
            in_tangent: tangent,
            out_tangent: tangent,
        }
    }
}

/// An ordered sequence of keyframes approximating an analytic curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BakedCurve {
    keys: Vec<Keyframe>,
}

impl BakedCurve {
    /// Build a curve from keyframes, sorting by time and dropping all but
    /// the first key at any duplicate time.
    #[must_use]
    pub fn from_keys(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| {
            a.time
                .partial_cmp(&b.time)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        keys.dedup_by(|a, b| a.time == b.time);
        Self { keys }
    }

    /// The keyframes, ordered by time.
    #[must_use]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Number of keyframes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last keyframe, or 0 for an empty curve.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Curve value at `time`, clamped to the boundary values outside the
    /// key range.
    #[must_use]
    pub fn evaluate(&self, time: f64) -> f64 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        let last = self.keys[self.keys.len() - 1];
        if time >= last.time {
            return last.value;
        }

        let (k0, k1) = self.segment(time);
        let dt = k1.time - k0.time;
        let s = (time - k0.time) / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }

    /// Curve slope at `time`: zero outside the key range, the stored
    /// tangent exactly at a knot, and the Hermite derivative in between.
    #[must_use]
    pub fn evaluate_velocity(&self, time: f64) -> f64 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        if time < first.time {
            return 0.0;
        }
        let last = self.keys[self.keys.len() - 1];
        if time > last.time {
            return 0.0;
        }
        if time == last.time {
            return last.in_tangent;
        }

        let (k0, k1) = self.segment(time);
        let dt = k1.time - k0.time;
        let s = (time - k0.time) / dt;
        let s2 = s * s;

        let d00 = 6.0 * s2 - 6.0 * s;
        let d10 = 3.0 * s2 - 4.0 * s + 1.0;
        let d01 = -6.0 * s2 + 6.0 * s;
        let d11 = 3.0 * s2 - 2.0 * s;

        (d00 * k0.value + d01 * k1.value) / dt + d10 * k0.out_tangent + d11 * k1.in_tangent
    }

    /// Neighboring keys around `time`. Callers guarantee
    /// `first.time <= time < last.time` and at least two keys.
    fn segment(&self, time: f64) -> (Keyframe, Keyframe) {
        let hi = self.keys.partition_point(|k| k.time <= time);
        (self.keys[hi - 1], self.keys[hi])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
