//! Integration tests for the spring easing curve, exercised the way an
//! animation host drives it: repeated percent-driven sampling, settle
//! checks, and baked-snapshot consumption.

use springcurve::{SettleAccuracy, SpringCurve};

/// Sample `curve.position` over [0, 1] on a fine grid.
fn sweep(curve: &SpringCurve, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| curve.position(i as f64 / steps as f64))
        .collect()
}

#[test]
fn ease_is_done_at_the_end() {
    assert!(SpringCurve::EASE.is_done(1.0));
}

#[test]
fn overshoot_is_done_at_the_end() {
    assert!(SpringCurve::OVERSHOOT.is_done(1.0));
}

#[test]
fn ease_lands_within_a_thousandth_of_target() {
    assert!((SpringCurve::EASE.position(1.0) - 1.0).abs() <= 0.001);
}

#[test]
fn overshoot_passes_the_target_then_settles() {
    let samples = sweep(&SpringCurve::OVERSHOOT, 1000);
    let peak = samples.iter().fold(0.0_f64, |acc, &p| acc.max(p.abs()));
    assert!(peak > 1.0, "overshoot curve never exceeded target, peak {peak}");
    assert!(
        (samples.last().unwrap() - 1.0).abs() <= 0.01,
        "overshoot curve did not settle near target"
    );
}

#[test]
fn ease_stays_close_to_target_after_arrival() {
    // Past the first half-oscillation the ease curve should not wander more
    // than its configured overshoot above the target.
    let curve = SpringCurve::EASE;
    for i in 500..=1000 {
        let p = curve.position(f64::from(i) / 1000.0);
        assert!(p <= 1.0 + 0.002, "ease exceeded overshoot budget: {p}");
    }
}

#[test]
fn curves_start_from_rest() {
    for curve in [SpringCurve::EASE, SpringCurve::OVERSHOOT] {
        assert!(curve.position(0.0).abs() < 1e-9);
        assert!(curve.velocity(0.0).abs() < 1e-9);
    }
}

#[test]
fn not_done_mid_flight() {
    assert!(!SpringCurve::EASE.is_done(0.1));
    assert!(!SpringCurve::OVERSHOOT.is_done(0.5));
}

#[test]
fn settling_flips_after_first_half_oscillation() {
    let curve = SpringCurve::OVERSHOOT; // threshold at 0.25
    for i in 0..=25 {
        assert!(!curve.is_settling(f64::from(i) / 100.0));
    }
    for i in 26..=200 {
        assert!(curve.is_settling(f64::from(i) / 100.0));
    }
}

#[test]
fn settle_accuracy_matches_landing_error() {
    assert_eq!(SpringCurve::EASE.settle_accuracy(), SettleAccuracy::Exact);
    assert_eq!(SpringCurve::new(1.0, 0.1).settle_accuracy(), SettleAccuracy::Near);
    assert_eq!(SpringCurve::new(0.5, 0.5).settle_accuracy(), SettleAccuracy::Off);
}

#[test]
fn bake_round_trips_at_its_own_knots() {
    for curve in [SpringCurve::EASE, SpringCurve::OVERSHOOT] {
        let baked = curve.bake();
        assert!(!baked.is_empty());
        for k in baked.keys() {
            // Knot samples are direct, not interpolated: bit-identical to
            // the analytic evaluation.
            assert_eq!(baked.evaluate(k.time), curve.position(k.time));
            let analytic_tangent = curve.velocity(k.time) * 10.0;
            assert!(
                (baked.evaluate_velocity(k.time) - analytic_tangent).abs() <= 1e-9,
                "tangent mismatch at t={}",
                k.time
            );
        }
    }
}

#[test]
fn baked_curve_spans_percent_domain() {
    let baked = SpringCurve::OVERSHOOT.bake();
    assert_eq!(baked.keys()[0].time, 0.0);
    assert_eq!(baked.duration(), 1.0);
}

#[test]
fn baked_curve_clamps_outside_domain() {
    let baked = SpringCurve::EASE.bake();
    assert_eq!(baked.evaluate(-1.0), baked.keys()[0].value);
    assert_eq!(baked.evaluate(2.0), baked.keys().last().unwrap().value);
}

#[test]
fn baked_curve_tracks_analytic_shape_between_knots() {
    // Hermite interpolation is an approximation; it should stay within a
    // few percent of the closed form across the domain.
    let curve = SpringCurve::OVERSHOOT;
    let baked = curve.bake();
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        let err = (baked.evaluate(t) - curve.position(t)).abs();
        assert!(err < 0.2, "baked curve diverged at t={t}: err {err}");
    }
}

#[test]
fn out_of_domain_sampling_is_supported() {
    let curve = SpringCurve::OVERSHOOT;
    for p in [-0.5, 1.5, 3.0] {
        assert!(curve.position(p).is_finite());
        assert!(curve.velocity(p).is_finite());
    }
    // Past the nominal end the curve keeps converging on the target.
    assert!((curve.position(2.0) - 1.0).abs() < 1e-3);
}

#[test]
fn identical_configurations_sample_identically() {
    let a = SpringCurve::new(2.0, 0.025);
    let b = SpringCurve::OVERSHOOT;
    for i in 0..=50 {
        let p = f64::from(i) / 50.0;
        assert_eq!(a.position(p), b.position(p));
        assert_eq!(a.velocity(p), b.velocity(p));
    }
}

#[test]
fn concurrent_sampling_needs_no_coordination() {
    let curve = SpringCurve::OVERSHOOT;
    let baseline: Vec<f64> = sweep(&curve, 200);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || sweep(&curve, 200)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), baseline);
    }
}
