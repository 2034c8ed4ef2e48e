//! Benchmark: per-tick analytic sampling vs baked-curve evaluation.
//!
//! Run with: `cargo bench -p springcurve --bench sampling_bench`
//!
//! An animation host samples once per frame per animated value, so the
//! closed-form path is the hot one; baking trades a one-time cost for
//! cheaper Hermite lookups afterwards.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use springcurve::{Spring, SpringCurve, solver::RegimeSolver};

fn bench_analytic_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytic_sampling");

    group.bench_function("position_overshoot", |b| {
        let curve = SpringCurve::OVERSHOOT;
        let mut percent = 0.0_f64;
        b.iter(|| {
            percent = (percent + 0.001) % 1.0;
            black_box(curve.position(black_box(percent)))
        });
    });

    group.bench_function("position_and_velocity_ease", |b| {
        let curve = SpringCurve::EASE;
        let mut percent = 0.0_f64;
        b.iter(|| {
            percent = (percent + 0.001) % 1.0;
            black_box(curve.position(percent)) + black_box(curve.velocity(percent))
        });
    });

    group.bench_function("prebuilt_solver_position", |b| {
        // Constructing the solver once amortizes the coefficient setup that
        // the curve facade redoes on every call.
        let spring = Spring::from_overshoot(0.025);
        let solver = RegimeSolver::new(&spring, -1.0, 0.0);
        let mut t = 0.0_f64;
        b.iter(|| {
            t = (t + 0.01) % 12.0;
            black_box(solver.position(black_box(t)))
        });
    });

    group.finish();
}

fn bench_bake(c: &mut Criterion) {
    let mut group = c.benchmark_group("bake");

    group.bench_function("bake_overshoot", |b| {
        b.iter(|| black_box(SpringCurve::OVERSHOOT.bake()));
    });

    group.bench_function("baked_evaluate", |b| {
        let baked = SpringCurve::OVERSHOOT.bake();
        let mut t = 0.0_f64;
        b.iter(|| {
            t = (t + 0.001) % 1.0;
            black_box(baked.evaluate(black_box(t)))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_analytic_sampling, bench_bake);
criterion_main!(benches);
