use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sturm_poly::{Equation, Poly64, Refinement, SolverConfig, SturmSequence};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, sturm_sequence, count_all_roots, legendre);

pub fn sturm_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sturm_sequence");
    for n in [1, 2, 4, 8, 16, 24] {
        let p = Poly64::cheby1(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(SturmSequence::new(black_box(&p))));
        });
    }
    group.finish();
}

pub fn count_all_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_all_roots");
    for n in [1, 2, 4, 8, 16, 24] {
        let s = SturmSequence::new(&Poly64::cheby1(n));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&s).count_all_roots()));
        });
    }
    group.finish();
}

pub fn legendre(c: &mut Criterion) {
    let mut group = c.benchmark_group("legendre");
    for n in [1, 2, 4, 8, 16, 24, 30] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(Poly64::legendre(black_box(n))));
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, solve_cheby1_newton, solve_cheby1_bisection);

fn solve_cheby1(c: &mut Criterion, name: &str, strategy: Refinement) {
    let config = SolverConfig::default().with_strategy(strategy);
    let mut group = c.benchmark_group(name);
    for n in [1, 2, 4, 8, 12] {
        let p = Poly64::cheby1(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(Equation::with_config(black_box(p.clone()), &config)));
        });
    }
    group.finish();
}

pub fn solve_cheby1_newton(c: &mut Criterion) {
    solve_cheby1(c, "solve cheby1 newton", Refinement::Newton);
}

pub fn solve_cheby1_bisection(c: &mut Criterion) {
    solve_cheby1(c, "solve cheby1 bisection", Refinement::Bisection);
}
