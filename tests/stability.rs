//! These tests are tuned to just barely succeed, to find what the stability
//! limits of the refinement strategies are and to catch stability regressions.
//!
//! This should be updated if the stability is improved.

use sturm_poly::{
    Equation, Refinement, SolverConfig,
    __testing::{check_roots, test_case_separated_roots, RandStreamR64},
};

fn solve(strategy: Refinement, deg: usize, seeds: (u64, u64), min_gap: f64, tol: f64) {
    let _ = simple_logger::init_with_level(log::Level::Warn);
    let config = SolverConfig::default().with_strategy(strategy);
    let mut roots_stream = RandStreamR64::new(seeds.0, -2.0, 2.0);
    let mut scale_stream = RandStreamR64::new(seeds.1, 1.0, 10.0);
    for i in 0..200 {
        let (poly, expected_roots) =
            test_case_separated_roots(&mut roots_stream, &mut scale_stream, deg, min_gap);
        let eq = Equation::with_config(poly.clone(), &config)
            .unwrap_or_else(|e| panic!("@ {i}: {poly}: {e}"));
        assert!(
            check_roots(eq.solutions(), &expected_roots, tol),
            "@ {i}: {:?} != {expected_roots:?}",
            eq.solutions()
        );
    }
}

/// - max degree: 6
/// - min gap: 0.1
#[test]
fn newton_real() {
    solve(Refinement::Newton, 6, (1, 2), 0.1, 1E-5);
}

/// - max degree: 6
/// - min gap: 0.1
/// - worst-case error: bisection stops on `|p(x)|`, so flat polynomials lose
///   digits
#[test]
fn bisection_real() {
    solve(Refinement::Bisection, 6, (1, 2), 0.1, 1E-3);
}

/// - max degree: 4
/// - min gap: 0.05
#[test]
fn newton_close_roots() {
    solve(Refinement::Newton, 4, (3, 4), 0.05, 1E-5);
}

/// - max degree: 4
/// - min gap: 0.05
#[test]
fn bisection_close_roots() {
    solve(Refinement::Bisection, 4, (3, 4), 0.05, 1E-3);
}
