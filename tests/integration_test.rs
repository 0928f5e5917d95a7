use std::f64::consts::PI;

use fastrand::Rng;
use sturm_poly::{
    __testing::{check_roots, poly_from_roots},
    poly, Equation, Error, Point, Poly, Poly64, Refinement, SolverConfig, SturmSequence,
};

fn rand_poly(rng: &mut Rng) -> Poly64 {
    let len = rng.usize(0..5);
    Poly64::from_real_iterator((0..len).map(|_| rng.f64().mul_add(4.0, -2.0)))
}

fn assert_roots(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} != {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() <= tol, "{actual:?} != {expected:?}");
    }
}

#[test]
fn difference_of_squares() {
    let eq = Equation::new(poly![-1.0, 0.0, 1.0]).unwrap();
    assert_roots(eq.solutions(), &[-1.0, 1.0], 1E-6);
}

#[test]
fn sum_of_squares() {
    let eq = Equation::new(poly![1.0, 0.0, 1.0]).unwrap();
    assert!(!eq.is_solvable());
    assert!(eq.solutions().is_empty());
}

#[test]
fn odd_cubic() {
    let eq = Equation::new(poly![0.0, -1.0, 0.0, 1.0]).unwrap();
    assert_roots(eq.solutions(), &[-1.0, 0.0, 1.0], 1E-6);
}

#[test]
fn rounded_to_exact_values() {
    assert_eq!(
        Equation::new(poly![-2.0, 1.0, 1.0]).unwrap().solutions(),
        &[-2.0, 1.0]
    );
    assert_eq!(
        Equation::new(poly![0.0, 0.0, 0.0, 1.0]).unwrap().solutions(),
        &[0.0]
    );
}

#[test]
fn high_order_zeros_are_ignored() {
    let eq = Equation::new(Poly::new(&[-1.0, 0.0, 1.0, 0.0, 0.0])).unwrap();
    assert_eq!(eq.poly().degree(), 2);
    assert_roots(eq.solutions(), &[-1.0, 1.0], 1E-6);
}

#[test]
fn chebyshev_roots() {
    for n in 1..=10 {
        let eq = Equation::new(Poly64::cheby1(n)).unwrap();
        let mut expected: Vec<f64> = (1..=n)
            .map(|k| ((2 * k - 1) as f64 * PI / (2 * n) as f64).cos())
            .collect();
        expected.sort_by(f64::total_cmp);
        assert_roots(eq.solutions(), &expected, 1E-6);
    }
}

#[test]
fn legendre_roots() {
    let eq = Equation::new(Poly64::legendre(2)).unwrap();
    let r = 1.0 / 3f64.sqrt();
    assert_roots(eq.solutions(), &[-r, r], 1E-6);

    let eq = Equation::new(Poly64::legendre(3)).unwrap();
    let r = (3.0f64 / 5.0).sqrt();
    assert_roots(eq.solutions(), &[-r, 0.0, r], 1E-6);

    for n in 1..=10 {
        let p = Poly64::legendre(n);
        let eq = Equation::new(p.clone()).unwrap();
        assert_eq!(eq.solutions().len(), n, "P_{n}");
        assert!(eq.solutions().windows(2).all(|w| w[0] < w[1]));
        for x in eq.solutions() {
            assert!(x.abs() < 1.0);
            assert!(p.eval(*x).abs() < 1E-6, "P_{n}({x})");
        }
    }
}

/// Roots on a quarter grid land exactly on bracket boundaries all the time
#[test]
fn grid_roots() {
    let grid: Vec<f64> = (-16..=16).map(|i| f64::from(i) * 0.25).collect();
    for strategy in [Refinement::Newton, Refinement::Bisection] {
        let config = SolverConfig::default()
            .with_strategy(strategy)
            .with_closed_form(false);
        for (i, a) in grid.iter().enumerate() {
            for (j, b) in grid.iter().enumerate().skip(i + 1) {
                let expected = [*a, *b];
                let eq = Equation::with_config(poly_from_roots(&expected), &config).unwrap();
                assert!(
                    check_roots(eq.solutions(), &expected, 1E-6),
                    "{strategy:?}: {:?} != {expected:?}",
                    eq.solutions()
                );

                for c in grid.iter().skip(j + 1) {
                    let expected = [*a, *b, *c];
                    let eq = Equation::with_config(poly_from_roots(&expected), &config).unwrap();
                    assert!(
                        check_roots(eq.solutions(), &expected, 1E-6),
                        "{strategy:?}: {:?} != {expected:?}",
                        eq.solutions()
                    );
                }
            }
        }
    }
}

#[test]
fn strategies_agree() {
    let p = Poly64::cheby1(7);
    let newton = Equation::new(p.clone()).unwrap();
    let bisection = Equation::with_config(
        p,
        &SolverConfig::default().with_strategy(Refinement::Bisection),
    )
    .unwrap();
    assert_roots(newton.solutions(), bisection.solutions(), 1E-6);
}

#[test]
fn interpolate_then_solve() {
    // samples of (x + 1.5)(x - 0.5)(x - 2)
    let f = |x: f64| (x + 1.5) * (x - 0.5) * (x - 2.0);
    let points: Vec<_> = [-3.0, -1.0, 1.0, 3.0]
        .into_iter()
        .map(|x| Point::new(x, f(x)))
        .collect();
    let p = Poly::interpolate(&points);
    assert_eq!(p.degree(), 3);
    let eq = Equation::new(p).unwrap();
    assert_roots(eq.solutions(), &[-1.5, 0.5, 2.0], 1E-6);
}

#[test]
fn sturm_counts_match_solutions() {
    let p = poly![-6.0, 11.0, -6.0, 1.0];
    let s = SturmSequence::new(&p);
    let eq = Equation::new(p).unwrap();
    assert_eq!(s.count_all_roots(), eq.root_count());
    for (a, b) in eq.brackets().iter() {
        assert_eq!(s.count_roots_in(a, b), 1);
    }
    assert_roots(eq.solutions(), &[1.0, 2.0, 3.0], 1E-6);
}

#[test]
fn errors() {
    assert!(matches!(
        Equation::new(poly![f64::NAN, 1.0]),
        Err(Error::NotFinite)
    ));
    assert!(matches!(
        Equation::new(poly![1.0, 1E-310]),
        Err(Error::BoundUnavailable { .. })
    ));
}

/// a tour of the algebra, in random combinations, with results fed to the
/// solver
#[test]
fn stress_test_1() {
    const SEED: u64 = 0;
    const ITER: usize = 250;
    let mut rng = Rng::with_seed(SEED);
    for _ in 0..ITER {
        let lhs = rand_poly(&mut rng);
        let rhs = rand_poly(&mut rng);
        let res = match rng.u32(0..4) {
            0 => lhs + rhs,
            1 => lhs - rhs,
            2 => lhs * rhs,
            3 => match lhs.checked_rem(&rhs) {
                Some(rem) => rem,
                None => continue,
            },
            _ => unreachable!(),
        };
        let Ok(eq) = Equation::new(res.clone()) else {
            continue;
        };
        assert!(eq.solutions().len() <= res.degree());
        for x in eq.solutions() {
            // the polynomial changes sign or touches zero around every root
            let eps = 1E-5;
            let (l, r) = (res.eval(x - eps), res.eval(x + eps));
            assert!(
                l.signum() != r.signum() || res.eval(*x).abs() < 1E-4,
                "{res} @ {x}"
            );
        }
    }
}
