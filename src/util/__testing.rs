//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{Poly, Poly64, RealScalar};

use super::float::f64_make_nonzero;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Monic polynomial with the given real roots
pub fn poly_from_roots<T: RealScalar>(roots: &[T]) -> Poly<T> {
    roots
        .iter()
        .map(|r| Poly::from_real_slice(&[-*r, T::one()]))
        .fold(Poly::one(), |acc, x| acc * x)
}

/// Generate one test case where the roots are known and can be compared.
///
/// Returned roots are sorted in ascending order.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly64, Vec<f64>) {
    let roots = roots_stream.take(degree).sorted_by(f64::total_cmp).collect_vec();
    let poly = poly_from_roots(&roots)
        * scale_stream.next().expect("rng stream should be infinite");
    (poly, roots)
}

/// Like [`test_case_roots`], but redraws until every pair of roots is at
/// least `min_gap` apart.
pub fn test_case_separated_roots(
    mut roots_stream: impl Iterator<Item = f64>,
    scale_stream: impl Iterator<Item = f64>,
    degree: usize,
    min_gap: f64,
) -> (Poly64, Vec<f64>) {
    loop {
        let roots = roots_stream
            .by_ref()
            .take(degree)
            .sorted_by(f64::total_cmp)
            .collect_vec();
        if roots.iter().tuple_windows().all(|(a, b)| b - a >= min_gap) {
            return test_case_roots(roots.into_iter(), scale_stream, degree);
        }
    }
}

/// Check that all roots have been found, in the same order
#[must_use]
pub fn check_roots(roots1: &[f64], roots2: &[f64], tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }
    roots1
        .iter()
        .zip(roots2.iter())
        .all(|(r1, r2)| (r1 - r2).abs() <= tol)
}
