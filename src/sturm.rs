//! Sturm sequences and real root counting.

use std::ops::Deref;

use crate::{util::iterator::sign_changes, Poly, RealScalar};

/// The Sturm sequence `[p0, p1, ..., pk]` of a polynomial.
///
/// `p0` is the polynomial, `p1` its derivative and every following term is
/// the negated remainder of the two terms before it. The sequence ends with
/// the first constant term, which is the zero constant when the polynomial
/// has repeated roots. Remainder coefficients that are only rounding noise
/// are flushed to zero, so inexact repeated roots still end the sequence in
/// the zero constant.
///
/// Sign changes along the sequence count the distinct real roots of `p0` in
/// any interval ([Sturm's theorem](https://en.wikipedia.org/wiki/Sturm%27s_theorem)).
#[derive(Clone, Debug, PartialEq)]
pub struct SturmSequence<T: RealScalar>(Vec<Poly<T>>);

/// One of the two ends of the real line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Infinity {
    Negative,
    Positive,
}

impl<T: RealScalar> SturmSequence<T> {
    /// Build the Sturm sequence of `poly`.
    ///
    /// A constant polynomial yields a single term sequence.
    ///
    /// ```
    /// use sturm_poly::{poly, SturmSequence};
    ///
    /// let s = SturmSequence::new(&poly![-1.0, 0.0, 1.0]);
    /// assert_eq!(&*s, &[poly![-1.0, 0.0, 1.0], poly![0.0, 2.0], poly![1.0]]);
    /// ```
    #[must_use]
    pub fn new(poly: &Poly<T>) -> Self {
        debug_assert!(poly.is_normalized());

        let first = poly.clone();
        if first.degree_raw() == 0 {
            return Self(vec![first]);
        }

        let mut seq = Vec::with_capacity(first.len_raw());
        let deriv = first.diff();
        seq.push(first);
        seq.push(deriv);
        loop {
            let n = seq.len();
            if seq[n - 1].degree_raw() == 0 {
                break;
            }
            // divisor has degree > 0, so it is never zero
            let Some(rem) = seq[n - 2].checked_rem_denoised(&seq[n - 1]) else {
                break;
            };
            log::trace!("sturm term {{index: {n}, poly: \"{}\"}}", -&rem);
            seq.push(-rem);
        }

        // post-condition: degrees are strictly decreasing
        debug_assert!(seq
            .windows(2)
            .all(|w| w[1].degree_raw() < w[0].degree_raw() || w[1].is_zero()));
        Self(seq)
    }

    /// Number of sign changes along the sequence evaluated at `x`.
    ///
    /// Terms evaluating to exactly zero have no sign and are skipped, so at a
    /// root of the polynomial this equals the count just to the right of it.
    #[must_use]
    pub fn sign_changes_at(&self, x: T) -> usize {
        sign_changes(self.0.iter().map(|p| p.eval(x)))
    }

    fn sign_changes_at_infinity(&self, end: Infinity) -> usize {
        sign_changes(self.0.iter().map(|p| {
            let lead = p.leading();
            // odd degree terms flip sign towards -inf
            if end == Infinity::Negative && p.degree_raw() % 2 == 1 {
                -lead
            } else {
                lead
            }
        }))
    }

    /// Number of distinct real roots in the half open interval `(a, b]`.
    ///
    /// Returns 0 when `a >= b`.
    ///
    /// ```
    /// use sturm_poly::{poly, SturmSequence};
    ///
    /// // roots at -1, 0 and 1
    /// let s = SturmSequence::new(&poly![0.0, -1.0, 0.0, 1.0]);
    /// assert_eq!(s.count_roots_in(-2.0, 2.0), 3);
    /// assert_eq!(s.count_roots_in(-0.5, 2.0), 2);
    /// assert_eq!(s.count_roots_in(0.5, 2.0), 1);
    /// ```
    #[must_use]
    pub fn count_roots_in(&self, a: T, b: T) -> usize {
        // b <= a is not meaningful, and rounding might give a negative count
        self.sign_changes_at(a)
            .saturating_sub(self.sign_changes_at(b))
    }

    /// Number of distinct real roots over the whole real line.
    ///
    /// The signs at both infinities are derived from the leading
    /// coefficients and degrees of the terms, nothing is evaluated.
    #[must_use]
    pub fn count_all_roots(&self) -> usize {
        self.sign_changes_at_infinity(Infinity::Negative)
            .saturating_sub(self.sign_changes_at_infinity(Infinity::Positive))
    }

    /// The first term of the sequence, the polynomial itself
    #[must_use]
    pub fn poly(&self) -> &Poly<T> {
        &self.0[0]
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Poly<T>> {
        self.0
    }
}

impl<T: RealScalar> Deref for SturmSequence<T> {
    type Target = [Poly<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
