#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations, operators and number theory

use itertools::Itertools;
use std::ops::{Add, Mul, Neg, Sub};

use super::base::trim_zeros;
use crate::{util::linalg::convolve_1d, Poly, RealScalar};

/// Relative size, in units of machine epsilon, below which a remainder
/// coefficient counts as cancellation noise
const NOISE_ULPS: f64 = 1024.0;

impl<T: RealScalar> Poly<T> {
    /// Calculate the quotient and remainder using long division. More efficient than
    /// calculating them separately.
    ///
    /// Returns [`None`] when dividing by the zero polynomial.
    ///
    /// # Examples
    /// ```
    /// use sturm_poly::poly;
    ///
    /// let c1 = poly![1.0, 2.0, 3.0];
    /// let c2 = poly![3.0, 2.0, 1.0];
    /// let expected1 = (poly![3.0], poly![-8.0, -4.0]);
    /// assert_eq!(c1.div_rem(&c2).unwrap(), expected1);
    /// ```
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> Option<(Self, Self)> {
        self.long_division(other, false)
    }

    /// Remainder of the long division with rounding noise flushed to zero.
    ///
    /// A remainder coefficient is noise when it is within a few ulps of the
    /// magnitudes that were summed into it. Genuinely small coefficients
    /// that did not come from cancellation are kept.
    pub(crate) fn checked_rem_denoised(&self, other: &Self) -> Option<Self> {
        Some(self.long_division(other, true)?.1)
    }

    fn long_division(&self, other: &Self, flush_noise: bool) -> Option<(Self, Self)> {
        debug_assert!(self.is_normalized());
        debug_assert!(other.is_normalized());

        if other.is_zero() {
            return None;
        }

        let den = other.as_slice();
        let den_c = other.last();
        let mut rem = self.0.clone();
        let mut quot = vec![T::zero(); (rem.len() + 1).saturating_sub(den.len()).max(1)];
        // sum of the absolute values of every term added into rem[i]
        let mut magnitude: Vec<T> = rem.iter().map(|r| r.abs()).collect();

        while !(rem.len() == 1 && rem[0].is_zero()) && rem.len() >= den.len() {
            let k = rem.len() - den.len();
            let c = rem[rem.len() - 1] / den_c;
            quot[k] = c;
            for ((r, m), d) in rem[k..].iter_mut().zip(&mut magnitude[k..]).zip(den) {
                let t = c * *d;
                *r = *r - t;
                *m = *m + t.abs();
            }
            // the leading term cancels by construction, rounding must not keep it alive
            let lead = rem.len() - 1;
            rem[lead] = T::zero();
            trim_zeros(&mut rem);
        }

        if flush_noise {
            let tol = T::epsilon() * T::from_f64_const(NOISE_ULPS);
            for (r, m) in rem.iter_mut().zip(&magnitude) {
                if r.abs() <= tol * *m {
                    *r = T::zero();
                }
            }
            trim_zeros(&mut rem);
        }

        Some((Self(quot).normalize(), Self(rem)))
    }

    /// Quotient of the long division, [`None`] when dividing by zero
    #[must_use]
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(self.div_rem(other)?.0)
    }

    /// Remainder of the long division, [`None`] when dividing by zero
    ///
    /// ```
    /// use sturm_poly::poly;
    ///
    /// // x^2 - 1 = (x + 1)(x - 1)
    /// assert!(poly![-1.0, 0.0, 1.0].checked_rem(&poly![1.0, 1.0]).unwrap().is_zero());
    /// ```
    #[must_use]
    pub fn checked_rem(&self, other: &Self) -> Option<Self> {
        Some(self.div_rem(other)?.1)
    }
}

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let (mut longest, shortest) = if self.len_raw() >= rhs.len_raw() {
            (self.0, rhs.0)
        } else {
            (rhs.0, self.0)
        };
        longest
            .iter_mut()
            .zip_longest(shortest.iter())
            .for_each(|p| {
                if let itertools::EitherOrBoth::Both(l, r) = p {
                    *l = *l + *r;
                }
            });
        Self(longest).normalize()
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self + rhs.clone()
    }
}

impl<T: RealScalar> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl<T: RealScalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: RealScalar> Sub<Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self - rhs.clone()
    }
}

impl<T: RealScalar> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        &self * rhs
    }
}

impl<T: RealScalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }

        Poly(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: RealScalar> Mul<T> for Poly<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = *c * rhs);
        self.normalize()
    }
}

impl<T: RealScalar> Mul<T> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.clone() * rhs
    }
}
