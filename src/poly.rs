use std::fmt::Display;

use crate::{util::doc_macros::panic_absurd_size, RealScalar};

mod base;
mod bounds;
mod calculus;
mod closed_form;
mod conversions;
mod impl_num;
mod interpolation;
mod special_funcs;

pub use bounds::RootBound;
pub use interpolation::Point;

/// A univariate polynomial with real coefficients.
///
/// Coefficients are stored by ascending degree, so `p.as_slice()[i]` is the
/// coefficient of `x^i`. Polynomials are always normalized: the last
/// coefficient is non-zero, except for the zero polynomial which is stored as
/// a single zero coefficient.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<T>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from coefficients in ascending degree.
    ///
    /// Zero coefficients of the highest degrees are dropped, an empty slice
    /// is the zero polynomial.
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// The zero polynomial
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![T::zero()])
    }

    /// The constant polynomial `1`
    #[must_use]
    pub fn one() -> Self {
        Self(vec![T::one()])
    }

    /// Create a polynomial from a single term (coefficient + degree)
    ///
    /// # Examples
    /// ```
    /// use sturm_poly::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(2.0, 3), poly![0.0, 0.0, 0.0, 2.0]);
    /// ```
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = coeff;
        Self(coeffs).normalize()
    }

    /// The degree of the polynomial. Constants, including the zero
    /// polynomial, have degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.degree_raw()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_one()
    }

    /// The coefficient of the highest degree term
    #[must_use]
    pub fn leading(&self) -> T {
        debug_assert!(self.is_normalized());
        self.last()
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use sturm_poly::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(2.0), 17.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        // use Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        debug_assert!(self.is_normalized());
        self.0
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc.mul_add(x, *c))
    }

    /// Raise the polynomial to a non-negative integer power.
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn pow(&self, pow: u32) -> Self {
        // TODO: divide and conquer with powers of 2
        (0..pow).fold(Self::one(), |acc, _| acc * self)
    }
}

impl<T: RealScalar> Default for Poly<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{c}")?;
        } else {
            return Ok(());
        }
        for (i, c) in iter {
            write!(f, " + {c}*x^{i}")?;
        }
        Ok(())
    }
}
