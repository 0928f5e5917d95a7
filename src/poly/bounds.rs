use crate::{Error, Poly, RealScalar, Result};

/// How to compute the bound enclosing all real roots of a polynomial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum RootBound {
    /// Cauchy's bound, `1 + max |a_i / a_n|`.
    #[default]
    Cauchy,

    /// The coarse envelope `MAX^(1/n) / |a_n|`, where `MAX` is the largest
    /// finite value of the scalar type.
    ///
    /// This is a heuristic, not a proven bound: it may miss roots of
    /// polynomials with large lower-degree coefficients, and the search
    /// interval it produces is enormous.
    MaxValue,
}

impl<T: RealScalar> Poly<T> {
    /// A bound `B` such that every real root lies in `[-B, B]`.
    ///
    /// Constants have no roots, their bound is zero.
    ///
    /// # Errors
    /// - [`Error::NotFinite`]: a coefficient is `NaN` or infinite.
    /// - [`Error::BoundUnavailable`]: the bound overflowed, usually because
    ///   of an extremely small leading coefficient.
    ///
    /// # Examples
    /// ```
    /// use sturm_poly::{poly, RootBound};
    ///
    /// // x^2 + x - 2 has roots -2 and 1
    /// let b = poly![-2.0, 1.0, 1.0].root_bound(RootBound::Cauchy).unwrap();
    /// assert_eq!(b, 3.0);
    /// ```
    pub fn root_bound(&self, kind: RootBound) -> Result<T> {
        debug_assert!(self.is_normalized());

        if !self.is_well_formed() {
            return Err(Error::NotFinite);
        }

        let degree = self.degree_raw();
        if degree == 0 {
            return Ok(T::zero());
        }

        let lead = self.last().abs();
        let bound = match kind {
            RootBound::Cauchy => {
                self.0[..degree]
                    .iter()
                    .map(|c| c.abs() / lead)
                    .fold(T::zero(), T::max)
                    + T::one()
            }
            RootBound::MaxValue => {
                T::max_value().powf(T::from_usize_const(degree).recip()) / lead
            }
        };

        if !bound.is_finite() || bound <= T::zero() {
            log::debug!("root bound unavailable {{kind: {kind:?}, degree: {degree}, bound: {bound}}}");
            return Err(Error::BoundUnavailable { degree });
        }
        Ok(bound)
    }
}
