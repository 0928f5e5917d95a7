use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw().saturating_sub(1)
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // the zero polynomial is stored as `[0]`
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        if self.is_normalized() {
            return self;
        }
        trim_zeros(&mut self.0);

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }

    /// The last coefficient
    pub(crate) fn last(&self) -> T {
        self.0[self.len_raw() - 1]
    }

    /// Check that the polynomial does not contain `NaN` or infinite values.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

/// Drops zero coefficients of the highest degrees, keeping at least one
/// coefficient so that a zero polynomial collapses to `[0]`.
pub(crate) fn trim_zeros<T: RealScalar>(coeffs: &mut Vec<T>) {
    while coeffs.len() > 1 && coeffs[coeffs.len() - 1].is_zero() {
        coeffs.pop();
    }
    if coeffs.is_empty() {
        coeffs.push(T::zero());
    }
}
