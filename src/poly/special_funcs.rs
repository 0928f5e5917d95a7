use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Get the nth [Chebyshev polynomial](https://en.wikipedia.org/wiki/Chebyshev_polynomials)
    /// of the first kind.
    ///
    /// All of its `n` roots are real, simple, and lie in `(-1, 1)` at
    /// `cos((2k - 1) π / 2n)`.
    ///
    /// ```
    /// use sturm_poly::{poly, Poly};
    ///
    /// assert_eq!(Poly::cheby1(2), poly![-1.0, 0.0, 2.0]);
    /// assert_eq!(Poly::cheby1(3), poly![0.0, -3.0, 0.0, 4.0]);
    /// assert_eq!(Poly::cheby1(4), poly![1.0, 0.0, -8.0, 0.0, 8.0])
    /// ```
    #[must_use]
    pub fn cheby1(n: usize) -> Self {
        let two_x = Self::new(&[T::zero(), T::from_f64_const(2.0)]);
        let mut prev = Self::one();
        let mut curr = Self::new(&[T::zero(), T::one()]);
        if n == 0 {
            return prev;
        }
        for _ in 1..n {
            let next = &two_x * &curr - prev;
            prev = curr;
            curr = next;
        }
        curr
    }

    /// Get the nth [Legendre polynomial](https://en.wikipedia.org/wiki/Legendre_polynomials).
    ///
    /// All of its `n` roots are real, simple, and lie in `(-1, 1)`.
    #[must_use]
    pub fn legendre(n: usize) -> Self {
        match n {
            0 => return Self::one(),
            1 => return Self::new(&[T::zero(), T::one()]),
            _ => {}
        }

        // this is the memoized form of the recursive recurrence relation definition
        let mut p2 = Self::one();
        let mut p1 = Self::new(&[T::zero(), T::one()]);
        for i in 2..=n {
            let ns = T::from_usize_const(i);
            let next = Self::new(&[T::zero(), T::from_usize_const(2 * i - 1) / ns]) * &p1
                + Self::new(&[(T::one() - ns) / ns]) * &p2;
            p2 = p1;
            p1 = next;
        }
        p1
    }
}

#[cfg(test)]
mod test {
    use crate::Poly;

    #[test]
    fn cheby1_low() {
        assert_eq!(Poly::<f64>::cheby1(0), poly![1.0]);
        assert_eq!(Poly::<f64>::cheby1(1), poly![0.0, 1.0]);
        assert_eq!(Poly::<f64>::cheby1(5), poly![0.0, 5.0, 0.0, -20.0, 0.0, 16.0]);
    }

    #[test]
    fn legendre() {
        let p = Poly::<f32>::legendre(3);
        assert_eq!(p, poly![0.0, -1.5, 0.0, 2.5]);
    }

    #[test]
    fn legendre_at_one() {
        for n in 0..12 {
            let p = Poly::<f64>::legendre(n);
            assert!((p.eval(1.0) - 1.0).abs() < 1E-12);
        }
    }
}
