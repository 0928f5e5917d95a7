use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Root of `c0 + c1*x`, [`None`] unless the polynomial is linear.
    ///
    /// ```
    /// use sturm_poly::poly;
    ///
    /// assert_eq!(poly![-3.0, 2.0].linear_root(), Some(1.5));
    /// assert_eq!(poly![1.0, 0.0, 1.0].linear_root(), None);
    /// ```
    #[must_use]
    pub fn linear_root(&self) -> Option<T> {
        debug_assert!(self.is_normalized());
        if self.degree_raw() != 1 {
            return None;
        }
        Some(-self.0[0] / self.0[1])
    }

    /// `c1^2 - 4*c0*c2` of a quadratic, [`None`] for any other degree
    #[must_use]
    pub fn discriminant(&self) -> Option<T> {
        debug_assert!(self.is_normalized());
        if self.degree_raw() != 2 {
            return None;
        }
        let (c, b, a) = (self.0[0], self.0[1], self.0[2]);
        Some(b.mul_add(b, -T::from_f64_const(4.0) * a * c))
    }

    /// The distinct real roots of a quadratic in ascending order, [`None`]
    /// unless the polynomial is quadratic.
    ///
    /// A negative discriminant gives no roots, a zero discriminant a single
    /// one.
    ///
    /// ```
    /// use sturm_poly::poly;
    ///
    /// assert_eq!(poly![-2.0, 1.0, 1.0].quadratic_roots(), Some(vec![-2.0, 1.0]));
    /// assert_eq!(poly![1.0, -2.0, 1.0].quadratic_roots(), Some(vec![1.0]));
    /// assert_eq!(poly![1.0, 0.0, 1.0].quadratic_roots(), Some(vec![]));
    /// ```
    #[must_use]
    pub fn quadratic_roots(&self) -> Option<Vec<T>> {
        let disc = self.discriminant()?;
        let (c, b, a) = (self.0[0], self.0[1], self.0[2]);
        let two = T::from_f64_const(2.0);

        if disc < T::zero() {
            return Some(vec![]);
        }
        if disc.is_zero() {
            return Some(vec![-b / (two * a)]);
        }

        // b and the square root never cancel, the second root comes from
        // the product of the roots, c / a
        let q = -(b + b.signum() * disc.sqrt()) / two;
        let (x1, x2) = (q / a, c / q);
        Some(if x1 <= x2 { vec![x1, x2] } else { vec![x2, x1] })
    }

    /// Roots of linear and quadratic polynomials, [`None`] otherwise
    pub(crate) fn closed_form_roots(&self) -> Option<Vec<T>> {
        match self.degree_raw() {
            1 => self.linear_root().map(|x| vec![x]),
            2 => self.quadratic_roots(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, Poly64};

    #[test]
    fn linear() {
        assert_eq!(poly![4.0, -2.0].linear_root(), Some(2.0));
        assert_eq!(poly![0.0, 5.0].linear_root(), Some(0.0));
        assert_eq!(poly![3.0].linear_root(), None);
        assert_eq!(Poly64::zero().linear_root(), None);
    }

    #[test]
    fn discriminant() {
        assert_eq!(poly![-2.0, 1.0, 1.0].discriminant(), Some(9.0));
        assert_eq!(poly![1.0, 2.0, 1.0].discriminant(), Some(0.0));
        assert_eq!(poly![1.0, 0.0, 1.0].discriminant(), Some(-4.0));
        assert_eq!(poly![1.0, 1.0].discriminant(), None);
    }

    #[test]
    fn quadratic() {
        // x^2 - 5x + 6
        assert_eq!(poly![6.0, -5.0, 1.0].quadratic_roots(), Some(vec![2.0, 3.0]));
        // 2x^2 - 2
        assert_eq!(poly![-2.0, 0.0, 2.0].quadratic_roots(), Some(vec![-1.0, 1.0]));
        // x^2 - 2x, one root is zero
        assert_eq!(poly![0.0, -2.0, 1.0].quadratic_roots(), Some(vec![0.0, 2.0]));
        // negative leading coefficient: -(x - 1)(x - 4)
        assert_eq!(poly![-4.0, 5.0, -1.0].quadratic_roots(), Some(vec![1.0, 4.0]));
    }

    #[test]
    fn quadratic_double_and_none() {
        assert_eq!(poly![9.0, -6.0, 1.0].quadratic_roots(), Some(vec![3.0]));
        assert_eq!(poly![1.0, 1.0, 1.0].quadratic_roots(), Some(vec![]));
        assert_eq!(poly![1.0, 2.0, 3.0, 4.0].quadratic_roots(), None);
    }

    /// the textbook formula loses the small root to cancellation here
    #[test]
    fn quadratic_no_cancellation() {
        // (x - 1E8)(x - 1E-8)
        let roots: Vec<f64> = poly![1.0, -1E8 - 1E-8, 1.0].quadratic_roots().unwrap();
        assert!((roots[0] - 1E-8).abs() < 1E-20, "{roots:?}");
        assert!((roots[1] - 1E8).abs() < 1E-6, "{roots:?}");
    }

    #[test]
    fn closed_form_degrees() {
        assert_eq!(poly![1.0].closed_form_roots(), None);
        assert_eq!(poly![-1.0, 1.0].closed_form_roots(), Some(vec![1.0]));
        assert_eq!(poly![0.0, 0.0, 0.0, 1.0].closed_form_roots(), None);
        let p = Poly::<f32>::new(&[-1.0, 0.0, 1.0]);
        assert_eq!(p.closed_form_roots(), Some(vec![-1.0, 1.0]));
    }
}
