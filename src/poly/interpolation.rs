use crate::{Poly, RealScalar};

/// A point `(x, y)` in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: RealScalar> Poly<T> {
    /// The polynomial of lowest degree passing through all `points`, built
    /// from Newton's divided differences.
    ///
    /// The x-coordinates must be pairwise distinct, this is not checked:
    /// duplicates produce non-finite coefficients. No points give the zero
    /// polynomial.
    ///
    /// # Examples
    /// ```
    /// use sturm_poly::{poly, Point, Poly};
    ///
    /// let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)].map(Point::from);
    /// assert_eq!(Poly::interpolate(&points), poly![1.0, 1.0, 1.0]);
    /// ```
    #[must_use]
    pub fn interpolate(points: &[Point<T>]) -> Self {
        let n = points.len();

        // divided differences computed in place, after the pass for order `j`
        // `coeffs[i]` holds f[x_{i-j}, ..., x_i]
        let mut coeffs: Vec<T> = points.iter().map(|p| p.y).collect();
        for j in 1..n {
            for i in (j..n).rev() {
                coeffs[i] = (coeffs[i] - coeffs[i - 1]) / (points[i].x - points[i - j].x);
            }
        }

        // expand the Newton basis (x - x_0)(x - x_1)...(x - x_{i-1})
        let mut basis = Self::one();
        let mut res = Self::zero();
        for (i, c) in coeffs.into_iter().enumerate() {
            if i > 0 {
                basis = basis * Self::new(&[-points[i - 1].x, T::one()]);
            }
            res = res + &basis * c;
        }
        log::trace!("interpolated {{points: {n}, poly: \"{res}\"}}");
        res
    }

    /// Evaluate the interpolating polynomial of `points` at `x`.
    ///
    /// ```
    /// use sturm_poly::{Point, Poly};
    ///
    /// let points = [Point::new(-1.0, 1.0), Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    /// assert_eq!(Poly::interpolate_value(2.0, &points), 4.0);
    /// ```
    #[must_use]
    pub fn interpolate_value(x: T, points: &[Point<T>]) -> T {
        Self::interpolate(points).eval(x)
    }
}
