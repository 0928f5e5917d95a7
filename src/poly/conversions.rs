use std::ops::Index;

use itertools::Itertools;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Coefficients in ascending degree
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    /// The same as `Poly::new()`
    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::new(value)
    }

    #[must_use]
    pub fn from_real_vec(value: Vec<T>) -> Self {
        Self(value).normalize()
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self(coeffs.collect_vec()).normalize()
    }
}

impl<T: RealScalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::from_real_slice(value)
    }
}

impl<T: RealScalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_real_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<T: RealScalar> FromIterator<T> for Poly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_real_iterator(iter.into_iter())
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = T;

    /// The coefficient of `x^index`
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, Poly64};

    #[test]
    fn from_vec() {
        let p: Poly64 = vec![1.0, 2.0, 0.0].into();
        assert_eq!(p, poly![1.0, 2.0]);
        let v: Vec<f64> = p.into();
        assert_eq!(v, vec![1.0, 2.0]);
    }

    #[test]
    fn from_iter() {
        let p: Poly64 = (1..=3).map(f64::from).collect();
        assert_eq!(p, poly![1.0, 2.0, 3.0]);
        assert_eq!(p[2], 3.0);
    }

    #[test]
    fn from_slice() {
        let s: &[f32] = &[0.0, 0.0];
        assert!(Poly::from(s).is_zero());
    }
}
