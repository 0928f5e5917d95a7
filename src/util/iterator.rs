/// An iterator that counts up until it reaches max, at which point it saturates
///
/// This is an endless iterator.
#[inline]
pub fn saturating_counter() -> impl Iterator<Item = usize> {
    (0..usize::MAX).chain(std::iter::repeat(usize::MAX))
}

/// Counts the number of times consecutive signs differ. Zeros carry no sign
/// and are skipped.
pub(crate) fn sign_changes<T: crate::RealScalar>(values: impl Iterator<Item = T>) -> usize {
    let mut changes = 0;
    let mut last_positive: Option<bool> = None;
    for v in values {
        if v.is_zero() || v.is_nan() {
            continue;
        }
        let positive = v.is_sign_positive();
        if last_positive.is_some_and(|l| l != positive) {
            changes += 1;
        }
        last_positive = Some(positive);
    }
    changes
}
