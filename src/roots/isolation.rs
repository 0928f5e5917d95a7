use anyhow::anyhow;
use itertools::Itertools;

use crate::{Poly, RealScalar, Result, SolverConfig, SturmSequence};

/// Boundaries of the intervals isolating each real root.
///
/// `N + 1` ascending boundaries define `N` brackets, bracket `i` spanning
/// `[boundaries[i], boundaries[i + 1]]` and holding exactly one distinct
/// real root in `(boundaries[i], boundaries[i + 1]]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Brackets<T>(Vec<T>);

impl<T> Default for Brackets<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T: RealScalar> Brackets<T> {
    #[must_use]
    pub fn boundaries(&self) -> &[T] {
        &self.0
    }

    /// Number of brackets
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th bracket as `(lower, upper)`
    #[must_use]
    pub fn get(&self, i: usize) -> Option<(T, T)> {
        Some((*self.0.get(i)?, *self.0.get(i + 1)?))
    }

    /// Iterate over brackets as `(lower, upper)`, from left to right
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.0.iter().copied().tuple_windows()
    }
}

/// Midpoint that cannot overflow, even for `[-MAX, MAX]`.
pub(crate) fn midpoint<T: RealScalar>(a: T, b: T) -> T {
    let two = T::from_f64_const(2.0);
    a / two + b / two
}

/// Partition `[first, second]` into `n_roots` brackets of one root each.
///
/// The search always descends into the left-most half that holds a root,
/// so brackets are produced from left to right. A bracket is accepted once
/// it holds a single root and is at most `width_threshold` wide.
///
/// # Errors
/// Fails when sign counting cannot locate all `n_roots` roots, which
/// happens when roots are too close together to be told apart at the
/// working precision.
pub(crate) fn isolate<T: RealScalar>(
    poly: &Poly<T>,
    sturm: &SturmSequence<T>,
    first: T,
    second: T,
    n_roots: usize,
    config: &SolverConfig<T>,
) -> Result<Brackets<T>> {
    log::trace!("isolating {{poly: \"{poly}\", interval: [{first}, {second}], n_roots: {n_roots}}}");

    let mut boundaries = Vec::with_capacity(n_roots + 1);
    let mut first = first;
    while boundaries.len() < n_roots {
        let mut lower = first;
        let mut upper = second;

        if sturm.count_roots_in(lower, upper) == 0 {
            return Err(anyhow!(
                "no root left in [{first}, {second}] although {} of {n_roots} are missing",
                n_roots - boundaries.len()
            )
            .into());
        }

        while sturm.count_roots_in(lower, upper) > 1 || upper - lower > config.width_threshold {
            let mid = midpoint(lower, upper);
            if mid <= lower || mid >= upper {
                log::debug!("bracket cannot be split any further {{lower: {lower}, upper: {upper}}}");
                break;
            }
            if config.step_back_on_exact_root && poly.eval(mid).is_zero() {
                lower = mid - T::one();
            }
            if sturm.count_roots_in(lower, mid) == 0 {
                lower = mid;
            } else {
                upper = mid;
            }
            log::trace!("narrowed {{lower: {lower}, upper: {upper}}}");
        }

        log::trace!("isolated {{lower: {lower}, upper: {upper}}}");
        boundaries.push(lower);
        first = upper;
    }
    boundaries.push(first);

    Ok(Brackets(boundaries))
}
