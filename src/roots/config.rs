use crate::{RealScalar, RootBound};

/// Which algorithm turns an isolating bracket into a numeric root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Refinement {
    /// Newton's method from the bracket midpoint, falling back to bisection
    /// when the derivative vanishes or the iterate escapes the bracket.
    #[default]
    Newton,

    /// Bisection on the sign change across the bracket, falling back to
    /// Newton's method when there is no sign change (roots of even
    /// multiplicity).
    Bisection,
}

/// Tuning knobs of the real root solver.
///
/// ```
/// use sturm_poly::{Refinement, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_precision(1E-12)
///     .with_strategy(Refinement::Bisection);
/// assert_eq!(config.precision(), 1E-12);
/// assert_eq!(config.decimals(), Some(8));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<T> {
    pub(crate) precision: T,
    pub(crate) max_iter: usize,
    pub(crate) width_threshold: T,
    pub(crate) decimals: Option<u32>,
    pub(crate) strategy: Refinement,
    pub(crate) bound: RootBound,
    pub(crate) step_back_on_exact_root: bool,
    pub(crate) closed_form: bool,
}

impl<T: RealScalar> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            precision: T::from_f64_const(1E-7),
            max_iter: 1_000_000,
            width_threshold: T::from_f64_const(10.0),
            decimals: Some(8),
            strategy: Refinement::default(),
            bound: RootBound::default(),
            step_back_on_exact_root: false,
            closed_form: true,
        }
    }
}

impl<T: RealScalar> SolverConfig<T> {
    /// Newton stops once successive iterates are within this tolerance.
    /// Bisection stops once the bracket is at most this wide and the
    /// polynomial value at its midpoint is within it.
    #[must_use]
    pub fn with_precision(mut self, precision: T) -> Self {
        self.precision = precision;
        self
    }

    /// Iteration budget of a single refinement. Once exhausted, the last
    /// estimate is used as the root.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Isolating brackets are narrowed until they are at most this wide.
    #[must_use]
    pub fn with_width_threshold(mut self, width: T) -> Self {
        self.width_threshold = width;
        self
    }

    /// Round every root half-up to this many decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Report roots exactly as refined, without rounding.
    #[must_use]
    pub fn without_rounding(mut self) -> Self {
        self.decimals = None;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Refinement) -> Self {
        self.strategy = strategy;
        self
    }

    /// Bound used to seed the search interval `[-B, B]`.
    #[must_use]
    pub fn with_bound(mut self, bound: RootBound) -> Self {
        self.bound = bound;
        self
    }

    /// When a bisection midpoint is an exact root, move the lower end of
    /// the search interval one unit below it.
    ///
    /// Legacy behavior, off by default. Brackets may then overlap, and roots
    /// less than one unit apart may be lost.
    #[must_use]
    pub fn with_step_back_on_exact_root(mut self, enabled: bool) -> Self {
        self.step_back_on_exact_root = enabled;
        self
    }

    /// Solve linear and quadratic polynomials with their closed-form
    /// formulas instead of refining brackets. On by default.
    #[must_use]
    pub fn with_closed_form(mut self, enabled: bool) -> Self {
        self.closed_form = enabled;
        self
    }

    #[must_use]
    pub const fn precision(&self) -> T {
        self.precision
    }

    #[must_use]
    pub const fn max_iter(&self) -> usize {
        self.max_iter
    }

    #[must_use]
    pub const fn width_threshold(&self) -> T {
        self.width_threshold
    }

    #[must_use]
    pub const fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    #[must_use]
    pub const fn strategy(&self) -> Refinement {
        self.strategy
    }

    #[must_use]
    pub const fn bound(&self) -> RootBound {
        self.bound
    }

    #[must_use]
    pub const fn step_back_on_exact_root(&self) -> bool {
        self.step_back_on_exact_root
    }

    #[must_use]
    pub const fn closed_form(&self) -> bool {
        self.closed_form
    }
}

#[cfg(test)]
mod test {
    use super::{Refinement, SolverConfig};
    use crate::RootBound;

    #[test]
    fn defaults() {
        let c = SolverConfig::<f64>::default();
        assert_eq!(c.precision(), 1E-7);
        assert_eq!(c.max_iter(), 1_000_000);
        assert_eq!(c.width_threshold(), 10.0);
        assert_eq!(c.decimals(), Some(8));
        assert_eq!(c.strategy(), Refinement::Newton);
        assert_eq!(c.bound(), RootBound::Cauchy);
        assert!(!c.step_back_on_exact_root());
        assert!(c.closed_form());
    }

    #[test]
    fn builder() {
        let c = SolverConfig::<f32>::default()
            .with_max_iter(10)
            .with_width_threshold(0.5)
            .without_rounding()
            .with_bound(RootBound::MaxValue)
            .with_step_back_on_exact_root(true)
            .with_closed_form(false);
        assert_eq!(c.max_iter(), 10);
        assert_eq!(c.width_threshold(), 0.5);
        assert_eq!(c.decimals(), None);
        assert_eq!(c.bound(), RootBound::MaxValue);
        assert!(c.step_back_on_exact_root());
        assert!(!c.closed_form());
    }
}
