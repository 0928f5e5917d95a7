//! Real root finding on top of Sturm sequences.
//!
//! Roots are found in two passes. The search interval given by a
//! [`RootBound`](crate::RootBound) is first split into [`Brackets`] holding
//! exactly one distinct real root each, counted with a [`SturmSequence`].
//! Every bracket is then refined into a numeric root with [`newton`] or
//! [`bisection`], depending on the [`Refinement`] strategy. Linear and
//! quadratic polynomials are solved in closed form unless
//! [`SolverConfig::with_closed_form`] turns it off.

use std::cmp::Ordering;

use crate::{
    util::{doc_macros::errors_solve, float::round_half_up},
    Error, Poly, RealScalar, Result, SturmSequence,
};

mod config;
mod isolation;
mod refinement;

pub use config::{Refinement, SolverConfig};
pub use isolation::Brackets;
pub use refinement::{bisection, newton};

/// A polynomial equation `p(x) = 0`, solved over the reals.
///
/// Everything is computed once on construction, the accessors only read
/// stored values.
///
/// ```
/// use sturm_poly::{poly, Equation};
///
/// let eq = Equation::new(poly![-2.0, 1.0, 1.0]).unwrap();
/// assert_eq!(eq.root_count(), 2);
/// assert_eq!(eq.solutions(), &[-2.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Equation<T: RealScalar> {
    poly: Poly<T>,
    diff: Poly<T>,
    sturm: SturmSequence<T>,
    n_roots: usize,
    brackets: Brackets<T>,
    solutions: Vec<T>,
}

impl<T: RealScalar> Equation<T> {
    /// Solve `poly` with the default [`SolverConfig`].
    ///
    /// # Errors
    #[doc = errors_solve!()]
    pub fn new(poly: Poly<T>) -> Result<Self> {
        Self::with_config(poly, &SolverConfig::default())
    }

    /// Solve `poly` with the given configuration.
    ///
    /// Constant polynomials, the zero polynomial included, have no roots and
    /// solve to an empty set of solutions.
    ///
    /// # Errors
    #[doc = errors_solve!()]
    /// - [`Error::Other`]: roots lie too close together to be isolated at
    ///   the working precision.
    pub fn with_config(poly: Poly<T>, config: &SolverConfig<T>) -> Result<Self> {
        debug_assert!(poly.is_normalized());
        log::trace!("solving {{poly: \"{poly}\", config: {config:?}}}");

        if !poly.is_well_formed() {
            return Err(Error::NotFinite);
        }

        let diff = poly.diff();
        let sturm = SturmSequence::new(&poly);
        let n_roots = sturm.count_all_roots();

        let brackets = if n_roots == 0 {
            Brackets::default()
        } else {
            let bound = poly.root_bound(config.bound)?;
            isolation::isolate(&poly, &sturm, -bound, bound, n_roots, config)?
        };

        let closed_form = config
            .closed_form
            .then(|| poly.closed_form_roots())
            .flatten()
            .filter(|roots| roots.len() == n_roots);
        let roots = closed_form.unwrap_or_else(|| {
            brackets
                .iter()
                .map(|bracket| refinement::refine(&poly, &diff, &sturm, bracket, config))
                .collect()
        });
        let mut solutions: Vec<T> = roots
            .into_iter()
            .map(|root| config.decimals.map_or(root, |d| round_half_up(root, d)))
            .collect();
        solutions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        log::debug!("solved {{poly: \"{poly}\", n_roots: {n_roots}, solutions: {solutions:?}}}");

        Ok(Self {
            poly,
            diff,
            sturm,
            n_roots,
            brackets,
            solutions,
        })
    }

    #[must_use]
    pub fn poly(&self) -> &Poly<T> {
        &self.poly
    }

    #[must_use]
    pub fn derivative(&self) -> &Poly<T> {
        &self.diff
    }

    #[must_use]
    pub fn sturm_sequence(&self) -> &SturmSequence<T> {
        &self.sturm
    }

    /// Number of distinct real roots
    #[must_use]
    pub const fn root_count(&self) -> usize {
        self.n_roots
    }

    /// The isolating brackets, one per distinct real root
    #[must_use]
    pub fn brackets(&self) -> &Brackets<T> {
        &self.brackets
    }

    /// The distinct real roots in ascending order.
    #[must_use]
    pub fn solutions(&self) -> &[T] {
        &self.solutions
    }

    /// Number of distinct real roots in `(a, b]`, see
    /// [`SturmSequence::count_roots_in`].
    #[must_use]
    pub fn count_roots_in(&self, a: T, b: T) -> usize {
        self.sturm.count_roots_in(a, b)
    }

    /// Whether there is at least one real root
    #[must_use]
    pub const fn is_solvable(&self) -> bool {
        self.n_roots != 0
    }
}

impl<T: RealScalar> Poly<T> {
    /// The distinct real roots of this polynomial, in ascending order.
    ///
    /// ```
    /// use sturm_poly::{poly, SolverConfig};
    ///
    /// let roots = poly![0.0, -1.0, 0.0, 1.0].real_roots(&SolverConfig::default()).unwrap();
    /// assert_eq!(roots, vec![-1.0, 0.0, 1.0]);
    /// ```
    ///
    /// # Errors
    #[doc = errors_solve!()]
    pub fn real_roots(&self, config: &SolverConfig<T>) -> Result<Vec<T>> {
        Equation::with_config(self.clone(), config).map(|eq| eq.solutions)
    }
}
