use crate::{
    util::{doc_macros::panic_t_from_f64, iterator::saturating_counter},
    Poly, RealScalar, Refinement, SolverConfig, SturmSequence,
};

use super::isolation::midpoint;

/// Refine the single root in `bracket` with Newton's method, starting from
/// the midpoint of the bracket.
///
/// The root must lie in `(lower, upper]`. Returns `None` if the derivative
/// vanishes along the way, an iterate is not finite, or the iteration
/// settles outside of the bracket. A root sitting exactly on `lower` belongs
/// to the bracket on the left and is rejected too.
///
/// ```
/// use sturm_poly::{poly, roots::newton, SolverConfig};
///
/// let root = newton(&poly![-2.0, 0.0, 1.0], (0.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((root - 2f64.sqrt()).abs() < 1E-12);
/// ```
///
/// # Panics
#[doc = panic_t_from_f64!()]
#[must_use]
pub fn newton<T: RealScalar>(
    poly: &Poly<T>,
    bracket: (T, T),
    config: &SolverConfig<T>,
) -> Option<T> {
    newton_in_bracket(poly, &poly.diff(), bracket, config)
}

/// Refine the single root in `(lower, upper]` by bisection.
///
/// Stops once the bracket is at most `precision` wide and the value at its
/// midpoint is within `precision` of zero. Returns `None` if the polynomial
/// does not change sign inside the bracket, which is the case for roots of
/// even multiplicity. When `lower` is itself a root, the sign just inside
/// the bracket is taken from the derivative.
///
/// ```
/// use sturm_poly::{poly, roots::bisection, SolverConfig};
///
/// let root = bisection(&poly![-2.0, 0.0, 1.0], (0.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((root - 2f64.sqrt()).abs() < 1E-7);
///
/// // (x - 1)^2 touches zero without crossing it
/// assert_eq!(bisection(&poly![1.0, -2.0, 1.0], (0.0, 3.0), &SolverConfig::default()), None);
/// ```
///
/// # Panics
#[doc = panic_t_from_f64!()]
#[must_use]
pub fn bisection<T: RealScalar>(
    poly: &Poly<T>,
    bracket: (T, T),
    config: &SolverConfig<T>,
) -> Option<T> {
    bisection_in_bracket(poly, &poly.diff(), bracket, config)
}

fn bisection_in_bracket<T: RealScalar>(
    poly: &Poly<T>,
    diff: &Poly<T>,
    bracket: (T, T),
    config: &SolverConfig<T>,
) -> Option<T> {
    log::trace!(
        "starting bisection {{poly: \"{poly}\", bracket: [{}, {}]}}",
        bracket.0,
        bracket.1
    );

    let (mut lower, mut upper) = bracket;
    let mut f_upper = poly.eval(upper);

    // the bracket holds a root in (lower, upper], so upper itself may be it
    if f_upper.is_zero() {
        return Some(upper);
    }
    let f_lower = match poly.eval(lower) {
        f if f.is_zero() => diff.eval(lower),
        f => f,
    };
    if f_lower.is_zero() || f_lower.is_sign_positive() == f_upper.is_sign_positive() {
        log::trace!("no sign change across bracket");
        return None;
    }

    let mut mid = midpoint(lower, upper);
    for i in saturating_counter() {
        let f_mid = poly.eval(mid);

        if f_mid.is_zero()
            || (f_mid.abs() <= config.precision && upper - lower <= config.precision)
        {
            log::trace!("converged {{root: {mid}, iterations: {i}}}");
            return Some(mid);
        }

        if i >= config.max_iter {
            log::debug!("bisection did not converge {{estimate: {mid}, poly: \"{poly}\"}}");
            return Some(mid);
        }

        if f_mid.is_sign_positive() == f_upper.is_sign_positive() {
            upper = mid;
            f_upper = f_mid;
        } else {
            lower = mid;
        }

        let next = midpoint(lower, upper);
        if next == lower || next == upper {
            log::trace!("bracket exhausted {{root: {next}, iterations: {i}}}");
            return Some(next);
        }
        mid = next;
        log::trace!("bisection step {{lower: {lower}, upper: {upper}}}");
    }
    unreachable!()
}

fn newton_in_bracket<T: RealScalar>(
    poly: &Poly<T>,
    diff: &Poly<T>,
    (lower, upper): (T, T),
    config: &SolverConfig<T>,
) -> Option<T> {
    let root = newton_iterate(poly, diff, midpoint(lower, upper), config)?;
    // a root on the lower end belongs to the previous bracket
    let floor = if poly.eval(lower).is_zero() {
        lower + config.precision
    } else {
        lower
    };
    if root <= floor || root > upper {
        log::debug!("newton escaped its bracket {{root: {root}, bracket: [{lower}, {upper}]}}");
        return None;
    }
    Some(root)
}

fn newton_iterate<T: RealScalar>(
    poly: &Poly<T>,
    diff: &Poly<T>,
    initial_guess: T,
    config: &SolverConfig<T>,
) -> Option<T> {
    log::trace!("starting newton {{poly: \"{poly}\", initial_guess: {initial_guess}}}");

    let mut guess = initial_guess;
    for i in saturating_counter() {
        let px = poly.eval(guess);
        if px.is_zero() {
            log::trace!("exact root {{root: {guess}, iterations: {i}}}");
            return Some(guess);
        }

        let pdx = diff.eval(guess);
        if pdx.is_tiny() {
            log::debug!("vanishing derivative {{guess: {guess}, poly: \"{poly}\"}}");
            return None;
        }

        let guess_new = guess - px / pdx;
        if !guess_new.is_finite() {
            log::debug!("newton diverged {{guess: {guess}, poly: \"{poly}\"}}");
            return None;
        }

        if (guess_new - guess).abs() < config.precision {
            log::trace!("converged {{root: {guess_new}, iterations: {i}}}");
            return Some(guess_new);
        }

        if i >= config.max_iter {
            log::debug!("newton did not converge {{estimate: {guess_new}, poly: \"{poly}\"}}");
            return Some(guess_new);
        }

        guess = guess_new;
    }
    unreachable!()
}

/// Narrow `(lower, upper]` with Sturm counts alone until it is at most
/// `precision` wide.
///
/// Slower than [`bisection`] but needs no sign change, so it also finds
/// roots of even multiplicity.
fn bisection_by_count<T: RealScalar>(
    poly: &Poly<T>,
    sturm: &SturmSequence<T>,
    (mut lower, mut upper): (T, T),
    config: &SolverConfig<T>,
) -> T {
    for i in saturating_counter() {
        let mid = midpoint(lower, upper);
        let exhausted = mid <= lower || mid >= upper;
        if exhausted || upper - lower <= config.precision || i >= config.max_iter {
            log::trace!("counted down to {{lower: {lower}, upper: {upper}, iterations: {i}}}");
            return if exhausted || poly.eval(upper).is_zero() {
                upper
            } else {
                mid
            };
        }
        if sturm.count_roots_in(lower, mid) == 0 {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    unreachable!()
}

/// Turn an isolating bracket into a single numeric root, using the
/// configured strategy first and the other one as fallback.
///
/// If neither method produces a root inside the bracket, the bracket is
/// narrowed with Sturm counts instead.
pub(crate) fn refine<T: RealScalar>(
    poly: &Poly<T>,
    diff: &Poly<T>,
    sturm: &SturmSequence<T>,
    bracket: (T, T),
    config: &SolverConfig<T>,
) -> T {
    let root = match config.strategy {
        Refinement::Newton => newton_in_bracket(poly, diff, bracket, config).or_else(|| {
            log::debug!("falling back to bisection");
            bisection_in_bracket(poly, diff, bracket, config)
        }),
        Refinement::Bisection => bisection_in_bracket(poly, diff, bracket, config).or_else(|| {
            log::debug!("falling back to newton");
            newton_in_bracket(poly, diff, bracket, config)
        }),
    };
    root.unwrap_or_else(|| {
        log::debug!(
            "no method converged, counting roots {{bracket: [{}, {}], poly: \"{poly}\"}}",
            bracket.0,
            bracket.1
        );
        bisection_by_count(poly, sturm, bracket, config)
    })
}
