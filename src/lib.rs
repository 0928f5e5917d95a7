//! Real roots of univariate polynomials, counted and isolated with
//! [Sturm sequences](https://en.wikipedia.org/wiki/Sturm%27s_theorem).
//!
//! ```
//! use sturm_poly::{poly, Equation};
//!
//! // x^3 - x
//! let eq = Equation::new(poly![0.0, -1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(eq.root_count(), 3);
//! assert_eq!(eq.solutions(), &[-1.0, 0.0, 1.0]);
//! ```
//!
//! Coefficients are always given in ascending degree, `poly![c0, c1, c2]`
//! is `c0 + c1*x + c2*x^2`.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

/// A more convenient way to write `Poly::new(&[...])`.
///
/// # Examples
///
/// ```
/// use sturm_poly::{poly, Poly};
///
/// let p1: Poly<f32> = poly![1.0, 2.0, 3.0];
/// let p2 = Poly::new(&[1.0, 2.0, 3.0]);
///
/// assert_eq!(p1, p2);
/// ```
///
/// The macro can also be used without arguments to create the zero
/// polynomial.
///
/// ```
/// use sturm_poly::{poly, Poly};
///
/// let p1: Poly<f64> = poly![];
/// let p2 = Poly::zero();
///
/// assert_eq!(p1, p2);
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::Poly::zero()
    }};
    ($($c:expr),+ $(,)?) => {{
        $crate::Poly::from_real_slice(&[$($c),+])
    }};
}

pub use num;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::RealScalar;

mod poly;
pub use poly::{Point, Poly, RootBound};

mod sturm;
pub use sturm::SturmSequence;

pub mod roots;
pub use roots::{Brackets, Equation, Refinement, SolverConfig};

pub(crate) mod util;
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
