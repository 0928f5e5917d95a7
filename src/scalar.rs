use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// Message for casts from primitive literals that cannot fail for `f32` or `f64`.
pub(crate) const CAST_OVERFLOW: &str = "overflow";

/// A real floating point number the root engine can work with.
///
/// This is implemented for [`f32`] and [`f64`].
pub trait RealScalar: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {
    /// Smallest number that can be safely used in reciprocals without causing
    /// a division by zero error, NaN, infinite or similar.
    const TINY: Self;

    /// Is smaller than or equal to [`Self::TINY`] in absolute value
    fn is_tiny(&self) -> bool {
        self.abs() <= Self::TINY
    }

    /// Cast a primitive `f64` constant into this type.
    ///
    /// # Panics
    #[doc = crate::util::doc_macros::panic_t_from_f64!()]
    #[must_use]
    fn from_f64_const(x: f64) -> Self {
        Self::from_f64(x).expect(CAST_OVERFLOW)
    }

    /// Cast a `usize` (usually a degree or an index) into this type.
    ///
    /// # Panics
    #[doc = crate::util::doc_macros::panic_t_from_int!("usize")]
    #[must_use]
    fn from_usize_const(x: usize) -> Self {
        Self::from_usize(x).expect(CAST_OVERFLOW)
    }
}

impl RealScalar for f32 {
    const TINY: Self = Self::MIN_POSITIVE;
}

impl RealScalar for f64 {
    const TINY: Self = Self::MIN_POSITIVE;
}
