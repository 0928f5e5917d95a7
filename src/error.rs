use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A coefficient is `NaN` or infinite
    #[error("polynomial has non-finite coefficients")]
    NotFinite,

    /// The bound enclosing all real roots overflowed
    #[error("root bound is not representable for a polynomial of degree {degree}")]
    BoundUnavailable { degree: usize },

    #[error("unexpected error while solving polynomial")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
