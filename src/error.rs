use thiserror::Error;

/// Errors returned by the ABX evaluation pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// The `classes` and `features` slices have different lengths.
    #[error("length mismatch: {classes} class labels, but {features} feature vectors")]
    LengthMismatch {
        /// Number of class labels supplied.
        classes: usize,
        /// Number of feature vectors supplied.
        features: usize,
    },

    /// Feature vectors (or a distance matrix) have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A class has a single member, so no item can take the "X" role.
    ///
    /// This is a degeneracy of otherwise well-formed data rather than
    /// malformed input: the A/X comparison needs at least two same-class
    /// items, and a singleton class leaves the inner average undefined.
    #[error("class at sorted position {index} has a single member; ABX needs at least two items per class")]
    SingletonClass {
        /// Position of the class in the sorted label order.
        index: usize,
    },

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
