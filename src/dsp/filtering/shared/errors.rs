use thiserror::Error;

pub type FilterResult<T> = Result<T, FilterDesignError>;

/// Failures of a filter design request. A request either yields a complete transfer function or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterDesignError {
    /// Rejected before any numeric work: bad frequency, edge ordering or attenuation.
    #[error("Invalid filter specification: {0}")]
    InvalidSpec(String),

    /// A computation produced a non-finite or singular value.
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),
}
