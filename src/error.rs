use thiserror::Error;

/// Terminal failure reported by the item source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The simulated fetch was configured to fail with the given message.
    #[error("{0}")]
    Simulated(String),
    /// The loader thread went away without delivering a result.
    #[error("item loader stopped before delivering a result")]
    Disconnected,
}

/// Raised when a threshold token is not one of the selector options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterTokenError {
    #[error("threshold filter must start with '>' (got '{0}')")]
    MissingOperator(String),
    #[error("threshold filter bound must be a non-negative integer (got '{0}')")]
    InvalidBound(String),
    #[error("threshold filter '{0}' is not one of \"\", >10, >100, >200")]
    Unsupported(String),
}
