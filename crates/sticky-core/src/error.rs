use thiserror::Error;

/// Misconfiguration caught when a decoration is built.
///
/// Nothing per-frame returns this: a bad snapshot just draws nothing. A bad
/// configuration would draw wrong output on every frame, so it is rejected
/// up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("group size must be positive, got {0}")]
    NonPositiveGroupSize(i64),
    #[error("density scale must be a positive finite number, got {0}")]
    InvalidDensity(f32),
    #[error("text size must be a positive finite number, got {0}")]
    InvalidTextSize(f32),
    #[error("{what} must not be negative")]
    NegativeSpacing { what: &'static str },
    #[error("grid layout needs at least one column")]
    ZeroGridColumns,
}
