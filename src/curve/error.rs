use thiserror::Error;

/// Failures raised while sampling curve parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Both frequency pools were empty when a frequency had to be drawn.
    #[error("both frequency pools exhausted while sampling frequency {index}")]
    PoolsExhausted { index: usize },
}

pub type CurveResult<T> = Result<T, CurveError>;
