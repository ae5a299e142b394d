use thiserror::Error;

/// Minimum number of paired points for a coefficient to be defined.
pub const MIN_POINTS: usize = 2;

/// Local rejection of a dataset pair. Never reaches the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please add values to both datasets")]
    EmptyDataset,

    #[error("Both datasets must have the same number of values")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Each dataset must contain at least 2 values")]
    TooFewPoints { len: usize },
}

/// Checks the pre-request invariant.
///
/// Rules are applied in order: emptiness, then equal length, then the
/// minimum point count.
pub fn validate_pair(x: &[f64], y: &[f64]) -> Result<(), ValidationError> {
    if x.is_empty() || y.is_empty() {
        return Err(ValidationError::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(ValidationError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < MIN_POINTS {
        return Err(ValidationError::TooFewPoints { len: x.len() });
    }
    Ok(())
}
