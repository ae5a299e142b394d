use corrcalc_core::ValidationError;
use thiserror::Error;

/// Message used when the service rejects a request without a usable `detail`.
pub const API_FALLBACK_MESSAGE: &str = "API request failed";

/// Message used when no usable response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server unavailable";

/// Failure of a single call to the correlation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationApiError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Api { message: String, status: u16 },

    /// No response, or a response that could not be decoded.
    #[error("{message}")]
    Network { message: String },
}

impl CorrelationApiError {
    pub fn network() -> Self {
        CorrelationApiError::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CorrelationApiError::Api { status, .. } => Some(*status),
            CorrelationApiError::Network { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CorrelationApiError::Api { message, .. } | CorrelationApiError::Network { message } => {
                message
            }
        }
    }
}

/// Why a session calculation produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] CorrelationApiError),

    /// A batch entry that is not a finite number.
    #[error("{dataset}: not a number: '{input}'")]
    InvalidInput { dataset: String, input: String },
}
