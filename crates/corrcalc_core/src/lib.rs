//! Core model for the correlation calculator.
//!
//! Everything here is free of I/O: the user-facing dataset collectors, the
//! pre-request validation rules, the wire types shared with the correlation
//! service, and the presentation heuristics applied to returned coefficients.
//! The HTTP client and terminal front-end live in `corrcalc_cli`.

pub mod dataset;
pub mod presenter;
pub mod types;
pub mod validation;

pub use dataset::Dataset;
pub use presenter::{ColorTier, ResultCard, ResultView, Strength, Trend};
pub use types::{
    BothCorrelationResponse, CorrelationOutcome, CorrelationRequest, CorrelationResponse,
    CorrelationType, ServiceInfo,
};
pub use validation::{validate_pair, ValidationError, MIN_POINTS};
