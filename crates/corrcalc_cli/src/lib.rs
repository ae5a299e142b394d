pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;

pub use client::CorrelationClient;
pub use config::{ApiConfig, Config, ConfigError};
pub use error::{CorrelationApiError, SessionError};
pub use session::{Axis, RequestPhase, Session};
