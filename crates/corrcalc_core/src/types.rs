use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "cli")]
use clap::ValueEnum;

/// Which coefficient(s) to ask the service for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CorrelationType {
    Pearson,
    Spearman,
    #[default]
    Both,
}

impl CorrelationType {
    pub const ALL: [CorrelationType; 3] = [
        CorrelationType::Pearson,
        CorrelationType::Spearman,
        CorrelationType::Both,
    ];

    /// Service path handling this type.
    pub fn endpoint(self) -> &'static str {
        match self {
            CorrelationType::Pearson => "/pearson",
            CorrelationType::Spearman => "/spearman",
            CorrelationType::Both => "/both",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CorrelationType::Pearson => "pearson",
            CorrelationType::Spearman => "spearman",
            CorrelationType::Both => "both",
        }
    }
}

impl fmt::Display for CorrelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(CorrelationType::Pearson),
            "spearman" => Ok(CorrelationType::Spearman),
            "both" => Ok(CorrelationType::Both),
            other => Err(format!(
                "unknown correlation type '{}' (expected pearson, spearman or both)",
                other
            )),
        }
    }
}

/// Request body shared by every calculation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationRequest {
    pub array_x: Vec<f64>,
    pub array_y: Vec<f64>,
}

impl CorrelationRequest {
    pub fn new(array_x: &[f64], array_y: &[f64]) -> Self {
        Self {
            array_x: array_x.to_vec(),
            array_y: array_y.to_vec(),
        }
    }
}

/// A single coefficient as produced by the service.
///
/// `percentage` is pre-formatted upstream and is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResponse {
    pub coefficient: f64,
    pub percentage: String,
}

/// Response of `POST /both`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BothCorrelationResponse {
    pub pearson: CorrelationResponse,
    pub spearman: CorrelationResponse,
}

/// A decoded service response, tagged by the type that was requested.
///
/// The variant is chosen from the request, never by probing the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationOutcome {
    Pearson(CorrelationResponse),
    Spearman(CorrelationResponse),
    Both(BothCorrelationResponse),
}

impl CorrelationOutcome {
    pub fn correlation_type(&self) -> CorrelationType {
        match self {
            CorrelationOutcome::Pearson(_) => CorrelationType::Pearson,
            CorrelationOutcome::Spearman(_) => CorrelationType::Spearman,
            CorrelationOutcome::Both(_) => CorrelationType::Both,
        }
    }

    /// Decodes a response body into the variant implied by `kind`.
    pub fn from_json(kind: CorrelationType, body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            CorrelationType::Pearson => CorrelationOutcome::Pearson(serde_json::from_slice(body)?),
            CorrelationType::Spearman => {
                CorrelationOutcome::Spearman(serde_json::from_slice(body)?)
            }
            CorrelationType::Both => CorrelationOutcome::Both(serde_json::from_slice(body)?),
        })
    }
}

/// Descriptor served by the service root (`GET /`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}
