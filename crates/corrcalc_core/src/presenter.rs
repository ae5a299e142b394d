//! Result presentation heuristics.
//!
//! Turns a returned coefficient into the qualitative labels shown next to
//! it: a trend arrow, a strength label and a color tier. The thresholds are
//! part of the observable behaviour and must stay as they are.

use crate::types::{CorrelationOutcome, CorrelationResponse};
use serde::Serialize;

/// Coefficients above this are trending up, below its negation trending down.
const TREND_THRESHOLD: f64 = 0.1;

const VERY_STRONG_MIN: f64 = 0.9;
const STRONG_MIN: f64 = 0.7;
const MODERATE_MIN: f64 = 0.5;
const WEAK_MIN: f64 = 0.3;

const HIGH_EMPHASIS_MIN: f64 = 0.7;
const MEDIUM_EMPHASIS_MIN: f64 = 0.4;

pub const PEARSON_TITLE: &str = "Pearson Correlation";
pub const SPEARMAN_TITLE: &str = "Spearman Correlation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_coefficient(c: f64) -> Self {
        if c > TREND_THRESHOLD {
            Trend::Up
        } else if c < -TREND_THRESHOLD {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    #[serde(rename = "Very Strong")]
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    #[serde(rename = "Very Weak")]
    VeryWeak,
}

impl Strength {
    pub fn from_coefficient(c: f64) -> Self {
        let abs = c.abs();
        if abs >= VERY_STRONG_MIN {
            Strength::VeryStrong
        } else if abs >= STRONG_MIN {
            Strength::Strong
        } else if abs >= MODERATE_MIN {
            Strength::Moderate
        } else if abs >= WEAK_MIN {
            Strength::Weak
        } else {
            Strength::VeryWeak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryStrong => "Very Strong",
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
            Strength::VeryWeak => "Very Weak",
        }
    }
}

/// Emphasis used when displaying the coefficient itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    High,
    Medium,
    Neutral,
}

impl ColorTier {
    pub fn from_coefficient(c: f64) -> Self {
        let abs = c.abs();
        if abs >= HIGH_EMPHASIS_MIN {
            ColorTier::High
        } else if abs >= MEDIUM_EMPHASIS_MIN {
            ColorTier::Medium
        } else {
            ColorTier::Neutral
        }
    }
}

/// One rendered coefficient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: &'static str,
    pub coefficient: f64,
    /// Coefficient with four decimals.
    pub coefficient_text: String,
    /// Service-provided percentage, verbatim.
    pub percentage: String,
    pub trend: Trend,
    pub strength: Strength,
    pub tier: ColorTier,
}

impl ResultCard {
    pub fn new(title: &'static str, data: &CorrelationResponse) -> Self {
        let c = data.coefficient;
        Self {
            title,
            coefficient: c,
            coefficient_text: format!("{:.4}", c),
            percentage: data.percentage.clone(),
            trend: Trend::from_coefficient(c),
            strength: Strength::from_coefficient(c),
            tier: ColorTier::from_coefficient(c),
        }
    }
}

/// Everything needed to display an outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub heading: &'static str,
    pub cards: Vec<ResultCard>,
}

impl ResultView {
    pub fn from_outcome(outcome: &CorrelationOutcome) -> Self {
        match outcome {
            CorrelationOutcome::Pearson(data) => Self {
                heading: "Result",
                cards: vec![ResultCard::new(PEARSON_TITLE, data)],
            },
            CorrelationOutcome::Spearman(data) => Self {
                heading: "Result",
                cards: vec![ResultCard::new(SPEARMAN_TITLE, data)],
            },
            CorrelationOutcome::Both(both) => Self {
                heading: "Results",
                cards: vec![
                    ResultCard::new(PEARSON_TITLE, &both.pearson),
                    ResultCard::new(SPEARMAN_TITLE, &both.spearman),
                ],
            },
        }
    }
}

/// Reading guide for coefficient magnitudes, as (range, meaning).
pub const INTERPRETATION_GUIDE: [(&str, &str); 5] = [
    ("±0.9 to ±1.0", "Very strong correlation"),
    ("±0.7 to ±0.9", "Strong correlation"),
    ("±0.5 to ±0.7", "Moderate correlation"),
    ("±0.3 to ±0.5", "Weak correlation"),
    ("0.0 to ±0.3", "Very weak or no correlation"),
];

pub const PEARSON_ABOUT: &str = "Measures linear relationships between variables. \
Values range from -1 (perfect negative) to +1 (perfect positive).";

pub const SPEARMAN_ABOUT: &str = "Measures monotonic relationships using ranked values. \
More robust to outliers and non-linear patterns.";
