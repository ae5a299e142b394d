//! Form state and calculation orchestration.
//!
//! A `Session` holds what the user has entered so far, the selected
//! correlation type, and the outcome of the last attempt. `calculate` takes
//! `&mut self`, so only one request can be outstanding at a time.

use corrcalc_core::{validate_pair, CorrelationOutcome, CorrelationType, Dataset};
use tracing::{info, warn};

use crate::client::CorrelationClient;
use crate::error::SessionError;

pub const LABEL_X: &str = "Dataset X";
pub const LABEL_Y: &str = "Dataset Y";

/// Lifecycle of the most recent calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Which of the two collectors a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    x: Dataset,
    y: Dataset,
    correlation_type: CorrelationType,
    result: Option<CorrelationOutcome>,
    error: Option<String>,
    phase: RequestPhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CorrelationType::default())
    }
}

impl Session {
    pub fn new(correlation_type: CorrelationType) -> Self {
        Self {
            x: Dataset::new(LABEL_X),
            y: Dataset::new(LABEL_Y),
            correlation_type,
            result: None,
            error: None,
            phase: RequestPhase::Idle,
        }
    }

    pub fn dataset(&self, axis: Axis) -> &Dataset {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn dataset_mut(&mut self, axis: Axis) -> &mut Dataset {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn correlation_type(&self) -> CorrelationType {
        self.correlation_type
    }

    /// Selecting a type discards the previous result and error.
    pub fn set_type(&mut self, correlation_type: CorrelationType) {
        self.correlation_type = correlation_type;
        self.result = None;
        self.error = None;
    }

    pub fn result(&self) -> Option<&CorrelationOutcome> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Whether the calculate action is currently available.
    pub fn can_calculate(&self) -> bool {
        self.phase != RequestPhase::InFlight && !self.x.is_empty() && !self.y.is_empty()
    }

    /// Appends a whole batch of raw entries to one dataset.
    ///
    /// All or nothing: one non-numeric token rejects the batch and leaves
    /// the dataset untouched, so positions stay paired with the other axis.
    pub fn load_batch<S: AsRef<str>>(
        &mut self,
        axis: Axis,
        inputs: &[S],
    ) -> Result<(), SessionError> {
        let dataset = self.dataset_mut(axis);
        let mut parsed = Dataset::new(dataset.label());
        for input in inputs {
            let input = input.as_ref();
            if !parsed.append_input(input) {
                return Err(SessionError::InvalidInput {
                    dataset: dataset.label().to_string(),
                    input: input.trim().to_string(),
                });
            }
        }
        dataset.extend(parsed.values().iter().copied());
        Ok(())
    }

    /// Empties both datasets and forgets the last attempt.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.result = None;
        self.error = None;
        self.phase = RequestPhase::Idle;
    }

    /// Validates the datasets and, if they pass, asks the service.
    ///
    /// The outcome is both returned and kept on the session for display.
    pub async fn calculate(
        &mut self,
        client: &CorrelationClient,
    ) -> Result<&CorrelationOutcome, SessionError> {
        self.error = None;
        self.result = None;

        if let Err(e) = validate_pair(self.x.values(), self.y.values()) {
            info!(reason = %e, x_len = self.x.len(), y_len = self.y.len(), "Datasets rejected");
            return Err(self.fail(e.into()));
        }

        self.phase = RequestPhase::InFlight;
        let outcome = client
            .calculate(self.correlation_type, self.x.values(), self.y.values())
            .await;

        match outcome {
            Ok(outcome) => {
                self.phase = RequestPhase::Succeeded;
                let stored: &CorrelationOutcome = self.result.insert(outcome);
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, status = ?e.status_code(), "Calculation failed");
                Err(self.fail(e.into()))
            }
        }
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        self.error = Some(err.to_string());
        self.phase = RequestPhase::Failed;
        err
    }
}
