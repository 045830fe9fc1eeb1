//! Error handling for disease-stage classification.

use std::io;
use thiserror::Error;

/// Specialized error type for categorizer registration and lookup
#[derive(Debug, Error)]
pub enum StageError {
    /// Tag metadata was requested from a method that was never tagged
    #[error("Method `{method}` is not tagged as a categorizer")]
    Untagged {
        /// Identifier of the offending method
        method: &'static str,
    },
    /// A categorization was requested for a risk factor the stage does not register
    #[error("Stage {stage} has no categorizer for risk factor '{risk_factor}'")]
    UnknownRiskFactor {
        /// Display name of the stage
        stage: &'static str,
        /// Requested risk factor name
        risk_factor: String,
    },
    /// No disease stage is known under the given name
    #[error("Unknown disease stage: {0}")]
    UnknownStage(String),
    /// Error reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error parsing a configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StageError {
    /// Create an unknown risk factor error
    pub fn unknown_risk_factor(stage: &'static str, risk_factor: impl Into<String>) -> Self {
        Self::UnknownRiskFactor {
            stage,
            risk_factor: risk_factor.into(),
        }
    }
}

/// Result type for disease-stage operations
pub type Result<T> = std::result::Result<T, StageError>;
