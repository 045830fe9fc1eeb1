//! Configuration for the classification driver.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patient::Patient;

/// Configuration for a classification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Patient to classify
    pub patient: Patient,
    /// Names of the stages to run, in output order
    pub stages: Vec<String>,
}

impl DemoConfig {
    /// Read a configuration from a JSON file
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Reading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            patient: Patient::new(40.0, 130.0, 90.0, 210.0, 2.8),
            stages: [
                "StrokeStageA",
                "IschemicStrokeStageA",
                "HemorrhagicStrokeStageA",
                "DiabetesStageA",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}
