//! Patient entity model
//!
//! This module contains the Patient model, the read-only set of clinical
//! measurements every categorizer classifies.

use serde::{Deserialize, Serialize};

/// Clinical measurements of a single patient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Age in years
    pub age: f64,
    /// Systolic blood pressure (mmHg)
    pub systolic_blood_pressure: f64,
    /// Fasting blood sugar (mg/dL)
    pub fasting_blood_sugar: f64,
    /// Total cholesterol (mg/dL)
    pub cholesterol: f64,
    /// Whole blood viscosity (cP)
    pub blood_viscosity: f64,
}

impl Patient {
    /// Create a new patient from the five measurements
    #[must_use]
    pub const fn new(
        age: f64,
        systolic_blood_pressure: f64,
        fasting_blood_sugar: f64,
        cholesterol: f64,
        blood_viscosity: f64,
    ) -> Self {
        Self {
            age,
            systolic_blood_pressure,
            fasting_blood_sugar,
            cholesterol,
            blood_viscosity,
        }
    }
}
