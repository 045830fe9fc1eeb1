//! Bundled disease-stage definitions
//!
//! Stroke stages:
//! - `StrokeStageA`: age, blood pressure and cholesterol
//! - `IschemicStrokeStageA`: adds blood viscosity
//! - `HemorrhagicStrokeStageA`: raises the blood pressure threshold
//! - `LacunarStrokeStageA`: adds fasting blood sugar on top of the ischemic stage
//!
//! Diabetes stages:
//! - `DiabetesStageA`: blood sugar and blood pressure
//! - `DiabetesStageB`: raises the blood sugar threshold and adds age

pub mod diabetes;
pub mod stroke;

pub use diabetes::{DiabetesStageA, DiabetesStageB};
pub use stroke::{HemorrhagicStrokeStageA, IschemicStrokeStageA, LacunarStrokeStageA, StrokeStageA};

use crate::categorizer::Category;

/// Category 0 when `value` is below `threshold`, otherwise 1
#[must_use]
pub fn below(value: f64, threshold: f64) -> Category {
    if value < threshold { 0 } else { 1 }
}
