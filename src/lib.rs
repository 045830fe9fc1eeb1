//! A Rust library for classifying patient risk factors by disease stage,
//! with categorizers that register themselves at definition time.

// Lets the `disease_stage` attribute refer to `::disease_stage` inside this crate too
extern crate self as disease_stage;

pub mod catalog;
pub mod categorizer;
pub mod config;
pub mod error;
pub mod patient;
pub mod registry;
pub mod stage;
pub mod stages;

// Re-export the most common types for easier use
// Core types
pub use categorizer::{Category, Method, is_tagged, tag, tag_name};
pub use config::DemoConfig;
pub use error::{Result, StageError};
pub use patient::Patient;
pub use registry::{DiseaseStage, Registry};
pub use stage::{BoundCategorizer, Categorization, Classify, Stage};

// Stage definitions
pub use catalog::{stage_from_name, stage_names, stages_from_names};
pub use disease_stage_macros::disease_stage;
