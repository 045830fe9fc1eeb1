//! Factory functions for creating disease stages by name
//!
//! Stage names match case-insensitively, either as the type name
//! (`IschemicStrokeStageA`) or in snake case (`ischemic_stroke_stage_a`).

use crate::error::{Result, StageError};
use crate::stage::{Classify, Stage};
use crate::stages::{
    DiabetesStageA, DiabetesStageB, HemorrhagicStrokeStageA, IschemicStrokeStageA,
    LacunarStrokeStageA, StrokeStageA,
};

/// Names of every bundled stage
#[must_use]
pub const fn stage_names() -> &'static [&'static str] {
    &[
        "StrokeStageA",
        "IschemicStrokeStageA",
        "HemorrhagicStrokeStageA",
        "LacunarStrokeStageA",
        "DiabetesStageA",
        "DiabetesStageB",
    ]
}

/// Create a disease stage from its name
pub fn stage_from_name(name: &str) -> Result<Box<dyn Classify>> {
    match name.replace('_', "").to_lowercase().as_str() {
        "strokestagea" => Ok(Box::new(Stage::<StrokeStageA>::new())),
        "ischemicstrokestagea" => Ok(Box::new(Stage::<IschemicStrokeStageA>::new())),
        "hemorrhagicstrokestagea" => Ok(Box::new(Stage::<HemorrhagicStrokeStageA>::new())),
        "lacunarstrokestagea" => Ok(Box::new(Stage::<LacunarStrokeStageA>::new())),
        "diabetesstagea" => Ok(Box::new(Stage::<DiabetesStageA>::new())),
        "diabetesstageb" => Ok(Box::new(Stage::<DiabetesStageB>::new())),
        _ => Err(StageError::UnknownStage(name.to_string())),
    }
}

/// Create every disease stage in `names`, in order
pub fn stages_from_names<I, N>(names: I) -> Result<Vec<Box<dyn Classify>>>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| stage_from_name(name.as_ref()))
        .collect()
}
