//! Stroke stage definitions

use super::below;
use crate::categorizer::Category;
use crate::disease_stage;
use crate::patient::Patient;

/// Stage A stroke risk
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeStageA;

#[disease_stage]
impl StrokeStageA {
    #[categorizer("age")]
    fn categorize_age(&self, patient: &Patient) -> Category {
        below(patient.age, 50.0)
    }

    #[categorizer("blood_pressure")]
    fn categorize_blood_pressure(&self, patient: &Patient) -> Category {
        below(patient.systolic_blood_pressure, 120.0)
    }

    #[categorizer("cholesterol")]
    fn categorize_cholesterol(&self, patient: &Patient) -> Category {
        below(patient.cholesterol, 200.0)
    }
}

/// Stage A ischemic stroke risk
#[derive(Debug, Clone, Copy, Default)]
pub struct IschemicStrokeStageA {
    stroke: StrokeStageA,
}

impl AsRef<StrokeStageA> for IschemicStrokeStageA {
    fn as_ref(&self) -> &StrokeStageA {
        &self.stroke
    }
}

#[disease_stage(extends = "StrokeStageA")]
impl IschemicStrokeStageA {
    #[categorizer("blood_viscosity")]
    fn categorize_blood_viscosity(&self, patient: &Patient) -> Category {
        below(patient.blood_viscosity, 2.7)
    }
}

/// Stage A hemorrhagic stroke risk
#[derive(Debug, Clone, Copy, Default)]
pub struct HemorrhagicStrokeStageA {
    stroke: StrokeStageA,
}

impl AsRef<StrokeStageA> for HemorrhagicStrokeStageA {
    fn as_ref(&self) -> &StrokeStageA {
        &self.stroke
    }
}

#[disease_stage(extends = "StrokeStageA")]
impl HemorrhagicStrokeStageA {
    #[categorizer("blood_pressure")]
    fn categorize_hemorrhagic_blood_pressure(&self, patient: &Patient) -> Category {
        below(patient.systolic_blood_pressure, 170.0)
    }
}

/// Stage A lacunar stroke risk, a refinement of the ischemic stage
#[derive(Debug, Clone, Copy, Default)]
pub struct LacunarStrokeStageA {
    ischemic: IschemicStrokeStageA,
}

impl AsRef<IschemicStrokeStageA> for LacunarStrokeStageA {
    fn as_ref(&self) -> &IschemicStrokeStageA {
        &self.ischemic
    }
}

#[disease_stage(extends = "IschemicStrokeStageA")]
impl LacunarStrokeStageA {
    #[categorizer("blood_sugar")]
    fn categorize_blood_sugar(&self, patient: &Patient) -> Category {
        below(patient.fasting_blood_sugar, 110.0)
    }
}
