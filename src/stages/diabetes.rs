//! Diabetes stage definitions

use super::below;
use crate::categorizer::Category;
use crate::disease_stage;
use crate::patient::Patient;

/// Stage A diabetes risk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiabetesStageA;

#[disease_stage]
impl DiabetesStageA {
    #[categorizer("blood_sugar")]
    fn categorize_blood_sugar(&self, patient: &Patient) -> Category {
        below(patient.fasting_blood_sugar, 100.0)
    }

    #[categorizer("blood_pressure")]
    fn categorize_blood_pressure(&self, patient: &Patient) -> Category {
        below(patient.systolic_blood_pressure, 150.0)
    }
}

/// Stage B diabetes risk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiabetesStageB {
    diabetes: DiabetesStageA,
}

impl AsRef<DiabetesStageA> for DiabetesStageB {
    fn as_ref(&self) -> &DiabetesStageA {
        &self.diabetes
    }
}

#[disease_stage(extends = "DiabetesStageA")]
impl DiabetesStageB {
    #[categorizer(risk_factor = "blood_sugar")]
    fn categorize_fasting_glucose(&self, patient: &Patient) -> Category {
        below(patient.fasting_blood_sugar, 126.0)
    }

    #[categorizer(risk_factor = "age")]
    fn categorize_age(&self, patient: &Patient) -> Category {
        below(patient.age, 45.0)
    }
}
