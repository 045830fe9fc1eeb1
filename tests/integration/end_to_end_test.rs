#[cfg(test)]
mod tests {
    use disease_stage::stages::{
        DiabetesStageA, HemorrhagicStrokeStageA, IschemicStrokeStageA, StrokeStageA,
    };
    use disease_stage::{Categorization, Classify, DemoConfig, Stage, stages_from_names};

    use crate::utils::sample_patient;

    fn expect(stage: &dyn Classify, expected: &[(&str, i32)]) {
        let patient = sample_patient();
        for (risk_factor, category) in expected {
            assert_eq!(
                stage.classify(risk_factor, &patient).unwrap(),
                *category,
                "{}, {}",
                stage.stage_name(),
                risk_factor
            );
        }
        assert_eq!(stage.registered_risk_factors().len(), expected.len());
    }

    #[test]
    fn test_stroke_stage_a_scenario() {
        expect(
            &Stage::<StrokeStageA>::new(),
            &[("age", 0), ("blood_pressure", 1), ("cholesterol", 1)],
        );
    }

    #[test]
    fn test_ischemic_stroke_stage_a_scenario() {
        expect(
            &Stage::<IschemicStrokeStageA>::new(),
            &[
                ("age", 0),
                ("blood_pressure", 1),
                ("cholesterol", 1),
                ("blood_viscosity", 1),
            ],
        );
    }

    #[test]
    fn test_hemorrhagic_stroke_stage_a_scenario() {
        expect(
            &Stage::<HemorrhagicStrokeStageA>::new(),
            &[("age", 0), ("blood_pressure", 0), ("cholesterol", 1)],
        );
    }

    #[test]
    fn test_diabetes_stage_a_scenario() {
        expect(
            &Stage::<DiabetesStageA>::new(),
            &[("blood_sugar", 0), ("blood_pressure", 0)],
        );
    }

    #[test]
    fn test_default_run_output_lines() {
        let config = DemoConfig::default();
        let stages = stages_from_names(&config.stages).unwrap();

        let lines: Vec<String> = stages
            .iter()
            .flat_map(|stage| stage.classify_all(&config.patient))
            .map(|categorization| categorization.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "StrokeStageA, age -> 0",
                "StrokeStageA, blood_pressure -> 1",
                "StrokeStageA, cholesterol -> 1",
                "IschemicStrokeStageA, age -> 0",
                "IschemicStrokeStageA, blood_pressure -> 1",
                "IschemicStrokeStageA, cholesterol -> 1",
                "IschemicStrokeStageA, blood_viscosity -> 1",
                "HemorrhagicStrokeStageA, age -> 0",
                "HemorrhagicStrokeStageA, blood_pressure -> 0",
                "HemorrhagicStrokeStageA, cholesterol -> 1",
                "DiabetesStageA, blood_sugar -> 0",
                "DiabetesStageA, blood_pressure -> 0",
            ]
        );
    }

    #[test]
    fn test_categorization_serializes_as_record() {
        let categorization = Categorization {
            stage: "StrokeStageA",
            risk_factor: "age".to_string(),
            category: 0,
        };

        assert_eq!(
            serde_json::to_value(&categorization).unwrap(),
            serde_json::json!({ "stage": "StrokeStageA", "risk_factor": "age", "category": 0 })
        );
    }
}
