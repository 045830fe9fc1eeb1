#[cfg(test)]
mod tests {
    use disease_stage::{
        Classify, DemoConfig, StageError, stage_from_name, stage_names, stages_from_names,
    };
    use std::io::Write;

    use crate::utils::random_patients;

    #[test]
    fn test_catalog_builds_every_stage() {
        let stages = stages_from_names(stage_names()).unwrap();
        let names: Vec<_> = stages.iter().map(|stage| stage.stage_name()).collect();

        assert_eq!(names, stage_names());
    }

    #[test]
    fn test_catalog_stages_never_fail_on_registered_factors() {
        let stages = stages_from_names(stage_names()).unwrap();

        for patient in random_patients(50, 3) {
            for stage in &stages {
                for risk_factor in stage.registered_risk_factors() {
                    let category = stage.classify(risk_factor, &patient).unwrap();
                    assert!(category == 0 || category == 1);
                }
            }
        }
    }

    #[test]
    fn test_unknown_stage() {
        assert!(matches!(
            stage_from_name("PulmonaryStageZ"),
            Err(StageError::UnknownStage(_))
        ));
    }

    #[test]
    fn test_config_file_round_trip_into_stages() {
        let path = std::env::temp_dir().join(format!(
            "disease-stage-config-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "patient": {{
                    "age": 62,
                    "systolic_blood_pressure": 175,
                    "fasting_blood_sugar": 130,
                    "cholesterol": 190,
                    "blood_viscosity": 2.5
                }},
                "stages": ["lacunar_stroke_stage_a", "DiabetesStageB"]
            }}"#
        )
        .unwrap();
        drop(file);

        let config = DemoConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let stages = stages_from_names(&config.stages).unwrap();
        let lacunar = &stages[0];
        assert_eq!(lacunar.stage_name(), "LacunarStrokeStageA");
        assert_eq!(lacunar.classify("blood_sugar", &config.patient).unwrap(), 1);
        assert_eq!(lacunar.classify("cholesterol", &config.patient).unwrap(), 0);

        let diabetes = &stages[1];
        assert_eq!(diabetes.classify("blood_sugar", &config.patient).unwrap(), 1);
        assert_eq!(diabetes.classify("age", &config.patient).unwrap(), 1);
    }
}
