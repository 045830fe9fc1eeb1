#[cfg(test)]
mod tests {
    use disease_stage::{Category, Patient, Stage, disease_stage};
    use rustc_hash::FxHashSet;

    use crate::utils::{random_patients, sample_patient};

    #[derive(Debug, Default)]
    struct Base;

    #[disease_stage]
    impl Base {
        #[categorizer("a")]
        fn categorize_a(&self, patient: &Patient) -> Category {
            i32::from(patient.age >= 60.0)
        }

        #[categorizer("b")]
        fn categorize_b(&self, patient: &Patient) -> Category {
            i32::from(patient.cholesterol >= 200.0)
        }

        #[categorizer("x")]
        fn categorize_x_base(&self, patient: &Patient) -> Category {
            Self::band(patient.systolic_blood_pressure, 120.0)
        }

        // Not a categorizer
        fn band(value: f64, threshold: f64) -> Category {
            if value < threshold { 0 } else { 1 }
        }
    }

    #[derive(Debug, Default)]
    struct Derived {
        base: Base,
        offset: Category,
    }

    impl AsRef<Base> for Derived {
        fn as_ref(&self) -> &Base {
            &self.base
        }
    }

    #[disease_stage(name = "DerivedStage", extends = "Base")]
    impl Derived {
        #[categorizer("x")]
        fn categorize_x_derived(&self, patient: &Patient) -> Category {
            self.offset + 2 * i32::from(patient.systolic_blood_pressure >= 140.0)
        }

        #[categorizer("c")]
        fn categorize_c(&self, patient: &Patient) -> Category {
            i32::from(patient.blood_viscosity >= 3.0)
        }
    }

    #[derive(Debug, Default)]
    struct Grandchild {
        derived: Derived,
    }

    impl AsRef<Derived> for Grandchild {
        fn as_ref(&self) -> &Derived {
            &self.derived
        }
    }

    #[disease_stage(extends = "Derived")]
    impl Grandchild {
        #[categorizer(risk_factor = "d")]
        fn categorize_d(&self, patient: &Patient) -> Category {
            i32::from(patient.fasting_blood_sugar >= 100.0)
        }
    }

    fn names<'a>(items: &[&'a str]) -> FxHashSet<&'a str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_derived_adds_to_inherited_risk_factors() {
        let base = Stage::<Base>::new();
        let derived = Stage::<Derived>::new();

        assert_eq!(base.risk_factors(), names(&["a", "b", "x"]));
        assert_eq!(derived.risk_factors(), names(&["a", "b", "c", "x"]));
    }

    #[test]
    fn test_derived_override_wins_for_every_patient() {
        let derived = Stage::from_definition(Derived {
            base: Base,
            offset: 5,
        });

        for patient in random_patients(200, 7) {
            let expected = derived.definition().categorize_x_derived(&patient);
            assert_eq!(derived.categorize("x", &patient).unwrap(), expected);
            assert!(derived.categorize("x", &patient).unwrap() >= 5);
        }
    }

    #[test]
    fn test_inherited_categorizers_run_against_the_embedded_parent() {
        let derived = Stage::<Derived>::new();

        for patient in random_patients(200, 11) {
            assert_eq!(
                derived.categorize("a", &patient).unwrap(),
                Base.categorize_a(&patient)
            );
            assert_eq!(
                derived.categorize("b", &patient).unwrap(),
                Base.categorize_b(&patient)
            );
        }
    }

    #[test]
    fn test_grandchild_inherits_through_every_level() {
        let grandchild = Stage::<Grandchild>::new();

        assert_eq!(grandchild.name(), "Grandchild");
        assert_eq!(grandchild.risk_factors(), names(&["a", "b", "c", "d", "x"]));
        assert_eq!(
            grandchild.categorizer("x").unwrap().ident(),
            "categorize_x_derived"
        );
        assert_eq!(grandchild.categorize("d", &sample_patient()).unwrap(), 0);
    }

    #[test]
    fn test_stage_name_override() {
        assert_eq!(Stage::<Derived>::new().name(), "DerivedStage");
    }

    #[test]
    fn test_entries_are_complete_and_stable() {
        let stage = Stage::<Grandchild>::new();
        let first: Vec<_> = stage.categorizer_entries().map(|(name, _)| name).collect();
        let second: Vec<_> = stage.categorizer_entries().map(|(name, _)| name).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), stage.risk_factors().len());
        assert_eq!(first, vec!["a", "b", "x", "c", "d"]);
    }
}
