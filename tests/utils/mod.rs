use disease_stage::Patient;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Patient used throughout the staging examples
#[must_use]
pub fn sample_patient() -> Patient {
    Patient::new(40.0, 130.0, 90.0, 210.0, 2.8)
}

/// Deterministic set of patients spanning every bundled threshold
#[must_use]
pub fn random_patients(count: usize, seed: u64) -> Vec<Patient> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Patient::new(
                rng.random_range(18.0..95.0),
                rng.random_range(90.0..200.0),
                rng.random_range(60.0..160.0),
                rng.random_range(120.0..300.0),
                rng.random_range(2.0..3.5),
            )
        })
        .collect()
}
