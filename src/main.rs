use std::path::Path;

use anyhow::Context;
use disease_stage::{Classify, DemoConfig, stages_from_names};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional path to a JSON configuration
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::from_path(Path::new(&path))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => DemoConfig::default(),
    };

    let stages = stages_from_names(&config.stages).context("Failed to build disease stages")?;
    info!("Classifying patient with {} disease stages", stages.len());

    for stage in &stages {
        println!();
        for categorization in stage.classify_all(&config.patient) {
            println!("{categorization}");
        }
    }

    Ok(())
}
