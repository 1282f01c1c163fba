//! `promptpack tokens` — Count tokens in context files.

use promptpack_config::AppConfig;
use promptpack_context::{TokenCounter, human_format};
use std::path::PathBuf;

pub fn run(
    instructions: Vec<PathBuf>,
    datasets: Vec<PathBuf>,
    profile: Option<String>,
    profiles_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let mut instruction_paths = config.custom_instructions.clone();
    let mut dataset_paths = config.curated_datasets.clone();
    if let Some(name) = &profile {
        let profile = super::resolve_profile(name, profiles_file)?;
        instruction_paths.extend(profile.custom_instructions);
        dataset_paths.extend(profile.curated_datasets);
    }
    instruction_paths.extend(instructions);
    dataset_paths.extend(datasets);

    let counter = TokenCounter::new()?;
    let instruction_tokens = counter.count_custom_instructions(&instruction_paths)?;
    let dataset_tokens = counter.count_curated_datasets(&dataset_paths)?;
    let total = instruction_tokens + dataset_tokens;

    println!("Token counts (p50k_base):");
    println!(
        "  Custom instructions: {:>10}  ({})",
        instruction_tokens,
        human_format(instruction_tokens as f64)
    );
    println!(
        "  Curated datasets:    {:>10}  ({})",
        dataset_tokens,
        human_format(dataset_tokens as f64)
    );
    println!(
        "  Total:               {:>10}  ({})",
        total,
        human_format(total as f64)
    );

    Ok(())
}
