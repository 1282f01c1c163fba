//! `promptpack status` — Show configuration summary.

use promptpack_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("promptpack status");
    println!("=================");
    println!("  Config dir:      {}", AppConfig::config_dir().display());
    println!("  API URL:         {}", config.api_url);
    println!("  Model:           {}", config.default_model);
    println!("  Max tokens:      {}", config.default_max_tokens);
    println!("  Temperature:     {}", config.default_temperature);
    println!(
        "  System role:     {}",
        if config.supports_system_role { "supported" } else { "not supported" }
    );
    println!(
        "  Instructions:    {} path(s)",
        config.custom_instructions.len()
    );
    println!(
        "  Datasets:        {} path(s)",
        config.curated_datasets.len()
    );
    println!(
        "  API key:         {}",
        if config.has_api_key() { "configured" } else { "missing" }
    );

    let config_path = AppConfig::config_dir().join("config.yaml");
    if config_path.exists() {
        println!("\n  Config file found");
    } else {
        println!("\n  No config file at {} — using defaults", config_path.display());
    }

    Ok(())
}
