//! `promptpack chat` — Aggregate context, count tokens, dispatch the prompt.

use promptpack_chat::{ChatRequest, SessionContext, dispatch};
use promptpack_config::AppConfig;
use promptpack_context::{AggregateOptions, DocumentKind, TokenCounter, aggregate, human_format};
use promptpack_providers::OpenAiCompatProvider;
use std::path::PathBuf;
use tracing::info;

pub struct ChatArgs {
    pub prompt: String,
    pub profile: Option<String>,
    pub profiles_file: Option<PathBuf>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub no_system_role: bool,
    pub instructions: Vec<PathBuf>,
    pub datasets: Vec<PathBuf>,
    pub strict: bool,
}

pub async fn run(args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let profile = match &args.profile {
        Some(name) => Some(super::resolve_profile(name, args.profiles_file.clone())?),
        None => None,
    };
    let profile = profile.unwrap_or_default();

    // Precedence: CLI flag > profile > config.
    let model = args
        .model
        .or(profile.model)
        .unwrap_or_else(|| config.default_model.clone());
    let max_tokens = args
        .max_tokens
        .or(profile.max_tokens)
        .unwrap_or(config.default_max_tokens);
    let temperature = args
        .temperature
        .or(profile.temperature)
        .unwrap_or(config.default_temperature);
    let supports_system_role = if args.no_system_role {
        false
    } else {
        profile
            .supports_system_role
            .unwrap_or(config.supports_system_role)
    };

    // Context path lists accumulate: config, then profile, then CLI.
    let mut instruction_paths = config.custom_instructions.clone();
    instruction_paths.extend(profile.custom_instructions);
    instruction_paths.extend(args.instructions);

    let mut dataset_paths = config.curated_datasets.clone();
    dataset_paths.extend(profile.curated_datasets);
    dataset_paths.extend(args.datasets);

    let options = if args.strict {
        AggregateOptions::strict()
    } else {
        AggregateOptions::default()
    };
    let instructions = aggregate(&instruction_paths, DocumentKind::CustomInstructions, options)?;
    let datasets = aggregate(&dataset_paths, DocumentKind::CuratedDatasets, options)?;

    let counter = TokenCounter::new()?;
    let context_tokens = counter.count_files(&instructions.files)?
        + counter.count_files(&datasets.files)?;
    info!(
        instruction_files = instructions.files.len(),
        dataset_files = datasets.files.len(),
        context_tokens = %human_format(context_tokens as f64),
        model = %model,
        "Assembled prompt context"
    );

    let api_key = config
        .api_key
        .as_deref()
        .ok_or("No API key configured (set api_key in config.yaml or PROMPTPACK_API_KEY)")?;
    let provider = OpenAiCompatProvider::new("openai", &config.api_url, api_key)?;

    let request = ChatRequest {
        prompt: args.prompt,
        custom_instructions: context_blocks(instructions.content),
        curated_datasets: context_blocks(datasets.content),
        model,
        max_tokens,
        temperature,
        supports_system_role,
        session: SessionContext::default(),
    };

    match dispatch(&provider, request).await? {
        Some(reply) => println!("{reply}"),
        None => eprintln!("(model returned no content)"),
    }

    Ok(())
}

/// An empty aggregate contributes no block at all, so an absent context list
/// does not inject a blank line into the assembled message.
fn context_blocks(content: String) -> Vec<String> {
    if content.is_empty() {
        Vec::new()
    } else {
        vec![content]
    }
}
