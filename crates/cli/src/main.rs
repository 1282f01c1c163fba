//! promptpack CLI — the main entry point.
//!
//! Commands:
//! - `chat`     — Send a prompt with file-backed context to the model
//! - `tokens`   — Count tokens in custom-instruction / curated-dataset files
//! - `sessions` — List saved session files
//! - `profiles` — List named profiles
//! - `status`   — Show configuration summary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "promptpack",
    about = "promptpack — chat assistant with file-backed prompt context",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt to the model with aggregated file context
    Chat {
        /// The prompt to send
        prompt: String,

        /// Named profile to apply
        #[arg(short, long)]
        profile: Option<String>,

        /// Path to the profiles file (default: <config dir>/profiles.yaml)
        #[arg(long)]
        profiles_file: Option<PathBuf>,

        /// Override the model
        #[arg(short, long)]
        model: Option<String>,

        /// Override max tokens for the reply
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Override sampling temperature
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Send context as user messages instead of a system message
        #[arg(long)]
        no_system_role: bool,

        /// Additional custom-instruction files or directories
        #[arg(short, long = "instructions")]
        instructions: Vec<PathBuf>,

        /// Additional curated-dataset files or directories
        #[arg(short, long = "datasets")]
        datasets: Vec<PathBuf>,

        /// Fail on paths that resolve to neither a file nor a directory
        #[arg(long)]
        strict: bool,
    },

    /// Count tokens in context files
    Tokens {
        /// Custom-instruction files or directories
        #[arg(short, long = "instructions")]
        instructions: Vec<PathBuf>,

        /// Curated-dataset files or directories
        #[arg(short, long = "datasets")]
        datasets: Vec<PathBuf>,

        /// Named profile whose context lists to count
        #[arg(short, long)]
        profile: Option<String>,

        /// Path to the profiles file (default: <config dir>/profiles.yaml)
        #[arg(long)]
        profiles_file: Option<PathBuf>,
    },

    /// List saved session files
    Sessions {
        /// Base directory holding the `sessions` subdirectory
        /// (default: the config directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List named profiles
    Profiles {
        /// Path to the profiles file (default: <config dir>/profiles.yaml)
        #[arg(long)]
        profiles_file: Option<PathBuf>,
    },

    /// Show configuration summary
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat {
            prompt,
            profile,
            profiles_file,
            model,
            max_tokens,
            temperature,
            no_system_role,
            instructions,
            datasets,
            strict,
        } => {
            commands::chat::run(commands::chat::ChatArgs {
                prompt,
                profile,
                profiles_file,
                model,
                max_tokens,
                temperature,
                no_system_role,
                instructions,
                datasets,
                strict,
            })
            .await?
        }
        Commands::Tokens {
            instructions,
            datasets,
            profile,
            profiles_file,
        } => commands::tokens::run(instructions, datasets, profile, profiles_file)?,
        Commands::Sessions { dir } => commands::sessions::run(dir)?,
        Commands::Profiles { profiles_file } => commands::profiles::run(profiles_file)?,
        Commands::Status => commands::status::run()?,
    }

    Ok(())
}
