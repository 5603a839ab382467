use clap::Parser;
use llm_interface::OpenRouterClient;
use persona_core::{AppConfig, CoreError, ErrorExt};
use persona_engine::PersonaGenerator;
use reddit_client::RedditClient;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate an AI persona report from a Reddit user's public posts and
/// comments.
#[derive(Parser)]
#[command(name = "reddit-persona", version, about)]
struct Cli {
    /// Reddit username or profile URL. Prompts interactively when omitted.
    identifier: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables win either way.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reddit_persona=info,persona_engine=info,reddit_client=info,llm_interface=info")),
        )
        .init();

    tracing::info!("Starting Reddit Persona Analyzer");

    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => {
            println!("Persona analysis complete. Results saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log_error();
            eprintln!("Error: {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PathBuf, CoreError> {
    // Validate configuration before touching the network or the user.
    let config = AppConfig::from_env()?;

    let identifier = match cli.identifier {
        Some(identifier) => identifier,
        None => prompt_identifier()?,
    };

    let source = RedditClient::new(&config)?;
    let completions = OpenRouterClient::new(&config)?;
    let generator = PersonaGenerator::new(Box::new(source), Box::new(completions), config);

    println!("Generating persona... This may take a few minutes.");
    generator.generate(&identifier).await
}

fn prompt_identifier() -> Result<String, CoreError> {
    print!("Enter Reddit username or profile URL: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(CoreError::InvalidIdentifier { input });
    }
    Ok(input)
}
