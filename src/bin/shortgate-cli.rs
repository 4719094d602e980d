use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use shortgate::config::Config;
use shortgate::redirect::{ResolutionOutcome, Resolver};
use shortgate::shorten::{self, ShortenClient, ShorteningState, ShorteningStore};
use shortgate::validate;

#[derive(Parser)]
#[command(name = "shortgate-cli")]
#[command(about = "Shortgate companion CLI", long_about = None)]
struct Cli {
    /// Front end base URL to talk to (defaults to PUBLIC_BASE_URL or the bind address)
    #[arg(long)]
    front_end: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL through the front end
    Shorten {
        /// URL to shorten
        url: String,
    },
    /// Resolve a short code directly against the backend
    Resolve {
        /// Short code to resolve
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Shorten { url } => {
            // Validation failures stay local; nothing is sent.
            if let Some(message) = validate::validation_error(&url) {
                bail!("{message}");
            }

            let front_end = cli.front_end.unwrap_or_else(|| config.public_base_url());
            let client = ShortenClient::new(front_end.clone())?;
            let store = ShorteningStore::new();

            store.subscribe(|status| match status.state {
                ShorteningState::Idle => {}
                ShorteningState::Loading => println!("… shortening {}", status.original_url),
                ShorteningState::Success => {
                    if let Some(ref short_url) = status.short_url {
                        println!("✓ {}", short_url);
                    }
                }
                ShorteningState::Error => {
                    if let Some(ref error) = status.error {
                        println!("✗ {}", error);
                    }
                }
            });

            let response =
                shorten::run_attempt(&store, &client, url.trim(), &front_end).await?;
            println!("  code: {}", response.short_code);
            println!("  long: {}", response.long_url);
        }
        Commands::Resolve { code } => {
            let resolver = Resolver::new(config.backend.base_url.clone())?;
            match resolver.resolve(&code).await {
                ResolutionOutcome::Redirect { location } => {
                    println!("✓ /{} -> {}", code, location);
                }
                ResolutionOutcome::NotFound { short_code } => {
                    println!("⚠ no mapping for '{}'", short_code);
                }
                ResolutionOutcome::Error { message, .. } => bail!("{message}"),
            }
        }
    }

    Ok(())
}
