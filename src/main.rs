use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use truthcheck::config::Config;
use truthcheck::{Analyzer, AnalysisError};

/// truthcheck: is this social media link real or fake?
///
/// Scores a link on its domain, URL shape and wording, optionally enriched
/// with the scraped page content and YouTube video statistics.
#[derive(Parser)]
#[command(name = "truthcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a link and print a verdict
    Analyze {
        /// The link to analyze (e.g. https://youtube.com/watch?v=...)
        url: String,

        /// Only look at the URL text; skip all external lookups
        #[arg(long)]
        offline: bool,

        /// Print the result as JSON instead of a colored report
        #[arg(long)]
        json: bool,
    },

    /// Show which enrichment services are configured
    Status,

    /// List the loaded rule tables
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging (stderr, so --json output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("truthcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { url, offline, json } => {
            let config = Config::load()?;
            let analyzer = if offline {
                Analyzer::offline().with_timeout(config.timeout)
            } else {
                Analyzer::from_config(&config)?
            };

            if !offline && !analyzer.has_content_enrichment() && !analyzer.has_video_enrichment() {
                info!("No enrichment keys configured; analyzing URL text only");
            }

            let result = match analyzer.analyze(&url).await {
                Ok(result) => result,
                Err(AnalysisError::InvalidUrl { input, reason }) => {
                    anyhow::bail!(
                        "{} is not a valid URL ({reason}).\n\
                         Paste a full link including https://",
                        input.trim().bold()
                    );
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                truthcheck::output::terminal::display_analysis(&result);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            truthcheck::output::terminal::display_status(&config);
        }

        Commands::Rules => {
            let rules = truthcheck::scoring::rules::all_rules();
            truthcheck::output::terminal::display_rules(&rules);
        }
    }

    Ok(())
}
