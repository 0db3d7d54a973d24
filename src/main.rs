//! # Krishi Advisor CLI (`krishi`)
//!
//! ## Usage
//!
//! ```bash
//! krishi --config ./config/krishi.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `krishi ask "<message>"` | Full advisory answer for a farmer's message |
//! | `krishi search "<query>"` | Rank knowledge base entries |
//! | `krishi spell "<text>"` | Show spelling corrections |
//! | `krishi check <crop> <location>` | Crop/location suitability report |
//! | `krishi stats` | Knowledge base statistics |
//! | `krishi tip` | A random farming tip |
//! | `krishi format <file>` | Format markdown for the web frontend |
//!
//! Every command accepts `--json` to print a `{success, data}` envelope
//! instead of human-readable text. Logs go to stderr; set `RUST_LOG` to
//! change the level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

use krishi_advisor::advisor::Envelope;
use krishi_advisor::ask::AskArgs;
use krishi_advisor::{ask, check, config, format_cmd, search, spell, stats, tip};

/// Krishi Advisor CLI: offline farming advice from a curated knowledge base.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/krishi.example.toml` for a full example. When the file
/// does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "krishi",
    about = "Krishi Advisor: offline farming advice from a curated knowledge base",
    version,
    long_about = "Krishi Advisor corrects the spelling of a farmer's question, matches it against \
    a curated agronomy knowledge base, checks the crop against regional suitability tables, and \
    assembles a long-form structured answer that can be rendered as HTML."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/krishi.toml")]
    config: PathBuf,

    /// Print a JSON envelope instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a farmer's message.
    ///
    /// Runs spell correction, a contextual knowledge lookup and the
    /// long-form generator.
    Ask {
        /// The message to answer.
        message: String,

        /// Response language code: `en`, `hi`, `pa` or `ur`.
        #[arg(long)]
        lang: Option<String>,

        /// JSON file with prior turns: `[{"role": "user", "content": "..."}]`.
        #[arg(long)]
        history: Option<PathBuf>,

        /// Attach frontend formatting (chunks, sections, HTML).
        #[arg(long)]
        formatted: bool,

        /// Override the minimum response length in words.
        #[arg(long)]
        min_words: Option<usize>,
    },

    /// Search the knowledge base.
    Search {
        /// The search query string.
        query: String,

        /// Restrict to one category (e.g. `pest_control`).
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Spell-check a message against the farming vocabulary.
    Spell {
        /// Text to check.
        text: String,
    },

    /// Check whether a crop suits a location.
    Check {
        /// Crop name (e.g. `rice`).
        crop: String,
        /// Indian state (e.g. `rajasthan`).
        location: String,
    },

    /// Show knowledge base statistics.
    Stats,

    /// Print a random farming tip.
    Tip {
        /// Restrict to one category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Format a markdown file for the web frontend.
    Format {
        /// Input file, or `-` for stdin.
        input: PathBuf,

        /// Output format: `html`, `markdown` or `plain`.
        #[arg(long)]
        format: Option<String>,

        /// Disable "read more" chunking.
        #[arg(long)]
        no_chunking: bool,
    },
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("krishi=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                match Envelope::<()>::err(format!("{e:#}")).to_json() {
                    Ok(body) => println!("{body}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Suitability checks only read the static tables
    if let Commands::Check { crop, location } = &cli.command {
        return check::run_check(crop, location, cli.json);
    }

    let cfg = config::load_or_minimal(&cli.config)?;

    match &cli.command {
        Commands::Ask {
            message,
            lang,
            history,
            formatted,
            min_words,
        } => {
            let args = AskArgs {
                message,
                lang: lang.as_deref(),
                history: history.as_deref(),
                formatted: *formatted,
                min_words: *min_words,
            };
            ask::run_ask(&cfg, args, cli.json)?;
        }
        Commands::Search {
            query,
            category,
            limit,
        } => {
            search::run_search(&cfg, query, category.as_deref(), *limit, cli.json)?;
        }
        Commands::Spell { text } => {
            spell::run_spell(&cfg, text, cli.json)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg, cli.json)?;
        }
        Commands::Tip { category } => {
            tip::run_tip(&cfg, category.as_deref(), cli.json)?;
        }
        Commands::Format {
            input,
            format,
            no_chunking,
        } => {
            format_cmd::run_format(&cfg, input, format.as_deref(), *no_chunking, cli.json)?;
        }
        Commands::Check { .. } => {}
    }

    Ok(())
}
