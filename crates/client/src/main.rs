//! Loot Survivor agent client.
//!
//! Composition root: loads a row fixture, builds a [`GameStateService`] over it,
//! and prints the derived state, activity feed, or agent context to stdout. Logs
//! go to stderr so the output can be piped.
//!
//! ```bash
//! survivor --fixture games.json context 42 --format json --fields game,damagePreview
//! RUST_LOG=runtime=debug survivor --fixture games.json state 42
//! ```

mod fixture;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{
    ContextField, ContextFormat, ErrorSeverity, GameError, GameStateService, RuntimeConfig,
    RuntimeError, SourceError,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Derive Loot Survivor game state for agents
#[derive(Parser)]
#[command(name = "survivor")]
#[command(version)]
struct Cli {
    /// JSON fixture of indexed rows keyed by game id
    #[arg(short, long, env = "SURVIVOR_FIXTURE", value_name = "FILE")]
    fixture: PathBuf,

    /// Activity feed entries to keep (overrides SURVIVOR_FEED_LIMIT)
    #[arg(long, value_name = "N")]
    feed_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the derived game state as JSON
    State {
        game_id: u64,
    },

    /// Print the unified activity feed as JSON
    Feed {
        game_id: u64,
    },

    /// Print the agent context
    Context {
        game_id: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "xml")]
        format: OutputFormat,

        /// JSON sections to keep, comma separated (e.g. game,currentBeast)
        #[arg(long, value_delimiter = ',', value_parser = parse_field)]
        fields: Vec<ContextField>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Single-line phase-specific XML
    Xml,
    /// Structured JSON document
    Json,
}

impl From<OutputFormat> for ContextFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => Self::Xml,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn parse_field(value: &str) -> Result<ContextField, String> {
    value
        .parse()
        .map_err(|_| format!("unknown context field `{value}`"))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let severity = severity_of(&err);
            match severity {
                Some(severity) => {
                    tracing::error!(severity = severity.as_str(), "{err:#}")
                }
                None => tracing::error!("{err:#}"),
            }
            ExitCode::from(exit_code(severity))
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let mut config = RuntimeConfig::from_env();
    if let Some(limit) = cli.feed_limit {
        config = config.with_feed_limit(limit);
    }

    let source = fixture::load(&cli.fixture)
        .with_context(|| format!("failed to load fixture {}", cli.fixture.display()))?;
    let service = GameStateService::with_config(source, config);

    let output = match cli.command {
        Command::State { game_id } => {
            let state = service.game_state(game_id).await?;
            serde_json::to_string_pretty(&state)?
        }
        Command::Feed { game_id } => {
            let feed = service.activity_feed(game_id).await?;
            serde_json::to_string_pretty(&feed)?
        }
        Command::Context {
            game_id,
            format,
            fields,
        } => service.context(game_id, format.into(), &fields).await?,
    };
    Ok(output)
}

fn severity_of(err: &anyhow::Error) -> Option<ErrorSeverity> {
    if let Some(err) = err.downcast_ref::<RuntimeError>() {
        return Some(err.severity());
    }
    err.downcast_ref::<SourceError>().map(GameError::severity)
}

/// Process exit status for a failed request.
fn exit_code(severity: Option<ErrorSeverity>) -> u8 {
    match severity {
        Some(ErrorSeverity::Validation) => 2,
        Some(ErrorSeverity::Fatal) => 3,
        Some(ErrorSeverity::Internal) => 4,
        Some(ErrorSeverity::Recoverable) | None => 1,
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: info).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_context_fields() {
        let cli = Cli::try_parse_from([
            "survivor",
            "--fixture",
            "games.json",
            "context",
            "42",
            "--format",
            "json",
            "--fields",
            "game,currentBeast",
        ])
        .unwrap();
        match cli.command {
            Command::Context {
                game_id,
                format,
                fields,
            } => {
                assert_eq!(game_id, 42);
                assert_eq!(ContextFormat::from(format), ContextFormat::Json);
                assert_eq!(fields, vec![ContextField::Game, ContextField::CurrentBeast]);
            }
            _ => panic!("expected context command"),
        }
    }

    #[test]
    fn rejects_unknown_field() {
        let result = Cli::try_parse_from([
            "survivor",
            "--fixture",
            "games.json",
            "context",
            "42",
            "--fields",
            "current_beast",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn exit_code_follows_severity() {
        let not_found = anyhow::Error::new(RuntimeError::NotFound { game_id: 9 });
        assert_eq!(severity_of(&not_found), Some(ErrorSeverity::Fatal));
        assert_eq!(exit_code(severity_of(&not_found)), 3);

        let io = SourceError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        let load = anyhow::Error::new(io).context("failed to load fixture");
        assert_eq!(severity_of(&load), Some(ErrorSeverity::Fatal));

        assert_eq!(exit_code(Some(ErrorSeverity::Validation)), 2);
        assert_eq!(exit_code(None), 1);
    }
}
