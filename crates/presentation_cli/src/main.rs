//! Oratio CLI
//!
//! Command-line front end for the speech generation pipeline and the
//! persisted run history.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{HistoryStorePort, SpeechService};
use clap::{Parser, Subcommand};
use domain::{Audience, GenerationResult, SpeechDuration, SpeechHistoryItem, SpeechParams, Tone};
use infrastructure::{AppConfig, SelectorGenerationAdapter, SqliteHistoryStore, create_pool};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Oratio CLI
#[derive(Parser)]
#[command(name = "oratio-cli")]
#[command(author, version, about = "Oratio speech writer CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a speech
    Generate {
        /// Topic of the speech
        #[arg(short, long)]
        topic: String,

        /// Tone (oficjalny, motywacyjny, casual, akademicki, emocjonalny, humorystyczny)
        #[arg(long, default_value = "oficjalny")]
        tone: Tone,

        /// Target length (2, 5, 10, 15, 20+)
        #[arg(long, default_value = "5 minut")]
        duration: SpeechDuration,

        /// Audience (biznesowi, studenci, general, eksperci, mieszana)
        #[arg(long, default_value = "mieszana")]
        audience: Audience,

        /// Additional free-text details to weave in
        #[arg(long)]
        details: Option<String>,

        /// Run the multi-model verification stage (slower)
        #[arg(long)]
        verify: bool,

        /// Write the speech text to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not store the run in history
        #[arg(long)]
        no_save: bool,
    },

    /// Inspect the persisted run history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List stored runs, newest first
    List,

    /// Show one run in full
    Show {
        /// Run id
        id: Uuid,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one run
    Delete {
        /// Run id
        id: Uuid,
    },

    /// Remove all stored runs
    Clear,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn open_history_store(config: &AppConfig) -> anyhow::Result<SqliteHistoryStore> {
    let pool = create_pool(&config.database).context("failed to open history database")?;
    Ok(SqliteHistoryStore::new(Arc::new(pool)))
}

fn print_result_summary(item_id: Option<Uuid>, result: &GenerationResult) {
    println!();
    println!("Ocena: {}/100", result.overall_score);
    if result.was_refined {
        println!("Tekst został dopracowany na podstawie uwag.");
    }
    for check in &result.verification {
        println!(
            "  {} {}: {}/100",
            check.aspect.icon(),
            check.aspect.label(),
            check.score
        );
        for remark in &check.feedback {
            println!("    - {remark}");
        }
    }
    if let Some(id) = item_id {
        println!("Zapisano w historii: {id}");
    }
    println!();
    println!("{}", result.text);
}

async fn run_generate(
    config: AppConfig,
    params: SpeechParams,
    verify: bool,
    output: Option<PathBuf>,
    no_save: bool,
) -> anyhow::Result<()> {
    // Precondition checked by the caller, not the pipeline
    anyhow::ensure!(
        config.api_keys.has_any(),
        "No API keys configured. Set one in config.toml or via ANTHROPIC_API_KEY / OPENAI_API_KEY / GEMINI_API_KEY."
    );

    let adapter = SelectorGenerationAdapter::from_config(&config.providers)
        .context("failed to initialize providers")?;
    let service = SpeechService::new(Arc::new(adapter));

    let result = service
        .generate_speech(&params, &config.api_keys, |status| println!("{status}"), !verify)
        .await
        .context("speech generation failed")?;

    if let Some(path) = output {
        std::fs::write(&path, &result.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Tekst zapisano do: {}", path.display());
    }

    let item_id = if no_save {
        None
    } else {
        let store = open_history_store(&config)?;
        let item = SpeechHistoryItem::new(params, result.clone());
        store.save(&item).await.context("failed to save history")?;
        Some(item.id)
    };

    print_result_summary(item_id, &result);
    Ok(())
}

async fn run_history(config: AppConfig, command: HistoryCommands) -> anyhow::Result<()> {
    let store = open_history_store(&config)?;

    match command {
        HistoryCommands::List => {
            let items = store.list().await?;
            if items.is_empty() {
                println!("Historia jest pusta.");
                return Ok(());
            }
            for item in items {
                println!(
                    "{}  {}  {:>3}/100  {}",
                    item.id,
                    item.created_at.format("%Y-%m-%d %H:%M"),
                    item.result.overall_score,
                    item.params.topic,
                );
            }
        },
        HistoryCommands::Show { id, json } => {
            let Some(item) = store.get(id).await? else {
                anyhow::bail!("no history item with id {id}");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                println!("Temat: {}", item.params.topic);
                println!(
                    "Ton: {}  Długość: {}  Odbiorcy: {}",
                    item.params.tone, item.params.duration, item.params.audience
                );
                print_result_summary(None, &item.result);
            }
        },
        HistoryCommands::Delete { id } => {
            if store.delete(id).await? {
                println!("Usunięto {id}.");
            } else {
                println!("Nie znaleziono {id}.");
            }
        },
        HistoryCommands::Clear => {
            store.clear().await?;
            println!("Wyczyszczono historię.");
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(Some(&cli.config)).context("failed to load configuration")?;
    debug!(config_path = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Generate {
            topic,
            tone,
            duration,
            audience,
            details,
            verify,
            output,
            no_save,
        } => {
            let mut params = SpeechParams::new(topic, tone, duration, audience);
            if let Some(details) = details {
                params = params.with_details(details);
            }
            run_generate(config, params, verify, output, no_save).await
        },
        Commands::History { command } => run_history(config, command).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_scales_with_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(5), "trace");
    }

    #[test]
    fn cli_parses_generate_with_aliases() {
        let cli = Cli::parse_from([
            "oratio-cli",
            "generate",
            "--topic",
            "Team kickoff",
            "--tone",
            "casual",
            "--duration",
            "5",
            "--audience",
            "mixed",
        ]);
        match cli.command {
            Commands::Generate {
                topic,
                tone,
                duration,
                audience,
                verify,
                ..
            } => {
                assert_eq!(topic, "Team kickoff");
                assert_eq!(tone, Tone::Casual);
                assert_eq!(duration, SpeechDuration::FiveMinutes);
                assert_eq!(audience, Audience::Mixed);
                assert!(!verify, "fast path is the default");
            },
            Commands::History { .. } => unreachable!("expected generate"),
        }
    }

    #[test]
    fn cli_parses_history_subcommands() {
        let cli = Cli::parse_from(["oratio-cli", "history", "list"]);
        assert!(matches!(
            cli.command,
            Commands::History {
                command: HistoryCommands::List
            }
        ));

        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let cli = Cli::parse_from(["oratio-cli", "history", "show", id_str.as_str(), "--json"]);
        match cli.command {
            Commands::History {
                command: HistoryCommands::Show { id: parsed, json },
            } => {
                assert_eq!(parsed, id);
                assert!(json);
            },
            _ => unreachable!("expected history show"),
        }
    }
}
