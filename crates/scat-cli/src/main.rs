//! `scat`: score, export and manage drafts of SCAT6/SCOAT6 assessments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use scat_core::{InstrumentKind, Scat6Record, Scoat6Record};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "scat", version, about = "Concussion assessment scoring and export")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "SCAT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scores for a record
    Score {
        /// scat6 or scoat6
        instrument: InstrumentKind,
        /// Record JSON file
        record: PathBuf,
        /// Print raw scores as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Fill the instrument's PDF template from a record
    Export {
        instrument: InstrumentKind,
        record: PathBuf,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Leave the autosaved draft in place after exporting
        #[arg(long)]
        keep_draft: bool,
    },

    /// List the fields of the instrument's PDF template
    Fields {
        instrument: InstrumentKind,
        /// Only list mapped fields the template lacks
        #[arg(long)]
        missing: bool,
    },

    /// Inspect or manage the autosaved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Report whether a resumable draft exists
    Status { instrument: InstrumentKind },
    /// Delete the stored draft
    Discard { instrument: InstrumentKind },
    /// Store a record as the current draft
    Save {
        instrument: InstrumentKind,
        record: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    let config = || config::load_config(&config_path);

    match cli.command {
        Commands::Score {
            instrument,
            record,
            json,
        } => match instrument {
            InstrumentKind::Scat6 => commands::score::<Scat6Record>(&record, json),
            InstrumentKind::Scoat6 => commands::score::<Scoat6Record>(&record, json),
        },
        Commands::Export {
            instrument,
            record,
            out,
            keep_draft,
        } => match instrument {
            InstrumentKind::Scat6 => {
                commands::export::<Scat6Record>(&config()?, &record, &out, keep_draft).await
            }
            InstrumentKind::Scoat6 => {
                commands::export::<Scoat6Record>(&config()?, &record, &out, keep_draft).await
            }
        },
        Commands::Fields {
            instrument,
            missing,
        } => commands::fields(&config()?, instrument, missing).await,
        Commands::Draft { action } => match action {
            DraftAction::Status { instrument } => match instrument {
                InstrumentKind::Scat6 => commands::draft_status::<Scat6Record>(&config()?),
                InstrumentKind::Scoat6 => commands::draft_status::<Scoat6Record>(&config()?),
            },
            DraftAction::Discard { instrument } => match instrument {
                InstrumentKind::Scat6 => commands::draft_discard::<Scat6Record>(&config()?),
                InstrumentKind::Scoat6 => commands::draft_discard::<Scoat6Record>(&config()?),
            },
            DraftAction::Save { instrument, record } => match instrument {
                InstrumentKind::Scat6 => {
                    commands::draft_save::<Scat6Record>(&config()?, &record).await
                }
                InstrumentKind::Scoat6 => {
                    commands::draft_save::<Scoat6Record>(&config()?, &record).await
                }
            },
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config_path),
            ConfigAction::Init { force } => commands::init_config(&config_path, force),
        },
    }
}
