//! Lokvani CLI - serve and inspect the folk story and proverb collections

use clap::{Parser, Subcommand};
use lokvani::config::{self, ServeOverrides, ServeSettings};
use serde::Serialize;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lokvani")]
#[command(version)]
#[command(about = "Crowd-sourced folk stories and proverbs across Indian languages")]
#[command(long_about = r#"
Lokvani collects folk stories and proverbs in Indian languages and serves
them through a small JSON API and a browser frontend.

Example usage:
  lokvani init
  lokvani serve --port 3000
  lokvani list stories --language Hindi
  lokvani list proverbs --language Tamil --region Chennai --json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file
    #[arg(short, long, global = true, env = "LOKVANI_DATABASE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and serve the frontend
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Directory holding index.html and its assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Write a starter lokvani.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show row counts
    Stats,

    /// List entries, newest first
    List {
        #[command(subcommand)]
        kind: ListKind,
    },

    /// Show every known language
    Languages,
}

#[derive(Subcommand)]
enum ListKind {
    /// List stories
    Stories {
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// List proverbs
    Proverbs {
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        region: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins when set
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let file_config = config::load_config(cli.config.as_deref())?;

    // Read-only commands only need the database location
    let database_path = |database: Option<PathBuf>| -> anyhow::Result<PathBuf> {
        let overrides = ServeOverrides {
            database,
            ..ServeOverrides::default()
        };
        let settings = ServeSettings::resolve(overrides, file_config.as_ref())?;
        config::ensure_db_dir(&settings.database)?;
        Ok(settings.database)
    };

    match cli.command {
        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(config::default_config_path);
            commands::run_init(&path, force)
        }
        Commands::Serve { port, host, static_dir } => {
            let overrides = ServeOverrides {
                database: cli.database,
                host,
                port,
                static_dir,
            };
            let settings = ServeSettings::resolve(overrides, file_config.as_ref())?;
            lokvani::server::start_server(settings).await
        }
        Commands::Stats => commands::run_stats(&database_path(cli.database)?, output_mode),
        Commands::List { kind: ListKind::Stories { language, category } } => {
            commands::run_list_stories(&database_path(cli.database)?, language, category, output_mode)
        }
        Commands::List { kind: ListKind::Proverbs { language, region } } => {
            commands::run_list_proverbs(&database_path(cli.database)?, language, region, output_mode)
        }
        Commands::Languages => commands::run_languages(&database_path(cli.database)?, output_mode),
    }
}
