//! Gradebook CLI - interactive student grade management

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gradebook::storage::SqliteStore;
use gradebook::{config, menu, ui};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version = "0.1.0")]
#[command(about = "Student grade management - registries, grade ledger, pass/fail reports")]
#[command(long_about = r#"
Gradebook keeps students, courses, and per-course grades in a local
SQLite database and derives pass/fail reports from them:
  • Per-course situations for one or all students
  • Per-semester summaries with pass/fail counts
  • Passed/failed group listings
  • Semester-wide statistics

Everything happens through an interactive numbered menu:
  gradebook
  gradebook --database grades/2024.db
"#)]
struct Cli {
    /// Path to the database file (overrides the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to a TOML config file (default: gradebook.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let database = cli
        .database
        .or_else(|| {
            config
                .as_ref()
                .and_then(|c| c.database.clone())
                .map(PathBuf::from)
        })
        .unwrap_or_else(config::default_database_path);

    config::ensure_db_dir(&database)?;

    // Cannot open the store -> nothing to run; abort with a diagnostic
    tracing::info!("Opening database {:?}", database);
    let store = SqliteStore::open(&database)
        .with_context(|| format!("cannot open database at {}", database.display()))?;

    ui::info("Database", &database.display().to_string());
    let counts = store.counts()?;
    println!("{}", ui::dim(&counts.to_string()));

    let result = menu::run(&store);
    store.close().context("closing database")?;
    result?;

    Ok(())
}
