//! sqlchange CLI
//!
//! Command-line tool for inspecting column change specifications.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlchange_cli::TreeFormat;
use sqlchange_core::DatabaseProduct;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Resolve column defaults and canonical trees for schema changes.
#[derive(Parser)]
#[command(name = "sqlchange")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target database product (postgresql, mysql, oracle, mssql, sqlite, duckdb, db2, h2).
    #[arg(short, long, env = "SQLCHANGE_DIALECT", default_value = "postgresql")]
    dialect: DatabaseProduct,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default and value literals of a column.
    Render {
        /// JSON column tree (stdin if not specified).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Re-emit a column tree in canonical form.
    Tree {
        /// JSON column tree (stdin if not specified).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Xml)]
        format: TreeFormat,
    },

    /// List the supported dialects.
    Dialects,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { input } => {
            let input = read_input(input.as_ref())?;
            info!("Resolving literals for {}", cli.dialect);
            print!("{}", sqlchange_cli::render(&input, cli.dialect)?);
        }

        Commands::Tree { input, format } => {
            let input = read_input(input.as_ref())?;
            println!("{}", sqlchange_cli::tree(&input, format)?);
        }

        Commands::Dialects => {
            print!("{}", sqlchange_cli::dialects());
        }
    }

    Ok(())
}
