//! Command-line front end for SU2 mesh files.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Inspect, rewrite and export SU2 meshes
#[derive(Parser)]
#[command(name = "su2")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SU2 mesh file utility", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a mesh
    Info(commands::info::InfoArgs),
    /// Read a mesh and write it back in canonical form
    Rewrite(commands::rewrite::RewriteArgs),
    /// Export a mesh as JSON
    ExportJson(commands::export::ExportArgs),
}

fn parse_level(raw: &str) -> Level {
    match raw.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Info(args) => commands::info::execute(args),
        Commands::Rewrite(args) => commands::rewrite::execute(args),
        Commands::ExportJson(args) => commands::export::execute(args),
    }
}
