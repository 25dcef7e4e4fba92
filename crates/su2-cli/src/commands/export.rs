//! JSON export command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::load_mesh;

#[derive(Args)]
pub struct ExportArgs {
    /// SU2 mesh to read
    pub input: PathBuf,

    /// Output JSON path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let mesh = load_mesh(&args.input)?;
    let json = su2_io::to_json(&mesh)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
