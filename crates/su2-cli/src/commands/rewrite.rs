//! Canonical rewrite command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::load_mesh;

#[derive(Args)]
pub struct RewriteArgs {
    /// SU2 mesh to read
    pub input: PathBuf,

    /// Destination SU2 file
    pub output: PathBuf,
}

pub fn execute(args: RewriteArgs) -> Result<()> {
    let mesh = load_mesh(&args.input)?;
    su2_io::write_file(&args.output, &mesh)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}
