//! Mesh summary command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use su2_mesh::MeshSummary;

use super::load_mesh;

#[derive(Args)]
pub struct InfoArgs {
    /// SU2 mesh file
    pub input: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let mesh = load_mesh(&args.input)?;
    let summary = MeshSummary::from_mesh(&mesh);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

fn render_summary(summary: &MeshSummary) -> String {
    let mut out = String::new();
    let dimension = summary
        .dimension
        .map_or_else(|| "none".to_string(), |d| d.to_string());
    out.push_str(&format!("dimension: {dimension}\n"));
    out.push_str(&format!("points: {}\n", summary.num_points));
    out.push_str(&format!("cells: {}\n", summary.num_cells));
    out.push_str(&format!("blocks: {}\n", summary.num_blocks));
    for (cell_type, count) in &summary.cell_counts {
        out.push_str(&format!("  {cell_type}: {count}\n"));
    }
    out.push_str(&format!("markers: {}\n", summary.markers.len()));
    for (name, count) in &summary.markers {
        out.push_str(&format!("  {name}: {count}\n"));
    }
    out
}
