pub mod export;
pub mod info;
pub mod rewrite;

use std::path::Path;

use anyhow::{Context, Result};
use su2_io::Mesh;
use tracing::{info, warn};

/// Read an SU2 file, warning when the extension is not `.su2`.
pub fn load_mesh(path: &Path) -> Result<Mesh> {
    if !su2_io::is_su2_path(path) {
        warn!(
            "{} does not have a {} extension; reading as {} anyway",
            path.display(),
            su2_io::EXTENSIONS.join("/"),
            su2_io::FORMAT_NAME
        );
    }
    let mesh =
        su2_io::read_file(path).with_context(|| format!("failed to read {}", path.display()))?;
    info!(
        "loaded {}: {} points, {} cells in {} blocks, {} markers",
        path.display(),
        mesh.num_points(),
        mesh.num_cells(),
        mesh.cells.len(),
        mesh.cell_sets.len()
    );
    Ok(mesh)
}
