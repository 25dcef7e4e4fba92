//! Reader and writer for the SU2 ASCII mesh format.
//!
//! This crate provides:
//! - **Reader**: `NDIME`/`NPOIN`/`NELEM`/`NMARK` sections into a [`Mesh`]
//! - **Writer**: the inverse grammar, round-tripping any mesh the reader produces
//! - **JSON export** of a parsed mesh via serde
//!
//! ## Usage
//!
//! ```rust,no_run
//! let mesh = su2_io::read_file("airfoil.su2")?;
//! println!("points: {}, cells: {}", mesh.num_points(), mesh.num_cells());
//! su2_io::write_file("airfoil_copy.su2", &mesh)?;
//! # Ok::<(), su2_io::Su2Error>(())
//! ```

pub mod error;
mod json;
mod reader;
mod writer;

use std::path::Path;

pub use error::{FormatError, Result, Su2Error};
pub use json::to_json;
pub use reader::{read, read_file, read_str};
pub use su2_mesh::{CellBlock, CellType, Mesh, MeshError, MeshSummary};
pub use writer::{write, write_file, write_string};

pub const FORMAT_NAME: &str = "su2";
pub const EXTENSIONS: [&str; 1] = [".su2"];

/// Whether `path` carries one of the [`EXTENSIONS`], ignoring case.
pub fn is_su2_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            EXTENSIONS
                .iter()
                .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
