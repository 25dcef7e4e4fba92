//! Unstructured mesh model for SU2 mesh files.
//!
//! A [`Mesh`] holds a point table, typed [`CellBlock`]s and named boundary
//! cell sets (SU2 markers). Parsing and writing live in the `su2-io` crate.

mod cell;
mod error;
mod mesh;
mod summary;

pub use cell::{CellBlock, CellType};
pub use error::MeshError;
pub use mesh::Mesh;
pub use summary::{MeshSummary, marker_order};
