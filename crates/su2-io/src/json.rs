//! JSON export of a parsed mesh for inspection and downstream tooling.

use su2_mesh::Mesh;

use crate::error::Result;

pub fn to_json(mesh: &Mesh) -> Result<String> {
    Ok(serde_json::to_string_pretty(mesh)?)
}
