//! Compact mesh statistics for reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshSummary {
    pub dimension: Option<usize>,
    pub num_points: usize,
    pub num_blocks: usize,
    pub num_cells: usize,
    pub cell_counts: BTreeMap<String, usize>,
    /// Marker names with their cell counts, ordered by the first block they tag.
    pub markers: Vec<(String, usize)>,
}

impl MeshSummary {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut cell_counts = BTreeMap::<String, usize>::new();
        for block in &mesh.cells {
            *cell_counts
                .entry(block.cell_type().name().to_string())
                .or_insert(0) += block.len();
        }

        Self {
            dimension: mesh.dimension,
            num_points: mesh.num_points(),
            num_blocks: mesh.cells.len(),
            num_cells: mesh.num_cells(),
            cell_counts,
            markers: marker_order(mesh)
                .into_iter()
                .map(|name| {
                    let count = mesh.marker_len(name).unwrap_or_default();
                    (name.to_string(), count)
                })
                .collect(),
        }
    }
}

/// Marker names ordered by the first block each one tags; markers tagging no cells come last.
pub fn marker_order(mesh: &Mesh) -> Vec<&str> {
    let mut keyed: Vec<(usize, &str)> = mesh
        .cell_sets
        .iter()
        .map(|(name, sets)| {
            let first = sets
                .iter()
                .position(|ids| !ids.is_empty())
                .unwrap_or(usize::MAX);
            (first, name.as_str())
        })
        .collect();
    keyed.sort();
    keyed.into_iter().map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellBlock, CellType};

    #[test]
    fn summarizes_blocks_and_markers() {
        let mut mesh = Mesh::new(2);
        mesh.points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        mesh.cells = vec![
            CellBlock::with_cells(CellType::Triangle, [[0, 1, 2]]).expect("tri"),
            CellBlock::with_cells(CellType::Line, [[1, 2]]).expect("line"),
            CellBlock::with_cells(CellType::Line, [[0, 1], [2, 0]]).expect("lines"),
        ];
        mesh.cell_sets.insert("far".to_string(), vec![vec![], vec![0], vec![]]);
        mesh.cell_sets.insert("axis".to_string(), vec![vec![], vec![], vec![0, 1]]);
        mesh.cell_sets.insert("unused".to_string(), vec![vec![], vec![], vec![]]);

        let s = MeshSummary::from_mesh(&mesh);
        assert_eq!(s.dimension, Some(2));
        assert_eq!(s.num_points, 3);
        assert_eq!(s.num_blocks, 3);
        assert_eq!(s.num_cells, 4);
        assert_eq!(s.cell_counts.get("line"), Some(&3));
        assert_eq!(s.cell_counts.get("triangle"), Some(&1));
        assert_eq!(
            s.markers,
            vec![
                ("far".to_string(), 1),
                ("axis".to_string(), 2),
                ("unused".to_string(), 0)
            ]
        );
    }

    #[test]
    fn empty_mesh_summary() {
        let s = MeshSummary::from_mesh(&Mesh::default());
        assert_eq!(s.dimension, None);
        assert_eq!(s.num_cells, 0);
        assert!(s.cell_counts.is_empty());
        assert!(s.markers.is_empty());
    }
}
