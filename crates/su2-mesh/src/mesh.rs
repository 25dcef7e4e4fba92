use std::collections::BTreeMap;

use serde::Serialize;

use crate::cell::CellBlock;
use crate::error::MeshError;

/// Unstructured mesh as stored in an SU2 file.
///
/// `cell_sets` maps a marker name to one index array per entry of `cells`;
/// each array holds the within-block indices of the cells tagged by that marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    pub dimension: Option<usize>,
    pub points: Vec<Vec<f64>>,
    pub cells: Vec<CellBlock>,
    pub cell_sets: BTreeMap<String, Vec<Vec<usize>>>,
}

impl Mesh {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: Some(dimension),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dimension.is_none()
            && self.points.is_empty()
            && self.cells.is_empty()
            && self.cell_sets.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.iter().map(CellBlock::len).sum()
    }

    /// Whether any marker tags at least one cell of block `block`.
    pub fn is_marked_block(&self, block: usize) -> bool {
        self.cell_sets
            .values()
            .any(|sets| sets.get(block).is_some_and(|ids| !ids.is_empty()))
    }

    /// Total number of cells tagged by `name`, or `None` for an unknown marker.
    pub fn marker_len(&self, name: &str) -> Option<usize> {
        self.cell_sets
            .get(name)
            .map(|sets| sets.iter().map(Vec::len).sum())
    }

    /// Check the structural invariants the SU2 grammar relies on.
    pub fn check_consistency(&self) -> Result<(), MeshError> {
        match self.dimension {
            Some(2 | 3) => {}
            Some(other) => return Err(MeshError::UnsupportedDimension(other)),
            None => {
                let content = self.points.len() + self.num_cells();
                if content > 0 {
                    return Err(MeshError::MissingDimension(content));
                }
            }
        }

        if let Some(dim) = self.dimension {
            for (point, coords) in self.points.iter().enumerate() {
                if coords.len() != dim {
                    return Err(MeshError::DimensionMismatch {
                        point,
                        expected: dim,
                        found: coords.len(),
                    });
                }
            }
        }

        let num_points = self.points.len();
        for (block_id, block) in self.cells.iter().enumerate() {
            for (cell, nodes) in block.cells().enumerate() {
                if let Some(&node) = nodes.iter().find(|&&n| n >= num_points) {
                    return Err(MeshError::NodeIndexOutOfRange {
                        block: block_id,
                        cell,
                        node,
                        num_points,
                    });
                }
            }
        }

        for (name, sets) in &self.cell_sets {
            if sets.len() != self.cells.len() {
                return Err(MeshError::CellSetLength {
                    name: name.clone(),
                    expected: self.cells.len(),
                    found: sets.len(),
                });
            }
            for (block_id, (ids, block)) in sets.iter().zip(&self.cells).enumerate() {
                if let Some(&index) = ids.iter().find(|&&i| i >= block.len()) {
                    return Err(MeshError::CellSetIndexOutOfRange {
                        name: name.clone(),
                        block: block_id,
                        index,
                        block_len: block.len(),
                    });
                }
            }
        }

        Ok(())
    }
}
