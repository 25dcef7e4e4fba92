//! Error types for su2-mesh

use thiserror::Error;

use crate::cell::CellType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("{cell_type} cell needs {expected} nodes, got {found}")]
    NodeCount {
        cell_type: CellType,
        expected: usize,
        found: usize,
    },

    #[error("unsupported spatial dimension {0} (expected 2 or 3)")]
    UnsupportedDimension(usize),

    #[error("mesh has {0} points or cells but no spatial dimension")]
    MissingDimension(usize),

    #[error("point {point} has {found} coordinates, mesh dimension is {expected}")]
    DimensionMismatch {
        point: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell {cell} of block {block} references point {node}, mesh has {num_points} points")]
    NodeIndexOutOfRange {
        block: usize,
        cell: usize,
        node: usize,
        num_points: usize,
    },

    #[error("cell set '{name}' has {found} entries, mesh has {expected} cell blocks")]
    CellSetLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("cell set '{name}' references cell {index} of block {block}, block has {block_len} cells")]
    CellSetIndexOutOfRange {
        name: String,
        block: usize,
        index: usize,
        block_len: usize,
    },
}
