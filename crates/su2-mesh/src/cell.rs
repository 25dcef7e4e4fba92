//! Cell types and homogeneous cell blocks.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Linear element types supported by SU2.
///
/// The discriminants are the SU2 (and VTK) element codes written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellType {
    Line = 3,
    Triangle = 5,
    Quad = 9,
    Tetra = 10,
    Hexahedron = 12,
    Wedge = 13,
    Pyramid = 14,
}

impl CellType {
    pub const ALL: [CellType; 7] = [
        CellType::Line,
        CellType::Triangle,
        CellType::Quad,
        CellType::Tetra,
        CellType::Pyramid,
        CellType::Wedge,
        CellType::Hexahedron,
    ];

    pub fn su2_code(self) -> u32 {
        self as u32
    }

    pub fn from_su2_code(code: u32) -> Option<Self> {
        match code {
            3 => Some(CellType::Line),
            5 => Some(CellType::Triangle),
            9 => Some(CellType::Quad),
            10 => Some(CellType::Tetra),
            12 => Some(CellType::Hexahedron),
            13 => Some(CellType::Wedge),
            14 => Some(CellType::Pyramid),
            _ => None,
        }
    }

    pub fn nodes_per_cell(self) -> usize {
        match self {
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Quad => 4,
            CellType::Tetra => 4,
            CellType::Pyramid => 5,
            CellType::Wedge => 6,
            CellType::Hexahedron => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellType::Line => "line",
            CellType::Triangle => "triangle",
            CellType::Quad => "quad",
            CellType::Tetra => "tetra",
            CellType::Pyramid => "pyramid",
            CellType::Wedge => "wedge",
            CellType::Hexahedron => "hexahedron",
        }
    }
}

impl Display for CellType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CellType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| format!("unknown cell type '{}'", s.trim()))
    }
}

/// A run of cells sharing one [`CellType`].
///
/// Connectivity is stored flat; every cell occupies exactly
/// `cell_type.nodes_per_cell()` consecutive entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellBlock {
    cell_type: CellType,
    connectivity: Vec<usize>,
}

impl CellBlock {
    pub fn new(cell_type: CellType) -> Self {
        Self {
            cell_type,
            connectivity: Vec::new(),
        }
    }

    /// Build a block from per-cell node lists, checking each cell's arity.
    pub fn with_cells<I, C>(cell_type: CellType, cells: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let mut block = Self::new(cell_type);
        for cell in cells {
            block.push_cell(cell.as_ref())?;
        }
        Ok(block)
    }

    pub fn push_cell(&mut self, nodes: &[usize]) -> Result<(), MeshError> {
        let expected = self.cell_type.nodes_per_cell();
        if nodes.len() != expected {
            return Err(MeshError::NodeCount {
                cell_type: self.cell_type,
                expected,
                found: nodes.len(),
            });
        }
        self.connectivity.extend_from_slice(nodes);
        Ok(())
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn len(&self) -> usize {
        self.connectivity.len() / self.cell_type.nodes_per_cell()
    }

    pub fn is_empty(&self) -> bool {
        self.connectivity.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&[usize]> {
        let n = self.cell_type.nodes_per_cell();
        self.connectivity.get(index * n..(index + 1) * n)
    }

    pub fn cells(&self) -> impl Iterator<Item = &[usize]> {
        self.connectivity.chunks_exact(self.cell_type.nodes_per_cell())
    }

    pub fn connectivity(&self) -> &[usize] {
        &self.connectivity
    }

    pub fn max_node_index(&self) -> Option<usize> {
        self.connectivity.iter().copied().max()
    }
}
