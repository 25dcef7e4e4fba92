use std::collections::BTreeMap;

use su2_mesh::{CellBlock, Mesh};

use super::rows::NodeRef;
use crate::error::FormatError;

/// A parsed `MARKER_TAG` group: its name and its own cell blocks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MarkerBlock {
    pub name: String,
    pub blocks: Vec<CellBlock>,
}

/// Collects section payloads in file order and produces the final [`Mesh`].
#[derive(Debug, Default)]
pub(crate) struct MeshAssembler {
    dimension: Option<usize>,
    points: Vec<Vec<f64>>,
    cells: Vec<CellBlock>,
    cell_sets: BTreeMap<String, Vec<Vec<usize>>>,
    highest: Option<NodeRef>,
}

impl MeshAssembler {
    pub fn set_dimension(&mut self, dim: usize, line: usize) -> Result<(), FormatError> {
        if !(2..=3).contains(&dim) {
            return Err(FormatError::new(
                line,
                format!("unsupported NDIME {dim}, expected 2 or 3"),
            ));
        }
        self.dimension = Some(dim);
        Ok(())
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn set_points(&mut self, points: Vec<Vec<f64>>) {
        self.points = points;
    }

    /// Remember the row with the highest node index so a dangling reference
    /// can be reported at its line once every point is known.
    pub fn note_highest_node(&mut self, node: Option<NodeRef>) {
        self.highest = NodeRef::max(self.highest, node);
    }

    pub fn append_elements(&mut self, blocks: Vec<CellBlock>) {
        self.cells.extend(blocks);
    }

    /// Append each marker's blocks after every existing block and record the
    /// local indices of its cells. Entries are padded to full length in
    /// [`MeshAssembler::finish`].
    pub fn append_markers(&mut self, markers: Vec<MarkerBlock>) {
        for marker in markers {
            let mut sets = vec![Vec::new(); self.cells.len()];
            for block in marker.blocks {
                sets.push((0..block.len()).collect());
                self.cells.push(block);
            }
            self.cell_sets.insert(marker.name, sets);
        }
    }

    pub fn finish(mut self) -> Result<Mesh, FormatError> {
        let num_points = self.points.len();
        if let Some(NodeRef { node, line }) = self.highest
            && node >= num_points
        {
            return Err(FormatError::new(
                line,
                format!("cell references point {node}, mesh has {num_points} points"),
            ));
        }

        let num_blocks = self.cells.len();
        for sets in self.cell_sets.values_mut() {
            sets.resize_with(num_blocks, Vec::new);
        }

        let mesh = Mesh {
            dimension: self.dimension,
            points: self.points,
            cells: self.cells,
            cell_sets: self.cell_sets,
        };
        mesh.check_consistency().map_err(|err| FormatError::new(0, err.to_string()))?;
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use su2_mesh::CellType;

    use super::*;

    fn lines(pairs: &[[usize; 2]]) -> CellBlock {
        CellBlock::with_cells(CellType::Line, pairs).expect("line block")
    }

    #[test]
    fn marker_sets_cover_every_block() {
        let mut asm = MeshAssembler::default();
        asm.set_dimension(2, 1).expect("dim");
        asm.set_points(vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]);
        asm.append_elements(vec![
            CellBlock::with_cells(CellType::Triangle, [[0, 1, 2]]).expect("tri"),
        ]);
        asm.append_markers(vec![
            MarkerBlock {
                name: "bottom".to_string(),
                blocks: vec![lines(&[[0, 1]])],
            },
            MarkerBlock {
                name: "rest".to_string(),
                blocks: vec![lines(&[[1, 2], [2, 0]])],
            },
        ]);

        let mesh = asm.finish().expect("assemble");
        assert_eq!(mesh.cells.len(), 3);
        assert_eq!(mesh.cell_sets["bottom"], vec![vec![], vec![0], vec![]]);
        assert_eq!(mesh.cell_sets["rest"], vec![vec![], vec![], vec![0, 1]]);
    }

    #[test]
    fn elements_after_markers_pad_existing_sets() {
        let mut asm = MeshAssembler::default();
        asm.set_dimension(3, 1).expect("dim");
        asm.set_points(vec![vec![0.0; 3]; 4]);
        asm.append_markers(vec![MarkerBlock {
            name: "edge".to_string(),
            blocks: vec![lines(&[[0, 1]])],
        }]);
        asm.append_elements(vec![
            CellBlock::with_cells(CellType::Tetra, [[0, 1, 2, 3]]).expect("tet"),
        ]);

        let mesh = asm.finish().expect("assemble");
        assert_eq!(mesh.cell_sets["edge"], vec![vec![0], vec![]]);
    }

    #[test]
    fn empty_marker_has_only_empty_entries() {
        let mut asm = MeshAssembler::default();
        asm.set_dimension(2, 1).expect("dim");
        asm.set_points(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);
        asm.append_elements(vec![lines(&[[0, 1]])]);
        asm.append_markers(vec![MarkerBlock {
            name: "unused".to_string(),
            blocks: Vec::new(),
        }]);

        let mesh = asm.finish().expect("assemble");
        assert_eq!(mesh.cell_sets["unused"], vec![Vec::<usize>::new()]);
    }

    #[test]
    fn rejects_bad_dimension_and_dangling_nodes() {
        let mut asm = MeshAssembler::default();
        let err = asm.set_dimension(4, 3).expect_err("4D");
        assert_eq!(err.line, 3);

        asm.set_dimension(2, 1).expect("dim");
        asm.set_points(vec![vec![0.0, 0.0]]);
        asm.append_elements(vec![lines(&[[0, 1]])]);
        let err = asm.finish().expect_err("node 1 does not exist");
        assert_eq!(err.line, 0);
        assert!(err.message.contains("references point 1"), "{}", err.message);
    }

    #[test]
    fn dangling_node_reports_its_row() {
        let mut asm = MeshAssembler::default();
        asm.set_dimension(2, 1).expect("dim");
        asm.note_highest_node(Some(NodeRef { node: 1, line: 4 }));
        asm.append_elements(vec![lines(&[[0, 1]])]);
        asm.note_highest_node(Some(NodeRef { node: 5, line: 9 }));
        asm.append_markers(vec![MarkerBlock {
            name: "wall".to_string(),
            blocks: vec![lines(&[[1, 5]])],
        }]);
        asm.set_points(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);

        let err = asm.finish().expect_err("node 5 does not exist");
        assert_eq!(err.line, 9);
        assert!(err.message.contains("references point 5"), "{}", err.message);
    }
}
