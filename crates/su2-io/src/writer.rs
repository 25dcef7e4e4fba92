//! SU2 mesh writer.
//!
//! Emits `NDIME`, `NELEM` (cells of blocks no marker tags), `NPOIN` and
//! `NMARK`. Markers are written in the order of the first block they tag, so
//! re-reading the output rebuilds the same block sequence.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use su2_mesh::{CellType, Mesh, marker_order};
use tracing::debug;

use crate::error::{Result, Su2Error};

/// Write `mesh` to a file, creating or truncating it.
pub fn write_file(path: impl AsRef<Path>, mesh: &Mesh) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(Su2Error::Write)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, mesh)?;
    writer.flush().map_err(Su2Error::Write)?;
    debug!(path = %path.display(), "wrote SU2 mesh");
    Ok(())
}

/// Render `mesh` as SU2 text.
pub fn write_string(mesh: &Mesh) -> Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, mesh)?;
    String::from_utf8(buf)
        .map_err(|err| Su2Error::Write(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Write `mesh` to a stream. An empty mesh produces no output.
pub fn write<W: Write>(mut writer: W, mesh: &Mesh) -> Result<()> {
    mesh.check_consistency()?;
    if mesh.is_empty() {
        return Ok(());
    }
    write_sections(&mut writer, mesh).map_err(Su2Error::Write)?;
    writer.flush().map_err(Su2Error::Write)
}

fn write_sections<W: Write>(w: &mut W, mesh: &Mesh) -> io::Result<()> {
    let Some(dim) = mesh.dimension else {
        // Only markers without cells remain.
        return write_markers(w, mesh);
    };

    let interior: Vec<usize> = (0..mesh.cells.len())
        .filter(|&block| !mesh.is_marked_block(block))
        .collect();
    let first_marked = (0..mesh.cells.len()).find(|&block| mesh.is_marked_block(block));
    let markers_first = match (interior.first(), first_marked) {
        (Some(&first_interior), Some(first_marked)) => first_marked < first_interior,
        _ => false,
    };

    writeln!(w, "NDIME= {dim}")?;
    if markers_first {
        write_markers(w, mesh)?;
        write_elements(w, mesh, &interior)?;
        write_points(w, mesh)
    } else {
        write_elements(w, mesh, &interior)?;
        write_points(w, mesh)?;
        write_markers(w, mesh)
    }
}

fn write_elements<W: Write>(w: &mut W, mesh: &Mesh, blocks: &[usize]) -> io::Result<()> {
    let total: usize = blocks.iter().map(|&b| mesh.cells[b].len()).sum();
    writeln!(w, "NELEM= {total}")?;
    let mut index = 0usize;
    for block in blocks.iter().map(|&b| &mesh.cells[b]) {
        for cell in block.cells() {
            write_cell_row(w, block.cell_type(), cell)?;
            writeln!(w, "\t{index}")?;
            index += 1;
        }
    }
    debug!(cells = total, blocks = blocks.len(), "wrote NELEM section");
    Ok(())
}

fn write_points<W: Write>(w: &mut W, mesh: &Mesh) -> io::Result<()> {
    writeln!(w, "NPOIN= {}", mesh.points.len())?;
    for (index, coords) in mesh.points.iter().enumerate() {
        for value in coords {
            // Debug keeps the shortest round-trip digits and switches to
            // exponent form for very large or small magnitudes.
            write!(w, "{value:?}\t")?;
        }
        writeln!(w, "{index}")?;
    }
    Ok(())
}

fn write_markers<W: Write>(w: &mut W, mesh: &Mesh) -> io::Result<()> {
    let order = marker_order(mesh);
    writeln!(w, "NMARK= {}", order.len())?;
    for name in order {
        let sets = &mesh.cell_sets[name];
        let count: usize = sets.iter().map(Vec::len).sum();
        writeln!(w, "MARKER_TAG= {name}")?;
        writeln!(w, "MARKER_ELEMS= {count}")?;
        for (block, ids) in mesh.cells.iter().zip(sets) {
            for cell in ids.iter().filter_map(|&id| block.cell(id)) {
                write_cell_row(w, block.cell_type(), cell)?;
                writeln!(w)?;
            }
        }
        debug!(marker = %name, cells = count, "wrote marker");
    }
    Ok(())
}

fn write_cell_row<W: Write>(w: &mut W, cell_type: CellType, nodes: &[usize]) -> io::Result<()> {
    write!(w, "{}", cell_type.su2_code())?;
    for node in nodes {
        write!(w, "\t{node}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use su2_mesh::{CellBlock, MeshError};

    use super::*;
    use crate::reader::read_str;

    fn quad_with_boundary() -> Mesh {
        let mut mesh = Mesh::new(2);
        mesh.points = vec![
            vec![0.0, 0.0],
            vec![1.5, 0.0],
            vec![1.5, 0.25],
            vec![0.0, 0.25],
        ];
        mesh.cells = vec![
            CellBlock::with_cells(CellType::Quad, [[0, 1, 2, 3]]).expect("quad"),
            CellBlock::with_cells(CellType::Line, [[0, 1], [2, 3]]).expect("walls"),
            CellBlock::with_cells(CellType::Line, [[1, 2]]).expect("outlet"),
        ];
        mesh.cell_sets = BTreeMap::from([
            ("wall".to_string(), vec![vec![], vec![0, 1], vec![]]),
            ("outlet".to_string(), vec![vec![], vec![], vec![0]]),
        ]);
        mesh
    }

    #[test]
    fn writes_expected_grammar() {
        let text = write_string(&quad_with_boundary()).expect("write");
        let expected = "\
NDIME= 2
NELEM= 1
9\t0\t1\t2\t3\t0
NPOIN= 4
0.0\t0.0\t0
1.5\t0.0\t1
1.5\t0.25\t2
0.0\t0.25\t3
NMARK= 2
MARKER_TAG= wall
MARKER_ELEMS= 2
3\t0\t1
3\t2\t3
MARKER_TAG= outlet
MARKER_ELEMS= 1
3\t1\t2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn round_trips_through_reader() {
        let mesh = quad_with_boundary();
        let again = read_str(&write_string(&mesh).expect("write")).expect("read back");
        assert_eq!(again, mesh);
    }

    #[test]
    fn extreme_coordinates_stay_compact() {
        let mut mesh = Mesh::new(2);
        mesh.points = vec![vec![1e-300, -2.5e300], vec![123456789.0, 1e-7]];
        let text = write_string(&mesh).expect("write");
        assert!(text.contains("1e-300\t-2.5e300\t0\n"), "{text}");
        assert!(text.contains("123456789.0\t1e-7\t1\n"), "{text}");
        assert!(text.lines().all(|line| line.len() < 40), "{text}");
        assert_eq!(read_str(&text).expect("read back"), mesh);
    }

    #[test]
    fn keeps_empty_markers() {
        let mut mesh = quad_with_boundary();
        mesh.cell_sets.insert("symmetry".to_string(), vec![vec![], vec![], vec![]]);
        let text = write_string(&mesh).expect("write");
        assert!(text.contains("MARKER_TAG= symmetry\nMARKER_ELEMS= 0\n"));
        assert_eq!(read_str(&text).expect("read back"), mesh);
    }

    #[test]
    fn markers_before_elements_keep_block_order() {
        let src = "NDIME= 2\nNPOIN= 3\n0 0\n1 0\n0 1\nNMARK= 1\nMARKER_TAG= edge\n\
                   MARKER_ELEMS= 1\n3 0 1\nNELEM= 1\n5 0 1 2\n";
        let mesh = read_str(src).expect("read");
        assert_eq!(mesh.cells[0].cell_type(), CellType::Line);
        let text = write_string(&mesh).expect("write");
        assert!(text.find("NMARK").expect("nmark") < text.find("NELEM").expect("nelem"));
        assert_eq!(read_str(&text).expect("read back"), mesh);
    }

    #[test]
    fn empty_mesh_writes_nothing() {
        assert_eq!(write_string(&Mesh::default()).expect("write"), "");
    }

    #[test]
    fn dimensionless_mesh_with_only_empty_markers() {
        let mut mesh = Mesh::default();
        mesh.cell_sets.insert("farfield".to_string(), Vec::new());
        let text = write_string(&mesh).expect("write");
        assert_eq!(text, "NMARK= 1\nMARKER_TAG= farfield\nMARKER_ELEMS= 0\n");
        assert_eq!(read_str(&text).expect("read back"), mesh);
    }

    #[test]
    fn rejects_inconsistent_mesh() {
        let mut mesh = quad_with_boundary();
        mesh.cell_sets.insert("short".to_string(), vec![vec![]]);
        let err = write_string(&mesh).expect_err("bad cell set");
        assert!(matches!(err, Su2Error::InvalidMesh(MeshError::CellSetLength { .. })));
    }

    #[test]
    fn write_file_creates_readable_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("channel.su2");
        let mesh = quad_with_boundary();
        write_file(&path, &mesh).expect("write file");
        assert_eq!(crate::reader::read_file(&path).expect("read file"), mesh);
    }
}
