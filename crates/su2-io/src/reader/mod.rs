//! SU2 section scanner.
//!
//! The stream is consumed line by line until end of file or a blank line.
//! Each `KEY= value` header dispatches to a section parser; the parsed payloads
//! are handed to [`MeshAssembler`], which builds the final [`Mesh`].

mod assemble;
mod rows;
mod source;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use su2_mesh::Mesh;
use tracing::debug;

use crate::error::{FormatError, Result, Su2Error};
use assemble::{MarkerBlock, MeshAssembler};
use rows::{NodeRef, ROW_CAPACITY, keyword_value, parse_count, read_cell_rows, read_points};
use source::LineSource;

/// Top-level SU2 sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Dimension,
    Points,
    Elements,
    Markers,
}

impl Section {
    const COUNT: usize = 4;

    fn from_keyword(key: &str) -> Option<Self> {
        match key {
            "NDIME" => Some(Section::Dimension),
            "NPOIN" => Some(Section::Points),
            "NELEM" => Some(Section::Elements),
            "NMARK" => Some(Section::Markers),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Section::Dimension => "NDIME",
            Section::Points => "NPOIN",
            Section::Elements => "NELEM",
            Section::Markers => "NMARK",
        }
    }

    fn parse_header(text: &str, line: usize) -> Result<(Self, usize)> {
        let section = text
            .split_once('=')
            .and_then(|(key, value)| Some((Section::from_keyword(key.trim())?, value)));
        match section {
            Some((section, value)) => {
                let count = parse_count(value, section.keyword(), line)?;
                Ok((section, count))
            }
            None => Err(FormatError::new(line, format!("unrecognized line '{text}'")).into()),
        }
    }
}

/// Read an SU2 mesh from a file path.
pub fn read_file(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(Su2Error::Read)?;
    debug!(path = %path.display(), "reading SU2 mesh");
    read(BufReader::new(file))
}

/// Read an SU2 mesh from an in-memory string.
pub fn read_str(raw: &str) -> Result<Mesh> {
    read(raw.as_bytes())
}

/// Read an SU2 mesh from a buffered stream.
///
/// Reading stops at end of stream or at the first blank line outside a
/// section. Any malformed section aborts the whole read.
pub fn read<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut source = LineSource::new(reader);
    let mut assembler = MeshAssembler::default();
    let mut seen = [false; Section::COUNT];

    while let Some(line) = source.next_line()? {
        if line.text.is_empty() {
            break;
        }
        let header_line = line.number;
        let (section, count) = Section::parse_header(line.text, header_line)?;

        if std::mem::replace(&mut seen[section as usize], true) {
            return Err(FormatError::new(
                header_line,
                format!("duplicate {} section", section.keyword()),
            )
            .into());
        }

        match section {
            Section::Dimension => assembler.set_dimension(count, header_line)?,
            Section::Points => {
                let dim = require_dimension(&assembler, section, header_line)?;
                assembler.set_points(read_points(&mut source, count, dim)?);
            }
            Section::Elements => {
                require_dimension(&assembler, section, header_line)?;
                let rows = read_cell_rows(&mut source, count, "NELEM")?;
                debug!(cells = count, blocks = rows.blocks.len(), "parsed NELEM section");
                assembler.note_highest_node(rows.highest);
                assembler.append_elements(rows.blocks);
            }
            Section::Markers => {
                let (markers, highest) = read_markers(&mut source, count)?;
                debug!(markers = markers.len(), "parsed NMARK section");
                assembler.note_highest_node(highest);
                assembler.append_markers(markers);
            }
        }
    }

    let mesh = assembler.finish()?;
    debug!(
        dimension = ?mesh.dimension,
        points = mesh.num_points(),
        blocks = mesh.cells.len(),
        cells = mesh.num_cells(),
        markers = mesh.cell_sets.len(),
        "read SU2 mesh"
    );
    Ok(mesh)
}

fn require_dimension(assembler: &MeshAssembler, section: Section, line: usize) -> Result<usize> {
    assembler.dimension().ok_or_else(|| {
        FormatError::new(
            line,
            format!("{} section before NDIME", section.keyword()),
        )
        .into()
    })
}

fn read_markers<R: BufRead>(
    source: &mut LineSource<R>,
    count: usize,
) -> Result<(Vec<MarkerBlock>, Option<NodeRef>)> {
    let mut markers = Vec::<MarkerBlock>::with_capacity(count.min(ROW_CAPACITY));
    let mut highest = None;
    for index in 0..count {
        let (tag_line, name) = {
            let line = source.next_row("NMARK", index, count)?;
            let name = keyword_value(&line, "MARKER_TAG")?.trim().to_string();
            (line.number, name)
        };
        if name.is_empty() {
            return Err(FormatError::new(tag_line, "empty MARKER_TAG").into());
        }
        if markers.iter().any(|m| m.name == name) {
            return Err(FormatError::new(tag_line, format!("duplicate marker '{name}'")).into());
        }

        let num_cells = {
            let line = source.next_row("NMARK", index, count)?;
            let value = keyword_value(&line, "MARKER_ELEMS")?;
            parse_count(value, "MARKER_ELEMS", line.number)?
        };
        let rows = read_cell_rows(source, num_cells, "MARKER_ELEMS")?;
        debug!(marker = %name, cells = num_cells, "parsed marker");
        highest = NodeRef::max(highest, rows.highest);
        markers.push(MarkerBlock {
            name,
            blocks: rows.blocks,
        });
    }
    Ok((markers, highest))
}
