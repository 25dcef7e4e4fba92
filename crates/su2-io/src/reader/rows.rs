//! Row-level parsers shared by the point, element and marker sections.

use std::io::BufRead;

use su2_mesh::{CellBlock, CellType};

use super::source::{Line, LineSource};
use crate::error::{FormatError, Result};

/// The largest node index seen in a run of cell rows and the line it was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub node: usize,
    pub line: usize,
}

impl NodeRef {
    /// Keep the larger index; ties keep the earlier row.
    pub fn max(current: Option<Self>, other: Option<Self>) -> Option<Self> {
        match (current, other) {
            (Some(a), Some(b)) if b.node > a.node => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        }
    }
}

/// Cell rows merged into blocks, plus the row holding the highest node index.
#[derive(Debug, Default)]
pub(crate) struct CellRows {
    pub blocks: Vec<CellBlock>,
    pub highest: Option<NodeRef>,
}

/// Accumulates cells into blocks, merging consecutive rows of the same type.
#[derive(Debug, Default)]
pub(crate) struct BlockBuilder {
    finished: Vec<CellBlock>,
    open: Option<CellBlock>,
    highest: Option<NodeRef>,
}

impl BlockBuilder {
    pub fn push(&mut self, cell_type: CellType, nodes: &[usize], line: usize) -> Result<()> {
        if self
            .open
            .as_ref()
            .is_some_and(|block| block.cell_type() != cell_type)
        {
            self.flush();
        }
        let row_max = nodes.iter().max().map(|&node| NodeRef { node, line });
        self.highest = NodeRef::max(self.highest, row_max);
        self.open
            .get_or_insert_with(|| CellBlock::new(cell_type))
            .push_cell(nodes)
            .map_err(|err| FormatError::new(line, err.to_string()).into())
    }

    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            self.finished.push(block);
        }
    }

    pub fn finish(mut self) -> CellRows {
        self.flush();
        CellRows {
            blocks: self.finished,
            highest: self.highest,
        }
    }
}

/// Split a `KEY= value` line, requiring the key to be `keyword`.
pub(crate) fn keyword_value<'a>(line: &Line<'a>, keyword: &str) -> Result<&'a str> {
    match line.text.split_once('=') {
        Some((key, value)) if key.trim() == keyword => Ok(value),
        _ => Err(FormatError::new(
            line.number,
            format!("expected {keyword}, found '{}'", line.text),
        )
        .into()),
    }
}

/// Parse the leading integer of a header value. Trailing fields are ignored.
pub(crate) fn parse_count(value: &str, keyword: &str, line: usize) -> Result<usize> {
    let raw = value.split_whitespace().next().unwrap_or("");
    raw.parse::<usize>().map_err(|_| {
        FormatError::new(line, format!("invalid {keyword} value '{}'", value.trim())).into()
    })
}

/// Upper bound on preallocation driven by a declared section count.
pub(crate) const ROW_CAPACITY: usize = 4096;

pub(crate) fn read_points<R: BufRead>(
    source: &mut LineSource<R>,
    count: usize,
    dim: usize,
) -> Result<Vec<Vec<f64>>> {
    // The count comes from the file; rows prove it.
    let mut points = Vec::with_capacity(count.min(ROW_CAPACITY));
    for index in 0..count {
        let line = source.next_row("NPOIN", index, count)?;
        let mut fields = line.text.split_whitespace();
        let mut coords = Vec::with_capacity(dim);
        for axis in 0..dim {
            let raw = fields.next().ok_or_else(|| {
                FormatError::new(
                    line.number,
                    format!("point row has {axis} coordinates, expected {dim}"),
                )
            })?;
            let value = raw.parse::<f64>().map_err(|_| {
                FormatError::new(line.number, format!("invalid coordinate '{raw}'"))
            })?;
            coords.push(value);
        }
        points.push(coords);
    }
    Ok(points)
}

/// Read `count` element rows and merge them into blocks in file order.
pub(crate) fn read_cell_rows<R: BufRead>(
    source: &mut LineSource<R>,
    count: usize,
    section: &str,
) -> Result<CellRows> {
    let mut builder = BlockBuilder::default();
    let mut nodes = Vec::with_capacity(8);
    for index in 0..count {
        let line = source.next_row(section, index, count)?;
        let cell_type = parse_cell_row(&line, &mut nodes)?;
        builder.push(cell_type, &nodes, line.number)?;
    }
    Ok(builder.finish())
}

/// Parse `type_code idx_1 .. idx_k [tag]` into `nodes`.
pub(crate) fn parse_cell_row(line: &Line<'_>, nodes: &mut Vec<usize>) -> Result<CellType> {
    nodes.clear();
    let mut fields = line.text.split_whitespace();
    let raw_code = fields.next().unwrap_or("");
    let code = raw_code.parse::<u32>().map_err(|_| {
        FormatError::new(line.number, format!("invalid element type code '{raw_code}'"))
    })?;
    let cell_type = CellType::from_su2_code(code).ok_or_else(|| {
        FormatError::new(line.number, format!("unsupported element type {code}"))
    })?;

    let expected = cell_type.nodes_per_cell();
    for raw in fields.take(expected) {
        let node = raw.parse::<usize>().map_err(|_| {
            FormatError::new(line.number, format!("invalid node index '{raw}'"))
        })?;
        if nodes.contains(&node) {
            return Err(FormatError::new(
                line.number,
                format!("degenerate {cell_type} cell: node {node} appears more than once"),
            )
            .into());
        }
        nodes.push(node);
    }
    if nodes.len() != expected {
        return Err(FormatError::new(
            line.number,
            format!("{cell_type} row has {} node indices, expected {expected}", nodes.len()),
        )
        .into());
    }
    Ok(cell_type)
}
