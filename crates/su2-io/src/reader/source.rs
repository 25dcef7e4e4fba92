use std::io::BufRead;

use crate::error::{FormatError, Result, Su2Error};

/// One trimmed input line and its 1-based line number.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Line-at-a-time view over a buffered stream that drops `%` comment lines.
pub(crate) struct LineSource<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }

    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        loop {
            self.buf.clear();
            let read = self.reader.read_line(&mut self.buf).map_err(Su2Error::Read)?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;
            if self.buf.trim_start().starts_with('%') {
                continue;
            }
            return Ok(Some(Line {
                number: self.line,
                text: self.buf.trim(),
            }));
        }
    }

    /// Next payload row of a section that declared `count` entries, `index` of
    /// which were already consumed. End of stream and blank lines both mean the
    /// section is shorter than declared.
    pub fn next_row(&mut self, section: &str, index: usize, count: usize) -> Result<Line<'_>> {
        let last = self.line;
        match self.next_line()? {
            Some(line) if !line.text.is_empty() => Ok(line),
            Some(line) => Err(FormatError::new(
                line.number,
                format!("blank line in {section} section after {index} of {count} entries"),
            )
            .into()),
            None => Err(FormatError::new(
                last,
                format!("unexpected end of file in {section} section after {index} of {count} entries"),
            )
            .into()),
        }
    }
}
