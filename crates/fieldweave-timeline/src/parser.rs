//! EDL text parsing.
//!
//! Every line must be exactly twelve unsigned decimal integers separated by
//! `;`. Line N (1-based) becomes mapping N-1, which produces output frames
//! `2(N-1)` (top field) and `2(N-1)+1` (bottom field).

use fieldweave_core::{EdlError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use crate::mapping::FrameMapping;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let fields = vec!["([0-9]+)"; FrameMapping::FIELD_COUNT].join(";");
    Regex::new(&format!("^{}$", fields)).expect("EDL line pattern is valid")
});

/// Mappings in file order plus the number of lines consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEdl {
    pub mappings: Vec<FrameMapping>,
    pub line_count: usize,
}

/// Line-by-line EDL parser with a ceiling on accepted lines.
#[derive(Debug, Clone, Copy)]
pub struct EdlParser {
    line_limit: usize,
}

impl EdlParser {
    pub fn new(line_limit: usize) -> Self {
        Self { line_limit }
    }

    /// Parse one line; `line_number` is 1-based and only used for errors.
    pub fn parse_line(line: &str, line_number: usize) -> Result<FrameMapping> {
        let captures = LINE_PATTERN
            .captures(line)
            .ok_or(EdlError::Format { line: line_number })?;

        let mut fields = [0u32; FrameMapping::FIELD_COUNT];
        for (i, field) in fields.iter_mut().enumerate() {
            // Group i + 1 always participates once the pattern matched.
            let text = captures.get(i + 1).map_or("", |m| m.as_str());
            *field = text.parse().map_err(|_| EdlError::FieldOverflow {
                line: line_number,
                field: i + 1,
            })?;
        }
        Ok(FrameMapping::from_fields(fields))
    }

    /// Parse in-memory lines.
    pub fn parse<I, S>(&self, lines: I) -> Result<ParsedEdl>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.parse_lines(lines.into_iter().map(Ok))
    }

    /// Parse lines from a reader, stopping at the first I/O error.
    ///
    /// Lines end at `\n`; one trailing `\r` is dropped.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedEdl> {
        self.parse_lines(reader.split(b'\n').map(|line| -> Result<Vec<u8>> {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        }))
    }

    /// Open and parse the EDL file at `path`.
    pub fn parse_path(&self, path: &Path) -> Result<ParsedEdl> {
        let file = File::open(path).map_err(|source| EdlError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file))
    }

    fn parse_lines<I, S>(&self, lines: I) -> Result<ParsedEdl>
    where
        I: Iterator<Item = Result<S>>,
        S: AsRef<[u8]>,
    {
        let mut parsed = ParsedEdl::default();
        for line in lines {
            let line = line?;
            parsed.line_count += 1;
            if parsed.line_count > self.line_limit {
                return Err(EdlError::LimitExceeded {
                    limit: self.line_limit,
                });
            }
            let text = std::str::from_utf8(line.as_ref()).map_err(|_| EdlError::Format {
                line: parsed.line_count,
            })?;
            let mapping = Self::parse_line(text, parsed.line_count)?;
            trace!(line = parsed.line_count, %mapping, "parsed EDL line");
            parsed.mappings.push(mapping);
        }
        debug!(lines = parsed.line_count, "EDL parsed");
        Ok(parsed)
    }
}
