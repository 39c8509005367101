//! CLI utilities for ferro-alteration
//!
//! Batch input is one protein change per line. Blank lines and lines that
//! begin with `#` are skipped; `#` never occurs in protein change notation,
//! so anything else is handed to the parser as written. A UTF-8 BOM on the
//! first line (common in spreadsheet exports) is dropped.

pub mod format;

pub use format::{output_annotation, output_error, output_error_with_context, OutputFormat};

use std::io::{self, BufRead, Lines};

const UTF8_BOM: char = '\u{feff}';

/// A protein change read from batch input, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub line_number: usize,
    pub protein_change: String,
}

/// Iterator over the protein changes in a reader. See [`protein_change_lines`].
pub struct ProteinChangeLines<R> {
    lines: Lines<R>,
    line_number: usize,
}

/// Read protein changes from `reader`, skipping blank and comment lines.
///
/// # Examples
///
/// ```
/// use ferro_alteration::cli::protein_change_lines;
/// use std::io::Cursor;
///
/// let input = "\u{feff}V600E\n# KRAS\n\nG12C\n";
/// let lines: Vec<_> = protein_change_lines(Cursor::new(input))
///     .map(|l| l.unwrap())
///     .map(|l| (l.line_number, l.protein_change))
///     .collect();
/// assert_eq!(lines, vec![(1, "V600E".to_string()), (4, "G12C".to_string())]);
/// ```
pub fn protein_change_lines<R: BufRead>(reader: R) -> ProteinChangeLines<R> {
    ProteinChangeLines {
        lines: reader.lines(),
        line_number: 0,
    }
}

impl<R: BufRead> Iterator for ProteinChangeLines<R> {
    type Item = io::Result<InputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;

            let text = if self.line_number == 1 {
                line.strip_prefix(UTF8_BOM).unwrap_or(&line)
            } else {
                &line
            };
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            return Some(Ok(InputLine {
                line_number: self.line_number,
                protein_change: text.to_string(),
            }));
        }
    }
}
