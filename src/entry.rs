use crate::glyphs::{CELL_COLS, CELL_ROWS, GlyphDecoding, UNREADABLE, valid_glyph_char};
use thiserror::Error;

pub const ENTRY_ROWS: usize = 4;
pub const LINE_COLS: usize = 27;
pub const DIGITS_PER_ENTRY: usize = 9;

/// Validation failures for raw glyph rows. Positions are 1-based so they can
/// be quoted directly against the input file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedEntry {
    #[error("entry must have exactly 4 rows, found {0}")]
    WrongRowCount(usize),
    #[error("line {line}: expected 27 characters, found {len}")]
    WrongLength { line: usize, len: usize },
    #[error("line {line}: invalid character '{ch}' (U+{code:04X}) at column {col}")]
    InvalidCharacter {
        line: usize,
        ch: char,
        code: u32,
        col: usize,
    },
}

/// Check a single row against the shared line format: exactly 27 characters,
/// each one of {space, `_`, `|`}. `line` is the 1-based position reported on
/// failure.
pub fn validate_row(line: usize, row: &str) -> Result<(), MalformedEntry> {
    let len = row.chars().count();
    if len != LINE_COLS {
        return Err(MalformedEntry::WrongLength { line, len });
    }
    for (idx, ch) in row.chars().enumerate() {
        if !valid_glyph_char(ch) {
            return Err(MalformedEntry::InvalidCharacter {
                line,
                ch,
                code: ch as u32,
                col: idx + 1,
            });
        }
    }
    Ok(())
}

/// One raw policy number block: 4 rows of 27 glyph characters. Rows 0..2
/// carry the nine digit cells; row 3 is the inter-entry separator and is kept
/// verbatim but never consulted while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    rows: [String; ENTRY_ROWS],
}

impl Entry {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MalformedEntry> {
        if rows.len() != ENTRY_ROWS {
            return Err(MalformedEntry::WrongRowCount(rows.len()));
        }
        for (idx, row) in rows.iter().enumerate() {
            validate_row(idx + 1, row.as_ref())?;
        }
        Ok(Self {
            rows: [
                rows[0].as_ref().to_string(),
                rows[1].as_ref().to_string(),
                rows[2].as_ref().to_string(),
                rows[3].as_ref().to_string(),
            ],
        })
    }

    pub fn rows(&self) -> &[String; ENTRY_ROWS] {
        &self.rows
    }

    /// Decode the entry into its 9-character digit string.
    ///
    /// Cell `p` is the concatenation of columns `3p..3p+3` of rows 0..2.
    /// A cell the table does not recognise decodes to `?`; only malformed
    /// input shape can make decoding fail, and that is ruled out at
    /// construction.
    pub fn decode<T: GlyphDecoding>(&self, table: &T) -> String {
        (0..DIGITS_PER_ENTRY)
            .map(|position| {
                let cell = self.cell_at(position);
                table.decode_cell(&cell).unwrap_or(UNREADABLE)
            })
            .collect()
    }

    /// Reproduce the glyph block for display: the three glyph rows plus one
    /// blank separator line, each terminated by a line break.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((LINE_COLS + 1) * ENTRY_ROWS);
        for row in &self.rows[..CELL_ROWS] {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&" ".repeat(LINE_COLS));
        out.push('\n');
        out
    }

    /// The 9-character pattern for the cell at `position` (0..8), row-major.
    fn cell_at(&self, position: usize) -> String {
        let start = position * CELL_COLS;
        let mut cell = String::with_capacity(CELL_ROWS * CELL_COLS);
        for row in &self.rows[..CELL_ROWS] {
            cell.extend(row.chars().skip(start).take(CELL_COLS));
        }
        cell
    }
}
