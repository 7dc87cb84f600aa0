//! Core library for seven-segment policy number decoding and reporting.

mod batch;
mod entry;
mod glyphs;
mod policy;
mod report;

pub use batch::PolicyBatch;
pub use entry::{DIGITS_PER_ENTRY, ENTRY_ROWS, Entry, LINE_COLS, MalformedEntry, validate_row};
pub use glyphs::{
    CELL_COLS, CELL_ROWS, GLYPH_ALPHABET, GlyphDecoding, SevenSegmentTable, UNREADABLE,
    valid_glyph_char,
};
pub use policy::{PolicyError, PolicyNumber, PolicyStatus};
pub use report::{ReportRecord, ReportSummary};

use anyhow::Result;

/// Splits the entire input text into four-row entries and decodes each one.
pub fn decode_text_to_batch<T: GlyphDecoding>(table: &T, text: &str) -> Result<PolicyBatch> {
    PolicyBatch::from_text(table, text)
}
