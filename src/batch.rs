use crate::entry::{ENTRY_ROWS, Entry, validate_row};
use crate::glyphs::GlyphDecoding;
use crate::policy::PolicyNumber;
use anyhow::Result;

/// Decoded records for one input stream, in input order.
#[derive(Debug, Clone)]
pub struct PolicyBatch {
    pub records: Vec<PolicyNumber>,
}

impl PolicyBatch {
    pub fn from_text<T: GlyphDecoding>(table: &T, text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_rows(table, &rows)
    }

    pub fn from_rows<T, S>(table: &T, rows: &[S]) -> Result<Self>
    where
        T: GlyphDecoding,
        S: AsRef<str>,
    {
        // Every row is checked up front: a single bad row aborts the parse,
        // since grouping past it would misalign every entry that follows.
        for (idx, row) in rows.iter().enumerate() {
            validate_row(idx + 1, row.as_ref())?;
        }

        let mut records = Vec::with_capacity(rows.len() / ENTRY_ROWS);
        // A trailing group of fewer than 4 rows is the stream's end-of-batch
        // convention and is dropped without error.
        for group in rows.chunks_exact(ENTRY_ROWS) {
            let entry = Entry::from_rows(group)?;
            let digits = entry.decode(table);
            records.push(PolicyNumber::new(digits, Some(entry))?);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
