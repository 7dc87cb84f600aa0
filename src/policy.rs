use crate::entry::{DIGITS_PER_ENTRY, Entry, MalformedEntry};
use crate::glyphs::UNREADABLE;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

const CHECKSUM_MODULUS: u32 = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid policy number format: '{0}'")]
    InvalidFormat(String),
    #[error("invalid glyph entry: {0}")]
    InvalidEntry(#[source] MalformedEntry),
}

/// Classification of a decoded policy number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolicyStatus {
    /// Checksum is zero and every cell was read.
    #[serde(rename = "ok")]
    Valid,
    /// Every cell was read but the checksum is nonzero.
    #[serde(rename = "err")]
    ChecksumMismatch,
    /// One or more cells decoded to `?`. Takes precedence over the checksum.
    #[serde(rename = "ill")]
    Illegible,
}

impl PolicyStatus {
    /// Report column suffix: `ERR`, `ILL`, or nothing for a valid number.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            PolicyStatus::Valid => None,
            PolicyStatus::ChecksumMismatch => Some("ERR"),
            PolicyStatus::Illegible => Some("ILL"),
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix() {
            Some(tag) => write!(f, "{}", tag),
            None => write!(f, "OK"),
        }
    }
}

/// A 9-character policy number, each character a digit or `?`, optionally
/// retaining the glyph block it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyNumber {
    number: String,
    entry: Option<Entry>,
}

impl PolicyNumber {
    pub fn new<S: Into<String>>(number: S, entry: Option<Entry>) -> Result<Self, PolicyError> {
        let number = number.into();
        if !format_valid(&number) {
            return Err(PolicyError::InvalidFormat(number));
        }
        Ok(Self { number, entry })
    }

    /// Construct from a digit string plus raw rows that have not been through
    /// [`Entry::from_rows`] yet. The rows are validated here; the digit string
    /// is never cross-checked against them.
    pub fn with_raw_entry<S, R>(number: S, rows: &[R]) -> Result<Self, PolicyError>
    where
        S: Into<String>,
        R: AsRef<str>,
    {
        let entry = Entry::from_rows(rows).map_err(PolicyError::InvalidEntry)?;
        Self::new(number, Some(entry))
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    /// Positional checksum. With the digits named `d9 d8 ... d1` left to
    /// right, the checksum is `(1*d1 + 2*d2 + ... + 9*d9) mod 11`. Not
    /// defined for a number containing `?`: an unread cell never contributes
    /// to the arithmetic.
    pub fn checksum(&self) -> Option<u32> {
        if self.number.contains(UNREADABLE) {
            return None;
        }
        let sum = self
            .number
            .chars()
            .rev()
            .enumerate()
            .fold(0u32, |acc, (idx, digit)| {
                acc + (idx as u32 + 1) * digit.to_digit(10).unwrap_or(0)
            });
        Some(sum % CHECKSUM_MODULUS)
    }

    pub fn is_valid(&self) -> bool {
        self.checksum() == Some(0)
    }

    pub fn status(&self) -> PolicyStatus {
        if self.number.contains(UNREADABLE) {
            PolicyStatus::Illegible
        } else if !self.is_valid() {
            PolicyStatus::ChecksumMismatch
        } else {
            PolicyStatus::Valid
        }
    }

    /// Reproduce the originating glyph block, or `None` when the number was
    /// synthesized without one.
    pub fn render(&self) -> Option<String> {
        self.entry.as_ref().map(Entry::render)
    }

    /// One report row: the number followed by its status suffix, or the bare
    /// number when valid.
    pub fn report_line(&self) -> String {
        match self.status().suffix() {
            Some(tag) => format!("{} {}", self.number, tag),
            None => self.number.clone(),
        }
    }
}

fn format_valid(number: &str) -> bool {
    number.chars().count() == DIGITS_PER_ENTRY
        && number.chars().all(|ch| ch.is_ascii_digit() || ch == UNREADABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LINE_COLS;
    use pretty_assertions::assert_eq;

    #[test]
    fn checksum_zero_is_valid() {
        let number = PolicyNumber::new("123456789", None).unwrap();
        assert_eq!(number.checksum(), Some(0));
        assert!(number.is_valid());
        assert_eq!(number.status(), PolicyStatus::Valid);
        assert_eq!(number.report_line(), "123456789");
    }

    #[test]
    fn worked_example_from_the_report_format() {
        let number = PolicyNumber::new("457508000", None).unwrap();
        assert_eq!(number.checksum(), Some(0));

        let number = PolicyNumber::new("664371495", None).unwrap();
        assert_eq!(number.checksum(), Some(2));
        assert_eq!(number.report_line(), "664371495 ERR");
    }

    #[test]
    fn leading_digit_change_breaks_checksum() {
        let number = PolicyNumber::new("023456789", None).unwrap();
        assert_ne!(number.checksum(), Some(0));
        assert_eq!(number.status(), PolicyStatus::ChecksumMismatch);
    }

    #[test]
    fn unread_cells_are_never_summed() {
        let number = PolicyNumber::new("86110??36", None).unwrap();
        assert_eq!(number.checksum(), None);
        assert!(!number.is_valid());
        assert_eq!(number.status(), PolicyStatus::Illegible);
        assert_eq!(number.report_line(), "86110??36 ILL");
    }

    #[test]
    fn illegible_wins_over_bad_checksum() {
        // 023456789 alone is ERR; with a ? it must report ILL.
        let number = PolicyNumber::new("02345678?", None).unwrap();
        assert_eq!(number.status(), PolicyStatus::Illegible);
    }

    #[test]
    fn status_labels() {
        assert_eq!(PolicyStatus::Valid.to_string(), "OK");
        assert_eq!(PolicyStatus::ChecksumMismatch.to_string(), "ERR");
        assert_eq!(PolicyStatus::Illegible.to_string(), "ILL");
        assert_eq!(PolicyStatus::Valid.suffix(), None);
    }

    #[test]
    fn rejects_malformed_numbers() {
        for bad in ["12345678", "1234567890", "12345678a", "", "4575080 0"] {
            assert_eq!(
                PolicyNumber::new(bad, None),
                Err(PolicyError::InvalidFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn raw_entry_rows_are_validated() {
        let rows = vec!["not a glyph row".to_string(); 4];
        let err = PolicyNumber::with_raw_entry("123456789", &rows).unwrap_err();
        assert!(matches!(err, PolicyError::InvalidEntry(_)));
    }

    #[test]
    fn render_requires_a_retained_entry() {
        let bare = PolicyNumber::new("123456789", None).unwrap();
        assert_eq!(bare.render(), None);

        let rows = [
            "    _  _     _  _  _  _  _ ",
            "  | _| _||_||_ |_   ||_||_|",
            "  ||_  _|  | _||_|  ||_| _|",
            &" ".repeat(LINE_COLS),
        ];
        let kept = PolicyNumber::with_raw_entry("123456789", &rows).unwrap();
        let block = kept.render().unwrap();
        assert_eq!(block.len(), (LINE_COLS + 1) * 4);
        assert!(block.starts_with("    _  _     _  _  _  _  _ \n"));
    }
}
