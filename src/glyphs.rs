use std::collections::HashMap;
use std::sync::OnceLock;

/// A digit cell is a 3-row-by-3-column block of {space, `_`, `|`} characters,
/// stored row-major as a 9-character string.
/// This layout allows cells to be sliced straight out of the input rows.
pub const CELL_ROWS: usize = 3;
pub const CELL_COLS: usize = 3;

/// Characters allowed anywhere in a glyph row.
pub const GLYPH_ALPHABET: [char; 3] = [' ', '_', '|'];

/// Placeholder emitted for a cell that matches no known digit.
pub const UNREADABLE: char = '?';

pub trait GlyphDecoding {
    fn name(&self) -> &'static str;
    fn decode_cell(&self, pattern: &str) -> Option<char>;
    fn is_known(&self, pattern: &str) -> bool {
        self.decode_cell(pattern).is_some()
    }
}

/// Canonical seven-segment renderings of the digits 0..9, row-major.
///
/// Summary of the layout (using 8 as the example):
/// ```text
///  _
/// |_|
/// |_|
/// ```
const ZERO: &str = " _ | ||_|";
const ONE: &str = "     |  |";
const TWO: &str = " _  _||_ ";
const THREE: &str = " _  _| _|";
const FOUR: &str = "   |_|  |";
const FIVE: &str = " _ |_  _|";
const SIX: &str = " _ |_ |_|";
const SEVEN: &str = " _   |  |";
const EIGHT: &str = " _ |_||_|";
const NINE: &str = " _ |_| _|";

const GLYPHS: [&str; 10] = [ZERO, ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE];

/// Lookup table from a 9-character cell pattern to its digit character.
///
/// Lookup is total: a pattern outside the 10 canonical renderings resolves to
/// `None` rather than an error, so a smudged cell degrades to `?` instead of
/// aborting the decode.
#[derive(Default)]
pub struct SevenSegmentTable {
    map: HashMap<&'static str, char>,
}

impl SevenSegmentTable {
    pub fn new() -> Self {
        let mut m = HashMap::new();

        for (value, pattern) in GLYPHS.iter().enumerate() {
            m.insert(*pattern, char::from(b'0' + value as u8));
        }

        Self { map: m }
    }

    /// Shared read-only instance, built on first use.
    pub fn shared() -> &'static Self {
        static TABLE: OnceLock<SevenSegmentTable> = OnceLock::new();
        TABLE.get_or_init(SevenSegmentTable::new)
    }

    /// The canonical pattern for a digit character, if it is one.
    pub fn pattern_for(digit: char) -> Option<&'static str> {
        digit.to_digit(10).map(|value| GLYPHS[value as usize])
    }
}

impl GlyphDecoding for SevenSegmentTable {
    fn name(&self) -> &'static str {
        "seven-segment"
    }

    fn decode_cell(&self, pattern: &str) -> Option<char> {
        self.map.get(pattern).copied()
    }
}

/// Public helper: checks whether a character belongs to the glyph alphabet.
pub fn valid_glyph_char(ch: char) -> bool {
    GLYPH_ALPHABET.contains(&ch)
}
