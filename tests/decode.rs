use policyocr::{LINE_COLS, PolicyStatus, SevenSegmentTable, decode_text_to_batch};
use pretty_assertions::assert_eq;

/// Render a 9-digit number as a four-row glyph entry, trailing separator
/// row included.
fn entry_text(digits: &str) -> String {
    let mut rows = vec![String::new(); 3];
    for d in digits.chars() {
        let pattern = SevenSegmentTable::pattern_for(d).unwrap();
        for (i, row) in rows.iter_mut().enumerate() {
            row.push_str(&pattern[i * 3..i * 3 + 3]);
        }
    }
    format!(
        "{}\n{}\n{}\n{}\n",
        rows[0],
        rows[1],
        rows[2],
        " ".repeat(LINE_COLS)
    )
}

#[test]
fn canonical_rendering_matches_the_documented_format() {
    let text = entry_text("123456789");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "    _  _     _  _  _  _  _ ");
    assert_eq!(lines[1], "  | _| _||_||_ |_   ||_||_|");
    assert_eq!(lines[2], "  ||_  _|  | _||_|  ||_| _|");
}

#[test]
fn end_to_end_worked_example() {
    let batch =
        decode_text_to_batch(SevenSegmentTable::shared(), &entry_text("457508000")).unwrap();
    assert_eq!(batch.len(), 1);
    let record = &batch.records[0];
    assert_eq!(record.number(), "457508000");
    assert_eq!(record.status(), PolicyStatus::Valid);
    assert_eq!(batch.report(), "457508000\n");
}

#[test]
fn classifies_a_full_stream() {
    let mut text = entry_text("457508000");
    text.push_str(&entry_text("664371495"));

    // Smudge the first cell of a third entry into an unknown pattern.
    let illegible = entry_text("457508000");
    let mut lines: Vec<String> = illegible.lines().map(str::to_string).collect();
    lines[0].replace_range(0..3, "_ _");
    for line in &lines {
        text.push_str(line);
        text.push('\n');
    }

    let batch = decode_text_to_batch(SevenSegmentTable::shared(), &text).unwrap();
    assert_eq!(batch.report(), "457508000\n664371495 ERR\n?57508000 ILL\n");
}

#[test]
fn retained_entries_round_trip_through_render() {
    let text = entry_text("457508000");
    let batch = decode_text_to_batch(SevenSegmentTable::shared(), &text).unwrap();
    assert_eq!(batch.records[0].render().unwrap(), text);
}
