//! Helpers for fixture-based tests.
//!
//! Test sources mark the cursor with a `|c|` wrapper around a single
//! character, e.g. `foo(bar, thi|n|g=None)`; [`acquire_cursor`] strips
//! the markers and returns the 1-indexed position. [`dedent`] removes the
//! common leading indentation of a raw-string fixture.

/// Find the `|c|` cursor marker in `text`.
///
/// Returns the text with the markers removed and the 1-indexed
/// `(row, col)` of the marked character.
///
/// # Panics
///
/// Panics when no marker is present — fixtures without a cursor are a
/// test bug.
pub fn acquire_cursor(text: &str) -> (String, (usize, usize)) {
    let lines: Vec<&str> = text.split('\n').collect();
    for (row, line) in lines.iter().enumerate() {
        let Some(index) = line.find('|') else {
            continue;
        };
        assert_eq!(
            line.as_bytes().get(index + 2),
            Some(&b'|'),
            "cursor marker must wrap exactly one character: {:?}",
            line
        );
        let mut cleaned: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        cleaned[row] = line.replacen('|', "", 2);
        return (cleaned.join("\n"), (row + 1, index + 1));
    }
    panic!("no cursor marker found in fixture");
}

/// Strip the common leading indentation from every non-blank line.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| if line.len() >= indent { &line[indent..] } else { "" })
        .collect::<Vec<_>>()
        .join("\n")
}
