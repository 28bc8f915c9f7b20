//! Span end-line resolution.
//!
//! Nodes only report the line of their first token. The true end line of a
//! multi-line construct is a property of the document text, so it is
//! resolved here by scanning forward from the start line and tracking
//! bracket depth until it returns to zero.
//!
//! The scan understands string literals (single, double, and triple
//! quoted, with backslash escapes) and `#` comments, so brackets inside
//! either do not count. Closing brackets seen before the first opener are
//! ignored — when resolving a nested call, the scan may begin mid-way
//! through an enclosing construct.

use crate::error::SwapError;

#[derive(Debug, Clone, Copy)]
struct StringState {
    quote: char,
    triple: bool,
}

/// Resolve the inclusive 1-indexed end line of the construct starting on
/// `start_line`.
///
/// A construct that opens no bracket ends on its start line. Returns
/// [`SwapError::MalformedSpan`] if an opened bracket never closes before
/// the end of the document.
pub fn resolve_end_line(start_line: usize, lines: &[String]) -> Result<usize, SwapError> {
    let mut depth: usize = 0;
    let mut opened = false;
    let mut string: Option<StringState> = None;

    for (index, line) in lines.iter().enumerate().skip(start_line.saturating_sub(1)) {
        let row = index + 1;
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            if let Some(state) = string {
                match ch {
                    '\\' => i += 2,
                    q if q == state.quote => {
                        if !state.triple {
                            string = None;
                            i += 1;
                        } else if chars.get(i + 1) == Some(&state.quote)
                            && chars.get(i + 2) == Some(&state.quote)
                        {
                            string = None;
                            i += 3;
                        } else {
                            i += 1;
                        }
                    }
                    _ => i += 1,
                }
                continue;
            }
            match ch {
                '#' => break,
                '\'' | '"' => {
                    let triple =
                        chars.get(i + 1) == Some(&ch) && chars.get(i + 2) == Some(&ch);
                    string = Some(StringState { quote: ch, triple });
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '(' | '[' | '{' => {
                    depth += 1;
                    opened = true;
                }
                ')' | ']' | '}' => {
                    // Depth 0 closers belong to an enclosing construct.
                    if depth > 0 {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(row);
                        }
                    }
                }
                _ => {}
            }
            i += 1;
        }
        // A single-quoted string cannot continue past a raw line break.
        if matches!(string, Some(s) if !s.triple) {
            string = None;
        }
        if depth == 0 && string.is_none() && !opened {
            // No bracket on the start line: the construct is single-line.
            return Ok(start_line);
        }
    }

    if opened {
        Err(SwapError::MalformedSpan { start_line })
    } else {
        Ok(start_line)
    }
}

// ============================================================================
// Tests
// ============================================================================
