// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tokenizer for the Python statement surface callswap operates on.
//!
//! Produces a flat token stream with 1-indexed line/column positions and
//! byte offsets into the source. Logical lines follow Python's rules:
//! newlines inside open `(`/`[`/`{` delimiters are implicit joins, a
//! trailing backslash joins explicitly, and comments run to end of line.
//!
//! String literals cover single, double, and triple quotes with optional
//! prefixes (`r`, `b`, `f`, `u`, `t` and two-letter combinations); escape
//! sequences are honored for tokenization purposes only — literal text is
//! kept verbatim.

use memchr::memchr;
use thiserror::Error;

// ============================================================================
// Tokens
// ============================================================================

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokKind {
    /// Identifier or keyword.
    Name,
    /// Numeric literal (integer, float, hex, exponent forms).
    Number,
    /// String literal, including any prefix and quotes, verbatim.
    String,
    /// Operator or punctuation.
    Op,
    /// End of a logical line (only emitted outside open delimiters).
    Newline,
    /// End of the token stream.
    EndMarker,
}

/// A single token with its verbatim text and source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokKind,
    /// Verbatim source text of the token.
    pub text: &'a str,
    /// Byte offset of the token start in the source.
    pub start: usize,
    /// 1-indexed line of the token start.
    pub line: usize,
    /// 1-indexed column of the token start.
    pub col: usize,
}

impl<'a> Token<'a> {
    /// Whether this is an `Op` token with the given text.
    pub fn is_op(&self, text: &str) -> bool {
        self.kind == TokKind::Op && self.text == text
    }

    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Document-level tokenization failures.
///
/// These indicate source that cannot be tokenized at all, as opposed to
/// statements the parser merely declines to handle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokError {
    /// A string literal was still open at end of line (single-quoted) or
    /// end of file (triple-quoted).
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: usize },

    /// A closing delimiter appeared with no matching opener.
    #[error("unmatched closing delimiter '{delimiter}' on line {line}")]
    UnmatchedClosing { delimiter: char, line: usize },

    /// An opening delimiter was never closed before end of file.
    #[error("unclosed delimiter '{delimiter}' opened on line {line}")]
    UnclosedDelimiter { delimiter: char, line: usize },

    /// A character outside the recognized token alphabet.
    #[error("unrecognized character {character:?} on line {line}")]
    UnrecognizedCharacter { character: char, line: usize },
}

impl TokError {
    /// The 1-indexed line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            TokError::UnterminatedString { line }
            | TokError::UnmatchedClosing { line, .. }
            | TokError::UnclosedDelimiter { line, .. }
            | TokError::UnrecognizedCharacter { line, .. } => *line,
        }
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Tokenize Python source into a flat token stream.
///
/// The stream ends with a final `Newline` (if the last logical line has
/// tokens) followed by `EndMarker`.
///
/// # Errors
///
/// Returns a [`TokError`] for unterminated strings, unbalanced delimiters,
/// and unrecognized characters.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, TokError> {
    Tokenizer::new(source).run()
}

const OPS3: [&str; 5] = ["**=", "//=", "<<=", ">>=", "..."];
const OPS2: [&str; 19] = [
    "**", "//", "<<", ">>", "<=", ">=", "==", "!=", "->", ":=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "@=",
];
const OPS1: &str = "+-*/%@&|^~<>=.,:;()[]{}";

struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    /// Stack of open delimiters with the line each was opened on.
    open: Vec<(char, usize)>,
    tokens: Vec<Token<'a>>,
    line_has_tokens: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Tokenizer {
            source,
            pos: 0,
            line: 1,
            col: 1,
            open: Vec::new(),
            tokens: Vec::new(),
            line_has_tokens: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn push(&mut self, kind: TokKind, start: usize, line: usize, col: usize) {
        self.tokens.push(Token {
            kind,
            text: &self.source[start..self.pos],
            start,
            line,
            col,
        });
        self.line_has_tokens = true;
    }

    fn run(mut self) -> Result<Vec<Token<'a>>, TokError> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\x0c' | '\r' => {
                    self.bump();
                }
                '\\' if matches!(self.peek_at(1), Some('\n'))
                    || (self.peek_at(1) == Some('\r') && self.peek_at(2) == Some('\n')) =>
                {
                    // Explicit line join: discard the backslash and newline.
                    self.bump();
                    loop {
                        match self.bump() {
                            None | Some('\n') => break,
                            Some(_) => {}
                        }
                    }
                }
                '\n' => self.newline(),
                '#' => self.skip_comment(),
                _ if ch.is_alphabetic() || ch == '_' => self.name_or_prefixed_string()?,
                _ if ch.is_ascii_digit() => self.number(),
                '.' if matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) => self.number(),
                '"' | '\'' => {
                    let (start, line, col) = (self.pos, self.line, self.col);
                    self.string(start, line, col)?;
                }
                _ => self.op()?,
            }
        }

        if let Some(&(delimiter, line)) = self.open.first() {
            return Err(TokError::UnclosedDelimiter { delimiter, line });
        }
        if self.line_has_tokens {
            let (start, line, col) = (self.pos, self.line, self.col);
            self.push(TokKind::Newline, start, line, col);
            self.line_has_tokens = false;
        }
        let (start, line, col) = (self.pos, self.line, self.col);
        self.push(TokKind::EndMarker, start, line, col);
        Ok(self.tokens)
    }

    fn newline(&mut self) {
        if !self.open.is_empty() {
            // Implicit line join inside an open delimiter.
            self.bump();
            return;
        }
        if self.line_has_tokens {
            let (start, line, col) = (self.pos, self.line, self.col);
            self.bump();
            self.push(TokKind::Newline, start, line, col);
            self.line_has_tokens = false;
        } else {
            self.bump();
        }
    }

    fn skip_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr(b'\n', rest) {
            Some(offset) => {
                let skipped = &self.source[self.pos..self.pos + offset];
                self.col += skipped.chars().count();
                self.pos += offset;
            }
            None => {
                let skipped = &self.source[self.pos..];
                self.col += skipped.chars().count();
                self.pos = self.source.len();
            }
        }
    }

    fn name_or_prefixed_string(&mut self) -> Result<(), TokError> {
        let (start, line, col) = (self.pos, self.line, self.col);
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.pos];
        if matches!(self.peek(), Some('"') | Some('\'')) && is_string_prefix(text) {
            return self.string(start, line, col);
        }
        self.push(TokKind::Name, start, line, col);
        Ok(())
    }

    fn number(&mut self) {
        let (start, line, col) = (self.pos, self.line, self.col);
        self.bump();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                self.bump();
            } else if (c == '+' || c == '-')
                && matches!(self.source.as_bytes().get(self.pos - 1), Some(b'e') | Some(b'E'))
                && matches!(self.peek_at(1), Some(d) if d.is_ascii_digit())
            {
                // Exponent sign, e.g. `1e-5`.
                self.bump();
            } else {
                break;
            }
        }
        self.push(TokKind::Number, start, line, col);
    }

    /// Lex a string literal. `start` points at the prefix (if any was
    /// already consumed) or the opening quote; the cursor is at the quote.
    fn string(&mut self, start: usize, line: usize, col: usize) -> Result<(), TokError> {
        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(TokError::UnrecognizedCharacter {
                    character: self.peek().unwrap_or('\0'),
                    line,
                })
            }
        };
        self.bump();
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
        }
        loop {
            match self.peek() {
                None => return Err(TokError::UnterminatedString { line }),
                Some('\\') => {
                    self.bump();
                    if self.peek().is_some() {
                        self.bump();
                    }
                }
                Some('\n') if !triple => return Err(TokError::UnterminatedString { line }),
                Some(c) if c == quote => {
                    self.bump();
                    if !triple {
                        break;
                    }
                    if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                        self.bump();
                        self.bump();
                        break;
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        self.push(TokKind::String, start, line, col);
        Ok(())
    }

    fn op(&mut self) -> Result<(), TokError> {
        let (start, line, col) = (self.pos, self.line, self.col);
        let rest = &self.source[self.pos..];
        for op in OPS3.iter().chain(OPS2.iter()) {
            if rest.starts_with(op) {
                for _ in 0..op.len() {
                    self.bump();
                }
                self.push(TokKind::Op, start, line, col);
                return Ok(());
            }
        }
        let ch = match self.peek() {
            Some(c) => c,
            None => return Ok(()),
        };
        if !OPS1.contains(ch) {
            return Err(TokError::UnrecognizedCharacter { character: ch, line });
        }
        match ch {
            '(' | '[' | '{' => self.open.push((ch, line)),
            ')' | ']' | '}' => match self.open.pop() {
                Some((open, _)) if delimiters_match(open, ch) => {}
                _ => return Err(TokError::UnmatchedClosing { delimiter: ch, line }),
            },
            _ => {}
        }
        self.bump();
        self.push(TokKind::Op, start, line, col);
        Ok(())
    }
}

fn delimiters_match(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

fn is_string_prefix(text: &str) -> bool {
    let len = text.chars().count();
    (1..=2).contains(&len)
        && text
            .chars()
            .all(|c| matches!(c.to_ascii_lowercase(), 'r' | 'b' | 'u' | 'f' | 't'))
}

// ============================================================================
// Tests
// ============================================================================
