// MiniLex - A lexical analyzer for a minimal C-like toy language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Character-level scanner: splits one line of source text into raw lexemes.
//!
//! The scanner makes a single left-to-right pass over the line with an
//! explicit cursor and one accumulation buffer. It never fails: malformed
//! quoted literals are emitted verbatim for the classifier to reject, and
//! nothing but whitespace is ever dropped.

use super::registry::RuleRegistry;

/// The scanner state for splitting one line into lexemes.
///
/// The caller is expected to strip line endings and trim leading/trailing
/// whitespace before scanning; the scanner itself does not trim.
pub struct Scanner<'reg> {
    /// The line's characters.
    chars: Vec<char>,
    /// Current position in `chars`.
    cursor: usize,
    /// The lexeme currently being accumulated.
    buffer: String,
    /// Completed lexemes, in source order.
    lexemes: Vec<String>,
    /// The fixed operator/punctuation sets.
    registry: &'reg RuleRegistry,
}

impl<'reg> Scanner<'reg> {
    /// Create a scanner for the given line.
    pub fn new(line: &str, registry: &'reg RuleRegistry) -> Self {
        Self {
            chars: line.chars().collect(),
            cursor: 0,
            buffer: String::new(),
            lexemes: Vec::new(),
            registry,
        }
    }

    /// Run the scanner to completion and return the lexemes.
    pub fn run(mut self) -> Vec<String> {
        while let Some(&c) = self.chars.get(self.cursor) {
            if c.is_whitespace() {
                self.flush();
                self.cursor += 1;
                continue;
            }

            if self.registry.is_operator_char(c) || self.registry.is_punctuation_char(c) {
                self.flush();
                self.lexemes.push(c.to_string());
                self.cursor += 1;
                continue;
            }

            if c == '"' {
                self.flush();
                self.take_string_literal();
                continue;
            }

            if c == '\'' {
                self.flush();
                self.take_char_literal();
                continue;
            }

            self.buffer.push(c);
            self.cursor += 1;
        }

        self.flush();
        self.lexemes
    }

    /// Emit the accumulation buffer as a lexeme, if non-empty.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.lexemes.push(std::mem::take(&mut self.buffer));
        }
    }

    /// Emit `chars[start..end]` as one lexeme.
    fn emit_range(&mut self, start: usize, end: usize) {
        self.lexemes.push(self.chars[start..end].iter().collect());
    }

    /// Capture a quoted string literal, delimiters included.
    ///
    /// If no closing quote exists on the line, the remainder of the line is
    /// emitted as a single unterminated lexeme and the scan of this line
    /// ends.
    fn take_string_literal(&mut self) {
        let start = self.cursor;
        let close = self.chars[start + 1..]
            .iter()
            .position(|&c| c == '"')
            .map(|offset| start + 1 + offset);

        match close {
            Some(j) => {
                self.emit_range(start, j + 1);
                self.cursor = j + 1;
            }
            None => {
                self.emit_range(start, self.chars.len());
                self.cursor = self.chars.len();
            }
        }
    }

    /// Capture a character literal of the exact shape `'x'`.
    ///
    /// Anything else (empty, multi-character, unterminated) is emitted as
    /// the remainder of the line in one lexeme, mirroring the unterminated
    /// string policy. The deviation is not corrected here; the classifier
    /// routes it to ERROR.
    fn take_char_literal(&mut self) {
        let start = self.cursor;
        if start + 2 < self.chars.len() && self.chars[start + 2] == '\'' {
            self.emit_range(start, start + 3);
            self.cursor += 3;
        } else {
            self.emit_range(start, self.chars.len());
            self.cursor = self.chars.len();
        }
    }
}

/// Split one line of source text into raw lexemes.
pub fn scan(line: &str, registry: &RuleRegistry) -> Vec<String> {
    Scanner::new(line, registry).run()
}
