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

//! Lexer module for the MiniLex analyzer.
//!
//! This module turns source text into a stream of classified tokens.
//! It handles:
//! - Scanning lines into raw lexemes (whitespace-delimited, with single
//!   character operators/punctuation and verbatim quoted literals)
//! - Classifying lexemes through the rule registry's priority cascade
//! - Driving the per-line pipeline over a whole source string
//!
//! The pipeline is synchronous and side-effect free: `scan` and `classify`
//! are pure over their inputs and the read-only [`RuleRegistry`], so the
//! registry can be shared across threads without locking.

pub mod classifier;
pub mod registry;
pub mod scanner;
pub mod tokens;

pub use classifier::classify;
pub use registry::RuleRegistry;
pub use scanner::scan;
pub use tokens::{Token, TokenCategory};

/// Tokenize one already-trimmed line of source text.
///
/// Produces exactly one token per lexeme the scanner emits; an empty or
/// whitespace-only line produces no tokens.
pub fn tokenize_line(line: &str, line_no: usize, registry: &RuleRegistry) -> Vec<Token> {
    scanner::scan(line, registry)
        .into_iter()
        .map(|lexeme| classifier::classify(&lexeme, line_no, registry))
        .collect()
}

/// Tokenize a whole source string, numbering lines from 1.
///
/// Each physical line is trimmed before scanning, per the scanner's
/// contract. Malformed input never aborts the pipeline; unrecognized
/// lexemes come back as ERROR tokens and later lines are still processed.
pub fn tokenize(source: &str, registry: &RuleRegistry) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        tokens.extend(tokenize_line(raw_line.trim(), index + 1, registry));
    }

    tokens
}
