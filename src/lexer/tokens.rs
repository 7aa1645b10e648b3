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

//! Token definitions for the MiniLex analyzer.

/// The category assigned to a lexeme by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Reserved word (`int`, `if`, `while`, ...).
    Keyword,
    /// Single-character arithmetic or assignment operator.
    Operator,
    /// Single-character punctuation (`,`, `;`, parentheses, braces).
    Punctuation,
    /// Floating-point constant (`123.45`).
    FloatConst,
    /// Integer constant (`123`).
    IntConst,
    /// Character constant (`'a'`, delimiters included).
    CharConst,
    /// String constant (`"hello"`, delimiters included).
    StringConst,
    /// Block comment (`/* ... */`).
    Comment,
    /// Identifier (letter followed by letters, digits, underscores).
    Identifier,
    /// Anything no rule recognizes, including unterminated literals.
    Error,
}

impl TokenCategory {
    /// Get the report name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Punctuation => "PUNCTUATION",
            TokenCategory::FloatConst => "FLOAT_CONST",
            TokenCategory::IntConst => "INT_CONST",
            TokenCategory::CharConst => "CHAR_CONST",
            TokenCategory::StringConst => "STRING_CONST",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Error => "ERROR",
        }
    }

    /// Check if this category is a literal constant.
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            TokenCategory::FloatConst
                | TokenCategory::IntConst
                | TokenCategory::CharConst
                | TokenCategory::StringConst
        )
    }

    /// Check if this category marks unrecognized input.
    pub fn is_error(&self) -> bool {
        matches!(self, TokenCategory::Error)
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified lexeme with its originating line number.
///
/// Tokens are immutable once produced: the classifier creates one token per
/// lexeme and never revisits it. The line number is the only ordering key
/// carried by the token itself; within-line order is preserved by sequence
/// position in the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category assigned by the classifier.
    pub category: TokenCategory,
    /// The raw lexeme text, verbatim (delimiters included for literals).
    pub lexeme: String,
    /// The 1-indexed source line the lexeme came from.
    pub line: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(category: TokenCategory, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at line {}", self.category, self.lexeme, self.line)
    }
}
