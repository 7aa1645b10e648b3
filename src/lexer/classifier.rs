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

//! Lexeme classification: one raw lexeme in, one token out.
//!
//! Classification is a pure priority cascade with no state beyond the rule
//! registry: exact-set lookups first (keyword, operator, punctuation), then
//! the ordered content rules, then the ERROR fallback. Every lexeme yields
//! exactly one token; there is no failure path.

use super::registry::RuleRegistry;
use super::tokens::{Token, TokenCategory};

/// Classify a single lexeme from the given line.
///
/// Priority order, first match wins:
/// 1. keyword set
/// 2. operator set
/// 3. punctuation set
/// 4. content rules, in registry order
/// 5. ERROR, with the lexeme preserved verbatim
pub fn classify(lexeme: &str, line: usize, registry: &RuleRegistry) -> Token {
    if registry.is_keyword(lexeme) {
        return Token::new(TokenCategory::Keyword, lexeme, line);
    }

    if registry.is_operator(lexeme) {
        return Token::new(TokenCategory::Operator, lexeme, line);
    }

    if registry.is_punctuation(lexeme) {
        return Token::new(TokenCategory::Punctuation, lexeme, line);
    }

    for rule in registry.content_rules() {
        if rule.matches(lexeme) {
            return Token::new(rule.category(), lexeme, line);
        }
    }

    Token::new(TokenCategory::Error, lexeme, line)
}
