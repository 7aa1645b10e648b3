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

//! The immutable rule registry consulted by the scanner and classifier.
//!
//! The registry holds the fixed keyword, operator and punctuation sets plus
//! the ordered list of content rules used for pattern-based classification.
//! It is constructed once and shared by reference; nothing mutates it after
//! construction, so it can be used from any number of threads without
//! synchronization.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenCategory;

/// Reserved words of the language.
pub const KEYWORDS: &[&str] = &[
    "const", "char", "int", "string", "float", "double", "bool", "if", "else", "for", "while",
    "do",
];

/// Single-character operators.
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '=', '%'];

/// Single-character punctuation.
pub const PUNCTUATION: &[char] = &[',', ';', '(', ')', '{', '}'];

/// The identifier shape: a letter followed by letters, digits or underscores.
pub const IDENTIFIER_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9_]*$";

const FLOAT_PATTERN: &str = r"^[0-9]+\.[0-9]+$";
const INT_PATTERN: &str = "^[0-9]+$";
const CHAR_PATTERN: &str = "^'[^']'$";
const STRING_PATTERN: &str = "^\"[^\"\n]*\"$";
const COMMENT_PATTERN: &str = r"/\*.*?\*/";

/// A single pattern-based classification rule.
///
/// A rule matches when its pattern matches at the start of the lexeme.
/// All rules except COMMENT are `^...$` anchored and therefore full-lexeme
/// matches; the COMMENT pattern carries no anchors, so a lexeme that merely
/// begins with a `/*...*/` block still matches it. That asymmetry comes from
/// the original rule table and is deliberately preserved.
#[derive(Debug, Clone)]
pub struct ContentRule {
    category: TokenCategory,
    pattern: Regex,
}

impl ContentRule {
    fn new(category: TokenCategory, pattern: &str) -> Self {
        Self {
            category,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    /// The category this rule assigns on a match.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// The source text of this rule's pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Test the rule against a lexeme (match anchored at the start).
    pub fn matches(&self, lexeme: &str) -> bool {
        self.pattern
            .find(lexeme)
            .is_some_and(|m| m.start() == 0)
    }
}

/// The read-only classification rule set.
///
/// Invariants:
/// - the keyword, operator and punctuation sets are pairwise disjoint;
/// - the content rules are ordered, and order is significant: the numeric
///   constant rules precede the identifier rule so purely numeric lexemes
///   are never classified as identifiers.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    keywords: HashSet<&'static str>,
    operators: HashSet<char>,
    punctuation: HashSet<char>,
    identifier_shape: Regex,
    content_rules: Vec<ContentRule>,
}

lazy_static! {
    static ref DEFAULT_REGISTRY: RuleRegistry = RuleRegistry::new();
}

impl RuleRegistry {
    /// Build the registry with the language's fixed rule set.
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            operators: OPERATORS.iter().copied().collect(),
            punctuation: PUNCTUATION.iter().copied().collect(),
            identifier_shape: Regex::new(IDENTIFIER_PATTERN).unwrap(),
            content_rules: vec![
                ContentRule::new(TokenCategory::FloatConst, FLOAT_PATTERN),
                ContentRule::new(TokenCategory::IntConst, INT_PATTERN),
                ContentRule::new(TokenCategory::CharConst, CHAR_PATTERN),
                ContentRule::new(TokenCategory::StringConst, STRING_PATTERN),
                ContentRule::new(TokenCategory::Comment, COMMENT_PATTERN),
                ContentRule::new(TokenCategory::Identifier, IDENTIFIER_PATTERN),
            ],
        }
    }

    /// Get a reference to the process-wide default registry.
    pub fn shared() -> &'static RuleRegistry {
        &DEFAULT_REGISTRY
    }

    /// Check if a lexeme is a reserved word.
    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    /// Check if a character is an operator.
    pub fn is_operator_char(&self, c: char) -> bool {
        self.operators.contains(&c)
    }

    /// Check if a character is punctuation.
    pub fn is_punctuation_char(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Check if a lexeme is exactly one operator character.
    pub fn is_operator(&self, lexeme: &str) -> bool {
        Self::single_char(lexeme).is_some_and(|c| self.is_operator_char(c))
    }

    /// Check if a lexeme is exactly one punctuation character.
    pub fn is_punctuation(&self, lexeme: &str) -> bool {
        Self::single_char(lexeme).is_some_and(|c| self.is_punctuation_char(c))
    }

    /// The identifier shape used as the terminal content rule.
    pub fn identifier_shape(&self) -> &Regex {
        &self.identifier_shape
    }

    /// The ordered content rules, evaluated top to bottom, first match wins.
    pub fn content_rules(&self) -> &[ContentRule] {
        &self.content_rules
    }

    fn single_char(lexeme: &str) -> Option<char> {
        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
