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

//! Property-based tests for the tokenization pipeline.
//!
//! These tests verify invariants that should hold for all inputs, using
//! proptest for random input generation.

use proptest::prelude::*;

use minilex::lexer::{classify, scan, tokenize, tokenize_line, RuleRegistry};
use minilex::TokenCategory;

proptest! {
    /// Property: one token per lexeme, for any single line.
    #[test]
    fn prop_token_count_equals_lexeme_count(line in "[ -~]{0,120}") {
        let registry = RuleRegistry::shared();
        let trimmed = line.trim();
        let lexemes = scan(trimmed, registry);
        let tokens = tokenize_line(trimmed, 1, registry);
        prop_assert_eq!(tokens.len(), lexemes.len());
    }

    /// Property: tokenization is deterministic.
    #[test]
    fn prop_tokenize_deterministic(source in "[ -~\\n]{0,300}") {
        let registry = RuleRegistry::shared();
        let first = tokenize(&source, registry);
        let second = tokenize(&source, registry);
        prop_assert_eq!(first, second);
    }

    /// Property: classification is idempotent and pure.
    #[test]
    fn prop_classify_idempotent(lexeme in "[ -~]{1,40}", line in 1usize..10_000) {
        let registry = RuleRegistry::shared();
        let first = classify(&lexeme, line, registry);
        let second = classify(&lexeme, line, registry);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.lexeme.as_str(), lexeme.as_str());
        prop_assert_eq!(first.line, line);
    }

    /// Property: a lexeme containing whitespace can only come from a quoted
    /// construct (string capture or the consume-to-end-of-line recovery).
    #[test]
    fn prop_whitespace_only_inside_quoted_lexemes(line in "[ -~]{0,120}") {
        let lexemes = scan(line.trim(), RuleRegistry::shared());
        for lexeme in lexemes {
            if lexeme.contains(char::is_whitespace) {
                prop_assert!(
                    lexeme.starts_with('"') || lexeme.starts_with('\''),
                    "unexpected whitespace in lexeme {:?}", lexeme
                );
            }
        }
    }

    /// Property: no lexeme is ever empty.
    #[test]
    fn prop_no_empty_lexemes(line in "[ -~]{0,120}") {
        let lexemes = scan(line.trim(), RuleRegistry::shared());
        prop_assert!(lexemes.iter().all(|l| !l.is_empty()));
    }

    /// Property: line numbers in the token stream match the physical line
    /// the lexeme came from, and never decrease.
    #[test]
    fn prop_line_numbers_ascend(source in "[a-z0-9 ;=\\n]{0,200}") {
        let tokens = tokenize(&source, RuleRegistry::shared());
        let line_count = source.lines().count();
        let mut previous = 1;
        for token in tokens {
            prop_assert!(token.line >= previous);
            prop_assert!(token.line >= 1 && token.line <= line_count.max(1));
            previous = token.line;
        }
    }

    /// Property: every keyword always classifies as KEYWORD, never as an
    /// identifier, whatever line number it is given.
    #[test]
    fn prop_keywords_always_win(index in 0usize..12, line in 1usize..1000) {
        let keyword = minilex::lexer::registry::KEYWORDS[index];
        let token = classify(keyword, line, RuleRegistry::shared());
        prop_assert_eq!(token.category, TokenCategory::Keyword);
    }

    /// Property: digit strings classify as INT_CONST, digit.digit strings
    /// as FLOAT_CONST.
    #[test]
    fn prop_numeric_shapes(int_part in "[0-9]{1,9}", frac_part in "[0-9]{1,9}") {
        let registry = RuleRegistry::shared();
        let int_token = classify(&int_part, 1, registry);
        prop_assert_eq!(int_token.category, TokenCategory::IntConst);

        let float_lexeme = format!("{}.{}", int_part, frac_part);
        let float_token = classify(&float_lexeme, 1, registry);
        prop_assert_eq!(float_token.category, TokenCategory::FloatConst);
    }

    /// Property: tokenizing a multi-line source equals tokenizing each line
    /// separately with its own line number.
    #[test]
    fn prop_tokenize_is_per_line(source in "[a-z0-9 ;=+\"'\\n]{0,200}") {
        let registry = RuleRegistry::shared();
        let whole = tokenize(&source, registry);

        let mut per_line = Vec::new();
        for (index, raw_line) in source.lines().enumerate() {
            per_line.extend(tokenize_line(raw_line.trim(), index + 1, registry));
        }

        prop_assert_eq!(whole, per_line);
    }

    /// Property: classification is total; every lexeme the scanner emits
    /// gets one of the ten categories, worst case ERROR.
    #[test]
    fn prop_classification_total(line in "[ -~]{0,120}") {
        let registry = RuleRegistry::shared();
        for lexeme in scan(line.trim(), registry) {
            let token = classify(&lexeme, 1, registry);
            prop_assert!(!token.category.name().is_empty());
        }
    }
}
