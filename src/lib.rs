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

//! MiniLex Library
//!
//! This library tokenizes source code of a minimal C-like toy language into
//! a stream of classified tokens and renders them as a tab-separated report.
//!
//! # Modules
//!
//! - [`error`] - Error types for the tool's I/O boundary
//! - [`lexer`] - Scanning lines into lexemes and classifying them
//! - [`report`] - Tab-separated token report writing
//!
//! # Example
//!
//! ```
//! let source = "int x;\nx = 5;";
//! let tokens = minilex::analyze(source);
//!
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[0].category, minilex::TokenCategory::Keyword);
//! assert_eq!(tokens[0].lexeme, "int");
//! ```

pub mod error;
pub mod lexer;
pub mod report;

// Re-export commonly used types
pub use error::{LexToolError, Result};
pub use lexer::{classify, scan, tokenize, RuleRegistry, Token, TokenCategory};
pub use report::{render_report, write_report, write_report_file};

/// The version of the MiniLex tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool.
pub const NAME: &str = "MiniLex";

/// Tokenize source text with the default rule registry.
///
/// This is the main entry point for library users. Every line yields one
/// token per lexeme, worst case ERROR; the function itself cannot fail.
pub fn analyze(source: &str) -> Vec<Token> {
    lexer::tokenize(source, RuleRegistry::shared())
}

/// Read a source file and tokenize it with the default rule registry.
pub fn analyze_file(path: &std::path::Path) -> Result<Vec<Token>> {
    let source = std::fs::read_to_string(path).map_err(|source| LexToolError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(analyze(&source))
}
