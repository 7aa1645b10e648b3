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

//! Tab-separated token report writing.
//!
//! The report format is one header row followed by one row per token:
//!
//! ```text
//! Token   Lexeme  Line No
//! KEYWORD int     1
//! ```
//!
//! The core pipeline has no opinion on the destination; anything that
//! implements [`io::Write`] works.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{LexToolError, Result};
use crate::lexer::Token;

/// The report's header row (without trailing newline).
pub const REPORT_HEADER: &str = "Token\tLexeme\tLine No";

/// Write the token report to any writer.
pub fn write_report<W: Write>(tokens: &[Token], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;

    for token in tokens {
        writeln!(out, "{}\t{}\t{}", token.category.name(), token.lexeme, token.line)?;
    }

    Ok(())
}

/// Render the token report into a string.
pub fn render_report(tokens: &[Token]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    write_report(tokens, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Write the token report to a file, creating or truncating it.
pub fn write_report_file(tokens: &[Token], path: &Path) -> Result<()> {
    let wrap = |source: io::Error| LexToolError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_report(tokens, &mut writer).map_err(wrap)?;
    writer.flush().map_err(wrap)
}
