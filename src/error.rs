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

//! Error types for the MiniLex tool.
//!
//! The tokenization pipeline itself never fails: malformed input is data,
//! reported as ERROR tokens, and never aborts processing. The only failure
//! modes live at the I/O boundary around the pipeline, when reading the
//! source file or writing the token report.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error at the tool's I/O boundary.
#[derive(Debug, Error)]
pub enum LexToolError {
    /// The source file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadSource {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The token report could not be written.
    #[error("cannot write {path}: {source}")]
    WriteReport {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, LexToolError>;
