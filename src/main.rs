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

//! MiniLex CLI
//!
//! Reads a source file of the toy language and writes a tab-separated token
//! report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use minilex::{analyze_file, render_report, write_report_file, TokenCategory};

/// MiniLex - A lexical analyzer for a minimal C-like toy language
#[derive(Parser, Debug)]
#[command(name = "minilex")]
#[command(version)]
#[command(about = "Tokenizes toy-language source into a tab-separated token report")]
#[command(long_about = r#"
MiniLex scans a source file line by line, splits each line into raw lexemes
and classifies every lexeme into a token category (keyword, operator,
punctuation, constants, identifier, or ERROR for anything unrecognized).

The report is tab-separated with one row per token:
  Token   Lexeme  Line No
  KEYWORD int     1

Example usage:
  minilex code.txt
  minilex code.txt -o output.txt
  minilex code.txt -o output.txt --verbose
"#)]
struct Cli {
    /// Source file to tokenize
    source_file: PathBuf,

    /// Output file for the report (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        println!("MiniLex v{}", minilex::VERSION);
        println!("Source: {}", cli.source_file.display());
        match &cli.output {
            Some(path) => println!("Output: {}", path.display()),
            None => println!("Output: <stdout>"),
        }
        println!();
    }

    let tokens = match analyze_file(&cli.source_file) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    if cli.verbose {
        let errors = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::Error)
            .count();
        println!("Produced {} tokens ({} ERROR)", tokens.len(), errors);
    }

    match &cli.output {
        Some(path) => {
            if let Err(e) = write_report_file(&tokens, path) {
                eprintln!("Error: {}", e);
                return ExitCode::from(1);
            }
            if cli.verbose {
                println!("Done!");
            } else {
                println!(
                    "Tokenized {} -> {}",
                    cli.source_file.display(),
                    path.display()
                );
            }
        }
        None => {
            print!("{}", render_report(&tokens));
        }
    }

    ExitCode::SUCCESS
}
