// vscsv - Delimiter-Separated Value Tooling
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validate command - structural check of a delimited file

use super::{read_file, resolve_file_delimiter};
use crate::error::CliError;
use colored::Colorize;
use vscsv_core::{parse_with_limits, Data, Limits, RaggedRow};

/// Rows printed before the ragged-row report is cut short.
const MAX_REPORTED_ROWS: usize = 10;

/// Validate a delimited file.
///
/// Parses under the default [`Limits`] and reports rows whose width differs
/// from the header. A trailing empty line is not counted as a row.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, a limit is exceeded, or in
/// strict mode when any ragged row is found.
///
/// # Examples
///
/// ```no_run
/// use vscsv_cli::commands::validate;
///
/// # fn main() -> Result<(), vscsv_cli::CliError> {
/// validate("people.csv", None, false)?;
/// validate("people.tsv", Some("tab"), true)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str, delimiter: Option<&str>, strict: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, source) = resolve_file_delimiter(file, &content, delimiter)?;

    let data = match parse_with_limits(&content, delimiter, &Limits::default()) {
        Ok(data) => data,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e.into());
        }
    };

    let ragged = significant_ragged_rows(&data);
    let mark = if ragged.is_empty() {
        "✓".green().bold()
    } else if strict {
        "✗".red().bold()
    } else {
        "!".yellow().bold()
    };

    println!("{} {}", mark, file);
    println!("  Delimiter: {} ({})", delimiter, source.as_str());
    println!("  Rows: {}", data.len());
    println!("  Columns: {}", data.column_count());
    println!("  Ragged rows: {}", ragged.len());
    for r in ragged.iter().take(MAX_REPORTED_ROWS) {
        println!(
            "    line {}: expected {} columns, found {}",
            r.row + 1,
            r.expected,
            r.actual
        );
    }
    if ragged.len() > MAX_REPORTED_ROWS {
        println!("    ... and {} more", ragged.len() - MAX_REPORTED_ROWS);
    }
    if strict {
        println!("  Mode: strict (ragged rows are errors)");
    }

    if strict && !ragged.is_empty() {
        return Err(CliError::RaggedRows {
            count: ragged.len(),
        });
    }
    Ok(())
}

/// Ragged rows, ignoring the blank row a trailing newline produces.
///
/// Only a row with no source text counts as that blank row; a final `""`
/// line is a real empty field and stays ragged.
fn significant_ragged_rows(data: &Data) -> Vec<RaggedRow> {
    let last = data.len().saturating_sub(1);
    let trailing_blank = data
        .get_row(-1)
        .is_some_and(|row| row.len() == 1 && row[0].span_len() == 0);
    data.ragged_rows()
        .into_iter()
        .filter(|r| !(trailing_blank && r.row == last))
        .collect()
}
