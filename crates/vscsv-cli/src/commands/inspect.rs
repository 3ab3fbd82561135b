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

//! Inspect command - table summary or positioned cell records

use super::{read_file, resolve_file_delimiter};
use crate::error::CliError;
use colored::Colorize;
use vscsv_core::{parse, Data};

/// Columns listed in the text summary before truncating.
const MAX_LISTED_COLUMNS: usize = 50;

/// Show how a file parses.
///
/// The text form summarizes the table: delimiter, size and one line per
/// header column with its fill count. With `json` every row is printed as
/// `{value, line, column, columnEnd}` records.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the delimiter is invalid.
///
/// # Examples
///
/// ```no_run
/// use vscsv_cli::commands::inspect;
///
/// # fn main() -> Result<(), vscsv_cli::CliError> {
/// inspect("people.csv", None, false)?;
/// inspect("people.csv", None, true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, delimiter: Option<&str>, json: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, source) = resolve_file_delimiter(file, &content, delimiter)?;
    let data = parse(&content, delimiter);

    if json {
        println!("{}", serde_json::to_string_pretty(data.rows())?);
        return Ok(());
    }

    println!("{}", file.bold());
    println!("  {} {} ({})", "Delimiter:".cyan(), delimiter, source.as_str());
    println!("  {} {}", "Rows:".cyan(), data.len());
    println!("  {} {}", "Columns:".cyan(), data.column_count());
    println!("  {} {}", "Ragged rows:".cyan(), data.ragged_rows().len());

    let fill = column_fill(&data);
    if !fill.is_empty() {
        println!("  {}", "Columns:".cyan());
    }
    for (index, (header, filled)) in fill.iter().take(MAX_LISTED_COLUMNS).enumerate() {
        let name = if header.is_empty() {
            "(blank)".dimmed().to_string()
        } else {
            header.yellow().to_string()
        };
        println!("    {:>3}. {} - {} non-empty", index + 1, name, filled);
    }
    if fill.len() > MAX_LISTED_COLUMNS {
        println!("    ... and {} more", fill.len() - MAX_LISTED_COLUMNS);
    }
    Ok(())
}

/// Header name and the number of non-empty data cells, per column.
fn column_fill(data: &Data) -> Vec<(String, usize)> {
    data.headers()
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let filled = data
                .get_column(index as isize)
                .into_iter()
                .skip(1)
                .flatten()
                .filter(|cell| !cell.value.is_empty())
                .count();
            (header.value.clone(), filled)
        })
        .collect()
}
