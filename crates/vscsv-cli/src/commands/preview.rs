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

//! Preview command - emit the message a tabular preview would receive

use super::{read_file, resolve_file_delimiter};
use crate::error::CliError;
use vscsv_analysis::PreviewMessage;
use vscsv_core::parse;

/// Print the preview `update` message for a file as JSON.
///
/// `records` sends positioned cell records instead of plain values.
/// `filter` keeps only the header and rows containing the query,
/// case-insensitively.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the delimiter is invalid,
/// or `records` and `filter` are combined.
///
/// # Examples
///
/// ```no_run
/// use vscsv_cli::commands::preview;
///
/// # fn main() -> Result<(), vscsv_cli::CliError> {
/// preview("people.csv", None, false, Some("london"))?;
/// # Ok(())
/// # }
/// ```
pub fn preview(
    file: &str,
    delimiter: Option<&str>,
    records: bool,
    filter: Option<&str>,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, _) = resolve_file_delimiter(file, &content, delimiter)?;
    let data = parse(&content, delimiter);

    let message = match (records, filter) {
        (true, Some(_)) => {
            return Err(CliError::invalid_input(
                "--records cannot be combined with --filter",
            ))
        }
        (true, None) => PreviewMessage::records(&data),
        (false, Some(query)) => PreviewMessage::filtered(&data, query),
        (false, None) => PreviewMessage::values(&data),
    };

    println!("{}", message.to_json()?);
    Ok(())
}
