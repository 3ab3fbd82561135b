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

//! Format command - canonical re-serialization

use super::{read_file, resolve_file_delimiter, write_output};
use crate::error::CliError;
use tracing::debug;
use vscsv_core::{parse, serialize, Delimiter};

/// Rewrite a delimited file in canonical form.
///
/// Canonical form quotes exactly the fields that need it, joins rows
/// with `\n` and keeps every row's cells. `to` converts to another
/// delimiter on the way out.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, a delimiter name is invalid,
/// the output cannot be written, or in check mode when the file differs
/// from its canonical form.
///
/// # Examples
///
/// ```no_run
/// use vscsv_cli::commands::format;
///
/// # fn main() -> Result<(), vscsv_cli::CliError> {
/// // Canonicalize to stdout
/// format("people.csv", None, false, None, None)?;
///
/// // Convert a CSV file to TSV
/// format("people.csv", Some("people.tsv"), false, None, Some("tab"))?;
///
/// // Fail if the file is not canonical
/// format("people.csv", None, true, None, None)?;
/// # Ok(())
/// # }
/// ```
pub fn format(
    file: &str,
    output: Option<&str>,
    check: bool,
    delimiter: Option<&str>,
    to: Option<&str>,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, _) = resolve_file_delimiter(file, &content, delimiter)?;
    let target = match to {
        Some(name) => Delimiter::from_name(name)?,
        None => delimiter,
    };

    let data = parse(&content, delimiter);
    let canonical = serialize(data.rows(), target);
    debug!(file, rows = data.len(), from = %delimiter, to = %target, "formatted");

    if check {
        if canonical != content.replace("\r\n", "\n") {
            return Err(CliError::NotCanonical);
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&canonical, output)
    }
}
