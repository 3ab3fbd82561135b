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

//! Detect command - report the delimiter a file would be parsed with

use super::{read_file, resolve_file_delimiter};
use crate::error::CliError;

/// Print the delimiter for a file and where it came from.
///
/// Resolution follows the file extension, then sniffing the content, then
/// falls back to `,`. The output is `<delimiter> (<source>)`, with tab
/// written as `\t`.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read.
pub fn detect(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, source) = resolve_file_delimiter(file, &content, None)?;
    println!("{} ({})", delimiter, source.as_str());
    Ok(())
}
