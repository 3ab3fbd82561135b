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

//! Lint command - structural diagnostics for delimited files

use super::{read_file, resolve_file_delimiter};
use crate::error::CliError;
use colored::Colorize;
use std::path::PathBuf;
use vscsv_core::parse;
use vscsv_lint::{LintConfig, LintContext, LintRunner, Severity};

/// Lint a delimited file.
///
/// Runs every default rule, including the ones that need the source text
/// such as unterminated quote detection. Output is colored text, or JSON
/// with `format = "json"`.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, if any error diagnostic is
/// found, or if `warn_error` is set and any warning is found.
///
/// # Examples
///
/// ```no_run
/// use vscsv_cli::commands::lint;
///
/// # fn main() -> Result<(), vscsv_cli::CliError> {
/// lint("people.csv", None, "text", false)?;
/// lint("people.csv", None, "json", true)?;
/// # Ok(())
/// # }
/// ```
pub fn lint(
    file: &str,
    delimiter: Option<&str>,
    format: &str,
    warn_error: bool,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (delimiter, _) = resolve_file_delimiter(file, &content, delimiter)?;
    let data = parse(&content, delimiter);

    let context = LintContext::with_file(PathBuf::from(file), content.as_str());
    let diagnostics = LintRunner::new(LintConfig::default()).run_with_context(&data, &context);

    match format {
        "json" => {
            let json = serde_json::json!({
                "file": file,
                "diagnostics": diagnostics.iter().map(|d| {
                    serde_json::json!({
                        "severity": d.severity().to_string(),
                        "rule": d.rule_id(),
                        "message": d.message(),
                        "line": d.line().map(|l| l + 1),
                        "columns": d.columns().map(|(s, e)| [s, e]),
                        "suggestion": d.suggestion()
                    })
                }).collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        "text" => {
            if diagnostics.is_empty() {
                println!("{} {} - no issues found", "✓".green().bold(), file);
            } else {
                println!(
                    "{} {} - {} issue(s) found:",
                    "!".yellow().bold(),
                    file,
                    diagnostics.len()
                );
                for diag in &diagnostics {
                    let severity_str = match diag.severity() {
                        Severity::Error => "error".red(),
                        Severity::Warning => "warning".yellow(),
                        Severity::Hint => "hint".blue(),
                    };

                    match (diag.line(), diag.columns()) {
                        (Some(line), Some((start, _))) => println!(
                            "  {}:{}:{}: {}: {}",
                            file,
                            line + 1,
                            start + 1,
                            severity_str,
                            diag.message()
                        ),
                        (Some(line), None) => println!(
                            "  {}:{}: {}: {}",
                            file,
                            line + 1,
                            severity_str,
                            diag.message()
                        ),
                        _ => println!("  {}: {}: {}", file, severity_str, diag.message()),
                    }

                    if let Some(suggestion) = diag.suggestion() {
                        println!("    {} {}", "suggestion:".cyan(), suggestion);
                    }
                }
            }
        }
        other => {
            return Err(CliError::invalid_input(format!(
                "unknown output format '{}' (expected text or json)",
                other
            )))
        }
    }

    let has_errors = diagnostics.iter().any(|d| d.severity() == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity() == Severity::Warning);

    if has_errors || (warn_error && has_warnings) {
        Err(CliError::LintErrors)
    } else {
        Ok(())
    }
}
