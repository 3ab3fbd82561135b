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

//! Lint rules

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::runner::LintContext;
use std::collections::HashMap;
use vscsv_core::lex::{scan_line, split_lines};
use vscsv_core::{ragged_rows, Data};

/// Configuration for a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    pub enabled: bool,
    /// Whether to report every diagnostic of the rule as an error
    pub error: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            error: false,
        }
    }
}

/// Trait for lint rules
pub trait LintRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str;

    /// Run the rule on a parsed document
    fn check(&self, data: &Data) -> Vec<Diagnostic>;

    /// Run the rule with access to the source text.
    ///
    /// The default implementation calls `check()`. Rules that need to look
    /// at raw lines (quoting, whitespace) override this.
    fn check_with_context(&self, data: &Data, _context: &LintContext) -> Vec<Diagnostic> {
        self.check(data)
    }
}

/// Rule: every row has as many cells as the header
pub struct RaggedRowRule {
    /// Skip the empty row produced by a final line break.
    pub ignore_trailing_blank: bool,
}

impl Default for RaggedRowRule {
    fn default() -> Self {
        Self {
            ignore_trailing_blank: true,
        }
    }
}

impl RaggedRowRule {
    pub const ID: &'static str = "ragged-row";
}

impl LintRule for RaggedRowRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Row has a different number of columns than the header"
    }

    fn check(&self, data: &Data) -> Vec<Diagnostic> {
        let last = data.len().saturating_sub(1);
        ragged_rows(data)
            .into_iter()
            .filter(|ragged| {
                !(self.ignore_trailing_blank && ragged.row == last && is_blank_row(data, last))
            })
            .filter_map(|ragged| {
                let row = data.get_row(ragged.row as isize)?;
                let start = row.first().map_or(0, |c| c.column);
                let end = row.last().map_or(0, |c| c.column_end);
                let suggestion = if ragged.actual < ragged.expected {
                    format!("add {} field(s)", ragged.expected - ragged.actual)
                } else {
                    format!("remove {} field(s)", ragged.actual - ragged.expected)
                };
                Some(
                    Diagnostic::warning(
                        DiagnosticKind::RaggedRow,
                        format!(
                            "Expected {} columns, found {}",
                            ragged.expected, ragged.actual
                        ),
                        Self::ID,
                    )
                    .with_line(ragged.row)
                    .with_columns(start, end)
                    .with_suggestion(suggestion),
                )
            })
            .collect()
    }
}

fn is_blank_row(data: &Data, index: usize) -> bool {
    data.get_row(index as isize)
        .map_or(false, |row| row.len() == 1 && row[0].span_len() == 0)
}

/// Rule: quoted fields are closed on the line they open
///
/// The parser recovers by absorbing the rest of the line, which is rarely
/// what the author meant.
pub struct UnterminatedQuoteRule;

impl UnterminatedQuoteRule {
    pub const ID: &'static str = "unterminated-quote";
}

impl LintRule for UnterminatedQuoteRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Quoted field is not closed before the end of the line"
    }

    fn check(&self, _data: &Data) -> Vec<Diagnostic> {
        // Needs the raw text; see check_with_context.
        vec![]
    }

    fn check_with_context(&self, data: &Data, context: &LintContext) -> Vec<Diagnostic> {
        let delimiter = data.delimiter();
        split_lines(&context.source_text)
            .enumerate()
            .filter_map(|(i, line)| {
                let scan = scan_line(line, delimiter, i);
                if !scan.unterminated {
                    return None;
                }
                let open = scan.cells.last()?;
                Some(
                    Diagnostic::warning(
                        DiagnosticKind::UnterminatedQuote,
                        "Unterminated quoted field",
                        Self::ID,
                    )
                    .with_line(i)
                    .with_columns(open.column, open.column_end)
                    .with_suggestion("add a closing '\"'"),
                )
            })
            .collect()
    }
}

/// Rule: header names are unique
pub struct DuplicateHeaderRule;

impl DuplicateHeaderRule {
    pub const ID: &'static str = "duplicate-header";
}

impl LintRule for DuplicateHeaderRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Header name appears more than once"
    }

    fn check(&self, data: &Data) -> Vec<Diagnostic> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut diagnostics = Vec::new();

        for (index, header) in data.headers().iter().enumerate() {
            if header.value.is_empty() {
                continue;
            }
            match first_seen.get(header.value.as_str()) {
                Some(&first) => diagnostics.push(
                    Diagnostic::hint(
                        DiagnosticKind::DuplicateHeader,
                        format!(
                            "Duplicate header '{}' (first used in column {})",
                            header.value,
                            first + 1
                        ),
                        Self::ID,
                    )
                    .with_line(header.line)
                    .with_columns(header.column, header.column_end),
                ),
                None => {
                    first_seen.insert(&header.value, index);
                }
            }
        }

        diagnostics
    }
}

/// Rule: header names are not blank
pub struct EmptyHeaderRule;

impl EmptyHeaderRule {
    pub const ID: &'static str = "empty-header";
}

impl LintRule for EmptyHeaderRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Header cell is blank"
    }

    fn check(&self, data: &Data) -> Vec<Diagnostic> {
        let headers = data.headers();
        // A lone empty cell is an empty document, not a missing name.
        if headers.len() < 2 {
            return vec![];
        }
        headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.value.trim().is_empty())
            .map(|(index, h)| {
                Diagnostic::hint(
                    DiagnosticKind::EmptyHeader,
                    format!("Column {} has no header name", index + 1),
                    Self::ID,
                )
                .with_line(h.line)
                .with_columns(h.column, h.column_end)
            })
            .collect()
    }
}

/// Get all default rules
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(RaggedRowRule::default()),
        Box::new(UnterminatedQuoteRule),
        Box::new(DuplicateHeaderRule),
        Box::new(EmptyHeaderRule),
    ]
}
