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

//! Structural diagnostics for delimited documents
//!
//! Parsing never rejects a document; this crate reports the problems the
//! parser silently recovered from. Ragged rows, unterminated quotes and
//! header issues each map to a rule that can be disabled or escalated.
//!
//! ## Quick Start
//!
//! ```rust
//! use vscsv_lint::{lint_text, Severity};
//! use vscsv_core::Delimiter;
//!
//! let diagnostics = lint_text("id,name\n1\n2,bob\n", Delimiter::COMMA);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity(), Severity::Warning);
//! assert_eq!(diagnostics[0].message(), "Expected 2 columns, found 1");
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use vscsv_lint::{lint_with_config, LintConfig, Severity};
//! use vscsv_core::{parse, Delimiter};
//!
//! let data = parse("a,b\n1", Delimiter::COMMA);
//!
//! let mut config = LintConfig::default();
//! config.set_rule_error("ragged-row");
//! config.disable_rule("duplicate-header");
//!
//! let diagnostics = lint_with_config(&data, config);
//! assert_eq!(diagnostics[0].severity(), Severity::Error);
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use vscsv_lint::{LintRule, Diagnostic, DiagnosticKind, LintRunner, LintConfig};
//! use vscsv_core::{parse, Data, Delimiter};
//!
//! struct NoEmptyDocument;
//!
//! impl LintRule for NoEmptyDocument {
//!     fn id(&self) -> &str { "no-empty-document" }
//!     fn description(&self) -> &str { "Document has no data rows" }
//!     fn check(&self, data: &Data) -> Vec<Diagnostic> {
//!         if data.len() > 1 {
//!             return vec![];
//!         }
//!         vec![Diagnostic::hint(
//!             DiagnosticKind::Custom("no-empty-document".into()),
//!             "No data rows",
//!             self.id(),
//!         )]
//!     }
//! }
//!
//! let mut runner = LintRunner::new(LintConfig::default());
//! runner.add_rule(Box::new(NoEmptyDocument));
//!
//! let diagnostics = runner.run(&parse("a,b", Delimiter::COMMA));
//! assert_eq!(diagnostics.len(), 1);
//! ```

mod diagnostic;
mod error;
mod rules;
mod runner;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::LintConfigError;
pub use rules::{
    default_rules, DuplicateHeaderRule, EmptyHeaderRule, LintRule, RaggedRowRule, RuleConfig,
    UnterminatedQuoteRule,
};
pub use runner::{LintConfig, LintContext, LintRunner};

use vscsv_core::{parse, Data, Delimiter};

/// Run all default lint rules on a parsed document
///
/// Rules that need the raw text are skipped; use [`lint_text`] when the
/// source is at hand.
pub fn lint(data: &Data) -> Vec<Diagnostic> {
    let runner = LintRunner::new(LintConfig::default());
    runner.run(data)
}

/// Run lint with custom configuration
pub fn lint_with_config(data: &Data, config: LintConfig) -> Vec<Diagnostic> {
    let runner = LintRunner::new(config);
    runner.run(data)
}

/// Parse and lint source text with every default rule
pub fn lint_text(text: &str, delimiter: Delimiter) -> Vec<Diagnostic> {
    let data = parse(text, delimiter);
    let runner = LintRunner::new(LintConfig::default());
    runner.run_with_context(&data, &LintContext::from_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_empty_document() {
        assert!(lint(&parse("", Delimiter::COMMA)).is_empty());
        assert!(lint_text("", Delimiter::COMMA).is_empty());
    }

    #[test]
    fn test_lint_reports_every_ragged_row() {
        let diagnostics = lint(&parse("a,b,c\nd,e\nf", Delimiter::COMMA));
        let lines: Vec<Option<usize>> = diagnostics.iter().map(Diagnostic::line).collect();
        assert_eq!(lines, [Some(1), Some(2)]);
        assert!(diagnostics
            .iter()
            .all(|d| d.kind() == &DiagnosticKind::RaggedRow && d.severity() == Severity::Warning));
    }

    #[test]
    fn test_lint_text_finds_unterminated_quote() {
        let diagnostics = lint_text("a\n\"b\n", Delimiter::COMMA);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind(), &DiagnosticKind::UnterminatedQuote);
        assert_eq!(diagnostics[0].line(), Some(1));
    }

    #[test]
    fn test_lint_tsv() {
        let diagnostics = lint_text("a\tb\n1\t2\t3", Delimiter::TAB);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Expected 2 columns, found 3");
    }
}
