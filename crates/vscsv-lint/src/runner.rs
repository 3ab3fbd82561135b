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

//! Lint runner

use crate::diagnostic::{Diagnostic, DiagnosticKind, Severity};
use crate::error::LintConfigError;
use crate::rules::{default_rules, LintRule, RuleConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};
use vscsv_core::Data;

/// Context passed to lint rules
///
/// Carries the source text for rules that inspect raw lines, and the file
/// path for reporting.
#[derive(Debug, Clone, Default)]
pub struct LintContext {
    /// Optional file path being linted
    pub file_path: Option<PathBuf>,
    /// Source text being linted
    pub source_text: String,
}

impl LintContext {
    /// Create a context without a file path
    pub fn from_text(source_text: impl Into<String>) -> Self {
        Self {
            file_path: None,
            source_text: source_text.into(),
        }
    }

    /// Create a context with a file path
    pub fn with_file(file_path: PathBuf, source_text: impl Into<String>) -> Self {
        Self {
            file_path: Some(file_path),
            source_text: source_text.into(),
        }
    }

    /// Get the file name if available
    pub fn file_name(&self) -> Option<String> {
        self.file_path.as_ref().and_then(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|s| s.to_string())
        })
    }
}

/// Maximum number of diagnostics to collect before stopping.
///
/// A million-row file with one bad column would otherwise produce a
/// million diagnostics, which no editor can display usefully.
const MAX_DIAGNOSTICS: usize = 10_000;

/// Configuration for the lint runner
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Rule configurations by rule ID
    pub rules: HashMap<String, RuleConfig>,
    /// Minimum severity to report
    pub min_severity: Severity,
    /// Maximum number of diagnostics to collect (default: 10,000)
    pub max_diagnostics: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            min_severity: Severity::Hint,
            max_diagnostics: MAX_DIAGNOSTICS,
        }
    }
}

impl LintConfig {
    /// Validate configuration (checks rule ID lengths and limits).
    pub fn validate(&self) -> Result<(), LintConfigError> {
        const MAX_RULE_ID_LENGTH: usize = 100;
        const MAX_RULES: usize = 1000;

        if self.rules.len() > MAX_RULES {
            return Err(LintConfigError::TooManyRules {
                count: self.rules.len(),
                max: MAX_RULES,
            });
        }

        for id in self.rules.keys() {
            if id.is_empty() {
                return Err(LintConfigError::EmptyRuleId);
            }
            if id.len() > MAX_RULE_ID_LENGTH {
                return Err(LintConfigError::RuleIdTooLong {
                    len: id.len(),
                    max: MAX_RULE_ID_LENGTH,
                });
            }
        }

        if self.max_diagnostics == 0 {
            return Err(LintConfigError::ZeroDiagnostics);
        }

        Ok(())
    }

    /// Disable a specific rule
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: false,
                error: false,
            },
        );
    }

    /// Enable a specific rule
    pub fn enable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: false,
            },
        );
    }

    /// Set a rule to error level
    pub fn set_rule_error(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: true,
            },
        );
    }
}

/// Lint runner
pub struct LintRunner {
    config: LintConfig,
    rules: Vec<Box<dyn LintRule>>,
}

impl LintRunner {
    /// Create a new lint runner with default rules
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Create a lint runner with custom rules
    pub fn with_rules(config: LintConfig, rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { config, rules }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// IDs of the registered rules, in execution order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run all enabled rules without source text.
    ///
    /// Rules that read raw lines report nothing in this mode.
    pub fn run(&self, data: &Data) -> Vec<Diagnostic> {
        self.run_with_context(data, &LintContext::default())
    }

    /// Run all enabled rules with lint context.
    ///
    /// Results are sorted errors first, then by line. Once
    /// `config.max_diagnostics` entries are collected the run stops and a
    /// final `Truncated` warning is appended.
    pub fn run_with_context(&self, data: &Data, context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut limit_exceeded = false;

        for rule in &self.rules {
            let rule_id = rule.id();
            let rule_config = self.config.rules.get(rule_id).cloned().unwrap_or_default();

            if !rule_config.enabled {
                debug!(rule = rule_id, "rule disabled, skipping");
                continue;
            }

            let mut rule_diagnostics = rule.check_with_context(data, context);
            debug!(rule = rule_id, found = rule_diagnostics.len(), "rule finished");

            // Apply rule configuration
            if rule_config.error {
                rule_diagnostics
                    .iter_mut()
                    .for_each(Diagnostic::escalate_to_error);
            }

            // Filter by minimum severity and apply diagnostic limit
            for diag in rule_diagnostics
                .into_iter()
                .filter(|d| d.severity() >= self.config.min_severity)
            {
                if diagnostics.len() >= self.config.max_diagnostics {
                    limit_exceeded = true;
                    break;
                }
                diagnostics.push(diag);
            }

            if limit_exceeded {
                break;
            }
        }

        diagnostics.sort_by(|a, b| {
            b.severity()
                .cmp(&a.severity())
                .then_with(|| a.line().cmp(&b.line()))
        });

        if limit_exceeded {
            warn!(
                limit = self.config.max_diagnostics,
                file = context.file_name().as_deref().unwrap_or("<text>"),
                "diagnostic limit reached"
            );
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::Truncated,
                format!(
                    "Diagnostic limit of {} reached; remaining issues not reported",
                    self.config.max_diagnostics
                ),
                "lint-limit",
            ));
        }

        diagnostics
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
        diagnostics.iter().any(|d| d.severity() == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vscsv_core::{parse, Delimiter};

    fn csv(text: &str) -> Data {
        parse(text, Delimiter::COMMA)
    }

    struct EveryRowRule;

    impl LintRule for EveryRowRule {
        fn id(&self) -> &str {
            "every-row"
        }

        fn description(&self) -> &str {
            "One warning per row"
        }

        fn check(&self, data: &Data) -> Vec<Diagnostic> {
            (0..data.len())
                .map(|i| {
                    Diagnostic::warning(
                        DiagnosticKind::Custom("every-row".into()),
                        "row",
                        "every-row",
                    )
                    .with_line(i)
                })
                .collect()
        }
    }

    // ==================== LintContext tests ====================

    #[test]
    fn test_context_file_name() {
        let ctx = LintContext::with_file(PathBuf::from("dir/data.csv"), "a,b");
        assert_eq!(ctx.file_name().as_deref(), Some("data.csv"));
        assert_eq!(LintContext::from_text("a").file_name(), None);
    }

    // ==================== LintConfig tests ====================

    #[test]
    fn test_config_validate_default() {
        assert!(LintConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_rule_id() {
        let mut config = LintConfig::default();
        config.disable_rule("");
        assert_eq!(config.validate(), Err(LintConfigError::EmptyRuleId));
    }

    #[test]
    fn test_config_validate_long_rule_id() {
        let mut config = LintConfig::default();
        config.enable_rule(&"x".repeat(101));
        assert!(matches!(
            config.validate(),
            Err(LintConfigError::RuleIdTooLong { len: 101, .. })
        ));
    }

    #[test]
    fn test_config_validate_zero_diagnostics() {
        let config = LintConfig {
            max_diagnostics: 0,
            ..LintConfig::default()
        };
        assert_eq!(config.validate(), Err(LintConfigError::ZeroDiagnostics));
    }

    #[test]
    fn test_config_rule_toggles() {
        let mut config = LintConfig::default();
        config.set_rule_error("ragged-row");
        assert_eq!(
            config.rules["ragged-row"],
            RuleConfig {
                enabled: true,
                error: true,
            }
        );
        config.disable_rule("ragged-row");
        assert!(!config.rules["ragged-row"].enabled);
        config.enable_rule("ragged-row");
        assert!(config.rules["ragged-row"].enabled);
        assert!(!config.rules["ragged-row"].error);
    }

    // ==================== LintRunner tests ====================

    #[test]
    fn test_runner_clean_document() {
        let runner = LintRunner::new(LintConfig::default());
        assert!(runner.run(&csv("a,b\n1,2\n")).is_empty());
    }

    #[test]
    fn test_runner_disabled_rule() {
        let mut config = LintConfig::default();
        config.disable_rule("ragged-row");
        let runner = LintRunner::new(config);
        assert!(runner.run(&csv("a,b\n1")).is_empty());
    }

    #[test]
    fn test_runner_escalates_to_error() {
        let mut config = LintConfig::default();
        config.set_rule_error("ragged-row");
        let runner = LintRunner::new(config);
        let diags = runner.run(&csv("a,b\n1"));
        assert_eq!(diags.len(), 1);
        assert!(LintRunner::has_errors(&diags));
    }

    #[test]
    fn test_runner_escalates_hints_to_error() {
        let mut config = LintConfig::default();
        config.set_rule_error("duplicate-header");
        config.min_severity = Severity::Warning;
        let runner = LintRunner::new(config);
        let diags = runner.run(&csv("a,a"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Error);
        assert_eq!(diags[0].rule_id(), "duplicate-header");
    }

    #[test]
    fn test_runner_min_severity_filters_hints() {
        let config = LintConfig {
            min_severity: Severity::Warning,
            ..LintConfig::default()
        };
        let runner = LintRunner::new(config);
        assert!(runner.run(&csv("a,a")).is_empty());

        let runner = LintRunner::new(LintConfig::default());
        assert_eq!(runner.run(&csv("a,a")).len(), 1);
    }

    #[test]
    fn test_runner_sorts_errors_first_then_line() {
        let mut config = LintConfig::default();
        config.set_rule_error("ragged-row");
        let runner = LintRunner::new(config);
        let diags = runner.run(&csv("a,a,b\n1\n2,3\n4,5,6"));
        let summary: Vec<(Severity, Option<usize>)> =
            diags.iter().map(|d| (d.severity(), d.line())).collect();
        assert_eq!(
            summary,
            [
                (Severity::Error, Some(1)),
                (Severity::Error, Some(2)),
                (Severity::Hint, Some(0)),
            ]
        );
    }

    #[test]
    fn test_runner_diagnostic_limit() {
        let config = LintConfig {
            max_diagnostics: 3,
            ..LintConfig::default()
        };
        let runner = LintRunner::with_rules(config, vec![Box::new(EveryRowRule)]);
        let diags = runner.run(&csv("a\nb\nc\nd\ne"));
        assert_eq!(diags.len(), 4);
        assert_eq!(diags[3].kind(), &DiagnosticKind::Truncated);
    }

    #[test]
    fn test_runner_add_rule() {
        let mut runner = LintRunner::new(LintConfig::default());
        runner.add_rule(Box::new(EveryRowRule));
        assert_eq!(runner.rule_ids().last(), Some(&"every-row"));
        assert_eq!(runner.run(&csv("a\nb")).len(), 2);
    }

    #[test]
    fn test_runner_context_enables_quote_rule() {
        let text = "a\n\"x,y\n";
        let data = csv(text);
        let runner = LintRunner::new(LintConfig::default());
        assert!(runner.run(&data).is_empty());
        let diags = runner.run_with_context(&data, &LintContext::from_text(text));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule_id(), "unterminated-quote");
    }
}
