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

//! Lint diagnostic types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// Informational hint
    Hint,
    /// Warning - might be an issue
    Warning,
    /// Error - definitely an issue
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Kind of diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// Row width differs from the header
    RaggedRow,
    /// Quoted field not closed before the end of the line
    UnterminatedQuote,
    /// Same header name used twice
    DuplicateHeader,
    /// Blank header name
    EmptyHeader,
    /// Diagnostic limit reached, later diagnostics dropped
    Truncated,
    /// Custom rule violation
    Custom(String),
}

/// A lint diagnostic
///
/// Lines and columns are zero-based, matching [`vscsv_core::Cell`]. Only
/// the [`Display`](std::fmt::Display) output is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Severity level
    severity: Severity,
    /// Kind of issue
    kind: DiagnosticKind,
    /// Human-readable message
    message: String,
    /// Source line, if the issue is tied to one
    line: Option<usize>,
    /// Character range on that line
    columns: Option<(usize, usize)>,
    /// Rule ID that generated this diagnostic
    rule_id: String,
    /// Suggested fix (if any)
    suggestion: Option<String>,
}

impl Diagnostic {
    fn with_severity(
        severity: Severity,
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            line: None,
            columns: None,
            rule_id: rule_id.into(),
            suggestion: None,
        }
    }

    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::with_severity(Severity::Warning, kind, message, rule_id)
    }

    pub fn error(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::with_severity(Severity::Error, kind, message, rule_id)
    }

    pub fn hint(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::with_severity(Severity::Hint, kind, message, rule_id)
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a character range, `start..end`, on the diagnostic's line.
    pub fn with_columns(mut self, start: usize, end: usize) -> Self {
        self.columns = Some((start, end.max(start)));
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // Public getters
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn columns(&self) -> Option<(usize, usize)> {
        self.columns
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Escalate the severity to error level (used by lint runner).
    pub fn escalate_to_error(&mut self) {
        self.severity = Severity::Error;
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line + 1)?;
        }

        write!(f, "[{}] {}: {}", self.rule_id, self.severity, self.message)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }

        Ok(())
    }
}
