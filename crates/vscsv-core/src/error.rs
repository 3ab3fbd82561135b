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

//! Error types for DSV parsing and serialization.
//!
//! Parsing itself never fails: malformed quoting and ragged rows are
//! recovered from. Errors only arise at the boundaries, when a caller asks
//! for an impossible delimiter, opts into resource limits, or streams
//! output to a writer.

use std::fmt;
use thiserror::Error;

/// Which resource bound was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Total document size in bytes.
    DocumentSize,
    /// Length of a single line in bytes.
    LineLength,
    /// Number of rows in the document.
    RowCount,
    /// Number of cells in a single row.
    ColumnCount,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentSize => write!(f, "document size"),
            Self::LineLength => write!(f, "line length"),
            Self::RowCount => write!(f, "row count"),
            Self::ColumnCount => write!(f, "column count"),
        }
    }
}

/// DSV error types.
///
/// # Examples
///
/// ```
/// use vscsv_core::{DsvError, LimitKind};
///
/// let err = DsvError::LimitExceeded {
///     kind: LimitKind::RowCount,
///     limit: 10,
///     actual: 11,
///     line: None,
/// };
/// assert_eq!(err.to_string(), "Limit exceeded: row count 11 exceeds maximum 10");
/// ```
#[derive(Debug, Error)]
pub enum DsvError {
    /// The character cannot separate fields.
    ///
    /// Quote and line break characters are reserved by the grammar.
    ///
    /// ```
    /// use vscsv_core::DsvError;
    ///
    /// let err = DsvError::InvalidDelimiter('"');
    /// assert!(err.to_string().contains("'\"'"));
    /// ```
    #[error("Invalid delimiter {0:?}: quote and line break characters are reserved")]
    InvalidDelimiter(char),

    /// A configured resource limit was crossed.
    #[error("Limit exceeded: {kind} {actual} exceeds maximum {limit}{}", .line.map(|l| format!(" at line {}", l + 1)).unwrap_or_default())]
    LimitExceeded {
        /// The bound that was crossed.
        kind: LimitKind,
        /// Configured maximum.
        limit: usize,
        /// Observed value.
        actual: usize,
        /// Zero-based line where the bound was crossed, if line-specific.
        line: Option<usize>,
    },

    /// I/O error while writing serialized output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for `Result` with `DsvError`.
pub type Result<T> = std::result::Result<T, DsvError>;

impl DsvError {
    /// Add context to an error message.
    ///
    /// ```
    /// use vscsv_core::DsvError;
    ///
    /// let err = DsvError::InvalidDelimiter('\n').with_context("reading --delimiter");
    /// assert!(err.to_string().ends_with("(reading --delimiter)"));
    /// ```
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        match self {
            DsvError::Other(msg) => DsvError::Other(format!("{} ({})", msg, context)),
            other => DsvError::Other(format!("{} ({})", other, context)),
        }
    }
}
