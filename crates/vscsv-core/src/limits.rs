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

//! Resource limits for parsing untrusted documents.
//!
//! The plain [`parse`](crate::parse) entry point is unbounded. Editors that
//! parse on every keystroke can opt into these bounds through
//! [`Parser::parse_with_limits`](crate::Parser::parse_with_limits).

/// Configurable limits for parser resource usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum document size in bytes (default: 100MB).
    pub max_document_size: usize,
    /// Maximum line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum number of rows (default: 10M).
    pub max_rows: usize,
    /// Maximum cells per row (default: 10k).
    pub max_columns: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_document_size: 100 * 1024 * 1024, // 100MB
            max_line_length: 1024 * 1024,         // 1MB
            max_rows: 10_000_000,
            max_columns: 10_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions.
    pub fn unlimited() -> Self {
        Self {
            max_document_size: usize::MAX,
            max_line_length: usize::MAX,
            max_rows: usize::MAX,
            max_columns: usize::MAX,
        }
    }
}
