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

//! Structured error types for the vscsv CLI.
//!
//! Every command returns `Result<T, CliError>`; the binary prints the
//! message as `Error: ...` and exits with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vscsv_core::DsvError;

#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// Input exceeds `VSCSV_MAX_FILE_SIZE`.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Parsing under limits rejected the input.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// `validate --strict` found rows whose width differs from the header.
    #[error("{count} ragged row(s) found")]
    RaggedRows { count: usize },

    #[error("Lint errors found")]
    LintErrors,

    #[error("File is not in canonical form")]
    NotCanonical,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<DsvError> for CliError {
    fn from(source: DsvError) -> Self {
        match source {
            DsvError::LimitExceeded { .. } => Self::Parse(source.to_string()),
            DsvError::Io(e) => Self::Io {
                path: PathBuf::from("<stream>"),
                message: e.to_string(),
            },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<vscsv_analysis::AnalysisError> for CliError {
    fn from(source: vscsv_analysis::AnalysisError) -> Self {
        match source {
            vscsv_analysis::AnalysisError::Json(e) => e.into(),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
