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

//! Error types for the analysis layer.

use thiserror::Error;

/// Analysis error types.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Document rejected by the cache size limit.
    #[error("Document too large: {size} bytes (max: {max})")]
    DocumentTooLarge { size: usize, max: usize },

    /// Malformed settings or transport message.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result` with `AnalysisError`.
pub type Result<T> = std::result::Result<T, AnalysisError>;
