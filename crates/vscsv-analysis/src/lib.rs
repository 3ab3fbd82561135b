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

//! Host-neutral editor projections for delimited documents
//!
//! Everything an editor integration needs, computed from the parsed model
//! without depending on any editor API: hover text, a column outline,
//! per-column highlight tokens, diagnostics and the messages sent to a
//! tabular preview. Positions are zero-based lines and character offsets.
//!
//! ## Example
//!
//! ```rust
//! use vscsv_analysis::{Document, Position, Settings};
//! use vscsv_core::ContentKind;
//!
//! let doc = Document::new("file:///people.csv", "name,age\nAda,36\n", ContentKind::Csv);
//!
//! let hover = doc.hover(Position::new(1, 4)).unwrap();
//! assert_eq!(hover.contents[1], "Row: 2, Column: 2 (age)");
//!
//! let features = doc.features(&Settings::default());
//! assert_eq!(features.symbols.unwrap()[0].name, "name");
//! ```

mod cache;
mod document;
mod error;
mod hover;
mod position;
mod preview;
mod settings;
mod symbols;
mod tokens;

pub use cache::{CacheStatistics, DocumentCache, DEFAULT_MAX_DOCUMENTS, DEFAULT_MAX_DOCUMENT_SIZE};
pub use document::{choose_delimiter, Document, Features};
pub use error::{AnalysisError, Result};
pub use hover::{hover_at, hover_contents, Hover};
pub use position::{Position, TextRange};
pub use preview::{filter_rows, PreviewMessage, PreviewPayload, WebviewMessage};
pub use settings::Settings;
pub use symbols::{column_symbols, ColumnSymbol};
pub use tokens::{
    encode_relative, semantic_tokens, token_type_for_column, SemanticToken, TOKEN_LEGEND,
};
