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

//! A parsed document together with its source text.

use crate::hover::{hover_at, Hover};
use crate::position::Position;
use crate::preview::PreviewMessage;
use crate::settings::Settings;
use crate::symbols::{column_symbols, ColumnSymbol};
use crate::tokens::{semantic_tokens, SemanticToken};
use tracing::debug;
use vscsv_core::lex::split_lines;
use vscsv_core::{detect_delimiter, parse, ContentKind, Data, Delimiter};
use vscsv_lint::{Diagnostic, LintConfig, LintContext, LintRunner};

/// Pick a delimiter for a document.
///
/// A supported kind decides. Otherwise the text is sniffed, falling back
/// to `,`.
pub fn choose_delimiter(kind: ContentKind, text: &str) -> Delimiter {
    if kind.is_supported() {
        kind.delimiter()
    } else {
        detect_delimiter(text).unwrap_or_default()
    }
}

/// Source text, its kind and the model parsed from it.
#[derive(Debug, Clone)]
pub struct Document {
    uri: String,
    kind: ContentKind,
    text: String,
    data: Data,
}

impl Document {
    /// Parse `text` with the delimiter chosen by [`choose_delimiter`].
    pub fn new(uri: impl Into<String>, text: impl Into<String>, kind: ContentKind) -> Self {
        let text = text.into();
        let delimiter = choose_delimiter(kind, &text);
        Self::with_delimiter(uri, text, kind, delimiter)
    }

    /// Parse `text` with an explicit delimiter.
    pub fn with_delimiter(
        uri: impl Into<String>,
        text: impl Into<String>,
        kind: ContentKind,
        delimiter: Delimiter,
    ) -> Self {
        let uri = uri.into();
        let text = text.into();
        let data = parse(&text, delimiter);
        debug!(uri = %uri, kind = %kind, rows = data.len(), "document parsed");
        Self {
            uri,
            kind,
            text,
            data,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn delimiter(&self) -> Delimiter {
        self.data.delimiter()
    }

    /// Raw text of a source line, line break excluded.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        split_lines(&self.text).nth(line)
    }

    /// Hover for a caret position.
    pub fn hover(&self, position: Position) -> Option<Hover> {
        hover_at(&self.data, self.line_text(position.line)?, position)
    }

    /// Hover gated by `enable_hover_information`.
    pub fn hover_with(&self, settings: &Settings, position: Position) -> Option<Hover> {
        if !settings.enable_hover_information {
            return None;
        }
        self.hover(position)
    }

    /// One-based `Row r, Column c` label for a caret position.
    pub fn position_label(&self, position: Position) -> Option<String> {
        let (row, column, _) = self.data.cell_at(position.line, position.character)?;
        Some(format!("Row {}, Column {}", row + 1, column + 1))
    }

    /// Outline entries, one per header cell.
    pub fn symbols(&self) -> Vec<ColumnSymbol> {
        column_symbols(&self.data)
    }

    /// Per-column highlighting tokens.
    pub fn semantic_tokens(&self) -> Vec<SemanticToken> {
        semantic_tokens(&self.data)
    }

    /// Structural diagnostics with every default rule.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics_with_config(LintConfig::default())
    }

    /// Structural diagnostics with a custom lint configuration.
    pub fn diagnostics_with_config(&self, config: LintConfig) -> Vec<Diagnostic> {
        let context = LintContext::from_text(self.text.as_str());
        LintRunner::new(config).run_with_context(&self.data, &context)
    }

    /// Preview `update` message carrying the decoded values.
    pub fn preview_message(&self) -> PreviewMessage {
        PreviewMessage::values(&self.data)
    }

    /// Everything the host should currently show, honouring the toggles.
    pub fn features(&self, settings: &Settings) -> Features {
        Features {
            tokens: settings
                .enable_syntax_highlighting
                .then(|| self.semantic_tokens()),
            symbols: settings.enable_document_symbols.then(|| self.symbols()),
            diagnostics: settings.enable_diagnostics.then(|| self.diagnostics()),
        }
    }
}

/// Projections gated by [`Settings`]. A `None` field means the feature is off.
#[derive(Debug, Clone, Default)]
pub struct Features {
    pub tokens: Option<Vec<SemanticToken>>,
    pub symbols: Option<Vec<ColumnSymbol>>,
    pub diagnostics: Option<Vec<Diagnostic>>,
}
