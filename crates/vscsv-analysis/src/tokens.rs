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

//! Column-based semantic highlighting.
//!
//! Each column gets a token type from [`TOKEN_LEGEND`], cycling when a
//! document has more columns than the legend has entries. Themes then
//! colour columns differently without any CSV-specific grammar.

use serde::{Deserialize, Serialize};
use vscsv_core::Data;

/// Token types advertised to the host, indexed by [`SemanticToken::token_type`].
///
/// The first entry matches no theme rule and renders as plain text.
pub const TOKEN_LEGEND: [&str; 22] = [
    "nonexistent",
    "string",
    "number",
    "regexp",
    "operator",
    "keyword",
    "namespace",
    "comment",
    "type",
    "struct",
    "class",
    "interface",
    "enum",
    "typeParameter",
    "function",
    "method",
    "decorator",
    "macro",
    "variable",
    "parameter",
    "property",
    "label",
];

/// One highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticToken {
    pub line: usize,
    pub start: usize,
    pub length: usize,
    pub token_type: usize,
}

/// Token type for a column index.
#[inline]
pub fn token_type_for_column(column: usize) -> usize {
    column % TOKEN_LEGEND.len()
}

/// Tokens for every non-empty cell, in document order.
///
/// Tokens cover the raw span so quotes are coloured with their field.
pub fn semantic_tokens(data: &Data) -> Vec<SemanticToken> {
    let mut tokens = Vec::new();
    data.for_each_cell(|cell, _, column| {
        let length = cell.span_len();
        if length > 0 {
            tokens.push(SemanticToken {
                line: cell.line,
                start: cell.column,
                length,
                token_type: token_type_for_column(column),
            });
        }
    });
    tokens
}

/// Encode tokens in the relative five-integer form used by the Language
/// Server Protocol: `deltaLine, deltaStart, length, tokenType, modifiers`.
///
/// Tokens are expected in position order, as [`semantic_tokens`] returns
/// them. A token starting before its predecessor cannot be delta-encoded
/// and is skipped.
pub fn encode_relative(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut out = Vec::with_capacity(tokens.len() * 5);
    let mut prev_line = 0;
    let mut prev_start = 0;
    for token in tokens {
        let Some(delta_line) = token.line.checked_sub(prev_line) else {
            continue;
        };
        let delta_start = if delta_line == 0 {
            match token.start.checked_sub(prev_start) {
                Some(delta) => delta,
                None => continue,
            }
        } else {
            token.start
        };
        out.extend([
            saturate(delta_line),
            saturate(delta_start),
            saturate(token.length),
            saturate(token.token_type),
            0,
        ]);
        prev_line = token.line;
        prev_start = token.start;
    }
    out
}

#[inline]
fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
