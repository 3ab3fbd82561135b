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

//! Document parser.
//!
//! Two entry points:
//!
//! - [`parse`] is a pure function taking the delimiter per call.
//! - [`Parser`] is an owned per-document value carrying a [`ParserConfig`].
//!   Changing its delimiter takes `&mut self`, so a parser cannot be
//!   reconfigured while another caller is using it.

use crate::data::Data;
use crate::delimiter::{ContentKind, Delimiter};
use crate::error::{DsvError, LimitKind, Result};
use crate::lex::{parse_line, split_lines};
use crate::limits::Limits;
use tracing::{debug, trace};

/// Parse a whole document.
///
/// Infallible: malformed quoting is recovered from and ragged rows are
/// kept as they are. The line index of each row equals its position in the
/// returned model.
///
/// ```
/// use vscsv_core::{parse, Delimiter};
///
/// let data = parse("a,b,c\n\n1,2,3", Delimiter::COMMA);
/// assert_eq!(data.len(), 3);
/// assert_eq!(data.get_row(1).unwrap().len(), 1);
/// assert_eq!(data.get_cell(2, -1).unwrap().value, "3");
/// ```
pub fn parse(text: &str, delimiter: Delimiter) -> Data {
    let rows: Vec<_> = split_lines(text)
        .enumerate()
        .map(|(i, line)| parse_line(line, delimiter, i))
        .collect();
    debug!(rows = rows.len(), delimiter = %delimiter, "parsed document");
    Data::new(rows, delimiter)
}

/// Parse with resource limits enforced.
///
/// The document size is checked up front; line length, row count and
/// column count are checked as lines are consumed, so an oversized
/// document fails without being fully materialized.
pub fn parse_with_limits(text: &str, delimiter: Delimiter, limits: &Limits) -> Result<Data> {
    if text.len() > limits.max_document_size {
        return Err(DsvError::LimitExceeded {
            kind: LimitKind::DocumentSize,
            limit: limits.max_document_size,
            actual: text.len(),
            line: None,
        });
    }

    let mut rows = Vec::new();
    for (i, line) in split_lines(text).enumerate() {
        if i >= limits.max_rows {
            return Err(DsvError::LimitExceeded {
                kind: LimitKind::RowCount,
                limit: limits.max_rows,
                actual: i + 1,
                line: Some(i),
            });
        }
        if line.len() > limits.max_line_length {
            return Err(DsvError::LimitExceeded {
                kind: LimitKind::LineLength,
                limit: limits.max_line_length,
                actual: line.len(),
                line: Some(i),
            });
        }
        let row = parse_line(line, delimiter, i);
        if row.len() > limits.max_columns {
            return Err(DsvError::LimitExceeded {
                kind: LimitKind::ColumnCount,
                limit: limits.max_columns,
                actual: row.len(),
                line: Some(i),
            });
        }
        trace!(line = i, cells = row.len(), "parsed line");
        rows.push(row);
    }

    debug!(rows = rows.len(), delimiter = %delimiter, "parsed document with limits");
    Ok(Data::new(rows, delimiter))
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: Delimiter,
    /// Bounds applied by [`Parser::parse_with_limits`].
    pub limits: Limits,
}

/// Owned, per-document parser.
///
/// Holds no parse state between calls. Every [`Parser::parse`] returns a
/// freshly built [`Data`]; a delimiter change only takes effect on the
/// next parse.
///
/// ```
/// use vscsv_core::{ContentKind, Delimiter, Parser};
///
/// let mut parser = Parser::for_kind(ContentKind::Tsv);
/// assert_eq!(parser.parse("a\tb").get_row(0).unwrap().len(), 2);
///
/// parser.set_delimiter(Delimiter::COMMA);
/// assert_eq!(parser.parse("a\tb").get_row(0).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Parser with the default `,` delimiter and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with an explicit configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parser with the given delimiter and default limits.
    pub fn with_delimiter(delimiter: Delimiter) -> Self {
        Self::with_config(ParserConfig {
            delimiter,
            ..ParserConfig::default()
        })
    }

    /// Parser whose delimiter is resolved from a content kind.
    pub fn for_kind(kind: ContentKind) -> Self {
        Self::with_delimiter(kind.delimiter())
    }

    /// Current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Current delimiter.
    pub fn delimiter(&self) -> Delimiter {
        self.config.delimiter
    }

    /// Change the delimiter. Previously returned models are unaffected.
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.config.delimiter = delimiter;
    }

    /// Replace the limits used by [`Parser::parse_with_limits`].
    pub fn set_limits(&mut self, limits: Limits) {
        self.config.limits = limits;
    }

    /// Parse with the configured delimiter.
    pub fn parse(&self, text: &str) -> Data {
        parse(text, self.config.delimiter)
    }

    /// Parse with the configured delimiter and limits.
    pub fn parse_with_limits(&self, text: &str) -> Result<Data> {
        parse_with_limits(text, self.config.delimiter, &self.config.limits)
    }

    /// Serialize a model with the configured delimiter.
    ///
    /// The model's own delimiter is ignored, which makes this the way to
    /// convert between formats.
    pub fn serialize(&self, data: &Data) -> String {
        crate::serialize::serialize(data.rows(), self.config.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse tests ====================

    #[test]
    fn test_parse_empty_input_is_one_empty_cell() {
        let data = parse("", Delimiter::COMMA);
        assert_eq!(data.to_values(), vec![vec![String::new()]]);
        assert_eq!(data.get_cell(0, 0).map(|c| (c.column, c.column_end)), Some((0, 0)));
    }

    #[test]
    fn test_parse_line_index_matches_row_index() {
        let data = parse("a\r\nb\n\nc", Delimiter::COMMA);
        for (i, row) in data.iter().enumerate() {
            assert!(row.iter().all(|cell| cell.line == i));
        }
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "a,\"b\"\"c\"\nd,e";
        assert_eq!(parse(text, Delimiter::COMMA), parse(text, Delimiter::COMMA));
    }

    #[test]
    fn test_parse_records_delimiter() {
        assert_eq!(parse("a", Delimiter::PIPE).delimiter(), Delimiter::PIPE);
    }

    // ==================== parse_with_limits tests ====================

    #[test]
    fn test_limits_document_size() {
        let limits = Limits {
            max_document_size: 4,
            ..Limits::default()
        };
        let err = parse_with_limits("a,b,c", Delimiter::COMMA, &limits).unwrap_err();
        assert!(matches!(
            err,
            DsvError::LimitExceeded {
                kind: LimitKind::DocumentSize,
                limit: 4,
                actual: 5,
                line: None,
            }
        ));
    }

    #[test]
    fn test_limits_row_count() {
        let limits = Limits {
            max_rows: 2,
            ..Limits::default()
        };
        assert!(parse_with_limits("a\nb", Delimiter::COMMA, &limits).is_ok());
        let err = parse_with_limits("a\nb\nc", Delimiter::COMMA, &limits).unwrap_err();
        assert!(matches!(
            err,
            DsvError::LimitExceeded { kind: LimitKind::RowCount, line: Some(2), .. }
        ));
    }

    #[test]
    fn test_limits_line_length() {
        let limits = Limits {
            max_line_length: 3,
            ..Limits::default()
        };
        let err = parse_with_limits("a,b\nccccc", Delimiter::COMMA, &limits).unwrap_err();
        assert!(matches!(
            err,
            DsvError::LimitExceeded { kind: LimitKind::LineLength, actual: 5, line: Some(1), .. }
        ));
    }

    #[test]
    fn test_limits_column_count() {
        let limits = Limits {
            max_columns: 2,
            ..Limits::default()
        };
        let err = parse_with_limits("a,b,c", Delimiter::COMMA, &limits).unwrap_err();
        assert!(matches!(
            err,
            DsvError::LimitExceeded { kind: LimitKind::ColumnCount, actual: 3, .. }
        ));
    }

    #[test]
    fn test_limits_match_unbounded_parse() {
        let text = "x,y\n\"1,2\",3\n";
        let bounded = parse_with_limits(text, Delimiter::COMMA, &Limits::unlimited()).unwrap();
        assert_eq!(bounded, parse(text, Delimiter::COMMA));
    }

    // ==================== Parser tests ====================

    #[test]
    fn test_parser_default_delimiter_is_comma() {
        assert_eq!(Parser::new().delimiter(), Delimiter::COMMA);
    }

    #[test]
    fn test_parser_for_kind() {
        assert_eq!(Parser::for_kind(ContentKind::Tsv).delimiter(), Delimiter::TAB);
        assert_eq!(Parser::for_kind(ContentKind::Psv).delimiter(), Delimiter::PIPE);
        assert_eq!(Parser::for_kind(ContentKind::Unknown).delimiter(), Delimiter::COMMA);
    }

    #[test]
    fn test_parser_set_delimiter_does_not_touch_old_models() {
        let mut parser = Parser::new();
        let before = parser.parse("a;b");
        parser.set_delimiter(Delimiter::SEMICOLON);
        let after = parser.parse("a;b");
        assert_eq!(before.column_count(), 1);
        assert_eq!(after.column_count(), 2);
        assert_eq!(before.delimiter(), Delimiter::COMMA);
    }

    #[test]
    fn test_parser_parse_with_configured_limits() {
        let mut parser = Parser::new();
        parser.set_limits(Limits {
            max_rows: 1,
            ..Limits::default()
        });
        assert!(parser.parse_with_limits("a\nb").is_err());
        assert_eq!(parser.parse("a\nb").len(), 2);
    }

    #[test]
    fn test_parser_serialize_converts_delimiter() {
        let data = parse("a,b;c\n1,2", Delimiter::COMMA);
        let parser = Parser::with_delimiter(Delimiter::SEMICOLON);
        assert_eq!(parser.serialize(&data), "a;\"b;c\"\n1;2");
    }
}
