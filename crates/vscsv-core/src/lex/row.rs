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

//! Field scanner for a single line.
//!
//! Grammar: an unescaped `"` toggles quoting wherever it appears in a
//! field and is not kept in the value. While quoted, `""` is one literal
//! quote and the delimiter is literal. Outside quotes the delimiter ends
//! the field.
//!
//! So `"a,b"` reads as `a,b`, `"c""d"` as `c"d`, and `b"c,d"` as `bc,d`.
//!
//! Nothing here fails. An unterminated quote swallows the rest of the line
//! and is reported through [`LineScan::unterminated`].

use crate::cell::Cell;
use crate::data::Row;
use crate::delimiter::Delimiter;

/// Result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    /// Cells in source order. Never empty.
    pub cells: Row,
    /// Whether the line ended inside a quoted field.
    pub unterminated: bool,
}

/// Parse one line into cells.
///
/// Always yields `delimiter count outside quotes + 1` cells; an empty line
/// is a single empty cell spanning `0..0`.
///
/// ```
/// use vscsv_core::lex::parse_line;
/// use vscsv_core::Delimiter;
///
/// let row = parse_line(r#"a,"b ""quoted""",,"#, Delimiter::COMMA, 0);
/// let values: Vec<&str> = row.iter().map(|c| c.value.as_str()).collect();
/// assert_eq!(values, ["a", "b \"quoted\"", "", ""]);
/// ```
pub fn parse_line(line: &str, delimiter: Delimiter, line_index: usize) -> Row {
    scan_line(line, delimiter, line_index).cells
}

/// Parse one line, also reporting an unterminated quote.
pub fn scan_line(line: &str, delimiter: Delimiter, line_index: usize) -> LineScan {
    let delimiter = delimiter.as_char();
    let mut cells = Vec::new();
    let mut value = String::new();
    let mut quoted = false;
    let mut column_start = 0;
    let mut offset = 0;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if quoted && chars.peek() == Some(&'"') {
                chars.next();
                offset += 1;
                value.push('"');
            } else {
                quoted = !quoted;
            }
        } else if c == delimiter && !quoted {
            cells.push(Cell {
                value: std::mem::take(&mut value),
                line: line_index,
                column: column_start,
                column_end: offset,
            });
            column_start = offset + 1;
        } else {
            value.push(c);
        }
        offset += 1;
    }

    cells.push(Cell {
        value,
        line: line_index,
        column: column_start,
        column_end: offset,
    });

    LineScan {
        cells,
        unterminated: quoted,
    }
}
