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

//! Hover information for cells.
//!
//! Hovering a cell shows the raw source line and the cell's one-based
//! coordinates, with the column's header name when it has one:
//!
//! ```text
//! 1,"Smith, J",42
//! Row: 2, Column: 2 (name)
//! ```

use crate::position::{Position, TextRange};
use serde::{Deserialize, Serialize};
use vscsv_core::Data;

/// Hover contents and the range they describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// Lines of markdown, rendered in order.
    pub contents: Vec<String>,
    /// Raw span of the hovered cell.
    pub range: TextRange,
}

/// Hover for the cell under `position`.
///
/// `line_text` is the raw source line at `position.line`. Returns `None`
/// when no cell covers the position.
pub fn hover_at(data: &Data, line_text: &str, position: Position) -> Option<Hover> {
    let (row, column, cell) = data.cell_at(position.line, position.character)?;
    let header = data.get_header(column as isize).map(|h| h.value.as_str());
    Some(Hover {
        contents: hover_contents(line_text, row, column, header),
        range: TextRange::of_cell(cell),
    })
}

/// Build the two hover lines.
pub fn hover_contents(
    line_text: &str,
    row: usize,
    column: usize,
    header: Option<&str>,
) -> Vec<String> {
    let header = match header {
        Some(name) if !name.is_empty() => format!(" ({})", name),
        _ => String::new(),
    };
    vec![
        line_text.to_string(),
        format!("Row: {}, Column: {}{}", row + 1, column + 1, header),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vscsv_core::{parse, Delimiter};

    #[test]
    fn test_hover_contents_with_header() {
        assert_eq!(
            hover_contents("a,b", 1, 0, Some("id")),
            ["a,b", "Row: 2, Column: 1 (id)"]
        );
    }

    #[test]
    fn test_hover_contents_without_header() {
        assert_eq!(hover_contents("x", 0, 3, None)[1], "Row: 1, Column: 4");
        assert_eq!(hover_contents("x", 0, 3, Some(""))[1], "Row: 1, Column: 4");
    }

    #[test]
    fn test_hover_at_quoted_cell() {
        let data = parse("id,name\n1,\"Smith, J\"", Delimiter::COMMA);
        let hover = hover_at(&data, "1,\"Smith, J\"", Position::new(1, 6)).unwrap();
        assert_eq!(hover.contents[1], "Row: 2, Column: 2 (name)");
        assert_eq!(hover.range, TextRange::on_line(1, 2, 12));
    }

    #[test]
    fn test_hover_beyond_ragged_header() {
        let data = parse("a\nb,c", Delimiter::COMMA);
        let hover = hover_at(&data, "b,c", Position::new(1, 2)).unwrap();
        assert_eq!(hover.contents[1], "Row: 2, Column: 2");
    }

    #[test]
    fn test_hover_outside_cells() {
        let data = parse("a,b", Delimiter::COMMA);
        assert!(hover_at(&data, "a,b", Position::new(0, 10)).is_none());
        assert!(hover_at(&data, "", Position::new(3, 0)).is_none());
    }
}
