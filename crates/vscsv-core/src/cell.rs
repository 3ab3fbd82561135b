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

//! Parsed cell with its source span.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One decoded field and where it came from.
///
/// `column` and `column_end` are zero-based character offsets into the
/// source line and cover the raw field, surrounding quotes included, so an
/// editor can highlight exactly what the user typed. Offsets count Unicode
/// scalar values, not bytes.
///
/// When serialized with the `serde` feature, the record shape is
/// `{value, line, column, columnEnd}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Cell {
    /// Decoded content: wrapping quotes removed, `""` collapsed to `"`.
    pub value: String,
    /// Zero-based source line.
    pub line: usize,
    /// Offset of the first character of the raw field.
    pub column: usize,
    /// Offset one past the last character of the raw field.
    pub column_end: usize,
}

impl Cell {
    /// Create a cell.
    pub fn new(value: impl Into<String>, line: usize, column: usize, column_end: usize) -> Self {
        Self {
            value: value.into(),
            line,
            column,
            column_end,
        }
    }

    /// The decoded value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Width of the raw span in characters.
    #[inline]
    pub fn span_len(&self) -> usize {
        self.column_end - self.column
    }

    /// Whether an editor position falls on this cell.
    ///
    /// The end offset is inclusive so that a caret resting right after the
    /// last character, or on the delimiter that follows, still resolves to
    /// the field it just left.
    pub fn contains(&self, line: usize, character: usize) -> bool {
        self.line == line && (self.column..=self.column_end).contains(&character)
    }
}

impl AsRef<str> for Cell {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Cell::new("abc", 0, 4, 7).span_len(), 3);
        assert_eq!(Cell::new("", 2, 0, 0).span_len(), 0);
    }

    #[test]
    fn test_contains_is_end_inclusive() {
        let cell = Cell::new("b", 1, 2, 3);
        assert!(cell.contains(1, 2));
        assert!(cell.contains(1, 3));
        assert!(!cell.contains(1, 1));
        assert!(!cell.contains(1, 4));
        assert!(!cell.contains(0, 2));
    }

    #[test]
    fn test_display_and_as_ref_use_value() {
        let cell = Cell::new("c\"d", 0, 0, 6);
        assert_eq!(cell.to_string(), "c\"d");
        assert_eq!(AsRef::<str>::as_ref(&cell), "c\"d");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_record_shape() {
        let cell = Cell::new("x", 3, 1, 2);
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["columnEnd"], 2);
        assert_eq!(json["value"], "x");
    }
}
