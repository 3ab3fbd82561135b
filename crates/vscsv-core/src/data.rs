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

//! Tabular data model produced by a parse.
//!
//! [`Data`] is an ordered list of rows, row 0 doubling as the header row.
//! Every accessor is total: out-of-range lookups return `None` and negative
//! indices count from the end, so `-1` is the last row (or, for
//! [`Data::get_column`], the last cell of each row independently).

use crate::cell::Cell;
use crate::delimiter::Delimiter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One source line worth of cells, in column order.
pub type Row = Vec<Cell>;

/// Resolve a possibly negative index against a length.
#[inline]
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        (i < len).then_some(i)
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

/// Parsed document.
///
/// Created fresh by every [`parse`](crate::parse) call and never mutated
/// afterwards, so it can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Data {
    rows: Vec<Row>,
    delimiter: Delimiter,
}

impl Data {
    /// Assemble a model from already parsed rows.
    pub fn new(rows: Vec<Row>, delimiter: Delimiter) -> Self {
        Self { rows, delimiter }
    }

    /// Delimiter the model was parsed with.
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the model holds no rows at all.
    ///
    /// A parsed document is never empty; even `""` yields one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in line order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// The header row (row 0), or an empty slice for an empty model.
    pub fn headers(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of header cells.
    pub fn column_count(&self) -> usize {
        self.headers().len()
    }

    /// Row at `index`; negative indices count from the end.
    pub fn get_row(&self, index: isize) -> Option<&Row> {
        resolve_index(index, self.rows.len()).map(|i| &self.rows[i])
    }

    /// For every row, the cell at `index`.
    ///
    /// Negative indices are resolved against each row's own length, so
    /// `get_column(-1)` is the last cell of every row even when rows are
    /// ragged.
    pub fn get_column(&self, index: isize) -> Vec<Option<&Cell>> {
        self.rows
            .iter()
            .map(|row| resolve_index(index, row.len()).map(|i| &row[i]))
            .collect()
    }

    /// Cell at (`row`, `column`); both indices accept negative values.
    pub fn get_cell(&self, row: isize, column: isize) -> Option<&Cell> {
        let row = self.get_row(row)?;
        resolve_index(column, row.len()).map(|i| &row[i])
    }

    /// Header cell for `column`; negative indices count from the end.
    pub fn get_header(&self, column: isize) -> Option<&Cell> {
        let headers = self.headers();
        resolve_index(column, headers.len()).map(|i| &headers[i])
    }

    /// Visit every cell in row-major order with its row and column index.
    pub fn for_each_cell<F>(&self, mut f: F)
    where
        F: FnMut(&Cell, usize, usize),
    {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                f(cell, r, c);
            }
        }
    }

    /// Cell whose raw span covers an editor position.
    ///
    /// Returns `(row, column, cell)`. Rows map one-to-one to source lines.
    /// When a caret sits on a delimiter the cell to its left wins.
    pub fn cell_at(&self, line: usize, character: usize) -> Option<(usize, usize, &Cell)> {
        let row = self.rows.get(line)?;
        row.iter()
            .enumerate()
            .find(|(_, cell)| cell.contains(line, character))
            .map(|(c, cell)| (line, c, cell))
    }

    /// Decoded values only, dropping positions.
    pub fn to_values(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.value.clone()).collect())
            .collect()
    }

    /// Render back to text with the model's own delimiter.
    pub fn serialize(&self) -> String {
        crate::serialize::serialize(&self.rows, self.delimiter)
    }

    /// Rows whose width differs from the header. See [`ragged_rows`].
    pub fn ragged_rows(&self) -> Vec<RaggedRow> {
        ragged_rows(self)
    }

    /// Consume the model, returning its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A row whose cell count differs from the header's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaggedRow {
    /// Zero-based row index, always > 0.
    pub row: usize,
    /// Header cell count.
    pub expected: usize,
    /// This row's cell count.
    pub actual: usize,
}

/// Find every row after the header whose length differs from the header's.
///
/// Pure; an empty model or a header-only model reports nothing.
///
/// ```
/// use vscsv_core::{parse, ragged_rows, Delimiter, RaggedRow};
///
/// let data = parse("a,b,c\nd,e\nf", Delimiter::COMMA);
/// assert_eq!(
///     ragged_rows(&data),
///     [
///         RaggedRow {
///             row: 1,
///             expected: 3,
///             actual: 2,
///         },
///         RaggedRow {
///             row: 2,
///             expected: 3,
///             actual: 1,
///         },
///     ]
/// );
/// ```
pub fn ragged_rows(data: &Data) -> Vec<RaggedRow> {
    let expected = data.column_count();
    data.iter()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| row.len() != expected)
        .map(|(row, cells)| RaggedRow {
            row,
            expected,
            actual: cells.len(),
        })
        .collect()
}
