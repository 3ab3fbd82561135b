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

//! Document outline built from the header row.

use crate::position::TextRange;
use serde::{Deserialize, Serialize};
use vscsv_core::Data;

/// One outline entry per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSymbol {
    /// Header text, or `Column N` for a blank header.
    pub name: String,
    /// Zero-based column index.
    pub index: usize,
    /// Range of the header cell.
    pub range: TextRange,
}

/// Build column symbols from the header row.
///
/// An empty document (a single empty header cell) has no outline.
pub fn column_symbols(data: &Data) -> Vec<ColumnSymbol> {
    let headers = data.headers();
    if headers.len() == 1 && headers[0].value.is_empty() {
        return vec![];
    }
    headers
        .iter()
        .enumerate()
        .map(|(index, cell)| ColumnSymbol {
            name: if cell.value.trim().is_empty() {
                format!("Column {}", index + 1)
            } else {
                cell.value.clone()
            },
            index,
            range: TextRange::of_cell(cell),
        })
        .collect()
}
