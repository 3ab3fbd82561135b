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

//! Lexical layer: line splitting and the per-line field scanner.
//!
//! - [`lines`] - splits a document into logical lines on `\r\n` or `\n`
//! - [`row`] - scans one line into [`Cell`](crate::Cell)s with quoting and
//!   doubled-quote escaping
//!
//! Lines are split before quotes are considered, so a line break inside a
//! quoted field ends the row. The open quote is then absorbed to the end of
//! that line.
//!
//! # Examples
//!
//! ```
//! use vscsv_core::lex::{parse_line, split_lines};
//! use vscsv_core::Delimiter;
//!
//! let lines: Vec<_> = split_lines("id,name\r\n1,\"Smith, J\"").collect();
//! assert_eq!(lines, ["id,name", "1,\"Smith, J\""]);
//!
//! let row = parse_line(lines[1], Delimiter::COMMA, 1);
//! assert_eq!(row[1].value, "Smith, J");
//! assert_eq!((row[1].column, row[1].column_end), (2, 12));
//! ```

pub mod lines;
pub mod row;

pub use lines::{split_lines, Lines};
pub use row::{parse_line, scan_line, LineScan};
