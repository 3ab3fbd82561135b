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

//! Position-aware parser and serializer for delimiter-separated values.
//!
//! This crate turns CSV, TSV and other single-character-delimited text into
//! a [`Data`] model in which every [`Cell`] remembers the line and character
//! span it came from. Editors build highlighting, hover, outline and
//! diagnostics on top of those spans.
//!
//! # Parsing
//!
//! ```
//! use vscsv_core::{parse, Delimiter};
//!
//! let data = parse("name,quote\nAda,\"said \"\"hi\"\"\"", Delimiter::COMMA);
//!
//! assert_eq!(data.get_header(1).unwrap().value, "quote");
//! let cell = data.get_cell(1, 1).unwrap();
//! assert_eq!(cell.value, "said \"hi\"");
//! assert_eq!((cell.line, cell.column, cell.column_end), (1, 4, 17));
//! ```
//!
//! # Serializing
//!
//! ```
//! use vscsv_core::{parse, serialize, Delimiter};
//!
//! let data = parse("a,\"b,c\"", Delimiter::COMMA);
//! assert_eq!(data.serialize(), "a,\"b,c\"");
//! assert_eq!(serialize(data.rows(), Delimiter::TAB), "a\tb,c");
//! ```
//!
//! # Choosing a delimiter
//!
//! ```
//! use vscsv_core::{detect_delimiter, resolve_delimiter, ContentKind, Delimiter};
//!
//! assert_eq!(resolve_delimiter(ContentKind::from_language_id("tsv")), Delimiter::TAB);
//! assert_eq!(detect_delimiter("a|b\nc|d"), Some(Delimiter::PIPE));
//! ```
//!
//! # Known limitation
//!
//! Lines are split before quotes are interpreted, so a line break inside a
//! quoted field starts a new row. See [`lex`].

mod cell;
mod data;
mod delimiter;
mod error;
pub mod lex;
mod limits;
mod parser;
mod serialize;

pub use cell::Cell;
pub use data::{ragged_rows, Data, RaggedRow, Row};
pub use delimiter::{detect_delimiter, resolve_delimiter, ContentKind, Delimiter};
pub use error::{DsvError, LimitKind, Result};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser, ParserConfig};
pub use serialize::{needs_quoting, quote_field, serialize, serialize_to_writer};
