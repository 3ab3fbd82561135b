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

//! Rendering rows back to delimited text.
//!
//! A field is quoted only when it has to be: when its value contains the
//! delimiter, a `"`, or a line break. Embedded quotes are then doubled.
//! Rows are always joined with `\n`, whatever line endings the source used.

use crate::delimiter::Delimiter;
use crate::error::Result;
use std::borrow::Cow;
use std::io::Write;

/// Whether a value must be wrapped in quotes to survive a re-parse.
#[inline]
pub fn needs_quoting(value: &str, delimiter: Delimiter) -> bool {
    let delimiter = delimiter.as_char();
    value
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r')
}

/// Quote a single field if needed.
///
/// ```
/// use vscsv_core::{quote_field, Delimiter};
///
/// assert_eq!(quote_field("plain", Delimiter::COMMA), "plain");
/// assert_eq!(quote_field("c,d", Delimiter::COMMA), "\"c,d\"");
/// assert_eq!(quote_field("c\"d", Delimiter::COMMA), "\"c\"\"d\"");
/// assert_eq!(quote_field("c,d", Delimiter::TAB), "c,d");
/// ```
pub fn quote_field(value: &str, delimiter: Delimiter) -> Cow<'_, str> {
    if !needs_quoting(value, delimiter) {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn push_row<C: AsRef<str>>(out: &mut String, row: &[C], delimiter: Delimiter) {
    for (i, field) in row.iter().enumerate() {
        if i > 0 {
            out.push(delimiter.as_char());
        }
        out.push_str(&quote_field(field.as_ref(), delimiter));
    }
}

/// Render rows as delimited text.
///
/// Accepts parsed rows (`&[Row]`) as well as plain string grids, so callers
/// that edit values can serialize without rebuilding cells.
///
/// ```
/// use vscsv_core::{serialize, Delimiter};
///
/// let text = serialize(&[vec!["a", "b", "c,d"]], Delimiter::COMMA);
/// assert_eq!(text, "a,b,\"c,d\"");
///
/// let text = serialize(&[vec!["a", "b", "c"], vec![""], vec!["1", "2", "3"]], Delimiter::COMMA);
/// assert_eq!(text, "a,b,c\n\n1,2,3");
/// ```
pub fn serialize<R, C>(rows: &[R], delimiter: Delimiter) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_row(&mut out, row.as_ref(), delimiter);
    }
    out
}

/// Stream rows to a writer, one line at a time.
///
/// Produces byte-for-byte the same output as [`serialize`].
pub fn serialize_to_writer<W, R, C>(mut writer: W, rows: &[R], delimiter: Delimiter) -> Result<()>
where
    W: Write,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut line = String::new();
    for (i, row) in rows.iter().enumerate() {
        line.clear();
        if i > 0 {
            line.push('\n');
        }
        push_row(&mut line, row.as_ref(), delimiter);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
