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

//! Logical line splitting.

use std::iter::Peekable;
use std::str::Split;

/// Iterator over the lines of a document.
///
/// Created by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    segments: Peekable<Split<'a, char>>,
}

/// Split text on `\r\n` or `\n`.
///
/// Unlike [`str::lines`], a trailing line break yields a final empty line
/// and an empty document yields one empty line, so that the line index of
/// every item equals its row index in the parsed model. A `\r` is only
/// consumed as part of `\r\n`; a lone `\r` stays in the content.
///
/// ```
/// use vscsv_core::lex::split_lines;
///
/// assert_eq!(split_lines("").collect::<Vec<_>>(), [""]);
/// assert_eq!(split_lines("a\r\nb\n").collect::<Vec<_>>(), ["a", "b", ""]);
/// ```
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines {
        segments: text.split('\n').peekable(),
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let segment = self.segments.next()?;
        if self.segments.peek().is_some() {
            Some(segment.strip_suffix('\r').unwrap_or(segment))
        } else {
            Some(segment)
        }
    }
}
