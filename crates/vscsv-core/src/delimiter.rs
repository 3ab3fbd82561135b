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

//! Delimiter resolution and detection.
//!
//! A document's delimiter comes from one of three places, in order of
//! authority: an explicit caller choice, the document's [`ContentKind`]
//! (its editor language id or file extension), or [`detect_delimiter`]
//! sniffing the first few lines.

use crate::error::{DsvError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The single character separating fields on a line.
///
/// Quote and line break characters are rejected at construction, so every
/// `Delimiter` value produces an unambiguous grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "char", into = "char")
)]
pub struct Delimiter(char);

impl Delimiter {
    /// `,` (CSV).
    pub const COMMA: Delimiter = Delimiter(',');
    /// `\t` (TSV).
    pub const TAB: Delimiter = Delimiter('\t');
    /// `;`, common in locales that use `,` as decimal separator.
    pub const SEMICOLON: Delimiter = Delimiter(';');
    /// `|` (PSV).
    pub const PIPE: Delimiter = Delimiter('|');

    /// Create a delimiter, rejecting `"`, `\r` and `\n`.
    ///
    /// ```
    /// use vscsv_core::Delimiter;
    ///
    /// assert_eq!(Delimiter::new(';').unwrap(), Delimiter::SEMICOLON);
    /// assert!(Delimiter::new('"').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self> {
        match c {
            '"' | '\r' | '\n' => Err(DsvError::InvalidDelimiter(c)),
            _ => Ok(Self(c)),
        }
    }

    /// The delimiter character.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Parse a delimiter from command-line style text.
    ///
    /// Accepts a single character, or one of the names `comma`, `tab`,
    /// `semicolon`, `pipe` and the escape `\t`.
    pub fn from_name(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "comma" => return Ok(Self::COMMA),
            "tab" | "\\t" => return Ok(Self::TAB),
            "semicolon" => return Ok(Self::SEMICOLON),
            "pipe" => return Ok(Self::PIPE),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(DsvError::Other(format!(
                "delimiter must be a single character, got {:?}",
                s
            ))),
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl TryFrom<char> for Delimiter {
    type Error = DsvError;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> char {
        d.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\t' => write!(f, "\\t"),
            c => write!(f, "{}", c),
        }
    }
}

/// Declared kind of a delimited document.
///
/// Hosts supply this from the editor language id or the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ContentKind {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Pipe-separated values.
    Psv,
    /// Anything else.
    Unknown,
}

impl ContentKind {
    /// All supported kinds, in registration order.
    pub const SUPPORTED: [ContentKind; 3] = [ContentKind::Csv, ContentKind::Tsv, ContentKind::Psv];

    /// Map an editor language id. Matching is case-insensitive and never fails.
    ///
    /// ```
    /// use vscsv_core::ContentKind;
    ///
    /// assert_eq!(ContentKind::from_language_id("CSV"), ContentKind::Csv);
    /// assert_eq!(ContentKind::from_language_id("markdown"), ContentKind::Unknown);
    /// ```
    pub fn from_language_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "tsv" => Self::Tsv,
            "psv" => Self::Psv,
            _ => Self::Unknown,
        }
    }

    /// Map a file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "tsv" | "tab" => Self::Tsv,
            "psv" => Self::Psv,
            _ => Self::Unknown,
        }
    }

    /// Whether the kind has a known delimiter.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Language id string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Psv => "psv",
            Self::Unknown => "unknown",
        }
    }

    /// Shorthand for [`resolve_delimiter`].
    pub fn delimiter(self) -> Delimiter {
        resolve_delimiter(self)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a content kind to its delimiter.
///
/// Unknown kinds fall back to the default parser delimiter `,`.
///
/// ```
/// use vscsv_core::{resolve_delimiter, ContentKind, Delimiter};
///
/// assert_eq!(resolve_delimiter(ContentKind::Tsv), Delimiter::TAB);
/// assert_eq!(resolve_delimiter(ContentKind::Unknown), Delimiter::COMMA);
/// ```
pub fn resolve_delimiter(kind: ContentKind) -> Delimiter {
    match kind {
        ContentKind::Csv => Delimiter::COMMA,
        ContentKind::Tsv => Delimiter::TAB,
        ContentKind::Psv => Delimiter::PIPE,
        ContentKind::Unknown => Delimiter::default(),
    }
}

/// Number of non-empty lines sampled by [`detect_delimiter`].
const SNIFF_LINES: usize = 5;

/// Candidates in tie-break order.
const CANDIDATES: [Delimiter; 4] = [
    Delimiter::TAB,
    Delimiter::PIPE,
    Delimiter::SEMICOLON,
    Delimiter::COMMA,
];

/// Guess the delimiter of a document from its first lines.
///
/// A candidate qualifies when every sampled line contains it, outside of
/// quoted fields, the same non-zero number of times. The qualifying
/// candidate with the most fields per line wins; ties go to tab, then pipe,
/// then semicolon, then comma. Returns `None` when nothing qualifies.
///
/// ```
/// use vscsv_core::{detect_delimiter, Delimiter};
///
/// assert_eq!(detect_delimiter("a;b;c\n1;2;3"), Some(Delimiter::SEMICOLON));
/// assert_eq!(detect_delimiter("plain text"), None);
/// ```
pub fn detect_delimiter(text: &str) -> Option<Delimiter> {
    let sample: Vec<&str> = crate::lex::split_lines(text)
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    if sample.is_empty() {
        return None;
    }

    let mut best: Option<(Delimiter, usize)> = None;
    for candidate in CANDIDATES {
        let Some(count) = consistent_count(&sample, candidate.as_char()) else {
            continue;
        };
        // Strictly greater keeps the earlier candidate on ties.
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((candidate, count));
        }
    }

    best.map(|(delimiter, _)| delimiter)
}

fn consistent_count(lines: &[&str], delimiter: char) -> Option<usize> {
    let first = count_unquoted(lines[0], delimiter);
    if first == 0 {
        return None;
    }
    lines[1..]
        .iter()
        .all(|line| count_unquoted(line, delimiter) == first)
        .then_some(first)
}

fn count_unquoted(line: &str, delimiter: char) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
