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

//! Compatibility with the `csv` crate on newline-free fields.
//!
//! Output written by vscsv must read back identically through `csv`, and
//! output written by `csv` must parse identically through vscsv.

use proptest::prelude::*;
use vscsv_core::{parse, serialize, Delimiter};

fn read_with_csv(text: &str, delimiter: u8) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn write_with_csv(rows: &[Vec<String>], delimiter: u8) -> String {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Parse text that ends with a terminator, dropping the empty final row.
fn parse_terminated(text: &str, delimiter: Delimiter) -> Vec<Vec<String>> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    parse(body, delimiter).to_values()
}

#[test]
fn test_csv_reads_our_quoting() {
    let rows = vec![
        vec!["id".to_string(), "note".to_string()],
        vec!["1".to_string(), "a, \"quoted\" note".to_string()],
        vec!["2".to_string(), String::new()],
    ];
    let text = serialize(&rows, Delimiter::COMMA);
    assert_eq!(read_with_csv(&text, b','), rows);
}

#[test]
fn test_we_read_csv_quoting() {
    let rows = vec![
        vec!["x;y".to_string(), "\"".to_string()],
        vec![String::new(), "plain".to_string()],
    ];
    let text = write_with_csv(&rows, b';');
    assert_eq!(parse_terminated(&text, Delimiter::SEMICOLON), rows);
}

#[test]
fn test_single_empty_field_record() {
    // csv quotes a lone empty field so the record is not a blank line.
    let rows = vec![vec![String::new()], vec!["a".to_string()]];
    let text = write_with_csv(&rows, b',');
    assert_eq!(parse_terminated(&text, Delimiter::COMMA), rows);
}

fn grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    // csv skips blank lines, so every row needs a non-empty first field.
    let row = ("[a-c\"]{1,4}", prop::collection::vec("[a-c ,\"\t]{0,5}", 0..4)).prop_map(
        |(first, rest)| {
            let mut row = vec![first];
            row.extend(rest);
            row
        },
    );
    prop::collection::vec(row, 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_csv_agrees_with_serialize(rows in grid()) {
        let text = serialize(&rows, Delimiter::COMMA);
        prop_assert_eq!(read_with_csv(&text, b','), rows);
    }

    #[test]
    fn prop_parse_agrees_with_csv_writer(rows in grid()) {
        let text = write_with_csv(&rows, b'\t');
        prop_assert_eq!(parse_terminated(&text, Delimiter::TAB), rows);
    }
}
