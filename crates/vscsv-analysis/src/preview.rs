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

//! Messages exchanged with a tabular preview.
//!
//! The preview runs behind a message-passing boundary and only ever
//! receives data. Messages are JSON objects of the form
//! `{"command": ..., "data": ...}`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use vscsv_core::{Cell, Data};

/// Table payload: plain values, or cell records with positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviewPayload {
    Values(Vec<Vec<String>>),
    Records(Vec<Vec<Cell>>),
}

/// Host to preview.
///
/// ```
/// use vscsv_analysis::PreviewMessage;
/// use vscsv_core::{parse, Delimiter};
///
/// let data = parse("a,b\n1,2", Delimiter::COMMA);
/// let json = PreviewMessage::values(&data).to_json().unwrap();
/// assert_eq!(json, r#"{"command":"update","data":[["a","b"],["1","2"]]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "lowercase")]
pub enum PreviewMessage {
    Update(PreviewPayload),
}

impl PreviewMessage {
    /// `update` with decoded values.
    pub fn values(data: &Data) -> Self {
        Self::Update(PreviewPayload::Values(data.to_values()))
    }

    /// `update` with `{value,line,column,columnEnd}` records.
    pub fn records(data: &Data) -> Self {
        Self::Update(PreviewPayload::Records(data.rows().to_vec()))
    }

    /// `update` with only the header and rows matching `query`.
    pub fn filtered(data: &Data, query: &str) -> Self {
        Self::Update(PreviewPayload::Values(filter_rows(data, query)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Preview to host.
///
/// ```
/// use vscsv_analysis::WebviewMessage;
///
/// let msg = WebviewMessage::from_json(r#"{"command":"ready","data":true}"#).unwrap();
/// assert_eq!(msg, WebviewMessage::Ready(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "lowercase")]
pub enum WebviewMessage {
    /// The preview hit an error it cannot recover from.
    Error(String),
    /// The preview finished loading and can receive data.
    Ready(bool),
}

impl WebviewMessage {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Keep the header plus every row with a cell containing `query`.
///
/// Matching is a case-insensitive substring test; an empty or blank query
/// keeps every row.
pub fn filter_rows(data: &Data, query: &str) -> Vec<Vec<String>> {
    let query = query.trim().to_lowercase();
    data.iter()
        .enumerate()
        .filter(|(i, row)| {
            *i == 0
                || query.is_empty()
                || row
                    .iter()
                    .any(|cell| cell.value.to_lowercase().contains(&query))
        })
        .map(|(_, row)| row.iter().map(|cell| cell.value.clone()).collect())
        .collect()
}
