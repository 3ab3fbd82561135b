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

//! Feature toggles.

use serde::{Deserialize, Serialize};

/// Which editor features are active.
///
/// Deserializes from the host's configuration object; missing keys keep
/// their default of `true`.
///
/// ```
/// use vscsv_analysis::Settings;
///
/// let settings = Settings::from_json(r#"{"enableDiagnostics": false}"#).unwrap();
/// assert!(!settings.enable_diagnostics);
/// assert!(settings.enable_hover_information);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub enable_syntax_highlighting: bool,
    pub enable_document_symbols: bool,
    pub enable_hover_information: bool,
    pub enable_diagnostics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_syntax_highlighting: true,
            enable_document_symbols: true,
            enable_hover_information: true,
            enable_diagnostics: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON object.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let s = Settings::default();
        assert!(s.enable_syntax_highlighting);
        assert!(s.enable_document_symbols);
        assert!(s.enable_hover_information);
        assert!(s.enable_diagnostics);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"enableSyntaxHighlighting\":true"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(Settings::from_json("{\"enableDiagnostics\": 1}").is_err());
    }
}
