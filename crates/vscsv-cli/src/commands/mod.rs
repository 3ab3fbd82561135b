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

//! CLI command implementations

mod detect;
mod format;
mod inspect;
mod lint;
mod preview;
mod validate;

pub use detect::detect;
pub use format::format;
pub use inspect::inspect;
pub use lint::lint;
pub use preview::preview;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;
use vscsv_core::{detect_delimiter, ContentKind, Delimiter};

/// Default maximum input size (1 GiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "VSCSV_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file, refusing anything larger than the configured cap.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write to `path`, or stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Content kind implied by a file name's extension.
pub fn kind_for_path(path: &str) -> ContentKind {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(ContentKind::from_extension)
        .unwrap_or(ContentKind::Unknown)
}

/// Where a resolved delimiter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSource {
    Flag,
    Extension,
    Detected,
    Default,
}

impl DelimiterSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DelimiterSource::Flag => "flag",
            DelimiterSource::Extension => "extension",
            DelimiterSource::Detected => "detected",
            DelimiterSource::Default => "default",
        }
    }
}

/// Pick the delimiter for a file: the explicit flag, then the extension,
/// then sniffing the content, then `,`.
pub fn resolve_file_delimiter(
    path: &str,
    text: &str,
    flag: Option<&str>,
) -> Result<(Delimiter, DelimiterSource), CliError> {
    let resolved = if let Some(name) = flag {
        (Delimiter::from_name(name)?, DelimiterSource::Flag)
    } else {
        let kind = kind_for_path(path);
        if kind.is_supported() {
            (kind.delimiter(), DelimiterSource::Extension)
        } else if let Some(d) = detect_delimiter(text) {
            (d, DelimiterSource::Detected)
        } else {
            (Delimiter::default(), DelimiterSource::Default)
        }
    };
    debug!(path, delimiter = %resolved.0, source = resolved.1.as_str(), "delimiter resolved");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_path() {
        assert_eq!(kind_for_path("a/b/data.TSV"), ContentKind::Tsv);
        assert_eq!(kind_for_path("data.csv"), ContentKind::Csv);
        assert_eq!(kind_for_path("data.txt"), ContentKind::Unknown);
        assert_eq!(kind_for_path("Makefile"), ContentKind::Unknown);
    }

    #[test]
    fn test_resolution_order() {
        let text = "a;b\n1;2";
        assert_eq!(
            resolve_file_delimiter("x.tsv", text, Some("pipe")).unwrap(),
            (Delimiter::PIPE, DelimiterSource::Flag)
        );
        assert_eq!(
            resolve_file_delimiter("x.tsv", text, None).unwrap(),
            (Delimiter::TAB, DelimiterSource::Extension)
        );
        assert_eq!(
            resolve_file_delimiter("x.txt", text, None).unwrap(),
            (Delimiter::SEMICOLON, DelimiterSource::Detected)
        );
        assert_eq!(
            resolve_file_delimiter("x.txt", "plain", None).unwrap(),
            (Delimiter::COMMA, DelimiterSource::Default)
        );
    }

    #[test]
    fn test_bad_flag() {
        assert!(matches!(
            resolve_file_delimiter("x.csv", "", Some("\"")),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_file("/definitely/not/here.csv"),
            Err(CliError::Io { .. })
        ));
    }
}
