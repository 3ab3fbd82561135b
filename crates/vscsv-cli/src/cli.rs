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

//! Command-line argument definitions.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// vscsv subcommands.
///
/// Every command that reads a file accepts `--delimiter` (a single
/// character or one of `comma`, `tab`, `semicolon`, `pipe`). Without it the
/// file extension decides, then the content is sniffed, then `,` is used.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a file parses and its rows line up with the header
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Fail when any row's width differs from the header's
        #[arg(short, long)]
        strict: bool,
    },

    /// Report structural problems
    Lint {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(short = 'W', long)]
        warn_error: bool,
    },

    /// Rewrite a file in canonical form
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,

        /// Field delimiter of the input
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Field delimiter of the output (defaults to the input's)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show how a file parses
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Print every cell with its position as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the preview update message as JSON
    Preview {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Send cell records with positions instead of plain values
        #[arg(long)]
        records: bool,

        /// Keep only the header and rows containing this text
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
    },

    /// Print the delimiter a file would be parsed with
    Detect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Run the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate {
                file,
                delimiter,
                strict,
            } => commands::validate(&file, delimiter.as_deref(), strict),
            Commands::Lint {
                file,
                delimiter,
                format,
                warn_error,
            } => commands::lint(&file, delimiter.as_deref(), &format, warn_error),
            Commands::Format {
                file,
                output,
                check,
                delimiter,
                to,
            } => commands::format(
                &file,
                output.as_deref(),
                check,
                delimiter.as_deref(),
                to.as_deref(),
            ),
            Commands::Inspect {
                file,
                delimiter,
                json,
            } => commands::inspect(&file, delimiter.as_deref(), json),
            Commands::Preview {
                file,
                delimiter,
                records,
                filter,
            } => commands::preview(&file, delimiter.as_deref(), records, filter.as_deref()),
            Commands::Detect { file } => commands::detect(&file),
        }
    }
}
