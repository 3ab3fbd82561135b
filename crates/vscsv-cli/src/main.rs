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

//! vscsv command line interface

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vscsv_cli::cli::Commands;

/// vscsv - validate, lint and format delimiter-separated files
///
/// # Examples
///
/// ```bash
/// # Check a file and fail on ragged rows
/// vscsv validate data.csv --strict
///
/// # Convert CSV to TSV
/// vscsv format data.csv --to tab -o data.tsv
///
/// # Which delimiter would be used?
/// vscsv detect export.txt
/// ```
#[derive(Parser)]
#[command(name = "vscsv")]
#[command(author, version, about = "vscsv - delimiter-separated value tooling", long_about = None)]
struct Cli {
    /// Log parser and command activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Log to stderr. `RUST_LOG` wins over the default level.
///
/// The `vscsv` directive is a target prefix, so it covers every workspace
/// crate.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vscsv={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
