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

//! vscsv CLI library.
//!
//! Command implementations for the `vscsv` binary. Each command reads one
//! file, resolves its delimiter and works on the parsed table.
//!
//! - **validate**: parse under limits and report ragged rows
//! - **lint**: structural diagnostics as text or JSON
//! - **format**: canonical re-serialization, with optional delimiter conversion
//! - **inspect**: table summary or positioned cell records
//! - **preview**: the JSON message a tabular preview receives
//! - **detect**: which delimiter would be used, and why
//!
//! # Examples
//!
//! ```no_run
//! use vscsv_cli::commands::{format, validate};
//!
//! # fn main() -> Result<(), vscsv_cli::CliError> {
//! validate("people.csv", None, true)?;
//! format("people.csv", Some("people.tsv"), false, None, Some("tab"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
