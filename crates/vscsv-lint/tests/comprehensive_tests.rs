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

//! End-to-end lint tests over realistic documents.

use proptest::prelude::*;
use vscsv_core::{parse, ragged_rows, Delimiter};
use vscsv_lint::{
    lint, lint_text, DiagnosticKind, LintConfig, LintContext, LintRunner, RaggedRowRule, Severity,
};

const INVENTORY: &str = "\
sku,name,qty,price
A-1,\"Widget, large\",4,9.99
A-2,Gadget,2
A-3,\"Thing \"\"Pro\"\"\",1,19.00
A-4,\"Broken,3,1.00
";

#[test]
fn test_inventory_diagnostics() {
    let diagnostics = lint_text(INVENTORY, Delimiter::COMMA);
    let summary: Vec<(String, Option<usize>)> = diagnostics
        .iter()
        .map(|d| (d.rule_id().to_string(), d.line()))
        .collect();

    // Line 4 absorbs the rest of the line into one field, so it is both
    // unterminated and ragged.
    assert!(summary.contains(&("ragged-row".to_string(), Some(2))));
    assert!(summary.contains(&("ragged-row".to_string(), Some(4))));
    assert!(summary.contains(&("unterminated-quote".to_string(), Some(4))));
    assert_eq!(diagnostics.len(), 3);
}

#[test]
fn test_inventory_strict_mode() {
    let data = parse(INVENTORY, Delimiter::COMMA);
    let mut config = LintConfig::default();
    config.set_rule_error(RaggedRowRule::ID);
    let runner = LintRunner::new(config);
    let diagnostics = runner.run_with_context(&data, &LintContext::from_text(INVENTORY));

    assert!(LintRunner::has_errors(&diagnostics));
    assert_eq!(diagnostics[0].severity(), Severity::Error);
    assert_eq!(diagnostics.last().map(|d| d.severity()), Some(Severity::Warning));
}

#[test]
fn test_ragged_range_spans_row() {
    let diagnostics = lint(&parse("a,b,c\n\"x\",yy", Delimiter::COMMA));
    assert_eq!(diagnostics[0].columns(), Some((0, 6)));
}

#[test]
fn test_header_problems_are_hints() {
    let diagnostics = lint(&parse("id,,id\n1,2,3", Delimiter::COMMA));
    assert!(diagnostics.iter().all(|d| d.severity() == Severity::Hint));
    let kinds: Vec<&DiagnosticKind> = diagnostics.iter().map(|d| d.kind()).collect();
    assert!(kinds.contains(&&DiagnosticKind::DuplicateHeader));
    assert!(kinds.contains(&&DiagnosticKind::EmptyHeader));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Strict ragged-row diagnostics correspond one-to-one with ragged rows.
    #[test]
    fn prop_ragged_diagnostics_match_core(text in "[ab,\n]{0,40}") {
        let data = parse(&text, Delimiter::COMMA);
        let rule = RaggedRowRule { ignore_trailing_blank: false };
        let runner = LintRunner::with_rules(LintConfig::default(), vec![Box::new(rule)]);
        let lines: Vec<usize> = runner.run(&data).iter().filter_map(|d| d.line()).collect();
        let expected: Vec<usize> = ragged_rows(&data).iter().map(|r| r.row).collect();
        prop_assert_eq!(lines, expected);
    }
}
