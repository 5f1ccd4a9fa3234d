//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vet.
//! The Vet project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Report Rendering Tests
//!
//! Tests for template interpolation, the four report modes, HTML span
//! wrapping and joined output, driven through full validation runs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test report
//! ```

use serde_json::json;
use vetx::{VetEngine, VetRenderedReport, VetReportFormat, VetSpanAttrs};

fn failing_engine() -> VetEngine {
    let mut engine = VetEngine::new();
    engine
        .set_validations([
            ("age", "minnumeric:18"),
            ("color", "inlist:red,green,blue"),
        ])
        .unwrap();
    engine
}

/// Plain mode renders bare interpolated messages in failure order.
#[test]
fn test_plain_mode() {
    let engine = failing_engine();
    let report = engine
        .validate(&json!({"age": "10", "color": "mauve"}))
        .unwrap();

    let messages = report.render(VetReportFormat::Plain).messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("Age"));
    assert!(messages[0].contains("18"));
    assert!(messages[1].contains("red, green, blue"));
}

/// Field-keyed mode pairs each message with its field path.
#[test]
fn test_field_keyed_mode() {
    let engine = failing_engine();
    let report = engine
        .validate(&json!({"age": "10", "color": "mauve"}))
        .unwrap();

    match report.render(VetReportFormat::FieldsAndPlain) {
        VetRenderedReport::FieldMessages(pairs) => {
            assert_eq!(pairs[0].0, "age");
            assert_eq!(pairs[1].0, "color");
        }
        other => panic!("unexpected rendering: {other:?}"),
    }
}

/// HTML mode wraps configured elements in span tags.
#[test]
fn test_html_mode_spans() {
    let mut engine = failing_engine();
    engine.set_error_spans(VetSpanAttrs {
        errormsg: "class=\"error\"".to_string(),
        field: "class=\"field\"".to_string(),
        arg: "class=\"arg\"".to_string(),
        ..VetSpanAttrs::default()
    });

    let report = engine.validate(&json!({"age": "10"})).unwrap();
    let messages = report.render(VetReportFormat::Html).messages();
    assert!(messages[0].starts_with("<span class=\"error\">"));
    assert!(messages[0].contains("<span class=\"field\">Age</span>"));
    assert!(messages[0].contains("<span class=\"arg\">18</span>"));

    // plain mode from the same report stays unwrapped
    let plain = report.render(VetReportFormat::Plain).messages();
    assert!(!plain[0].contains("<span"));
}

/// The args delimiter configured on the engine joins `{args}`.
#[test]
fn test_args_delimiter() {
    let mut engine = VetEngine::new();
    engine.set_args_delimiter(" / ");
    engine
        .set_validations([("color", "inlist:red,green,blue")])
        .unwrap();

    let report = engine.validate(&json!({"color": "mauve"})).unwrap();
    let messages = report.render(VetReportFormat::Plain).messages();
    assert!(messages[0].contains("red / green / blue"));
}

/// Joined rendering concatenates messages with the given delimiter.
#[test]
fn test_render_joined() {
    let engine = failing_engine();
    let report = engine
        .validate(&json!({"age": "10", "color": "mauve"}))
        .unwrap();

    let joined = report.render_joined(VetReportFormat::Plain, "<br>");
    assert_eq!(joined.matches("<br>").count(), 1);
}

/// An empty string value renders as the literal `empty`.
#[test]
fn test_empty_value_literal() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("v", "minlen:2;'{value} is shorter than {arg1}'")])
        .unwrap();

    let report = engine.validate(&json!({"v": ""})).unwrap();
    assert_eq!(
        report.render(VetReportFormat::Plain).messages(),
        vec!["empty is shorter than 2"]
    );
}
