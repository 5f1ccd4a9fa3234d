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

//! # Vet Engine Tests
//!
//! End-to-end tests for the sanitization and validation pipelines:
//! registration order, skip windows, presence checks, custom filters and
//! declarative rule-map seeding.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test engine
//! ```

use serde_json::json;
use vetx::{VetEngine, VetReportFormat, VetRuleSet};

/// A failing numeric bound produces exactly one entry while the earlier
/// steps of the chain pass.
#[test]
fn test_minnumeric_failure_reports_single_entry() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("age", "required|integer|minnumeric:18")])
        .unwrap();

    let report = engine.validate(&json!({"age": "17"})).unwrap();
    assert!(!report.passed());
    assert_eq!(report.entries().len(), 1);

    let entry = &report.entries()[0];
    assert_eq!(entry.filter, "minnumeric");
    assert_eq!(entry.value, "17");

    let messages = report.render(VetReportFormat::Plain).messages();
    assert!(messages[0].contains("18"));
    assert!(messages[0].contains("Age"));
}

/// A missing field fails `required` only; later filters are vacuous.
#[test]
fn test_missing_field_fails_required_only() {
    let mut engine = VetEngine::new();
    engine.set_validations([("email", "required|email")]).unwrap();

    let report = engine.validate(&json!({})).unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].filter, "required");
}

/// Without `required`/`notempty` in the chain, an absent field passes.
#[test]
fn test_absent_field_is_vacuously_valid() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("nickname", "minlen:3|alphabetic")])
        .unwrap();

    let report = engine.validate(&json!({})).unwrap();
    assert!(report.passed());
}

/// Nested paths resolve through intermediate objects.
#[test]
fn test_nested_path_validation() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("address.zip", "exactlen:5")])
        .unwrap();

    let report = engine
        .validate(&json!({"address": {"zip": "123"}}))
        .unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].field, "address.zip");
    assert_eq!(report.entries()[0].label, "Zip");
}

/// Sanitize-then-validate equals validate on the sanitized value.
#[test]
fn test_pipelines_compose_left_to_right() {
    let mut engine = VetEngine::new();
    engine
        .set_sanitizations([("email", "trim|lowercase")])
        .unwrap()
        .set_validations([("email", "required|email")])
        .unwrap();

    let mut input = json!({"email": "  Foo@Bar.com  "});
    let report = engine.run(&mut input).unwrap();

    assert!(report.passed());
    assert_eq!(input["email"], "foo@bar.com");

    let direct = engine.validate(&json!({"email": "foo@bar.com"})).unwrap();
    assert_eq!(direct.passed(), report.passed());
}

/// `skip` with no argument abandons the rest of the chain for the run.
#[test]
fn test_skip_all_aborts_chain() {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", "skip|fail")]).unwrap();
    assert!(engine.validate(&json!({"v": "x"})).unwrap().passed());

    let mut engine = VetEngine::new();
    engine.set_validations([("v", "skip:all|fail")]).unwrap();
    assert!(engine.validate(&json!({"v": "x"})).unwrap().passed());
}

/// `skip:2` skips exactly the next two steps then resumes.
#[test]
fn test_skip_count_resumes_after_window() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("v", "skip:2|fail|fail|maxlen:1")])
        .unwrap();

    let report = engine.validate(&json!({"v": "toolong"})).unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].filter, "maxlen");
}

/// A non-numeric skip count skips nothing.
#[test]
fn test_skip_bad_count_is_zero() {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", "skip:x|fail")]).unwrap();
    let report = engine.validate(&json!({"v": "x"})).unwrap();
    assert_eq!(report.entries().len(), 1);
}

/// Custom validation defaults its registered message.
#[test]
fn test_custom_validation_with_default_message() {
    let mut engine = VetEngine::new();
    engine
        .add_custom_validation(
            "oddnumber",
            Box::new(|value, _args| {
                value
                    .as_str()
                    .and_then(|s| s.parse::<i64>().ok())
                    .or_else(|| value.as_i64())
                    .map(|n| n % 2 != 0)
                    .unwrap_or(false)
            }),
            Some("{field} must be odd"),
        )
        .unwrap();
    engine.set_validations([("n", "oddnumber")]).unwrap();

    let report = engine.validate(&json!({"n": 4})).unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(
        report.render(VetReportFormat::Plain).messages(),
        vec!["N must be odd"]
    );

    assert!(engine.validate(&json!({"n": 7})).unwrap().passed());
}

/// Per-rule custom messages outrank every other candidate.
#[test]
fn test_per_rule_message_precedence() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("name", "required;'give us a name'")])
        .unwrap();

    let report = engine.validate(&json!({})).unwrap();
    assert_eq!(
        report.render(VetReportFormat::Plain).messages(),
        vec!["give us a name"]
    );
}

/// An unknown validation filter flags the field with the
/// contact-the-owner message instead of failing the run.
#[test]
fn test_inexistent_validation_filter() {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", "nosuchfilter")]).unwrap();

    let report = engine.validate(&json!({"v": "x"})).unwrap();
    assert_eq!(report.entries().len(), 1);
    let messages = report.render(VetReportFormat::Plain).messages();
    assert!(messages[0].contains("contact the application owner"));
}

/// `equalsfield` compares against the named field of the same record.
#[test]
fn test_equalsfield_against_sibling() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("password_confirm", "equalsfield:password")])
        .unwrap();

    let ok = engine
        .validate(&json!({"password": "s3cret", "password_confirm": "s3cret"}))
        .unwrap();
    assert!(ok.passed());

    let bad = engine
        .validate(&json!({"password": "s3cret", "password_confirm": "other"}))
        .unwrap();
    assert_eq!(bad.entries().len(), 1);
    assert_eq!(bad.entries()[0].filter, "equalsfield");
}

/// Filter-name synonyms resolve at execution time.
#[test]
fn test_synonyms_resolve_at_execution() {
    let mut engine = VetEngine::new();
    engine.set_validations([("n", "required|int")]).unwrap();

    let report = engine.validate(&json!({"n": "4.5"})).unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].filter, "int");
    let messages = report.render(VetReportFormat::Plain).messages();
    assert!(messages[0].contains("integer value"));
}

/// Consecutive registrations append; clearing empties only that chain.
#[test]
fn test_chain_merge_and_clear() {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", "required")]).unwrap();
    engine.set_validations([("v", "maxlen:3")]).unwrap();

    let report = engine.validate(&json!({"v": "long value"})).unwrap();
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].filter, "maxlen");

    engine.clear_validations(Some(&["v"]));
    assert!(engine.validate(&json!({"v": "long value"})).unwrap().passed());
}

/// The merge-before variant prepends sanitization steps.
#[test]
fn test_sanitizations_merge_before() {
    let mut engine = VetEngine::new();
    engine.set_sanitizations([("v", "skip")]).unwrap();
    engine
        .set_sanitizations_before([("v", "uppercase")])
        .unwrap();

    let mut input = json!({"v": "abc"});
    engine.sanitize(&mut input).unwrap();
    assert_eq!(input["v"], "ABC");
}

/// Labels default from the leaf and explicit labels overwrite.
#[test]
fn test_label_defaulting_and_override() {
    let mut engine = VetEngine::new();
    engine
        .set_validations([("user.homeAddress", "required")])
        .unwrap();
    engine
        .set_labels([("user.homeAddress", "Residence")])
        .unwrap();

    let report = engine.validate(&json!({})).unwrap();
    let messages = report.render(VetReportFormat::Plain).messages();
    assert_eq!(messages, vec!["Residence is required"]);
}

/// Declarative rule maps seed the engine in document order.
#[test]
fn test_engine_from_ruleset() {
    let ruleset = VetRuleSet::from_json_str(
        r#"{
            "email": {"sanitizations": "trim|lowercase", "validations": "required|email"},
            "age": {"label": "Age", "validations": "required|integer|minnumeric:18"}
        }"#,
    )
    .unwrap();

    let engine = VetEngine::from_ruleset(&ruleset).unwrap();
    let mut input = json!({"email": " Foo@Example.com ", "age": "17"});
    let report = engine.run(&mut input).unwrap();

    assert_eq!(input["email"], "foo@example.com");
    assert_eq!(report.entries().len(), 1);
    assert_eq!(report.entries()[0].field, "age");
}

/// Rule maps load from YAML files on disk.
#[test]
fn test_ruleset_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.yaml");
    std::fs::write(
        &path,
        "email:\n  validation: required|email\nage:\n  validation: required|integer\n",
    )
    .unwrap();

    let ruleset = VetRuleSet::from_file(&path).unwrap();
    let names: Vec<&str> = ruleset.fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["email", "age"]);

    let engine = VetEngine::from_ruleset(&ruleset).unwrap();
    let report = engine.validate(&json!({})).unwrap();
    assert_eq!(report.entries().len(), 2);
}

/// A custom hierarchy delimiter changes path splitting.
#[test]
fn test_custom_field_delimiter() {
    let mut engine = VetEngine::with_field_delimiter("/");
    engine
        .set_validations([("user/email", "required")])
        .unwrap();

    let report = engine
        .validate(&json!({"user": {"email": "a@b.co"}}))
        .unwrap();
    assert!(report.passed());
}

/// Reports are per run, not accumulated across runs.
#[test]
fn test_reports_do_not_accumulate() {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", "required")]).unwrap();

    let first = engine.validate(&json!({})).unwrap();
    assert_eq!(first.entries().len(), 1);

    let second = engine.validate(&json!({"v": "present"})).unwrap();
    assert!(second.passed());
    assert_eq!(first.entries().len(), 1);
}

/// The version accessor reports the crate version.
#[test]
fn test_version() {
    assert_eq!(VetEngine::version(), env!("CARGO_PKG_VERSION"));
}
