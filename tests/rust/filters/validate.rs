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

//! # Validation Filter Tests
//!
//! Tests for the built-in predicates, driven through the engine so that
//! absence handling, flag arguments and synonyms are exercised with them.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test validate
//! ```

use serde_json::{json, Value};
use vetx::VetEngine;

fn passes(chain: &str, value: Value) -> bool {
    let mut engine = VetEngine::new();
    engine.set_validations([("v", chain)]).unwrap();
    engine
        .validate(&json!({ "v": value }))
        .unwrap()
        .passed()
}

#[test]
fn test_presence_checks() {
    assert!(!passes("required", Value::Null));
    assert!(!passes("required", json!("")));
    assert!(passes("required", json!("x")));
    assert!(passes("required", json!(0)));

    assert!(!passes("notempty", json!(0)));
    assert!(!passes("notempty", json!("")));
    assert!(passes("notempty", json!("x")));
    assert!(passes("empty", json!("")));
    assert!(!passes("empty", json!("x")));
}

#[test]
fn test_character_classes() {
    assert!(passes("alphabetic", json!("Çigdem")));
    assert!(!passes("alphabetic", json!("abc3")));
    assert!(passes("alphanumeric", json!("abc3")));
    assert!(passes("personname", json!("Jean-Luc O'Brien")));
}

#[test]
fn test_numeric_family() {
    assert!(passes("integer", json!("42")));
    assert!(!passes("integer", json!("42.5")));
    assert!(passes("float", json!("42.5")));
    assert!(passes("numeric", json!(-3)));
    assert!(passes("minnumeric:18", json!("18")));
    assert!(!passes("minnumeric:18", json!("17.9")));
    assert!(passes("maxnumeric:100", json!("99")));
}

#[test]
fn test_lengths_are_character_counts() {
    assert!(passes("exactlen:5", json!("héllo")));
    assert!(passes("minlen:3|maxlen:5", json!("abcd")));
    assert!(!passes("maxlen:3", json!("abcd")));
}

#[test]
fn test_list_membership() {
    assert!(passes("inlist:red,green,blue", json!(" RED ")));
    assert!(!passes("inlist:red,green,blue", json!("mauve")));
    assert!(passes("notinlist:admin,root", json!("guest")));
}

#[test]
fn test_dates_and_age() {
    assert!(passes("date", json!("2001-07-14")));
    assert!(passes("date", json!("2001-07-14 09:30:00")));
    assert!(!passes("date", json!("14-07-2001")));
    assert!(passes("minage:18", json!("1980-06-01")));
    assert!(!passes("minage:18", json!("2024-06-01")));
}

#[test]
fn test_network_shapes() {
    assert!(passes("ip", json!("192.168.1.1")));
    assert!(passes("ip:ipv6", json!("fe80::1")));
    assert!(!passes("ip:ipv4", json!("fe80::1")));
    assert!(passes("ipv4", json!("8.8.8.8")));
    assert!(passes("ipv6", json!("2001:db8::ff00:42:8329")));
    assert!(passes("url", json!("https://example.com/a?b=c")));
    assert!(!passes("url", json!("not a url")));
}

#[test]
fn test_identifiers() {
    assert!(passes("guidv4", json!("{9F8B6C1E-2D3A-4B5C-8D7E-0F1A2B3C4D5E}")));
    assert!(passes("creditcard", json!("4111 1111 1111 1111")));
    assert!(!passes("creditcard", json!("4111 1111 1111 1112")));
    assert!(passes("iban", json!("GB82 WEST 1234 5698 7654 32")));
    assert!(!passes("iban", json!("GB82 TEST 1234 5698 7654 33")));
    assert!(passes("jsonstring", json!("{\"k\": true}")));
    assert!(!passes("jsonstring", json!("plain text")));
}

#[test]
fn test_affixes_and_files() {
    assert!(passes("startswith:IN", json!("IN-042")));
    assert!(passes("startswith:in,caseinsensitive", json!("IN-042")));
    assert!(!passes("endswith:.pdf", json!("file.doc")));
    assert!(passes("fileextension:pdf,docx", json!("report.DOCX")));
    assert!(passes("requiredfile", json!("upload.png")));
    assert!(!passes("requiredfile", json!("   ")));
}

#[test]
fn test_regex_and_phone_and_address() {
    assert!(passes("regex:/^[A-Z]{2}\\d{4}$/", json!("AB1234")));
    assert!(!passes("regex:/^[A-Z]{2}\\d{4}$/", json!("ab1234")));
    assert!(passes("phonenumber", json!("555-555-5555")));
    assert!(passes("streetaddress", json!("221b Baker Street")));
    assert!(!passes("streetaddress", json!("Baker Street")));
}

#[test]
fn test_pass_and_fail() {
    assert!(passes("pass", json!("anything")));
    assert!(!passes("fail", json!("anything")));
}

#[test]
fn test_boolean_strictness() {
    assert!(passes("bool", json!(false)));
    assert!(!passes("boolean", json!("false")));
}
