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

//! # Rule Grammar Tests
//!
//! Tests for the rule-string grammar: parsing, rendering and the
//! round-trip property checked over generated chains.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test rules
//! ```

use proptest::prelude::*;
use vetx::{parse_rule_string, render_rule_string, VetRule};

/// Chains parse into ordered rules with trimmed arguments.
#[test]
fn test_parse_structure() {
    let rules = parse_rule_string("trim|inlist: a ,b | required;'who are you?'", true).unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].filter, "trim");
    assert_eq!(rules[1].args, vec!["a", "b"]);
    assert_eq!(rules[2].errormsg, "who are you?");
}

/// Quoting protects delimiters inside error messages.
#[test]
fn test_quoted_messages_protect_delimiters() {
    let rules = parse_rule_string("fail;'all is lost | abandon, hope'", true).unwrap();
    assert_eq!(rules[0].errormsg, "all is lost | abandon, hope");
}

/// Double and single quotes are interchangeable but must match.
#[test]
fn test_quote_pairing() {
    let rules = parse_rule_string("fail;\"it's broken\"", true).unwrap();
    assert_eq!(rules[0].errormsg, "it's broken");
    assert!(parse_rule_string("fail;'mismatched\"", true).is_err());
}

/// Disabled steps stay out of the chain without erroring.
#[test]
fn test_disabled_step_convention() {
    let rules = parse_rule_string("required|/email|maxlen:10", true).unwrap();
    let filters: Vec<&str> = rules.iter().map(|r| r.filter.as_str()).collect();
    assert_eq!(filters, vec!["required", "maxlen"]);
}

/// Untokenizable input is a fatal parse error.
#[test]
fn test_malformed_input_is_fatal() {
    assert!(parse_rule_string("", true).is_err());
    assert!(parse_rule_string(" | ", true).is_err());
    assert!(parse_rule_string(";'msg only'", true).is_err());
}

/// A hand-built chain renders to the expected compact form.
#[test]
fn test_render_form() {
    let chain = vec![
        VetRule::new("required"),
        VetRule {
            filter: "minlen".to_string(),
            args: vec!["4".to_string()],
            errormsg: "too short".to_string(),
        },
    ];
    assert_eq!(render_rule_string(&chain), "required|minlen:4;'too short'");
}

proptest! {
    /// Rendering a chain and re-parsing it yields an equivalent chain.
    #[test]
    fn prop_rule_chain_round_trips(
        chain in proptest::collection::vec(
            (
                "[a-z]{1,12}",
                proptest::collection::vec("[a-z0-9]{1,6}", 0..3),
                "[a-zA-Z0-9 .!?]{0,20}",
            ),
            1..5,
        )
    ) {
        let rules: Vec<VetRule> = chain
            .into_iter()
            .map(|(filter, args, errormsg)| VetRule {
                filter,
                args,
                errormsg: errormsg.trim().to_string(),
            })
            .collect();

        let rendered = render_rule_string(&rules);
        let reparsed = parse_rule_string(&rendered, true).unwrap();
        prop_assert_eq!(reparsed, rules);
    }
}
