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

//! # Rule Grammar Module
//!
//! Parser and renderer for the compact rule-chain grammar. A rule string
//! is a `|`-delimited sequence of rule specs:
//!
//! ```text
//! filterName[:arg1,arg2,...][;'error message']
//! ```
//!
//! The argument list is comma-delimited with each argument trimmed. The
//! error-message segment, meaningful only in validation chains, follows a
//! `;` and may be wrapped in matching single or double quotes; quoted
//! messages are taken verbatim, so they may contain `|` and `,`. Filter
//! names are case-folded to lowercase. A name starting with `/` marks a
//! disabled step and parses to nothing.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VetError};

/// One step in a sanitization or validation chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetRule {
    /// Lowercase filter token, canonical or synonym.
    pub filter: String,
    /// Ordered arguments, synonym-resolved at execution time.
    pub args: Vec<String>,
    /// Custom error message override; empty when none was given.
    #[serde(default)]
    pub errormsg: String,
}

impl VetRule {
    /// Builds a bare rule with no arguments or message.
    #[allow(non_snake_case)]
    pub fn new(filter: impl Into<String>) -> Self {
        VetRule {
            filter: filter.into(),
            args: Vec::new(),
            errormsg: String::new(),
        }
    }
}

/// Parses a rule string into an ordered chain.
///
/// With `is_validation` unset, error-message segments are still consumed
/// by the scanner but dropped from the result. A string the grammar
/// cannot tokenize at all raises [`VetError::Parse`]; this is a
/// configuration-time failure, never a validation failure.
#[allow(non_snake_case)]
pub fn parse_rule_string(source: &str, is_validation: bool) -> Result<Vec<VetRule>> {
    let chars: Vec<char> = source.chars().collect();
    let mut rules = Vec::new();
    let mut seen_any = false;
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len()
            && (chars[i] == '|' || chars[i] == '\'' || chars[i] == '"' || chars[i].is_whitespace())
        {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }
        if chars[i] == ':' || chars[i] == ';' {
            return Err(VetError::parse(format!(
                "filter name may not start with '{}' in: {source}",
                chars[i]
            )));
        }

        let start = i;
        while i < chars.len() && !matches!(chars[i], ':' | ';' | '|') {
            i += 1;
        }
        let name: String = chars[start..i].iter().collect();
        let name = name
            .trim_end_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
            .to_string();
        if name.is_empty() {
            return Err(VetError::parse(format!("empty filter name in: {source}")));
        }
        seen_any = true;

        let mut args: Vec<String> = Vec::new();
        let mut errormsg = String::new();

        if i < chars.len() && chars[i] == ':' {
            i += 1;
            let args_start = i;
            while i < chars.len() && !matches!(chars[i], ';' | '|') {
                i += 1;
            }
            let args_str: String = chars[args_start..i].iter().collect();
            if !args_str.trim().is_empty() {
                args = args_str.split(',').map(|a| a.trim().to_string()).collect();
            }
        }

        if i < chars.len() && chars[i] == ';' {
            i += 1;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            if i < chars.len() && (chars[i] == '\'' || chars[i] == '"') {
                let quote = chars[i];
                i += 1;
                let msg_start = i;
                while i < chars.len() && chars[i] != quote {
                    i += 1;
                }
                if i >= chars.len() {
                    return Err(VetError::parse(format!(
                        "unterminated quoted error message in: {source}"
                    )));
                }
                errormsg = chars[msg_start..i].iter().collect();
                i += 1;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                if i < chars.len() && chars[i] != '|' {
                    return Err(VetError::parse(format!(
                        "unexpected characters after quoted error message in: {source}"
                    )));
                }
            } else {
                let msg_start = i;
                while i < chars.len() && chars[i] != '|' {
                    i += 1;
                }
                errormsg = chars[msg_start..i]
                    .iter()
                    .collect::<String>()
                    .trim()
                    .to_string();
            }
        }

        if !name.starts_with('/') {
            rules.push(VetRule {
                filter: name.to_lowercase(),
                args,
                errormsg: if is_validation { errormsg } else { String::new() },
            });
        }
    }

    if !seen_any {
        return Err(VetError::parse(format!(
            "invalid filter string: {source:?}"
        )));
    }

    Ok(rules)
}

/// Renders a chain back into rule-string form.
///
/// Re-parsing the result yields an equivalent chain, modulo whitespace
/// normalization.
#[allow(non_snake_case)]
pub fn render_rule_string(rules: &[VetRule]) -> String {
    rules
        .iter()
        .map(|rule| {
            let mut out = rule.filter.clone();
            if !rule.args.is_empty() {
                out.push(':');
                out.push_str(&rule.args.join(","));
            }
            if !rule.errormsg.is_empty() {
                out.push_str(";'");
                out.push_str(&rule.errormsg);
                out.push('\'');
            }
            out
        })
        .collect::<Vec<_>>()
        .join("|")
}
