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

//! # Alias Module
//!
//! Maps human-friendly synonym tokens to canonical filter names, and
//! resolves flag-style argument tokens into the closed enumerations the
//! built-ins that take flags consume. Pure lookup, no state.
//!
//! Name synonyms (`int` → `integer`, `bool` → `boolean`, …) rename a
//! filter. Flag tokens (`ipv4`, `allow_fraction`, `strip_high`, …) are
//! never renamed; they pass through as arguments and are interpreted by
//! the specific built-in that understands them.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Filter-name synonyms resolving to canonical built-in names.
const NAME_SYNONYMS: &[(&str, &str)] = &[
    ("alphabet", "alphabetic"),
    ("bool", "boolean"),
    ("fileext", "fileextension"),
    ("int", "integer"),
    ("num", "numeric"),
    ("number", "numeric"),
    ("str", "string"),
];

/// Flag-style tokens recognised as arguments by specific built-ins.
/// They resolve to themselves; the consuming filter interprets them.
const FLAG_TOKENS: &[&str] = &[
    "allow_fraction",
    "allow_hex",
    "allow_octal",
    "allow_scientific",
    "allow_thousand",
    "encode_amp",
    "encode_high",
    "encode_low",
    "host_required",
    "ipv4",
    "ipv6",
    "no_encode_quotes",
    "no_priv_range",
    "no_res_range",
    "null_on_failure",
    "path_required",
    "query_required",
    "scheme_required",
    "strip_backtick",
    "strip_high",
    "strip_low",
];

fn synonym_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| NAME_SYNONYMS.iter().copied().collect())
}

/// Resolves a token through the synonym table.
///
/// Lookup is case-insensitive; unknown tokens (including the flag tokens
/// above) come back unchanged.
#[allow(non_snake_case)]
pub fn find_alias(token: &str) -> String {
    let lowered = token.to_lowercase();
    match synonym_table().get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => token.to_string(),
    }
}

/// Returns true when a token is one of the recognised flag arguments.
pub fn is_flag_token(token: &str) -> bool {
    FLAG_TOKENS.contains(&token.to_lowercase().as_str())
}

/// IP validation variant selected by an optional flag argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VetIpVariant {
    #[default]
    Any,
    V4,
    V6,
}

impl VetIpVariant {
    /// Resolves the variant from the first argument of an `ip` rule.
    #[allow(non_snake_case)]
    pub fn from_args(args: &[String]) -> Self {
        match args.first().map(|a| a.to_lowercase()) {
            Some(ref flag) if flag == "ipv4" => VetIpVariant::V4,
            Some(ref flag) if flag == "ipv6" => VetIpVariant::V6,
            _ => VetIpVariant::Any,
        }
    }
}

/// Numeric sanitization flags consumed by the `float` built-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VetNumberFlag {
    AllowFraction,
    AllowThousand,
    AllowScientific,
}

impl VetNumberFlag {
    /// Resolves a single flag token, ignoring anything unrecognised.
    #[allow(non_snake_case)]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "allow_fraction" => Some(VetNumberFlag::AllowFraction),
            "allow_thousand" => Some(VetNumberFlag::AllowThousand),
            "allow_scientific" => Some(VetNumberFlag::AllowScientific),
            _ => None,
        }
    }
}
