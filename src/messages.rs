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

//! # Message Catalog Module
//!
//! The factory error-message catalog: one template per built-in
//! validation filter, plus the `default`, `default_long`,
//! `inexistent_validation` and `mismatch` entries. Templates may contain
//! the placeholders `{field}`, `{value}`, `{filter}`, `{args}` and
//! `{arg<n>}`; substitution happens at render time in the report module.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::alias::find_alias;

/// Catalog key for the generic fallback template.
pub const DEFAULT_LONG: &str = "default_long";

/// Catalog key for the unknown-validation template.
pub const INEXISTENT_VALIDATION: &str = "inexistent_validation";

/// Factory validation error messages, keyed by filter name.
pub const FACTORY_ERRORMSGS: &[(&str, &str)] = &[
    ("default", "{field} is invalid"),
    (
        "default_long",
        "Field {field} with value '{value}' failed validation {filter}",
    ),
    (
        "inexistent_validation",
        "Validation filter {filter} does not exist for {field}, please contact the application owner",
    ),
    ("alphabetic", "{field} may only contain alphabetic characters"),
    (
        "alphanumeric",
        "{field} may only contain alpha-numeric characters",
    ),
    ("boolean", "{field} may only contain a true or false value"),
    (
        "creditcard",
        "{field} does not contain a valid credit card number",
    ),
    ("date", "{field} is not a valid date"),
    ("email", "{field} is not a valid email address"),
    ("empty", "{field} must be empty"),
    ("endswith", "{field} does not end with {arg1}"),
    ("equalsfield", "{field} does not equal {arg1}"),
    ("exactlen", "{field} must be exactly {arg1} characters long"),
    ("fail", "{field} failed server validation"),
    ("fileextension", "{field} does not have a valid file extension"),
    ("float", "{field} may only contain a float value"),
    ("guidv4", "{field} is not a valid GUID (v4)"),
    ("iban", "{field} is not a valid IBAN"),
    ("inlist", "{field} must be one of these values: {args}"),
    ("integer", "{field} may only contain an integer value"),
    ("ip", "{field} does not contain a valid IP address"),
    ("ipv4", "{field} does not contain a valid IPv4 address"),
    ("ipv6", "{field} does not contain a valid IPv6 address"),
    ("jsonstring", "{field} is not a JSON-encoded string"),
    ("maxlen", "{field} must be {arg1} or shorter in length"),
    (
        "maxnumeric",
        "{field} must be a numeric value, equal to or lower than {arg1}",
    ),
    (
        "minage",
        "The {field} field needs to have an age greater than or equal to {arg1}",
    ),
    ("minlen", "{field} must be {arg1} or longer in length"),
    (
        "minnumeric",
        "The {field} field needs to be a numeric value, equal to, or higher than {arg1}",
    ),
    ("mismatch", "There is no validation rule for {field}"),
    ("notempty", "{field} cannot be empty"),
    ("notinlist", "{field} cannot be one of these values {args}"),
    ("numeric", "{field} may only contain numeric characters"),
    (
        "pass",
        "Placeholder text, will never be used as {filter} will never fail! :)",
    ),
    (
        "personname",
        "{field} does not seem to contain a person's name",
    ),
    (
        "phonenumber",
        "{field} does not seem to contain a valid phone number",
    ),
    ("regex", "{field} did not match regular expression: {arg1}"),
    ("required", "{field} is required"),
    ("requiredfile", "File is required for {field}"),
    ("startswith", "{field} does not start with {arg1}"),
    (
        "streetaddress",
        "{field} does not seem to be a valid street address",
    ),
    ("url", "The {field} field is required to be a valid URL"),
    ("urlexists", "{field} URL does not exist"),
];

fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG.get_or_init(|| FACTORY_ERRORMSGS.iter().copied().collect())
}

/// Exact catalog lookup.
#[allow(non_snake_case)]
pub fn factory_errormsg(key: &str) -> Option<&'static str> {
    catalog().get(key).copied()
}

/// Catalog lookup with synonym fallback.
///
/// Unknown filter names resolve to the generic `default_long` template.
#[allow(non_snake_case)]
pub fn resolve_errormsg(filter: &str) -> &'static str {
    if let Some(msg) = factory_errormsg(filter) {
        return msg;
    }
    if let Some(msg) = factory_errormsg(&find_alias(filter)) {
        return msg;
    }
    factory_errormsg(DEFAULT_LONG).expect("default_long template present")
}
