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

//! # Validation Filters
//!
//! Built-in predicates with the fixed signature `(value, args) -> bool`.
//! The engine handles absence before dispatch: `required` and `notempty`
//! receive null for absent fields, every other predicate is vacuously
//! passing when the field is absent. `equalsfield` needs the whole record
//! and is resolved by the engine, not listed here.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};
use std::sync::OnceLock;

use chrono::{Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use crate::alias::VetIpVariant;
use crate::record::{display_string, is_empty_value};

/// Signature shared by every built-in validation predicate.
pub type ValidateFn = fn(&Value, &[String]) -> bool;

/// Registry mapping canonical names to built-in predicates.
#[allow(non_snake_case)]
pub fn registry() -> &'static HashMap<&'static str, ValidateFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, ValidateFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table: HashMap<&'static str, ValidateFn> = HashMap::new();
        table.insert("alphabetic", validate_alphabetic);
        table.insert("alphanumeric", validate_alphanumeric);
        table.insert("boolean", validate_boolean);
        table.insert("creditcard", validate_creditcard);
        table.insert("date", validate_date);
        table.insert("email", validate_email);
        table.insert("empty", validate_empty);
        table.insert("endswith", validate_endswith);
        table.insert("exactlen", validate_exactlen);
        table.insert("fail", validate_fail);
        table.insert("fileextension", validate_fileextension);
        table.insert("float", validate_float);
        table.insert("guidv4", validate_guidv4);
        table.insert("iban", validate_iban);
        table.insert("inlist", validate_inlist);
        table.insert("integer", validate_integer);
        table.insert("ip", validate_ip);
        table.insert("ipv4", validate_ipv4);
        table.insert("ipv6", validate_ipv6);
        table.insert("jsonstring", validate_jsonstring);
        table.insert("maxlen", validate_maxlen);
        table.insert("maxnumeric", validate_maxnumeric);
        table.insert("minage", validate_minage);
        table.insert("minlen", validate_minlen);
        table.insert("minnumeric", validate_minnumeric);
        table.insert("notempty", validate_notempty);
        table.insert("notinlist", validate_notinlist);
        table.insert("numeric", validate_numeric);
        table.insert("pass", validate_pass);
        table.insert("personname", validate_personname);
        table.insert("phonenumber", validate_phonenumber);
        table.insert("regex", validate_regex);
        table.insert("required", validate_required);
        table.insert("requiredfile", validate_requiredfile);
        table.insert("startswith", validate_startswith);
        table.insert("streetaddress", validate_streetaddress);
        table.insert("url", validate_url);
        table.insert("urlexists", validate_urlexists);
        table
    })
}

fn text(value: &Value) -> String {
    display_string(value)
}

fn char_len(value: &Value) -> usize {
    text(value).chars().count()
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn arg_number(args: &[String], index: usize) -> Option<f64> {
    args.get(index).and_then(|a| a.trim().parse::<f64>().ok())
}

pub fn validate_alphabetic(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)^[a-zà-öø-ÿ]+$").unwrap());
    re.is_match(&text(value))
}

pub fn validate_alphanumeric(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9à-öø-ÿ]+$").unwrap());
    re.is_match(&text(value))
}

/// Only JSON booleans qualify; truthy strings do not.
pub fn validate_boolean(value: &Value, _args: &[String]) -> bool {
    matches!(value, Value::Bool(_))
}

/// Luhn check over the digits of the value.
pub fn validate_creditcard(value: &Value, _args: &[String]) -> bool {
    let digits: Vec<u32> = text(value).chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let parity = digits.len() % 2;
    let mut total = 0;
    for (index, digit) in digits.iter().enumerate() {
        let mut digit = *digit;
        if index % 2 == parity {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        total += digit;
    }
    total % 10 == 0
}

/// ISO 8601 date (`Y-m-d`) or datetime (`Y-m-d H:M:S`).
pub fn validate_date(value: &Value, _args: &[String]) -> bool {
    let source = text(value);
    NaiveDate::parse_from_str(&source, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(&source, "%Y-%m-%d %H:%M:%S").is_ok()
}

pub fn validate_email(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());
    re.is_match(&text(value))
}

pub fn validate_empty(value: &Value, _args: &[String]) -> bool {
    is_empty_value(value)
}

pub fn validate_notempty(value: &Value, _args: &[String]) -> bool {
    !is_empty_value(value)
}

pub fn validate_endswith(value: &Value, args: &[String]) -> bool {
    let Some(needle) = args.first() else {
        return true;
    };
    let source = text(value);
    if source.ends_with(needle.as_str()) {
        return true;
    }
    args.get(1).map(String::as_str) == Some("caseinsensitive")
        && source.to_lowercase().ends_with(&needle.to_lowercase())
}

pub fn validate_startswith(value: &Value, args: &[String]) -> bool {
    let Some(needle) = args.first() else {
        return true;
    };
    let source = text(value);
    if source.starts_with(needle.as_str()) {
        return true;
    }
    args.get(1).map(String::as_str) == Some("caseinsensitive")
        && source.to_lowercase().starts_with(&needle.to_lowercase())
}

pub fn validate_exactlen(value: &Value, args: &[String]) -> bool {
    match arg_number(args, 0) {
        Some(len) => char_len(value) == len as usize,
        None => false,
    }
}

pub fn validate_maxlen(value: &Value, args: &[String]) -> bool {
    match arg_number(args, 0) {
        Some(len) => char_len(value) <= len as usize,
        None => false,
    }
}

pub fn validate_minlen(value: &Value, args: &[String]) -> bool {
    match arg_number(args, 0) {
        Some(len) => char_len(value) >= len as usize,
        None => false,
    }
}

/// Always fails; forcibly flags a field.
pub fn validate_fail(_value: &Value, _args: &[String]) -> bool {
    false
}

/// Always passes; placeholder step.
pub fn validate_pass(_value: &Value, _args: &[String]) -> bool {
    true
}

/// Filename extension must be one of the arguments (case-insensitive).
pub fn validate_fileextension(value: &Value, args: &[String]) -> bool {
    let source = text(value);
    let extension = match source.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => return false,
    };
    args.iter().any(|arg| arg.to_lowercase() == extension)
}

pub fn validate_float(value: &Value, _args: &[String]) -> bool {
    numeric_value(value).is_some()
}

pub fn validate_numeric(value: &Value, _args: &[String]) -> bool {
    numeric_value(value).is_some()
}

pub fn validate_integer(value: &Value, _args: &[String]) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

pub fn validate_guidv4(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)^\{?[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}?$")
            .unwrap()
    });
    re.is_match(&text(value))
}

/// Shape check plus the mod-97 checksum over the rearranged account number.
pub fn validate_iban(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[A-Z]{2}\d{2} ?[A-Z\d]{4}( ?\d{4}){1,} ?\d{1,4}$").unwrap()
    });
    let source = text(value);
    if !re.is_match(&source) {
        return false;
    }

    let compact: String = source.chars().filter(|c| *c != ' ').collect();
    let rearranged = format!("{}{}", &compact[4..], &compact[..4]);

    let mut remainder: u32 = 0;
    for c in rearranged.chars() {
        let chunk = match c {
            '0'..='9' => c.to_digit(10).expect("digit").to_string(),
            'A'..='Z' => (c as u32 - 'A' as u32 + 10).to_string(),
            _ => return false,
        };
        for digit in chunk.chars() {
            remainder = (remainder * 10 + digit.to_digit(10).expect("digit")) % 97;
        }
    }
    remainder == 1
}

/// Trimmed, case-folded membership test against the argument list.
pub fn validate_inlist(value: &Value, args: &[String]) -> bool {
    let needle = text(value).trim().to_lowercase();
    args.iter().any(|arg| arg == &needle)
}

pub fn validate_notinlist(value: &Value, args: &[String]) -> bool {
    !validate_inlist(value, args)
}

/// IP address of the variant selected by an optional flag argument.
pub fn validate_ip(value: &Value, args: &[String]) -> bool {
    let source = text(value);
    match VetIpVariant::from_args(args) {
        VetIpVariant::Any => source.parse::<IpAddr>().is_ok(),
        VetIpVariant::V4 => source.parse::<Ipv4Addr>().is_ok(),
        VetIpVariant::V6 => source.parse::<Ipv6Addr>().is_ok(),
    }
}

pub fn validate_ipv4(value: &Value, _args: &[String]) -> bool {
    text(value).parse::<Ipv4Addr>().is_ok()
}

pub fn validate_ipv6(value: &Value, _args: &[String]) -> bool {
    text(value).parse::<Ipv6Addr>().is_ok()
}

/// A string holding a JSON-encoded object.
pub fn validate_jsonstring(value: &Value, _args: &[String]) -> bool {
    match value {
        Value::String(s) => matches!(serde_json::from_str::<Value>(s), Ok(Value::Object(_))),
        _ => false,
    }
}

pub fn validate_maxnumeric(value: &Value, args: &[String]) -> bool {
    match (numeric_value(value), arg_number(args, 0)) {
        (Some(v), Some(limit)) => v <= limit,
        _ => false,
    }
}

pub fn validate_minnumeric(value: &Value, args: &[String]) -> bool {
    match (numeric_value(value), arg_number(args, 0)) {
        (Some(v), Some(limit)) => v >= limit,
        _ => false,
    }
}

/// Age in whole years, measured today, at least `arg1`.
pub fn validate_minage(value: &Value, args: &[String]) -> bool {
    let source = text(value);
    let born = match NaiveDate::parse_from_str(&source, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => match NaiveDateTime::parse_from_str(&source, "%Y-%m-%d %H:%M:%S") {
            Ok(datetime) => datetime.date(),
            Err(_) => return false,
        },
    };
    let Some(min_age) = args.first().and_then(|a| a.trim().parse::<u32>().ok()) else {
        return false;
    };

    let today = Local::now().date_naive();
    match today.years_since(born) {
        Some(age) => age >= min_age,
        None => false,
    }
}

pub fn validate_personname(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)^[a-zà-öø-ÿ\s'\-]+$").unwrap());
    re.is_match(&text(value))
}

pub fn validate_phonenumber(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^(\d[\s\-]?)?[\(\[\s\-]{0,2}?\d{3}[\)\]\s\-]{0,2}?\d{3}[\s\-]?\d{4}$").unwrap()
    });
    re.is_match(&text(value))
}

/// Matches against the user pattern in `arg1`.
///
/// Surrounding `/` delimiters (with an optional trailing `i` flag) are
/// tolerated. An uncompilable pattern logs a warning and fails the step.
pub fn validate_regex(value: &Value, args: &[String]) -> bool {
    let Some(raw) = args.first() else {
        return false;
    };
    match compile_user_pattern(raw) {
        Some(re) => re.is_match(&text(value)),
        None => {
            log::warn!("uncompilable user pattern in regex rule: {raw}");
            false
        }
    }
}

fn compile_user_pattern(raw: &str) -> Option<Regex> {
    let (pattern, flags) = match raw.strip_prefix('/') {
        Some(rest) => match rest.rfind('/') {
            Some(end) => (&rest[..end], &rest[end + 1..]),
            None => (raw, ""),
        },
        None => (raw, ""),
    };
    let pattern = if flags.contains('i') {
        format!("(?i){pattern}")
    } else {
        pattern.to_string()
    };
    Regex::new(&pattern).ok()
}

/// Present and neither null nor the empty string.
pub fn validate_required(value: &Value, _args: &[String]) -> bool {
    !(matches!(value, Value::Null) || matches!(value, Value::String(s) if s.is_empty()))
}

/// A file was supplied: a non-blank filename string.
pub fn validate_requiredfile(value: &Value, _args: &[String]) -> bool {
    matches!(value, Value::String(s) if !s.trim().is_empty())
}

/// Weak detection: at least one letter, one digit and one space.
pub fn validate_streetaddress(value: &Value, _args: &[String]) -> bool {
    let source = text(value);
    source.chars().any(|c| c.is_alphabetic())
        && source.chars().any(|c| c.is_ascii_digit())
        && source.chars().any(|c| c.is_whitespace())
}

pub fn validate_url(value: &Value, _args: &[String]) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?$").unwrap()
    });
    re.is_match(&text(value))
}

/// The URL's host resolves via DNS.
pub fn validate_urlexists(value: &Value, _args: &[String]) -> bool {
    let lowered = text(value).to_lowercase();
    let host = url_host(&lowered);
    if host.is_empty() {
        return false;
    }
    (host, 80)
        .to_socket_addrs()
        .map(|mut addrs| addrs.next().is_some())
        .unwrap_or(false)
}

fn url_host(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(index) => &url[index + 3..],
        None => url,
    };
    let host_port = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(after_scheme);
    match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) && !port.is_empty() => host,
        _ => host_port,
    }
}
