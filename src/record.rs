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

//! # Vet Record Module
//!
//! This module provides the input-record helpers for the Vet engine. A Vet
//! record is a plain JSON value (normally an object, possibly nested one or
//! more levels) owned by the caller. The engine receives a reference, may
//! read and (for sanitization) mutate it in place, and never retains it
//! beyond the call.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Records use JSON (serde_json::Value), enabling
//!   structured and semi-structured data without strict schemas
//! - **Caller ownership**: The engine never clones or stores the record;
//!   sanitization writes happen through resolved value slots

use serde_json::{Map, Value};

/// Input record type processed by the Vet engine.
///
/// Every record handed to `sanitize`/`validate`/`run` is a JSON value.
/// Field paths address object keys; nested objects form the hierarchy.
pub type VetRecord = Value;

/// Convenience alias for the object map backing a record.
pub type VetRecordMap = Map<String, Value>;

/// Renders a field value the way it appears in error messages.
///
/// Strings render without quotes, numbers and booleans via their JSON
/// form, null as the empty string, and sequences as a comma-separated
/// join of their elements.
#[allow(non_snake_case)]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Generic emptiness test used by the `empty` and `notempty` validators.
///
/// Empty means: null, empty string, numeric zero, false, or an empty
/// collection.
#[allow(non_snake_case)]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|v| v == 0.0).unwrap_or(false),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Safely extracts a top-level key from a record, with an optional default.
///
/// Returns `None` when the record is not an object and the default is
/// absent.
#[allow(non_snake_case)]
pub fn field<'a>(input: &'a Value, key: &str, default: Option<&'a Value>) -> Option<&'a Value> {
    match input {
        Value::Object(map) => map.get(key).or(default),
        _ => default,
    }
}
