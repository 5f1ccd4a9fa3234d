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

//! # Cleanse Module
//!
//! Generic shallow scrub helpers, independent of the rule-chain engine.
//! `cleanse` rebuilds a record from a selected set of top-level fields
//! with scalar string values unescaped, trimmed and stripped of markup;
//! it recurses one level into array- and object-shaped values.
//! `xss_clean` applies only the markup-stripping sanitizer across all
//! top-level values. Input text is already UTF-8 by construction, so no
//! encoding normalization step is needed here.

use serde_json::{Map, Value};

use crate::filters::sanitize::sanitize_string;

/// Rebuilds a record from the selected top-level fields, scrubbed.
///
/// An empty `fields` slice selects every key. Unselected or missing
/// fields are omitted from the result.
#[allow(non_snake_case)]
pub fn cleanse(input: &Value, fields: &[&str]) -> Value {
    let Value::Object(map) = input else {
        return input.clone();
    };

    let selected: Vec<String> = if fields.is_empty() {
        map.keys().cloned().collect()
    } else {
        fields.iter().map(|f| f.to_string()).collect()
    };

    let mut out = Map::new();
    for field in selected {
        let Some(value) = map.get(&field) else {
            continue;
        };
        let scrubbed = match value {
            Value::Array(items) => Value::Array(items.iter().map(scrub_scalar).collect()),
            Value::Object(nested) => Value::Object(
                nested
                    .iter()
                    .map(|(k, v)| (k.clone(), scrub_scalar(v)))
                    .collect(),
            ),
            other => scrub_scalar(other),
        };
        out.insert(field, scrubbed);
    }
    Value::Object(out)
}

/// Applies the markup-stripping sanitizer to every top-level string value.
#[allow(non_snake_case)]
pub fn xss_clean(input: &Value) -> Value {
    let Value::Object(map) = input else {
        return input.clone();
    };

    let mut out = Map::new();
    for (key, value) in map {
        let cleaned = match value {
            Value::String(_) => sanitize_string(value, &[]),
            other => other.clone(),
        };
        out.insert(key.clone(), cleaned);
    }
    Value::Object(out)
}

fn scrub_scalar(value: &Value) -> Value {
    match value {
        Value::String(s) => {
            let mut text = strip_slashes(s);
            if text.contains('\r') {
                text = text.trim().to_string();
            }
            sanitize_string(&Value::String(text), &[])
        }
        other => other.clone(),
    }
}

fn strip_slashes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
