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

//! # Field Path Module
//!
//! Delimited hierarchical paths addressing value slots inside a nested
//! input record. Resolution walks parent segments through nested objects
//! and lands on a leaf slot; nested structures are never treated as
//! atomic field values.

use serde_json::{Map, Value};

use crate::errors::{Result, VetError};

/// Delimited path referencing a value slot in a nested record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VetFieldPath {
    segments: Vec<String>,
}

impl VetFieldPath {
    /// Parses a path string on the given hierarchy delimiter.
    #[allow(non_snake_case)]
    pub fn parse(path: &str, delimiter: &str) -> Result<Self> {
        let segments: Vec<String> = path
            .split(delimiter)
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(VetError::validation("field path may not be empty"));
        }

        Ok(Self { segments })
    }

    /// Last path segment, the field's own name.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// All segments preceding the leaf.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// Read-only resolution of the leaf slot.
    ///
    /// Returns `None` when any parent is missing or not an object, when
    /// the leaf is missing, or when the leaf holds a nested structure.
    #[allow(non_snake_case)]
    pub fn resolve<'a>(&self, input: &'a Value) -> Option<&'a Value> {
        let mut current = match input {
            Value::Object(map) => map,
            _ => return None,
        };

        for segment in self.parents() {
            current = match current.get(segment) {
                Some(Value::Object(map)) => map,
                _ => return None,
            };
        }

        match current.get(self.leaf()) {
            Some(value) if value.is_object() || value.is_array() => None,
            other => other,
        }
    }

    /// Mutable resolution of the leaf slot.
    ///
    /// With `auto_create` set, missing parents are created as empty
    /// objects and a missing leaf is created as an empty string; this is
    /// used only by the `default` sanitization filter. Without it,
    /// resolution fails quietly exactly like [`VetFieldPath::resolve`].
    #[allow(non_snake_case)]
    pub fn resolve_mut<'a>(&self, input: &'a mut Value, auto_create: bool) -> Option<&'a mut Value> {
        let mut current = match input {
            Value::Object(map) => map,
            _ => return None,
        };

        for segment in self.parents() {
            if !current.contains_key(segment) {
                if !auto_create {
                    return None;
                }
                current.insert(segment.clone(), Value::Object(Map::new()));
            }
            current = match current.get_mut(segment) {
                Some(Value::Object(map)) => map,
                _ => return None,
            };
        }

        let leaf = self.leaf();
        if current.contains_key(leaf) {
            let slot = current.get_mut(leaf)?;
            if slot.is_object() || slot.is_array() {
                None
            } else {
                Some(slot)
            }
        } else if auto_create {
            current.insert(leaf.to_string(), Value::String(String::new()));
            current.get_mut(leaf)
        } else {
            None
        }
    }
}
