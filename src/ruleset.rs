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

//! # Rule Set Module
//!
//! The declarative registration input: a map of field name to an entry
//! carrying an optional label and rule-chain strings. Both JSON and YAML
//! sources are accepted; fields register in document order, which fixes
//! the traversal order of the pipelines.
//!
//! ```json
//! {
//!   "email": {"validations": "required|email", "sanitizations": "trim|lowercase"},
//!   "age":   {"label": "Age", "validations": "required|integer|minnumeric:18"}
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::Result;

/// Per-field registration entry.
///
/// `sanitization` and `validation` are accepted as singular aliases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetFieldRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        alias = "sanitization",
        skip_serializing_if = "Option::is_none"
    )]
    pub sanitizations: Option<String>,
    #[serde(default, alias = "validation", skip_serializing_if = "Option::is_none")]
    pub validations: Option<String>,
}

/// Ordered field → rules map, preserving document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VetRuleSet {
    pub fields: Vec<(String, VetFieldRules)>,
}

impl VetRuleSet {
    #[allow(non_snake_case)]
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    #[allow(non_snake_case)]
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a rule map from disk, dispatching on the file extension.
    #[allow(non_snake_case)]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_yaml_str(&content)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for VetRuleSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = VetRuleSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to rule entries")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::new();
                while let Some((name, rules)) = access.next_entry::<String, VetFieldRules>()? {
                    fields.push((name, rules));
                }
                Ok(VetRuleSet { fields })
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}

impl Serialize for VetRuleSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, rules) in &self.fields {
            map.serialize_entry(name, rules)?;
        }
        map.end()
    }
}
