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

//! # Field Registry Module
//!
//! Maps a registered field path to its display label, parsed path and
//! rule chains. The registry preserves registration order, which is the
//! traversal order of both execution pipelines. A field's path and
//! default label are computed once at first registration and never
//! recomputed implicitly; explicit label updates overwrite.

use std::collections::HashMap;

use crate::errors::Result;
use crate::path::VetFieldPath;
use crate::rule::VetRule;

/// One registered field: label, path and rule chains.
#[derive(Clone, Debug)]
pub struct VetFieldSpec {
    /// Full path string exactly as registered.
    pub name: String,
    /// Parsed hierarchical path.
    pub path: VetFieldPath,
    /// Display name used in rendered error messages.
    pub label: String,
    /// Ordered sanitization chain.
    pub sanitizations: Vec<VetRule>,
    /// Ordered validation chain.
    pub validations: Vec<VetRule>,
}

/// Registry of field specs in registration order.
#[derive(Debug, Default)]
pub struct VetFieldRegistry {
    fields: Vec<VetFieldSpec>,
    index: HashMap<String, usize>,
}

impl VetFieldRegistry {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        VetFieldRegistry {
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the spec for a field, registering it first if unseen.
    ///
    /// Registration parses the path on the given delimiter and derives
    /// the default label from the leaf segment.
    pub fn entry(&mut self, name: &str, delimiter: &str) -> Result<&mut VetFieldSpec> {
        if let Some(&idx) = self.index.get(name) {
            return Ok(&mut self.fields[idx]);
        }

        let path = VetFieldPath::parse(name, delimiter)?;
        let label = humanize_label(path.leaf());
        let spec = VetFieldSpec {
            name: name.to_string(),
            path,
            label,
            sanitizations: Vec::new(),
            validations: Vec::new(),
        };

        self.index.insert(name.to_string(), self.fields.len());
        self.fields.push(spec);
        Ok(self.fields.last_mut().expect("field just pushed"))
    }

    pub fn get(&self, name: &str) -> Option<&VetFieldSpec> {
        self.index.get(name).map(|&idx| &self.fields[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut VetFieldSpec> {
        match self.index.get(name) {
            Some(&idx) => Some(&mut self.fields[idx]),
            None => None,
        }
    }

    /// Iterates specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &VetFieldSpec> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut VetFieldSpec> {
        self.fields.iter_mut()
    }

    /// Registered field names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|spec| spec.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Converts snake_case, camelCase, PascalCase, lisp-case and Train-Case
/// names to Human Readable Upper Case Words.
#[allow(non_snake_case)]
pub fn humanize_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let boundary = (c.is_uppercase() && !p.is_uppercase())
                || (c.is_ascii_digit() && !p.is_ascii_digit())
                || (c.is_alphabetic() && p.is_ascii_digit());
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            } else if c.is_lowercase() && p.is_uppercase() && current.chars().count() > 1 {
                // uppercase run followed by lowercase: last capital starts the next word
                let last = current.pop().expect("non-empty word");
                words.push(std::mem::take(&mut current));
                current.push(last);
            }
        }

        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
