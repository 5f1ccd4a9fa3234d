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

//! # Vet Engine Module
//!
//! The engine instance: field registry, custom filter registries and the
//! sanitize/validate/run entry points. Fields are traversed in
//! registration order; each field's chain runs in order, subject to the
//! `skip` control pseudo-filter. Sanitization mutates the caller's record
//! in place and never records data-quality errors; validation never
//! mutates and returns a fresh [`VetReport`] per run.
//!
//! ## Dispatch
//!
//! Filter names resolve through map lookups only, in this precedence:
//! registered custom filter, built-in under the written name or its
//! synonym, then (sanitization only) the platform string-operation
//! registry. A name resolving to nothing is a configuration error during
//! sanitization and an `inexistent_validation` entry during validation.
//!
//! ## Concurrency
//!
//! Registration requires `&mut self`; the run entry points take `&self`
//! and hold no run state on the instance, so a configured engine can be
//! shared behind a reference. All execution is synchronous and bounded by
//! the registered chains, except custom callbacks which may block.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::alias::find_alias;
use crate::errors::{Result, VetError};
use crate::field::VetFieldRegistry;
use crate::filters::{sanitize, validate};
use crate::messages::{self, DEFAULT_LONG, INEXISTENT_VALIDATION};
use crate::path::VetFieldPath;
use crate::record::display_string;
use crate::report::{VetErrorEntry, VetReport, VetSpanAttrs};
use crate::rule::parse_rule_string;
use crate::ruleset::VetRuleSet;

/// Pluggable sanitization callback.
pub type VetSanitizeCallback = Box<dyn Fn(&Value, &[String]) -> Value + Send + Sync>;

/// Pluggable validation callback.
pub type VetValidateCallback = Box<dyn Fn(&Value, &[String]) -> bool + Send + Sync>;

struct VetCustomValidation {
    callback: VetValidateCallback,
    errormsg: String,
}

/// Declarative field sanitization and validation engine.
pub struct VetEngine {
    fields: VetFieldRegistry,
    custom_sanitizations: HashMap<String, VetSanitizeCallback>,
    custom_validations: HashMap<String, VetCustomValidation>,
    field_delimiter: String,
    args_delimiter: String,
    spans: VetSpanAttrs,
}

impl fmt::Debug for VetEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VetEngine")
            .field("fields", &self.fields.len())
            .field("custom_sanitizations", &self.custom_sanitizations.len())
            .field("custom_validations", &self.custom_validations.len())
            .field("field_delimiter", &self.field_delimiter)
            .finish()
    }
}

impl Default for VetEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VetEngine {
    /// Creates an empty engine with the default `.` hierarchy delimiter.
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        VetEngine {
            fields: VetFieldRegistry::new(),
            custom_sanitizations: HashMap::new(),
            custom_validations: HashMap::new(),
            field_delimiter: ".".to_string(),
            args_delimiter: ", ".to_string(),
            spans: VetSpanAttrs::default(),
        }
    }

    /// Creates an empty engine with a custom hierarchy delimiter.
    #[allow(non_snake_case)]
    pub fn with_field_delimiter(delimiter: &str) -> Self {
        let mut engine = Self::new();
        engine.field_delimiter = delimiter.to_string();
        engine
    }

    /// Creates an engine pre-seeded from a declarative rule map.
    #[allow(non_snake_case)]
    pub fn from_ruleset(ruleset: &VetRuleSet) -> Result<Self> {
        let mut engine = Self::new();
        engine.apply_ruleset(ruleset)?;
        Ok(engine)
    }

    /// Registers every field of a declarative rule map.
    pub fn apply_ruleset(&mut self, ruleset: &VetRuleSet) -> Result<&mut Self> {
        let delimiter = self.field_delimiter.clone();
        for (field, rules) in &ruleset.fields {
            if let Some(label) = &rules.label {
                self.set_labels([(field.as_str(), label.as_str())])?;
            } else {
                self.fields.entry(field, &delimiter)?;
            }
            if let Some(chain) = &rules.sanitizations {
                self.set_sanitizations([(field.as_str(), chain.as_str())])?;
            }
            if let Some(chain) = &rules.validations {
                self.set_validations([(field.as_str(), chain.as_str())])?;
            }
        }
        Ok(self)
    }

    /// Crate version string.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Updates the field hierarchy delimiter used for later registrations.
    pub fn set_field_delimiter(&mut self, delimiter: &str) -> &mut Self {
        self.field_delimiter = delimiter.to_string();
        self
    }

    /// Updates the delimiter joining `{args}` in rendered messages.
    pub fn set_args_delimiter(&mut self, delimiter: &str) -> &mut Self {
        self.args_delimiter = delimiter.to_string();
        self
    }

    /// Sets the span attributes used by the HTML report modes.
    pub fn set_error_spans(&mut self, spans: VetSpanAttrs) -> &mut Self {
        self.spans = spans;
        self
    }

    /// Sets or overwrites display labels for fields.
    pub fn set_labels<I, K, V>(&mut self, labels: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let delimiter = self.field_delimiter.clone();
        for (field, label) in labels {
            let spec = self.fields.entry(field.as_ref(), &delimiter)?;
            spec.label = label.as_ref().to_string();
        }
        Ok(self)
    }

    /// Parses and appends sanitization chains for fields.
    pub fn set_sanitizations<I, K, V>(&mut self, rules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.merge_sanitizations(rules, false)
    }

    /// Parses sanitization chains and prepends them ahead of existing steps.
    pub fn set_sanitizations_before<I, K, V>(&mut self, rules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.merge_sanitizations(rules, true)
    }

    fn merge_sanitizations<I, K, V>(&mut self, rules: I, before: bool) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let delimiter = self.field_delimiter.clone();
        for (field, chain) in rules {
            let parsed = parse_rule_string(chain.as_ref(), false)?;
            let spec = self.fields.entry(field.as_ref(), &delimiter)?;
            if before {
                let mut merged = parsed;
                merged.extend(spec.sanitizations.drain(..));
                spec.sanitizations = merged;
            } else {
                spec.sanitizations.extend(parsed);
            }
        }
        Ok(self)
    }

    /// Parses and appends validation chains for fields.
    pub fn set_validations<I, K, V>(&mut self, rules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let delimiter = self.field_delimiter.clone();
        for (field, chain) in rules {
            let parsed = parse_rule_string(chain.as_ref(), true)?;
            let spec = self.fields.entry(field.as_ref(), &delimiter)?;
            spec.validations.extend(parsed);
        }
        Ok(self)
    }

    /// Empties sanitization chains for the named fields, or all fields.
    pub fn clear_sanitizations(&mut self, fields: Option<&[&str]>) -> &mut Self {
        let names: Vec<String> = match fields {
            Some(selected) => selected.iter().map(|s| s.to_string()).collect(),
            None => self.fields.names(),
        };
        for name in names {
            if let Some(spec) = self.fields.get_mut(&name) {
                spec.sanitizations.clear();
            }
        }
        self
    }

    /// Empties validation chains for the named fields, or all fields.
    pub fn clear_validations(&mut self, fields: Option<&[&str]>) -> &mut Self {
        let names: Vec<String> = match fields {
            Some(selected) => selected.iter().map(|s| s.to_string()).collect(),
            None => self.fields.names(),
        };
        for name in names {
            if let Some(spec) = self.fields.get_mut(&name) {
                spec.validations.clear();
            }
        }
        self
    }

    /// Registers a custom sanitization callback.
    ///
    /// Re-registering an existing name, built-in or custom, is an error.
    pub fn add_custom_sanitization(
        &mut self,
        name: &str,
        callback: VetSanitizeCallback,
    ) -> Result<&mut Self> {
        let name = name.to_lowercase();
        if sanitize::registry().contains_key(name.as_str())
            || sanitize::platform_registry().contains_key(name.as_str())
            || name == "default"
            || self.custom_sanitizations.contains_key(&name)
        {
            return Err(VetError::filter(
                &name,
                "sanitization filter already exists",
            ));
        }
        log::debug!("registering custom sanitization '{name}'");
        self.custom_sanitizations.insert(name, callback);
        Ok(self)
    }

    /// Registers a custom validation callback with an optional default
    /// error message.
    pub fn add_custom_validation(
        &mut self,
        name: &str,
        callback: VetValidateCallback,
        default_errormsg: Option<&str>,
    ) -> Result<&mut Self> {
        let name = name.to_lowercase();
        if validate::registry().contains_key(name.as_str())
            || self.custom_validations.contains_key(&name)
        {
            return Err(VetError::filter(&name, "validation filter already exists"));
        }
        let errormsg = match default_errormsg {
            Some(msg) => msg.to_string(),
            None => messages::factory_errormsg(DEFAULT_LONG)
                .expect("default_long template present")
                .to_string(),
        };
        log::debug!("registering custom validation '{name}'");
        self.custom_validations
            .insert(name, VetCustomValidation { callback, errormsg });
        Ok(self)
    }

    /// Runs every field's sanitization chain, mutating the record in place.
    ///
    /// Sanitization is best-effort on values and never records
    /// data-quality errors; only configuration problems (an unresolvable
    /// filter name) abort the run.
    pub fn sanitize(&self, input: &mut Value) -> Result<()> {
        log::debug!(
            "running sanitization chains over {} registered fields",
            self.fields.len()
        );
        for spec in self.fields.iter() {
            if spec.sanitizations.is_empty() {
                continue;
            }

            let mut skip_count = 0usize;
            for rule in &spec.sanitizations {
                if skip_count > 0 {
                    skip_count -= 1;
                    continue;
                }

                let synonym = find_alias(&rule.filter);
                let args: Vec<String> = rule.args.iter().map(|arg| find_alias(arg)).collect();

                if synonym == "skip" {
                    match args.first() {
                        None => break,
                        Some(first) if first.as_str() == "all" => break,
                        Some(first) => {
                            skip_count = parse_skip_count(first);
                            continue;
                        }
                    }
                }

                if synonym == "default" {
                    if let Some(slot) = spec.path.resolve_mut(input, true) {
                        let updated = sanitize::apply_default(slot, &args);
                        *slot = updated;
                    }
                    continue;
                }

                let Some(slot) = spec.path.resolve_mut(input, false) else {
                    continue;
                };
                if slot.is_null() {
                    continue;
                }

                if let Some(callback) = self.custom_sanitizations.get(&rule.filter) {
                    let updated = callback(slot, &args);
                    *slot = updated;
                } else if let Some(builtin) = lookup(sanitize::registry(), &rule.filter, &synonym) {
                    let updated = builtin(slot, &args);
                    *slot = updated;
                } else if let Some(platform) =
                    lookup(sanitize::platform_registry(), &rule.filter, &synonym)
                {
                    let updated = platform(slot, &args);
                    *slot = updated;
                } else {
                    return Err(VetError::filter(
                        &rule.filter,
                        "sanitization filter does not exist",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Runs every field's validation chain and returns the report.
    ///
    /// The record is never mutated. Every field's entire chain is
    /// evaluated (modulo `skip`) so the report is complete; there is no
    /// early abort on the first failure.
    pub fn validate(&self, input: &Value) -> Result<VetReport> {
        let mut entries: Vec<VetErrorEntry> = Vec::new();

        for spec in self.fields.iter() {
            if spec.validations.is_empty() {
                continue;
            }

            let value = spec.path.resolve(input).filter(|v| !v.is_null());

            let mut skip_count = 0usize;
            for rule in &spec.validations {
                if skip_count > 0 {
                    skip_count -= 1;
                    continue;
                }

                let synonym = find_alias(&rule.filter);
                let args: Vec<String> = rule.args.iter().map(|arg| find_alias(arg)).collect();

                if synonym == "skip" {
                    match args.first() {
                        None => break,
                        Some(first) if first.as_str() == "all" => break,
                        Some(first) => {
                            skip_count = parse_skip_count(first);
                            continue;
                        }
                    }
                }

                let null = Value::Null;
                let current = value.unwrap_or(&null);

                let mut candidates: Vec<String> = Vec::new();
                let passed;

                if synonym == "required" || synonym == "notempty" {
                    // presence checks run even when the field is absent
                    let predicate = validate::registry()
                        .get(synonym.as_str())
                        .copied()
                        .expect("presence predicate registered");
                    passed = predicate(current, &args);
                    if !passed {
                        candidates.push(rule.errormsg.clone());
                        candidates.push(messages::resolve_errormsg(&rule.filter).to_string());
                    }
                } else if value.is_none() {
                    // absence is not re-flagged per other filters
                    passed = true;
                } else if synonym == "equalsfield" {
                    passed = self.equals_field(current, &args, input);
                    if !passed {
                        candidates.push(rule.errormsg.clone());
                        candidates.push(messages::resolve_errormsg(&rule.filter).to_string());
                    }
                } else if let Some(custom) = self.custom_validations.get(&rule.filter) {
                    passed = (custom.callback)(current, &args);
                    if !passed {
                        candidates.push(rule.errormsg.clone());
                        candidates.push(custom.errormsg.clone());
                        candidates.push(
                            messages::factory_errormsg(DEFAULT_LONG)
                                .expect("default_long template present")
                                .to_string(),
                        );
                    }
                } else if let Some(builtin) = lookup(validate::registry(), &rule.filter, &synonym) {
                    passed = builtin(current, &args);
                    if !passed {
                        candidates.push(rule.errormsg.clone());
                        candidates.push(messages::resolve_errormsg(&rule.filter).to_string());
                    }
                } else {
                    passed = false;
                    candidates.push(
                        messages::factory_errormsg(INEXISTENT_VALIDATION)
                            .expect("inexistent_validation template present")
                            .to_string(),
                    );
                }

                if !passed {
                    if let Some(errormsg) = candidates.into_iter().find(|msg| !msg.is_empty()) {
                        entries.push(VetErrorEntry {
                            field: spec.name.clone(),
                            label: spec.label.clone(),
                            value: display_string(current),
                            filter: rule.filter.clone(),
                            args: rule.args.clone(),
                            errormsg,
                        });
                    }
                }
            }
        }

        log::debug!("validation produced {} error entries", entries.len());
        Ok(VetReport::new(
            entries,
            self.spans.clone(),
            self.args_delimiter.clone(),
        ))
    }

    /// Sanitizes in place, then validates the sanitized record.
    pub fn run(&self, input: &mut Value) -> Result<VetReport> {
        self.sanitize(input)?;
        self.validate(input)
    }

    /// Compares the current value against another field's resolved value.
    fn equals_field(&self, current: &Value, args: &[String], input: &Value) -> bool {
        let Some(other_name) = args.first() else {
            return false;
        };
        let Ok(path) = VetFieldPath::parse(other_name, &self.field_delimiter) else {
            return false;
        };
        match path.resolve(input) {
            Some(other) => display_string(current) == display_string(other),
            None => false,
        }
    }
}

fn lookup<F: Copy>(
    table: &'static HashMap<&'static str, F>,
    filter: &str,
    synonym: &str,
) -> Option<F> {
    table
        .get(filter)
        .copied()
        .or_else(|| table.get(synonym).copied())
}

/// Skip counts must be positive integers; anything else skips nothing.
fn parse_skip_count(token: &str) -> usize {
    match token.parse::<usize>() {
        Ok(count) if count >= 1 => count,
        _ => 0,
    }
}
