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

//! # Vet Core Library
//!
//! This is the main library entry point for the Vet declarative field
//! sanitization and validation engine. Given a nested input record and a
//! set of per-field rule chains, Vet transforms field values through an
//! ordered pipeline of sanitization filters and checks them against an
//! ordered pipeline of validation filters, collecting human-readable
//! error messages keyed by field.
//!
//! ## Module Overview
//!
//! The library is organized into the following major modules:
//!
//! - **errors**: Canonical error type and result alias
//! - **record**: Input-record helpers over JSON values
//! - **path**: Hierarchical field-path parsing and slot resolution
//! - **rule**: The compact rule-string grammar, parser and renderer
//! - **alias**: Filter-name synonyms and flag enumerations
//! - **field**: Field registry with label humanization
//! - **messages**: Factory error-message catalog
//! - **report**: Validation reports, render modes and span wrapping
//! - **filters**: Built-in sanitization transforms and validation predicates
//! - **engine**: The engine instance tying everything together
//! - **ruleset**: Declarative JSON/YAML rule-map loading
//! - **cleanse**: Standalone shallow scrub helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vetx::{VetEngine, VetReportFormat};
//!
//! let mut engine = VetEngine::new();
//! engine
//!     .set_sanitizations([("email", "trim|lowercase")])?
//!     .set_validations([("email", "required|email"), ("age", "required|integer|minnumeric:18")])?;
//!
//! let mut input = json!({"email": "  Foo@Bar.com  ", "age": "17"});
//! let report = engine.run(&mut input)?;
//!
//! assert_eq!(input["email"], "foo@bar.com");
//! assert!(!report.passed());
//! for message in report.render(VetReportFormat::Plain).messages() {
//!     println!("{message}");
//! }
//! # Ok::<(), vetx::VetError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **Rules**: Pipe-delimited rule strings parse into ordered chains
//! 2. **Fields**: Dotted paths address slots in the nested input record
//! 3. **Sanitize**: Chains mutate the caller's record in place
//! 4. **Validate**: Chains produce a complete, ordered error report
//! 5. **Report**: Templates interpolate and render in four modes
//!
//! ## Error Handling
//!
//! Configuration problems (malformed rule strings, filter-name
//! collisions, unresolvable filter names) surface as `Err(VetError)`.
//! Data-quality failures never raise errors; they are entries in the
//! returned report.

#![allow(non_snake_case)]

pub mod alias;
pub mod cleanse;
pub mod engine;
pub mod errors;
pub mod field;
pub mod filters;
pub mod messages;
pub mod path;
pub mod record;
pub mod report;
pub mod rule;
pub mod ruleset;

pub use alias::{find_alias, is_flag_token, VetIpVariant, VetNumberFlag};
pub use cleanse::{cleanse, xss_clean};
pub use engine::{VetEngine, VetSanitizeCallback, VetValidateCallback};
pub use errors::{Result, VetError};
pub use field::{humanize_label, VetFieldRegistry, VetFieldSpec};
pub use messages::{factory_errormsg, resolve_errormsg};
pub use path::VetFieldPath;
pub use record::{display_string, field, is_empty_value, VetRecord, VetRecordMap};
pub use report::{
    VetErrorEntry, VetRenderedReport, VetReport, VetReportFormat, VetSpanAttrs,
};
pub use rule::{parse_rule_string, render_rule_string, VetRule};
pub use ruleset::{VetFieldRules, VetRuleSet};
