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

//! # Filters Module
//!
//! The built-in filter libraries backing the two pipelines. Every filter
//! has a fixed signature and lives in a name-keyed registry; dispatch is
//! always a map lookup.
//!
//! ## Filter Categories
//!
//! - **sanitize**: value transforms, `(value, args) -> value`
//! - **validate**: predicates, `(value, args) -> bool`
//!
//! Custom filters registered on the engine take precedence over these
//! built-ins; a small platform registry of std string operations acts as
//! the last-resort sanitization tier.

pub mod sanitize;
pub mod validate;
