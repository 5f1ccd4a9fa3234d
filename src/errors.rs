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

//! # Vet Error Module
//!
//! This module defines the error types and utilities used throughout the Vet
//! engine for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Vet distinguishes two disjoint failure kinds:
//!
//! - **Configuration-time failures** are fatal and surface as [`VetError`]:
//!   a rule string the grammar cannot tokenize, a custom filter name that
//!   collides with an existing filter, or a chain step naming a filter that
//!   resolves to nothing. These are programming errors, not data problems,
//!   and abort the call immediately.
//! - **Data-quality failures** are never raised as errors. They are
//!   collected as entries inside a `VetReport` and left for the caller to
//!   render or inspect.
//!
//! ## Error Categories
//!
//! - **Parse**: rule-string grammar failures
//! - **Filter**: filter registration and dispatch failures
//! - **Validation**: invalid parameters or inputs to engine APIs
//! - **Io**: filesystem errors while loading rule maps
//! - **Serde**: serialization/deserialization errors
//! - **Internal**: unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Vet.
pub type Result<T> = std::result::Result<T, VetError>;

/// Canonical error enumeration for Vet.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum VetError {
    /// Errors raised while tokenizing a rule string.
    #[error("rule parse error: {message}")]
    Parse { message: String },

    /// Errors tied to a named filter: collisions and unresolvable names.
    #[error("filter '{filter}' error: {message}")]
    Filter { filter: String, message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for VetError {
    fn from(err: io::Error) -> Self {
        VetError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VetError {
    fn from(err: serde_json::Error) -> Self {
        VetError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for VetError {
    fn from(err: serde_yaml::Error) -> Self {
        VetError::Serde(err.to_string())
    }
}

impl VetError {
    /// Helper to construct rule parse errors.
    pub fn parse<T: Into<String>>(message: T) -> Self {
        VetError::Parse {
            message: message.into(),
        }
    }

    /// Helper to construct filter errors.
    pub fn filter(name: impl Into<String>, message: impl Into<String>) -> Self {
        VetError::Filter {
            filter: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        VetError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        VetError::Internal(message.into())
    }
}
