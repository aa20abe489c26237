// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error channels of the mapping core.
//!
//! Two disjoint channels exist and must not be mixed:
//!
//! - [`MappingError`]: contract violations (wrong retrieval type, administrative
//!   enum lookups that miss, broken registrations). These point at a bug in the
//!   calling schema or codec and are meant to be propagated with `?`, not retried.
//! - [`EnumInterpreterError`]: per-field outcome of an enum conversion. Malformed
//!   wire input is expected, so it travels next to the converted value and never
//!   as an `Err`.

use std::fmt;

/// Contract violations raised by the mapping core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// `Any::retrieve` asked for a type other than the stored one.
    TypeMismatch { expected: String, stored: String },
    /// A payload does not have the concrete type its descriptor promises.
    PayloadMismatch { descriptor: String },
    /// A typed container helper was called on a null container.
    NullContainer { descriptor: String },
    /// Administrative enum lookup found no entry.
    EntryNotFound { enum_name: String, key: String },
    /// Enum registration declared the same name or value twice.
    DuplicateEntry { enum_name: String, key: String },
    /// A registered entry failed to interpret (registry is inconsistent).
    InterpretationFault {
        enum_name: String,
        error: EnumInterpreterError,
    },
    /// Interpreter strategy text could not be parsed.
    InvalidInterpreter(String),
    /// Interpreter configuration could not be loaded.
    Config(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, stored } => {
                write!(f, "Type mismatch: expected {}, stored {}", expected, stored)
            }
            Self::PayloadMismatch { descriptor } => {
                write!(f, "Payload does not match descriptor {}", descriptor)
            }
            Self::NullContainer { descriptor } => {
                write!(f, "Null container of type {}", descriptor)
            }
            Self::EntryNotFound { enum_name, key } => {
                write!(f, "Enum {}: entry not found: {}", enum_name, key)
            }
            Self::DuplicateEntry { enum_name, key } => {
                write!(f, "Enum {}: duplicate entry: {}", enum_name, key)
            }
            Self::InterpretationFault { enum_name, error } => {
                write!(f, "Enum {}: registered entry failed to interpret ({})", enum_name, error)
            }
            Self::InvalidInterpreter(text) => write!(f, "Invalid enum interpreter: {}", text),
            Self::Config(msg) => write!(f, "Interpreter config error: {}", msg),
        }
    }
}

impl std::error::Error for MappingError {}

/// Result alias for contract-checked operations.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Outcome of an enum interpretation.
///
/// Numeric codes are stable and may be reported on the wire.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum EnumInterpreterError {
    /// The interpretation was successful.
    #[default]
    Ok = 0,
    /// The enum value was not built for this interpreter (wrong enum type,
    /// or e.g. a nullable wrapper handed to a not-null interpreter).
    TypeMismatchEnum = 1,
    /// The wire-side value is not of the interpretation type.
    TypeMismatchEnumValue = 2,
    /// Null was given to a not-null interpreter.
    ConstraintNotNull = 3,
    /// No entry matches the given name or value.
    EntryNotFound = 4,
}

impl EnumInterpreterError {
    /// Stable numeric code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// `true` for [`EnumInterpreterError::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for EnumInterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::TypeMismatchEnum => "TYPE_MISMATCH_ENUM",
            Self::TypeMismatchEnumValue => "TYPE_MISMATCH_ENUM_VALUE",
            Self::ConstraintNotNull => "CONSTRAINT_NOT_NULL",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
        };
        f.write_str(label)
    }
}
