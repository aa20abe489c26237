// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # HDDS Mapping - runtime type erasure and reflection
//!
//! The layer codec code (JSON/XML encoders, schema generators) stands on to
//! handle values whose types are unknown at the call site.
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                    Codecs (external collaborators)                  |
//! +---------------------------------------------------------------------+
//! |  Any holder  |  Container dispatch  |  Enum interpreters + config   |
//! +---------------------------------------------------------------------+
//! |            Typed wrappers (Arc payload + &'static descriptor)       |
//! +---------------------------------------------------------------------+
//! |                 Type registry (one descriptor per type)             |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeDescriptor`] | Runtime identity of one instantiation, compared by address |
//! | [`Void`] | Erased wrapper passed across dispatch seams |
//! | [`Any`] | Holder that remembers the descriptor of what it stores |
//! | [`Vector`] / [`UnorderedSet`] / [`UnorderedMap`] | Containers with per-shape dispatchers |
//! | [`Enum`] | Enum value bound to an [`EnumInterpreter`] |
//!
//! ## Errors
//!
//! Contract violations are [`MappingError`] and travel through `Result`.
//! Enum conversion outcomes are [`EnumInterpreterError`] values returned next
//! to the converted value.
//!
//! ## Features
//!
//! - `serde` (default): serde derives on interpreter types and listings, YAML
//!   loading of [`config::InterpreterConfig`]

pub mod config;
pub mod error;
pub mod types;

pub use error::{EnumInterpreterError, MappingError, Result};
pub use types::{
    Any, Enum, EnumInfo, EnumInterpreter, MappedEnum, TypeClass, TypeDescriptor, TypeKind,
    TypeRegistry, UnorderedMap, UnorderedSet, Vector, Void, Wrapper,
};
