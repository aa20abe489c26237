// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum interpreter configuration.
//!
//! Codecs pick the interpreter of each enum field at runtime. The store maps
//! field paths (`"order.status"`) to [`EnumInterpreter`] values, with an
//! atomically swappable default for unlisted fields.
//!
//! # Performance
//!
//! - **Lock-free**: `DashMap` for per-field entries
//! - **Atomic swap**: `ArcSwap` for the default interpreter
//!
//! # Example
//!
//! ```rust
//! use hdds_mapping::config::InterpreterConfig;
//! use hdds_mapping::types::EnumInterpreter;
//!
//! let config = InterpreterConfig::new();
//! config.set_field("order.status", EnumInterpreter::AS_INTEGER);
//!
//! assert_eq!(config.interpreter_for("order.status"), EnumInterpreter::AS_INTEGER);
//! assert_eq!(config.interpreter_for("order.kind"), EnumInterpreter::AS_STRING);
//! ```

use crate::types::EnumInterpreter;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use std::sync::Arc;

/// Cloneable handle to a shared interpreter table.
#[derive(Clone)]
pub struct InterpreterConfig {
    default: Arc<ArcSwap<EnumInterpreter>>,
    fields: Arc<DashMap<Arc<str>, EnumInterpreter>>,
}

impl InterpreterConfig {
    /// Empty table; the default is the nullable as-string interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(EnumInterpreter::default())
    }

    #[must_use]
    pub fn with_default(default: EnumInterpreter) -> Self {
        Self {
            default: Arc::new(ArcSwap::from_pointee(default)),
            fields: Arc::new(DashMap::new()),
        }
    }

    /// Interpreter of `path`, or the default.
    #[must_use]
    pub fn interpreter_for(&self, path: &str) -> EnumInterpreter {
        match self.fields.get(path) {
            Some(entry) => *entry.value(),
            None => self.default_interpreter(),
        }
    }

    /// Interpreter of unlisted fields.
    #[must_use]
    pub fn default_interpreter(&self) -> EnumInterpreter {
        **self.default.load()
    }

    pub fn set_default(&self, interpreter: EnumInterpreter) {
        self.default.store(Arc::new(interpreter));
    }

    /// Set the interpreter of one field, returning the previous one.
    pub fn set_field(&self, path: &str, interpreter: EnumInterpreter) -> Option<EnumInterpreter> {
        self.fields.insert(Arc::from(path), interpreter)
    }

    pub fn remove_field(&self, path: &str) -> Option<EnumInterpreter> {
        self.fields.remove(path).map(|(_, interpreter)| interpreter)
    }

    /// Fields whose path starts with `prefix`, sorted by path.
    #[must_use]
    pub fn fields_with_prefix(&self, prefix: &str) -> Vec<(Arc<str>, EnumInterpreter)> {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| (Arc::clone(entry.key()), *entry.value()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterpreterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpreterConfig")
            .field("default", &self.default_interpreter())
            .field("fields", &self.len())
            .finish()
    }
}

#[cfg(feature = "serde")]
mod yaml {
    use super::InterpreterConfig;
    use crate::error::{MappingError, Result};
    use crate::types::EnumInterpreter;
    use std::collections::BTreeMap;

    /// On-disk layout.
    ///
    /// ```yaml
    /// default: as-string
    /// fields:
    ///   order.status: as-integer,not-null
    ///   order.priority: as-integer
    /// ```
    #[derive(Debug, serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    struct InterpreterFile {
        #[serde(default)]
        default: Option<EnumInterpreter>,
        #[serde(default)]
        fields: BTreeMap<String, EnumInterpreter>,
    }

    impl InterpreterConfig {
        /// Load a table from YAML.
        pub fn from_yaml_str(text: &str) -> Result<Self> {
            let file: InterpreterFile =
                serde_yaml::from_str(text).map_err(|e| MappingError::Config(e.to_string()))?;

            let config = Self::with_default(file.default.unwrap_or_default());
            for (path, interpreter) in &file.fields {
                config.set_field(path, *interpreter);
            }
            log::debug!(
                "[mapping::config] loaded {} field interpreters (default {})",
                config.len(),
                config.default_interpreter()
            );
            Ok(config)
        }
    }
}
