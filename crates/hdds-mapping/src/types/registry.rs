// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide descriptor registry.
//!
//! Rust has no per-instantiation statics in generic code, so every
//! `get_type()` accessor goes through this registry instead. Each key owns a
//! leaked `OnceLock<TypeDescriptor>`: the slot is claimed under the map shard
//! lock, then initialized outside of it, so building a descriptor may resolve
//! its parameter descriptors recursively and still runs at most once.
//!
//! The registry is append-only and never torn down.

use crate::types::descriptor::TypeDescriptor;
use crate::types::enumeration::EnumInterpreter;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

/// Registry key: one per distinct instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TypeKey {
    /// Descriptor owned by a class marker type.
    Class(TypeId),
    /// Enum type read through one interpreter.
    Enum(TypeId, EnumInterpreter),
}

type Slot = &'static OnceLock<TypeDescriptor>;

/// Append-only store of published descriptors.
pub struct TypeRegistry {
    slots: DashMap<TypeKey, Slot>,
    next_id: AtomicU32,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            slots: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    /// Get the global registry instance.
    pub fn global() -> &'static TypeRegistry {
        static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TypeRegistry::new)
    }

    /// Return the descriptor for `key`, building it with `build` on first use.
    pub(crate) fn resolve(
        &self,
        key: TypeKey,
        build: impl FnOnce() -> TypeDescriptor,
    ) -> &'static TypeDescriptor {
        // Fast path: already published.
        let existing = self.slots.get(&key).map(|slot| *slot);
        if let Some(descriptor) = existing.and_then(|slot| slot.get()) {
            return descriptor;
        }

        // Shard guard is released at the end of this statement.
        let slot: Slot = *self
            .slots
            .entry(key)
            .or_insert_with(|| Box::leak(Box::new(OnceLock::new())));

        slot.get_or_init(|| {
            let mut descriptor = build();
            descriptor.id = self.next_id.fetch_add(1, Ordering::Relaxed);
            log::debug!(
                "[mapping::registry] published descriptor #{} {}",
                descriptor.id,
                descriptor
            );
            descriptor
        })
    }

    /// Number of published descriptors.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// Returns `true` if nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of published descriptors in publication order.
    pub fn descriptors(&self) -> Vec<&'static TypeDescriptor> {
        let mut published: Vec<&'static TypeDescriptor> = self
            .slots
            .iter()
            .filter_map(|entry| {
                let slot: Slot = *entry.value();
                slot.get()
            })
            .collect();
        published.sort_by_key(|d| d.id());
        published
    }
}

/// Class marker owning one lazily published descriptor.
///
/// Implementors only describe how to build the descriptor; identity comes from
/// the registry, keyed by the marker's `TypeId`.
pub trait TypeClass: 'static {
    /// Build the descriptor. Called at most once per process.
    fn create_type() -> TypeDescriptor;

    /// The singleton descriptor of this class.
    fn get_type() -> &'static TypeDescriptor {
        TypeRegistry::global().resolve(TypeKey::Class(TypeId::of::<Self>()), Self::create_type)
    }
}
