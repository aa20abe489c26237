// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hash-set container.

use super::{container_payload, SetDispatcher};
use crate::error::{MappingError, Result};
use crate::types::descriptor::{Dispatcher, TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use crate::types::wrapper::{ObjectWrapper, Void, Wrapper};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

/// Class marker of `UnorderedSet<T>`.
pub struct UnorderedSetClass<T>(PhantomData<fn() -> T>);

impl<T: Wrapper + Eq + Hash> TypeClass for UnorderedSetClass<T> {
    fn create_type() -> TypeDescriptor {
        TypeDescriptor::new(TypeKind::Set)
            .with_creator(|| UnorderedSet::<T>::create_shared().to_void())
            .with_param(T::class_type())
            .with_dispatcher(Dispatcher::Set(Box::new(SetInserter::<T>(PhantomData))))
    }
}

/// Shared hash set of wrappers. Iteration order is unspecified.
pub type UnorderedSet<T> = ObjectWrapper<RwLock<HashSet<T>>, UnorderedSetClass<T>>;

struct SetInserter<T>(PhantomData<fn() -> T>);

impl<T: Wrapper + Eq + Hash> SetDispatcher for SetInserter<T> {
    fn insert(&self, container: &Void, item: &Void) {
        let set = container_payload::<RwLock<HashSet<T>>>(container, "UnorderedSet::insert");
        let item = T::from_void(item);
        set.write().insert(item);
    }
}

impl<T: Wrapper + Eq + Hash> UnorderedSet<T> {
    pub fn create_shared() -> Self {
        Self::new(RwLock::new(HashSet::new()))
    }

    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(RwLock::new(items.into_iter().collect()))
    }

    /// Number of items (0 when null).
    pub fn len(&self) -> usize {
        self.payload().map_or(0, |items| items.read().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test; always `false` for a null set.
    pub fn contains(&self, item: &T) -> bool {
        self.payload()
            .is_some_and(|items| items.read().contains(item))
    }

    /// Add an item. Returns `false` if an equal item was already present.
    pub fn insert(&self, item: T) -> Result<bool> {
        Ok(self.items_mut()?.insert(item))
    }

    pub fn items(&self) -> Option<RwLockReadGuard<'_, HashSet<T>>> {
        self.payload().map(|items| items.read())
    }

    pub fn items_mut(&self) -> Result<RwLockWriteGuard<'_, HashSet<T>>> {
        self.payload()
            .map(|items| items.write())
            .ok_or_else(|| MappingError::NullContainer {
                descriptor: self.value_type().to_string(),
            })
    }
}
