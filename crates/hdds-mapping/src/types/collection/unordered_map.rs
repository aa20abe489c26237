// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hash-map container.

use super::{container_payload, MapDispatcher};
use crate::error::{MappingError, Result};
use crate::types::descriptor::{Dispatcher, TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use crate::types::wrapper::{ObjectWrapper, Void, Wrapper};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Class marker of `UnorderedMap<K, V>`.
pub struct UnorderedMapClass<K, V>(PhantomData<fn() -> (K, V)>);

impl<K, V> TypeClass for UnorderedMapClass<K, V>
where
    K: Wrapper + Eq + Hash,
    V: Wrapper,
{
    fn create_type() -> TypeDescriptor {
        TypeDescriptor::new(TypeKind::Map)
            .with_creator(|| UnorderedMap::<K, V>::create_shared().to_void())
            .with_param(K::class_type())
            .with_param(V::class_type())
            .with_dispatcher(Dispatcher::Map(Box::new(MapAssigner::<K, V>(PhantomData))))
    }
}

/// Shared hash map between wrappers.
pub type UnorderedMap<K, V> = ObjectWrapper<RwLock<HashMap<K, V>>, UnorderedMapClass<K, V>>;

struct MapAssigner<K, V>(PhantomData<fn() -> (K, V)>);

impl<K, V> MapDispatcher for MapAssigner<K, V>
where
    K: Wrapper + Eq + Hash,
    V: Wrapper,
{
    fn assign(&self, container: &Void, key: &Void, value: &Void) {
        let map = container_payload::<RwLock<HashMap<K, V>>>(container, "UnorderedMap::assign");
        let (key, value) = (K::from_void(key), V::from_void(value));
        map.write().insert(key, value);
    }
}

impl<K, V> UnorderedMap<K, V>
where
    K: Wrapper + Eq + Hash,
    V: Wrapper,
{
    pub fn create_shared() -> Self {
        Self::new(RwLock::new(HashMap::new()))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::new(RwLock::new(entries.into_iter().collect()))
    }

    /// Number of bindings (0 when null).
    pub fn len(&self) -> usize {
        self.payload().map_or(0, |entries| entries.read().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value bound to `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.payload()?.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.payload()
            .is_some_and(|entries| entries.read().contains_key(key))
    }

    /// Bind `value` to `key`, returning the previous value.
    pub fn insert(&self, key: K, value: V) -> Result<Option<V>> {
        Ok(self.entries_mut()?.insert(key, value))
    }

    pub fn entries(&self) -> Option<RwLockReadGuard<'_, HashMap<K, V>>> {
        self.payload().map(|entries| entries.read())
    }

    pub fn entries_mut(&self) -> Result<RwLockWriteGuard<'_, HashMap<K, V>>> {
        self.payload()
            .map(|entries| entries.write())
            .ok_or_else(|| MappingError::NullContainer {
                descriptor: self.value_type().to_string(),
            })
    }
}
