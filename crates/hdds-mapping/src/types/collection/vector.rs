// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered sequence container.

use super::{container_payload, SequenceDispatcher};
use crate::error::{MappingError, Result};
use crate::types::descriptor::{Dispatcher, TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use crate::types::wrapper::{ObjectWrapper, Void, Wrapper};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::marker::PhantomData;

/// Class marker of `Vector<T>`.
pub struct VectorClass<T>(PhantomData<fn() -> T>);

impl<T: Wrapper> TypeClass for VectorClass<T> {
    fn create_type() -> TypeDescriptor {
        TypeDescriptor::new(TypeKind::Sequence)
            .with_creator(|| Vector::<T>::create_shared().to_void())
            .with_param(T::class_type())
            .with_dispatcher(Dispatcher::Sequence(Box::new(VectorDispatcher::<T>(
                PhantomData,
            ))))
    }
}

/// Shared, growable sequence of wrappers.
pub type Vector<T> = ObjectWrapper<RwLock<Vec<T>>, VectorClass<T>>;

struct VectorDispatcher<T>(PhantomData<fn() -> T>);

impl<T: Wrapper> SequenceDispatcher for VectorDispatcher<T> {
    fn append(&self, container: &Void, item: &Void) {
        let vector = container_payload::<RwLock<Vec<T>>>(container, "Vector::append");
        let item = T::from_void(item);
        vector.write().push(item);
    }
}

impl<T: Wrapper> Vector<T> {
    /// New empty vector.
    pub fn create_shared() -> Self {
        Self::new(RwLock::new(Vec::new()))
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

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.payload()?.read().get(index).cloned()
    }

    /// Push at the end.
    pub fn push(&self, item: T) -> Result<()> {
        self.items_mut()?.push(item);
        Ok(())
    }

    /// Copy of the items.
    pub fn to_vec(&self) -> Vec<T> {
        self.payload()
            .map(|items| items.read().clone())
            .unwrap_or_default()
    }

    pub fn items(&self) -> Option<RwLockReadGuard<'_, Vec<T>>> {
        self.payload().map(|items| items.read())
    }

    pub fn items_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.payload()
            .map(|items| items.write())
            .ok_or_else(|| MappingError::NullContainer {
                descriptor: self.value_type().to_string(),
            })
    }
}
