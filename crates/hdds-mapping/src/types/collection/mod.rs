// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic containers and their polymorphic dispatchers.
//!
//! Codec code holds a container as [`Void`] plus its descriptor, and only
//! learns element types through `params()`. Each shape exposes exactly one
//! mutation primitive through its dispatcher:
//!
//! | Shape | Dispatcher | Operation |
//! |-------|------------|-----------|
//! | [`Vector`] | [`SequenceDispatcher`] | `append(container, item)` |
//! | [`UnorderedSet`] | [`SetDispatcher`] | `insert(container, item)` |
//! | [`UnorderedMap`] | [`MapDispatcher`] | `assign(container, key, value)` |
//!
//! Dispatchers do not validate operand descriptors; the caller matches them
//! against `params()` first. A payload of the wrong Rust type panics.

mod unordered_map;
mod unordered_set;
mod vector;

pub use unordered_map::{UnorderedMap, UnorderedMapClass};
pub use unordered_set::{UnorderedSet, UnorderedSetClass};
pub use vector::{Vector, VectorClass};

use crate::error::MappingError;
use crate::types::wrapper::Void;
use std::any::Any as StdAny;
use std::sync::Arc;

/// Mutation primitive of sequence descriptors.
pub trait SequenceDispatcher: Send + Sync {
    /// Push `item` at the end of `container`.
    fn append(&self, container: &Void, item: &Void);
}

/// Mutation primitive of hash-set descriptors.
pub trait SetDispatcher: Send + Sync {
    /// Add `item`; no-op if an equal item is present.
    fn insert(&self, container: &Void, item: &Void);
}

/// Mutation primitive of hash-map descriptors.
pub trait MapDispatcher: Send + Sync {
    /// Bind `value` to `key`, replacing any previous binding.
    fn assign(&self, container: &Void, key: &Void, value: &Void);
}

/// Payload of an erased container handed to a dispatcher.
///
/// # Panics
///
/// Panics on a null container or a payload of another Rust type.
fn container_payload<T: StdAny + Send + Sync>(container: &Void, operation: &str) -> Arc<T> {
    match container.cast_object::<T>() {
        Some(payload) => payload,
        None => panic!(
            "[mapping::{}] precondition violated: {}",
            operation,
            MappingError::NullContainer {
                descriptor: container.value_type().to_string(),
            }
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::primitive::{Int32, Text};
    use crate::types::wrapper::Wrapper;

    #[test]
    #[should_panic(expected = "Null container")]
    fn test_null_container_panics() {
        let vector = Vector::<Int32>::null().to_void();
        let dispatcher = Vector::<Int32>::class_type()
            .sequence_dispatcher()
            .expect("sequence dispatcher");
        dispatcher.append(&vector, &Int32::new(1).to_void());
    }

    #[test]
    fn test_dispatcher_variant_matches_shape() {
        let vector = Vector::<Text>::class_type();
        assert!(vector.sequence_dispatcher().is_some());
        assert!(vector.set_dispatcher().is_none());
        assert!(vector.map_dispatcher().is_none());
        assert!(vector.enum_dispatcher().is_none());

        let set = UnorderedSet::<Text>::class_type();
        assert!(set.set_dispatcher().is_some());
        assert!(set.sequence_dispatcher().is_none());

        let map = UnorderedMap::<Text, Int32>::class_type();
        assert!(map.map_dispatcher().is_some());
        assert!(map.set_dispatcher().is_none());
    }
}
