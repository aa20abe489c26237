// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type identity, typed wrappers and erased values.
//!
//! # Features
//!
//! - **TypeDescriptor**: one process-lifetime descriptor per instantiation,
//!   compared by identity
//! - **Wrappers**: `Arc` payload + descriptor, erasable to [`Void`]
//! - **Any**: holder that keeps the descriptor next to the erased payload
//! - **Containers**: [`Vector`], [`UnorderedSet`], [`UnorderedMap`] mutated
//!   through per-shape dispatchers
//! - **Enums**: [`Enum`] values converted to/from wire primitives by
//!   [`EnumInterpreter`] strategies
//!
//! # Example
//!
//! ```rust
//! use hdds_mapping::types::{Any, Int32, Vector, Wrapper};
//!
//! let numbers = Vector::<Int32>::create_shared();
//!
//! // Codec side: only the erased container and its descriptor are known.
//! let erased = numbers.to_void();
//! let descriptor = erased.value_type();
//! let append = descriptor.sequence_dispatcher().expect("sequence");
//! assert!(std::ptr::eq(descriptor.params()[0], Int32::class_type()));
//! append.append(&erased, &Int32::new(7).to_void());
//!
//! assert_eq!(numbers.len(), 1);
//!
//! let any = Any::new(&numbers);
//! let back: Vector<Int32> = any.retrieve().expect("same type");
//! assert_eq!(back, numbers);
//! assert!(any.retrieve::<Vector<Int32>>().is_ok());
//! ```

mod any;
pub mod collection;
mod descriptor;
pub mod enumeration;
mod primitive;
mod registry;
mod wrapper;

pub use any::{Any, AnyClass, AnyHandle};
pub use collection::{
    MapDispatcher, SequenceDispatcher, SetDispatcher, UnorderedMap, UnorderedMapClass,
    UnorderedSet, UnorderedSetClass, Vector, VectorClass,
};
pub use descriptor::{Creator, Dispatcher, PrimitiveKind, TypeDescriptor, TypeKind};
pub use enumeration::{
    Enum, EnumDispatcher, EnumInfo, EnumInterpreter, EnumListing, EnumListingEntry,
    EnumUnderlying, EnumValueInfo, InterpreterKind, MappedEnum,
};
pub use primitive::{
    Boolean, BooleanClass, Float32, Float32Class, Float64, Float64Class, Int16, Int16Class, Int32,
    Int32Class, Int64, Int64Class, Int8, Int8Class, Primitive, Text, TextClass, UInt16,
    UInt16Class, UInt32, UInt32Class, UInt64, UInt64Class, UInt8, UInt8Class,
};
pub use registry::{TypeClass, TypeRegistry};
pub use wrapper::{ObjectWrapper, Payload, Void, VoidClass, Wrapper};

#[cfg(test)]
mod tests;
