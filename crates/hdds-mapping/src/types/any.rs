// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-erased value holder.
//!
//! [`Any`] keeps a small [`AnyHandle`] record (payload + descriptor) behind its
//! own `Arc`, so erasure never discards type information: `retrieve` compares
//! the recorded descriptor by identity before re-typing the payload.

use crate::error::{MappingError, Result};
use crate::types::descriptor::{TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use crate::types::wrapper::{same_payload, Payload, Void, Wrapper};
use std::fmt;
use std::ptr;
use std::sync::Arc;

/// Record captured by [`Any`].
pub struct AnyHandle {
    object: Option<Payload>,
    value_type: &'static TypeDescriptor,
}

impl AnyHandle {
    pub fn object(&self) -> Option<&Payload> {
        self.object.as_ref()
    }

    pub fn value_type(&self) -> &'static TypeDescriptor {
        self.value_type
    }
}

/// Class marker of [`Any`].
#[derive(Debug)]
pub struct AnyClass;

impl TypeClass for AnyClass {
    fn create_type() -> TypeDescriptor {
        TypeDescriptor::new(TypeKind::Any).with_creator(|| Any::empty().to_void())
    }
}

/// Holder for a value whose type is only known where it was stored.
#[derive(Clone, Default)]
pub struct Any {
    handle: Option<Arc<AnyHandle>>,
}

impl Any {
    /// Empty holder.
    pub fn empty() -> Self {
        Self { handle: None }
    }

    /// Capture a typed wrapper.
    pub fn new<W: Wrapper>(value: &W) -> Self {
        let mut any = Self::empty();
        any.store(value);
        any
    }

    /// Capture an erased value.
    pub fn capture_void(value: &Void) -> Self {
        let mut any = Self::empty();
        any.store_void(value);
        any
    }

    /// Re-store in place; allocates a fresh record.
    pub fn store<W: Wrapper>(&mut self, value: &W) {
        self.store_void(&value.to_void());
    }

    pub fn store_void(&mut self, value: &Void) {
        self.handle = Some(Arc::new(AnyHandle {
            object: value.object().cloned(),
            value_type: value.value_type(),
        }));
    }

    /// Drop the captured record.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    /// Descriptor of the captured value, `None` when empty.
    pub fn stored_type(&self) -> Option<&'static TypeDescriptor> {
        self.handle.as_ref().map(|h| h.value_type)
    }

    /// The captured value as an erased wrapper.
    pub fn stored(&self) -> Option<Void> {
        self.handle
            .as_ref()
            .map(|h| Void::from_parts(h.object.clone(), h.value_type))
    }

    /// Re-type the captured value as `W`.
    ///
    /// Succeeds only if the captured descriptor is the very instance returned
    /// by `W::class_type()`. An empty holder yields a null `W`.
    pub fn retrieve<W: Wrapper>(&self) -> Result<W> {
        let expected = W::class_type();
        let Some(handle) = &self.handle else {
            return Ok(W::from_parts(None, expected));
        };

        if !ptr::eq(handle.value_type, expected) {
            return Err(MappingError::TypeMismatch {
                expected: expected.to_string(),
                stored: handle.value_type.to_string(),
            });
        }

        let object = Void::from_parts(handle.object.clone(), handle.value_type)
            .try_cast_object::<W::Object>()?;
        Ok(W::from_parts(object, handle.value_type))
    }
}

impl Wrapper for Any {
    type Object = AnyHandle;

    fn class_type() -> &'static TypeDescriptor {
        AnyClass::get_type()
    }

    fn from_parts(object: Option<Arc<AnyHandle>>, _value_type: &'static TypeDescriptor) -> Self {
        Self { handle: object }
    }

    fn object(&self) -> Option<&Arc<AnyHandle>> {
        self.handle.as_ref()
    }

    fn value_type(&self) -> &'static TypeDescriptor {
        AnyClass::get_type()
    }

    /// Empty, or holding a null payload.
    fn is_null(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.object.is_none())
    }
}

impl<W: Wrapper> From<&W> for Any {
    fn from(value: &W) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Any {
    fn eq(&self, other: &Self) -> bool {
        match (&self.handle, &other.handle) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                Arc::ptr_eq(a, b) || same_payload(a.object.as_ref(), b.object.as_ref())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(h) => f
                .debug_struct("Any")
                .field("type", &format_args!("{}", h.value_type))
                .field("null", &h.object.is_none())
                .finish(),
            None => f.write_str("Any(empty)"),
        }
    }
}
