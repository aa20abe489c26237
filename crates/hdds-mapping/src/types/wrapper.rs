// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed wrappers: a shared payload paired with its descriptor.

use crate::error::MappingError;
use crate::types::descriptor::{TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use std::any::Any as StdAny;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// Erased shared payload.
pub type Payload = Arc<dyn StdAny + Send + Sync>;

/// Common surface of every typed wrapper.
///
/// A wrapper is a nullable `Arc` payload plus a non-owning descriptor that is
/// fixed for the wrapper's lifetime.
pub trait Wrapper: Clone + Send + Sync + 'static {
    /// Concrete payload type.
    type Object: StdAny + Send + Sync;

    /// Descriptor of the wrapper type itself.
    fn class_type() -> &'static TypeDescriptor;

    /// Rebuild a wrapper from its parts.
    fn from_parts(object: Option<Arc<Self::Object>>, value_type: &'static TypeDescriptor) -> Self;

    /// Shared payload, `None` when null.
    fn object(&self) -> Option<&Arc<Self::Object>>;

    /// Descriptor carried by this value (may be more specific than `class_type`).
    fn value_type(&self) -> &'static TypeDescriptor;

    fn is_null(&self) -> bool {
        self.object().is_none()
    }

    /// Erase the static type, keeping payload and descriptor.
    fn to_void(&self) -> Void {
        Void::from_parts(
            self.object().map(|object| Arc::clone(object) as Payload),
            self.value_type(),
        )
    }

    /// Re-type an erased value without checking its descriptor.
    ///
    /// The caller must already have matched `value.value_type()` against this
    /// wrapper type.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not a `Self::Object`.
    fn from_void(value: &Void) -> Self {
        Self::from_parts(value.cast_object::<Self::Object>(), value.value_type())
    }
}

/// Class marker of [`Void`].
#[derive(Debug)]
pub struct VoidClass;

impl TypeClass for VoidClass {
    fn create_type() -> TypeDescriptor {
        TypeDescriptor::new(TypeKind::Void)
    }
}

/// Erased wrapper used across dispatch seams.
#[derive(Clone)]
pub struct Void {
    object: Option<Payload>,
    value_type: &'static TypeDescriptor,
}

impl Void {
    /// Null value typed with `value_type`.
    pub fn null(value_type: &'static TypeDescriptor) -> Self {
        Self {
            object: None,
            value_type,
        }
    }

    pub fn from_parts(object: Option<Payload>, value_type: &'static TypeDescriptor) -> Self {
        Self { object, value_type }
    }

    /// Descriptor of the untyped `Void` class.
    pub fn class_type() -> &'static TypeDescriptor {
        VoidClass::get_type()
    }

    pub fn object(&self) -> Option<&Payload> {
        self.object.as_ref()
    }

    pub fn value_type(&self) -> &'static TypeDescriptor {
        self.value_type
    }

    pub fn is_null(&self) -> bool {
        self.object.is_none()
    }

    /// Static cast to a typed wrapper (see [`Wrapper::from_void`]).
    pub fn cast<W: Wrapper>(&self) -> W {
        W::from_void(self)
    }

    /// Downcast the payload, reporting a mismatch instead of panicking.
    pub fn try_cast_object<T: StdAny + Send + Sync>(
        &self,
    ) -> Result<Option<Arc<T>>, MappingError> {
        match &self.object {
            None => Ok(None),
            Some(object) => Arc::clone(object)
                .downcast::<T>()
                .map(Some)
                .map_err(|_| MappingError::PayloadMismatch {
                    descriptor: self.value_type.to_string(),
                }),
        }
    }

    pub(crate) fn cast_object<T: StdAny + Send + Sync>(&self) -> Option<Arc<T>> {
        match self.try_cast_object::<T>() {
            Ok(object) => object,
            Err(e) => panic!("[mapping::cast] precondition violated: {}", e),
        }
    }
}

impl PartialEq for Void {
    fn eq(&self, other: &Self) -> bool {
        same_payload(self.object.as_ref(), other.object.as_ref())
    }
}

impl fmt::Debug for Void {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Void")
            .field("type", &format_args!("{}", self.value_type))
            .field("null", &self.is_null())
            .finish()
    }
}

/// Payload identity: same allocation, or both null.
pub(crate) fn same_payload<T: ?Sized>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const (),
        _ => false,
    }
}

/// Generic wrapper with identity semantics.
///
/// Two wrappers are equal iff they share the payload allocation or are both
/// null. Containers, `Void` and `Any` are built on this rule.
pub struct ObjectWrapper<T, C> {
    object: Option<Arc<T>>,
    value_type: &'static TypeDescriptor,
    _class: PhantomData<fn() -> C>,
}

impl<T, C: TypeClass> ObjectWrapper<T, C> {
    /// Null wrapper typed with the class descriptor.
    pub fn null() -> Self {
        Self::with_type(None, C::get_type())
    }

    /// Wrap a fresh payload.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an existing shared payload.
    pub fn from_arc(object: Arc<T>) -> Self {
        Self::with_type(Some(object), C::get_type())
    }
}

impl<T, C> ObjectWrapper<T, C> {
    /// Wrap a payload under an explicit descriptor.
    ///
    /// Allows declaring a more specific descriptor than the class implies,
    /// including for null payloads.
    pub fn with_type(object: Option<Arc<T>>, value_type: &'static TypeDescriptor) -> Self {
        Self {
            object,
            value_type,
            _class: PhantomData,
        }
    }

    /// Borrow the payload.
    pub fn payload(&self) -> Option<&T> {
        self.object.as_deref()
    }
}

impl<T, C> Clone for ObjectWrapper<T, C> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
            value_type: self.value_type,
            _class: PhantomData,
        }
    }
}

impl<T, C: TypeClass> Default for ObjectWrapper<T, C> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, C> PartialEq for ObjectWrapper<T, C> {
    fn eq(&self, other: &Self) -> bool {
        same_payload(self.object.as_ref(), other.object.as_ref())
    }
}

impl<T, C> Eq for ObjectWrapper<T, C> {}

impl<T, C> Hash for ObjectWrapper<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.object {
            Some(object) => (Arc::as_ptr(object) as *const () as usize).hash(state),
            None => 0usize.hash(state),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ObjectWrapper<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectWrapper")
            .field("type", &format_args!("{}", self.value_type))
            .field("object", &self.object)
            .finish()
    }
}

impl<T, C> Wrapper for ObjectWrapper<T, C>
where
    T: StdAny + Send + Sync,
    C: TypeClass,
{
    type Object = T;

    fn class_type() -> &'static TypeDescriptor {
        C::get_type()
    }

    fn from_parts(object: Option<Arc<T>>, value_type: &'static TypeDescriptor) -> Self {
        Self::with_type(object, value_type)
    }

    fn object(&self) -> Option<&Arc<T>> {
        self.object.as_ref()
    }

    fn value_type(&self) -> &'static TypeDescriptor {
        self.value_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::descriptor::PrimitiveKind;

    struct BlobClass;

    impl TypeClass for BlobClass {
        fn create_type() -> TypeDescriptor {
            TypeDescriptor::new(TypeKind::Primitive(PrimitiveKind::U8)).with_qualifier(Some("blob"))
        }
    }

    type Blob = ObjectWrapper<Vec<u8>, BlobClass>;

    #[test]
    fn test_null_wrapper_is_typed() {
        let blob = Blob::null();
        assert!(blob.is_null());
        assert!(std::ptr::eq(blob.value_type(), BlobClass::get_type()));
        assert_eq!(blob, Blob::default());
    }

    #[test]
    fn test_equality_is_payload_identity() {
        let a = Blob::new(vec![1, 2, 3]);
        let b = a.clone();
        let c = Blob::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Blob::null());
        assert_eq!(a.payload(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_explicit_descriptor_survives_erasure() {
        let other = Void::class_type();
        let typed_null = Blob::with_type(None, other);
        let erased = typed_null.to_void();
        assert!(erased.is_null());
        assert!(std::ptr::eq(erased.value_type(), other));

        let back: Blob = erased.cast();
        assert!(std::ptr::eq(back.value_type(), other));
    }

    #[test]
    fn test_void_roundtrip_keeps_payload() {
        let blob = Blob::new(vec![7]);
        let erased = blob.to_void();
        assert_eq!(erased, blob.to_void());
        let back = Blob::from_void(&erased);
        assert_eq!(back, blob);
    }

    #[test]
    fn test_try_cast_reports_mismatch() {
        let erased = Blob::new(vec![7]).to_void();
        let err = erased.try_cast_object::<String>().unwrap_err();
        assert!(matches!(err, MappingError::PayloadMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_unchecked_cast_panics_on_wrong_payload() {
        let erased = Blob::new(vec![7]).to_void();
        let _ = erased.cast_object::<String>();
    }
}
