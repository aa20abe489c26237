// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive wrappers.
//!
//! Only the minimal set codecs and enum interpreters target. Unlike
//! [`ObjectWrapper`](crate::types::ObjectWrapper), primitives compare and hash
//! by value so they can serve as set elements and map keys.

use crate::types::descriptor::{PrimitiveKind, TypeDescriptor, TypeKind};
use crate::types::registry::TypeClass;
use crate::types::wrapper::{same_payload, Wrapper};
use std::any::Any as StdAny;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// Value-semantics wrapper around a primitive payload.
pub struct Primitive<T, C> {
    object: Option<Arc<T>>,
    value_type: &'static TypeDescriptor,
    _class: PhantomData<fn() -> C>,
}

impl<T, C: TypeClass> Primitive<T, C> {
    pub fn null() -> Self {
        Self {
            object: None,
            value_type: C::get_type(),
            _class: PhantomData,
        }
    }

    pub fn new(value: T) -> Self {
        Self {
            object: Some(Arc::new(value)),
            value_type: C::get_type(),
            _class: PhantomData,
        }
    }
}

impl<T, C> Primitive<T, C> {
    /// Borrow the value.
    pub fn get(&self) -> Option<&T> {
        self.object.as_deref()
    }
}

impl<T: Clone, C> Primitive<T, C> {
    /// Copy the value out.
    pub fn value(&self) -> Option<T> {
        self.object.as_deref().cloned()
    }
}

impl<T, C> Clone for Primitive<T, C> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
            value_type: self.value_type,
            _class: PhantomData,
        }
    }
}

impl<T, C: TypeClass> Default for Primitive<T, C> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: PartialEq, C> PartialEq for Primitive<T, C> {
    fn eq(&self, other: &Self) -> bool {
        if same_payload(self.object.as_ref(), other.object.as_ref()) {
            return true;
        }
        match (&self.object, &other.object) {
            (Some(a), Some(b)) => **a == **b,
            _ => false,
        }
    }
}

impl<T: Eq, C> Eq for Primitive<T, C> {}

impl<T: Hash, C> Hash for Primitive<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.object {
            Some(value) => value.hash(state),
            None => 0u64.hash(state),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Primitive<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(value) => write!(f, "{}({:?})", self.value_type, value),
            None => write!(f, "{}(null)", self.value_type),
        }
    }
}

impl<T, C> Wrapper for Primitive<T, C>
where
    T: StdAny + Send + Sync,
    C: TypeClass,
{
    type Object = T;

    fn class_type() -> &'static TypeDescriptor {
        C::get_type()
    }

    fn from_parts(object: Option<Arc<T>>, value_type: &'static TypeDescriptor) -> Self {
        Self {
            object,
            value_type,
            _class: PhantomData,
        }
    }

    fn object(&self) -> Option<&Arc<T>> {
        self.object.as_ref()
    }

    fn value_type(&self) -> &'static TypeDescriptor {
        self.value_type
    }
}

impl<T, C: TypeClass> From<T> for Primitive<T, C> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

macro_rules! primitive_class {
    ($class:ident, $alias:ident, $ty:ty, $kind:ident) => {
        #[doc = concat!("Class marker of [`", stringify!($alias), "`].")]
        #[derive(Debug)]
        pub struct $class;

        impl TypeClass for $class {
            fn create_type() -> TypeDescriptor {
                TypeDescriptor::new(TypeKind::Primitive(PrimitiveKind::$kind))
                    .with_creator(|| $alias::new(<$ty>::default()).to_void())
            }
        }

        pub type $alias = Primitive<$ty, $class>;
    };
}

primitive_class!(TextClass, Text, String, String);
primitive_class!(Int8Class, Int8, i8, I8);
primitive_class!(Int16Class, Int16, i16, I16);
primitive_class!(Int32Class, Int32, i32, I32);
primitive_class!(Int64Class, Int64, i64, I64);
primitive_class!(UInt8Class, UInt8, u8, U8);
primitive_class!(UInt16Class, UInt16, u16, U16);
primitive_class!(UInt32Class, UInt32, u32, U32);
primitive_class!(UInt64Class, UInt64, u64, U64);
primitive_class!(Float32Class, Float32, f32, F32);
primitive_class!(Float64Class, Float64, f64, F64);
primitive_class!(BooleanClass, Boolean, bool, Bool);
