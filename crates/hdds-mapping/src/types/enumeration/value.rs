// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Enum<E>` wrapper.

use super::info::{EnumUnderlying, MappedEnum};
use super::interpreter::{EnumInterpreter, EnumTypeDispatcher, InterpreterKind};
use crate::types::descriptor::{Dispatcher, TypeDescriptor, TypeKind};
use crate::types::registry::{TypeKey, TypeRegistry};
use crate::types::wrapper::Wrapper;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Nullable enum value bound to one interpreter descriptor.
///
/// The descriptor decides how codecs read and write the value; sibling views
/// (`as_integer`, `not_null`, ...) share the same payload.
pub struct Enum<E> {
    object: Option<Arc<E>>,
    value_type: &'static TypeDescriptor,
}

impl<E: MappedEnum> Enum<E> {
    /// Descriptor of `E` read through `interpreter`.
    pub fn type_for(interpreter: EnumInterpreter) -> &'static TypeDescriptor {
        TypeRegistry::global().resolve(TypeKey::Enum(TypeId::of::<E>(), interpreter), || {
            TypeDescriptor::new(TypeKind::Enum)
                .with_qualifier(E::info().name_qualifier())
                .with_creator(move || match E::info().entries().first() {
                    Some(entry) => Enum::with_interpreter(entry.value, interpreter).to_void(),
                    None => Enum::<E>::null_with(interpreter).to_void(),
                })
                .with_dispatcher(Dispatcher::Enum(Box::new(EnumTypeDispatcher::<E>::new(
                    interpreter,
                ))))
        })
    }

    /// Value under the nullable as-string interpreter.
    pub fn new(value: E) -> Self {
        Self::with_interpreter(value, EnumInterpreter::AS_STRING)
    }

    pub fn with_interpreter(value: E, interpreter: EnumInterpreter) -> Self {
        Self {
            object: Some(Arc::new(value)),
            value_type: Self::type_for(interpreter),
        }
    }

    pub fn null() -> Self {
        Self::null_with(EnumInterpreter::AS_STRING)
    }

    pub fn null_with(interpreter: EnumInterpreter) -> Self {
        Self {
            object: None,
            value_type: Self::type_for(interpreter),
        }
    }

    pub fn value(&self) -> Option<E> {
        self.object.as_deref().copied()
    }

    /// Interpreter this wrapper's descriptor was built for.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper was rebuilt under a descriptor without an enum
    /// dispatcher.
    pub fn interpreter(&self) -> EnumInterpreter {
        match self.value_type.enum_dispatcher() {
            Some(dispatcher) => dispatcher.interpreter(),
            None => panic!(
                "[mapping::enum] precondition violated: {} is not an enum descriptor",
                self.value_type
            ),
        }
    }

    /// Same payload under another interpreter.
    pub fn reinterpret(&self, interpreter: EnumInterpreter) -> Self {
        Self {
            object: self.object.clone(),
            value_type: Self::type_for(interpreter),
        }
    }

    pub fn as_string(&self) -> Self {
        self.reinterpret(self.interpreter().with_kind(InterpreterKind::AsString))
    }

    pub fn as_integer(&self) -> Self {
        self.reinterpret(self.interpreter().with_kind(InterpreterKind::AsInteger))
    }

    pub fn not_null(&self) -> Self {
        self.reinterpret(self.interpreter().with_not_null(true))
    }

    pub fn nullable(&self) -> Self {
        self.reinterpret(self.interpreter().with_not_null(false))
    }
}

impl<E> Clone for Enum<E> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
            value_type: self.value_type,
        }
    }
}

impl<E: MappedEnum> Default for Enum<E> {
    fn default() -> Self {
        Self::null()
    }
}

impl<E: MappedEnum> From<E> for Enum<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

impl<E: PartialEq> PartialEq for Enum<E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.object, &other.object) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || **a == **b,
            _ => false,
        }
    }
}

impl<E: Eq> Eq for Enum<E> {}

impl<E: MappedEnum> Hash for Enum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let raw = self
            .object
            .as_deref()
            .map_or(0, |value| value.to_underlying().to_u64());
        raw.hash(state);
    }
}

impl<E: MappedEnum> fmt::Debug for Enum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            None => write!(f, "{}(null)", self.value_type),
            Some(value) => match E::info().find_by_value(value) {
                Some(entry) => write!(f, "{}({})", self.value_type, entry.name),
                None => write!(f, "{}(#{})", self.value_type, value.to_underlying().to_i128()),
            },
        }
    }
}

impl<E: MappedEnum> Wrapper for Enum<E> {
    type Object = E;

    /// The nullable as-string descriptor.
    fn class_type() -> &'static TypeDescriptor {
        Self::type_for(EnumInterpreter::AS_STRING)
    }

    fn from_parts(object: Option<Arc<E>>, value_type: &'static TypeDescriptor) -> Self {
        Self { object, value_type }
    }

    fn object(&self) -> Option<&Arc<E>> {
        self.object.as_ref()
    }

    fn value_type(&self) -> &'static TypeDescriptor {
        self.value_type
    }
}
