// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type identity.
//!
//! A [`TypeDescriptor`] identifies exactly one concrete instantiation
//! (`Vector<Int32>`, `Enum<Color>` read as integer, ...). Descriptors are
//! published once by the [`TypeRegistry`](crate::types::TypeRegistry) and live
//! for the rest of the process, so they are always handled as
//! `&'static TypeDescriptor`. Equality is pointer identity.

use crate::types::collection::{MapDispatcher, SequenceDispatcher, SetDispatcher};
use crate::types::enumeration::EnumDispatcher;
use crate::types::Void;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
}

impl PrimitiveKind {
    /// Class name used in descriptors and diagnostics.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::U8 => "UInt8",
            Self::U16 => "UInt16",
            Self::U32 => "UInt32",
            Self::U64 => "UInt64",
            Self::I8 => "Int8",
            Self::I16 => "Int16",
            Self::I32 => "Int32",
            Self::I64 => "Int64",
            Self::F32 => "Float32",
            Self::F64 => "Float64",
            Self::String => "String",
        }
    }

    /// Get the size in bytes (None for strings).
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32 | Self::I32 | Self::F32 => Some(4),
            Self::U64 | Self::I64 | Self::F64 => Some(8),
            Self::String => None,
        }
    }

    /// Check if this is an integer kind.
    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::Bool | Self::F32 | Self::F64 | Self::String)
    }
}

/// Shape of a descriptor (its identity tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Erased wrapper with no static shape.
    Void,
    /// Type-erased value holder.
    Any,
    /// Primitive value.
    Primitive(PrimitiveKind),
    /// Ordered sequence (`Vector`).
    Sequence,
    /// Hash set (`UnorderedSet`).
    Set,
    /// Hash map (`UnorderedMap`).
    Map,
    /// Enumeration read through one interpreter.
    Enum,
}

impl TypeKind {
    /// Class name used in descriptors and diagnostics.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Any => "Any",
            Self::Primitive(p) => p.class_name(),
            Self::Sequence => "Vector",
            Self::Set => "UnorderedSet",
            Self::Map => "UnorderedMap",
            Self::Enum => "Enum",
        }
    }
}

/// Factory producing an erased default instance.
pub type Creator = Box<dyn Fn() -> Void + Send + Sync>;

/// Shape-specific strategy attached to a descriptor.
///
/// Each variant carries only the capability its shape needs.
pub enum Dispatcher {
    Sequence(Box<dyn SequenceDispatcher>),
    Set(Box<dyn SetDispatcher>),
    Map(Box<dyn MapDispatcher>),
    Enum(Box<dyn EnumDispatcher>),
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(_) => f.write_str("Dispatcher::Sequence"),
            Self::Set(_) => f.write_str("Dispatcher::Set"),
            Self::Map(_) => f.write_str("Dispatcher::Map"),
            Self::Enum(d) => write!(f, "Dispatcher::Enum({})", d.interpreter()),
        }
    }
}

/// A complete type descriptor.
pub struct TypeDescriptor {
    /// Publication number, assigned by the registry.
    pub(crate) id: u32,
    kind: TypeKind,
    name_qualifier: Option<&'static str>,
    creator: Option<Creator>,
    params: Vec<&'static TypeDescriptor>,
    dispatcher: Option<Dispatcher>,
}

impl TypeDescriptor {
    /// Create a new, unpublished descriptor.
    ///
    /// Descriptors built here are distinct from every registry descriptor,
    /// even when they describe the same shape.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            id: 0,
            kind,
            name_qualifier: None,
            creator: None,
            params: Vec::new(),
            dispatcher: None,
        }
    }

    /// Set the name qualifier.
    pub fn with_qualifier(mut self, qualifier: Option<&'static str>) -> Self {
        self.name_qualifier = qualifier;
        self
    }

    /// Set the default-instance factory.
    pub fn with_creator(mut self, creator: impl Fn() -> Void + Send + Sync + 'static) -> Self {
        self.creator = Some(Box::new(creator));
        self
    }

    /// Append a parameter descriptor.
    pub fn with_param(mut self, param: &'static TypeDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Attach a dispatcher.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Publication number (0 for unpublished descriptors).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Identity tag.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Class name of the shape.
    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Optional human-readable qualifier.
    pub fn name_qualifier(&self) -> Option<&'static str> {
        self.name_qualifier
    }

    /// Ordered parameter descriptors (element, or key + value).
    pub fn params(&self) -> &[&'static TypeDescriptor] {
        &self.params
    }

    /// Parameter descriptor at `index`.
    pub fn param(&self, index: usize) -> Option<&'static TypeDescriptor> {
        self.params.get(index).copied()
    }

    /// Build an erased default instance.
    pub fn create(&self) -> Option<Void> {
        self.creator.as_ref().map(|create| create())
    }

    /// Attached dispatcher, if any.
    pub fn dispatcher(&self) -> Option<&Dispatcher> {
        self.dispatcher.as_ref()
    }

    pub fn sequence_dispatcher(&self) -> Option<&dyn SequenceDispatcher> {
        match &self.dispatcher {
            Some(Dispatcher::Sequence(d)) => Some(d.as_ref()),
            _ => None,
        }
    }

    pub fn set_dispatcher(&self) -> Option<&dyn SetDispatcher> {
        match &self.dispatcher {
            Some(Dispatcher::Set(d)) => Some(d.as_ref()),
            _ => None,
        }
    }

    pub fn map_dispatcher(&self) -> Option<&dyn MapDispatcher> {
        match &self.dispatcher {
            Some(Dispatcher::Map(d)) => Some(d.as_ref()),
            _ => None,
        }
    }

    pub fn enum_dispatcher(&self) -> Option<&dyn EnumDispatcher> {
        match &self.dispatcher {
            Some(Dispatcher::Enum(d)) => Some(d.as_ref()),
            _ => None,
        }
    }

    /// Instance identity check.
    pub fn is(&self, other: &TypeDescriptor) -> bool {
        ptr::eq(self, other)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())?;
        if let Some(qualifier) = self.name_qualifier {
            write!(f, "({})", qualifier)?;
        }
        if !self.params.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", param)?;
            }
            f.write_str(">")?;
        }
        if let Some(Dispatcher::Enum(d)) = &self.dispatcher {
            write!(f, "[{}]", d.interpreter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("id", &self.id)
            .field("type", &format_args!("{}", self))
            .field("kind", &self.kind)
            .field("has_creator", &self.creator.is_some())
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}
