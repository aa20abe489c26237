// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum interpreter strategies.
//!
//! An [`EnumInterpreter`] is a plain value. Paired with a [`MappedEnum`] type it
//! yields the conversion functions, the wire-side descriptor and the not-null
//! constraint. Conversions report their outcome as an
//! [`EnumInterpreterError`] next to the result, never as `Err`.

use super::info::{EnumUnderlying, MappedEnum};
use super::value::Enum;
use crate::error::{EnumInterpreterError, MappingError, Result};
use crate::types::any::Any;
use crate::types::descriptor::TypeDescriptor;
use crate::types::primitive::Text;
use crate::types::wrapper::{Void, Wrapper};
use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::str::FromStr;

/// Wire representation of an enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum InterpreterKind {
    /// Entry name, as `Text`.
    #[default]
    AsString,
    /// Underlying value, as the integer primitive of the same width.
    AsInteger,
}

impl InterpreterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsString => "as-string",
            Self::AsInteger => "as-integer",
        }
    }
}

/// Conversion policy: representation plus not-null constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EnumInterpreter {
    pub kind: InterpreterKind,
    pub not_null: bool,
}

impl EnumInterpreter {
    pub const AS_STRING: Self = Self::new(InterpreterKind::AsString, false);
    pub const AS_STRING_NOT_NULL: Self = Self::new(InterpreterKind::AsString, true);
    pub const AS_INTEGER: Self = Self::new(InterpreterKind::AsInteger, false);
    pub const AS_INTEGER_NOT_NULL: Self = Self::new(InterpreterKind::AsInteger, true);

    pub const fn new(kind: InterpreterKind, not_null: bool) -> Self {
        Self { kind, not_null }
    }

    /// Same representation, other constraint.
    pub const fn with_not_null(self, not_null: bool) -> Self {
        Self::new(self.kind, not_null)
    }

    /// Same constraint, other representation.
    pub const fn with_kind(self, kind: InterpreterKind) -> Self {
        Self::new(kind, self.not_null)
    }

    /// Wire-side descriptor: `Text` for as-string, the integer primitive of
    /// the enum's width for as-integer.
    pub fn interpretation_type<E: MappedEnum>(&self) -> &'static TypeDescriptor {
        match self.kind {
            InterpreterKind::AsString => Text::class_type(),
            InterpreterKind::AsInteger => {
                <<E::Underlying as EnumUnderlying>::Wrapper as Wrapper>::class_type()
            }
        }
    }

    /// Convert an enum value (typed with this interpreter's descriptor) to its
    /// wire representation.
    pub fn to_interpretation<E: MappedEnum>(
        &self,
        value: &Void,
    ) -> (Void, EnumInterpreterError) {
        let target = self.interpretation_type::<E>();

        if !ptr::eq(value.value_type(), Enum::<E>::type_for(*self)) {
            return (Void::null(target), EnumInterpreterError::TypeMismatchEnum);
        }

        let enum_value = match value.try_cast_object::<E>() {
            Ok(Some(enum_value)) => *enum_value,
            Ok(None) => return self.null_outcome(target),
            Err(_) => return (Void::null(target), EnumInterpreterError::TypeMismatchEnum),
        };

        let Some(entry) = E::info().find_by_value(enum_value) else {
            return (Void::null(target), EnumInterpreterError::EntryNotFound);
        };

        let projected = match self.kind {
            InterpreterKind::AsString => Text::from(entry.name).to_void(),
            InterpreterKind::AsInteger => entry.value.to_underlying().wrap(),
        };
        (projected, EnumInterpreterError::Ok)
    }

    /// Convert a wire value back to an enum value typed with this
    /// interpreter's descriptor.
    pub fn from_interpretation<E: MappedEnum>(
        &self,
        value: &Void,
    ) -> (Void, EnumInterpreterError) {
        let target = Enum::<E>::type_for(*self);

        if !ptr::eq(value.value_type(), self.interpretation_type::<E>()) {
            return (Void::null(target), EnumInterpreterError::TypeMismatchEnumValue);
        }

        let info = E::info();
        let entry = match self.kind {
            InterpreterKind::AsString => match value.try_cast_object::<String>() {
                Ok(Some(name)) => info.find_by_name(&name),
                Ok(None) => return self.null_outcome(target),
                Err(_) => {
                    return (Void::null(target), EnumInterpreterError::TypeMismatchEnumValue)
                }
            },
            InterpreterKind::AsInteger => match value.try_cast_object::<E::Underlying>() {
                Ok(Some(raw)) => info.find_by_underlying(raw.to_u64()),
                Ok(None) => return self.null_outcome(target),
                Err(_) => {
                    return (Void::null(target), EnumInterpreterError::TypeMismatchEnumValue)
                }
            },
        };

        match entry {
            Some(entry) => (
                Enum::with_interpreter(entry.value, *self).to_void(),
                EnumInterpreterError::Ok,
            ),
            None => (Void::null(target), EnumInterpreterError::EntryNotFound),
        }
    }

    /// Every registered entry projected through [`Self::to_interpretation`],
    /// in declaration order.
    ///
    /// A failing entry means the registry itself is inconsistent.
    pub fn interpreted_enum<E: MappedEnum>(&self) -> Result<Vec<Any>> {
        let info = E::info();
        let mut interpreted = Vec::with_capacity(info.len());
        for entry in info.entries() {
            let (value, error) =
                self.to_interpretation::<E>(&Enum::with_interpreter(entry.value, *self).to_void());
            if !error.is_ok() {
                log::error!(
                    "[mapping::enum] {}: entry {} failed to interpret as {} ({})",
                    info.enum_name(),
                    entry.name,
                    self,
                    error
                );
                return Err(MappingError::InterpretationFault {
                    enum_name: info.enum_name().to_string(),
                    error,
                });
            }
            interpreted.push(Any::capture_void(&value));
        }
        Ok(interpreted)
    }

    fn null_outcome(&self, target: &'static TypeDescriptor) -> (Void, EnumInterpreterError) {
        let error = if self.not_null {
            EnumInterpreterError::ConstraintNotNull
        } else {
            EnumInterpreterError::Ok
        };
        (Void::null(target), error)
    }
}

impl fmt::Display for EnumInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if self.not_null {
            f.write_str(",not-null")?;
        }
        Ok(())
    }
}

/// Parses `as-string`, `as-integer`, optionally followed by `,not-null`,
/// `,nullable` or a trailing `!`.
impl FromStr for EnumInterpreter {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MappingError::InvalidInterpreter(s.to_string());
        let text = s.trim();
        let (text, bang) = match text.strip_suffix('!') {
            Some(rest) => (rest, true),
            None => (text, false),
        };

        let mut parts = text.split(',').map(str::trim);
        let kind = match parts.next() {
            Some("as-string") | Some("string") => InterpreterKind::AsString,
            Some("as-integer") | Some("integer") => InterpreterKind::AsInteger,
            _ => return Err(invalid()),
        };

        let mut not_null = bang;
        for flag in parts {
            match flag {
                "not-null" => not_null = true,
                "nullable" if !bang => not_null = false,
                _ => return Err(invalid()),
            }
        }
        Ok(Self::new(kind, not_null))
    }
}

impl TryFrom<String> for EnumInterpreter {
    type Error = MappingError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EnumInterpreter> for String {
    fn from(value: EnumInterpreter) -> Self {
        value.to_string()
    }
}

/// Enum strategy attached to an (enum, interpreter) descriptor.
pub trait EnumDispatcher: Send + Sync {
    /// Strategy this descriptor was built for.
    fn interpreter(&self) -> EnumInterpreter;

    fn not_null(&self) -> bool {
        self.interpreter().not_null
    }

    fn to_interpretation(&self, value: &Void) -> (Void, EnumInterpreterError);

    fn from_interpretation(&self, value: &Void) -> (Void, EnumInterpreterError);

    fn interpretation_type(&self) -> &'static TypeDescriptor;

    fn interpreted_enum(&self) -> Result<Vec<Any>>;
}

pub(crate) struct EnumTypeDispatcher<E> {
    interpreter: EnumInterpreter,
    _enum: PhantomData<fn() -> E>,
}

impl<E> EnumTypeDispatcher<E> {
    pub(crate) fn new(interpreter: EnumInterpreter) -> Self {
        Self {
            interpreter,
            _enum: PhantomData,
        }
    }
}

impl<E: MappedEnum> EnumDispatcher for EnumTypeDispatcher<E> {
    fn interpreter(&self) -> EnumInterpreter {
        self.interpreter
    }

    fn to_interpretation(&self, value: &Void) -> (Void, EnumInterpreterError) {
        self.interpreter.to_interpretation::<E>(value)
    }

    fn from_interpretation(&self, value: &Void) -> (Void, EnumInterpreterError) {
        self.interpreter.from_interpretation::<E>(value)
    }

    fn interpretation_type(&self) -> &'static TypeDescriptor {
        self.interpreter.interpretation_type::<E>()
    }

    fn interpreted_enum(&self) -> Result<Vec<Any>> {
        self.interpreter.interpreted_enum::<E>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(EnumInterpreter::AS_STRING.to_string(), "as-string");
        assert_eq!(
            EnumInterpreter::AS_INTEGER_NOT_NULL.to_string(),
            "as-integer,not-null"
        );
        for interpreter in [
            EnumInterpreter::AS_STRING,
            EnumInterpreter::AS_STRING_NOT_NULL,
            EnumInterpreter::AS_INTEGER,
            EnumInterpreter::AS_INTEGER_NOT_NULL,
        ] {
            assert_eq!(interpreter.to_string().parse::<EnumInterpreter>(), Ok(interpreter));
        }
        assert_eq!(
            "as-integer!".parse::<EnumInterpreter>(),
            Ok(EnumInterpreter::AS_INTEGER_NOT_NULL)
        );
        assert_eq!(
            " string , nullable ".parse::<EnumInterpreter>(),
            Ok(EnumInterpreter::AS_STRING)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "as-float".parse::<EnumInterpreter>(),
            Err(MappingError::InvalidInterpreter(_))
        ));
        assert!("as-string,sometimes".parse::<EnumInterpreter>().is_err());
        assert!("as-string!,nullable".parse::<EnumInterpreter>().is_err());
    }

    #[test]
    fn test_sibling_strategies() {
        let base = EnumInterpreter::AS_INTEGER;
        assert_eq!(base.with_not_null(true), EnumInterpreter::AS_INTEGER_NOT_NULL);
        assert_eq!(
            base.with_kind(InterpreterKind::AsString),
            EnumInterpreter::AS_STRING
        );
        assert_eq!(EnumInterpreter::default(), EnumInterpreter::AS_STRING);
    }
}
