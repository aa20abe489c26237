// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enumeration subsystem.
//!
//! Registration happens once per enum type (`MappedEnum::info`), after which
//! the registry is read-only. Conversions are parameterized per call site by an
//! [`EnumInterpreter`]:
//!
//! | Interpreter | Wire type | Null |
//! |-------------|-----------|------|
//! | `as-string` | `Text` (entry name) | allowed |
//! | `as-integer` | `Int8`..`UInt64` (underlying width) | allowed |
//! | `...,not-null` | same | `CONSTRAINT_NOT_NULL` |
//!
//! Every (enum, interpreter) pair has its own descriptor carrying an
//! [`EnumDispatcher`], so codecs convert erased values without knowing `E`.

mod info;
mod interpreter;
mod value;

pub use info::{EnumInfo, EnumListing, EnumListingEntry, EnumUnderlying, EnumValueInfo, MappedEnum};
pub use interpreter::{EnumDispatcher, EnumInterpreter, InterpreterKind};
pub use value::Enum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EnumInterpreterError, MappingError};
    use crate::types::primitive::{Int32, Text, UInt8};
    use crate::types::wrapper::{Void, Wrapper};
    use std::collections::HashSet;
    use std::sync::OnceLock;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Color {
        Red = 1,
        Green = 2,
        Blue = 40,
    }

    impl MappedEnum for Color {
        type Underlying = u8;

        fn to_underlying(self) -> u8 {
            self as u8
        }

        fn info() -> &'static EnumInfo<Self> {
            static INFO: OnceLock<EnumInfo<Color>> = OnceLock::new();
            INFO.get_or_init(|| {
                EnumInfo::from_entries(
                    Some("Color"),
                    [
                        (Color::Red, "RED", None),
                        (Color::Green, "GREEN", None),
                        (Color::Blue, "BLUE", Some("deep blue")),
                    ],
                )
                .expect("valid entries")
            })
        }
    }

    #[test]
    fn test_descriptor_per_interpreter() {
        let as_string = Enum::<Color>::type_for(EnumInterpreter::AS_STRING);
        let as_integer = Enum::<Color>::type_for(EnumInterpreter::AS_INTEGER);
        assert!(std::ptr::eq(as_string, Enum::<Color>::class_type()));
        assert_ne!(as_string, as_integer);
        assert_ne!(as_string, Enum::<Color>::type_for(EnumInterpreter::AS_STRING_NOT_NULL));
        assert_eq!(as_integer.name_qualifier(), Some("Color"));
        assert_eq!(as_integer.to_string(), "Enum(Color)[as-integer]");

        let dispatcher = as_integer.enum_dispatcher().expect("enum dispatcher");
        assert_eq!(dispatcher.interpreter(), EnumInterpreter::AS_INTEGER);
        assert!(!dispatcher.not_null());
        assert!(std::ptr::eq(dispatcher.interpretation_type(), UInt8::class_type()));
    }

    #[test]
    fn test_as_string_conversions() {
        let interpreter = EnumInterpreter::AS_STRING;
        let (wire, error) =
            interpreter.to_interpretation::<Color>(&Enum::new(Color::Green).to_void());
        assert_eq!(error, EnumInterpreterError::Ok);
        assert_eq!(wire.cast::<Text>().value().as_deref(), Some("GREEN"));

        let (back, error) = interpreter.from_interpretation::<Color>(&wire);
        assert!(error.is_ok());
        assert_eq!(back.cast::<Enum<Color>>().value(), Some(Color::Green));

        let (missing, error) =
            interpreter.from_interpretation::<Color>(&Text::from("no-such-name").to_void());
        assert_eq!(error, EnumInterpreterError::EntryNotFound);
        assert!(missing.is_null());
        assert!(std::ptr::eq(missing.value_type(), Enum::<Color>::class_type()));
    }

    #[test]
    fn test_as_integer_conversions() {
        let interpreter = EnumInterpreter::AS_INTEGER;
        let value = Enum::with_interpreter(Color::Blue, interpreter);
        let (wire, error) = interpreter.to_interpretation::<Color>(&value.to_void());
        assert!(error.is_ok());
        assert!(std::ptr::eq(wire.value_type(), UInt8::class_type()));
        assert_eq!(wire.cast::<UInt8>().value(), Some(40));

        let (back, _) = interpreter.from_interpretation::<Color>(&UInt8::new(1).to_void());
        assert_eq!(back.cast::<Enum<Color>>().value(), Some(Color::Red));

        let (_, error) = interpreter.from_interpretation::<Color>(&UInt8::new(3).to_void());
        assert_eq!(error, EnumInterpreterError::EntryNotFound);
    }

    #[test]
    fn test_null_handling() {
        let nullable = EnumInterpreter::AS_STRING;
        let (out, error) = nullable.to_interpretation::<Color>(&Enum::<Color>::null().to_void());
        assert_eq!(error, EnumInterpreterError::Ok);
        assert!(out.is_null());
        assert!(std::ptr::eq(out.value_type(), Text::class_type()));

        let strict = EnumInterpreter::AS_STRING_NOT_NULL;
        let (out, error) =
            strict.to_interpretation::<Color>(&Enum::<Color>::null_with(strict).to_void());
        assert_eq!(error, EnumInterpreterError::ConstraintNotNull);
        assert!(out.is_null());

        let (out, error) = strict.from_interpretation::<Color>(&Text::null().to_void());
        assert_eq!(error, EnumInterpreterError::ConstraintNotNull);
        assert!(out.is_null());
    }

    #[test]
    fn test_type_mismatches() {
        let strict = EnumInterpreter::AS_STRING_NOT_NULL;
        // A nullable wrapper is not the not-null descriptor.
        let (_, error) = strict.to_interpretation::<Color>(&Enum::new(Color::Red).to_void());
        assert_eq!(error, EnumInterpreterError::TypeMismatchEnum);

        let (_, error) =
            EnumInterpreter::AS_INTEGER.from_interpretation::<Color>(&Int32::new(1).to_void());
        assert_eq!(error, EnumInterpreterError::TypeMismatchEnumValue);

        let (_, error) = EnumInterpreter::AS_STRING
            .from_interpretation::<Color>(&Void::null(Void::class_type()));
        assert_eq!(error, EnumInterpreterError::TypeMismatchEnumValue);
    }

    #[test]
    fn test_interpreted_enum_in_declaration_order() {
        let names: Vec<String> = EnumInterpreter::AS_STRING
            .interpreted_enum::<Color>()
            .expect("interpreted")
            .iter()
            .filter_map(|any| any.retrieve::<Text>().ok()?.value())
            .collect();
        assert_eq!(names, ["RED", "GREEN", "BLUE"]);

        let values: Vec<u8> = Enum::<Color>::type_for(EnumInterpreter::AS_INTEGER_NOT_NULL)
            .enum_dispatcher()
            .expect("enum dispatcher")
            .interpreted_enum()
            .expect("interpreted")
            .iter()
            .filter_map(|any| any.retrieve::<UInt8>().ok()?.value())
            .collect();
        assert_eq!(values, [1, 2, 40]);
    }

    #[test]
    fn test_views_share_payload() {
        let value = Enum::new(Color::Blue);
        let numeric = value.as_integer().not_null();
        assert_eq!(numeric.interpreter(), EnumInterpreter::AS_INTEGER_NOT_NULL);
        assert!(std::ptr::eq(
            numeric.object().expect("payload").as_ref(),
            value.object().expect("payload").as_ref()
        ));
        assert_eq!(numeric.nullable().as_string().interpreter(), EnumInterpreter::AS_STRING);
        assert_eq!(value, numeric);
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_interpreter_of_non_enum_descriptor_panics() {
        let forged = Enum::<Color>::from_void(&Int32::null().to_void());
        let _ = forged.interpreter();
    }

    #[test]
    fn test_equality_and_hash() {
        assert_eq!(Enum::new(Color::Red), Enum::new(Color::Red));
        assert_ne!(Enum::new(Color::Red), Enum::new(Color::Green));
        assert_ne!(Enum::new(Color::Red), Enum::<Color>::null());
        assert_eq!(Enum::<Color>::null(), Enum::<Color>::null());

        let set: HashSet<_> = [Color::Red, Color::Red, Color::Blue]
            .into_iter()
            .map(Enum::new)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_creator_yields_first_entry() {
        let created = Enum::<Color>::type_for(EnumInterpreter::AS_INTEGER)
            .create()
            .expect("creator");
        let value: Enum<Color> = created.cast();
        assert_eq!(value.value(), Some(Color::Red));
        assert_eq!(value.interpreter(), EnumInterpreter::AS_INTEGER);
    }

    #[test]
    fn test_admin_lookup_miss_is_contract_error() {
        assert!(matches!(
            Color::info().entry_by_name("PURPLE"),
            Err(MappingError::EntryNotFound { .. })
        ));
        assert_eq!(format!("{:?}", Enum::new(Color::Blue)), "Enum(Color)[as-string](BLUE)");
    }
}
