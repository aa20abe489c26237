// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Workflow tests across the types module: a codec-like walk that only knows
//! descriptors.

use super::*;
use crate::error::{EnumInterpreterError, MappingError};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Status {
    Pending = 0,
    Shipped = 10,
    Lost = -3,
}

impl MappedEnum for Status {
    type Underlying = i32;

    fn to_underlying(self) -> i32 {
        self as i32
    }

    fn info() -> &'static EnumInfo<Self> {
        static INFO: OnceLock<EnumInfo<Status>> = OnceLock::new();
        INFO.get_or_init(|| {
            EnumInfo::from_entries(
                Some("Status"),
                [
                    (Status::Pending, "PENDING", None),
                    (Status::Shipped, "SHIPPED", Some("left the warehouse")),
                    (Status::Lost, "LOST", None),
                ],
            )
            .expect("valid entries")
        })
    }
}

/// Wire-side value the fake decoder produces.
enum Wire {
    Int(i32),
    Str(&'static str),
    List(Vec<Wire>),
    Pairs(Vec<(&'static str, Wire)>),
}

/// Decode `wire` into a fresh instance of `descriptor`, driven by descriptors
/// only.
fn decode(descriptor: &'static TypeDescriptor, wire: &Wire) -> Void {
    match (descriptor.kind(), wire) {
        (TypeKind::Primitive(PrimitiveKind::I32), Wire::Int(v)) => Int32::new(*v).to_void(),
        (TypeKind::Primitive(PrimitiveKind::String), Wire::Str(s)) => Text::from(*s).to_void(),
        (TypeKind::Sequence, Wire::List(items)) => {
            let container = descriptor.create().expect("creator");
            let dispatcher = descriptor.sequence_dispatcher().expect("sequence");
            let element = descriptor.params()[0];
            for item in items {
                dispatcher.append(&container, &decode(element, item));
            }
            container
        }
        (TypeKind::Set, Wire::List(items)) => {
            let container = descriptor.create().expect("creator");
            let dispatcher = descriptor.set_dispatcher().expect("set");
            for item in items {
                dispatcher.insert(&container, &decode(descriptor.params()[0], item));
            }
            container
        }
        (TypeKind::Map, Wire::Pairs(pairs)) => {
            let container = descriptor.create().expect("creator");
            let dispatcher = descriptor.map_dispatcher().expect("map");
            for (key, value) in pairs {
                dispatcher.assign(
                    &container,
                    &decode(descriptor.params()[0], &Wire::Str(*key)),
                    &decode(descriptor.params()[1], value),
                );
            }
            container
        }
        (TypeKind::Enum, wire) => {
            let dispatcher = descriptor.enum_dispatcher().expect("enum");
            let raw = decode(dispatcher.interpretation_type(), wire);
            let (value, error) = dispatcher.from_interpretation(&raw);
            assert_eq!(error, EnumInterpreterError::Ok);
            value
        }
        (kind, _) => panic!("unexpected wire value for {:?}", kind),
    }
}

#[test]
fn test_full_decode_workflow() {
    // 1. Nested container type, resolved once
    type Orders = UnorderedMap<Text, Vector<Enum<Status>>>;
    let descriptor = Orders::class_type();
    assert_eq!(
        descriptor.to_string(),
        "UnorderedMap<String, Vector<Enum(Status)[as-string]>>"
    );

    // 2. Decode without static knowledge of the element types
    let wire = Wire::Pairs(vec![
        ("a-1", Wire::List(vec![Wire::Str("PENDING"), Wire::Str("SHIPPED")])),
        ("b-2", Wire::List(vec![Wire::Str("LOST")])),
    ]);
    let decoded = decode(descriptor, &wire);
    assert!(std::ptr::eq(decoded.value_type(), descriptor));

    // 3. Back to static types
    let orders: Orders = decoded.cast();
    assert_eq!(orders.len(), 2);
    let history = orders.get(&Text::from("a-1")).expect("a-1");
    let statuses: Vec<_> = history.to_vec().iter().filter_map(|s| s.value()).collect();
    assert_eq!(statuses, vec![Status::Pending, Status::Shipped]);
}

#[test]
fn test_integer_interpreted_enum_in_set() {
    let element = Enum::<Status>::type_for(EnumInterpreter::AS_INTEGER);
    let set = UnorderedSet::<Enum<Status>>::create_shared();
    let erased = set.to_void();
    let dispatcher = erased.value_type().set_dispatcher().expect("set");

    for raw in [10, -3, 10] {
        dispatcher.insert(&erased, &decode(element, &Wire::Int(raw)));
    }
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Enum::new(Status::Lost)));
}

#[test]
fn test_any_round_trip_through_container() {
    let names = Vector::<Text>::from_items([Text::from("x"), Text::from("y")]);
    let holders = Vector::<Any>::create_shared();
    holders.push(Any::new(&names)).expect("push");
    holders.push(Any::new(&Int32::new(3))).expect("push");

    let first = holders.get(0).expect("first");
    assert!(std::ptr::eq(
        first.stored_type().expect("stored"),
        Vector::<Text>::class_type()
    ));
    assert_eq!(first.retrieve::<Vector<Text>>().expect("retrieve"), names);
    assert!(matches!(
        first.retrieve::<Vector<Int32>>(),
        Err(MappingError::TypeMismatch { .. })
    ));

    let second = holders.get(1).expect("second");
    assert_eq!(second.retrieve::<Int32>().expect("retrieve").value(), Some(3));
}

#[test]
fn test_schema_listing() {
    let listing = Status::info().listing();
    let rows: Vec<_> = listing
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e.value, e.index))
        .collect();
    assert_eq!(rows, vec![("PENDING", 0, 0), ("SHIPPED", 10, 1), ("LOST", -3, 2)]);

    let interpreted = EnumInterpreter::AS_INTEGER
        .interpreted_enum::<Status>()
        .expect("interpreted");
    assert!(interpreted
        .iter()
        .all(|any| std::ptr::eq(any.stored_type().expect("stored"), Int32::class_type())));
}

#[test]
fn test_registry_lists_published_descriptors() {
    let descriptor = UnorderedSet::<Int64>::class_type();
    let registry = TypeRegistry::global();
    assert!(registry.len() >= 2);
    assert!(registry
        .descriptors()
        .iter()
        .any(|d| std::ptr::eq(*d, Int64::class_type())));
    assert!(registry.descriptors().iter().any(|d| d.is(descriptor)));
}
