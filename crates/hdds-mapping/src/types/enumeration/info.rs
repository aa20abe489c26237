// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-enum entry registry.

use crate::error::{MappingError, Result};
use crate::types::primitive::{Int16, Int32, Int64, Int8, UInt16, UInt32, UInt64, UInt8};
use crate::types::wrapper::{Void, Wrapper};
use std::collections::HashMap;

/// Underlying integer representation of a mapped enum.
///
/// Implemented for the fixed-width integers; `Wrapper` is the primitive the
/// as-integer interpreter reads and writes.
pub trait EnumUnderlying: Copy + Send + Sync + 'static {
    type Wrapper: Wrapper<Object = Self>;

    /// Registry key (sign-extending for signed widths).
    fn to_u64(self) -> u64;

    /// Lossless signed view, for listings.
    fn to_i128(self) -> i128;

    /// Wrap as the matching primitive, erased.
    fn wrap(self) -> Void;
}

macro_rules! enum_underlying {
    ($($ty:ty => $wrapper:ident),* $(,)?) => {
        $(
            impl EnumUnderlying for $ty {
                type Wrapper = $wrapper;

                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn to_i128(self) -> i128 {
                    self as i128
                }

                fn wrap(self) -> Void {
                    $wrapper::new(self).to_void()
                }
            }
        )*
    };
}

enum_underlying! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
}

/// A Rust enum exposed to the mapping layer.
///
/// `info()` returns the process-wide registry, typically built once inside a
/// `OnceLock` with [`EnumInfo::from_entries`].
pub trait MappedEnum: Copy + PartialEq + Send + Sync + 'static {
    type Underlying: EnumUnderlying;

    fn to_underlying(self) -> Self::Underlying;

    fn info() -> &'static EnumInfo<Self>;
}

/// One declared constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumValueInfo<E> {
    pub value: E,
    /// Declaration index, 0-based.
    pub index: usize,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

/// Entries of one enum type, indexed by name, underlying value and
/// declaration order.
#[derive(Debug)]
pub struct EnumInfo<E> {
    name_qualifier: Option<&'static str>,
    by_index: Vec<EnumValueInfo<E>>,
    by_name: HashMap<&'static str, usize>,
    by_value: HashMap<u64, usize>,
}

impl<E: MappedEnum> EnumInfo<E> {
    pub fn new(name_qualifier: Option<&'static str>) -> Self {
        Self {
            name_qualifier,
            by_index: Vec::new(),
            by_name: HashMap::new(),
            by_value: HashMap::new(),
        }
    }

    /// Build a registry from `(value, name, description)` rows in declaration
    /// order.
    pub fn from_entries(
        name_qualifier: Option<&'static str>,
        entries: impl IntoIterator<Item = (E, &'static str, Option<&'static str>)>,
    ) -> Result<Self> {
        let mut info = Self::new(name_qualifier);
        for (value, name, description) in entries {
            info.register(value, name, description)?;
        }
        Ok(info)
    }

    /// Register one constant and return its declaration index.
    ///
    /// Names and underlying values must be unique within the enum.
    pub fn register(
        &mut self,
        value: E,
        name: &'static str,
        description: Option<&'static str>,
    ) -> Result<usize> {
        let underlying = value.to_underlying();
        let key = underlying.to_u64();

        let duplicate = if self.by_name.contains_key(name) {
            Some(name.to_string())
        } else if self.by_value.contains_key(&key) {
            Some(underlying.to_i128().to_string())
        } else {
            None
        };
        if let Some(key) = duplicate {
            log::warn!(
                "[mapping::enum] {}: rejected duplicate entry '{}'",
                self.enum_name(),
                key
            );
            return Err(MappingError::DuplicateEntry {
                enum_name: self.enum_name().to_string(),
                key,
            });
        }

        let index = self.by_index.len();
        self.by_index.push(EnumValueInfo {
            value,
            index,
            name,
            description,
        });
        self.by_name.insert(name, index);
        self.by_value.insert(key, index);
        log::trace!(
            "[mapping::enum] {}: registered #{} {} = {}",
            self.enum_name(),
            index,
            name,
            underlying.to_i128()
        );
        Ok(index)
    }

    pub fn name_qualifier(&self) -> Option<&'static str> {
        self.name_qualifier
    }

    /// Qualifier, or the Rust type name when none was given.
    pub fn enum_name(&self) -> &'static str {
        self.name_qualifier.unwrap_or_else(|| std::any::type_name::<E>())
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[EnumValueInfo<E>] {
        &self.by_index
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&EnumValueInfo<E>> {
        self.by_name.get(name).map(|&i| &self.by_index[i])
    }

    pub fn find_by_underlying(&self, value: u64) -> Option<&EnumValueInfo<E>> {
        self.by_value.get(&value).map(|&i| &self.by_index[i])
    }

    pub fn find_by_value(&self, value: E) -> Option<&EnumValueInfo<E>> {
        self.find_by_underlying(value.to_underlying().to_u64())
    }

    pub fn entry_by_name(&self, name: &str) -> Result<&EnumValueInfo<E>> {
        self.find_by_name(name)
            .ok_or_else(|| self.not_found(name.to_string()))
    }

    pub fn entry_by_value(&self, value: E) -> Result<&EnumValueInfo<E>> {
        self.find_by_value(value)
            .ok_or_else(|| self.not_found(value.to_underlying().to_i128().to_string()))
    }

    pub fn entry_by_underlying(&self, value: u64) -> Result<&EnumValueInfo<E>> {
        self.find_by_underlying(value)
            .ok_or_else(|| self.not_found(value.to_string()))
    }

    pub fn entry_by_index(&self, index: usize) -> Result<&EnumValueInfo<E>> {
        self.by_index
            .get(index)
            .ok_or_else(|| self.not_found(format!("#{}", index)))
    }

    /// Serialisable snapshot for schema generators.
    pub fn listing(&self) -> EnumListing {
        EnumListing {
            name_qualifier: self.name_qualifier.map(str::to_string),
            entries: self
                .by_index
                .iter()
                .map(|entry| EnumListingEntry {
                    name: entry.name.to_string(),
                    value: entry.value.to_underlying().to_i128(),
                    index: entry.index,
                    description: entry.description.map(str::to_string),
                })
                .collect(),
        }
    }

    fn not_found(&self, key: String) -> MappingError {
        MappingError::EntryNotFound {
            enum_name: self.enum_name().to_string(),
            key,
        }
    }
}

/// Enum entries as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumListing {
    pub name_qualifier: Option<String>,
    pub entries: Vec<EnumListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumListingEntry {
    pub name: String,
    pub value: i128,
    pub index: usize,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub description: Option<String>,
}
