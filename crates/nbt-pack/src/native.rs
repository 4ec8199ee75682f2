//! Conversion between native containers and the typed value model.
//!
//! [`Nbt`] is the "native" form: lists carry no declared element tag and
//! compounds carry no per-entry tags. Converting to the typed form infers
//! and validates tags; converting back discards them.

use crate::value::{NbtCompound, NbtList, NbtValue};
use crate::{NbtError, Tag};

/// An untyped (native) NBT value.
///
/// The merge engine and the convenience codec entry points operate on this
/// form. String keys are enforced by construction, and the set of variants
/// is closed, so every `Nbt` is representable in the format.
#[derive(Debug, Clone, PartialEq)]
pub enum Nbt {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    Str(String),
    List(Vec<Nbt>),
    Compound(NbtMap),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A native string-keyed mapping, ordered.
pub type NbtMap = Vec<(String, Nbt)>;

impl Nbt {
    /// Returns the tag a value of this shape carries on the wire.
    pub fn tag(&self) -> Tag {
        match self {
            Nbt::Byte(_) => Tag::Byte,
            Nbt::Short(_) => Tag::Short,
            Nbt::Int(_) => Tag::Int,
            Nbt::Long(_) => Tag::Long,
            Nbt::Float(_) => Tag::Float,
            Nbt::Double(_) => Tag::Double,
            Nbt::ByteArray(_) => Tag::ByteArray,
            Nbt::Str(_) => Tag::Str,
            Nbt::List(_) => Tag::List,
            Nbt::Compound(_) => Tag::Compound,
            Nbt::IntArray(_) => Tag::IntArray,
            Nbt::LongArray(_) => Tag::LongArray,
        }
    }

    /// Converts to the typed form, inferring list tags and validating
    /// homogeneity. Fails with [`NbtError::HeterogeneousList`] if a list's
    /// elements disagree on their tag.
    pub fn to_typed(&self) -> Result<NbtValue, NbtError> {
        Ok(match self {
            Nbt::Byte(v) => NbtValue::Byte(*v),
            Nbt::Short(v) => NbtValue::Short(*v),
            Nbt::Int(v) => NbtValue::Int(*v),
            Nbt::Long(v) => NbtValue::Long(*v),
            Nbt::Float(v) => NbtValue::Float(*v),
            Nbt::Double(v) => NbtValue::Double(*v),
            Nbt::ByteArray(v) => NbtValue::ByteArray(v.clone()),
            Nbt::Str(v) => NbtValue::Str(v.clone()),
            Nbt::List(values) => NbtValue::List(list_to_typed(values)?),
            Nbt::Compound(map) => NbtValue::Compound(map_to_typed(map)?),
            Nbt::IntArray(v) => NbtValue::IntArray(v.clone()),
            Nbt::LongArray(v) => NbtValue::LongArray(v.clone()),
        })
    }
}

impl NbtValue {
    /// Converts to the native form, discarding tag annotations. Total.
    pub fn to_native(&self) -> Nbt {
        match self {
            NbtValue::Byte(v) => Nbt::Byte(*v),
            NbtValue::Short(v) => Nbt::Short(*v),
            NbtValue::Int(v) => Nbt::Int(*v),
            NbtValue::Long(v) => Nbt::Long(*v),
            NbtValue::Float(v) => Nbt::Float(*v),
            NbtValue::Double(v) => Nbt::Double(*v),
            NbtValue::ByteArray(v) => Nbt::ByteArray(v.clone()),
            NbtValue::Str(v) => Nbt::Str(v.clone()),
            NbtValue::List(list) => Nbt::List(list_to_native(list)),
            NbtValue::Compound(compound) => Nbt::Compound(compound_to_native(compound)),
            NbtValue::IntArray(v) => Nbt::IntArray(v.clone()),
            NbtValue::LongArray(v) => Nbt::LongArray(v.clone()),
        }
    }
}

/// Native sequence → typed list, tag inferred from the first element.
pub fn list_to_typed(values: &[Nbt]) -> Result<NbtList, NbtError> {
    let typed = values
        .iter()
        .map(Nbt::to_typed)
        .collect::<Result<Vec<_>, _>>()?;
    NbtList::new(typed)
}

/// Native mapping → typed compound. Duplicate keys resolve last-wins.
pub fn map_to_typed(map: &NbtMap) -> Result<NbtCompound, NbtError> {
    let mut compound = NbtCompound::new();
    for (name, value) in map {
        compound.insert(name.clone(), value.to_typed()?);
    }
    Ok(compound)
}

/// Typed list → native sequence.
pub fn list_to_native(list: &NbtList) -> Vec<Nbt> {
    list.iter().map(NbtValue::to_native).collect()
}

/// Typed compound → native mapping, preserving entry order.
pub fn compound_to_native(compound: &NbtCompound) -> NbtMap {
    compound
        .iter()
        .map(|(name, value)| (name.to_owned(), value.to_native()))
        .collect()
}
