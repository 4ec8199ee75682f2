//! Bridge between native NBT values and `serde_json::Value`.
//!
//! Useful for diffing and tooling. The mapping is lossy in the JSON
//! direction (type suffixes and array kinds collapse into plain numbers
//! and arrays) and conservative in the NBT direction.

use serde_json::{Map, Number, Value};

use crate::native::Nbt;
use crate::NbtError;

/// Converts a native NBT value to JSON.
///
/// Arrays and lists become JSON arrays; compounds become objects with key
/// order preserved. Non-finite floats have no JSON representation and
/// become `null`.
pub fn to_json(value: &Nbt) -> Value {
    match value {
        Nbt::Byte(v) => Value::from(*v),
        Nbt::Short(v) => Value::from(*v),
        Nbt::Int(v) => Value::from(*v),
        Nbt::Long(v) => Value::from(*v),
        Nbt::Float(v) => Number::from_f64(*v as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Nbt::Double(v) => Number::from_f64(*v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Nbt::ByteArray(v) => Value::Array(v.iter().map(|b| Value::from(*b)).collect()),
        Nbt::Str(v) => Value::String(v.clone()),
        Nbt::List(values) => Value::Array(values.iter().map(to_json).collect()),
        Nbt::Compound(map) => {
            let mut object = Map::new();
            for (key, val) in map {
                object.insert(key.clone(), to_json(val));
            }
            Value::Object(object)
        }
        Nbt::IntArray(v) => Value::Array(v.iter().map(|n| Value::from(*n)).collect()),
        Nbt::LongArray(v) => Value::Array(v.iter().map(|n| Value::from(*n)).collect()),
    }
}

/// Converts a JSON value to a native NBT value.
///
/// Booleans become bytes (the conventional NBT encoding of flags);
/// integers become `Int` when they fit in 32 bits, `Long` otherwise;
/// other numbers become `Double`. `null` and integers above `i64::MAX`
/// are not representable and fail with [`NbtError::UnsupportedValueKind`].
pub fn from_json(value: &Value) -> Result<Nbt, NbtError> {
    Ok(match value {
        Value::Null => return Err(NbtError::UnsupportedValueKind("null")),
        Value::Bool(b) => Nbt::Byte(*b as i8),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(v) => Nbt::Int(v),
                    Err(_) => Nbt::Long(i),
                }
            } else if n.is_u64() {
                return Err(NbtError::UnsupportedValueKind("number"));
            } else {
                Nbt::Double(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => Nbt::Str(s.clone()),
        Value::Array(items) => Nbt::List(
            items
                .iter()
                .map(from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => Nbt::Compound(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), from_json(v)?)))
                .collect::<Result<Vec<_>, NbtError>>()?,
        ),
    })
}
