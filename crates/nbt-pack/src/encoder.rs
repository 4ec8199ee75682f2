//! NBT binary encoder.
//!
//! All multi-byte quantities are big-endian. Strings are written as a
//! two-byte unsigned length prefix followed by modified UTF-8 bytes
//! (see [`crate::mutf8`]).

use nbt_buffers::Writer;

use crate::native::{list_to_typed, map_to_typed, Nbt, NbtMap};
use crate::value::{NbtCompound, NbtList, NbtValue};
use crate::{mutf8, registry, NbtError, Tag};

/// NBT binary encoder over an auto-growing buffer.
pub struct NbtEncoder {
    pub writer: Writer,
}

impl Default for NbtEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl NbtEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a complete named-root document and returns its bytes.
    pub fn encode_named_root(
        &mut self,
        name: &str,
        compound: &NbtCompound,
    ) -> Result<Vec<u8>, NbtError> {
        self.writer.reset();
        self.write_named_root(name, compound)?;
        Ok(self.writer.flush())
    }

    /// Encodes a single value payload (no tag byte, no name) and returns
    /// its bytes.
    pub fn encode_value(&mut self, value: &NbtValue) -> Result<Vec<u8>, NbtError> {
        self.writer.reset();
        self.write_value(value)?;
        Ok(self.writer.flush())
    }

    /// Writes a named root: the compound tag byte, the name string, then
    /// the compound body.
    pub fn write_named_root(
        &mut self,
        name: &str,
        compound: &NbtCompound,
    ) -> Result<(), NbtError> {
        self.writer.u8(Tag::Compound as u8);
        self.write_str(name)?;
        self.write_compound(compound)
    }

    /// Writes a value's payload, dispatching on its tag through the
    /// registry.
    pub fn write_value(&mut self, value: &NbtValue) -> Result<(), NbtError> {
        (registry::spec(value.tag())?.write)(self, value)
    }

    pub fn write_byte(&mut self, val: i8) {
        self.writer.i8(val);
    }

    pub fn write_short(&mut self, val: i16) {
        self.writer.i16(val);
    }

    pub fn write_int(&mut self, val: i32) {
        self.writer.i32(val);
    }

    pub fn write_long(&mut self, val: i64) {
        self.writer.i64(val);
    }

    pub fn write_float(&mut self, val: f32) {
        self.writer.f32(val);
    }

    pub fn write_double(&mut self, val: f64) {
        self.writer.f64(val);
    }

    /// Writes a string: u16 byte-length prefix, then modified UTF-8.
    pub fn write_str(&mut self, val: &str) -> Result<(), NbtError> {
        let bytes = mutf8::encode(val);
        if bytes.len() > u16::MAX as usize {
            return Err(NbtError::StringTooLong(bytes.len()));
        }
        self.writer.u16(bytes.len() as u16);
        self.writer.buf(&bytes);
        Ok(())
    }

    /// Writes a byte array: i32 length, then raw bytes.
    pub fn write_byte_array(&mut self, val: &[u8]) {
        self.writer.i32(val.len() as i32);
        self.writer.buf(val);
    }

    /// Writes an int array: i32 length, then big-endian i32 elements.
    pub fn write_int_array(&mut self, val: &[i32]) {
        self.writer.i32(val.len() as i32);
        for item in val {
            self.writer.i32(*item);
        }
    }

    /// Writes a long array: i32 length, then big-endian i64 elements.
    pub fn write_long_array(&mut self, val: &[i64]) {
        self.writer.i32(val.len() as i32);
        for item in val {
            self.writer.i64(*item);
        }
    }

    /// Writes a list: element tag byte, i32 count, then each element's
    /// payload. An empty list still writes its declared tag explicitly.
    pub fn write_list(&mut self, list: &NbtList) -> Result<(), NbtError> {
        self.writer.u8(list.tag() as u8);
        self.writer.i32(list.len() as i32);
        if list.is_empty() {
            return Ok(());
        }
        let spec = registry::spec(list.tag())?;
        for value in list.iter() {
            (spec.write)(self, value)?;
        }
        Ok(())
    }

    /// Writes a compound body: per entry a tag byte, name string, and
    /// value payload; terminated by a single 0x00 byte.
    pub fn write_compound(&mut self, compound: &NbtCompound) -> Result<(), NbtError> {
        for (name, value) in compound.iter() {
            self.writer.u8(value.tag() as u8);
            self.write_str(name)?;
            (registry::spec(value.tag())?.write)(self, value)?;
        }
        self.writer.u8(Tag::End as u8);
        Ok(())
    }

    // Native conveniences: validate and tag, then write.

    pub fn write_native(&mut self, value: &Nbt) -> Result<(), NbtError> {
        let typed = value.to_typed()?;
        self.write_value(&typed)
    }

    pub fn write_list_native(&mut self, values: &[Nbt]) -> Result<(), NbtError> {
        let list = list_to_typed(values)?;
        self.write_list(&list)
    }

    pub fn write_compound_native(&mut self, map: &NbtMap) -> Result<(), NbtError> {
        let compound = map_to_typed(map)?;
        self.write_compound(&compound)
    }

    pub fn write_named_root_native(&mut self, name: &str, map: &NbtMap) -> Result<(), NbtError> {
        let compound = map_to_typed(map)?;
        self.write_named_root(name, &compound)
    }

    pub fn encode_named_root_native(
        &mut self,
        name: &str,
        map: &NbtMap,
    ) -> Result<Vec<u8>, NbtError> {
        self.writer.reset();
        self.write_named_root_native(name, map)?;
        Ok(self.writer.flush())
    }
}
