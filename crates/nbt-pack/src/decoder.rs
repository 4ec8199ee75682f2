//! NBT binary decoder.
//!
//! Every read is preceded by a remaining-size check, so a truncated stream
//! surfaces as [`NbtError::UnexpectedEof`] rather than a panic. Decoding
//! either fully succeeds or fully fails; no partial values are returned.

use nbt_buffers::Reader;

use crate::native::{compound_to_native, list_to_native, Nbt, NbtMap};
use crate::value::{NbtCompound, NbtList, NbtValue};
use crate::{mutf8, registry, NbtError, Tag};

/// NBT binary decoder over a byte slice.
pub struct NbtDecoder<'a> {
    reader: Reader<'a>,
}

impl<'a> NbtDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Current cursor position in the input.
    pub fn position(&self) -> usize {
        self.reader.x
    }

    fn assert_size(&self, size: usize) -> Result<(), NbtError> {
        if self.reader.size() < size {
            return Err(NbtError::UnexpectedEof);
        }
        Ok(())
    }

    /// Reads a signed length prefix, rejecting negative values.
    fn read_len(&mut self) -> Result<usize, NbtError> {
        self.assert_size(4)?;
        let len = self.reader.i32();
        usize::try_from(len).map_err(|_| NbtError::UnexpectedEof)
    }

    pub fn read_byte(&mut self) -> Result<i8, NbtError> {
        self.assert_size(1)?;
        Ok(self.reader.i8())
    }

    pub fn read_short(&mut self) -> Result<i16, NbtError> {
        self.assert_size(2)?;
        Ok(self.reader.i16())
    }

    pub fn read_int(&mut self) -> Result<i32, NbtError> {
        self.assert_size(4)?;
        Ok(self.reader.i32())
    }

    pub fn read_long(&mut self) -> Result<i64, NbtError> {
        self.assert_size(8)?;
        Ok(self.reader.i64())
    }

    pub fn read_float(&mut self) -> Result<f32, NbtError> {
        self.assert_size(4)?;
        Ok(self.reader.f32())
    }

    pub fn read_double(&mut self) -> Result<f64, NbtError> {
        self.assert_size(8)?;
        Ok(self.reader.f64())
    }

    /// Reads a string: u16 byte-length prefix, then modified UTF-8.
    pub fn read_string(&mut self) -> Result<String, NbtError> {
        self.assert_size(2)?;
        let len = self.reader.u16() as usize;
        self.assert_size(len)?;
        mutf8::decode(self.reader.buf(len))
    }

    /// Reads a byte array: i32 length, then raw bytes.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, NbtError> {
        let len = self.read_len()?;
        self.assert_size(len)?;
        Ok(self.reader.buf(len).to_vec())
    }

    /// Reads an int array: i32 length, then big-endian i32 elements.
    pub fn read_int_array(&mut self) -> Result<Vec<i32>, NbtError> {
        let len = self.read_len()?;
        self.assert_size(len * 4)?;
        Ok((0..len).map(|_| self.reader.i32()).collect())
    }

    /// Reads a long array: i32 length, then big-endian i64 elements.
    pub fn read_long_array(&mut self) -> Result<Vec<i64>, NbtError> {
        let len = self.read_len()?;
        self.assert_size(len * 8)?;
        Ok((0..len).map(|_| self.reader.i64()).collect())
    }

    /// Reads a list: element tag byte, i32 count, then that many payloads
    /// of the declared tag's kind. An empty list's declared tag is kept.
    pub fn read_list(&mut self) -> Result<NbtList, NbtError> {
        self.assert_size(1)?;
        let tag_byte = self.reader.u8();
        let tag = Tag::from_u8(tag_byte).ok_or(NbtError::UnknownTag(tag_byte))?;
        let count = self.read_len()?;
        if count == 0 {
            return NbtList::with_tag(tag, Vec::new());
        }
        let spec = registry::spec(tag)?;
        let mut values = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            values.push((spec.read)(self)?);
        }
        NbtList::with_tag(tag, values)
    }

    /// Reads a compound body: entries until the 0x00 terminator, which is
    /// consumed, leaving the cursor immediately after it.
    pub fn read_compound(&mut self) -> Result<NbtCompound, NbtError> {
        let mut compound = NbtCompound::new();
        loop {
            self.assert_size(1)?;
            let tag_byte = self.reader.u8();
            if tag_byte == Tag::End as u8 {
                return Ok(compound);
            }
            let tag = Tag::from_u8(tag_byte).ok_or(NbtError::UnknownTag(tag_byte))?;
            let name = self.read_string()?;
            let value = (registry::spec(tag)?.read)(self)?;
            compound.insert(name, value);
        }
    }

    /// Reads a value payload of the given tag's kind.
    pub fn read_value(&mut self, tag: Tag) -> Result<NbtValue, NbtError> {
        (registry::spec(tag)?.read)(self)
    }

    /// Reads a named root: asserts the leading compound tag byte, then
    /// reads the name string and the compound body.
    pub fn read_named_root(&mut self) -> Result<(String, NbtCompound), NbtError> {
        self.assert_size(1)?;
        let tag_byte = self.reader.u8();
        if tag_byte != Tag::Compound as u8 {
            return Err(NbtError::UnexpectedRootTag(tag_byte));
        }
        let name = self.read_string()?;
        let compound = self.read_compound()?;
        Ok((name, compound))
    }

    // Native conveniences: read typed, then strip the tags.

    pub fn read_list_native(&mut self) -> Result<Vec<Nbt>, NbtError> {
        Ok(list_to_native(&self.read_list()?))
    }

    pub fn read_compound_native(&mut self) -> Result<NbtMap, NbtError> {
        Ok(compound_to_native(&self.read_compound()?))
    }

    pub fn read_named_root_native(&mut self) -> Result<(String, NbtMap), NbtError> {
        let (name, compound) = self.read_named_root()?;
        Ok((name, compound_to_native(&compound)))
    }
}
