//! Binary buffer reader with cursor tracking.

/// A binary buffer reader that reads big-endian data from a byte slice.
///
/// The reader maintains a cursor position and provides methods for reading
/// the fixed-width integer and float types used by the NBT wire format.
///
/// # Example
///
/// ```
/// use nbt_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), 0x01);
/// assert_eq!(reader.i16(), 0x0203);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> &'a [u8] {
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        bin
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> u8 {
        let val = self.uint8[self.x];
        self.x += 1;
        val
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> i8 {
        let val = self.uint8[self.x] as i8;
        self.x += 1;
        val
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> u16 {
        let val = u16::from_be_bytes([self.uint8[self.x], self.uint8[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> i16 {
        let val = i16::from_be_bytes([self.uint8[self.x], self.uint8[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> i32 {
        let val = i32::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
        ]);
        self.x += 4;
        val
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> i64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.uint8[self.x..self.x + 8]);
        self.x += 8;
        i64::from_be_bytes(bytes)
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self) -> f32 {
        let val = f32::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
        ]);
        self.x += 4;
        val
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self) -> f64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.uint8[self.x..self.x + 8]);
        self.x += 8;
        f64::from_be_bytes(bytes)
    }
}
