//! Binary buffer writer over an auto-growing buffer.

/// A binary buffer writer that appends big-endian data to an auto-growing
/// byte buffer.
///
/// The buffer is reused across encodes: [`Writer::flush`] returns the bytes
/// written so far and rewinds the cursor without releasing the allocation.
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Current cursor position (number of bytes written).
    pub x: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with a small initial allocation.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity],
            x: 0,
        }
    }

    /// Rewinds the cursor, discarding anything written so far.
    pub fn reset(&mut self) {
        self.x = 0;
    }

    /// Returns the bytes written so far and rewinds the cursor.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.x].to_vec();
        self.x = 0;
        out
    }

    /// Grows the buffer so that at least `size` more bytes fit.
    pub fn ensure_capacity(&mut self, size: usize) {
        let needed = self.x + size;
        if needed > self.uint8.len() {
            let grown = (self.uint8.len() * 2).max(needed);
            self.uint8.resize(grown, 0);
        }
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.u8(val as u8);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure_capacity(2);
        self.uint8[self.x..self.x + 2].copy_from_slice(&val.to_be_bytes());
        self.x += 2;
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.u16(val as u16);
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.ensure_capacity(4);
        self.uint8[self.x..self.x + 4].copy_from_slice(&val.to_be_bytes());
        self.x += 4;
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.ensure_capacity(8);
        self.uint8[self.x..self.x + 8].copy_from_slice(&val.to_be_bytes());
        self.x += 8;
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.ensure_capacity(4);
        self.uint8[self.x..self.x + 4].copy_from_slice(&val.to_be_bytes());
        self.x += 4;
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.ensure_capacity(8);
        self.uint8[self.x..self.x + 8].copy_from_slice(&val.to_be_bytes());
        self.x += 8;
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, data: &[u8]) {
        self.ensure_capacity(data.len());
        self.uint8[self.x..self.x + data.len()].copy_from_slice(data);
        self.x += data.len();
    }
}
