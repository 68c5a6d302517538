//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// Multi-byte integers are written big-endian. The `u8uNN` helpers write a
/// one-byte tag followed by a fixed-width value, which is the shape of most
/// MessagePack headers.
///
/// # Example
///
/// ```
/// use msgpack_lite_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates a new, empty writer.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Ensures the buffer has room for at least `capacity` more bytes.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        self.uint8.reserve(capacity);
    }

    /// Number of bytes written since the last flush or reset.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written data and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Borrows the written data.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a tag byte followed by an unsigned 8-bit integer.
    #[inline]
    pub fn u8u8(&mut self, tag: u8, val: u8) {
        self.uint8.extend_from_slice(&[tag, val]);
    }

    /// Writes a tag byte followed by an unsigned 16-bit integer.
    #[inline]
    pub fn u8u16(&mut self, tag: u8, val: u16) {
        self.u8(tag);
        self.u16(val);
    }

    /// Writes a tag byte followed by an unsigned 32-bit integer.
    #[inline]
    pub fn u8u32(&mut self, tag: u8, val: u32) {
        self.u8(tag);
        self.u32(val);
    }

    /// Writes a tag byte followed by an unsigned 64-bit integer.
    #[inline]
    pub fn u8u64(&mut self, tag: u8, val: u64) {
        self.u8(tag);
        self.u64(val);
    }

    /// Writes raw bytes verbatim.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.uint8.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut writer = Writer::new();
        writer.u16(0x0102);
        writer.u32(0x0304_0506);
        writer.i16(-2);
        assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xff, 0xfe]);
    }

    #[test]
    fn test_tagged_writes() {
        let mut writer = Writer::new();
        writer.u8u8(0xcc, 0xff);
        writer.u8u16(0xcd, 0x0100);
        writer.u8u32(0xce, 1);
        assert_eq!(
            writer.as_slice(),
            [0xcc, 0xff, 0xcd, 0x01, 0x00, 0xce, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_flush_empties_writer() {
        let mut writer = Writer::new();
        writer.buf(b"abc");
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.flush(), b"abc");
        assert!(writer.is_empty());
        writer.u8(1);
        writer.reset();
        assert!(writer.flush().is_empty());
    }
}
