//! Bounds-checked read cursor over a byte buffer.

use crate::domain::{DecodeError, Field};

/// Reads left to right through `buf[pos..end)`.
///
/// Every read names the field it is reading so a failure can say where the
/// buffer ran out. No read ever moves `pos` past `end`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Take the next `width` bytes, or fail without moving.
    pub fn take(&mut self, field: Field, width: usize) -> Result<&'a [u8], DecodeError> {
        if width > self.remaining() {
            return Err(self.truncated(field));
        }
        let buf: &'a [u8] = self.buf;
        let bytes = &buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    pub fn read_u8(&mut self, field: Field) -> Result<u8, DecodeError> {
        Ok(self.take(field, 1)?[0])
    }

    /// Any nonzero byte reads as `true`.
    pub fn read_flag(&mut self, field: Field) -> Result<bool, DecodeError> {
        Ok(self.read_u8(field)? != 0)
    }

    pub fn read_u32_be(&mut self, field: Field) -> Result<u32, DecodeError> {
        let bytes = self.take(field, 4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read zero-terminated text and step past the terminator.
    ///
    /// Returns the bytes before the terminator, whatever their encoding.
    /// Fails without moving if the end bound comes before a zero byte.
    pub fn read_text(&mut self, field: Field) -> Result<&'a [u8], DecodeError> {
        let buf: &'a [u8] = self.buf;
        let start = self.pos;
        let len = buf[start..self.end]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.truncated(field))?;
        self.pos = start + len + 1;
        Ok(&buf[start..start + len])
    }

    fn truncated(&self, field: Field) -> DecodeError {
        DecodeError::Truncated {
            field: field.name(),
            offset: self.pos,
        }
    }
}
