//! Bounds-checked big-endian reader over a class file buffer.
//!
//! Counts and attribute lengths inside a class file come straight from the
//! input, so every read and skip is checked against the end of the buffer
//! individually rather than trusting any declared size.

use crate::error::DecodeError;

pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.take(n)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.take(n).map(|_| ())
    }

    /// Moves the cursor back to an earlier position. Used when a declared
    /// attribute length must be applied from the attribute body start after
    /// fields inside the attribute were already read.
    pub fn rewind_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_big_endian_and_advance() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut cur = ByteCursor::new(&buf);

        assert_eq!(cur.read_u8().unwrap(), 0x01);
        assert_eq!(cur.read_u16().unwrap(), 0x0203);
        assert_eq!(cur.read_u32().unwrap(), 0x04050607);
        assert_eq!(cur.position(), 7);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn short_read_reports_offset_and_shortfall() {
        let buf = [0xAA, 0xBB];
        let mut cur = ByteCursor::new(&buf);
        cur.read_u8().unwrap();

        let err = cur.read_u32().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 1,
                needed: 4,
                remaining: 1,
            }
        );
    }

    #[test]
    fn skip_is_bounds_checked() {
        let buf = [0u8; 4];
        let mut cur = ByteCursor::new(&buf);
        cur.skip(4).unwrap();
        assert!(cur.skip(1).is_err());
    }

    #[test]
    fn rewind_then_skip_lands_past_the_original_read() {
        let buf = [0u8; 10];
        let mut cur = ByteCursor::new(&buf);
        cur.skip(2).unwrap();
        let mark = cur.position();
        cur.read_u32().unwrap();
        cur.rewind_to(mark);
        cur.skip(8).unwrap();
        assert_eq!(cur.position(), 10);
    }
}
