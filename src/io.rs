//! A bounded cursor used to read and write DNS messages.

use crate::errors::{Error, Result};
use byteorder::{ByteOrder, BE};

/// Unsigned integers that can be read off the wire in network byte order.
pub trait BigEndianInt: Sized {
    const SIZE: usize;

    /// Decodes `Self` from exactly `SIZE` bytes.
    fn from_be_slice(buf: &[u8]) -> Self;
}

impl BigEndianInt for u8 {
    const SIZE: usize = 1;

    fn from_be_slice(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl BigEndianInt for u16 {
    const SIZE: usize = 2;

    fn from_be_slice(buf: &[u8]) -> Self {
        BE::read_u16(buf)
    }
}

impl BigEndianInt for u32 {
    const SIZE: usize = 4;

    fn from_be_slice(buf: &[u8]) -> Self {
        BE::read_u32(buf)
    }
}

/// A position-advancing view over a fixed size byte region.
///
/// Every read or write is bounds checked, and returns [`Error::OutOfBounds`]
/// instead of running past the end of the region. The position can never
/// exceed the length of the region.
#[derive(Debug)]
pub struct ByteCursor<T> {
    inner: T,
    pos: usize,
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(inner: T) -> ByteCursor<T> {
        ByteCursor { inner, pos: 0 }
    }

    /// Current offset from the start of the region.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the region.
    pub fn len(&self) -> usize {
        self.inner.as_ref().len()
    }

    /// Returns the number of bytes remaining to be consumed.
    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Moves the cursor to an absolute offset. Offsets equal to the length are
    /// allowed (the cursor is then empty).
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.len() {
            return Err(Error::OutOfBounds {
                offset: pos,
                needed: 0,
                len: self.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    fn require(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::OutOfBounds {
                offset: self.pos,
                needed,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Reads a big endian integer and advances past it.
    pub fn read_integer<I: BigEndianInt>(&mut self) -> Result<I> {
        let buf = self.read_bytes(I::SIZE)?;
        Ok(I::from_be_slice(buf))
    }

    /// Reads exactly `len` raw bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        self.require(len)?;

        let start = self.pos;
        self.pos += len;
        Ok(&self.inner.as_ref()[start..self.pos])
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<T> {
    pub fn write_u8(&mut self, b: u8) -> Result<()> {
        self.write_bytes(&[b])
    }

    /// Writes `v` in network byte order.
    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        let mut buf = [0; 2];
        BE::write_u16(&mut buf, v);
        self.write_bytes(&buf)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.require(bytes.len())?;

        let start = self.pos;
        self.pos += bytes.len();
        self.inner.as_mut()[start..self.pos].copy_from_slice(bytes);
        Ok(())
    }
}
