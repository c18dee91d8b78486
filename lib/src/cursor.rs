//! Bounds-checked cursors used by the codec.
//!
//! [`Writer`] owns a zero-filled buffer of a size fixed up front and refuses
//! any write that would run past its end. [`Reader`] walks a received
//! datagram and turns every short read into [`Error::MalformedMessage`].
//! Both advance their own offset, callers never touch it.

use crate::error::{Error, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};

pub struct Writer {
    buf: BytesMut,
    pos: usize,
}

impl Writer {
    pub fn new(len: usize) -> Self {
        Self {
            buf: BytesMut::zeroed(len),
            pos: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Fails unless `need` more bytes fit.
    pub fn ensure(&self, need: usize) -> Result<()> {
        if self.remaining() < need {
            return Err(Error::BufferOverrun {
                need,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    // unwritten tail of the buffer
    fn tail(&mut self, need: usize) -> Result<&mut [u8]> {
        self.ensure(need)?;
        let start = self.pos;
        self.pos += need;
        Ok(&mut self.buf[start..start + need])
    }

    pub fn put_u8(&mut self, v: u8) -> Result<()> {
        self.tail(1)?.put_u8(v);
        Ok(())
    }

    pub fn put_u16(&mut self, v: u16) -> Result<()> {
        self.tail(2)?.put_u16(v);
        Ok(())
    }

    pub fn put_u32(&mut self, v: u32) -> Result<()> {
        self.tail(4)?.put_u32(v);
        Ok(())
    }

    pub fn put_slice(&mut self, src: &[u8]) -> Result<()> {
        self.tail(src.len())?.put_slice(src);
        Ok(())
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

pub struct Reader {
    buf: Bytes,
    origin_len: usize,
}

impl Reader {
    pub fn new(buf: Bytes) -> Self {
        let origin_len = buf.len();
        Self { buf, origin_len }
    }

    pub fn position(&self) -> usize {
        self.origin_len - self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn check(&self, need: usize) -> Result<()> {
        if self.buf.remaining() < need {
            return Err(Error::MalformedMessage(format!(
                "need {} bytes at offset {}, {} remaining",
                need,
                self.position(),
                self.buf.remaining()
            )));
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.check(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.check(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.check(4)?;
        Ok(self.buf.get_u32())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.buf.advance(n);
        Ok(())
    }

    /// Next `n` bytes as a view into the same allocation, no copy.
    pub fn split(&mut self, n: usize) -> Result<Bytes> {
        self.check(n)?;
        Ok(self.buf.split_to(n))
    }
}
