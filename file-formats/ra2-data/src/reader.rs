//! Bounds-checked little-endian cursor over an in-memory buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{ReadError, Result};

/// Types that can be decoded from the current reader position.
///
/// Implemented for the scalar types used by the asset formats and for the
/// fixed-layout headers of the individual format crates.
pub trait ReadLe: Sized {
    fn read_le(reader: &mut BoundedReader<'_>) -> Result<Self>;
}

/// A cursor over a borrowed byte buffer.
///
/// Every read that would pass the end of the buffer fails with
/// [`ReadError::TruncatedInput`] and every seek outside `[0, len]` fails with
/// [`ReadError::InvalidOffset`]. A failed operation leaves the cursor where it
/// was.
#[derive(Debug, Clone)]
pub struct BoundedReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BoundedReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.data.len()
    }

    /// The whole underlying buffer, independent of the cursor.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Move the cursor to an absolute position. `pos == len` is allowed.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(ReadError::InvalidOffset {
                offset: pos,
                len: self.data.len(),
            });
        }
        self.position = pos;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        let target = self
            .position
            .checked_add(n)
            .ok_or(ReadError::InvalidOffset {
                offset: usize::MAX,
                len: self.data.len(),
            })?;
        self.seek(target)
    }

    fn check(&self, wanted: usize) -> Result<()> {
        if wanted > self.remaining() {
            return Err(ReadError::TruncatedInput {
                offset: self.position,
                wanted,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let bytes = &self.data[self.position..self.position + n];
        self.position += n;
        Ok(bytes)
    }

    /// Fill `buf` completely from the input.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let bytes = self.read_bytes(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        self.read_into(&mut out)?;
        Ok(out)
    }

    pub fn read<T: ReadLe>(&mut self) -> Result<T> {
        T::read_le(self)
    }

    pub fn read_vec<T: ReadLe>(&mut self, count: usize) -> Result<Vec<T>> {
        let start = self.position;
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            match self.read() {
                Ok(item) => items.push(item),
                Err(e) => {
                    self.position = start;
                    return Err(e);
                }
            }
        }
        Ok(items)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.check(1)?;
        let value = self.data[self.position];
        self.position += 1;
        Ok(value)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    /// A reader over `len` bytes starting at `offset`, with its own cursor at 0.
    pub fn sub_reader(&self, offset: usize, len: usize) -> Result<BoundedReader<'a>> {
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ReadError::InvalidOffset {
                offset: offset.saturating_add(len),
                len: self.data.len(),
            })?;
        Ok(BoundedReader::new(&self.data[offset..end]))
    }
}

macro_rules! read_le_scalar {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl ReadLe for $ty {
                fn read_le(reader: &mut BoundedReader<'_>) -> Result<Self> {
                    reader.$method()
                }
            }
        )*
    };
}

read_le_scalar! {
    u8 => read_u8,
    i8 => read_i8,
    u16 => read_u16,
    i16 => read_i16,
    u32 => read_u32,
    i32 => read_i32,
    f32 => read_f32,
}

impl<T: ReadLe + Copy + Default, const N: usize> ReadLe for [T; N] {
    fn read_le(reader: &mut BoundedReader<'_>) -> Result<Self> {
        let start = reader.position();
        let mut out = [T::default(); N];
        for slot in &mut out {
            match reader.read() {
                Ok(value) => *slot = value,
                Err(e) => {
                    reader.position = start;
                    return Err(e);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_little_endian_scalars() {
        let data = [0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x80, 0x3F];
        let mut reader = BoundedReader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.read::<f32>().unwrap(), 1.0);
        assert!(reader.is_at_end());
    }

    #[test]
    fn truncated_read_does_not_move_cursor() {
        let data = [1, 2, 3];
        let mut reader = BoundedReader::new(&data);
        reader.read_u8().unwrap();
        assert_eq!(
            reader.read_u32(),
            Err(ReadError::TruncatedInput {
                offset: 1,
                wanted: 4,
                available: 2,
            })
        );
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_bytes(2).unwrap(), &[2, 3]);
    }

    #[test]
    fn seek_to_end_is_allowed_past_end_is_not() {
        let data = [0u8; 8];
        let mut reader = BoundedReader::new(&data);
        reader.seek(8).unwrap();
        assert_eq!(reader.remaining(), 0);
        assert_eq!(
            reader.seek(9),
            Err(ReadError::InvalidOffset { offset: 9, len: 8 })
        );
        reader.seek(2).unwrap();
        assert!(reader.skip(7).is_err());
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn array_read_is_all_or_nothing() {
        let data = [1, 0, 2, 0, 3];
        let mut reader = BoundedReader::new(&data);
        assert!(reader.read::<[u16; 3]>().is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read::<[u16; 2]>().unwrap(), [1, 2]);
    }

    #[test]
    fn sub_reader_is_bounded() {
        let data = [0, 1, 2, 3, 4, 5];
        let reader = BoundedReader::new(&data);
        let mut sub = reader.sub_reader(2, 3).unwrap();
        assert_eq!(sub.read_bytes(3).unwrap(), &[2, 3, 4]);
        assert!(sub.read_u8().is_err());
        assert!(reader.sub_reader(4, 3).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reads_never_exceed_the_buffer(
                data in proptest::collection::vec(any::<u8>(), 0..64),
                sizes in proptest::collection::vec(0usize..16, 0..16),
            ) {
                let mut reader = BoundedReader::new(&data);
                let mut consumed = 0;
                for n in sizes {
                    match reader.read_bytes(n) {
                        Ok(bytes) => {
                            prop_assert_eq!(bytes, &data[consumed..consumed + n]);
                            consumed += n;
                        }
                        Err(_) => prop_assert!(consumed + n > data.len()),
                    }
                    prop_assert_eq!(reader.position(), consumed);
                }
            }
        }
    }
}
