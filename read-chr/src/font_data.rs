//! raw font bytes

use std::ops::{Bound, Range, RangeBounds};

use bytemuck::AnyBitPattern;
use types::{FixedSize, Scalar};

use crate::read::{FontRead, ReadError};

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data. It also remembers where in the
/// file the slice starts, so that positions can be reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: u32,
    bytes: &'a [u8],
}

/// A cursor for reading sequential fields out of [`FontData`].
///
/// Every read advances the cursor, whether or not it succeeds.
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of the start of this data in the original file.
    pub fn file_position(&self) -> usize {
        self.total_pos as usize
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos as u32),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start as u32);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    pub fn read_at<T: Scalar + FixedSize>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset.saturating_add(T::RAW_BYTE_LEN))
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Interpret the bytes in `range` as a slice of `T`.
    pub fn read_array<T: AnyBitPattern + FixedSize>(
        &self,
        range: Range<usize>,
    ) -> Result<&'a [T], ReadError> {
        let bytes = self
            .bytes
            .get(range)
            .ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_cast_slice(bytes).map_err(|_| ReadError::InvalidArrayLen)
    }

    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    pub fn read<T: Scalar + FixedSize>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.advance_by(T::RAW_BYTE_LEN);
        temp
    }

    /// Read `len` items of `T` without copying.
    pub fn read_array<T: AnyBitPattern + FixedSize>(
        &mut self,
        len: usize,
    ) -> Result<&'a [T], ReadError> {
        let len = len.saturating_mul(T::RAW_BYTE_LEN);
        let temp = self
            .data
            .read_array(self.pos..self.pos.saturating_add(len));
        self.advance_by(len);
        temp
    }

    /// Read a fixed-length record that occupies the next `len` bytes.
    pub fn read_record<T: FontRead<'a>>(&mut self, len: usize) -> Result<T, ReadError> {
        let temp = self
            .data
            .slice(self.pos..self.pos.saturating_add(len))
            .ok_or(ReadError::OutOfBounds)
            .and_then(T::read);
        self.advance_by(len);
        temp
    }

    /// The position of the cursor in the original file.
    pub fn file_position(&self) -> usize {
        self.data.file_position().saturating_add(self.pos)
    }

    /// All of the data after the cursor.
    ///
    /// This is empty if the cursor has advanced past the end of the data.
    pub fn remaining(&self) -> FontData<'a> {
        self.data.split_off(self.pos).unwrap_or(FontData {
            total_pos: self.file_position() as u32,
            bytes: &[],
        })
    }

    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::LittleEndian;

    #[test]
    fn cursor_reads_in_order() {
        let data = FontData::new(&[0x2B, 0x34, 0x12, 0xFF, 0x01, 0x00, 0x02, 0x00]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u8>(), Ok(0x2B));
        assert_eq!(cursor.read::<u16>(), Ok(0x1234));
        assert_eq!(cursor.read::<i8>(), Ok(-1));
        assert_eq!(cursor.file_position(), 4);
        let array: &[LittleEndian<u16>] = cursor.read_array(2).unwrap();
        assert_eq!(array.iter().map(|x| x.get()).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(cursor.remaining_bytes(), 0);
        assert_eq!(cursor.read::<u8>(), Err(ReadError::OutOfBounds));
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn positions_survive_slicing() {
        let bytes = [0u8; 16];
        let data = FontData::new(&bytes);
        let tail = data.split_off(4).unwrap().slice(2..6).unwrap();
        assert_eq!(tail.file_position(), 6);
        assert_eq!(tail.len(), 4);
        assert_eq!(tail.cursor().remaining().file_position(), 6);
        assert!(data.split_off(17).is_none());
    }

    #[test]
    fn short_array_is_out_of_bounds() {
        let data = FontData::new(&[1, 0, 2]);
        let mut cursor = data.cursor();
        assert_eq!(
            cursor.read_array::<LittleEndian<u16>>(2),
            Err(ReadError::OutOfBounds)
        );
    }
}
