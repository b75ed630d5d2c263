//! The font header, which follows the prefix.

use types::FontName;

use crate::{FontData, FontRead, ReadError};

/// The fixed-size header describing the characters in a stroke font.
///
/// On disk this is a 16 byte record:
///
/// | offset | field                      | type     |
/// |--------|----------------------------|----------|
/// | 0      | signature (`+`)            | u8       |
/// | 1      | character count            | u16      |
/// | 3      | reserved                   | u8       |
/// | 4      | first character            | u8       |
/// | 5      | offset to stroke data      | u16      |
/// | 7      | scan flag                  | u8       |
/// | 8      | origin to capital height   | i8       |
/// | 9      | origin to baseline         | i8       |
/// | 10     | origin to descender        | i8       |
/// | 11     | font name                  | [u8; 4]  |
/// | 15     | reserved                   | u8       |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontHeader {
    pub signature: u8,
    pub char_count: u16,
    pub first_char: u8,
    /// Offset from the start of this header to the stroke data.
    pub definitions_offset: u16,
    pub scannable: bool,
    pub origin_to_cap_height: i16,
    pub origin_to_base_height: i16,
    pub origin_to_dec_height: i16,
    pub font_name: FontName,
}

impl FontHeader {
    /// The encoded size of this record, in bytes.
    pub const RAW_BYTE_LEN: usize = 16;

    /// The character codes covered by this font, in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + Clone {
        (self.first_char..=u8::MAX).take(self.char_count as usize)
    }

    /// `true` if `code` falls inside the range covered by this font.
    pub fn contains(&self, code: u8) -> bool {
        code >= self.first_char && ((code - self.first_char) as u16) < self.char_count
    }
}

impl<'a> FontRead<'a> for FontHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let signature = cursor.read()?;
        let char_count: u16 = cursor.read()?;
        cursor.advance_by(1);
        let first_char: u8 = cursor.read()?;
        let definitions_offset = cursor.read()?;
        let scannable = cursor.read::<u8>()? != 0;
        let origin_to_cap_height = cursor.read::<i8>()?.into();
        let origin_to_base_height = cursor.read::<i8>()?.into();
        let origin_to_dec_height = cursor.read::<i8>()?.into();
        let font_name = cursor.read()?;
        // trailing reserved byte
        cursor.read::<u8>()?;
        if first_char as u32 + char_count as u32 > 256 {
            return Err(ReadError::InvalidCharRange {
                first: first_char,
                count: char_count,
            });
        }
        Ok(FontHeader {
            signature,
            char_count,
            first_char,
            definitions_offset,
            scannable,
            origin_to_cap_height,
            origin_to_base_height,
            origin_to_dec_height,
            font_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chr_test_data::LeBuffer;

    fn header_bytes(first: u8, count: u16) -> LeBuffer {
        let mut buf = LeBuffer::new();
        buf.push(b'+');
        buf.push(count);
        buf.push(0u8);
        buf.push(first);
        buf.push(0x10u16 + 3 * count);
        buf.push(1u8);
        buf.extend([40i8, 0, -7]);
        buf.push(FontName::new(b"LITT"));
        buf.push(0u8);
        buf
    }

    #[test]
    fn read_fields() {
        let buf = header_bytes(0x20, 0x5F);
        assert_eq!(buf.len(), FontHeader::RAW_BYTE_LEN);
        let header = FontHeader::read(FontData::new(&buf)).unwrap();
        assert_eq!(header.signature, b'+');
        assert_eq!(header.char_count, 0x5F);
        assert_eq!(header.first_char, 0x20);
        assert_eq!(header.definitions_offset, 0x10 + 3 * 0x5F);
        assert!(header.scannable);
        assert_eq!(header.origin_to_cap_height, 40);
        assert_eq!(header.origin_to_base_height, 0);
        assert_eq!(header.origin_to_dec_height, -7);
        assert_eq!(header.font_name, FontName::new(b"LITT"));
    }

    #[test]
    fn codes_cover_range() {
        let header = FontHeader::read(FontData::new(&header_bytes(0xFE, 2))).unwrap();
        assert_eq!(header.codes().collect::<Vec<_>>(), [0xFE, 0xFF]);
        assert!(header.contains(0xFF));
        assert!(!header.contains(0xFD));

        let header = FontHeader::read(FontData::new(&header_bytes(0, 256))).unwrap();
        assert_eq!(header.codes().count(), 256);
        assert!(header.contains(0));

        let header = FontHeader::read(FontData::new(&header_bytes(b'A', 0))).unwrap();
        assert_eq!(header.codes().count(), 0);
        assert!(!header.contains(b'A'));
    }

    #[test]
    fn range_past_255_is_rejected() {
        assert_eq!(
            FontHeader::read(FontData::new(&header_bytes(0x80, 0x81))),
            Err(ReadError::InvalidCharRange {
                first: 0x80,
                count: 0x81
            })
        );
        assert!(FontHeader::read(FontData::new(&header_bytes(0x80, 0x80))).is_ok());
    }

    #[test]
    fn short_header() {
        let buf = header_bytes(0x20, 1);
        assert_eq!(
            FontHeader::read(FontData::new(&buf[..15])),
            Err(ReadError::OutOfBounds)
        );
    }
}
