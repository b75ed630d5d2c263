//! The descriptive prefix at the start of a stroke font file.
//!
//! The first [`PREFIX_SIZE`] bytes of a file hold free-form text (so that
//! `TYPE`-ing the file at a DOS prompt prints a copyright notice), ended by
//! a `0x1A` byte. A small binary record, the [`FileHeaderRecord`], follows
//! the terminator; the rest of the prefix is padding.

use types::{FontName, Version, PREFIX_TERMINATOR};

use crate::{FontData, FontRead, ReadError, Section};

/// The size of the prefix, in bytes.
pub const PREFIX_SIZE: usize = 0x80;

/// The prefix of a stroke font: descriptive text plus a [`FileHeaderRecord`].
#[derive(Clone, Copy, Debug)]
pub struct Prefix<'a> {
    text: &'a [u8],
    record: FileHeaderRecord,
}

impl<'a> Prefix<'a> {
    /// The descriptive text, not including the terminator.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// The record that follows the text.
    pub fn record(&self) -> FileHeaderRecord {
        self.record
    }
}

impl<'a> FontRead<'a> for Prefix<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let bytes = data.slice(..PREFIX_SIZE).ok_or(ReadError::OutOfBounds)?;
        let text_len = bytes
            .as_bytes()
            .iter()
            .position(|b| *b == PREFIX_TERMINATOR)
            .ok_or(ReadError::MissingPrefixTerminator)?;
        let record = bytes
            .slice(text_len + 1..)
            .ok_or(ReadError::OutOfBounds)
            .and_then(FileHeaderRecord::read)
            .map_err(|e| e.in_section(Section::FileHeader))?;
        Ok(Prefix {
            text: &bytes.as_bytes()[..text_len],
            record,
        })
    }
}

/// The binary record following the prefix text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeaderRecord {
    /// The size of the whole prefix; 0x80 in every known font.
    pub header_size: u16,
    pub font_name: FontName,
    /// The size of the font data following the prefix.
    pub font_size: u16,
    /// The revision of this font.
    pub revision: Version,
    /// The oldest driver revision able to use this font.
    pub min_version: Version,
}

impl FileHeaderRecord {
    /// The encoded size of this record, in bytes.
    pub const RAW_BYTE_LEN: usize = 12;
}

impl<'a> FontRead<'a> for FileHeaderRecord {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let header_size = cursor.read()?;
        let font_name = cursor.read()?;
        let font_size = cursor.read()?;
        let revision = Version::new(cursor.read()?, cursor.read()?);
        let min_version = Version::new(cursor.read()?, cursor.read()?);
        Ok(FileHeaderRecord {
            header_size,
            font_name,
            font_size,
            revision,
            min_version,
        })
    }
}
