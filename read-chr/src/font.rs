//! Loading a complete stroke font.

use std::{collections::BTreeMap, ops::Range};

use types::{LittleEndian, STROKE_FONT_SIGNATURE};

use crate::tables::header::FontHeader;
use crate::tables::prefix::{FileHeaderRecord, Prefix, PREFIX_SIZE};
use crate::tables::strokes::{Glyph, StrokeData};
use crate::{FontData, ReadError, Section};

/// A fully decoded stroke font.
///
/// This owns the bytes of the file, both header records, the offset table
/// and the glyph unpacked for every character that has one. The prefix
/// text, width table and stroke data are views into the owned bytes. It is
/// immutable once loaded.
#[derive(Clone, Debug)]
pub struct StrokeFont {
    data: Vec<u8>,
    text: Range<usize>,
    widths: Range<usize>,
    strokes: usize,
    file_header: FileHeaderRecord,
    header: FontHeader,
    offsets: Vec<u16>,
    glyphs: BTreeMap<u8, Glyph>,
    layout: SectionLayout,
}

/// The file position at which each section of a font starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionLayout {
    pub prefix: usize,
    pub header: usize,
    pub offsets: usize,
    pub widths: usize,
    pub strokes: usize,
}

/// An error encountered while loading a font from a stream.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Read(ReadError),
}

impl StrokeFont {
    /// Read a font from a stream.
    ///
    /// The stream is read to its end before parsing begins. The font takes
    /// ownership of the bytes read.
    pub fn from_reader(mut reader: impl std::io::Read) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let mut font = Self::parse(FontData::new(&bytes))?;
        font.data = bytes;
        Ok(font)
    }

    /// Read and fully decode a font.
    ///
    /// Either every glyph is decoded or an error is returned; a partially
    /// loaded font is never produced.
    pub fn read(data: FontData) -> Result<Self, ReadError> {
        let mut font = Self::parse(data)?;
        font.data = copy_bytes(data.as_bytes())?;
        Ok(font)
    }

    /// Parse every section of `data` and unpack the glyphs.
    ///
    /// The returned font holds no bytes yet; ranges are relative to the start
    /// of `data`.
    fn parse(data: FontData) -> Result<Self, ReadError> {
        let base = data.file_position();
        let mut cursor = data.cursor();
        let mut layout = SectionLayout {
            prefix: cursor.file_position(),
            ..Default::default()
        };
        let prefix: Prefix = cursor
            .read_record(PREFIX_SIZE)
            .map_err(|e| e.in_section(Section::Prefix))?;

        layout.header = cursor.file_position();
        let header: FontHeader = cursor
            .read_record(FontHeader::RAW_BYTE_LEN)
            .map_err(|e| e.in_section(Section::FontHeader))?;
        log::debug!(
            "{} characters starting at 0x{:02X}",
            header.char_count,
            header.first_char
        );

        let count = header.char_count as usize;
        layout.offsets = cursor.file_position();
        let raw_offsets: &[LittleEndian<u16>] = cursor
            .read_array(count)
            .map_err(|e| e.in_section(Section::OffsetTable))?;
        let mut offsets = Vec::new();
        offsets
            .try_reserve_exact(count)
            .map_err(|_| ReadError::AllocationFailed)?;
        offsets.extend(raw_offsets.iter().map(|off| off.get()));

        layout.widths = cursor.file_position();
        cursor
            .read_array::<u8>(count)
            .map_err(|e| e.in_section(Section::WidthTable))?;

        layout.strokes = cursor.file_position();
        let strokes = StrokeData::new(cursor.remaining());

        check_consistency(&prefix.record(), &header, &layout, base + data.len());

        let mut glyphs = BTreeMap::new();
        for (code, offset) in header.codes().zip(offsets.iter().copied()) {
            if offset == 0 && code != header.first_char {
                continue;
            }
            let glyph = strokes.unpack(offset)?;
            log::trace!(
                "glyph 0x{code:02X} at 0x{offset:04X}: {} instructions",
                glyph.len()
            );
            glyphs.insert(code, glyph);
        }

        let widths_start = layout.widths - base;
        Ok(StrokeFont {
            data: Vec::new(),
            text: 0..prefix.text().len(),
            widths: widths_start..widths_start + count,
            strokes: layout.strokes - base,
            file_header: prefix.record(),
            header,
            offsets,
            glyphs,
            layout,
        })
    }

    /// The descriptive text at the start of the file.
    pub fn prefix_text(&self) -> &[u8] {
        &self.data[self.text.clone()]
    }

    /// The record following the prefix text.
    pub fn file_header(&self) -> &FileHeaderRecord {
        &self.file_header
    }

    pub fn header(&self) -> &FontHeader {
        &self.header
    }

    /// Where each section of the font started in the file.
    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    /// The raw stroke data from which the glyphs were decoded.
    pub fn stroke_data(&self) -> &[u8] {
        &self.data[self.strokes..]
    }

    /// The character codes covered by this font, in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + Clone {
        self.header.codes()
    }

    /// The offset of the glyph for `code` in the stroke data.
    ///
    /// Returns `None` if `code` is outside the range covered by this font.
    pub fn offset(&self, code: u8) -> Option<u16> {
        self.index(code).map(|ix| self.offsets[ix])
    }

    /// The advance width, in pixels, of `code`.
    ///
    /// Returns `None` if `code` is outside the range covered by this font.
    pub fn width(&self, code: u8) -> Option<u8> {
        self.index(code).map(|ix| self.data[self.widths.start + ix])
    }

    /// The glyph for `code`, if the font has one.
    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    /// All glyphs, in ascending order of character code.
    pub fn glyphs(&self) -> impl Iterator<Item = (u8, &Glyph)> + '_ {
        self.glyphs.iter().map(|(code, glyph)| (*code, glyph))
    }

    /// The number of characters that have a glyph.
    pub fn num_glyphs(&self) -> usize {
        self.glyphs.len()
    }

    fn index(&self, code: u8) -> Option<usize> {
        self.header
            .contains(code)
            .then(|| (code - self.header.first_char) as usize)
    }
}

/// Copy the font file into an owned buffer, reporting allocation failure.
fn copy_bytes(bytes: &[u8]) -> Result<Vec<u8>, ReadError> {
    let mut out = Vec::new();
    out.try_reserve_exact(bytes.len())
        .map_err(|_| ReadError::AllocationFailed)?;
    out.extend_from_slice(bytes);
    Ok(out)
}

/// Log fields that disagree with the actual file layout.
///
/// None of these are fatal; the layout of the file wins.
fn check_consistency(
    record: &FileHeaderRecord,
    header: &FontHeader,
    layout: &SectionLayout,
    file_end: usize,
) {
    if header.signature != STROKE_FONT_SIGNATURE {
        log::warn!(
            "unexpected font header signature 0x{:02X}",
            header.signature
        );
    }
    if record.header_size as usize != PREFIX_SIZE {
        log::warn!(
            "prefix size field is 0x{:X}, expected 0x{PREFIX_SIZE:X}",
            record.header_size
        );
    }
    let font_size = file_end.saturating_sub(layout.header);
    if record.font_size as usize != font_size {
        log::warn!(
            "font size field is {}, but {font_size} bytes follow the prefix",
            record.font_size
        );
    }
    let definitions_offset = layout.strokes - layout.header;
    if header.definitions_offset as usize != definitions_offset {
        log::warn!(
            "stroke data offset field is 0x{:X}, but the stroke data starts at 0x{definitions_offset:X}",
            header.definitions_offset
        );
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{e}"),
            LoadError::Read(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Read(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(src: std::io::Error) -> LoadError {
        LoadError::Io(src)
    }
}

impl From<ReadError> for LoadError {
    fn from(src: ReadError) -> LoadError {
        LoadError::Read(src)
    }
}
