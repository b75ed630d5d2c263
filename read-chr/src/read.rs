//! Traits for interpreting font data

use crate::font_data::FontData;

/// A type that can be read from raw font data.
///
/// This is implemented for the fixed-layout records of a stroke font, which
/// can be interpreted without any external state.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// The parts of a stroke font file, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The descriptive text at the start of the file.
    Prefix,
    /// The record following the prefix text.
    FileHeader,
    /// The font header that follows the prefix.
    FontHeader,
    OffsetTable,
    WidthTable,
    StrokeData,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Prefix => "prefix",
            Section::FileHeader => "file header record",
            Section::FontHeader => "font header",
            Section::OffsetTable => "offset table",
            Section::WidthTable => "width table",
            Section::StrokeData => "stroke data",
        };
        f.write_str(name)
    }
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    /// The data ended before a section was complete.
    Truncated(Section),
    /// A glyph's strokes run to the end of the data without an end marker.
    UnterminatedGlyph {
        offset: u16,
    },
    MissingPrefixTerminator,
    InvalidCharRange {
        first: u8,
        count: u16,
    },
    InvalidArrayLen,
    /// Allocation failed while decoding a glyph.
    OutOfMemory,
    /// Allocation failed while copying the file or its tables.
    AllocationFailed,
}

impl ReadError {
    /// Attribute a bounds failure to a specific section of the file.
    ///
    /// Errors other than [`ReadError::OutOfBounds`] are returned unchanged.
    pub fn in_section(self, section: Section) -> Self {
        match self {
            ReadError::OutOfBounds => ReadError::Truncated(section),
            other => other,
        }
    }

    /// `true` if this error means the file ended before it was complete.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            ReadError::OutOfBounds
                | ReadError::Truncated(_)
                | ReadError::UnterminatedGlyph { .. }
        )
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::Truncated(section) => write!(f, "File truncated in the {section}"),
            ReadError::UnterminatedGlyph { offset } => write!(
                f,
                "Stroke data ends before the glyph at offset 0x{offset:04X} is terminated"
            ),
            ReadError::MissingPrefixTerminator => {
                write!(f, "No end-of-text marker (0x1A) in the prefix")
            }
            ReadError::InvalidCharRange { first, count } => write!(
                f,
                "Invalid character range: {count} characters starting at 0x{first:02X}"
            ),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::OutOfMemory => write!(f, "Out of memory decoding glyphs"),
            ReadError::AllocationFailed => write!(f, "Not enough memory to load font"),
        }
    }
}

impl std::error::Error for ReadError {}
