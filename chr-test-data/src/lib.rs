//! test data shared between the stroke font crates.

mod buffer;

pub use buffer::LeBuffer;

use chr_types::{FontName, PREFIX_TERMINATOR};

/// Size of the prefix at the start of every font file.
const PREFIX_SIZE: usize = 0x80;

pub mod strokes {
    //! Raw stroke data, without the rest of a font file.

    /// move to (3, 4), line to (5, -2), end
    #[rustfmt::skip]
    pub static MOVE_LINE_END: &[u8] = &[
        0x83, 0x04, // 0x0483 move to (3, 4)
        0x85, 0xFE, // 0xFE85 line to (5, -2)
        0x00, 0x00, // end
    ];

    /// One glyph at offset 0, another at offset 4.
    #[rustfmt::skip]
    pub static TWO_GLYPHS: &[u8] = &[
        // glyph at 0
        0x80, 0x00, // move to (0, 0)
        0x00, 0x00, // end
        // glyph at 4
        0x81, 0x02, // move to (1, 2)
        0x83, 0x84, // line to (3, 4)
        0x00, 0x80, // scan (0, 0)
        0x00, 0x00, // end
    ];
}

/// The descriptive text at the start of [`simple_font`].
pub static SIMPLE_PREFIX_TEXT: &[u8] =
    b"PK\x08\x08BGI Stroked Font V1.1 - Jan 1 1990\r\nTest font, not for distribution\r\n";

/// A font covering `A` to `D`, where `C` has no glyph.
///
/// | code | offset | width | instructions |
/// |------|--------|-------|--------------|
/// | `A`  | 0x00   | 8     | 2            |
/// | `B`  | 0x04   | 9     | 4            |
/// | `C`  | 0x00   | 10    | (absent)     |
/// | `D`  | 0x0C   | 11    | 3            |
pub fn simple_font() -> Vec<u8> {
    #[rustfmt::skip]
    let strokes = [
        // A
        0x80, 0x00, // move to (0, 0)
        0x00, 0x00, // end
        // B
        0x81, 0x02, // move to (1, 2)
        0x83, 0x84, // line to (3, 4)
        0x85, 0xFA, // line to (5, -6)
        0x00, 0x00, // end
        // D
        0x80, 0x0A, // move to (0, 10)
        0x84, 0x80, // line to (4, 0)
        0x00, 0x00, // end
    ];
    FontImage {
        text: SIMPLE_PREFIX_TEXT,
        name: FontName::new(b"SMPL"),
        first_char: b'A',
        offsets: &[0x00, 0x04, 0x00, 0x0C],
        widths: &[8, 9, 10, 11],
        heights: [10, 0, -3],
        strokes: &strokes,
    }
    .build()
}

/// A font with the single character `A` (65) at offset 0, whose strokes are
/// [`strokes::MOVE_LINE_END`].
pub fn single_glyph_font() -> Vec<u8> {
    FontImage {
        text: b"PK\x08\x08BGI Stroked Font V1.1 - single glyph\r\n",
        name: FontName::new(b"ONE\0"),
        first_char: 65,
        offsets: &[0],
        widths: &[7],
        heights: [8, 0, -2],
        strokes: strokes::MOVE_LINE_END,
    }
    .build()
}

/// The pieces of a font file, in file order.
struct FontImage<'a> {
    text: &'a [u8],
    name: FontName,
    first_char: u8,
    offsets: &'a [u16],
    widths: &'a [u8],
    heights: [i8; 3],
    strokes: &'a [u8],
}

impl FontImage<'_> {
    fn build(&self) -> Vec<u8> {
        assert_eq!(self.offsets.len(), self.widths.len());
        let count = self.offsets.len() as u16;
        let definitions_offset = 0x10 + 3 * count;

        let mut buf = LeBuffer::new();
        buf.extend(self.text.iter().copied());
        buf.push(PREFIX_TERMINATOR);
        buf.push(PREFIX_SIZE as u16);
        buf.push(self.name);
        buf.push(definitions_offset + self.strokes.len() as u16);
        // revision 1.0, needs driver 1.0
        buf.extend([1u8, 0, 1, 0]);
        buf.pad_to(PREFIX_SIZE);

        buf.push(b'+');
        buf.push(count);
        buf.push(0u8);
        buf.push(self.first_char);
        buf.push(definitions_offset);
        buf.push(0u8);
        buf.extend(self.heights);
        buf.push(self.name);
        buf.push(0u8);

        buf.extend(self.offsets.iter().copied());
        buf.extend(self.widths.iter().copied());
        buf.extend(self.strokes.iter().copied());
        buf.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_sizes() {
        let font = simple_font();
        assert_eq!(font.len(), 0x80 + 0x10 + 4 * 3 + 0x12);
        assert_eq!(font[0x80], b'+');
        assert_eq!(single_glyph_font().len(), 0x80 + 0x10 + 3 + 6);
    }
}
