//! Packed stroke data and the glyphs unpacked from it.

use types::{Pen, StrokeInstruction, StrokeOp, StrokeWord};

use crate::{FontData, ReadError};

/// The stroke data at the end of a font file.
///
/// Each glyph is a run of [`StrokeWord`]s starting at the offset given in
/// the offset table, and ending with a word whose operation is
/// [`StrokeOp::End`].
#[derive(Clone, Copy, Debug)]
pub struct StrokeData<'a> {
    data: FontData<'a>,
}

impl<'a> StrokeData<'a> {
    pub fn new(data: FontData<'a>) -> Self {
        StrokeData { data }
    }

    /// The length of the stroke data, in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the instructions of the glyph starting at `offset`.
    ///
    /// The iterator stops after yielding the end instruction. If the data runs
    /// out first, the final item is an error.
    pub fn instructions_at(&self, offset: u16) -> Instructions<'a> {
        Instructions {
            data: self.data,
            offset,
            pos: offset as usize,
            done: false,
        }
    }

    /// Decode the glyph starting at `offset`.
    pub fn unpack(&self, offset: u16) -> Result<Glyph, ReadError> {
        let mut instructions = Vec::new();
        for inst in self.instructions_at(offset) {
            instructions
                .try_reserve(1)
                .map_err(|_| ReadError::OutOfMemory)?;
            instructions.push(inst?);
        }
        Ok(Glyph { instructions })
    }
}

/// An iterator over the instructions of a single glyph.
///
/// See [`StrokeData::instructions_at`].
#[derive(Clone)]
pub struct Instructions<'a> {
    data: FontData<'a>,
    offset: u16,
    pos: usize,
    done: bool,
}

impl Iterator for Instructions<'_> {
    type Item = Result<StrokeInstruction, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Ok(word) = self.data.read_at::<StrokeWord>(self.pos) else {
            self.done = true;
            return Some(Err(ReadError::UnterminatedGlyph {
                offset: self.offset,
            }));
        };
        self.pos += 2;
        let inst = word.decode();
        self.done = inst.is_end();
        Some(Ok(inst))
    }
}

/// The decoded instructions for one character.
///
/// A glyph is never empty: the last instruction, and only the last, is
/// [`StrokeOp::End`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    instructions: Vec<StrokeInstruction>,
}

impl Glyph {
    /// All instructions, including the final end instruction.
    pub fn instructions(&self) -> &[StrokeInstruction] {
        &self.instructions
    }

    /// The number of instructions, including the final end instruction.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Always `false`; every glyph has at least its end instruction.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrokeInstruction> + '_ {
        self.instructions.iter()
    }

    /// Send the moves and lines of this glyph to `pen`.
    ///
    /// Coordinates are in font units, relative to the glyph origin with y
    /// increasing upwards. Scan markers are not part of the outline and are
    /// skipped.
    pub fn draw(&self, pen: &mut impl Pen) {
        for inst in &self.instructions {
            let (x, y) = (inst.x() as f32, inst.y() as f32);
            match inst.op() {
                StrokeOp::MoveTo => pen.move_to(x, y),
                StrokeOp::LineTo => pen.line_to(x, y),
                StrokeOp::DoScan | StrokeOp::End => (),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Glyph {
    type Item = &'a StrokeInstruction;
    type IntoIter = std::slice::Iter<'a, StrokeInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chr_test_data::{strokes as test_data, LeBuffer};
    use pretty_assertions::assert_eq;
    use types::PenCommand;

    fn inst(op: StrokeOp, x: i8, y: i8) -> StrokeInstruction {
        StrokeInstruction::new(op, x, y).unwrap()
    }

    #[test]
    fn unpack_single_glyph() {
        let strokes = StrokeData::new(FontData::new(test_data::MOVE_LINE_END));
        let glyph = strokes.unpack(0).unwrap();
        assert_eq!(
            glyph.instructions(),
            &[
                inst(StrokeOp::MoveTo, 3, 4),
                inst(StrokeOp::LineTo, 5, -2),
                inst(StrokeOp::End, 0, 0),
            ]
        );
    }

    #[test]
    fn unpack_stops_at_first_end() {
        let strokes = StrokeData::new(FontData::new(test_data::TWO_GLYPHS));
        let first = strokes.unpack(0).unwrap();
        assert_eq!(first.len(), 2);
        let second = strokes.unpack(4).unwrap();
        assert_eq!(second.len(), 4);
        for glyph in [&first, &second] {
            let (last, rest) = glyph.instructions().split_last().unwrap();
            assert!(last.is_end());
            assert!(rest.iter().all(|inst| !inst.is_end()));
        }
    }

    #[test]
    fn unpack_is_deterministic() {
        let strokes = StrokeData::new(FontData::new(test_data::TWO_GLYPHS));
        assert_eq!(strokes.unpack(4), strokes.unpack(4));
    }

    #[test]
    fn missing_end_is_an_error() {
        let data = &test_data::MOVE_LINE_END[..4];
        let strokes = StrokeData::new(FontData::new(data));
        assert_eq!(
            strokes.unpack(0),
            Err(ReadError::UnterminatedGlyph { offset: 0 })
        );
    }

    #[test]
    fn dangling_byte_is_an_error() {
        let data = &test_data::MOVE_LINE_END[..5];
        let strokes = StrokeData::new(FontData::new(data));
        assert_eq!(
            strokes.unpack(2),
            Err(ReadError::UnterminatedGlyph { offset: 2 })
        );
    }

    #[test]
    fn offset_past_end_is_an_error() {
        let strokes = StrokeData::new(FontData::new(test_data::MOVE_LINE_END));
        assert!(strokes.unpack(6).is_err());
        assert!(strokes.unpack(0xFFFF).is_err());
    }

    #[test]
    fn iterator_yields_error_once() {
        let data = &test_data::MOVE_LINE_END[..4];
        let strokes = StrokeData::new(FontData::new(data));
        let items = strokes.instructions_at(0).collect::<Vec<_>>();
        assert_eq!(items.len(), 3);
        assert!(items[2].is_err());
    }

    #[derive(Default)]
    struct RecordingPen(Vec<PenCommand>);

    impl Pen for RecordingPen {
        fn move_to(&mut self, x: f32, y: f32) {
            self.0.push(PenCommand::MoveTo { x, y });
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.0.push(PenCommand::LineTo { x, y });
        }
    }

    #[test]
    fn draw_skips_scan_and_end() {
        let mut buf = LeBuffer::new();
        // move to (1, 2), scan (0, 0), line to (-3, 4), end
        buf.extend([0x0281u16, 0x8000, 0x84FD, 0x0000]);
        let glyph = StrokeData::new(FontData::new(&buf)).unpack(0).unwrap();
        assert_eq!(glyph.len(), 4);

        let mut pen = RecordingPen::default();
        glyph.draw(&mut pen);
        assert_eq!(
            pen.0,
            [
                PenCommand::MoveTo { x: 1.0, y: 2.0 },
                PenCommand::LineTo { x: -3.0, y: 4.0 },
            ]
        );
    }
}
