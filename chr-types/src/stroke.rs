//! Packed stroke instructions
//!
//! Each glyph in a stroke font is a run of 16-bit words. Every word carries
//! a pen operation in its two high bits (bit 7 and bit 15) and a pair of
//! signed 7-bit coordinates in the remaining bits:
//!
//! ```text
//!  15  14 ........ 8   7   6 ........ 0
//! +---+-------------+---+-------------+
//! | f2|      y      | f1|      x      |
//! +---+-------------+---+-------------+
//! ```
//!
//! The operation is `f1 * 2 + f2`.

use crate::raw::{FixedSize, Scalar};

/// The pen operation encoded in a stroke word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StrokeOp {
    /// End of the glyph; the coordinates are meaningless.
    End = 0,
    /// Marks a point used by the scan-conversion fill.
    DoScan = 1,
    /// Move the pen to (x, y) without drawing.
    MoveTo = 2,
    /// Draw a line from the current position to (x, y).
    LineTo = 3,
}

impl StrokeOp {
    /// Build an operation from the two flag bits of a stroke word.
    #[inline]
    pub const fn from_flags(flag1: bool, flag2: bool) -> Self {
        match (flag1, flag2) {
            (false, false) => StrokeOp::End,
            (false, true) => StrokeOp::DoScan,
            (true, false) => StrokeOp::MoveTo,
            (true, true) => StrokeOp::LineTo,
        }
    }

    /// The numeric value of this operation, in the range `0..=3`.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// A human readable name, as used in font dumps.
    pub const fn name(self) -> &'static str {
        match self {
            StrokeOp::End => "End",
            StrokeOp::DoScan => "Do Scan",
            StrokeOp::MoveTo => "Move To",
            StrokeOp::LineTo => "Line To",
        }
    }
}

impl std::fmt::Display for StrokeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A single decoded stroke instruction.
///
/// Both coordinates are always in the range `-64..=63`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeInstruction {
    op: StrokeOp,
    x: i8,
    y: i8,
}

impl StrokeInstruction {
    /// The smallest representable coordinate.
    pub const MIN_COORD: i8 = -64;
    /// The largest representable coordinate.
    pub const MAX_COORD: i8 = 63;

    /// Create a new instruction.
    ///
    /// Returns `None` if either coordinate does not fit in seven bits.
    pub fn new(op: StrokeOp, x: i8, y: i8) -> Option<Self> {
        let range = Self::MIN_COORD..=Self::MAX_COORD;
        (range.contains(&x) && range.contains(&y)).then_some(StrokeInstruction { op, x, y })
    }

    /// The pen operation.
    pub fn op(&self) -> StrokeOp {
        self.op
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// `true` if this instruction terminates a glyph.
    pub fn is_end(&self) -> bool {
        self.op == StrokeOp::End
    }
}

/// One packed 16-bit word of stroke data.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrokeWord(u16);

impl StrokeWord {
    const COORD_MASK: u16 = 0x7F;
    const FLAG1: u16 = 1 << 7;
    const FLAG2: u16 = 1 << 15;

    /// Create a word from its native value.
    pub const fn new(raw: u16) -> Self {
        StrokeWord(raw)
    }

    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// The operation stored in bits 7 and 15.
    #[inline]
    pub const fn op(self) -> StrokeOp {
        StrokeOp::from_flags(self.0 & Self::FLAG1 != 0, self.0 & Self::FLAG2 != 0)
    }

    /// The x coordinate stored in bits 0..=6.
    #[inline]
    pub const fn x(self) -> i8 {
        sign_extend_7(self.0 & Self::COORD_MASK)
    }

    /// The y coordinate stored in bits 8..=14.
    #[inline]
    pub const fn y(self) -> i8 {
        sign_extend_7((self.0 >> 8) & Self::COORD_MASK)
    }

    /// Decode this word into an instruction.
    ///
    /// Every 16-bit value is a valid word.
    pub const fn decode(self) -> StrokeInstruction {
        StrokeInstruction {
            op: self.op(),
            x: self.x(),
            y: self.y(),
        }
    }
}

/// Interpret the low seven bits of `bits` as a two's complement integer.
#[inline]
const fn sign_extend_7(bits: u16) -> i8 {
    // move bit 6 into the sign position, then shift back arithmetically
    ((bits as u8) << 1) as i8 >> 1
}

impl Scalar for StrokeWord {
    type Raw = [u8; 2];

    fn from_raw(raw: [u8; 2]) -> Self {
        StrokeWord(u16::from_raw(raw))
    }

    fn to_raw(self) -> [u8; 2] {
        self.0.to_raw()
    }
}

impl FixedSize for StrokeWord {
    const RAW_BYTE_LEN: usize = u16::RAW_BYTE_LEN;
}

impl std::fmt::Debug for StrokeWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StrokeWord(0x{:04X})", self.0)
    }
}

impl From<u16> for StrokeWord {
    fn from(raw: u16) -> Self {
        StrokeWord(raw)
    }
}
