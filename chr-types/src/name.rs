use std::fmt::{Debug, Display, Formatter};

/// A four-byte font name, as stored in the prefix and the font header.
///
/// Names are usually upper case ASCII (`TRIP`, `LITT`, `SANS`) but nothing
/// enforces this; the raw bytes are kept as they were read.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FontName([u8; 4]);

impl FontName {
    /// Construct a `FontName` from raw bytes.
    pub const fn new(src: &[u8; 4]) -> FontName {
        FontName(*src)
    }

    /// The raw bytes of this name.
    pub const fn into_bytes(self) -> [u8; 4] {
        self.0
    }

    /// The bytes of the name up to (not including) the first NUL.
    pub fn trimmed(&self) -> &[u8] {
        let len = self.0.iter().position(|b| *b == 0).unwrap_or(self.0.len());
        &self.0[..len]
    }
}

impl Display for FontName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.trimmed() {
            if (0x20..=0x7E).contains(byte) {
                write!(f, "{}", *byte as char)?;
            } else {
                write!(f, "{{0x{:02X}}}", byte)?;
            }
        }
        Ok(())
    }
}

impl Debug for FontName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FontName({})", self)
    }
}

impl crate::raw::Scalar for FontName {
    type Raw = [u8; 4];

    fn from_raw(raw: [u8; 4]) -> Self {
        FontName(raw)
    }

    fn to_raw(self) -> [u8; 4] {
        self.0
    }
}

impl crate::raw::FixedSize for FontName {
    const RAW_BYTE_LEN: usize = 4;
}
