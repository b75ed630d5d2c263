//! Common scalar data types used in BGI stroke font files
//!
//! Stroke fonts (`.CHR` files) were written by 16-bit DOS tooling, so every
//! multi-byte field is little-endian and most fields are a single byte.

#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod name;
mod pen;
mod raw;
mod stroke;
mod version;

pub use name::FontName;
pub use pen::{Pen, PenCommand};
pub use raw::{FixedSize, LittleEndian, Scalar};
pub use stroke::{StrokeInstruction, StrokeOp, StrokeWord};
pub use version::Version;

/// The byte that terminates the descriptive text at the start of a font file.
pub const PREFIX_TERMINATOR: u8 = 0x1A;

/// The signature byte found at the start of the font header of every known
/// stroke font.
pub const STROKE_FONT_SIGNATURE: u8 = b'+';
