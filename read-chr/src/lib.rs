//! Reading BGI stroke fonts
//!
//! This crate provides memory safe parsing of the `.CHR` stroke font files
//! used by the Borland Graphics Interface. A stroke font describes every
//! glyph as a short program of pen movements rather than as a bitmap or an
//! outline of curves.
//!
//! A font file has five consecutive sections:
//!
//! - a fixed size [prefix][tables::prefix], containing descriptive text and
//!   a small record with the font's revision,
//! - the [font header][tables::header::FontHeader],
//! - a table of offsets, one per character, into the stroke data,
//! - a table of advance widths, one per character,
//! - the [stroke data][tables::strokes::StrokeData] itself.
//!
//! The raw records can be read individually with [`FontRead`], or the whole
//! file can be loaded and every glyph decoded with [`StrokeFont`].
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_chr::{FontData, StrokeFont};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = StrokeFont::read(FontData::new(&font_bytes)).expect("failed to read font data");
//! let header = font.header();
//! println!("font {} containing {} glyphs", header.font_name, font.num_glyphs());
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font;
mod font_data;
mod read;
pub mod tables;

/// Public re-export of the chr-types crate.
pub extern crate chr_types as types;

pub use font::{LoadError, SectionLayout, StrokeFont};
pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError, Section};
pub use tables::header::FontHeader;
pub use tables::prefix::{FileHeaderRecord, Prefix, PREFIX_SIZE};
pub use tables::strokes::{Glyph, Instructions, StrokeData};
