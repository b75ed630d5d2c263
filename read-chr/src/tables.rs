//! The records and tables of a stroke font file.

pub mod header;
pub mod prefix;
pub mod strokes;
