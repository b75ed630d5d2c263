//! report printing implementation

use std::io::Write;

use ansi_term::Style;
use read_chr::StrokeFont;

// width of the label column in numeric field dumps
const LABEL_WIDTH: usize = 50;
// width of the title column in section headings
const TITLE_WIDTH: usize = 16;
// offset table entries per row
const OFFSETS_PER_ROW: usize = 4;

/// Writes a textual dump of a [`StrokeFont`].
pub struct Reporter<'a> {
    is_tty: bool,
    writer: &'a mut (dyn Write + 'a),
}

impl<'a> Reporter<'a> {
    /// Create a reporter writing to `writer`.
    ///
    /// Section titles are styled only if `is_tty` is set.
    pub fn new(writer: &'a mut (dyn Write + 'a), is_tty: bool) -> Self {
        Reporter { is_tty, writer }
    }

    pub fn print_font(&mut self, font: &StrokeFont) -> std::io::Result<()> {
        self.print_prefix(font)?;
        self.print_header(font)?;
        self.print_offset_table(font)?;
        self.print_strokes(font)?;
        self.writer.flush()
    }

    fn print_prefix(&mut self, font: &StrokeFont) -> std::io::Result<()> {
        self.print_section_title("Prefix Record", font.layout().prefix)?;
        writeln!(self.writer, "Text:")?;
        writeln!(self.writer)?;
        let text = font.prefix_text();
        let text = text.strip_suffix(b"\n").unwrap_or(text);
        if !text.is_empty() {
            for line in text.split(|b| *b == b'\n') {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                let line: String = line.iter().copied().map(printable).collect();
                writeln!(self.writer, "{line}")?;
            }
        }
        writeln!(self.writer)?;

        let record = font.file_header();
        self.print_value("Prefix Size", record.header_size)?;
        writeln!(self.writer, "Prefix Name: {}", record.font_name)?;
        self.print_value("Font Size", record.font_size)?;
        writeln!(self.writer, "Revision:    {}", record.revision)?;
        writeln!(self.writer, "BGI Version: {}", record.min_version)?;
        writeln!(self.writer)
    }

    fn print_header(&mut self, font: &StrokeFont) -> std::io::Result<()> {
        self.print_section_title("Header Record", font.layout().header)?;
        let header = font.header();
        writeln!(self.writer, "Signature:    {}", printable(header.signature))?;
        writeln!(self.writer, "# Characters: {}.", header.char_count)?;
        writeln!(self.writer, "First Char:   {:02x}", header.first_char)?;
        writeln!(self.writer, "Definition Offset:   {:04x}", header.definitions_offset)?;
        writeln!(
            self.writer,
            "Scanable Font:       {}",
            if header.scannable { "Yes" } else { "No" }
        )?;
        writeln!(self.writer, "Origin to Cap  Height: {}", header.origin_to_cap_height)?;
        writeln!(self.writer, "Origin to Base Height: {}", header.origin_to_base_height)?;
        writeln!(self.writer, "Origin to Dec  Height: {}", header.origin_to_dec_height)?;
        writeln!(self.writer, "Header Name: {}", header.font_name)?;
        writeln!(self.writer)
    }

    fn print_offset_table(&mut self, font: &StrokeFont) -> std::io::Result<()> {
        let layout = font.layout();
        self.print_section_title("Offset Table", layout.offsets)?;
        let codes = font.codes().collect::<Vec<_>>();
        for row in codes.chunks(OFFSETS_PER_ROW) {
            for code in row {
                let offset = font.offset(*code).unwrap_or_default();
                write!(
                    self.writer,
                    " {} ({code:02x}) : {offset:04x} ",
                    printable(*code)
                )?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Width Table File Base:  {:x}", layout.widths)?;
        writeln!(self.writer, "Stroke Table File Base: {:x}", layout.strokes)?;
        writeln!(self.writer)
    }

    fn print_strokes(&mut self, font: &StrokeFont) -> std::io::Result<()> {
        self.print_styled("Stroke Information")?;
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        for (code, glyph) in font.glyphs() {
            writeln!(
                self.writer,
                "Char {code:02x} ({})    Offset: {:04x}   Width: {:<5}   Stroke Count: {}",
                printable(code),
                font.offset(code).unwrap_or_default(),
                font.width(code).unwrap_or_default(),
                glyph.len(),
            )?;
            for (i, inst) in glyph.iter().enumerate() {
                writeln!(
                    self.writer,
                    "  {i:3} : OpCode: {:<7} ({})   X: {:4}   Y: {:4}",
                    inst.op(),
                    inst.op().to_u8(),
                    inst.x(),
                    inst.y(),
                )?;
            }
        }
        Ok(())
    }

    fn print_section_title(&mut self, title: &str, file_base: usize) -> std::io::Result<()> {
        self.print_styled(&format!("{title:<TITLE_WIDTH$}"))?;
        writeln!(self.writer, "File Base: {file_base:x}")?;
        writeln!(self.writer)
    }

    fn print_value(&mut self, label: &str, value: u16) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{label:<LABEL_WIDTH$}  {value:04x}h  ({value:6}. )"
        )
    }

    fn print_styled(&mut self, text: &str) -> std::io::Result<()> {
        if self.is_tty {
            write!(self.writer, "{}", Style::new().bold().paint(text))
        } else {
            write!(self.writer, "{text}")
        }
    }
}

/// The character for `code`, or `.` if it is not printable.
fn printable(code: u8) -> char {
    if code == b' ' || code.is_ascii_graphic() {
        code as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use read_chr::FontData;

    fn render(bytes: &[u8], is_tty: bool) -> String {
        let font = StrokeFont::read(FontData::new(bytes)).unwrap();
        let mut out = Vec::new();
        Reporter::new(&mut out, is_tty).print_font(&font).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_glyph_report() {
        let expected = [
            "Prefix Record   File Base: 0".to_string(),
            String::new(),
            "Text:".into(),
            String::new(),
            "PK..BGI Stroked Font V1.1 - single glyph".into(),
            String::new(),
            format!("{:<50}  0080h  (   128. )", "Prefix Size"),
            "Prefix Name: ONE".into(),
            format!("{:<50}  0019h  (    25. )", "Font Size"),
            "Revision:    1.0".into(),
            "BGI Version: 1.0".into(),
            String::new(),
            "Header Record   File Base: 80".into(),
            String::new(),
            "Signature:    +".into(),
            "# Characters: 1.".into(),
            "First Char:   41".into(),
            "Definition Offset:   0013".into(),
            "Scanable Font:       No".into(),
            "Origin to Cap  Height: 8".into(),
            "Origin to Base Height: 0".into(),
            "Origin to Dec  Height: -2".into(),
            "Header Name: ONE".into(),
            String::new(),
            "Offset Table    File Base: 90".into(),
            String::new(),
            " A (41) : 0000 ".into(),
            String::new(),
            "Width Table File Base:  92".into(),
            "Stroke Table File Base: 93".into(),
            String::new(),
            "Stroke Information".into(),
            String::new(),
            "Char 41 (A)    Offset: 0000   Width: 7       Stroke Count: 3".into(),
            "    0 : OpCode: Move To (2)   X:    3   Y:    4".into(),
            "    1 : OpCode: Line To (3)   X:    5   Y:   -2".into(),
            "    2 : OpCode: End     (0)   X:    0   Y:    0".into(),
            String::new(),
        ]
        .join("\n");
        assert_eq!(render(&chr_test_data::single_glyph_font(), false), expected);
    }

    #[test]
    fn offset_grid_and_absent_glyphs() {
        let report = render(&chr_test_data::simple_font(), false);
        assert!(report.contains(" A (41) : 0000  B (42) : 0004  C (43) : 0000  D (44) : 000c \n"));
        assert!(report.contains("Char 42 (B)    Offset: 0004   Width: 9       Stroke Count: 4\n"));
        assert!(report.contains("    2 : OpCode: Line To (3)   X:    5   Y:   -6\n"));
        assert!(!report.contains("Char 43"));
        assert!(report.contains("Origin to Dec  Height: -3\n"));
    }

    #[test]
    fn reports_are_repeatable() {
        let bytes = chr_test_data::simple_font();
        assert_eq!(render(&bytes, false), render(&bytes, false));
    }

    #[test]
    fn plain_output_has_no_escapes() {
        assert!(!render(&chr_test_data::simple_font(), false).contains('\x1b'));
        assert!(render(&chr_test_data::simple_font(), true).contains('\x1b'));
    }

    #[test]
    fn prefix_text_bytes_are_not_decoded() {
        let mut bytes = chr_test_data::single_glyph_font();
        bytes[4] = 0xB8;
        bytes[5] = b'\t';
        let report = render(&bytes, false);
        assert!(
            report.contains("\nPK....I Stroked Font V1.1 - single glyph\n"),
            "{report}"
        );
        assert!(!report.contains('\u{FFFD}'));
    }

    #[test]
    fn unprintable_codes() {
        assert_eq!(printable(b'A'), 'A');
        assert_eq!(printable(b' '), ' ');
        assert_eq!(printable(0x1A), '.');
        assert_eq!(printable(0xE9), '.');
    }
}
