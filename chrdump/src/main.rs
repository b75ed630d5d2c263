//! Dump the contents of a stroke font file.
//!
//! Prints the prefix text, both header records, the offset table, and the
//! decoded strokes of every glyph.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use read_chr::{LoadError, ReadError, StrokeFont};
use thiserror::Error;

mod print;

use print::Reporter;

#[derive(Parser, Debug)]
#[command(version, about = "Dump the contents of a BGI stroke font", long_about = None)]
struct Args {
    /// The font file to dump.
    input: PathBuf,

    /// The file to write the report to; defaults to standard output.
    output: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DumpError {
    #[error("{0}")]
    InvalidArguments(clap::Error),

    #[error("Can not open input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Can not read font {}: {source}", .path.display())]
    Load { path: PathBuf, source: LoadError },

    #[error("Can not open output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing report: {0}")]
    Write(#[from] std::io::Error),
}

impl DumpError {
    fn exit_code(&self) -> i32 {
        match self {
            DumpError::Load {
                source: LoadError::Read(ReadError::OutOfMemory),
                ..
            } => 100,
            _ => 1,
        }
    }
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => exit_with(DumpError::InvalidArguments(e)),
    };

    if let Err(e) = run(&args) {
        exit_with(e);
    }
}

fn exit_with(error: DumpError) -> ! {
    match &error {
        DumpError::InvalidArguments(e) => eprint!("{e}"),
        other => eprintln!("chrdump: {other}"),
    }
    std::process::exit(error.exit_code())
}

fn run(args: &Args) -> Result<(), DumpError> {
    let font = load_font(&args.input)?;
    log::info!(
        "loaded {} glyphs from {}",
        font.num_glyphs(),
        args.input.display()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| DumpError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            Reporter::new(&mut writer, false).print_font(&font)?;
            writer.flush()?;
        }
        None => {
            let is_tty = atty::is(atty::Stream::Stdout);
            let stdout = std::io::stdout();
            let mut locked = stdout.lock();
            Reporter::new(&mut locked, is_tty).print_font(&font)?;
        }
    }
    Ok(())
}

fn load_font(path: &Path) -> Result<StrokeFont, DumpError> {
    let file = File::open(path).map_err(|source| DumpError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    StrokeFont::from_reader(BufReader::new(file)).map_err(|source| DumpError::Load {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use read_chr::Section;

    fn load_error(source: ReadError) -> DumpError {
        DumpError::Load {
            path: PathBuf::from("FONT.CHR"),
            source: LoadError::Read(source),
        }
    }

    fn io_error() -> std::io::Error {
        std::io::Error::from(std::io::ErrorKind::NotFound)
    }

    #[test]
    fn glyph_allocation_failure_exits_100() {
        assert_eq!(load_error(ReadError::OutOfMemory).exit_code(), 100);
    }

    #[test]
    fn other_failures_exit_1() {
        let errors = [
            load_error(ReadError::Truncated(Section::OffsetTable)),
            load_error(ReadError::UnterminatedGlyph { offset: 4 }),
            load_error(ReadError::AllocationFailed),
            DumpError::Load {
                path: PathBuf::from("FONT.CHR"),
                source: LoadError::Io(io_error()),
            },
            DumpError::OpenInput {
                path: PathBuf::from("FONT.CHR"),
                source: io_error(),
            },
            DumpError::CreateOutput {
                path: PathBuf::from("FONT.TXT"),
                source: io_error(),
            },
            DumpError::Write(io_error()),
            DumpError::InvalidArguments(clap::Error::new(
                clap::error::ErrorKind::TooManyValues,
            )),
        ];
        for error in errors {
            assert_eq!(error.exit_code(), 1, "{error:?}");
        }
    }

    #[test]
    fn messages_name_the_path() {
        let message = load_error(ReadError::Truncated(Section::WidthTable)).to_string();
        assert_eq!(
            message,
            "Can not read font FONT.CHR: File truncated in the width table"
        );
    }
}
