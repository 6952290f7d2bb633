//! File-or-default-stream handles for the input and output sides.
//!
//! Both sides follow the same pattern: resolve an optional path into either
//! an owned file handle or an alias of the process-wide default stream. The
//! file variants are closed when the handle drops, on every exit path; the
//! default-stream variants own nothing to close.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Readable stream resolved from an optional path.
pub enum Source {
    File(File),
    Stdin(io::Stdin),
}

impl Source {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::open(path).with_context(|| {
                    format!("failed to open input file {}", path.display())
                })?;
                Ok(Source::File(file))
            }
            None => Ok(Source::Stdin(io::stdin())),
        }
    }

    /// Read the stream to completion. Inputs are whole small documents; there
    /// is no incremental decode.
    pub fn read_all(&mut self) -> Result<String> {
        let mut buf = String::new();
        match self {
            Source::File(file) => file
                .read_to_string(&mut buf)
                .context("failed to read input file")?,
            Source::Stdin(stdin) => stdin
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?,
        };
        Ok(buf)
    }
}

/// Writable stream resolved from an optional path. The file variant is
/// created (or truncated) at resolution time.
pub enum Sink {
    File(File),
    Stdout(io::Stdout),
}

impl Sink {
    pub fn create(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("failed to create output file {}", path.display())
                })?;
                Ok(Sink::File(file))
            }
            None => Ok(Sink::Stdout(io::stdout())),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(file) => file.write(buf),
            Sink::Stdout(stdout) => stdout.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(file) => file.flush(),
            Sink::Stdout(stdout) => stdout.flush(),
        }
    }
}
