pub mod config;
pub mod ingest;
pub mod stream;

use std::io::Write;

use anyhow::{Context, Result};

pub use config::{normalize_delimiter, JoinConfig};
use stream::{Sink, Source};

/// Join the sequence with the delimiter: the delimiter goes between
/// consecutive elements, never before the first or after the last, and an
/// empty sequence yields the empty string.
pub fn join(values: &[String], delimiter: &str) -> String {
    values.join(delimiter)
}

/// Run one invocation: resolve streams, decode the input, expand trailing
/// arguments, join, write. Linear, no retries; the first failure aborts the
/// run and drops both stream handles.
pub fn run(config: &JoinConfig, args: &[String]) -> Result<()> {
    let mut source = Source::open(config.input.as_deref())?;
    let mut sink = Sink::create(config.output.as_deref())?;

    let mut results = Vec::new();
    // Decode only when an input file was named; a bare stdin pipe is never
    // read (see the ingest module docs).
    if config.input.is_some() {
        let src = source.read_all()?;
        results = ingest::decode_input(&src, config.newline_input)?;
    }
    ingest::expand_args(args, &mut results)?;

    let nl = if config.trailing_newline { "\n" } else { "" };
    write!(sink, "{}{}", join(&results, &config.delimiter), nl)
        .context("failed to write output")?;
    sink.flush().context("failed to flush output")?;
    Ok(())
}
