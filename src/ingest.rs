//! Decoding of the input document and of trailing command arguments.
//!
//! The input document is decoded only when an input filename was given on
//! the command line. With no `--input`, stdin is opened but never read for
//! decoding, so a bare pipe contributes nothing and only trailing arguments
//! populate the sequence. Long-standing behavior, kept as-is.

use anyhow::{Context, Result};

/// Decode a fully-read input document into a string sequence.
///
/// In newline mode the text is split on `\n` with no further trimming, so a
/// document ending in a newline yields a trailing empty element. Otherwise
/// the whole document must be a JSON array of strings.
pub fn decode_input(src: &str, newline_input: bool) -> Result<Vec<String>> {
    if newline_input {
        Ok(src.split('\n').map(str::to_string).collect())
    } else {
        serde_json::from_str(src).context("input is not a JSON array of strings")
    }
}

/// Append trailing command arguments to the sequence, left to right.
///
/// An argument wrapped in `[` and `]` must parse as a JSON array of strings
/// and has its elements spliced in order; a malformed bracketed argument is a
/// fatal error, never a literal element. Anything else is appended verbatim.
pub fn expand_args(args: &[String], results: &mut Vec<String>) -> Result<()> {
    for arg in args {
        if arg.starts_with('[') && arg.ends_with(']') {
            let parts: Vec<String> = serde_json::from_str(arg).with_context(|| {
                format!("argument {arg:?} is not a JSON array of strings")
            })?;
            results.extend(parts);
        } else {
            results.push(arg.clone());
        }
    }
    Ok(())
}
