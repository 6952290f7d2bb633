use std::path::PathBuf;

/// Resolved options for one invocation. Built once in `main` from the parsed
/// command line and passed by reference through the pipeline; nothing mutates
/// it afterwards.
#[derive(Debug, Clone)]
pub struct JoinConfig {
    /// Delimiter inserted between consecutive joined elements.
    pub delimiter: String,
    /// Split input on `\n` instead of parsing it as a JSON array.
    pub newline_input: bool,
    /// Append a trailing newline to the output (on by default).
    pub trailing_newline: bool,
    /// Input file; stdin when absent.
    pub input: Option<PathBuf>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Suppress error messages (exit code still reflects failure).
    pub quiet: bool,
}

/// Map the two-character escape spellings `\n` and `\t` to the characters
/// they name. Every other delimiter value passes through unchanged.
pub fn normalize_delimiter(raw: &str) -> String {
    match raw {
        r"\n" => "\n".to_string(),
        r"\t" => "\t".to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_delimiter;

    #[test]
    fn backslash_n_becomes_newline() {
        assert_eq!(normalize_delimiter(r"\n"), "\n");
    }

    #[test]
    fn backslash_t_becomes_tab() {
        assert_eq!(normalize_delimiter(r"\t"), "\t");
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(normalize_delimiter("||"), "||");
        assert_eq!(normalize_delimiter(""), "");
        // Only the exact two-character spellings are rewritten.
        assert_eq!(normalize_delimiter(r"\r"), r"\r");
        assert_eq!(normalize_delimiter(r"a\nb"), r"a\nb");
    }
}
