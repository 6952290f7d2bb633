use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use joinstring::{normalize_delimiter, JoinConfig};

const LICENSE_TEXT: &str = include_str!("../LICENSE");

const EXAMPLE_TEXT: &str = "\
EXAMPLES

Joining the elements of a JSON array with a double pipe:

    joinstring -d '||' '[\"one\", \"two\", \"three\"]'

yields

    one||two||three

Joining a newline-delimited file, then appending one more string:

    joinstring --input-nl -i myfile.txt -d '||' four

where myfile.txt holds one element per line.
";

#[derive(Parser, Debug)]
#[command(
    name = "joinstring",
    disable_version_flag = true,
    about = "Join a JSON array or newline-delimited strings into a single string",
    after_help = "Input is decoded only when --input is given; piped stdin \
                  without --input contributes nothing, and only trailing \
                  arguments are joined."
)]
struct Cli {
    /// Display the license and exit
    #[arg(short = 'l', long)]
    license: bool,

    /// Display the version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Display usage examples and exit
    #[arg(long)]
    example: bool,

    /// Read input from FILE instead of stdin
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Suppress error messages (the exit code still reflects failure)
    #[arg(long)]
    quiet: bool,

    /// Include a trailing newline in the output (default)
    #[arg(long, visible_alias = "nl", overrides_with = "no_newline")]
    newline: bool,

    /// Exclude the trailing newline from the output
    #[arg(long, overrides_with = "newline")]
    no_newline: bool,

    /// Delimiter between joined elements; `\n` and `\t` are recognized
    #[arg(short = 'd', long, value_name = "STRING", default_value = "")]
    delimiter: String,

    /// Treat input as one substring per line rather than a JSON array
    #[arg(long = "input-nl", visible_alias = "input-newline")]
    input_nl: bool,

    /// Strings to append; an argument wrapped in [...] is parsed as a JSON
    /// array of strings and its elements spliced in
    #[arg(value_name = "STRINGS_TO_JOIN")]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.license {
        print!("{LICENSE_TEXT}");
        return ExitCode::SUCCESS;
    }
    if cli.version {
        println!("joinstring {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    if cli.example {
        print!("{EXAMPLE_TEXT}");
        return ExitCode::SUCCESS;
    }

    let config = JoinConfig {
        delimiter: normalize_delimiter(&cli.delimiter),
        newline_input: cli.input_nl,
        trailing_newline: !cli.no_newline,
        input: cli.input,
        output: cli.output,
        quiet: cli.quiet,
    };

    match joinstring::run(&config, &cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !config.quiet {
                eprintln!("joinstring: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
