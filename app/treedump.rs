//! Command-line interface for treedump.
//!
//! Walks a folder and saves its tree plus every file's content into one report.
//! When no folder is given on the command line, it is asked for on stdin.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;
use treedump::{DEFAULT_OUTPUT, DecodePolicy, DumpBuilder, DumpError, generate, output};

/// treedump — dump a folder's tree and file contents into one file
#[derive(Parser)]
#[command(name = "treedump", version, about, long_about = None)]
struct Cli {
    /// Root folder (prompted for when omitted)
    root: Option<PathBuf>,

    /// Report file to write, overwritten if it exists
    /// [default: folder_dump.txt, or folder_dump.json with --format json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Sort entries by name instead of filesystem order
    #[arg(long)]
    sort: bool,

    /// Replace undecodable bytes with U+FFFD instead of dropping them
    #[arg(long)]
    replace_invalid: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => output::OutputFormat::Text,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

/// Asks for the root folder on stdout and reads one trimmed line from stdin.
fn prompt_root() -> Result<PathBuf, DumpError> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the folder path: ").map_err(DumpError::Prompt)?;
    stdout.flush().map_err(DumpError::Prompt)?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(DumpError::Prompt)?;
    Ok(PathBuf::from(line.trim()))
}

fn run(cli: Cli) -> Result<PathBuf, DumpError> {
    let root = match cli.root {
        Some(root) => root,
        None => prompt_root()?,
    };
    let decode = if cli.replace_invalid {
        DecodePolicy::Replace
    } else {
        DecodePolicy::Ignore
    };
    let format: output::OutputFormat = cli.format.into();
    let target = cli
        .output
        .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT).with_extension(format.extension()));
    let options = DumpBuilder::new(root)
        .output(target)
        .decode(decode)
        .sorted(cli.sort)
        .build();

    let report = generate(&options);
    output::write_report(&report, format, &options.output, cli.pretty)?;
    Ok(options.output)
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(path) => println!("Output saved to: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
