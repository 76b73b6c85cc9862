use clap::{ArgAction, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// The DNA sequence, or a file with one sequence per line if --file is given
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Treat INPUT as a file containing one sequence per line
    #[arg(short = 'f', long, default_value = "false", action = ArgAction::SetTrue)]
    pub file: bool,

    /// Write peptides to this file instead of stdout, overwriting it
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Tab separated genetic code (codon, one-letter amino acid) replacing the standard code
    #[arg(short = 't', long)]
    pub table: Option<PathBuf>,

    /// Refuse genetic codes that leave codons unmapped
    #[arg(short = 'S', long = "strict-table", default_value = "false", action = ArgAction::SetTrue)]
    pub strict_table: bool,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "warn")]
    pub level: Level,
}

impl Args {
    /// Arguments for translating a single sequence to stdout with the standard code
    pub fn for_sequence<S: Into<String>>(sequence: S) -> Self {
        Self {
            input: sequence.into(),
            file: false,
            output: None,
            table: None,
            strict_table: false,
            level: Level::Warn,
        }
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = |path: &Option<PathBuf>| match path {
            Some(path) => path.display().to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "input={}, file={}, output={}, table={}, strict_table={}, level={}",
            self.input,
            self.file,
            display(&self.output),
            display(&self.table),
            self.strict_table,
            self.level,
        )
    }
}
