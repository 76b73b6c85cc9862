use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Expected {expected} {location} but observed: {observed}")]
pub struct ParseError {
    expected: &'static str,
    observed: String,
    location: Location,
}

#[derive(Debug)]
pub enum Location {
    Unknown,
    File { path: PathBuf, line: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => write!(f, "at unknown location"),
            Location::File { path, line } => {
                write!(f, "in file {} on line {}", path.as_path().display(), line)
            }
        }
    }
}

impl ParseError {
    pub fn somewhere(expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::Unknown,
        }
    }

    pub fn file(path: PathBuf, line: usize, expected: &'static str, observed: String) -> Self {
        let location = Location::File { path, line };
        Self {
            observed,
            expected,
            location,
        }
    }
}

#[derive(Debug, Error)]
pub struct FileError {
    path: Option<PathBuf>,
    #[source]
    source: FileErrorSource,
}

impl FileError {
    pub fn io<P: AsRef<Path>>(path: Option<P>, error: std::io::Error) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
            source: error.into(),
        }
    }

    pub fn parse<P: AsRef<Path>>(path: Option<P>, error: ParseError) -> Self {
        Self {
            path: path.map(|p| p.as_ref().to_path_buf()),
            source: error.into(),
        }
    }

    pub fn kind(&self) -> &FileErrorSource {
        &self.source
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Failed to work with file {}", path.display()),
            None => write!(f, "Failed to work with anonymous file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FileErrorSource {
    #[error("Failed to parse file")]
    Parse {
        #[from]
        source: ParseError,
    },
    #[error("Failed to read/write to file")]
    IO {
        #[from]
        source: std::io::Error,
    },
}

/// Rejection of a single input sequence. Never fatal for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Sequence must only contain A/T/C/G/a/t/c/g, found {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Sequence is too short: {length} nucleotides, must be at least 3")]
    SequenceTooShort { length: usize },
}

/// A genetic code that cannot be used for translation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("The start codon is not defined: no codon maps to methionine")]
    StartCodonUndefined,
    #[error("Genetic code is not complete: {codon} does not have an associated amino acid")]
    IncompleteTable { codon: String },
}

/// Catch-all error for top-level API
#[derive(Debug, Error)]
pub enum Codons2PeptideError {
    #[error(transparent)]
    FileError(#[from] FileError),
    #[error(transparent)]
    TableError(#[from] TableError),
    #[error(transparent)]
    TranslationError(#[from] TranslationError),
    #[error("{failed} of {total} sequences could not be translated")]
    FailedSequences { failed: usize, total: usize },
}
