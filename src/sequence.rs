use std::convert::TryFrom;
use std::fmt;
use std::path::Path;

use tabfile::Tabfile;

use crate::error::{FileError, TranslationError};
use crate::translation::is_blank;
use crate::Nucleotide;

/// Shortest sequence that can hold a codon
pub const MIN_SEQUENCE_LENGTH: usize = 3;

/// An uppercase DNA sequence of at least one codon's length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NucleotideSequence {
    bases: String,
}

impl NucleotideSequence {
    /// Normalize and validate raw input
    ///
    /// Invalid characters are reported before the length is checked.
    pub fn new(raw: &str) -> Result<Self, TranslationError> {
        let bases = raw.to_ascii_uppercase();
        for (position, character) in bases.chars().enumerate() {
            if Nucleotide::try_from(character).is_err() {
                return Err(TranslationError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
        // all characters are ASCII now, so bytes and characters coincide
        if bases.len() < MIN_SEQUENCE_LENGTH {
            return Err(TranslationError::SequenceTooShort {
                length: bases.len(),
            });
        }
        Ok(Self { bases })
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bases.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Always false, validation rejects anything shorter than a codon
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl TryFrom<&str> for NucleotideSequence {
    type Error = TranslationError;
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bases)
    }
}

/// A raw, not yet validated, sequence and the line it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub line_number: usize,
    pub sequence: String,
}

/// Read one sequence per line. Empty lines are skipped, everything else is kept
/// verbatim for validation, including lines starting with `#`.
pub fn read_sequences_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<SequenceRecord>, FileError> {
    let mut result = Vec::new();
    // tabfile treats `#` as a comment by default; no line starts with a newline
    let tabfile = match Tabfile::open(&path) {
        Ok(tf) => tf.comment_character('\n').skip_empty_lines(false),
        Err(e) => return Err(FileError::io(Some(&path), e)),
    };
    for record_result in tabfile {
        let record = match record_result {
            Ok(record) => record,
            Err(e) => return Err(FileError::io(Some(&path), e)),
        };
        let line = record.line().trim_end_matches(|c| c == '\n' || c == '\r');
        if is_blank(line) {
            continue;
        }
        result.push(SequenceRecord {
            line_number: record.line_number(),
            sequence: line.to_string(),
        });
    }
    Ok(result)
}
