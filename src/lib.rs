//! Translate DNA into peptides.
//!
//! Translation follows the reading-frame model: the sequence is searched for
//! the first start codon, then consecutive non-overlapping codons are decoded
//! through a genetic code until a stop codon is read or no full codon is left.
//!
//! ```
//! assert_eq!(codons2peptide::translate_one("ATGTTTTAA").unwrap().as_str(), "MF");
//! assert_eq!(codons2peptide::translate_one("gggatgtggtaa").unwrap().as_str(), "MW");
//! assert!(codons2peptide::translate_one("AT").is_err());
//! ```

mod amino_acid;
pub mod app;
pub mod cli;
mod codon;
pub mod error;
mod genetic_code;
mod sequence;
mod translation;

use std::convert::TryFrom;
use std::sync::OnceLock;

pub use crate::amino_acid::{AminoAcid, START_AMINO_ACID};
pub use crate::cli::Args;
pub use crate::codon::Codon;
use crate::error::TranslationError;
pub use crate::genetic_code::{read_genetic_code_from_file, Decoded, GeneticCode};
pub use crate::sequence::{read_sequences_from_file, NucleotideSequence, SequenceRecord};
pub use crate::translation::{Peptide, Translator, TranslatorConfig};

static STANDARD_TRANSLATOR: OnceLock<Translator> = OnceLock::new();

/// The translator for the standard genetic code, built on first use
pub fn standard_translator() -> &'static Translator {
    STANDARD_TRANSLATOR.get_or_init(|| {
        Translator::new(GeneticCode::standard()).expect("standard code has a start codon")
    })
}

/// Validate and translate a single sequence with the standard genetic code
pub fn translate_one(raw_sequence: &str) -> Result<Peptide, TranslationError> {
    standard_translator().translate_one(raw_sequence)
}

/// Translate every non-blank line with the standard genetic code, in input order
pub fn translate_many<S: AsRef<str> + Sync>(
    raw_lines: &[S],
) -> Vec<Result<Peptide, TranslationError>> {
    standard_translator().translate_many(raw_lines)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub fn name(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Digit of this nucleotide in base 4
    pub fn index(&self) -> usize {
        match self {
            Nucleotide::A => 0,
            Nucleotide::C => 1,
            Nucleotide::G => 2,
            Nucleotide::T => 3,
        }
    }

    fn from_index(index: usize) -> Self {
        match index & 0b11 {
            0 => Nucleotide::A,
            1 => Nucleotide::C,
            2 => Nucleotide::G,
            _ => Nucleotide::T,
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' | 'a' => Ok(Self::A),
            'C' | 'c' => Ok(Self::C),
            'G' | 'g' => Ok(Self::G),
            'T' | 't' => Ok(Self::T),
            _ => Err(c),
        }
    }
}
