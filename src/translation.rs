use std::fmt;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::codon::Codon;
use crate::error::{TableError, TranslationError};
use crate::genetic_code::{Decoded, GeneticCode};
use crate::sequence::NucleotideSequence;

/// Amino acid one-letter codes, without separators and without the stop codon
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Peptide(String);

impl Peptide {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Peptide> for String {
    fn from(peptide: Peptide) -> String {
        peptide.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Reject genetic codes with unmapped codons up front. Otherwise an
    /// unmapped codon silently ends the peptide.
    pub require_complete_table: bool,
}

/// Translates DNA with a fixed genetic code
///
/// The start codon is derived from the code once, when the translator is built.
#[derive(Debug, Clone)]
pub struct Translator {
    code: GeneticCode,
    start_codon: Codon,
    start_pattern: String,
}

impl Translator {
    pub fn new(code: GeneticCode) -> Result<Self, TableError> {
        Self::with_config(code, TranslatorConfig::default())
    }

    pub fn with_config(code: GeneticCode, config: TranslatorConfig) -> Result<Self, TableError> {
        let start_codon = code.start_codon()?;
        if config.require_complete_table {
            code.verify_complete()?;
        }
        debug!("Using start codon {}", start_codon);
        Ok(Self {
            code,
            start_codon,
            start_pattern: start_codon.to_string(),
        })
    }

    pub fn start_codon(&self) -> Codon {
        self.start_codon
    }

    pub fn genetic_code(&self) -> &GeneticCode {
        &self.code
    }

    /// Translate the open reading frame that begins at the first start codon
    ///
    /// The start codon is searched anywhere in the sequence, not only at
    /// multiples of three. No start codon means an empty peptide. Decoding
    /// makes at most `len / 3` attempts (the whole sequence, not the ORF) and
    /// ends at a stop codon, an incomplete trailing codon or an unmapped codon.
    pub fn translate(&self, sequence: &NucleotideSequence) -> Peptide {
        let start = match sequence.as_str().find(self.start_pattern.as_str()) {
            Some(start) => start,
            None => {
                trace!("No start codon in {}", sequence);
                return Peptide::default();
            }
        };
        let orf = &sequence.as_bytes()[start..];
        let mut peptide = String::with_capacity(orf.len() / 3);

        for offset in (0..sequence.len() / 3).map(|i| i * 3) {
            let codon = match orf.get(offset..offset + 3) {
                Some(codon) => codon,
                None => break, // fewer than 3 nucleotides left
            };
            match self.code.decode(codon) {
                Decoded::Residue(aa) => peptide.push(aa.symbol()),
                Decoded::Stop => break,
                Decoded::Unmapped => {
                    warn!(
                        "Genetic code is not complete: '{}' does not have an associated amino acid",
                        String::from_utf8_lossy(codon)
                    );
                    break;
                }
            }
        }
        Peptide(peptide)
    }

    /// Validate and translate a raw sequence
    pub fn translate_one(&self, raw_sequence: &str) -> Result<Peptide, TranslationError> {
        let sequence = NucleotideSequence::new(raw_sequence)?;
        Ok(self.translate(&sequence))
    }

    /// Translate every non-blank line independently, keeping the input order
    pub fn translate_many<S: AsRef<str> + Sync>(
        &self,
        raw_lines: &[S],
    ) -> Vec<Result<Peptide, TranslationError>> {
        raw_lines
            .par_iter()
            .map(|line| line.as_ref())
            .filter(|line| !is_blank(line))
            .map(|line| self.translate_one(line))
            .collect()
    }
}

/// Only truly empty lines are blank. Whitespace is left for validation to reject.
pub(crate) fn is_blank(line: &str) -> bool {
    line.is_empty()
}
