use std::convert::TryFrom;
use std::path::Path;

use log::debug;
use tabfile::Tabfile;

use crate::amino_acid::{AminoAcid, START_AMINO_ACID, STANDARD_GENETIC_CODE};
use crate::codon::Codon;
use crate::error::{FileError, ParseError, TableError};

/// Outcome of looking up a single codon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Residue(AminoAcid),
    Stop,
    /// The codon has no entry in the table, or is not a full codon at all
    Unmapped,
}

/// A mapping from all 64 codons to amino acids
///
/// Entries may be missing if the code was assembled by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    entries: [Option<AminoAcid>; 64],
    order: Vec<Codon>, // codons in the order they were first assigned
}

impl GeneticCode {
    pub fn standard() -> Self {
        let mut entries = [None; 64];
        for (entry, aa) in entries.iter_mut().zip(STANDARD_GENETIC_CODE.iter()) {
            *entry = Some(*aa);
        }
        Self {
            entries,
            order: Codon::all().collect(),
        }
    }

    /// Build a code from explicit assignments
    ///
    /// Later assignments of the same codon win, but the codon keeps the
    /// position of its first assignment in the table order.
    pub fn from_entries<I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (Codon, AminoAcid)>,
    {
        let mut entries = [None; 64];
        let mut order = Vec::new();
        for (codon, aa) in assignments {
            if entries[codon.index()].replace(aa).is_none() {
                order.push(codon);
            }
        }
        Self { entries, order }
    }

    pub fn get(&self, codon: Codon) -> Option<AminoAcid> {
        self.entries[codon.index()]
    }

    pub fn lookup(&self, codon: Codon) -> Decoded {
        match self.get(codon) {
            Some(AminoAcid::Stop) => Decoded::Stop,
            Some(aa) => Decoded::Residue(aa),
            None => Decoded::Unmapped,
        }
    }

    /// Look up a raw slice of bases. Anything but exactly three of A, C, G, T is `Unmapped`.
    pub fn decode(&self, codon: &[u8]) -> Decoded {
        match Codon::try_from(codon) {
            Ok(codon) => self.lookup(codon),
            Err(_) => Decoded::Unmapped,
        }
    }

    /// The first codon (in table order) that codes for methionine
    ///
    /// Table order is the order of assignment, which for the standard code is AAA to TTT.
    pub fn start_codon(&self) -> Result<Codon, TableError> {
        let mut candidates = self
            .order
            .iter()
            .copied()
            .filter(|codon| self.get(*codon) == Some(START_AMINO_ACID));
        let start = candidates.next().ok_or(TableError::StartCodonUndefined)?;
        if let Some(other) = candidates.next() {
            debug!(
                "Several codons code for {:?}, using {} and ignoring {}",
                START_AMINO_ACID, start, other
            );
        }
        Ok(start)
    }

    pub fn verify_complete(&self) -> Result<(), TableError> {
        match Codon::all().find(|codon| self.get(*codon).is_none()) {
            Some(codon) => Err(TableError::IncompleteTable {
                codon: codon.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn stop_codons(&self) -> Vec<Codon> {
        Codon::all()
            .filter(|codon| self.get(*codon) == Some(AminoAcid::Stop))
            .collect()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

/// Read a genetic code from a tab separated file
///
/// Each line holds a codon and the one-letter code of its amino acid (`*` for stop).
/// Lines starting with `#` and blank lines are ignored. Codons that are never
/// mentioned stay unmapped.
pub fn read_genetic_code_from_file<P: AsRef<Path>>(path: P) -> Result<GeneticCode, FileError> {
    const CODON_IDX: usize = 0;
    const SYMBOL_IDX: usize = 1;

    let tabfile = match Tabfile::open(&path) {
        Ok(tf) => tf.comment_character('#'),
        Err(e) => return Err(FileError::io(Some(&path), e)),
    };
    let mut assignments = Vec::new();
    for record_result in tabfile {
        let record = match record_result {
            Ok(record) => record,
            Err(e) => return Err(FileError::io(Some(&path), e)),
        };
        if record.line().trim().is_empty() {
            continue;
        }
        let parse_error = |expected: &'static str| {
            let err = ParseError::file(
                path.as_ref().to_path_buf(),
                record.line_number(),
                expected,
                record.line().to_string(),
            );
            FileError::parse(Some(&path), err)
        };
        let tokens = record.fields();
        if tokens.len() < 2 {
            return Err(parse_error("2 columns"));
        }
        let codon: Codon = tokens[CODON_IDX]
            .trim()
            .parse()
            .map_err(|_| parse_error("a codon out of A, C, G and T"))?;
        let symbol = tokens[SYMBOL_IDX].trim();
        let aa = match symbol.chars().next() {
            Some(c) if symbol.len() == 1 => AminoAcid::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| parse_error("a one-letter amino acid code or *"))?;
        assignments.push((codon, aa));
    }
    Ok(GeneticCode::from_entries(assignments))
}
