use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::Nucleotide;

const CODON_STR: &str = "three nucleotides out of A, C, G and T";

/// A triplet of nucleotides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    /// Position of this codon in a base 4 ordered table (AAA=0, ..., TTT=63)
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .fold(0usize, |index, nuc| (index << 2) + nuc.index())
    }

    /// Inverse of `index`. Only the lowest 6 bits are used.
    pub fn from_index(index: usize) -> Self {
        let digit = |shift: usize| Nucleotide::from_index((index >> shift) & 0b11);
        Self([digit(4), digit(2), digit(0)])
    }

    /// All 64 codons in table order
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..64).map(Codon::from_index)
    }
}

impl TryFrom<&[u8]> for Codon {
    type Error = ParseError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let observed = || String::from_utf8_lossy(bytes).into_owned();
        if bytes.len() != 3 {
            return Err(ParseError::somewhere(CODON_STR, observed()));
        }
        let mut nucleotides = [Nucleotide::A; 3];
        for (slot, byte) in nucleotides.iter_mut().zip(bytes) {
            *slot = Nucleotide::try_from(*byte as char)
                .map_err(|_| ParseError::somewhere(CODON_STR, observed()))?;
        }
        Ok(Self(nucleotides))
    }
}

impl FromStr for Codon {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codon::try_from(s.as_bytes())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nuc in &self.0 {
            write!(f, "{}", nuc.name())?;
        }
        Ok(())
    }
}
