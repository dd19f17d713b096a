//! Nucleotide symbols shared by DNA and mRNA strands

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    U,
}

impl Nucleotide {
    /// Parse an upper-case nucleotide letter
    pub fn from_char(c: char) -> Option<Nucleotide> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            'U' => Some(Nucleotide::U),
            _ => None,
        }
    }

    /// Parse a letter of the DNA alphabet; `U` is rejected
    pub fn from_dna_char(c: char) -> Option<Nucleotide> {
        Self::from_char(c).filter(|n| n.is_dna())
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
            Nucleotide::U => 'U',
        }
    }

    pub fn is_dna(self) -> bool {
        self != Nucleotide::U
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
