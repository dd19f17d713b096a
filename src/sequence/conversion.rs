//! Base conversion between DNA and mRNA strands

use crate::sequence::{Nucleotide, Strand};

/// Convert a DNA base to the mRNA base transcribed from it
pub fn dna_to_mrna(base: Nucleotide) -> Option<Nucleotide> {
    match base {
        Nucleotide::A => Some(Nucleotide::U),
        Nucleotide::T => Some(Nucleotide::A),
        Nucleotide::C => Some(Nucleotide::G),
        Nucleotide::G => Some(Nucleotide::C),
        Nucleotide::U => None,
    }
}

/// Transcribe a DNA strand into a new mRNA strand carrying the same name.
/// Bases with no transcription are dropped.
pub fn transcribe_strand(dna: &Strand) -> Strand {
    Strand::with_bases(dna.name(), dna.iter().filter_map(dna_to_mrna))
}
