use crate::sequence::{codon_to_residue, CodonCall, Strand};

/// Translate an mRNA strand codon by codon. Codons are the consecutive,
/// non-overlapping triples from the head; a trailing partial codon is ignored.
pub fn translate_strand(mrna: &Strand) -> Vec<CodonCall> {
    let mut calls = Vec::with_capacity(mrna.len() / 3);
    let mut codon = String::with_capacity(3);

    for base in mrna.iter() {
        codon.push(base.as_char());
        if codon.len() == 3 {
            let residue = codon_to_residue(&codon);
            calls.push(CodonCall { codon: std::mem::take(&mut codon), residue });
        }
    }

    calls
}

/// Number of complete codons and whether a partial one trails them
pub fn count_complete_incomplete_codons(strand: &Strand) -> (usize, usize) {
    let complete = strand.len() / 3;
    let incomplete = if strand.len() % 3 > 0 { 1 } else { 0 };
    (complete, incomplete)
}
