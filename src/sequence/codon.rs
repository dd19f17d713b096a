//! Standard genetic code for mRNA codons

use std::fmt;

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl AminoAcid {
    /// Full name; Methionine carries the START marker since AUG opens a reading frame
    pub fn name(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "Alanine",
            AminoAcid::Arginine => "Arginine",
            AminoAcid::Asparagine => "Asparagine",
            AminoAcid::AsparticAcid => "Aspartic acid",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::GlutamicAcid => "Glutamic acid",
            AminoAcid::Glutamine => "Glutamine",
            AminoAcid::Glycine => "Glycine",
            AminoAcid::Histidine => "Histidine",
            AminoAcid::Isoleucine => "Isoleucine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Lysine => "Lysine",
            AminoAcid::Methionine => "Methionine (START)",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Proline => "Proline",
            AminoAcid::Serine => "Serine",
            AminoAcid::Threonine => "Threonine",
            AminoAcid::Tryptophan => "Tryptophan",
            AminoAcid::Tyrosine => "Tyrosine",
            AminoAcid::Valine => "Valine",
        }
    }
}

/// Outcome of looking up one codon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    Amino(AminoAcid),
    Stop,
    Unknown,
}

impl Residue {
    pub fn name(self) -> &'static str {
        match self {
            Residue::Amino(amino) => amino.name(),
            Residue::Stop => "Stop",
            Residue::Unknown => "Unknown",
        }
    }

    pub fn is_start(self) -> bool {
        self == Residue::Amino(AminoAcid::Methionine)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an mRNA codon to its residue. Anything that is not exactly three of
/// `A`, `U`, `G`, `C` maps to [`Residue::Unknown`].
pub fn codon_to_residue(codon: &str) -> Residue {
    use AminoAcid::*;

    let amino = match codon {
        "AUU" | "AUC" | "AUA" => Isoleucine,
        "CUU" | "CUC" | "CUA" | "CUG" | "UUA" | "UUG" => Leucine,
        "GUU" | "GUC" | "GUA" | "GUG" => Valine,
        "UUU" | "UUC" => Phenylalanine,
        "AUG" => Methionine,
        "UGU" | "UGC" => Cysteine,
        "GCU" | "GCC" | "GCA" | "GCG" => Alanine,
        "GGU" | "GGC" | "GGA" | "GGG" => Glycine,
        "CCU" | "CCC" | "CCA" | "CCG" => Proline,
        "ACU" | "ACC" | "ACA" | "ACG" => Threonine,
        "UCU" | "UCC" | "UCA" | "UCG" | "AGU" | "AGC" => Serine,
        "UAU" | "UAC" => Tyrosine,
        "UGG" => Tryptophan,
        "CAA" | "CAG" => Glutamine,
        "AAU" | "AAC" => Asparagine,
        "CAU" | "CAC" => Histidine,
        "GAA" | "GAG" => GlutamicAcid,
        "GAU" | "GAC" => AsparticAcid,
        "AAA" | "AAG" => Lysine,
        "CGU" | "CGC" | "CGA" | "CGG" | "AGA" | "AGG" => Arginine,
        "UAA" | "UAG" | "UGA" => return Residue::Stop,
        _ => {
            warn!("Unknown codon {codon:?}");
            return Residue::Unknown;
        }
    };

    Residue::Amino(amino)
}

/// One translated codon, rendered as `UAC->Tyrosine`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonCall {
    pub codon: String,
    pub residue: Residue,
}

impl fmt::Display for CodonCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.codon, self.residue)
    }
}
