//! Color definitions for residues, nucleotides and UI elements

use ratatui::style::Color;

use crate::sequence::{AminoAcid, Nucleotide, Residue};

/// Get the display color for a translated residue; every residue has its own color
pub fn get_residue_color(residue: Residue) -> Color {
    let amino = match residue {
        Residue::Amino(amino) => amino,
        Residue::Stop => return Color::Red,
        Residue::Unknown => return Color::DarkGray,
    };

    match amino {
        AminoAcid::Phenylalanine => Color::LightRed,
        AminoAcid::Leucine => Color::Green,
        AminoAcid::Isoleucine => Color::Yellow,
        AminoAcid::Methionine => Color::Blue,
        AminoAcid::Valine => Color::Magenta,
        AminoAcid::Serine => Color::Cyan,
        AminoAcid::Proline => Color::Gray,
        AminoAcid::Threonine => Color::LightCyan,
        AminoAcid::Alanine => Color::Indexed(208),
        AminoAcid::Tyrosine => Color::LightGreen,
        AminoAcid::Histidine => Color::LightYellow,
        AminoAcid::Glutamine => Color::LightBlue,
        AminoAcid::Asparagine => Color::LightMagenta,
        AminoAcid::Lysine => Color::Indexed(39),
        AminoAcid::AsparticAcid => Color::White,
        AminoAcid::GlutamicAcid => Color::Indexed(203),
        AminoAcid::Cysteine => Color::Indexed(142),
        AminoAcid::Tryptophan => Color::Indexed(220),
        AminoAcid::Arginine => Color::Indexed(27),
        AminoAcid::Glycine => Color::Indexed(171),
    }
}

pub fn get_nucleotide_color(base: Nucleotide) -> Color {
    match base {
        Nucleotide::A => Color::Green,
        Nucleotide::T | Nucleotide::U => Color::Red,
        Nucleotide::G => Color::Yellow,
        Nucleotide::C => Color::Blue,
    }
}
