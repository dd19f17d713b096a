//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::sequence::{CodonCall, Strand, StrandKind};
use crate::sequencer::Sequencer;
use crate::ui::colors::{get_nucleotide_color, get_residue_color};

const PREVIEW_SYMBOLS: usize = 24;

/// Format sequence with spaces every 3 characters (triplets)
pub fn format_triplets(sequence: &str) -> String {
    let mut result = String::new();
    let mut count = 0;

    for c in sequence.chars() {
        result.push(c);
        count += 1;
        if count % 3 == 0 && count < sequence.len() {
            result.push(' ');
        }
    }

    result
}

/// Short triplet-spaced preview of a strand for the selection lists
pub fn strand_preview(strand: &Strand) -> String {
    let symbols = strand.to_sequence_string();
    if symbols.len() <= PREVIEW_SYMBOLS {
        return format_triplets(&symbols);
    }
    format!("{}…", format_triplets(&symbols[..PREVIEW_SYMBOLS]))
}

/// Numbered rows for one collection, the cursor row highlighted when focused
pub fn strand_list_lines(strands: &[Strand], cursor: usize, focused: bool) -> Vec<Line<'static>> {
    if strands.is_empty() {
        return vec![Line::from(Span::styled("(none)", Style::default().fg(Color::DarkGray)))];
    }

    strands
        .iter()
        .enumerate()
        .map(|(i, strand)| {
            let mut row_style = Style::default();
            if focused && i == cursor {
                row_style = row_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), row_style.fg(Color::White)),
                Span::styled(strand.name().to_string(), row_style.fg(Color::Green)),
                Span::styled("  ", row_style),
                Span::styled(strand_preview(strand), row_style.fg(Color::Cyan)),
            ])
        })
        .collect()
}

/// `DNA 1` label, `***name***` header, then the arrow-joined listing ending in `END`
pub fn strand_lines(kind: StrandKind, number: usize, strand: &Strand) -> Vec<Line<'static>> {
    let mut listing = Vec::with_capacity(strand.len() * 2 + 1);
    for base in strand.iter() {
        listing.push(Span::styled(base.to_string(), Style::default().fg(get_nucleotide_color(base))));
        listing.push(Span::styled("->", Style::default().fg(Color::DarkGray)));
    }
    listing.push(Span::styled("END", Style::default().fg(Color::White)));

    vec![
        Line::from(Span::styled(format!("{kind} {number}"), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(format!("***{}***", strand.name()), Style::default().fg(Color::Yellow))),
        Line::from(listing),
    ]
}

pub fn all_strand_lines(sequencer: &Sequencer) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for kind in [StrandKind::Dna, StrandKind::Mrna] {
        for (i, strand) in sequencer.strands(kind).iter().enumerate() {
            lines.extend(strand_lines(kind, i + 1, strand));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("No strands loaded", Style::default().fg(Color::DarkGray))));
    }
    lines
}

fn residue_style(call: &CodonCall) -> Style {
    let style = Style::default().fg(get_residue_color(call.residue));
    if call.residue.is_start() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// One `codon->name` row per translated codon
pub fn translation_lines(calls: &[CodonCall]) -> Vec<Line<'static>> {
    if calls.is_empty() {
        return vec![Line::from(Span::styled(
            "No complete codons to translate",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    calls
        .iter()
        .map(|call| {
            Line::from(vec![
                Span::styled(call.codon.clone(), Style::default().fg(Color::Cyan)),
                Span::raw("->"),
                Span::styled(call.residue.name(), residue_style(call)),
            ])
        })
        .collect()
}
