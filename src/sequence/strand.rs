//! Named, append-only nucleotide strand
//!
//! A strand is a singly-linked list of nucleotides. Nodes live in an arena
//! owned by the strand and link to their successor by index, so appending is
//! O(1) through the tail link and reversal only rewrites successor links.

use std::fmt;

use crate::error::{Result, SequencerError};
use crate::sequence::Nucleotide;

/// Which of the sequencer's collections a strand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrandKind {
    Dna,
    Mrna,
}

impl StrandKind {
    pub fn other(self) -> StrandKind {
        match self {
            StrandKind::Dna => StrandKind::Mrna,
            StrandKind::Mrna => StrandKind::Dna,
        }
    }
}

impl fmt::Display for StrandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrandKind::Dna => write!(f, "DNA"),
            StrandKind::Mrna => write!(f, "mRNA"),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    base: Nucleotide,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Strand {
    name: String,
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl Strand {
    pub fn new(name: impl Into<String>) -> Strand {
        Strand {
            name: name.into(),
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Build a strand from already-validated nucleotides
    pub fn with_bases(name: impl Into<String>, bases: impl IntoIterator<Item = Nucleotide>) -> Strand {
        let mut strand = Strand::new(name);
        strand.extend(bases);
        strand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nucleotides; nodes are never removed, so this is the append count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a nucleotide after the current last element
    pub fn push_back(&mut self, base: Nucleotide) {
        let index = self.nodes.len();
        self.nodes.push(Node { base, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Nucleotide at a 1-based position, walking from the head
    pub fn element_at(&self, position: usize) -> Result<Nucleotide> {
        if position == 0 || position > self.len() {
            return Err(SequencerError::OutOfRange { position, len: self.len() });
        }

        self.iter()
            .nth(position - 1)
            .ok_or(SequencerError::OutOfRange { position, len: self.len() })
    }

    /// Reverse traversal order in place by pointing every node at its predecessor
    pub fn reverse(&mut self) {
        let mut previous = None;
        let mut current = self.head;

        while let Some(index) = current {
            let next = self.nodes[index].next;
            self.nodes[index].next = previous;
            previous = Some(index);
            current = next;
        }

        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Symbols concatenated without separators, e.g. `AUGGCC`
    pub fn to_sequence_string(&self) -> String {
        self.iter().map(Nucleotide::as_char).collect()
    }
}

impl Extend<Nucleotide> for Strand {
    fn extend<I: IntoIterator<Item = Nucleotide>>(&mut self, iter: I) {
        for base in iter {
            self.push_back(base);
        }
    }
}

impl PartialEq for Strand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Strand {}

impl<'a> IntoIterator for &'a Strand {
    type Item = Nucleotide;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Head-to-tail walk over a strand's links
pub struct Iter<'a> {
    nodes: &'a [Node],
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Nucleotide;

    fn next(&mut self) -> Option<Nucleotide> {
        let node = &self.nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(node.base)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "***{}***", self.name)?;
        for base in self.iter() {
            write!(f, "{base}->")?;
        }
        writeln!(f, "END")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strand(name: &str, symbols: &str) -> Strand {
        Strand::with_bases(name, symbols.chars().filter_map(Nucleotide::from_char))
    }

    #[test]
    fn test_new_strand_is_empty() {
        let s = Strand::new("empty");
        assert_eq!(s.name(), "empty");
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn test_push_back_keeps_order() {
        let mut s = Strand::new("gene");
        s.push_back(Nucleotide::A);
        assert_eq!(s.element_at(1).unwrap(), Nucleotide::A);

        s.push_back(Nucleotide::T);
        s.push_back(Nucleotide::G);
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_sequence_string(), "ATG");
        assert_eq!(s.element_at(3).unwrap(), Nucleotide::G);
    }

    #[test]
    fn test_element_at_out_of_range() {
        let s = strand("gene", "ATG");
        assert!(matches!(s.element_at(0), Err(SequencerError::OutOfRange { position: 0, len: 3 })));
        assert!(matches!(s.element_at(4), Err(SequencerError::OutOfRange { position: 4, len: 3 })));
        assert!(Strand::new("none").element_at(1).is_err());
    }

    #[test]
    fn test_reverse() {
        let mut s = strand("gene", "ATGCCA");
        s.reverse();
        assert_eq!(s.to_sequence_string(), "ACCGTA");
        assert_eq!(s.name(), "gene");
        assert_eq!(s.len(), 6);
        assert_eq!(s.element_at(1).unwrap(), Nucleotide::A);
        assert_eq!(s.element_at(6).unwrap(), Nucleotide::A);
        assert_eq!(s.element_at(2).unwrap(), Nucleotide::C);
    }

    #[test]
    fn test_reverse_is_involution() {
        for symbols in ["", "A", "AT", "ATG", "ATGCATGCAT"] {
            let original = strand("x", symbols);
            let mut s = original.clone();
            s.reverse();
            s.reverse();
            assert_eq!(s, original, "double reversal of {symbols:?}");
        }
    }

    #[test]
    fn test_append_after_reverse() {
        let mut s = strand("gene", "ATG");
        s.reverse();
        s.push_back(Nucleotide::C);
        assert_eq!(s.to_sequence_string(), "GTAC");
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_display() {
        let s = strand("gene1", "ATG");
        assert_eq!(s.to_string(), "***gene1***\nA->T->G->END\n");
        assert_eq!(Strand::new("blank").to_string(), "***blank***\nEND\n");
    }

    #[test]
    fn test_iter_matches_element_at() {
        let s = strand("gene", "GATTACA");
        let by_index: Vec<Nucleotide> = (1..=s.len()).map(|i| s.element_at(i).unwrap()).collect();
        let walked: Vec<Nucleotide> = s.iter().collect();
        assert_eq!(by_index, walked);
        assert_eq!(s.iter().len(), 7);
    }
}
