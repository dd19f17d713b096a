//! Owns the DNA and mRNA strand collections and runs transcription and
//! translation over them.

use std::fmt;
use std::path::Path;

use log::{debug, info, trace};

use crate::error::{Result, SequencerError};
use crate::input::{read_strand_file, StrandRecord};
use crate::sequence::{transcribe_strand, translate_strand, CodonCall, Nucleotide, Strand, StrandKind};

#[derive(Debug, Default)]
pub struct Sequencer {
    dna: Vec<Strand>,
    mrna: Vec<Strand>,
}

impl Sequencer {
    pub fn new() -> Sequencer {
        Sequencer::default()
    }

    /// Read a strand file and ingest every record in it
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let records = read_strand_file(path)?;
        Ok(self.ingest(records))
    }

    /// Build one DNA strand per record, keeping only `A`, `T`, `G` and `C`
    pub fn ingest<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = StrandRecord>,
    {
        let mut count = 0;

        for record in records {
            let strand = Strand::with_bases(
                record.name,
                record.sequence.chars().filter_map(Nucleotide::from_dna_char),
            );
            let dropped = record.sequence.chars().count() - strand.len();
            if dropped > 0 {
                debug!("Dropped {dropped} invalid symbols from {:?}", strand.name());
            }
            trace!("Loaded {:?} with {} nucleotides", strand.name(), strand.len());

            self.dna.push(strand);
            count += 1;
        }

        info!("{count} strands loaded");
        count
    }

    pub fn dna(&self) -> &[Strand] {
        &self.dna
    }

    pub fn mrna(&self) -> &[Strand] {
        &self.mrna
    }

    pub fn strands(&self, kind: StrandKind) -> &[Strand] {
        match kind {
            StrandKind::Dna => &self.dna,
            StrandKind::Mrna => &self.mrna,
        }
    }

    pub fn count(&self, kind: StrandKind) -> usize {
        self.strands(kind).len()
    }

    fn strands_mut(&mut self, kind: StrandKind) -> &mut Vec<Strand> {
        match kind {
            StrandKind::Dna => &mut self.dna,
            StrandKind::Mrna => &mut self.mrna,
        }
    }

    /// Check a 1-based selection and turn it into a vector index
    fn checked_index(&self, kind: StrandKind, index: usize) -> Result<usize> {
        let len = self.count(kind);
        if len == 0 {
            return Err(SequencerError::EmptyCollection(kind));
        }
        if index == 0 || index > len {
            return Err(SequencerError::NoSuchIndex { kind, index, len });
        }
        Ok(index - 1)
    }

    /// Reverse the `index`th (1-based) strand of a collection in place
    pub fn reverse(&mut self, kind: StrandKind, index: usize) -> Result<()> {
        let position = self.checked_index(kind, index)?;
        let strand = &mut self.strands_mut(kind)[position];
        strand.reverse();
        info!("Reversed {kind} {index} ({:?})", strand.name());
        Ok(())
    }

    /// Transcribe every DNA strand and append the results to the mRNA
    /// collection. Calling this again appends another copy of each.
    pub fn transcribe(&mut self) -> usize {
        let transcribed: Vec<Strand> = self.dna.iter().map(transcribe_strand).collect();
        let count = transcribed.len();
        self.mrna.extend(transcribed);

        info!("{count} strands of DNA transcribed; {} mRNA strands held", self.mrna.len());
        count
    }

    /// Translate the `index`th (1-based) mRNA strand into codon calls
    pub fn translate(&self, index: usize) -> Result<Vec<CodonCall>> {
        let position = self.checked_index(StrandKind::Mrna, index)?;
        let strand = &self.mrna[position];
        let calls = translate_strand(strand);

        info!("Translated mRNA {index} ({:?}) into {} codons", strand.name(), calls.len());
        Ok(calls)
    }

    /// Plain-text listing of every strand, DNA first, each headed `DNA n` / `mRNA n`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in [StrandKind::Dna, StrandKind::Mrna] {
            for (i, strand) in self.strands(kind).iter().enumerate() {
                writeln!(f, "{kind} {}", i + 1)?;
                write!(f, "{strand}")?;
            }
        }
        Ok(())
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        debug!("Releasing {} DNA strands and {} mRNA strands", self.dna.len(), self.mrna.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Residue;

    fn loaded(entries: &[(&str, &str)]) -> Sequencer {
        let mut sequencer = Sequencer::new();
        sequencer.ingest(entries.iter().map(|(n, s)| StrandRecord::new(*n, *s)));
        sequencer
    }

    #[test]
    fn test_ingest_filters_symbols() {
        let mut sequencer = Sequencer::new();
        let count = sequencer.ingest(vec![StrandRecord::new("gene", "AxTGuC N-G")]);

        assert_eq!(count, 1);
        assert_eq!(sequencer.dna().len(), 1);
        assert_eq!(sequencer.dna()[0].name(), "gene");
        assert_eq!(sequencer.dna()[0].to_sequence_string(), "ATGCG");
        assert!(sequencer.mrna().is_empty());
    }

    #[test]
    fn test_ingest_keeps_empty_records() {
        let sequencer = loaded(&[("a", "ATG"), ("b", ""), ("c", "UUU")]);
        let lengths: Vec<usize> = sequencer.dna().iter().map(Strand::len).collect();
        assert_eq!(lengths, vec![3, 0, 0]);
    }

    #[test]
    fn test_transcribe_and_translate() {
        let mut sequencer = loaded(&[("gene", "ATGGCC")]);
        assert_eq!(sequencer.transcribe(), 1);
        assert_eq!(sequencer.mrna()[0].to_sequence_string(), "UACCGG");
        assert_eq!(sequencer.mrna()[0].name(), "gene");

        let calls = sequencer.translate(1).unwrap();
        let pairs: Vec<(&str, &str)> = calls.iter().map(|c| (c.codon.as_str(), c.residue.name())).collect();
        assert_eq!(pairs, vec![("UAC", "Tyrosine"), ("CGG", "Arginine")]);
    }

    #[test]
    fn test_transcribe_appends_duplicates() {
        let mut sequencer = loaded(&[("a", "ATGCCC"), ("b", "TTTAAA")]);
        sequencer.transcribe();
        sequencer.transcribe();

        assert_eq!(sequencer.count(StrandKind::Mrna), 4);
        assert_eq!(sequencer.mrna()[0], sequencer.mrna()[2]);
        assert_eq!(sequencer.mrna()[1], sequencer.mrna()[3]);
        assert_eq!(sequencer.count(StrandKind::Dna), 2);
    }

    #[test]
    fn test_translate_before_transcribe() {
        let sequencer = loaded(&[("gene", "ATG")]);
        assert!(matches!(
            sequencer.translate(1),
            Err(SequencerError::EmptyCollection(StrandKind::Mrna))
        ));
    }

    #[test]
    fn test_translate_index_bounds() {
        let mut sequencer = loaded(&[("gene", "ATGTAA")]);
        sequencer.transcribe();

        assert!(matches!(sequencer.translate(0), Err(SequencerError::NoSuchIndex { index: 0, len: 1, .. })));
        assert!(matches!(sequencer.translate(2), Err(SequencerError::NoSuchIndex { index: 2, .. })));

        let calls = sequencer.translate(1).unwrap();
        assert_eq!(calls[0].residue, Residue::Amino(crate::sequence::AminoAcid::Tyrosine));
        assert_eq!(calls[1].residue.name(), "Isoleucine");
    }

    #[test]
    fn test_reverse_selected_strand_only() {
        let mut sequencer = loaded(&[("a", "ATG"), ("b", "GGC")]);
        sequencer.reverse(StrandKind::Dna, 2).unwrap();

        assert_eq!(sequencer.dna()[0].to_sequence_string(), "ATG");
        assert_eq!(sequencer.dna()[1].to_sequence_string(), "CGG");
    }

    #[test]
    fn test_reverse_rejects_bad_selection() {
        let mut sequencer = loaded(&[("a", "ATG"), ("b", "GGC")]);
        let before = sequencer.render();

        assert!(matches!(
            sequencer.reverse(StrandKind::Dna, 0),
            Err(SequencerError::NoSuchIndex { kind: StrandKind::Dna, index: 0, len: 2 })
        ));
        assert!(matches!(
            sequencer.reverse(StrandKind::Dna, 3),
            Err(SequencerError::NoSuchIndex { index: 3, .. })
        ));
        assert!(matches!(
            sequencer.reverse(StrandKind::Mrna, 1),
            Err(SequencerError::EmptyCollection(StrandKind::Mrna))
        ));
        assert_eq!(sequencer.render(), before);
    }

    #[test]
    fn test_reverse_mrna() {
        let mut sequencer = loaded(&[("a", "ATGC")]);
        sequencer.transcribe();
        sequencer.reverse(StrandKind::Mrna, 1).unwrap();

        assert_eq!(sequencer.mrna()[0].to_sequence_string(), "CGAU");
        assert_eq!(sequencer.dna()[0].to_sequence_string(), "ATGC");
    }

    #[test]
    fn test_render() {
        let mut sequencer = loaded(&[("gene1", "AT")]);
        sequencer.transcribe();

        assert_eq!(
            sequencer.render(),
            "DNA 1\n***gene1***\nA->T->END\nmRNA 1\n***gene1***\nU->A->END\n"
        );
    }

    #[test]
    fn test_render_matches_display() {
        let mut sequencer = loaded(&[("a", "ATG"), ("b", "")]);
        sequencer.transcribe();
        sequencer.reverse(StrandKind::Mrna, 1).unwrap();

        let rendered = sequencer.render();
        assert_eq!(rendered, format!("{sequencer}"));
        assert_eq!(
            rendered,
            "DNA 1\n***a***\nA->T->G->END\nDNA 2\n***b***\nEND\n\
             mRNA 1\n***a***\nC->A->U->END\nmRNA 2\n***b***\nEND\n"
        );
        assert_eq!(Sequencer::new().render(), "");
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dna.txt");
        std::fs::write(&path, b"first,ATGGCC\n\nthi\xe9rd,TTTAAACCC\n").unwrap();

        let mut sequencer = Sequencer::new();
        assert_eq!(sequencer.load_file(&path).unwrap(), 3);
        assert_eq!(sequencer.dna()[1].name(), "");
        assert!(sequencer.dna()[1].is_empty());
        assert_eq!(sequencer.dna()[2].len(), 9);

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            sequencer.load_file(&missing),
            Err(SequencerError::SourceUnavailable { .. })
        ));
        assert_eq!(sequencer.count(StrandKind::Dna), 3);
    }
}
