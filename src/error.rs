//! Error types shared by the strand container, the sequencer and file ingestion

use std::path::PathBuf;

use thiserror::Error;

use crate::sequence::StrandKind;

#[derive(Debug, Error)]
pub enum SequencerError {
    /// The strand file could not be opened or read
    #[error("unable to open file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested collection has no strands yet
    #[error("{}", empty_message(.0))]
    EmptyCollection(StrandKind),

    /// A 1-based selection outside the collection bounds
    #[error("no {kind} strand {index}; choose 1 - {len}")]
    NoSuchIndex {
        kind: StrandKind,
        index: usize,
        len: usize,
    },

    /// Indexed access past the end of a strand
    #[error("position {position} is outside strand of length {len}")]
    OutOfRange { position: usize, len: usize },
}

fn empty_message(kind: &StrandKind) -> &'static str {
    match kind {
        StrandKind::Dna => "No DNA strands loaded",
        StrandKind::Mrna => "No mRNA strands; transcribe first",
    }
}

pub type Result<T> = std::result::Result<T, SequencerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SequencerError::EmptyCollection(StrandKind::Mrna);
        assert_eq!(err.to_string(), "No mRNA strands; transcribe first");

        let err = SequencerError::NoSuchIndex { kind: StrandKind::Dna, index: 4, len: 2 };
        assert_eq!(err.to_string(), "no DNA strand 4; choose 1 - 2");
    }

    #[test]
    fn test_source_unavailable_keeps_cause() {
        use std::error::Error as _;

        let err = SequencerError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("unable to open file missing.txt"));
        assert!(err.source().is_some());
    }
}
