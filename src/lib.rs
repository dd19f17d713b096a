//! Strandseq - DNA strand reversal, transcription and translation
//!
//! This library stores named DNA strands in an append-only linked container,
//! transcribes them into mRNA strands and translates mRNA codons into amino
//! acid names. A ratatui front end drives the operations from a key menu.

pub mod app;
pub mod error;
pub mod input;
pub mod logging;
pub mod sequence;
pub mod sequencer;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use error::{Result, SequencerError};
pub use sequencer::Sequencer;
