use crossterm::event::KeyCode;
use log::{debug, info, trace, warn};

use crate::error::SequencerError;
use crate::sequence::{CodonCall, StrandKind};
use crate::sequencer::Sequencer;

/// What the output panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Welcome,
    Strands,
    Translation {
        index: usize,
        name: String,
        calls: Vec<CodonCall>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> StatusMessage {
        StatusMessage { text: text.into(), is_error: false }
    }

    fn error(text: impl Into<String>) -> StatusMessage {
        StatusMessage { text: text.into(), is_error: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Exit,
}

pub struct App {
    pub sequencer: Sequencer,
    pub source: String,
    pub focus: StrandKind,
    pub dna_cursor: usize,
    pub mrna_cursor: usize,
    pub panel: Panel,
    pub status: StatusMessage,
}

impl App {
    pub fn new(sequencer: Sequencer, source: impl Into<String>) -> App {
        let loaded = sequencer.count(StrandKind::Dna);
        debug!("Creating new App instance with {loaded} DNA strands");
        App {
            sequencer,
            source: source.into(),
            focus: StrandKind::Dna,
            dna_cursor: 0,
            mrna_cursor: 0,
            panel: Panel::Welcome,
            status: StatusMessage::info(format!("{loaded} strands loaded")),
        }
    }

    /// Dispatch one key press from the main loop
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        trace!("Key pressed: {code:?}");
        match code {
            KeyCode::Char('1') | KeyCode::Char('d') => self.display_strands(),
            KeyCode::Char('2') | KeyCode::Char('r') => self.reverse_selected(),
            KeyCode::Char('3') | KeyCode::Char('t') => self.transcribe(),
            KeyCode::Char('4') | KeyCode::Char('l') => self.translate_selected(),
            KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Esc => {
                info!("Exiting program");
                return KeyOutcome::Exit;
            }
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(_) => {
                self.status = StatusMessage::error("Invalid choice. Please try again.");
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    pub fn cursor(&self, kind: StrandKind) -> usize {
        match kind {
            StrandKind::Dna => self.dna_cursor,
            StrandKind::Mrna => self.mrna_cursor,
        }
    }

    fn cursor_mut(&mut self, kind: StrandKind) -> &mut usize {
        match kind {
            StrandKind::Dna => &mut self.dna_cursor,
            StrandKind::Mrna => &mut self.mrna_cursor,
        }
    }

    /// 1-based selection for the highlighted row of a list
    pub fn selected_index(&self, kind: StrandKind) -> usize {
        self.cursor(kind) + 1
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
        debug!("Focus moved to {} list", self.focus);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.sequencer.count(self.focus);
        let cursor = self.cursor_mut(self.focus);
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn display_strands(&mut self) {
        self.panel = Panel::Strands;
        self.status = StatusMessage::info(format!(
            "Displaying {} DNA and {} mRNA strands",
            self.sequencer.count(StrandKind::Dna),
            self.sequencer.count(StrandKind::Mrna)
        ));
    }

    pub fn reverse_selected(&mut self) {
        let kind = self.focus;
        let index = self.selected_index(kind);

        self.status = match self.sequencer.reverse(kind, index) {
            Ok(()) => {
                // A shown translation no longer matches a reversed mRNA strand
                if kind == StrandKind::Mrna && matches!(self.panel, Panel::Translation { .. }) {
                    self.panel = Panel::Strands;
                }
                StatusMessage::info(format!("Done reversing {kind} {index}'s strand."))
            }
            Err(SequencerError::EmptyCollection(StrandKind::Mrna)) => {
                StatusMessage::error("No mRNA to reverse; transcribe first")
            }
            Err(e) => {
                warn!("Reverse failed: {e}");
                StatusMessage::error(e.to_string())
            }
        };
    }

    pub fn transcribe(&mut self) {
        let count = self.sequencer.transcribe();
        self.status = StatusMessage::info(format!(
            "{count} strands of DNA successfully transcribed into new mRNA strands"
        ));
    }

    pub fn translate_selected(&mut self) {
        let index = self.selected_index(StrandKind::Mrna);

        match self.sequencer.translate(index) {
            Ok(calls) => {
                let name = self.sequencer.mrna()[index - 1].name().to_string();
                self.status = StatusMessage::info(format!(
                    "Translated mRNA {index} into {} amino acids",
                    calls.len()
                ));
                self.panel = Panel::Translation { index, name, calls };
            }
            Err(SequencerError::EmptyCollection(_)) => {
                self.status = StatusMessage::error("No mRNA to translate; transcribe first");
            }
            Err(e) => {
                warn!("Translate failed: {e}");
                self.status = StatusMessage::error(e.to_string());
            }
        }
    }
}
