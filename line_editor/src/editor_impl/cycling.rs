// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Completion, history, and inline suggestion. All three filter a caller supplied
//! candidate list with a [`CandidateCycler`]; the editor never owns the lists.

use crate::{
    AnsiCode, CandidateCycler, CycleDirection, CycleMode, LineEditor, LineEditorError, SPACE,
    colored, trim_last_word,
};

impl LineEditor {
    /// Replace the word under completion with the next candidate that starts with it.
    pub fn complete_next<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
    ) -> Result<(), LineEditorError> {
        self.complete(candidates, CycleDirection::Next)
    }

    pub fn complete_prev<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
    ) -> Result<(), LineEditorError> {
        self.complete(candidates, CycleDirection::Prev)
    }

    /// Completion keeps every word but the last, and cycles the last word through
    /// the candidates that start with it.
    pub fn complete<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
        direction: CycleDirection,
    ) -> Result<(), LineEditorError> {
        self.cycle(candidates, CycleMode::Completion, direction)
    }

    /// Replace the whole line with the next history entry that starts with its first
    /// word.
    pub fn history_next<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
    ) -> Result<(), LineEditorError> {
        self.history(candidates, CycleDirection::Next)
    }

    pub fn history_prev<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
    ) -> Result<(), LineEditorError> {
        self.history(candidates, CycleDirection::Prev)
    }

    pub fn history<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
        direction: CycleDirection,
    ) -> Result<(), LineEditorError> {
        self.cycle(candidates, CycleMode::History, direction)
    }

    /// Continue the active cycle if `candidates` equals its list, otherwise start a
    /// new one filtered by the current buffer. The result replaces the buffer via
    /// [`LineEditor::set`].
    fn cycle<C: AsRef<[u8]>>(
        &mut self,
        candidates: &[C],
        mode: CycleMode,
        direction: CycleDirection,
    ) -> Result<(), LineEditorError> {
        let mut line = match mode {
            CycleMode::Completion => {
                let mut prefix = trim_last_word(&self.buffer).to_vec();
                if !prefix.is_empty() {
                    prefix.push(SPACE);
                }
                prefix
            }
            CycleMode::History | CycleMode::Suggestion => vec![],
        };

        let fresh = CandidateCycler::new(candidates, &self.buffer, mode);
        let cycler = match self.cycler.take() {
            Some(active) if active == fresh => active,
            _ => {
                tracing::debug!(
                    %mode,
                    filter = %String::from_utf8_lossy(fresh.filter()),
                    "new cycle"
                );
                fresh
            }
        };
        line.extend_from_slice(self.cycler.insert(cycler).step(direction));

        self.set(&line)
    }

    /// Show the rest of the first candidate that starts with the buffer's first
    /// word, in green after the cursor. The suggestion is display only; it is never
    /// merged into the buffer. On an empty buffer every candidate matches, so the
    /// whole first candidate is shown.
    pub fn suggest<C: AsRef<[u8]>>(&mut self, candidates: &[C]) -> Result<(), LineEditorError> {
        let mut cycler = CandidateCycler::new(candidates, &self.buffer, CycleMode::Suggestion);
        self.suggestion = cycler
            .next_match()
            .strip_prefix(self.buffer.as_slice())
            .map(<[u8]>::to_vec)
            .unwrap_or_default();

        self.term.clear()?;
        let mut rest = self.buffer[self.cursor..].to_vec();
        rest.extend(colored(AnsiCode::Green, &self.suggestion));
        self.term.write(&rest)?;
        self.set_cursor(None)
    }
}
