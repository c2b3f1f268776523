// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{
    AnsiCode, CandidateCycler, DEFAULT_REJECT_FLASH, Key, KeyCode, LineEditorError,
    READ_BUFFER_SIZE, SharedTerminalPort, Term, colored, has_trailing_space,
    spawn_key_reader,
};
use std::{
    collections::HashMap,
    fmt::{self, Debug},
    sync::Arc,
    thread,
    time::Duration,
};

/// Handler bound to a [`KeyCode`] with [`LineEditor::handle`]. Runs to completion on
/// the dispatch loop before the next key is received.
pub type KeyHandler =
    Arc<dyn Fn(&mut LineEditor, &Key) -> Result<(), LineEditorError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEditorOptions {
    /// How long [`LineEditor::reject`] shows the rejected text.
    pub reject_flash: Duration,
    /// Bytes requested per terminal read.
    pub read_buffer_size: usize,
}

impl Default for LineEditorOptions {
    fn default() -> Self {
        Self {
            reject_flash: DEFAULT_REJECT_FLASH,
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}

/// # Mental model
///
/// A single line of bytes and a cursor into it, mirrored on a raw terminal after the
/// prompt. Every operation mutates the buffer and then writes the smallest escape
/// sequence that makes the terminal match, so the screen is never redrawn in full
/// except by [`LineEditor::reset`] and [`LineEditor::refresh`].
///
/// Keys arrive from a reader thread (see [`crate::spawn_key_reader`]) and are
/// dispatched to the handler bound to their [`KeyCode`]. Unbound keys are ignored.
/// A fresh editor has no bindings; [`LineEditor::readline`] starts with the usual
/// readline keys.
///
/// # Invariants
///
/// - `0 <= cursor <= buffer.len()` after every operation.
/// - After every edit that leaves the buffer empty there is no suggestion and no
///   active cycler. [`LineEditor::suggest`] on an empty buffer is the exception: it
///   shows the whole first candidate.
/// - A buffer ending in a space has no active cycler, so the next completion
///   starts fresh for the new word.
///
/// # Errors
///
/// Operations return the first device error they hit. The in-memory state may
/// already be updated at that point, but the screen may not match.
pub struct LineEditor {
    pub(super) term: Term,
    pub(super) handlers: HashMap<KeyCode, KeyHandler>,
    pub(super) prompt: Vec<u8>,
    pub(super) buffer: Vec<u8>,
    pub(super) cursor: usize,
    pub(super) suggestion: Vec<u8>,
    pub(super) cycler: Option<CandidateCycler>,
    pub(super) options: LineEditorOptions,
}

impl Debug for LineEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound_keys: Vec<_> = self.handlers.keys().map(KeyCode::to_string).collect();
        bound_keys.sort();
        f.debug_struct("LineEditor")
            .field("prompt", &String::from_utf8_lossy(&self.prompt))
            .field("buffer", &String::from_utf8_lossy(&self.buffer))
            .field("cursor", &self.cursor)
            .field("suggestion", &String::from_utf8_lossy(&self.suggestion))
            .field("cycler", &self.cycler)
            .field("bound_keys", &bound_keys)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl LineEditor {
    /// Start `port` (usually entering raw mode) and create an editor with no key
    /// bindings. Nothing is rendered until [`LineEditor::run`] or
    /// [`LineEditor::refresh`].
    pub fn new(
        prompt: impl Into<Vec<u8>>,
        port: SharedTerminalPort,
    ) -> Result<Self, LineEditorError> {
        Self::with_options(prompt, port, LineEditorOptions::default())
    }

    pub fn with_options(
        prompt: impl Into<Vec<u8>>,
        port: SharedTerminalPort,
        options: LineEditorOptions,
    ) -> Result<Self, LineEditorError> {
        let term = Term::new(port);
        term.start()?;
        Ok(Self {
            term,
            handlers: HashMap::new(),
            prompt: prompt.into(),
            buffer: vec![],
            cursor: 0,
            suggestion: vec![],
            cycler: None,
            options,
        })
    }

    /// Bind `handler` to `code`, replacing any previous binding.
    pub fn handle<F>(&mut self, code: KeyCode, handler: F)
    where
        F: Fn(&mut LineEditor, &Key) -> Result<(), LineEditorError> + Send + Sync + 'static,
    {
        self.handlers.insert(code, Arc::new(handler));
    }

    pub fn unhandle(&mut self, code: KeyCode) { self.handlers.remove(&code); }

    /// Run the handler bound to `key.code`, if any.
    pub fn dispatch(&mut self, key: &Key) -> Result<(), LineEditorError> {
        let Some(handler) = self.handlers.get(&key.code).map(Arc::clone) else {
            tracing::trace!(key = key.name(), "no handler bound, ignoring key");
            return Ok(());
        };
        tracing::debug!(key = key.name(), "dispatching key");
        handler(self, key)
    }

    /// Render the prompt, then dispatch keys until input ends (end of input or
    /// Ctrl-D) or a handler fails. Always tears the terminal down with
    /// [`LineEditor::stop`] before returning.
    pub async fn run(&mut self) -> Result<(), LineEditorError> {
        tracing::info!(prompt = %String::from_utf8_lossy(&self.prompt), "line editor started");

        let result = self.run_session().await;
        if let Err(err) = &result {
            tracing::error!(%err, "line editor session failed");
        }
        let stopped = self.stop();
        tracing::info!(line = %self.line(), "line editor stopped");
        result.and(stopped)
    }

    async fn run_session(&mut self) -> Result<(), LineEditorError> {
        self.refresh()?;
        let mut keys = spawn_key_reader(self.term.port(), self.options.read_buffer_size)?;
        while let Some(key) = keys.recv().await {
            self.dispatch(&key)?;
        }
        Ok(())
    }

    /// Teardown: newline, clear the line, restore the terminal mode, close the port.
    pub fn stop(&mut self) -> Result<(), LineEditorError> { self.term.stop() }

    /// Leave raw mode so the caller can print normally. Keys keep being read.
    pub fn pause(&mut self) -> Result<(), LineEditorError> { self.term.pause() }

    pub fn resume(&mut self) -> Result<(), LineEditorError> { self.term.resume() }

    /// Move the terminal to a fresh line without touching the buffer.
    pub fn newline(&mut self) -> Result<(), LineEditorError> { self.term.newline() }

    /// Write raw bytes to the terminal. The buffer and cursor are untouched.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), LineEditorError> {
        self.term.write(bytes)
    }

    /// Emit `count` delete chars without touching the buffer.
    pub fn del(&mut self, count: usize) -> Result<(), LineEditorError> { self.term.del(count) }

    /// Flash `text` in red, then put the cursor back and clear what was shown. Blocks
    /// the dispatch loop for [`LineEditorOptions::reject_flash`].
    pub fn reject(&mut self, text: &[u8]) -> Result<(), LineEditorError> {
        self.term.write(&colored(AnsiCode::Red, text))?;
        thread::sleep(self.options.reject_flash);
        self.set_cursor(None)?;
        self.term.clear()
    }

    /// Redraw the whole line: prompt, buffer, suggestion, then place the cursor.
    pub fn refresh(&mut self) -> Result<(), LineEditorError> {
        self.after_edit();
        self.term.clear_line()?;
        self.term.write(&self.prompt)?;
        if !self.buffer.is_empty() {
            let mut line = self.buffer.clone();
            line.extend(colored(AnsiCode::Green, &self.suggestion));
            self.term.write(&line)?;
        }
        self.set_cursor(None)
    }

    /// Place the terminal cursor at `position` (or the current cursor) past the
    /// prompt. `position` is clamped to the buffer length and becomes the cursor.
    pub fn set_cursor(&mut self, position: Option<usize>) -> Result<(), LineEditorError> {
        if let Some(position) = position {
            self.cursor = position.min(self.buffer.len());
        }
        self.term.set_cursor(self.prompt.len() + self.cursor)
    }

    /// Run after every mutation. An empty buffer drops the suggestion and cycler; a
    /// trailing space drops the cycler.
    pub(super) fn after_edit(&mut self) {
        if self.buffer.is_empty() {
            self.clear_state();
        } else if has_trailing_space(&self.buffer) {
            self.cycler = None;
        }
    }

    pub(super) fn clear_state(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.suggestion.clear();
        self.cycler = None;
    }

    pub fn prompt(&self) -> &[u8] { &self.prompt }

    pub fn buffer(&self) -> &[u8] { &self.buffer }

    /// The buffer as (lossy) UTF-8.
    pub fn line(&self) -> String { String::from_utf8_lossy(&self.buffer).into_owned() }

    pub fn cursor(&self) -> usize { self.cursor }

    pub fn suggestion(&self) -> &[u8] { &self.suggestion }

    pub fn cycler(&self) -> Option<&CandidateCycler> { self.cycler.as_ref() }

    pub fn options(&self) -> LineEditorOptions { self.options }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::{TerminalMock, decode};

    pub fn fast_options() -> LineEditorOptions {
        LineEditorOptions {
            reject_flash: Duration::from_millis(1),
            ..Default::default()
        }
    }

    /// Readline editor on a mock, with the prompt `t ~ ` already rendered.
    pub fn setup() -> (LineEditor, TerminalMock) {
        let mock = TerminalMock::default();
        let mut editor =
            LineEditor::with_options("t ~ ", Arc::new(mock.clone()), fast_options()).unwrap();
        editor.bind_readline_keys();
        editor.refresh().unwrap();
        (editor, mock)
    }

    /// Dispatch each chunk as if it was read from the terminal.
    pub fn receive(editor: &mut LineEditor, chunks: &[&[u8]]) {
        for chunk in chunks {
            editor.dispatch(&decode(chunk)).unwrap();
        }
    }

    /// Output since setup, decoded, as a list of tags and text to concatenate.
    pub fn assert_out(mock: &TerminalMock, parts: &[&str]) {
        pretty_assertions::assert_eq!(
            mock.get_copy_of_output_as_deansi_string(),
            parts.concat()
        );
    }

    pub const INIT: &str = "<cr><clear>t ~ <cr><rgt-4>";
}
