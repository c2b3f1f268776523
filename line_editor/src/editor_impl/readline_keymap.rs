// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyCode, LineEditor, LineEditorError, SharedTerminalPort};

impl LineEditor {
    /// [`LineEditor::new`] plus [`LineEditor::bind_readline_keys`].
    pub fn readline(
        prompt: impl Into<Vec<u8>>,
        port: SharedTerminalPort,
    ) -> Result<Self, LineEditorError> {
        let mut editor = Self::new(prompt, port)?;
        editor.bind_readline_keys();
        Ok(editor)
    }

    /// Bind the emacs style keys most shells use:
    ///
    /// | key                | action                          |
    /// |--------------------|---------------------------------|
    /// | text               | [`LineEditor::insert`]           |
    /// | Ctrl-A             | [`LineEditor::home`]             |
    /// | Ctrl-E             | [`LineEditor::end`]              |
    /// | Ctrl-B, Left       | [`LineEditor::move_left`]        |
    /// | Ctrl-F, Right      | [`LineEditor::move_right`]       |
    /// | Ctrl-C             | [`LineEditor::discard`]          |
    /// | Ctrl-K             | [`LineEditor::delete_to_end`]    |
    /// | Ctrl-T             | [`LineEditor::transpose`]        |
    /// | Ctrl-U             | [`LineEditor::reset`]            |
    /// | Ctrl-W             | [`LineEditor::back_word`]        |
    /// | Enter              | [`LineEditor::newline`]          |
    /// | Backspace          | [`LineEditor::back`]             |
    /// | Delete             | [`LineEditor::delete_forward`]   |
    ///
    /// Tab, Shift-Tab, Up and Down are left for the caller, since completion and
    /// history need candidates. Ctrl-D never reaches a handler; it ends input.
    pub fn bind_readline_keys(&mut self) {
        self.handle(KeyCode::Chars, |editor, key| editor.insert(&key.bytes));
        self.handle(KeyCode::CtrlA, |editor, _| editor.home());
        self.handle(KeyCode::CtrlE, |editor, _| editor.end());
        self.handle(KeyCode::CtrlB, |editor, _| editor.move_left());
        self.handle(KeyCode::Left, |editor, _| editor.move_left());
        self.handle(KeyCode::CtrlF, |editor, _| editor.move_right());
        self.handle(KeyCode::Right, |editor, _| editor.move_right());
        self.handle(KeyCode::CtrlC, |editor, _| editor.discard());
        self.handle(KeyCode::CtrlK, |editor, _| editor.delete_to_end());
        self.handle(KeyCode::CtrlT, |editor, _| editor.transpose());
        self.handle(KeyCode::CtrlU, |editor, _| editor.reset());
        self.handle(KeyCode::CtrlW, |editor, _| editor.back_word());
        self.handle(KeyCode::Enter, |editor, _| editor.newline());
        self.handle(KeyCode::Backspace, |editor, _| editor.back());
        self.handle(KeyCode::Delete, |editor, _| editor.delete_forward());
    }
}
