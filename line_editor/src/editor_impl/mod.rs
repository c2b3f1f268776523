// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`LineEditor`] state machine. State, lifecycle and dispatch live in
//! [`line_editor`]; the operations handlers call are split by concern into
//! [`edit_ops`] and [`cycling`].

// Attach sources.
pub mod cycling;
pub mod edit_ops;
pub mod editor_error;
pub mod line_editor;
pub mod readline_keymap;

// Re-export.
pub use editor_error::*;
pub use line_editor::*;
