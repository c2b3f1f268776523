// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Everything that can go wrong while editing a line. Device failures are never
/// swallowed; they surface from the edit operation that triggered them.
#[derive(Debug, Error, Diagnostic)]
pub enum LineEditorError {
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    Io(#[from] io::Error),

    #[error("terminal accepted 0 of {pending} bytes")]
    #[diagnostic(
        code(r3bl_line_editor::write_zero),
        help("the terminal device was probably closed")
    )]
    WriteZero { pending: usize },

    #[error("failed to {action} terminal mode")]
    #[diagnostic(
        code(r3bl_line_editor::terminal_mode),
        help("make sure the process is attached to an interactive terminal")
    )]
    TerminalMode {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn the key reader thread")]
    #[diagnostic(code(r3bl_line_editor::key_reader))]
    KeyReaderSpawn(#[source] io::Error),
}
