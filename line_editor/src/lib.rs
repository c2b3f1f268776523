// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_editor
//!
//! A byte-oriented interactive line editor for raw terminals. It keeps an in-memory
//! line buffer and cursor, turns raw keypresses into edit operations, and renders
//! every edit as the smallest escape sequence that brings the terminal in sync with
//! the buffer. Completion, history and inline suggestions all share one
//! [`CandidateCycler`].
//!
//! # Architecture
//!
//! | Module           | Responsibility                                                |
//! |------------------|---------------------------------------------------------------|
//! | [`keys`]         | Decode raw input chunks into [`Key`]s, background key reader  |
//! | [`ansi`]         | Escape sequence table, encoding, and [`deansi`] for tests     |
//! | [`cycler`]       | [`CandidateCycler`] and the word helpers it filters with     |
//! | [`editor_impl`]  | [`LineEditor`] state machine, edit operations, key dispatch   |
//! | [`terminal`]     | [`TerminalPort`] contract, [`Term`] renderer, `/dev/tty` port |
//! | [`tracing_logging`] | [`TracingConfig`] and layer setup for `tracing`            |
//! | [`test_fixtures`] | [`TerminalMock`], an in-memory [`TerminalPort`]              |
//!
//! Data flows in one direction:
//!
//! ```text
//! TerminalPort::read ─▶ keys::decode ─▶ mpsc (capacity 1) ─▶ LineEditor::dispatch
//!                                                                │
//!            TerminalPort::write ◀── Term (ansi encoding) ◀──────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use r3bl_line_editor::{KeyCode, LineEditor, TtyPort};
//!
//! # async fn demo() -> miette::Result<()> {
//! let commands = vec![b"repo".to_vec(), b"user".to_vec()];
//! let mut editor = LineEditor::readline("$ ", Arc::new(TtyPort::open()?))?;
//! editor.handle(KeyCode::Tab, move |editor, _| editor.complete_next(&commands));
//! editor.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The editor works on opaque bytes. It does not know about UTF-8, grapheme
//! clusters, or display width, and it only ever edits a single line.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi;
pub mod cycler;
pub mod editor_impl;
pub mod keys;
pub mod terminal;
pub mod test_fixtures;
pub mod tracing_logging;

// Re-export.
pub use ansi::*;
pub use cycler::*;
pub use editor_impl::*;
pub use keys::*;
pub use terminal::*;
pub use test_fixtures::*;
pub use tracing_logging::*;

use std::time::Duration;

pub type StdMutex<T> = std::sync::Mutex<T>;

/// Capacity of the channel between the key reader thread and the dispatch loop. A
/// single slot means a slow handler stalls the reader.
pub const KEY_CHANNEL_CAPACITY: usize = 1;

/// Bytes requested from the terminal per read. A keypress is 1 to 4 bytes; longer
/// pastes arrive as several character chunks.
pub const READ_BUFFER_SIZE: usize = 32;

/// How long [`LineEditor::reject`] keeps the rejected input visible.
pub const DEFAULT_REJECT_FLASH: Duration = Duration::from_millis(100);

/// Upper bound on how many times [`deansi`] replaces one literal escape sequence in a
/// single call.
pub const MAX_LITERAL_REPLACEMENTS: usize = 99;
