// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, io, sync::Arc};

/// The byte-level terminal device the editor drives. Implemented by [`crate::TtyPort`]
/// for a real terminal and by [`crate::TerminalMock`] for tests.
///
/// Methods take `&self` because one port is shared between the key reader thread
/// (which only calls [`TerminalPort::read`]) and the editor (which calls everything
/// else). Implementations use interior mutability.
pub trait TerminalPort: Debug + Send + Sync {
    /// Prepare the device for editing, usually by entering raw mode.
    fn start(&self) -> io::Result<()>;

    /// Block until input is available. `Ok(0)` means end of input.
    fn read(&self, buf: &mut [u8]) -> io::Result<usize>;

    /// Write some prefix of `bytes` and return its length.
    fn write(&self, bytes: &[u8]) -> io::Result<usize>;

    /// Disable echo, line buffering, and signal keys.
    fn enter_raw_mode(&self) -> io::Result<()>;

    /// Put back whatever mode was active before [`TerminalPort::enter_raw_mode`].
    fn restore_mode(&self) -> io::Result<()>;

    /// Release the device. Writes after this fail, and reads (including one that is
    /// blocked) return `Ok(0)`.
    fn close(&self) -> io::Result<()>;
}

pub type SharedTerminalPort = Arc<dyn TerminalPort>;
