// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineEditorError, StdMutex, TerminalPort};
use rustix::{
    event::{self, PollFd, PollFlags, Timespec},
    termios::{self, OptionalActions, Termios},
};
use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Write},
    path::Path,
    sync::{Arc, MutexGuard},
};

/// How long a read waits for input before checking whether the port was closed.
pub const READ_POLL_TIMEOUT: Timespec = Timespec {
    tv_sec: 0,
    tv_nsec: 50_000_000,
};

/// [`TerminalPort`] backed by the controlling terminal. Reads and writes go through
/// two handles to the same device so the key reader never blocks a write.
///
/// [`TerminalPort::close`] drops both handles. A read in progress notices within
/// [`READ_POLL_TIMEOUT`] and returns `Ok(0)`, so the key reader thread exits without
/// swallowing a keystroke meant for whoever reads the terminal next.
#[derive(Debug)]
pub struct TtyPort {
    reader: StdMutex<Option<Arc<File>>>,
    writer: StdMutex<Option<File>>,
    /// Mode saved by the first [`TerminalPort::enter_raw_mode`].
    original: StdMutex<Option<Termios>>,
}

impl TtyPort {
    pub const DEVICE_PATH: &'static str = "/dev/tty";

    /// Open the controlling terminal. Does not change its mode.
    pub fn open() -> Result<Self, LineEditorError> { Self::open_path(Self::DEVICE_PATH) }

    /// Open the terminal device at `path`, eg: the follower side of a pty.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, LineEditorError> {
        let writer = OpenOptions::new().read(true).write(true).open(path)?;
        let reader = writer.try_clone()?;
        Ok(Self {
            reader: StdMutex::new(Some(Arc::new(reader))),
            writer: StdMutex::new(Some(writer)),
            original: StdMutex::new(None),
        })
    }
}

fn lock<T>(mutex: &StdMutex<T>) -> io::Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| io::Error::other(format!("Lock poisoned: {e}")))
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "terminal device is closed")
}

impl TerminalPort for TtyPort {
    fn start(&self) -> io::Result<()> { self.enter_raw_mode() }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            // Poll outside the lock so close() never waits on a read.
            let Some(file) = lock(&self.reader)?.clone() else {
                return Ok(0);
            };
            let mut fds = [PollFd::new(&*file, PollFlags::IN)];
            if event::poll(&mut fds, Some(&READ_POLL_TIMEOUT))? > 0 {
                return (&*file).read(buf);
            }
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut writer = lock(&self.writer)?;
        let Some(file) = writer.as_mut() else {
            return Err(closed_error());
        };
        let count = file.write(bytes)?;
        file.flush()?;
        Ok(count)
    }

    fn enter_raw_mode(&self) -> io::Result<()> {
        let writer = lock(&self.writer)?;
        let Some(fd) = writer.as_ref() else {
            return Err(closed_error());
        };
        let mut termios = termios::tcgetattr(fd)?;

        {
            let mut original = lock(&self.original)?;
            if original.is_none() {
                *original = Some(termios.clone());
            }
        }

        // cfmakeraw flags, VMIN=1 and VTIME=0.
        termios.make_raw();
        termios::tcsetattr(fd, OptionalActions::Now, &termios)?;
        tracing::debug!("tty entered raw mode");
        Ok(())
    }

    fn restore_mode(&self) -> io::Result<()> {
        let writer = lock(&self.writer)?;
        let Some(fd) = writer.as_ref() else {
            return Err(closed_error());
        };
        let original = lock(&self.original)?;
        if let Some(termios) = original.as_ref() {
            termios::tcsetattr(fd, OptionalActions::Now, termios)?;
            tracing::debug!("tty mode restored");
        }
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        lock(&self.writer)?.take();
        lock(&self.reader)?.take();
        tracing::debug!("tty closed");
        Ok(())
    }
}
