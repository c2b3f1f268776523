// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StdMutex, TerminalPort, deansi_string};
use std::{
    io,
    sync::{
        Arc, MutexGuard, PoisonError,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    time::Duration,
};
use strip_ansi_escapes::strip;

/// How often a blocked [`TerminalMock`] read checks whether the mock was closed.
pub const MOCK_READ_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Counts of the mode and lifecycle calls a [`TerminalMock`] received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalMockStats {
    pub start_count: usize,
    pub enter_raw_mode_count: usize,
    pub restore_mode_count: usize,
    pub close_count: usize,
}

#[derive(Debug)]
struct MockInput {
    receiver: Receiver<Vec<u8>>,
    /// Rest of a chunk that did not fit the caller's read buffer.
    pending: Vec<u8>,
}

/// In-memory [`TerminalPort`]. Output is captured in a shared buffer; input is fed
/// chunk by chunk with [`TerminalMock::feed`], and each chunk comes back from exactly
/// one [`TerminalPort::read`] (if it fits the read buffer). Like a real device, once
/// [`TerminalPort::close`] is called every read (including a blocked one) returns
/// `Ok(0)`.
///
/// You can safely clone this struct. Clones share the same buffers, so keep one to
/// inspect output after handing another to the editor.
#[derive(Debug, Clone)]
pub struct TerminalMock {
    output: Arc<StdMutex<Vec<u8>>>,
    input: Arc<StdMutex<MockInput>>,
    sender: Arc<StdMutex<Option<Sender<Vec<u8>>>>>,
    stats: Arc<StdMutex<TerminalMockStats>>,
    closed: Arc<StdMutex<bool>>,
    max_write_len: Arc<StdMutex<Option<usize>>>,
}

impl Default for TerminalMock {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            output: Arc::default(),
            input: Arc::new(StdMutex::new(MockInput {
                receiver,
                pending: vec![],
            })),
            sender: Arc::new(StdMutex::new(Some(sender))),
            stats: Arc::default(),
            closed: Arc::default(),
            max_write_len: Arc::default(),
        }
    }
}

/// Fixture locks never stay poisoned; a panicking test already failed.
fn lock<T>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TerminalMock {
    pub fn new() -> Self { Self::default() }

    /// Queue one input chunk. Reads block until a chunk is available.
    pub fn feed(&self, chunk: impl Into<Vec<u8>>) {
        if let Some(sender) = lock(&self.sender).as_ref() {
            // The receiver lives as long as self.
            sender.send(chunk.into()).ok();
        }
    }

    /// After the queued chunks are consumed, reads return `Ok(0)`.
    pub fn end_input(&self) { lock(&self.sender).take(); }

    /// Accept at most `len` bytes per write, to exercise short writes.
    pub fn set_max_write_len(&self, len: Option<usize>) { *lock(&self.max_write_len) = len; }

    pub fn clear_output(&self) { lock(&self.output).clear(); }

    pub fn stats(&self) -> TerminalMockStats { *lock(&self.stats) }

    /// Number of live clones, including `self`. Drops back to 1 once the editor and
    /// its key reader thread have let go of theirs.
    pub fn handle_count(&self) -> usize { Arc::strong_count(&self.input) }

    pub fn get_copy_of_output(&self) -> Vec<u8> { lock(&self.output).clone() }

    /// Output with every escape sequence decoded to a tag, see [`crate::deansi`].
    pub fn get_copy_of_output_as_deansi_string(&self) -> String {
        deansi_string(&lock(&self.output))
    }

    /// Output with every escape sequence removed.
    pub fn get_copy_of_output_as_string_strip_ansi(&self) -> String {
        let stripped = strip(lock(&self.output).as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl TerminalPort for TerminalMock {
    fn start(&self) -> io::Result<()> {
        lock(&self.stats).start_count += 1;
        Ok(())
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let mut input = lock(&self.input);
        while input.pending.is_empty() {
            if *lock(&self.closed) {
                return Ok(0);
            }
            match input.receiver.recv_timeout(MOCK_READ_POLL_INTERVAL) {
                Ok(chunk) => input.pending = chunk,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(0),
            }
        }
        if *lock(&self.closed) {
            return Ok(0);
        }
        let count = buf.len().min(input.pending.len());
        buf[..count].copy_from_slice(&input.pending[..count]);
        input.pending.drain(..count);
        Ok(count)
    }

    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        if *lock(&self.closed) {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "terminal mock is closed",
            ));
        }
        let count = lock(&self.max_write_len).map_or(bytes.len(), |max| max.min(bytes.len()));
        lock(&self.output).extend_from_slice(&bytes[..count]);
        Ok(count)
    }

    fn enter_raw_mode(&self) -> io::Result<()> {
        lock(&self.stats).enter_raw_mode_count += 1;
        Ok(())
    }

    fn restore_mode(&self) -> io::Result<()> {
        lock(&self.stats).restore_mode_count += 1;
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        lock(&self.stats).close_count += 1;
        *lock(&self.closed) = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clones_share_output() {
        let mock = TerminalMock::default();
        let clone = mock.clone();
        clone.write(b"\x1b[0;31mhello\x1b[0m").unwrap();
        assert_eq!(mock.get_copy_of_output_as_string_strip_ansi(), "hello");
        assert_eq!(
            mock.get_copy_of_output_as_deansi_string(),
            "<red>hello<reset>"
        );
        mock.clear_output();
        assert_eq!(clone.get_copy_of_output(), b"");
    }

    #[test]
    fn test_reads_follow_chunk_boundaries() {
        let mock = TerminalMock::default();
        mock.feed("foo");
        mock.feed(vec![0x7f]);
        mock.feed("abcdef");
        mock.end_input();

        let mut buf = [0; 4];
        assert_eq!(mock.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"foo");
        assert_eq!(mock.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0x7f);
        assert_eq!(mock.read(&mut buf).unwrap(), 4);
        assert_eq!(mock.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ef");
        assert_eq!(mock.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_close_rejects_writes() {
        let mock = TerminalMock::default();
        mock.close().unwrap();
        assert!(mock.write(b"x").is_err());
        assert_eq!(mock.stats().close_count, 1);
    }

    #[test]
    fn test_close_unblocks_pending_read() {
        let mock = TerminalMock::default();
        let reader = {
            let mock = mock.clone();
            std::thread::spawn(move || mock.read(&mut [0; 4]).unwrap())
        };
        std::thread::sleep(MOCK_READ_POLL_INTERVAL * 4);
        mock.close().unwrap();
        assert_eq!(reader.join().unwrap(), 0);

        // Queued input is not delivered after close either.
        mock.feed("late");
        assert_eq!(mock.read(&mut [0; 4]).unwrap(), 0);
        assert_eq!(mock.handle_count(), 1);
    }
}
