// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{
    AnsiCode, CursorDirection, LineEditorError, SharedTerminalPort, deansi_string, move_cursor,
    set_cursor,
};
use std::{io::ErrorKind, sync::Arc};

/// Renders edits onto a [`crate::TerminalPort`]. Every method writes one escape
/// sequence (or one run of text) and propagates device errors.
#[derive(Debug, Clone)]
pub struct Term {
    port: SharedTerminalPort,
}

impl Term {
    pub fn new(port: SharedTerminalPort) -> Self { Self { port } }

    /// Shared handle to the underlying port, eg: for the key reader thread.
    pub fn port(&self) -> SharedTerminalPort { Arc::clone(&self.port) }

    pub fn start(&self) -> Result<(), LineEditorError> {
        self.port
            .start()
            .map_err(|source| LineEditorError::TerminalMode {
                action: "start",
                source,
            })
    }

    /// Write all of `bytes`, retrying short writes.
    pub fn write(&self, bytes: &[u8]) -> Result<(), LineEditorError> {
        tracing::trace!(out = %deansi_string(bytes), "term write");

        let mut pending = bytes;
        while !pending.is_empty() {
            match self.port.write(pending) {
                Ok(0) => {
                    return Err(LineEditorError::WriteZero {
                        pending: pending.len(),
                    });
                }
                Ok(count) => pending = pending.get(count..).unwrap_or_default(),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    pub fn write_code(&self, code: AnsiCode) -> Result<(), LineEditorError> {
        self.write(code.bytes())
    }

    pub fn newline(&self) -> Result<(), LineEditorError> {
        self.write_code(AnsiCode::Newline)
    }

    pub fn carriage_return(&self) -> Result<(), LineEditorError> {
        self.write_code(AnsiCode::Cr)
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear(&self) -> Result<(), LineEditorError> { self.write_code(AnsiCode::Clear) }

    /// Return to column 0 and clear the rest of the line.
    pub fn clear_line(&self) -> Result<(), LineEditorError> {
        self.carriage_return()?;
        self.clear()
    }

    pub fn show_cursor(&self) -> Result<(), LineEditorError> {
        self.write_code(AnsiCode::ShowCursor)
    }

    pub fn hide_cursor(&self) -> Result<(), LineEditorError> {
        self.write_code(AnsiCode::HideCursor)
    }

    /// Emit `count` delete chars. Writes nothing for 0.
    pub fn del(&self, count: usize) -> Result<(), LineEditorError> {
        self.write(&AnsiCode::Del.bytes().repeat(count))
    }

    pub fn set_cursor(&self, column: usize) -> Result<(), LineEditorError> {
        self.write(&set_cursor(column))
    }

    pub fn move_cursor(
        &self,
        count: usize,
        direction: CursorDirection,
    ) -> Result<(), LineEditorError> {
        self.write(&move_cursor(count, direction))
    }

    /// Hand the terminal back to its previous mode, eg: to let the caller print.
    pub fn pause(&self) -> Result<(), LineEditorError> {
        self.port
            .restore_mode()
            .map_err(|source| LineEditorError::TerminalMode {
                action: "restore",
                source,
            })
    }

    pub fn resume(&self) -> Result<(), LineEditorError> {
        self.port
            .enter_raw_mode()
            .map_err(|source| LineEditorError::TerminalMode {
                action: "enter raw",
                source,
            })
    }

    /// Teardown: newline, clear the line, restore the mode, close the device. Every
    /// step runs even if an earlier one fails; the first failure is returned.
    pub fn stop(&self) -> Result<(), LineEditorError> {
        let steps = [
            self.newline(),
            self.clear_line(),
            self.pause(),
            self.port.close().map_err(LineEditorError::from),
        ];
        steps.into_iter().collect()
    }
}
