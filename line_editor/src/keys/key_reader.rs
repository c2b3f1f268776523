// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{
    KEY_CHANNEL_CAPACITY, Key, KeyCode, LineEditorError, SharedTerminalPort, TerminalPort,
    decode,
};
use std::{io::ErrorKind, thread};
use tokio::sync::mpsc::{self, Receiver, Sender};

pub const KEY_READER_THREAD_NAME: &str = "led-key-reader";

/// Spawn a thread that reads chunks from `port`, decodes each into a [Key], and sends
/// it over a channel of [`KEY_CHANNEL_CAPACITY`]. The thread stops (closing the
/// channel) on end of input, a read error, [`KeyCode::CtrlD`], or once the receiver
/// is dropped. Ctrl-D itself is never sent.
///
/// Reads block, so this is a plain OS thread rather than a tokio task.
pub fn spawn_key_reader(
    port: SharedTerminalPort,
    read_buffer_size: usize,
) -> Result<Receiver<Key>, LineEditorError> {
    let (sender, receiver) = mpsc::channel(KEY_CHANNEL_CAPACITY);
    thread::Builder::new()
        .name(KEY_READER_THREAD_NAME.into())
        .spawn(move || read_keys(port.as_ref(), &sender, read_buffer_size))
        .map_err(LineEditorError::KeyReaderSpawn)?;
    Ok(receiver)
}

fn read_keys(port: &dyn TerminalPort, sender: &Sender<Key>, read_buffer_size: usize) {
    let mut buf = vec![0; read_buffer_size.max(1)];
    loop {
        let count = match port.read(&mut buf) {
            Ok(0) => {
                tracing::debug!("key reader reached end of input");
                break;
            }
            Ok(count) => count,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::warn!(%err, "key reader failed, ending input");
                break;
            }
        };

        let key = decode(&buf[..count]);
        if key.code == KeyCode::CtrlD {
            tracing::debug!("key reader got Ctrl-D");
            break;
        }

        tracing::trace!(key = key.name(), bytes = ?key.bytes.as_slice(), "key read");
        if sender.blocking_send(key).is_err() {
            break;
        }
    }
}
