// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use std::borrow::Cow;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Raw bytes of one input chunk. Keypresses fit inline; pastes spill to the heap.
pub type KeyBytes = SmallVec<[u8; 8]>;

/// Every key the decoder recognizes. [`KeyCode::Chars`] stands for any input that is
/// not in [`KEY_TABLE`], eg: printable text or an unknown escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum KeyCode {
    Chars,
    #[strum(to_string = "Ctrl-A")]
    CtrlA,
    #[strum(to_string = "Ctrl-B")]
    CtrlB,
    #[strum(to_string = "Ctrl-C")]
    CtrlC,
    #[strum(to_string = "Ctrl-D")]
    CtrlD,
    #[strum(to_string = "Ctrl-E")]
    CtrlE,
    #[strum(to_string = "Ctrl-F")]
    CtrlF,
    #[strum(to_string = "Ctrl-H")]
    CtrlH,
    Tab,
    #[strum(to_string = "Ctrl-K")]
    CtrlK,
    #[strum(to_string = "Ctrl-L")]
    CtrlL,
    Enter,
    #[strum(to_string = "Ctrl-N")]
    CtrlN,
    #[strum(to_string = "Ctrl-P")]
    CtrlP,
    #[strum(to_string = "Ctrl-T")]
    CtrlT,
    #[strum(to_string = "Ctrl-U")]
    CtrlU,
    #[strum(to_string = "Ctrl-W")]
    CtrlW,
    Esc,
    Backspace,
    Delete,
    #[strum(to_string = "Shift-Tab")]
    ShiftTab,
    Up,
    Down,
    Right,
    Left,
}

/// Exact byte sequence of every recognized key. A chunk decodes to one of these only
/// when it is byte-for-byte equal to the entry.
pub const KEY_TABLE: &[(KeyCode, &[u8])] = &[
    (KeyCode::CtrlA, &[0x01]),
    (KeyCode::CtrlB, &[0x02]),
    (KeyCode::CtrlC, &[0x03]),
    (KeyCode::CtrlD, &[0x04]),
    (KeyCode::CtrlE, &[0x05]),
    (KeyCode::CtrlF, &[0x06]),
    (KeyCode::CtrlH, &[0x08]),
    (KeyCode::Tab, &[0x09]),
    (KeyCode::CtrlK, &[0x0b]),
    (KeyCode::CtrlL, &[0x0c]),
    (KeyCode::Enter, &[0x0d]),
    (KeyCode::CtrlN, &[0x0e]),
    (KeyCode::CtrlP, &[0x10]),
    (KeyCode::CtrlT, &[0x14]),
    (KeyCode::CtrlU, &[0x15]),
    (KeyCode::CtrlW, &[0x17]),
    (KeyCode::Esc, &[0x1b]),
    (KeyCode::Backspace, &[0x7f]),
    (KeyCode::Delete, b"\x1b[3~"),
    (KeyCode::ShiftTab, b"\x1b[Z"),
    (KeyCode::Up, b"\x1b[A"),
    (KeyCode::Down, b"\x1b[B"),
    (KeyCode::Right, b"\x1b[C"),
    (KeyCode::Left, b"\x1b[D"),
];

impl KeyCode {
    /// The table entry for this key, [None] for [`KeyCode::Chars`].
    #[must_use]
    pub fn bytes(self) -> Option<&'static [u8]> {
        KEY_TABLE
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, bytes)| *bytes)
    }
}

/// One decoded input chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub bytes: KeyBytes,
}

impl Key {
    pub fn new(code: KeyCode, bytes: &[u8]) -> Self {
        Self {
            code,
            bytes: SmallVec::from_slice(bytes),
        }
    }

    /// Display name, eg: `Ctrl-A`, `Shift-Tab`, `Chars`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.code.into()
    }

    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Map one raw input chunk to a [Key]. An exact [`KEY_TABLE`] match wins, anything
/// else becomes [`KeyCode::Chars`] carrying the chunk verbatim. Never fails.
#[must_use]
pub fn decode(chunk: &[u8]) -> Key {
    let code = KEY_TABLE
        .iter()
        .find(|(_, bytes)| *bytes == chunk)
        .map_or(KeyCode::Chars, |(code, _)| *code);
    Key::new(code, chunk)
}
