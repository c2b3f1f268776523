// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{EnumIter, IntoStaticStr};

/// Control Sequence Introducer, the prefix of every parameterized sequence.
pub const CSI: &[u8] = b"\x1b[";

/// Every literal sequence the editor emits. [`AnsiCode::tag`] yields the tag that
/// [`crate::deansi`] substitutes for the bytes.
///
/// The byte values are part of the wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum AnsiCode {
    /// Clear from the cursor to the end of the line.
    #[strum(to_string = "<clear>")]
    Clear,
    /// Clear the whole line.
    #[strum(to_string = "<clear-line>")]
    ClearLine,
    #[strum(to_string = "<show-crsr>")]
    ShowCursor,
    #[strum(to_string = "<hide-crsr>")]
    HideCursor,
    /// Delete the char under the cursor.
    #[strum(to_string = "<del>")]
    Del,
    #[strum(to_string = "<cr>")]
    Cr,
    #[strum(to_string = "<nl>")]
    Newline,
    #[strum(to_string = "<red>")]
    Red,
    #[strum(to_string = "<green>")]
    Green,
    /// Reset all colors.
    #[strum(to_string = "<reset>")]
    Reset,
}

impl AnsiCode {
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            AnsiCode::Clear => b"\x1b[0K",
            AnsiCode::ClearLine => b"\x1b[2K",
            AnsiCode::ShowCursor => b"\x1b[?25h",
            AnsiCode::HideCursor => b"\x1b[?25l",
            AnsiCode::Del => b"\x7f",
            AnsiCode::Cr => b"\r",
            AnsiCode::Newline => b"\n",
            AnsiCode::Red => b"\x1b[0;31m",
            AnsiCode::Green => b"\x1b[0;32m",
            AnsiCode::Reset => b"\x1b[0m",
        }
    }

    /// The readable tag, eg: `<clear>`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

/// Horizontal direction of a relative cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Right,
    Left,
}

impl CursorDirection {
    /// Final byte of the CSI sequence: `C` moves right, `D` moves left.
    #[must_use]
    pub const fn final_byte(self) -> u8 {
        match self {
            CursorDirection::Right => b'C',
            CursorDirection::Left => b'D',
        }
    }

    /// Name used in decoded tags, eg: `<rgt-4>`.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            CursorDirection::Right => "rgt",
            CursorDirection::Left => "lft",
        }
    }
}

/// `ESC [ <count> C|D`, with `count` rendered as decimal ASCII.
#[must_use]
pub fn move_cursor(count: usize, direction: CursorDirection) -> Vec<u8> {
    let count = count.to_string();
    let mut acc = Vec::with_capacity(CSI.len() + count.len() + 1);
    acc.extend_from_slice(CSI);
    acc.extend_from_slice(count.as_bytes());
    acc.push(direction.final_byte());
    acc
}

/// Absolute horizontal placement: carriage return, then move right by `column`.
#[must_use]
pub fn set_cursor(column: usize) -> Vec<u8> {
    let mut acc = AnsiCode::Cr.bytes().to_vec();
    acc.extend(move_cursor(column, CursorDirection::Right));
    acc
}

/// Wrap `text` in `color` and a trailing [`AnsiCode::Reset`].
#[must_use]
pub fn colored(color: AnsiCode, text: &[u8]) -> Vec<u8> {
    let mut acc = Vec::with_capacity(text.len() + 16);
    acc.extend_from_slice(color.bytes());
    acc.extend_from_slice(text);
    acc.extend_from_slice(AnsiCode::Reset.bytes());
    acc
}
