// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word helpers. A word is a run of bytes between single space (`0x20`) separators;
//! tabs and other whitespace are ordinary bytes.

pub const SPACE: u8 = b' ';

fn is_space(byte: &u8) -> bool { *byte == SPACE }

/// Bytes before the first space, or all of `bytes` if there is none.
#[must_use]
pub fn first_word(bytes: &[u8]) -> &[u8] { bytes.split(is_space).next().unwrap_or_default() }

/// Bytes after the last space, or all of `bytes` if there is none.
#[must_use]
pub fn last_word(bytes: &[u8]) -> &[u8] { bytes.rsplit(is_space).next().unwrap_or_default() }

/// Everything before the last space, eg: `"foo ba"` gives `"foo"`, `"foo  ba"` gives
/// `"foo "`, and a single word gives `""`.
#[must_use]
pub fn trim_last_word(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .rposition(is_space)
        .map_or(&[][..], |index| &bytes[..index])
}

#[must_use]
pub fn has_trailing_space(bytes: &[u8]) -> bool { bytes.last().is_some_and(is_space) }

/// Length of the span a backward word delete removes from the end of `bytes`: the
/// trailing spaces, plus the word in front of them.
#[must_use]
pub fn trailing_word_span(bytes: &[u8]) -> usize {
    let spaces = bytes.iter().rev().take_while(|it| is_space(it)).count();
    let word = bytes[..bytes.len() - spaces]
        .iter()
        .rev()
        .take_while(|it| !is_space(it))
        .count();
    spaces + word
}
