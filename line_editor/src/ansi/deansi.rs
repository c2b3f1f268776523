// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode emitted bytes into readable tags, eg: `"\r\x1b[4C"` becomes `<cr><rgt-4>`.
//! Only meant for tests and trace logs.

use crate::{AnsiCode, CSI, CursorDirection, MAX_LITERAL_REPLACEMENTS};
use nom::{
    IResult, Parser, branch::alt, bytes::complete::tag, character::complete::digit1,
    combinator::value,
};
use std::ops::Range;
use strum::IntoEnumIterator;

const ESC: u8 = 0x1b;

/// Replace every [`AnsiCode`] literal with its tag (at most
/// [`MAX_LITERAL_REPLACEMENTS`] occurrences each), then every `ESC [ N C` with
/// `<rgt-N>` and every `ESC [ N D` with `<lft-N>`, leftmost first. The digits are
/// copied verbatim. Bytes that match nothing pass through unchanged.
#[must_use]
pub fn deansi(bytes: &[u8]) -> Vec<u8> {
    let mut acc = bytes.to_vec();

    for code in AnsiCode::iter() {
        acc = replace_n(
            &acc,
            code.bytes(),
            code.tag().as_bytes(),
            MAX_LITERAL_REPLACEMENTS,
        );
    }

    while let Some((range, tag)) = find_cursor_move(&acc) {
        acc.splice(range, tag);
    }

    acc
}

/// Lossy string version of [`deansi`].
#[must_use]
pub fn deansi_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&deansi(bytes)).into_owned()
}

fn replace_n(haystack: &[u8], needle: &[u8], replacement: &[u8], limit: usize) -> Vec<u8> {
    let mut acc = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    let mut replaced = 0;

    while replaced < limit {
        let Some(index) = find(rest, needle) else {
            break;
        };
        acc.extend_from_slice(&rest[..index]);
        acc.extend_from_slice(replacement);
        rest = &rest[index + needle.len()..];
        replaced += 1;
    }

    acc.extend_from_slice(rest);
    acc
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Leftmost relative cursor move in `bytes`, with the tag that replaces it.
fn find_cursor_move(bytes: &[u8]) -> Option<(Range<usize>, Vec<u8>)> {
    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == ESC)
        .find_map(|(start, _)| {
            let (rest, (count, direction)) = parse_cursor_move(&bytes[start..]).ok()?;
            let end = bytes.len() - rest.len();
            let mut tag = format!("<{}-", direction.tag_name()).into_bytes();
            tag.extend_from_slice(count);
            tag.push(b'>');
            Some((start..end, tag))
        })
}

fn parse_cursor_move(input: &[u8]) -> IResult<&[u8], (&[u8], CursorDirection)> {
    let (rest, (_, count, direction)) = (
        tag(CSI),
        digit1,
        alt((
            value(CursorDirection::Right, tag(&b"C"[..])),
            value(CursorDirection::Left, tag(&b"D"[..])),
        )),
    )
        .parse(input)?;
    Ok((rest, (count, direction)))
}
