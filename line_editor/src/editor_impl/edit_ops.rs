// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement and buffer edits. Each operation guards its no-op case, mutates
//! the buffer and cursor, and then renders just the change.

use crate::{CursorDirection, LineEditor, LineEditorError, trailing_word_span};

impl LineEditor {
    /// One byte left. No-op at the start of the line.
    pub fn move_left(&mut self) -> Result<(), LineEditorError> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.move_cursor(1, CursorDirection::Left)
    }

    /// One byte right. No-op at the end of the line.
    pub fn move_right(&mut self) -> Result<(), LineEditorError> {
        if self.cursor >= self.buffer.len() {
            return Ok(());
        }
        self.move_cursor(1, CursorDirection::Right)
    }

    /// Move by up to `count` bytes, stopping at either end of the line.
    pub fn move_cursor(
        &mut self,
        count: usize,
        direction: CursorDirection,
    ) -> Result<(), LineEditorError> {
        let count = match direction {
            CursorDirection::Left => count.min(self.cursor),
            CursorDirection::Right => count.min(self.buffer.len() - self.cursor),
        };
        if count == 0 {
            return Ok(());
        }
        match direction {
            CursorDirection::Left => self.cursor -= count,
            CursorDirection::Right => self.cursor += count,
        }
        self.term.move_cursor(count, direction)
    }

    /// Splice `bytes` in at the cursor and echo them. Only the inserted bytes are
    /// written, so text after the cursor is not redrawn.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<(), LineEditorError> {
        self.buffer.splice(self.cursor..self.cursor, bytes.iter().copied());
        self.cursor += bytes.len();
        self.after_edit();
        self.term.write(bytes)
    }

    /// Delete the byte before the cursor.
    pub fn back(&mut self) -> Result<(), LineEditorError> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.move_cursor(1, CursorDirection::Left)?;
        self.buffer.remove(self.cursor);
        self.after_edit();
        self.term.del(1)
    }

    /// Delete the spaces right before the cursor and the word before them.
    pub fn back_word(&mut self) -> Result<(), LineEditorError> {
        if self.cursor == 0 {
            return Ok(());
        }
        let span = trailing_word_span(&self.buffer[..self.cursor]);
        self.move_cursor(span, CursorDirection::Left)?;
        self.buffer.drain(self.cursor..self.cursor + span);
        self.after_edit();
        self.term.del(span)
    }

    /// Delete the byte under the cursor.
    pub fn delete_forward(&mut self) -> Result<(), LineEditorError> {
        if self.cursor >= self.buffer.len() {
            return Ok(());
        }
        self.buffer.remove(self.cursor);
        self.after_edit();
        self.term.del(1)
    }

    /// Delete from the cursor to the end of the line.
    pub fn delete_to_end(&mut self) -> Result<(), LineEditorError> {
        if self.cursor >= self.buffer.len() {
            return Ok(());
        }
        self.buffer.truncate(self.cursor);
        self.after_edit();
        self.term.clear()
    }

    /// Swap two adjacent bytes and step past them.
    ///
    /// | cursor      | swapped                          |
    /// |-------------|----------------------------------|
    /// | end of line | last two bytes                   |
    /// | mid-line    | byte before and byte under cursor |
    /// | start       | first two bytes                  |
    pub fn transpose(&mut self) -> Result<(), LineEditorError> {
        let len = self.buffer.len();
        if len < 2 {
            return Ok(());
        }
        let offset = match self.cursor {
            0 => 0,
            cursor if cursor == len => 2,
            _ => 1,
        };
        let start = self.cursor - offset;
        self.set_cursor(Some(start))?;
        self.buffer.swap(start, start + 1);
        self.after_edit();
        self.term.write(&self.buffer[start..])?;
        self.set_cursor(Some((start + 2).min(len)))
    }

    /// Replace the whole buffer with `bytes` and put the cursor at its end.
    pub fn set(&mut self, bytes: &[u8]) -> Result<(), LineEditorError> {
        self.set_cursor(Some(0))?;
        self.term.clear()?;
        self.buffer = bytes.to_vec();
        self.term.write(&self.buffer)?;
        self.cursor = self.buffer.len();
        self.after_edit();
        Ok(())
    }

    /// Empty the buffer, drop the suggestion and cycler, and redraw the prompt.
    pub fn reset(&mut self) -> Result<(), LineEditorError> {
        self.clear_state();
        self.refresh()
    }

    /// Go to a fresh line and start over with an empty buffer.
    pub fn discard(&mut self) -> Result<(), LineEditorError> {
        self.newline()?;
        self.reset()
    }

    /// Cursor to the start of the line.
    pub fn home(&mut self) -> Result<(), LineEditorError> { self.set_cursor(Some(0)) }

    /// Cursor to the end of the line.
    pub fn end(&mut self) -> Result<(), LineEditorError> {
        self.set_cursor(Some(self.buffer.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::line_editor::test_support::*;
    use crate::{CandidateCycler, CursorDirection, CycleMode};
    use pretty_assertions::assert_eq;

    const LEFT: &[u8] = b"\x1b[D";
    const RIGHT: &[u8] = b"\x1b[C";
    const HOME: &[u8] = &[0x01];
    const END: &[u8] = &[0x05];
    const BACKSPACE: &[u8] = &[0x7f];
    const DELETE: &[u8] = b"\x1b[3~";
    const CTRL_K: &[u8] = &[0x0b];
    const CTRL_T: &[u8] = &[0x14];
    const CTRL_U: &[u8] = &[0x15];
    const CTRL_W: &[u8] = &[0x17];
    const CTRL_C: &[u8] = &[0x03];

    #[test]
    fn test_insert() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo ", b"bar"]);
        assert_out(&mock, &[INIT, "foo ", "bar"]);
        assert_eq!(editor.line(), "foo bar");
        assert_eq!(editor.cursor(), 7);
    }

    #[test]
    fn test_insert_mid_line_splices() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"fo", LEFT, b"x"]);
        assert_out(&mock, &[INIT, "fo", "<lft-1>", "x"]);
        assert_eq!(editor.line(), "fxo");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_left_at_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", LEFT]);
        assert_out(&mock, &[INIT, "foo", "<lft-1>"]);
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_left_at_start_is_noop() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[LEFT]);
        assert_out(&mock, &[INIT]);
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_right_at_start() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", HOME, RIGHT]);
        assert_out(&mock, &[INIT, "foo", "<cr><rgt-4>", "<rgt-1>"]);
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_right_at_end_is_noop() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", RIGHT]);
        assert_out(&mock, &[INIT, "foo"]);
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_home_and_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", HOME, END]);
        assert_out(&mock, &[INIT, "foo", "<cr><rgt-4>", "<cr><rgt-7>"]);
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_move_cursor_clamps() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo"]);
        editor.move_cursor(10, CursorDirection::Left).unwrap();
        editor.move_cursor(2, CursorDirection::Right).unwrap();
        assert_out(&mock, &[INIT, "foo", "<lft-3>", "<rgt-2>"]);
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_back_at_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", BACKSPACE, BACKSPACE]);
        assert_out(&mock, &[INIT, "bar", "<lft-1><del>", "<lft-1><del>"]);
        assert_eq!(editor.line(), "b");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_back_in_middle() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", LEFT, BACKSPACE]);
        assert_out(&mock, &[INIT, "bar", "<lft-1>", "<lft-1><del>"]);
        assert_eq!(editor.line(), "br");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", HOME, BACKSPACE]);
        assert_out(&mock, &[INIT, "bar", "<cr><rgt-4>"]);
        assert_eq!(editor.line(), "bar");
    }

    #[test]
    fn test_back_to_empty_clears_state() {
        let (mut editor, _mock) = setup();
        receive(&mut editor, &[b"ba"]);
        editor.suggest(&["bar"]).unwrap();
        editor.cycler = Some(CandidateCycler::new(&["bar"], b"ba", CycleMode::History));
        assert_eq!(editor.suggestion(), b"r");

        receive(&mut editor, &[BACKSPACE, BACKSPACE]);
        assert_eq!(editor.buffer(), b"");
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.suggestion(), b"");
        assert!(editor.cycler().is_none());
    }

    #[test]
    fn test_back_word_at_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", CTRL_W]);
        assert_out(&mock, &[INIT, "bar", "<lft-3><del><del><del>"]);
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_back_word_at_end_after_spaces() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar  ", CTRL_W]);
        assert_out(&mock, &[INIT, "bar  ", "<lft-5><del><del><del><del><del>"]);
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn test_back_word_twice_from_mid_line() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar  foo", LEFT, CTRL_W, CTRL_W]);
        assert_out(&mock, &[
            INIT,
            "bar  foo",
            "<lft-1>",
            "<lft-2><del><del>",
            "<lft-5><del><del><del><del><del>",
        ]);
        assert_eq!(editor.line(), "o");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_back_word_keeps_earlier_words() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo bar", CTRL_W]);
        assert_out(&mock, &[INIT, "foo bar", "<lft-3><del><del><del>"]);
        assert_eq!(editor.line(), "foo ");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_back_word_at_start_is_noop() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", HOME, CTRL_W]);
        assert_out(&mock, &[INIT, "bar", "<cr><rgt-4>"]);
        assert_eq!(editor.line(), "bar");
    }

    #[test]
    fn test_delete_in_middle() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", LEFT, DELETE]);
        assert_out(&mock, &[INIT, "bar", "<lft-1>", "<del>"]);
        assert_eq!(editor.line(), "ba");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", DELETE]);
        assert_out(&mock, &[INIT, "bar"]);
        assert_eq!(editor.line(), "bar");
    }

    #[test]
    fn test_delete_to_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", HOME, CTRL_K]);
        assert_out(&mock, &[INIT, "foo", "<cr><rgt-4>", "<clear>"]);
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_delete_to_end_mid_line() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", LEFT, LEFT, CTRL_K]);
        assert_out(&mock, &[INIT, "foo", "<lft-1>", "<lft-1>", "<clear>"]);
        assert_eq!(editor.line(), "f");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_transpose_at_start() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", HOME, CTRL_T]);
        assert_out(&mock, &[INIT, "bar", "<cr><rgt-4>", "<cr><rgt-4>abr<cr><rgt-6>"]);
        assert_eq!(editor.line(), "abr");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_transpose_after_first_byte() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", LEFT, LEFT, CTRL_T]);
        assert_out(&mock, &[
            INIT,
            "bar",
            "<lft-1>",
            "<lft-1>",
            "<cr><rgt-4>abr<cr><rgt-6>",
        ]);
        assert_eq!(editor.line(), "abr");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_transpose_mid_line() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", LEFT, CTRL_T]);
        assert_out(&mock, &[INIT, "bar", "<lft-1>", "<cr><rgt-5>ra<cr><rgt-7>"]);
        assert_eq!(editor.line(), "bra");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_transpose_at_end() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"bar", CTRL_T]);
        assert_out(&mock, &[INIT, "bar", "<cr><rgt-5>ra<cr><rgt-7>"]);
        assert_eq!(editor.line(), "bra");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_transpose_needs_two_bytes() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"b", CTRL_T]);
        assert_out(&mock, &[INIT, "b"]);
        assert_eq!(editor.line(), "b");
    }

    #[test]
    fn test_set() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo"]);
        editor.set(b"bar").unwrap();
        assert_out(&mock, &[INIT, "foo", "<cr><rgt-4><clear>bar"]);
        assert_eq!(editor.line(), "bar");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_set_empty_resets_state() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo"]);
        editor.set(b"").unwrap();
        assert_out(&mock, &[INIT, "foo", "<cr><rgt-4><clear>"]);
        assert_eq!(editor.cursor(), 0);
        assert!(editor.cycler().is_none());
    }

    #[test]
    fn test_reset() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", CTRL_U]);
        assert_out(&mock, &[INIT, "foo", INIT]);
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_discard() {
        let (mut editor, mock) = setup();
        receive(&mut editor, &[b"foo", CTRL_C]);
        assert_out(&mock, &[INIT, "foo", "<nl>", INIT]);
        assert_eq!(editor.line(), "");
    }

    /// Walk every short operation sequence and check the cursor stays in bounds.
    #[test]
    fn test_cursor_stays_in_bounds() {
        let ops: [&[u8]; 9] = [
            LEFT, RIGHT, HOME, END, BACKSPACE, DELETE, CTRL_W, CTRL_T, CTRL_K,
        ];
        for start in ["", "a", "ab", "foo bar", "a  b  "] {
            for first in ops {
                for second in ops {
                    for third in ops {
                        let (mut editor, _mock) = setup();
                        receive(&mut editor, &[start.as_bytes()]);
                        for op in [first, second, third] {
                            receive(&mut editor, &[op]);
                            assert!(editor.cursor() <= editor.buffer().len());
                            if editor.buffer().is_empty() {
                                assert!(editor.suggestion().is_empty());
                                assert!(editor.cycler().is_none());
                            }
                        }
                    }
                }
            }
        }
    }
}
