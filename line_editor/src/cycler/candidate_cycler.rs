// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{first_word, last_word};
use strum_macros::Display;

/// Which feature a [`CandidateCycler`] serves. Decides the filter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CycleMode {
    History,
    Completion,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CycleDirection {
    Next,
    Prev,
}

/// Circular iterator over the candidates that start with a filter word.
///
/// - [`CycleMode::Completion`] filters by the last word of the reference line.
/// - [`CycleMode::History`] and [`CycleMode::Suggestion`] filter by the first word.
/// - An empty filter matches every candidate.
///
/// Two cyclers are equal when their candidate lists are byte-for-byte equal, no
/// matter the filter, position, or mode. The editor uses this to decide whether a
/// new call continues the current cycle or starts over.
#[derive(Debug, Clone)]
pub struct CandidateCycler {
    candidates: Vec<Vec<u8>>,
    filter: Vec<u8>,
    /// [None] until the first step.
    current: Option<usize>,
    mode: CycleMode,
}

impl PartialEq for CandidateCycler {
    fn eq(&self, other: &Self) -> bool { self.candidates == other.candidates }
}

impl Eq for CandidateCycler {}

impl CandidateCycler {
    pub fn new<C: AsRef<[u8]>>(candidates: &[C], reference: &[u8], mode: CycleMode) -> Self {
        let filter = match mode {
            CycleMode::Completion => last_word(reference),
            CycleMode::History | CycleMode::Suggestion => first_word(reference),
        };
        Self {
            candidates: candidates.iter().map(|it| it.as_ref().to_vec()).collect(),
            filter: filter.to_vec(),
            current: None,
            mode,
        }
    }

    pub fn mode(&self) -> CycleMode { self.mode }

    pub fn filter(&self) -> &[u8] { &self.filter }

    /// Index into [`CandidateCycler::matches`] of the last returned match.
    pub fn current(&self) -> Option<usize> { self.current }

    fn matching(&self) -> impl Iterator<Item = &[u8]> {
        self.candidates
            .iter()
            .map(Vec::as_slice)
            .filter(|it| it.starts_with(&self.filter))
    }

    /// Candidates that start with the filter, in their original order.
    pub fn matches(&self) -> Vec<&[u8]> { self.matching().collect() }

    /// Step forward, wrapping past the last match to the first. Empty if nothing
    /// matches.
    pub fn next_match(&mut self) -> &[u8] {
        let count = self.matching().count();
        if count == 0 {
            return &[];
        }
        let index = match self.current {
            Some(current) if current + 1 < count => current + 1,
            _ => 0,
        };
        self.current = Some(index);
        self.nth_match(index)
    }

    /// Step back, wrapping past the first match to the last. The first step from a
    /// fresh cycler yields the last match. Empty if nothing matches.
    pub fn prev_match(&mut self) -> &[u8] {
        let count = self.matching().count();
        if count == 0 {
            return &[];
        }
        let index = match self.current {
            Some(current) if current > 0 => (current - 1).min(count - 1),
            _ => count - 1,
        };
        self.current = Some(index);
        self.nth_match(index)
    }

    pub fn step(&mut self, direction: CycleDirection) -> &[u8] {
        match direction {
            CycleDirection::Next => self.next_match(),
            CycleDirection::Prev => self.prev_match(),
        }
    }

    fn nth_match(&self, index: usize) -> &[u8] { self.matching().nth(index).unwrap_or_default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const CANDIDATES: [&str; 4] = ["foo", "bar", "baz", "foobar"];

    #[test_case("", CycleMode::History, &["foo", "bar", "baz", "foobar"]; "empty filter")]
    #[test_case("ba", CycleMode::History, &["bar", "baz"]; "history prefix")]
    #[test_case("foo ba", CycleMode::History, &["foo", "foobar"]; "history first word")]
    #[test_case("foo ba", CycleMode::Completion, &["bar", "baz"]; "completion last word")]
    #[test_case("foo ", CycleMode::Completion, &["foo", "bar", "baz", "foobar"]; "completion after space")]
    #[test_case("x", CycleMode::Suggestion, &[]; "no match")]
    fn test_matches(reference: &str, mode: CycleMode, expected: &[&str]) {
        let cycler = CandidateCycler::new(&CANDIDATES, reference.as_bytes(), mode);
        let expected: Vec<&[u8]> = expected.iter().map(|it| it.as_bytes()).collect();
        assert_eq!(cycler.matches(), expected);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut cycler = CandidateCycler::new(&CANDIDATES, b"ba", CycleMode::History);
        assert_eq!(cycler.current(), None);
        assert_eq!(cycler.next_match(), b"bar");
        assert_eq!(cycler.next_match(), b"baz");
        assert_eq!(cycler.next_match(), b"bar");
        assert_eq!(cycler.current(), Some(0));
    }

    #[test]
    fn test_prev_starts_at_last_and_wraps() {
        let mut cycler = CandidateCycler::new(&CANDIDATES, b"", CycleMode::History);
        assert_eq!(cycler.prev_match(), b"foobar");
        assert_eq!(cycler.prev_match(), b"baz");
        assert_eq!(cycler.prev_match(), b"bar");
        assert_eq!(cycler.prev_match(), b"foo");
        assert_eq!(cycler.prev_match(), b"foobar");
    }

    #[test]
    fn test_full_cycle_returns_to_start_and_prev_undoes_next() {
        let mut cycler = CandidateCycler::new(&CANDIDATES, b"", CycleMode::Completion);
        let first = cycler.next_match().to_vec();
        let second = cycler.next_match().to_vec();
        assert_eq!(cycler.prev_match(), first.as_slice());
        assert_eq!(cycler.step(CycleDirection::Next), second.as_slice());
        for _ in 0..CANDIDATES.len() {
            cycler.next_match();
        }
        assert_eq!(cycler.current(), Some(1));
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let mut cycler = CandidateCycler::new(&CANDIDATES, b"zzz", CycleMode::History);
        assert_eq!(cycler.next_match(), b"");
        assert_eq!(cycler.prev_match(), b"");
        assert_eq!(cycler.current(), None);

        let empty: [&str; 0] = [];
        let mut cycler = CandidateCycler::new(&empty, b"", CycleMode::History);
        assert_eq!(cycler.next_match(), b"");
    }

    #[test]
    fn test_equality_ignores_filter_position_and_mode() {
        let mut lhs = CandidateCycler::new(&CANDIDATES, b"ba", CycleMode::History);
        lhs.next_match();
        let rhs = CandidateCycler::new(&CANDIDATES, b"f", CycleMode::Completion);
        assert_eq!(lhs, rhs);

        let other = CandidateCycler::new(&["foo", "bar"], b"ba", CycleMode::History);
        assert_ne!(lhs, other);
    }
}
