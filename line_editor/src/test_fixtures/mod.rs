// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for driving a [`crate::LineEditor`] without a real terminal.

// Attach sources.
pub mod terminal_mock;

// Re-export.
pub use terminal_mock::*;
