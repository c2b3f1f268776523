// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The render protocol: a fixed table of escape sequences ([`AnsiCode`]), the
//! parameterized cursor sequences built on top of it, and [`deansi`], which turns
//! emitted bytes back into readable tags so tests can assert on them.

// Attach sources.
pub mod ansi_code;
pub mod deansi;

// Re-export.
pub use ansi_code::*;
pub use deansi::*;
