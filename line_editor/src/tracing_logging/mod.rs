// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` setup. The editor only emits events; nothing is printed unless
//! the caller installs a subscriber, eg: with [`init_tracing`].
//!
//! Log to a file when the editor owns the terminal, since display output would
//! interleave with the line being edited.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_setup;
pub mod writer_config;

// Re-export.
pub use tracing_config::*;
pub use tracing_setup::*;
