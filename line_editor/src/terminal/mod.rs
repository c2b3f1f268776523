// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod term;
pub mod terminal_port;
#[cfg(unix)]
pub mod tty_port;

// Re-export.
pub use term::*;
pub use terminal_port::*;
#[cfg(unix)]
pub use tty_port::*;
