// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod key;
pub mod key_reader;

// Re-export.
pub use key::*;
pub use key_reader::*;
