// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod candidate_cycler;
pub mod words;

// Re-export.
pub use candidate_cycler::*;
pub use words::*;
