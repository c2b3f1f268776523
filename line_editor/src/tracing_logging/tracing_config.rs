// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "line_editor_debug.log";

/// Configure where the tracing logs go and at which level. Pass it to
/// [`crate::init_tracing`].
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level`: [`tracing::Level`] to log at and above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(PathBuf),
    DisplayAndFile(DisplayPreference, PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Tracing disabled.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level: tracing::Level::INFO,
        }
    }
}

impl TracingConfig {
    /// Log to `filename`, or [`DEFAULT_LOG_FILE_NAME`] in the current folder.
    pub fn new_file(filename: Option<PathBuf>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.into()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    pub fn new_file_and_display(
        filename: Option<PathBuf>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.into()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

impl WriterConfig {
    pub fn display_preference(&self) -> Option<DisplayPreference> {
        match self {
            WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => Some(*it),
            WriterConfig::None | WriterConfig::File(_) => None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => Some(it.as_path()),
            WriterConfig::None | WriterConfig::Display(_) => None,
        }
    }
}
