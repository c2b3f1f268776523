// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, DynLayer, WriterConfig, rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    };
}

impl WriterConfig {
    /// This erases the concrete type of the writer, and returns a boxed layer. This
    /// is useful for composition of layers. There's more info in the docs
    /// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
    pub fn create_display_layer<S>(&self, level_filter: LevelFilter) -> Option<Box<DynLayer<S>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let fmt_layer = create_fmt!();
        match self.display_preference()? {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        }
    }

    /// Same as [`WriterConfig::create_display_layer`] for the log file. Files get no
    /// ANSI colors.
    pub fn try_create_file_layer<S>(
        &self,
        level_filter: LevelFilter,
    ) -> miette::Result<Option<Box<DynLayer<S>>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let Some(path) = self.file_path() else {
            return Ok(None);
        };
        let file = rolling_file_appender_impl::try_create(path)?;
        Ok(Some(Box::new(
            create_fmt!()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(level_filter),
        )))
    }
}
