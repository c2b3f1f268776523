// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TracingConfig;
use miette::IntoDiagnostic;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber built from `tracing_config`. Does nothing for
/// [`crate::WriterConfig::None`]. Fails if a global subscriber is already set.
pub fn init_tracing(tracing_config: &TracingConfig) -> miette::Result<()> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..)?.map(|layers| tracing_subscriber::registry().with(layers).init());`
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    let writer_config = &tracing_config.writer_config;
    if writer_config.display_preference().is_none() && writer_config.file_path().is_none() {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();

    let mut layers: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add more
    // layers which don't have a level filter.
    layers.push(Box::new(level_filter));

    if let Some(layer) = writer_config.create_display_layer(level_filter) {
        layers.push(layer);
    }

    if let Some(layer) = writer_config.try_create_file_layer(level_filter)? {
        layers.push(layer);
    }

    Ok(Some(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayPreference, WriterConfig};
    use serial_test::serial;

    #[test]
    fn test_no_writer_no_layers() {
        let layers = try_create_layers(&TracingConfig::default()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_display_and_file_layers() {
        let dir = tempfile::tempdir().unwrap();
        let config = TracingConfig::new_file_and_display(
            Some(dir.path().join("led.log")),
            DisplayPreference::Stderr,
        );
        let layers = try_create_layers(&config).unwrap().unwrap();
        // Level filter, display, file.
        assert_eq!(layers.len(), 3);

        let config = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stdout),
            ..TracingConfig::default()
        };
        assert_eq!(try_create_layers(&config).unwrap().unwrap().len(), 2);
    }

    #[test]
    #[serial]
    fn test_init_tracing_installs_global_subscriber_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = TracingConfig::new_file(Some(dir.path().join("led.log")));
        init_tracing(&TracingConfig::default()).unwrap();
        init_tracing(&config).unwrap();
        tracing::debug!("tracing installed");
        assert!(init_tracing(&config).is_err());
    }
}
