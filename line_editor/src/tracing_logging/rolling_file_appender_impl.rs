// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;

/// A file appender that never rolls over. Relative paths resolve against the current
/// folder.
///
/// Note that if you wrap this up in a non blocking writer, as shown below, it doesn't
/// work:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create(path)?);
/// ```
pub fn try_create(path: &Path) -> miette::Result<RollingFileAppender> {
    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
