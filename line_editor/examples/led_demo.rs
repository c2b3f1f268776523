// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo. Tab / Shift-Tab complete commands, Up / Down walk the history of
//! entered lines, and typing shows an inline suggestion from that history. Enter
//! prints the line and records it. Ctrl-D quits.
//!
//! ```text
//! cargo run --example led_demo -- --log-file /tmp/led.log
//! ```

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_line_editor::{KeyCode, LineEditor, StdMutex, TracingConfig, TtyPort, init_tracing};
use std::{io::Write, path::PathBuf, sync::Arc};

const COMMANDS: [&str; 8] = [
    "branch", "checkout", "commit", "diff", "log", "pull", "push", "status",
];

#[derive(Debug, Parser)]
#[command(about = "Line editor demo: completion, history and suggestions")]
struct CliArgs {
    /// Prompt shown before the line.
    #[arg(long, default_value = "led > ")]
    prompt: String,

    /// Write tracing logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file.
    #[arg(long, default_value = "debug")]
    log_level: tracing::Level,
}

type SharedHistory = Arc<StdMutex<Vec<Vec<u8>>>>;

fn snapshot(history: &SharedHistory) -> Vec<Vec<u8>> {
    history.lock().map(|it| it.clone()).unwrap_or_default()
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(path) = cli_args.log_file {
        init_tracing(&TracingConfig::new_file(Some(path)).with_level(cli_args.log_level))?;
    }

    let history: SharedHistory = Arc::default();
    let mut editor = LineEditor::readline(cli_args.prompt, Arc::new(TtyPort::open()?))?;

    editor.handle(KeyCode::Tab, |editor, _| editor.complete_next(&COMMANDS));
    editor.handle(KeyCode::ShiftTab, |editor, _| editor.complete_prev(&COMMANDS));

    let it = Arc::clone(&history);
    editor.handle(KeyCode::Up, move |editor, _| editor.history_prev(&snapshot(&it)));
    let it = Arc::clone(&history);
    editor.handle(KeyCode::Down, move |editor, _| editor.history_next(&snapshot(&it)));

    let it = Arc::clone(&history);
    editor.handle(KeyCode::Chars, move |editor, key| {
        editor.insert(&key.bytes)?;
        editor.suggest(&snapshot(&it))
    });

    let it = Arc::clone(&history);
    editor.handle(KeyCode::Enter, move |editor, _| {
        if editor.buffer().is_empty() {
            return editor.reject(b"empty line");
        }
        editor.pause()?;
        let mut stdout = std::io::stdout();
        writeln!(stdout, "\n\rentered: {}", editor.line())?;
        stdout.flush()?;
        if let Ok(mut history) = it.lock() {
            history.push(editor.buffer().to_vec());
        }
        editor.resume()?;
        editor.reset()
    });

    editor.run().await?;

    println!("history:");
    for line in snapshot(&history) {
        println!("  {}", String::from_utf8_lossy(&line));
    }
    std::io::stdout().flush().into_diagnostic()?;

    Ok(())
}
