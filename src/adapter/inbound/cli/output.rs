//! Terminal output for the `transfer` and `verify` commands.
//!
//! Human mode prints marked, colored lines to stdout. `--json` turns every
//! line into a `{"type": ..., "payload": ...}` object so scripts can follow
//! along. `--quiet` keeps only warnings, failures and errors.

use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

use super::command::ColorChoice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Human,
    Quiet,
    Json,
}

impl OutputMode {
    /// `--json` wins over `--quiet`.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Settings {
    mode: OutputMode,
    verbose: u8,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

fn mode() -> OutputMode {
    SETTINGS.get().map(|s| s.mode).unwrap_or_default()
}

/// Install the global output settings. Only the first call takes effect.
pub fn configure(mode: OutputMode, verbose: u8, color: &ColorChoice) {
    let _ = SETTINGS.set(Settings { mode, verbose });
    match color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

#[must_use]
pub fn verbosity() -> u8 {
    SETTINGS.get().map(|s| s.verbose).unwrap_or_default()
}

fn emit_json(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Leading mark of a status line.
#[derive(Debug, Clone, Copy)]
enum Mark {
    Step,
    Success,
    Warning,
    Failure,
}

impl Mark {
    const fn kind(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        }
    }

    const fn survives_quiet(self) -> bool {
        matches!(self, Self::Warning | Self::Failure)
    }

    fn render(self, message: &str) -> String {
        let symbol = match self {
            Self::Step => "›".if_supports_color(Stream::Stdout, |t| t.cyan()).to_string(),
            Self::Success => "✓".if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
            Self::Warning => "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
            Self::Failure => "×".if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        };
        format!("{symbol} {message}")
    }
}

fn status_line(mark: Mark, message: &str) {
    match mode() {
        OutputMode::Json => emit_json(mark.kind(), json!({ "message": message })),
        OutputMode::Quiet if !mark.survives_quiet() => {}
        _ => println!("  {}", mark.render(message)),
    }
}

pub fn step(message: &str) {
    status_line(Mark::Step, message);
}

pub fn success(message: &str) {
    status_line(Mark::Success, message);
}

/// Shown even with `--quiet`.
pub fn warning(message: &str) {
    status_line(Mark::Warning, message);
}

/// Shown even with `--quiet`.
pub fn failure(message: &str) {
    status_line(Mark::Failure, message);
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    match mode() {
        OutputMode::Json => emit_json(
            "field",
            json!({ "label": label, "value": value.to_string() }),
        ),
        OutputMode::Quiet => {}
        OutputMode::Human => println!(
            "  {:<12} {}",
            label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
            value
        ),
    }
}

/// Print a bold command header preceded by a blank line.
pub fn section(title: &str) {
    match mode() {
        OutputMode::Json => emit_json("section", json!({ "title": title })),
        OutputMode::Quiet => {}
        OutputMode::Human => {
            println!();
            println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
        }
    }
}

/// Cyan in human mode, plain otherwise.
pub fn highlight(value: impl Display) -> String {
    match mode() {
        OutputMode::Json => value.to_string(),
        _ => value
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string(),
    }
}

/// Emit the final command result. JSON mode only.
pub fn result(kind: &str, payload: Value) {
    if mode() == OutputMode::Json {
        emit_json(kind, payload);
    }
}

fn stderr_line(kind: &str, message: &str, human: impl FnOnce() -> String) {
    if mode() == OutputMode::Json {
        eprintln!("{}", json!({ "type": kind, "payload": { "message": message } }));
    } else {
        eprintln!("  {}", human());
    }
}

/// Print an error to stderr.
pub fn error(message: &str) {
    stderr_line("error", message, || {
        format!("{} {message}", "×".if_supports_color(Stream::Stderr, |t| t.red()))
    });
}

/// Print a `hint:` line to stderr. Dropped with `--quiet`.
pub fn hint(message: &str) {
    if mode() == OutputMode::Quiet {
        return;
    }
    stderr_line("hint", message, || {
        format!("{}: {message}", "hint".if_supports_color(Stream::Stderr, |t| t.cyan()))
    });
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated wait indicator.
///
/// Without a drawable terminal, or outside human mode, there is no bar and
/// the closing message is printed as a plain status line.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        if mode() != OutputMode::Human {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        if bar.is_hidden() {
            return Self { bar: None };
        }
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Run `print` with the bar temporarily cleared.
    pub fn suspend(&self, print: impl FnOnce()) {
        match &self.bar {
            Some(bar) => bar.suspend(print),
            None => print(),
        }
    }

    pub fn succeed(self, message: &str) {
        self.finish(Mark::Success, message);
    }

    pub fn fail(self, message: &str) {
        self.finish(Mark::Failure, message);
    }

    pub fn clear(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn finish(self, mark: Mark, message: &str) {
        match self.bar {
            Some(bar) => bar.finish_with_message(mark.render(message)),
            None => status_line(mark, message),
        }
    }
}
