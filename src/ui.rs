//! Diagnostic output on stderr.
//!
//! Status and error lines are written in one of three modes:
//! - Human: colored, symbol-prefixed lines for a terminal
//! - Json: one `{"level": ..., "msg": ...}` object per line
//! - Quiet: only errors are emitted
//!
//! Stdout is reserved for the result JSON, so nothing here writes to it.

use colored::{Color, Colorize};
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Environment variable that enables quiet mode.
pub const QUIET_ENV: &str = "GRADER_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Human,
    Json,
    Quiet,
}

/// Mode-aware writer for diagnostics.
#[derive(Clone)]
pub struct Reporter {
    mode: ReportMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Reporter {
    /// Create a reporter writing to stderr
    pub fn new(mode: ReportMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stderr);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stderr()))),
            is_tty,
        }
    }

    /// Create a reporter with a custom writer (for testing)
    pub fn with_writer(mode: ReportMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// "→ {msg}"
    pub fn step(&self, msg: &str) {
        self.emit("step", "→", Color::Cyan, msg);
    }

    /// "✓ {msg}"
    pub fn success(&self, msg: &str) {
        self.emit("success", "✓", Color::Green, msg);
    }

    /// "⚠ {msg}"
    pub fn warn(&self, msg: &str) {
        self.emit("warning", "⚠", Color::Yellow, msg);
    }

    /// "✗ {msg}", emitted in every mode
    pub fn error(&self, msg: &str) {
        self.error_with_kind(msg, None);
    }

    /// Like [`Reporter::error`], tagging JSON lines with an error kind.
    pub fn error_with_kind(&self, msg: &str, kind: Option<&str>) {
        match self.mode {
            ReportMode::Human => self.write_line(&self.prefixed("✗", Color::Red, msg)),
            ReportMode::Json => self.write_json("error", msg, kind.map(|k| ("kind", k))),
            ReportMode::Quiet => self.write_line(&format!("✗ {}", msg)),
        }
    }

    /// Indented subordinate line
    pub fn detail(&self, msg: &str) {
        match self.mode {
            ReportMode::Human if self.is_tty => {
                self.write_line(&format!("  {}", msg).dimmed().to_string())
            }
            ReportMode::Human => self.write_line(&format!("  {}", msg)),
            ReportMode::Json => self.write_json("detail", msg, None),
            ReportMode::Quiet => {}
        }
    }

    /// Status line that quiet mode drops.
    fn emit(&self, level: &str, symbol: &str, color: Color, msg: &str) {
        match self.mode {
            ReportMode::Human => self.write_line(&self.prefixed(symbol, color, msg)),
            ReportMode::Json => self.write_json(level, msg, None),
            ReportMode::Quiet => {}
        }
    }

    /// "{symbol} {msg}", with the symbol colored only on a terminal.
    fn prefixed(&self, symbol: &str, color: Color, msg: &str) -> String {
        if self.is_tty {
            format!("{} {}", symbol.color(color), msg)
        } else {
            format!("{} {}", symbol, msg)
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn write_json(&self, level: &str, msg: &str, extra: Option<(&str, &str)>) {
        if let Ok(mut writer) = self.writer.lock() {
            let mut obj = json!({
                "level": level,
                "msg": msg,
            });

            if let Some((key, value)) = extra {
                obj[key] = json!(value);
            }

            let _ = writeln!(writer, "{}", obj);
        }
    }
}
