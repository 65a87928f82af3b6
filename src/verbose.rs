//! Leveled diagnostic logging shared by the three binaries.
//!
//! There is no framework dependency here (no `log`/`tracing`); diagnostics
//! are plain `eprintln!` lines, optionally JSON-encoded, matching the
//! level-gated stderr reporting style the rest of this pipeline's ambient
//! stack follows.

use serde::Serialize;

/// Diagnostic verbosity level.
///
/// `Quiet` writes nothing. `Progress` writes milestone lines (vocabulary
/// size, run file counts, pass boundaries). `Detailed` adds per-batch
/// counters. Structured mode renders every line as a JSON object instead
/// of free text, for machine consumption.
#[derive(Debug, Clone, Copy)]
pub struct Verbose {
    level: u8,
    json: bool,
}

impl Verbose {
    #[must_use]
    pub const fn new(level: u8, json: bool) -> Self {
        Self { level, json }
    }

    #[must_use]
    pub const fn is_enabled(&self, level: u8) -> bool {
        self.level >= level
    }

    /// Writes a free-text progress line if `level <= self.level`.
    pub fn progress(&self, level: u8, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        if self.json {
            self.emit(level, &ProgressLine { message });
        } else {
            eprintln!("{message}");
        }
    }

    /// Writes a structured event if `level <= self.level`; in text mode
    /// this falls back to the event's `Display`-style `summary`.
    pub fn event<T: Serialize>(&self, level: u8, summary: &str, data: &T) {
        if !self.is_enabled(level) {
            return;
        }
        if self.json {
            self.emit(level, data);
        } else {
            eprintln!("{summary}");
        }
    }

    fn emit<T: Serialize>(&self, _level: u8, data: &T) {
        match serde_json::to_string(data) {
            Ok(json) => eprintln!("{json}"),
            Err(err) => eprintln!("failed to serialize diagnostic event: {err}"),
        }
    }
}

#[derive(Serialize)]
struct ProgressLine<'a> {
    message: &'a str,
}
