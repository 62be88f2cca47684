//! CLI output: error mapping and the stderr diagnostics sink.

use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};
use crate::error::ApiError;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use tracing::debug;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("error: {}", e)
}

/// Prints diagnostics to stderr. The log only gets a debug record, so a
/// default run shows each diagnostic once.
pub struct StderrSink {
    color: bool,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let label = match diagnostic.severity {
            Severity::Notice => "note:",
            Severity::Warning => "warning:",
        };
        if self.color {
            match diagnostic.severity {
                Severity::Notice => eprintln!("{} {}", label.cyan(), diagnostic.message),
                Severity::Warning => eprintln!("{} {}", label.yellow().bold(), diagnostic.message),
            }
        } else {
            eprintln!("{} {}", label, diagnostic.message);
        }
        debug!(severity = ?diagnostic.severity, "{}", diagnostic.message);
    }
}
