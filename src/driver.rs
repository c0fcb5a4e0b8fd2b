//! Scan session: source acquisition and the scan-to-EOF loop.
//!
//! The session owns everything the scanner collaborates with: the
//! source text, its display name and the report bag. It is the only
//! layer that performs I/O or renders diagnostics; the scanning core
//! itself never touches the filesystem or the terminal.

use std::fs;
use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::error::{RinError, RinResult};
use crate::lexer::{Scanner, Token};
use crate::report::{ReportBag, ReportItem, ReportLevel};

/// One source input plus everything a scan of it produced.
pub struct ScanSession {
    input_name: String,
    source: String,
    reports: ReportBag,
}

impl ScanSession {
    /// Load a source file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> RinResult<Self> {
        let input_name = path.as_ref().display().to_string();
        let source = fs::read_to_string(path.as_ref())
            .map_err(|e| RinError::Io(format!("failed to read {}: {}", input_name, e)))?;
        Ok(Self::from_source(input_name, source))
    }

    /// Wrap an in-memory source, for tests and tooling.
    pub fn from_source(input_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            source: source.into(),
            reports: ReportBag::new(),
        }
    }

    /// Run a scanner over the source until end-of-input and return the
    /// total token stream, including the terminal `Eof`.
    pub fn scan(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        {
            let mut scanner = Scanner::new(
                self.source.chars(),
                &mut self.reports,
                self.input_name.clone(),
            );
            while scanner.advance() {
                tokens.push(scanner.current().clone());
            }
            tokens.push(scanner.current().clone());
        }

        debug!(
            "scanned {}: {} tokens, {} report entries",
            self.input_name,
            tokens.len(),
            self.reports.len()
        );
        tokens
    }

    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Report entries filed during scanning.
    pub fn reports(&self) -> &ReportBag {
        &self.reports
    }

    /// True if any error-level entry was filed.
    pub fn has_errors(&self) -> bool {
        self.reports.is_failed()
    }

    /// Render every report entry to stderr, one severity-colored line
    /// each.
    pub fn render_reports(&self) {
        for item in self.reports.items() {
            eprintln!("{}", format_report(item));
        }
    }
}

fn format_report(item: &ReportItem) -> String {
    let level = match item.level {
        ReportLevel::Error => "error".red().bold(),
        ReportLevel::Warning => "warning".yellow().bold(),
        ReportLevel::Info => "info".cyan(),
        ReportLevel::Diagnostic => "diagnostic".dimmed(),
    };
    format!(
        "{}: {}:{}:{}: {}",
        level, item.input_name, item.line, item.column, item.message
    )
}
