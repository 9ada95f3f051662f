//! Diagnostic collection.
//!
//! [`DiagnosticSink`] is the reporting channel a host hands to the engine.
//! [`DiagnosticQueue`] is the collecting sink used by the CLI: it applies an
//! error limit, drops exact duplicates, and flushes in source order.

use equate_ir::Span;

use crate::Diagnostic;

/// Where phases report diagnostics.
///
/// Reporting never fails and never aborts the caller; a sink may drop
/// diagnostics it doesn't want.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics identical in code, message, and primary span.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic. Returns `false` if it was filtered out.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error()
            && self.config.error_limit > 0
            && self.error_count >= self.config.error_limit
        {
            return false;
        }

        if self.config.deduplicate && self.diagnostics.iter().any(|d| is_duplicate(d, &diag)) {
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        } else if diag.is_warning() {
            self.warning_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, ordered by primary span start.
    ///
    /// Diagnostics without a span sort last; ties keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.primary_span().map_or(u32::MAX, |span: Span| span.start));
        self.error_count = 0;
        self.warning_count = 0;
        out
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

fn is_duplicate(a: &Diagnostic, b: &Diagnostic) -> bool {
    a.code == b.code && a.message == b.message && a.primary_span() == b.primary_span()
}
