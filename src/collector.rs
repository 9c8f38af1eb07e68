//! Ordered, deduplicated diagnostic accumulator.

use crate::error::{Diagnostic, ValidationResult};

/// Accumulates diagnostics for one validation run.
///
/// `add` keeps only the first diagnostic with a given message text and
/// preserves insertion order. A collector belongs to exactly one run; it is
/// never cleared implicitly.
#[derive(Clone, Debug, Default)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        ErrorCollector::default()
    }

    /// Append `diagnostic` unless its exact text is already present.
    /// Returns whether it was added.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.contains(&diagnostic.message) {
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    pub fn contains(&self, message: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message == message)
    }

    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn reset(&mut self) {
        self.diagnostics.clear();
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Fold a sub-check's diagnostics into this collector.
    ///
    /// The sub-check result is consumed, so its state cannot be observed
    /// or merged a second time.
    pub fn merge(&mut self, result: ValidationResult) {
        for diagnostic in result.into_diagnostics() {
            self.add(diagnostic);
        }
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_unique(self.diagnostics)
    }
}
