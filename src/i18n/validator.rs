//! Table completeness validation.
//!
//! Compares a candidate table against a reference table (the canonical
//! language's) so that keys which would render as `?key?` after a switch can
//! be reported up front.

use crate::i18n::{LookupError, Table};

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys that will not render: missing or undecodable
    pub errors: Vec<String>,

    /// Keys the reference table does not know about
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table completeness.
pub struct TableValidator;

impl TableValidator {
    /// Validate `candidate` against `reference`.
    ///
    /// Errors list keys of `reference` that are missing from `candidate`, and
    /// keys of `candidate` whose value is not valid UTF-8. Warnings list keys
    /// only `candidate` has. Both lists are sorted.
    pub fn validate(reference: &Table, candidate: &Table) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut missing: Vec<&str> = reference
            .keys()
            .filter(|key| !candidate.contains_key(key))
            .collect();
        missing.sort_unstable();
        report
            .errors
            .extend(missing.into_iter().map(|key| format!("Missing key: {key}")));

        let mut undecodable: Vec<&str> = candidate
            .keys()
            .filter(|key| matches!(candidate.get(key), Err(LookupError::Decoding { .. })))
            .collect();
        undecodable.sort_unstable();
        report.errors.extend(
            undecodable
                .into_iter()
                .map(|key| format!("Value is not valid UTF-8: {key}")),
        );

        let mut extra: Vec<&str> = candidate
            .keys()
            .filter(|key| !reference.contains_key(key))
            .collect();
        extra.sort_unstable();
        report
            .warnings
            .extend(extra.into_iter().map(|key| format!("Unknown key: {key}")));

        report
    }
}
