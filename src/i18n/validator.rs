//! Translation table validation.
//!
//! Every language's string table must keep the placeholders of the canonical
//! table (e.g. `{count}`), otherwise the substituted value silently disappears
//! from the page.

use crate::i18n::{Language, LanguageRegistry, LanguageStrings};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Compare one translated string against its canonical counterpart.
    ///
    /// - An empty translation is an error
    /// - A placeholder present on only one side is an error
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        let orig_placeholders = Self::extract_placeholders(original);
        let trans_placeholders = Self::extract_placeholders(translated);
        if orig_placeholders != trans_placeholders {
            report.errors.push(format!(
                "Placeholder mismatch: original has {:?}, translation has {:?}",
                orig_placeholders, trans_placeholders
            ));
        }

        if translated == original && !orig_placeholders.is_empty() {
            report
                .warnings
                .push("Translation is identical to the original".to_string());
        }

        report
    }

    /// Check a whole string table against the canonical table.
    ///
    /// Messages are prefixed with the field name.
    pub fn validate_strings(canonical: &LanguageStrings, candidate: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((field, original), (_, translated)) in
            canonical.fields().into_iter().zip(candidate.fields())
        {
            let field_report = Self::validate(original, translated);
            report
                .errors
                .extend(field_report.errors.into_iter().map(|e| format!("{}: {}", field, e)));
            report
                .warnings
                .extend(field_report.warnings.into_iter().map(|w| format!("{}: {}", field, w)));
        }

        report
    }

    /// Validate every enabled language in the registry.
    ///
    /// Returns a report for each non-canonical language.
    pub fn validate_registry() -> Vec<(Language, ValidationReport)> {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();

        registry
            .list_enabled()
            .into_iter()
            .filter(|config| !config.is_canonical)
            .filter_map(|config| {
                let lang = Language::from_code(config.code).ok()?;
                Some((lang, Self::validate_strings(canonical.strings, config.strings)))
            })
            .collect()
    }

    /// Extract `{name}` placeholders, sorted
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{[a-z_]+\}").unwrap());

        let mut found: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        found.sort();
        found
    }
}
