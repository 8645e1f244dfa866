//! Language type: validated language representation and request negotiation.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "uz", "en", "ru")
    code: &'static str,
}

impl Language {
    pub const UZBEK: Language = Language { code: "uz" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Like [`Language::from_code`], but accepts a language tag in any case
    /// and with a region subtag ("EN", "ru-RU", "uz_UZ").
    pub fn from_tag(tag: &str) -> Result<Language> {
        Self::from_code(&normalize(tag))
    }

    /// Get the canonical (default) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Pick the language for a request.
    ///
    /// An explicit `lang` parameter wins, then the `Accept-Language` header
    /// (by quality, primary subtag only), then the canonical language.
    /// Unknown or disabled codes are skipped, never an error.
    pub fn negotiate(explicit: Option<&str>, accept_language: Option<&str>) -> Language {
        if let Some(lang) = explicit.and_then(|tag| Self::from_tag(tag).ok()) {
            return lang;
        }

        accept_language
            .into_iter()
            .flat_map(parse_accept_language)
            .find_map(|code| Self::from_code(&code).ok())
            .unwrap_or_else(Self::canonical)
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Localized strings for this language
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

/// Lowercased primary subtag: "ru-RU" -> "ru"
fn normalize(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Primary subtags from an `Accept-Language` value, highest quality first.
///
/// Entries with `q=0` are dropped; ties keep header order.
fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = normalize(pieces.next()?);
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // sort_by is stable, so equal qualities keep their order
    tags.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    tags.into_iter().map(|(tag, _)| tag).collect()
}
