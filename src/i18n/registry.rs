//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the landing
//! page is offered in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, RUSSIAN_STRINGS, UZBEK_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "uz", "en", "ru")
    pub code: &'static str,

    /// English name of the language (e.g., "Uzbek", "Russian")
    pub name: &'static str,

    /// Native name of the language, as shown in the language switcher
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Localized user-facing strings
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical (default) language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.as_slice() {
            [] => panic!("No canonical language found in registry"),
            [only] => *only,
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations: Uzbek (canonical), English and Russian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "uz",
            name: "Uzbek",
            native_name: "O'zbek",
            is_canonical: true,
            enabled: true,
            strings: &UZBEK_STRINGS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: false,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_canonical: false,
            enabled: true,
            strings: &RUSSIAN_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_uzbek() {
        let config = LanguageRegistry::get()
            .get_by_code("uz")
            .expect("Uzbek should exist");

        assert_eq!(config.name, "Uzbek");
        assert_eq!(config.native_name, "O'zbek");
        assert!(config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_russian() {
        let config = LanguageRegistry::get()
            .get_by_code("ru")
            .expect("Russian should exist");

        assert_eq!(config.native_name, "Русский");
        assert!(!config.is_canonical);
        assert_eq!(config.strings.csv_date_header, "Дата");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
    }

    #[test]
    fn test_list_enabled_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["uz", "en", "ru"]);
    }

    #[test]
    fn test_canonical_returns_uzbek() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "uz");
    }
}
