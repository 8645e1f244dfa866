//! Internationalization (i18n) module for the landing page languages.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type and request negotiation
//! - `strings`: Localized strings per language
//! - `validator`: Placeholder checks across string tables
//!
//! # Example
//!
//! ```rust,ignore
//! use eazy_waitlist::i18n::Language;
//!
//! let lang = Language::negotiate(Some("ru"), None);
//! println!("{}", lang.strings().counter(12));
//! ```

mod language;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use validator::{TranslationValidator, ValidationReport};
