//! `[i18n]` configuration.
//!
//! Locale selection for the renderer. Even single-language sites carry
//! this section so the renderer can set the HTML `lang` attribute.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Locale configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale used for the unprefixed site root.
    pub default_locale: String,

    /// All locales the site is built for.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    /// Validate locale configuration.
    ///
    /// # Checks
    /// - `locales` must not be empty
    /// - `default_locale` must be a member of `locales`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "at least one locale is required",
                "add the default locale, e.g.: locales = [\"en\"]",
            );
            return;
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "'{}' is not listed in {}",
                    self.default_locale,
                    Self::FIELDS.locales
                ),
                format!("add \"{}\" to locales", self.default_locale),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_default_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        I18nConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let i18n = I18nConfig {
            default_locale: "fr".into(),
            locales: vec!["en".into(), "zh-Hans".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        i18n.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("fr"));
    }

    #[test]
    fn test_empty_locales_rejected() {
        let i18n = I18nConfig {
            default_locale: "en".into(),
            locales: Vec::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
