//! Site configuration management.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── meta       # [meta]     site identity
//! │   ├── i18n       # [i18n]     locales
//! │   ├── policy     # [policy]   fault-handling knobs
//! │   ├── preset     # [[preset]] renderer option bundles
//! │   └── theme      # [theme]    navbar, footer, prism
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Exactly one `SiteConfig` exists per build: it is constructed once
//! (from the authored literal in [`crate::site`], or parsed from TOML),
//! validated, installed via [`init_config`], and read-only afterward.

pub mod section;
pub mod types;

// Re-export from section/
pub use section::{
    BlogOptions, DocsOptions, FaultError, FaultPolicy, FeedFormat, FeedOptions, FooterConfig,
    FooterLink, FooterLinkGroup, FooterStyle, I18nConfig, LinkTarget, Logo, NavPosition,
    NavbarConfig, NavbarItem, PolicyConfig, Preset, PrismConfig, SiteMetaConfig, ThemeConfig,
    ThemeOptions,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site identity (title, tagline, urls).
    pub meta: SiteMetaConfig,

    /// Fault-handling policies.
    pub policy: PolicyConfig,

    /// Locale settings.
    pub i18n: I18nConfig,

    /// Ordered preset entries.
    #[serde(rename = "preset")]
    pub presets: Vec<Preset>,

    /// Theme settings (navbar, footer, prism).
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    ///
    /// Unknown fields are not fatal; they are logged so typos surface
    /// without blocking a build.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {}:", display_path);
        crate::log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.meta.validate(&mut diag);
        self.i18n.validate(&mut diag);
        for preset in &self.presets {
            preset.validate(&mut diag);
        }

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[meta]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[meta]\ntitle = \"Test\"\ntagline = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[meta\ntitle = \"QuantaDB\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.meta.title, "");
        assert_eq!(config.meta.base_url, "/");
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.policy.broken_links, FaultPolicy::Throw);
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[meta]\ntitle = \"Test\"\ntagline = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.meta.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[meta]\ntitle = \"Test\"\ntagline = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = test_parse_config("");
        config.meta.title.clear();
        config.i18n.default_locale = "fr".into();

        let err = config.validate().unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other}"),
        }
    }

    #[test]
    fn test_from_path_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[meta]\ntitle = \"QuantaDB\"\ntagline = \"A powerful and efficient database solution\""
        )
        .unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.meta.title, "QuantaDB");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let content = "[meta]\ntitle = \"Test\"\ntagline = \"Test\"\n[[preset]]\nname = \"classic\"";
        let first = SiteConfig::from_str(content).unwrap();
        let second = SiteConfig::from_str(content).unwrap();
        assert_eq!(first, second);
    }
}
