//! `[meta]` configuration.
//!
//! Basic site identity: title, tagline, production URL, and the GitHub
//! pages coordinates (organization and project name).
//!
//! # Example
//!
//! ```toml
//! [meta]
//! title = "QuantaDB"
//! tagline = "A powerful and efficient database solution"
//! url = "https://quantadb.netlify.app"
//! base_url = "/"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site identity handed to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "meta")]
pub struct SiteMetaConfig {
    /// Site title shown in the browser tab and navbar fallback.
    pub title: String,

    /// Short tagline shown on the homepage hero.
    pub tagline: String,

    /// Favicon path (relative to the static asset root).
    pub favicon: Option<PathBuf>,

    /// Production URL of the site (e.g., "https://quantadb.netlify.app").
    pub url: Option<String>,

    /// Pathname prefix under which the site is served.
    /// "/" for root deployments, "/<project>/" for project pages.
    pub base_url: String,

    /// GitHub organization or user name.
    pub organization: Option<String>,

    /// GitHub repository name.
    pub project: Option<String>,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            favicon: None,
            url: None,
            base_url: "/".into(),
            organization: None,
            project: None,
        }
    }
}

impl SiteMetaConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be a valid http(s) URL with a host
    /// - `base_url` must start and end with `/`
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start and end with '/'", self.base_url),
                "use \"/\" or \"/<project>/\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    fn valid_meta() -> SiteMetaConfig {
        SiteMetaConfig {
            title: "QuantaDB".into(),
            url: Some("https://quantadb.netlify.app".into()),
            ..SiteMetaConfig::default()
        }
    }

    #[test]
    fn test_valid_meta() {
        let mut diag = ConfigDiagnostics::new();
        valid_meta().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut meta = valid_meta();
        meta.title.clear();
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let mut meta = valid_meta();
        meta.url = Some("ftp://quantadb.netlify.app".into());
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_base_url_must_be_slash_delimited() {
        let mut meta = valid_meta();
        meta.base_url = "docs".into();
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert!(diag.has_errors());

        meta.base_url = "/docs/".into();
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
