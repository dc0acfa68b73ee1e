//! `[[preset]]` configuration.
//!
//! A preset is a named bundle of options for the renderer's subsystems:
//! documentation rendering, blog rendering, and theming. Presets are an
//! ordered sequence; the renderer applies them in declaration order.
//!
//! # Example
//!
//! ```toml
//! [[preset]]
//! name = "classic"
//!
//! [preset.docs]
//! sidebar_path = "sidebars"
//! edit_url = "https://github.com/champ96k/quanta_db/tree/master/documentation/"
//!
//! [preset.blog]
//! posts_per_page = 10
//! sidebar_count = 5
//! ```

use super::policy::FaultPolicy;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Preset
// ============================================================================

/// One named preset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset")]
pub struct Preset {
    /// Preset name the renderer resolves (e.g., "classic").
    pub name: String,

    /// Documentation subsystem options.
    pub docs: DocsOptions,

    /// Blog subsystem options.
    pub blog: BlogOptions,

    /// Theming subsystem options.
    pub theme: ThemeOptions,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: "classic".into(),
            docs: DocsOptions::default(),
            blog: BlogOptions::default(),
            theme: ThemeOptions::default(),
        }
    }
}

impl Preset {
    /// Validate preset options.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(Self::FIELDS.name, "preset name must not be empty");
        }
        self.blog.validate(diag);
    }
}

// ============================================================================
// Docs options
// ============================================================================

/// Options for the documentation renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.docs")]
pub struct DocsOptions {
    /// Name of the sidebar mapping handed to the renderer.
    pub sidebar_path: String,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            sidebar_path: "sidebars".into(),
            edit_url: None,
        }
    }
}

// ============================================================================
// Blog options
// ============================================================================

/// Options for the blog renderer, including its fault policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.blog")]
pub struct BlogOptions {
    /// Show estimated reading time on posts.
    pub show_reading_time: bool,

    /// Feed generation options.
    pub feed: FeedOptions,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,

    /// Blog title.
    pub title: String,

    /// Blog description.
    pub description: String,

    /// Posts per listing page.
    pub posts_per_page: usize,

    /// Heading above the recent-posts sidebar.
    pub sidebar_title: String,

    /// Number of posts listed in the recent-posts sidebar.
    pub sidebar_count: usize,

    /// Tags declared inline in a post instead of the tags file.
    pub inline_tags: FaultPolicy,

    /// Authors declared inline in a post instead of the authors file.
    pub inline_authors: FaultPolicy,

    /// Posts without a truncation marker.
    pub untruncated_posts: FaultPolicy,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            show_reading_time: true,
            feed: FeedOptions::default(),
            edit_url: None,
            title: String::new(),
            description: String::new(),
            posts_per_page: 10,
            sidebar_title: "Recent Posts".into(),
            sidebar_count: 5,
            inline_tags: FaultPolicy::Warn,
            inline_authors: FaultPolicy::Warn,
            untruncated_posts: FaultPolicy::Ignore,
        }
    }
}

impl BlogOptions {
    /// Validate blog options.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.posts_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                "must be at least 1",
                "remove the field to use the default (10)",
            );
        }
    }
}

/// Feed generation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.blog.feed")]
pub struct FeedOptions {
    /// Feed formats to generate.
    pub formats: Vec<FeedFormat>,

    /// Attach an XSLT stylesheet so feeds render readably in browsers.
    pub xslt: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            formats: vec![FeedFormat::Rss, FeedFormat::Atom],
            xslt: true,
        }
    }
}

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    #[default]
    Rss,
    Atom,
}

// ============================================================================
// Theme options
// ============================================================================

/// Options for the theming subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "preset.theme")]
pub struct ThemeOptions {
    /// Custom stylesheet applied on top of the theme.
    pub custom_css: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_classic_defaults() {
        let preset = Preset::default();
        assert_eq!(preset.name, "classic");
        assert_eq!(preset.blog.posts_per_page, 10);
        assert_eq!(preset.blog.sidebar_count, 5);
        assert_eq!(
            preset.blog.feed.formats,
            vec![FeedFormat::Rss, FeedFormat::Atom]
        );
        assert!(preset.blog.feed.xslt);
    }

    #[test]
    fn test_zero_posts_per_page_rejected() {
        let mut preset = Preset::default();
        preset.blog.posts_per_page = 0;
        let mut diag = ConfigDiagnostics::new();
        preset.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_parse_from_toml() {
        let preset: Preset = toml::from_str(
            r#"name = "classic"

[docs]
sidebar_path = "sidebars"
edit_url = "https://github.com/champ96k/quanta_db/tree/master/documentation/"

[blog]
title = "QuantaDB Blog"
posts_per_page = 10
untruncated_posts = "ignore"

[blog.feed]
formats = ["rss", "atom"]
xslt = true

[theme]
custom_css = "src/css/custom.css"
"#,
        )
        .unwrap();
        assert_eq!(preset.docs.sidebar_path, "sidebars");
        assert_eq!(preset.blog.title, "QuantaDB Blog");
        assert_eq!(preset.blog.untruncated_posts, FaultPolicy::Ignore);
        assert_eq!(
            preset.theme.custom_css,
            Some(PathBuf::from("src/css/custom.css"))
        );
    }
}
