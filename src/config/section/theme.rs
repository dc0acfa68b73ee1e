//! `[theme]` configuration.
//!
//! Navbar items, footer link groups, and syntax-highlighting theme
//! selection. Item order is significant everywhere: the renderer lays
//! out navbar and footer entries exactly as declared.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "QuantaDB"
//! logo = { alt = "QuantaDB Logo", src = "img/logo_small.png" }
//! items = [
//!     { sidebar = "tutorialSidebar", label = "Documentation", position = "left" },
//!     { to = "/blog", label = "Blog", position = "left" },
//!     { href = "https://github.com/champ96k/quanta_db", label = "GitHub", position = "right" },
//! ]
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Theme root
// ============================================================================

/// Theme configuration handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Social card image used for link previews.
    pub social_card: Option<PathBuf>,

    /// Top navigation bar.
    pub navbar: NavbarConfig,

    /// Footer link groups and copyright.
    pub footer: FooterConfig,

    /// Syntax highlighting themes.
    pub prism: PrismConfig,
}

// ============================================================================
// Navbar
// ============================================================================

/// Top navigation bar configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.navbar")]
pub struct NavbarConfig {
    /// Navbar brand title.
    pub title: String,

    /// Brand logo.
    pub logo: Option<Logo>,

    /// Ordered navbar entries.
    pub items: Vec<NavbarItem>,
}

/// Navbar brand logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    /// Alternative text for accessibility.
    pub alt: String,
    /// Image path (relative to the static asset root).
    pub src: PathBuf,
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarItem {
    /// Display label.
    pub label: String,

    /// Which side of the navbar the item is laid out on.
    #[serde(default)]
    pub position: NavPosition,

    /// What the item links to.
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// Navbar layout side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

// ============================================================================
// Link targets
// ============================================================================

/// What a navbar or footer entry links to.
///
/// Serialized untagged; the key disambiguates:
/// `sidebar` opens a named sidebar, `to` is an internal route,
/// `href` is an external URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// Open a named sidebar (the docs entry point).
    Sidebar { sidebar: String },
    /// Internal route (e.g., "/blog").
    Route { to: String },
    /// External URL.
    External { href: String },
}

impl LinkTarget {
    /// Internal route, if this target is one.
    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Route { to } => Some(to),
            _ => None,
        }
    }

    /// Named sidebar, if this target opens one.
    pub fn sidebar(&self) -> Option<&str> {
        match self {
            Self::Sidebar { sidebar } => Some(sidebar),
            _ => None,
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Footer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer color style.
    pub style: FooterStyle,

    /// Ordered link groups (columns).
    pub links: Vec<FooterLinkGroup>,

    /// Copyright line (may contain inline HTML).
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: FooterStyle::Dark,
            links: Vec::new(),
            copyright: String::new(),
        }
    }
}

/// Footer color style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    #[default]
    Dark,
}

/// One footer column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinkGroup {
    /// Column heading (optional).
    pub title: Option<String>,

    /// Ordered links in this column.
    pub items: Vec<FooterLink>,
}

/// One footer link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label.
    pub label: String,

    /// What the link points to.
    #[serde(flatten)]
    pub target: LinkTarget,
}

// ============================================================================
// Prism
// ============================================================================

/// Syntax highlighting theme selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.prism")]
pub struct PrismConfig {
    /// Light mode theme.
    pub theme: String,

    /// Dark mode theme.
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
        }
    }
}

impl ThemeConfig {
    /// Iterate every link target declared in navbar and footer, in
    /// declaration order.
    pub fn link_targets(&self) -> impl Iterator<Item = &LinkTarget> {
        self.navbar
            .items
            .iter()
            .map(|item| &item.target)
            .chain(
                self.footer
                    .links
                    .iter()
                    .flat_map(|group| group.items.iter().map(|link| &link.target)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_items_parse_untagged() {
        let navbar: NavbarConfig = toml::from_str(
            r#"title = "QuantaDB"
logo = { alt = "QuantaDB Logo", src = "img/logo_small.png" }
items = [
    { sidebar = "tutorialSidebar", label = "Documentation", position = "left" },
    { to = "/blog", label = "Blog", position = "left" },
    { href = "https://github.com/champ96k/quanta_db", label = "GitHub", position = "right" },
]"#,
        )
        .unwrap();

        assert_eq!(navbar.items.len(), 3);
        assert_eq!(navbar.items[0].target.sidebar(), Some("tutorialSidebar"));
        assert_eq!(navbar.items[1].target.route(), Some("/blog"));
        assert_eq!(navbar.items[1].position, NavPosition::Left);
        assert_eq!(navbar.items[2].position, NavPosition::Right);
        assert!(matches!(
            navbar.items[2].target,
            LinkTarget::External { .. }
        ));
    }

    #[test]
    fn test_prism_defaults() {
        let prism = PrismConfig::default();
        assert_eq!(prism.theme, "github");
        assert_eq!(prism.dark_theme, "dracula");
    }

    #[test]
    fn test_link_targets_order() {
        let theme: ThemeConfig = toml::from_str(
            r#"[navbar]
items = [{ to = "/blog", label = "Blog" }]

[footer]
links = [{ items = [
    { label = "GitHub", href = "https://github.com/champ96k/quanta_db" },
    { label = "Blog", to = "/blog" },
] }]"#,
        )
        .unwrap();

        let targets: Vec<_> = theme.link_targets().collect();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].route(), Some("/blog"));
        assert_eq!(targets[2].route(), Some("/blog"));
    }

    #[test]
    fn test_footer_defaults_dark() {
        let footer = FooterConfig::default();
        assert_eq!(footer.style, FooterStyle::Dark);
        assert!(footer.links.is_empty());
    }
}
