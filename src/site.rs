//! The authored QuantaDB site definition.
//!
//! Every value here is a hand-written literal: this file is the single
//! place editors touch to change site identity, navigation entries, or
//! renderer options. [`config`] is a pure factory; calling it twice
//! yields structurally identical configurations.

use crate::config::{
    BlogOptions, DocsOptions, FooterConfig, FooterLink, FooterLinkGroup, FooterStyle, LinkTarget,
    Logo, NavPosition, NavbarConfig, NavbarItem, Preset, PrismConfig, SiteConfig, SiteMetaConfig,
    ThemeConfig, ThemeOptions,
};
use crate::sidebar::TUTORIAL_SIDEBAR;

const REPO_URL: &str = "https://github.com/champ96k/quanta_db";
const EDIT_URL: &str = "https://github.com/champ96k/quanta_db/tree/master/documentation/";

/// Build the QuantaDB site configuration.
pub fn config() -> SiteConfig {
    SiteConfig {
        meta: SiteMetaConfig {
            title: "QuantaDB".into(),
            tagline: "A powerful and efficient database solution".into(),
            favicon: Some("img/logo_small.png".into()),
            url: Some("https://quantadb.netlify.app".into()),
            base_url: "/".into(),
            organization: Some("tusharnikam".into()),
            project: Some("quanta_db".into()),
        },
        // broken_links = throw, broken_markdown_links = warn
        policy: Default::default(),
        i18n: Default::default(),
        presets: vec![classic_preset()],
        theme: theme(),
    }
}

fn classic_preset() -> Preset {
    Preset {
        name: "classic".into(),
        docs: DocsOptions {
            sidebar_path: "sidebars".into(),
            edit_url: Some(EDIT_URL.into()),
        },
        blog: BlogOptions {
            edit_url: Some(EDIT_URL.into()),
            title: "QuantaDB Blog".into(),
            description: "Updates and announcements from the QuantaDB team".into(),
            ..BlogOptions::default()
        },
        theme: ThemeOptions {
            custom_css: Some("src/css/custom.css".into()),
        },
    }
}

fn theme() -> ThemeConfig {
    ThemeConfig {
        social_card: Some("img/quantadb-social-card.jpg".into()),
        navbar: NavbarConfig {
            title: "QuantaDB".into(),
            logo: Some(Logo {
                alt: "QuantaDB Logo".into(),
                src: "img/logo_small.png".into(),
            }),
            items: vec![
                NavbarItem {
                    label: "Documentation".into(),
                    position: NavPosition::Left,
                    target: LinkTarget::Sidebar {
                        sidebar: TUTORIAL_SIDEBAR.into(),
                    },
                },
                NavbarItem {
                    label: "Blog".into(),
                    position: NavPosition::Left,
                    target: LinkTarget::Route { to: "/blog".into() },
                },
                NavbarItem {
                    label: "GitHub".into(),
                    position: NavPosition::Right,
                    target: LinkTarget::External {
                        href: REPO_URL.into(),
                    },
                },
            ],
        },
        footer: FooterConfig {
            style: FooterStyle::Dark,
            links: vec![FooterLinkGroup {
                title: None,
                items: vec![
                    footer_href("GitHub", REPO_URL),
                    footer_href("Issues", "https://github.com/champ96k/quanta_db/issues"),
                    footer_href(
                        "FAQ",
                        "https://github.com/champ96k/quanta_db/wiki/QuantaDB-Frequently-Asked-Questions",
                    ),
                    FooterLink {
                        label: "Blog".into(),
                        target: LinkTarget::Route { to: "/blog".into() },
                    },
                    footer_href(
                        "Roadmap",
                        "https://github.com/champ96k/quanta_db/blob/master/roadmap.md",
                    ),
                ],
            }],
            copyright: "Copyright © 2026 QuantaDB. Made with ❤️ by Tushar Nikam".into(),
        },
        prism: PrismConfig {
            theme: "github".into(),
            dark_theme: "dracula".into(),
        },
    }
}

fn footer_href(label: &str, href: &str) -> FooterLink {
    FooterLink {
        label: label.into(),
        target: LinkTarget::External { href: href.into() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FaultPolicy;

    #[test]
    fn test_authored_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_identity_values() {
        let config = config();
        assert_eq!(config.meta.title, "QuantaDB");
        assert_eq!(config.meta.base_url, "/");
        assert_eq!(config.meta.organization.as_deref(), Some("tusharnikam"));
        assert_eq!(config.policy.broken_links, FaultPolicy::Throw);
        assert_eq!(config.policy.broken_markdown_links, FaultPolicy::Warn);
    }

    #[test]
    fn test_navbar_references_tutorial_sidebar() {
        let config = config();
        let sidebar_targets: Vec<_> = config
            .theme
            .link_targets()
            .filter_map(|t| t.sidebar())
            .collect();
        assert_eq!(sidebar_targets, vec![TUTORIAL_SIDEBAR]);
    }

    #[test]
    fn test_factory_is_pure() {
        assert_eq!(config(), config());
    }

    #[test]
    fn test_classic_preset_blog_options() {
        let config = config();
        assert_eq!(config.presets.len(), 1);
        let blog = &config.presets[0].blog;
        assert_eq!(blog.title, "QuantaDB Blog");
        assert_eq!(blog.posts_per_page, 10);
        assert_eq!(blog.sidebar_title, "Recent Posts");
        assert_eq!(blog.sidebar_count, 5);
        assert_eq!(blog.inline_tags, FaultPolicy::Warn);
        assert_eq!(blog.inline_authors, FaultPolicy::Warn);
        assert_eq!(blog.untruncated_posts, FaultPolicy::Ignore);
    }
}
