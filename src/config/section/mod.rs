//! Configuration section definitions.
//!
//! Each module corresponds to a section of the site configuration:
//!
//! | Module    | Section     | Purpose                                 |
//! |-----------|-------------|-----------------------------------------|
//! | `meta`    | `[meta]`    | Site identity (title, tagline, urls)    |
//! | `i18n`    | `[i18n]`    | Locales and default locale              |
//! | `policy`  | `[policy]`  | Fault handling knobs (throw/warn/ignore)|
//! | `preset`  | `[[preset]]`| Named renderer subsystem option bundles |
//! | `theme`   | `[theme]`   | Navbar, footer, syntax highlighting     |

mod i18n;
mod meta;
mod policy;
mod preset;
mod theme;

pub use i18n::I18nConfig;
pub use meta::SiteMetaConfig;
pub use policy::{FaultError, FaultPolicy, PolicyConfig};
pub use preset::{BlogOptions, DocsOptions, FeedFormat, FeedOptions, Preset, ThemeOptions};
pub use theme::{
    FooterConfig, FooterLink, FooterLinkGroup, FooterStyle, LinkTarget, Logo, NavPosition,
    NavbarConfig, NavbarItem, PrismConfig, ThemeConfig,
};
