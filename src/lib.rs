//! Configuration and navigation composition for the QuantaDB documentation
//! site.
//!
//! This crate assembles the three static structures the documentation
//! renderer consumes at build start, validates their internal invariants
//! once, and hands them over read-only:
//!
//! | Module     | Purpose                                             |
//! |------------|-----------------------------------------------------|
//! | `config`   | Site configuration (meta, policy, i18n, presets)    |
//! | `sidebar`  | Named navigation trees (doc refs and categories)    |
//! | `features` | Homepage feature catalog and its card renderer      |
//! | `site`     | The authored QuantaDB site definition (literals)    |
//! | `compose`  | One-shot composition, link checks, renderer payload |
//!
//! Composition is one-directional and acyclic: nothing here is mutated
//! after [`Site::compose`] returns.
//!
//! # Example
//!
//! ```ignore
//! let docs = quanta_docs::doc_id_set(["intro", "installation"]);
//! let site = quanta_docs::Site::compose(&docs)?;
//! let payload = site.renderer_payload()?;
//! ```

pub mod compose;
pub mod config;
pub mod features;
pub mod logger;
pub mod sidebar;
pub mod site;

pub use compose::{ComposeError, DocIdSet, Site, doc_id_set};
pub use config::SiteConfig;
pub use features::FeatureDescriptor;
pub use sidebar::{SidebarNode, Sidebars};
