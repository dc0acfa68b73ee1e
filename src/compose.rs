//! One-shot site composition.
//!
//! The renderer reads the composed site exactly once at build start.
//! [`Site::compose`] constructs everything eagerly and synchronously:
//! the configuration is validated, every sidebar document reference is
//! resolved against the known document ids, navbar and footer link
//! targets are checked, and the configuration is installed in the
//! global handle. Nothing is mutated afterward; a rebuild reconstructs
//! from the same literals and is idempotent.
//!
//! Fault severity differs by class:
//! - a sidebar referencing an unknown document is always fatal,
//! - an internal link target to an unknown route follows the
//!   `policy.broken_links` knob (throw/warn/ignore).

use crate::config::{self, ConfigError, FaultError, LinkTarget, SiteConfig};
use crate::features::{self, FeatureDescriptor};
use crate::sidebar::{self, MissingDocs, Sidebars};
use crate::site;
use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

/// The document identifier space owned by the content subsystem.
pub type DocIdSet = FxHashSet<String>;

/// Build a [`DocIdSet`] from anything yielding id strings.
pub fn doc_id_set<I, S>(ids: I) -> DocIdSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Into::into).collect()
}

// ============================================================================
// ComposeError
// ============================================================================

/// Composition failures. All of these abort the build.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MissingDocs(#[from] MissingDocs),

    /// A navbar item opens a sidebar that was never declared.
    #[error("navbar references unknown sidebar '{0}'")]
    UnknownSidebar(String),

    /// A broken internal link escalated by the `throw` policy.
    #[error("broken link: {0}")]
    BrokenLink(#[from] FaultError),
}

// ============================================================================
// Site
// ============================================================================

/// Everything the renderer consumes, composed once and read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// The validated configuration (also installed in the global handle).
    pub config: SiteConfig,
    /// The named sidebar mapping.
    pub sidebars: Sidebars,
    /// The homepage feature catalog, in presentation order.
    pub features: &'static [FeatureDescriptor],
}

impl Site {
    /// Compose the authored QuantaDB site against the known document ids.
    pub fn compose(docs: &DocIdSet) -> Result<Self, ComposeError> {
        Self::compose_with(site::config(), sidebar::sidebars(), docs)
    }

    /// Compose from explicit parts (the seam tests use to exercise
    /// policies without touching the authored literals).
    pub fn compose_with(
        config: SiteConfig,
        sidebars: Sidebars,
        docs: &DocIdSet,
    ) -> Result<Self, ComposeError> {
        config.validate()?;
        sidebars.resolve(docs)?;
        check_link_targets(&config, &sidebars, docs)?;

        config::init_config(config.clone());

        Ok(Self {
            config,
            sidebars,
            features: features::FEATURES,
        })
    }

    /// Serialize the handoff payload for the renderer.
    ///
    /// Key order follows declaration order throughout (navbar items,
    /// footer groups, sidebar trees, features), so identical inputs
    /// produce byte-identical payloads.
    pub fn renderer_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// link checking
// ============================================================================

/// Check navbar and footer link targets.
///
/// Sidebar targets must name a declared sidebar (fatal: the docs entry
/// point cannot dangle). Internal routes are checked against the routes
/// this layer knows about ("/", "/blog", and "/docs/<id>"); a miss goes
/// through the `broken_links` policy. External URLs are not probed.
fn check_link_targets(
    config: &SiteConfig,
    sidebars: &Sidebars,
    docs: &DocIdSet,
) -> Result<(), ComposeError> {
    for target in config.theme.link_targets() {
        match target {
            LinkTarget::Sidebar { sidebar } => {
                if !sidebars.contains(sidebar) {
                    return Err(ComposeError::UnknownSidebar(sidebar.clone()));
                }
            }
            LinkTarget::Route { to } => {
                if !route_exists(to, docs) {
                    config
                        .policy
                        .broken_links
                        .handle(format!("no route for '{to}'"))?;
                }
            }
            LinkTarget::External { .. } => {}
        }
    }
    Ok(())
}

fn route_exists(to: &str, docs: &DocIdSet) -> bool {
    match to {
        "/" | "/blog" => true,
        _ => to
            .strip_prefix("/docs/")
            .is_some_and(|id| docs.contains(id)),
    }
}

// ============================================================================
// tests
// ============================================================================
