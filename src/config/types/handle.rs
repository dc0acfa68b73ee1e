//! Global config with atomic replacement.
//!
//! Uses `arc-swap` for lock-free reads. The renderer expects exactly one
//! configuration per build; `init_config` installs it once and every
//! consumer reads the same `Arc`. A rebuild (watch cycle) reconstructs
//! from the same literals and swaps the whole pointer, so readers never
//! observe a partially updated configuration.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the configuration for this build and return the shared handle.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
