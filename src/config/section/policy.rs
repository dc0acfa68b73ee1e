//! `[policy]` configuration.
//!
//! Fault-handling knobs. Each knob selects one of three strategies for a
//! class of content-integrity faults the renderer detects during a build:
//! `throw` aborts, `warn` logs and continues, `ignore` suppresses.
//!
//! Detection itself lives in the renderer; this layer only declares the
//! desired response and applies it when asked via [`FaultPolicy::handle`].
//!
//! # Example
//!
//! ```toml
//! [policy]
//! broken_links = "throw"
//! broken_markdown_links = "warn"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// FaultPolicy
// ============================================================================

/// Handling strategy for a class of content-integrity faults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Abort the build (fatal, non-recoverable).
    #[default]
    Throw,
    /// Log and continue (degraded output possible).
    Warn,
    /// Suppress entirely.
    Ignore,
}

/// A fault escalated to a build abort by [`FaultPolicy::Throw`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FaultError(pub String);

impl FaultPolicy {
    /// Apply this policy to a detected fault.
    ///
    /// `Throw` returns the fault as an error, `Warn` logs it and
    /// continues, `Ignore` returns silently.
    pub fn handle(self, fault: impl std::fmt::Display) -> Result<(), FaultError> {
        match self {
            Self::Throw => Err(FaultError(fault.to_string())),
            Self::Warn => {
                crate::log!("warning"; "{fault}");
                Ok(())
            }
            Self::Ignore => Ok(()),
        }
    }
}

// ============================================================================
// PolicyConfig
// ============================================================================

/// Site-level fault policies. Blog-specific knobs (inline tags, inline
/// authors, untruncated posts) live on [`crate::config::BlogOptions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "policy")]
pub struct PolicyConfig {
    /// Internal links resolving to no known route.
    pub broken_links: FaultPolicy,

    /// Markdown links resolving to no known document.
    pub broken_markdown_links: FaultPolicy,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            broken_links: FaultPolicy::Throw,
            broken_markdown_links: FaultPolicy::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_aborts() {
        let err = FaultPolicy::Throw.handle("broken link to /docs/nope");
        assert_eq!(
            err,
            Err(FaultError("broken link to /docs/nope".to_string()))
        );
    }

    #[test]
    fn test_warn_and_ignore_continue() {
        assert!(FaultPolicy::Warn.handle("broken link").is_ok());
        assert!(FaultPolicy::Ignore.handle("broken link").is_ok());
    }

    #[test]
    fn test_policy_parses_lowercase() {
        let config: PolicyConfig = toml::from_str(
            "broken_links = \"ignore\"\nbroken_markdown_links = \"throw\"",
        )
        .unwrap();
        assert_eq!(config.broken_links, FaultPolicy::Ignore);
        assert_eq!(config.broken_markdown_links, FaultPolicy::Throw);
    }

    #[test]
    fn test_defaults() {
        let config = PolicyConfig::default();
        assert_eq!(config.broken_links, FaultPolicy::Throw);
        assert_eq!(config.broken_markdown_links, FaultPolicy::Warn);
    }
}
