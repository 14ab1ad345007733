//! Configuration loader describing how URLs should be rewritten.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::engine::RewriterSettings;
use crate::versioned::VersionedAssets;

const DEFAULT_CONFIG_FILE: &str = "cssrewrite.config.json";

/// Discoverable configuration describing the project root and rewrite mode.
///
/// Rule order in the `relocate` list is significant and is preserved all the way
/// into the rewriter. The `external` field names a versioned-asset resolver that
/// the host environment supplies; this crate never instantiates resolvers itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Project root directory all relative computations are anchored to.
    pub root: String,
    /// Base publish URL for versioned assets, absolute or a bare path.
    pub publish_url: Option<String>,
    /// Ordered relocation rules redirecting directories to replacement prefixes.
    pub relocate: Vec<RelocationRuleConfig>,
    /// Lookup key naming the host-registered versioned-asset resolver.
    pub external: Option<String>,
}

/// One configured relocation rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RelocationRuleConfig {
    /// Directory whose references should be redirected.
    pub from: String,
    /// Replacement URL prefix.
    pub to: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: ".".into(),
            publish_url: None,
            relocate: Vec::new(),
            external: None,
        }
    }
}

impl RewriteConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to
    /// default values so downstream callers can continue operating with sensible
    /// assumptions.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into rewriter settings.
    ///
    /// The caller looks up the resolver named by [`external`](Self::external) in its
    /// own registry and passes it in; `None` leaves external mode unconfigured.
    pub fn into_settings(
        self,
        resolver: Option<Box<dyn VersionedAssets + Send + Sync>>,
    ) -> RewriterSettings {
        RewriterSettings {
            root: self.root,
            publish_url: self.publish_url,
            relocations: self
                .relocate
                .into_iter()
                .map(|rule| (rule.from, rule.to))
                .collect(),
            resolver,
        }
    }
}
