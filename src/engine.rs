//! The URL rewrite engine: per-build configuration and per-file rewriting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::classify::{is_absolute_base_url, is_passthrough_reference, is_rooted_scheme_url};
use crate::relocation::RelocationRules;
use crate::url_paths::{
    ensure_trailing_slash, join_source_path, relative_from_output, relative_url,
    resolve_reference, to_url_path,
};
use crate::versioned::VersionedAssets;

/// The location identity of a file: its filesystem path and its URL relative to
/// the project root.
#[derive(Debug, Clone)]
pub struct FileLocation {
    /// Filesystem path of the file.
    pub path: PathBuf,
    /// URL of the file, relative to the project root.
    pub url: String,
}

impl FileLocation {
    /// Create a location from a path and its project-relative URL.
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Per-build settings for constructing a [`UrlRewriter`].
///
/// At most one of `relocations` and `resolver` may be supplied; configuring both
/// is rejected at construction time.
pub struct RewriterSettings {
    /// Project root directory all relative computations are anchored to.
    pub root: String,
    /// Base publish URL for versioned assets, absolute or a bare path.
    pub publish_url: Option<String>,
    /// Ordered `(directory, replacement prefix)` relocation rules.
    pub relocations: Vec<(String, String)>,
    /// Versioned-asset lookup capability supplied by the host.
    pub resolver: Option<Box<dyn VersionedAssets + Send + Sync>>,
}

impl RewriterSettings {
    /// Settings for default-mode rewriting anchored at the given project root.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            publish_url: None,
            relocations: Vec::new(),
            resolver: None,
        }
    }
}

/// Errors detected while validating rewriter settings.
#[derive(Debug)]
pub enum RewriterConfigError {
    /// Both relocation rules and a versioned-asset resolver were supplied.
    ConflictingModes,
    /// The project root was empty.
    MissingRoot,
}

impl std::fmt::Display for RewriterConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingModes => write!(
                f,
                "relocation rules and a versioned-asset resolver cannot be combined"
            ),
            Self::MissingRoot => write!(f, "a project root directory is required"),
        }
    }
}

impl std::error::Error for RewriterConfigError {}

enum RewriteMode {
    Default,
    Relocate(RelocationRules),
    Versioned {
        resolver: Box<dyn VersionedAssets + Send + Sync>,
        publish_url: Option<String>,
    },
}

/// Per-build URL rewriter.
///
/// Holds the normalised project root and the configured rewrite mode, both
/// immutable for the lifetime of the build. Individual files are bound through
/// [`for_file`](Self::for_file), which yields a short-lived [`FileRewriter`]
/// carrying that file's source and output locations; independent files can be
/// processed concurrently against the same `UrlRewriter`.
pub struct UrlRewriter {
    root: String,
    mode: RewriteMode,
}

impl UrlRewriter {
    /// Validate settings and construct a rewriter.
    ///
    /// The project root is normalised to URL form with a trailing slash so that
    /// every later prefix computation is directory-boundary aligned.
    pub fn new(settings: RewriterSettings) -> Result<Self, RewriterConfigError> {
        if settings.root.is_empty() {
            return Err(RewriterConfigError::MissingRoot);
        }
        if !settings.relocations.is_empty() && settings.resolver.is_some() {
            return Err(RewriterConfigError::ConflictingModes);
        }

        let root = ensure_trailing_slash(&to_url_path(&settings.root));

        let mode = if !settings.relocations.is_empty() {
            let entries = settings
                .relocations
                .iter()
                .map(|(directory, replacement)| (directory.as_str(), replacement.as_str()));
            RewriteMode::Relocate(RelocationRules::from_directories(&root, entries))
        } else if let Some(resolver) = settings.resolver {
            RewriteMode::Versioned {
                resolver,
                publish_url: settings.publish_url,
            }
        } else {
            RewriteMode::Default
        };

        Ok(Self { root, mode })
    }

    /// Bind a source file and its eventual output location, yielding a rewriter
    /// for that file's references.
    pub fn for_file(&self, source: FileLocation, output: FileLocation) -> FileRewriter<'_> {
        FileRewriter {
            rewriter: self,
            source,
            output,
        }
    }
}

/// Rewriter bound to one source file and its output location.
///
/// Stateless across calls beyond the two immutable locations; every
/// [`rewrite`](Self::rewrite) invocation is a pure function of its input.
pub struct FileRewriter<'a> {
    rewriter: &'a UrlRewriter,
    source: FileLocation,
    output: FileLocation,
}

impl FileRewriter<'_> {
    /// Rewrite one URL reference extracted from the bound source file.
    ///
    /// External URLs, data URIs and bare fragments pass through unchanged. The
    /// only fallible path is the versioned-asset lookup; its errors are
    /// propagated tagged with the source file and reference.
    pub fn rewrite(&self, url: &str) -> Result<String> {
        if is_passthrough_reference(url) {
            trace!(url, "passing reference through unchanged");
            return Ok(url.to_string());
        }

        match &self.rewriter.mode {
            RewriteMode::Relocate(rules) => {
                let resolved = resolve_reference(&self.source.url, url);
                let (rewritten, matched) = rules.apply(&resolved);
                trace!(url, rewritten = %rewritten, matched, "relocation rewrite");
                Ok(rewritten)
            }
            RewriteMode::Versioned {
                resolver,
                publish_url,
            } => self.rewrite_versioned(url, resolver.as_ref(), publish_url.as_deref()),
            RewriteMode::Default => {
                if is_rooted_scheme_url(url) {
                    return Ok(url.to_string());
                }
                let resolved = resolve_reference(&self.source.url, url);
                let rewritten = relative_url(&self.output.url, &resolved);
                trace!(url, rewritten = %rewritten, "default rewrite");
                Ok(rewritten)
            }
        }
    }

    fn rewrite_versioned(
        &self,
        url: &str,
        resolver: &(dyn VersionedAssets + Send + Sync),
        publish_url: Option<&str>,
    ) -> Result<String> {
        if is_rooted_scheme_url(url) {
            return Ok(url.to_string());
        }

        let file_path = join_source_path(&self.source.path, url);
        let versioned = resolver.versioned_path(&file_path).with_context(|| {
            format!(
                "failed to resolve versioned asset for '{url}' referenced by {}",
                self.source.path.display()
            )
        })?;
        debug!(url, file_path = %file_path, versioned = %versioned, "versioned asset resolved");

        let replacement = match publish_url {
            Some(base) if is_absolute_base_url(base) => {
                // Plain URL-join semantics: a publish URL without a trailing
                // slash loses its final segment, exactly as a browser would
                // resolve a relative reference against it.
                Some(resolve_reference(base, &versioned))
            }
            Some(base) => {
                let anchored = resolve_reference(&ensure_trailing_slash(base), &versioned);
                relative_from_output(&self.rewriter.root, &self.output.path, &anchored)
            }
            None => relative_from_output(&self.rewriter.root, &self.output.path, &versioned),
        };

        Ok(match replacement {
            Some(rewritten) => rewritten,
            None => {
                // Output location cannot be related to the versioned path;
                // degrade to the default-mode rewrite of the original reference.
                let resolved = resolve_reference(&self.source.url, url);
                relative_url(&self.output.url, &resolved)
            }
        })
    }
}
