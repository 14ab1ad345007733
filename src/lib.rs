#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod engine;
pub mod relocation;
pub mod url_paths;
pub mod versioned;

pub use config::{RelocationRuleConfig, RewriteConfig};
pub use engine::{FileLocation, FileRewriter, RewriterConfigError, RewriterSettings, UrlRewriter};
pub use relocation::RelocationRules;
pub use versioned::VersionedAssets;
