//! Pure path and URL algebra used by the rewrite engine.
//!
//! This module intentionally splits the responsibilities into focused submodules so that
//! normalisation, prefix computation, reference joining and relative-path computation can
//! be tested independently. None of the functions here perform I/O; everything operates
//! on forward-slash URL fragments or borrowed filesystem paths.

mod join;
mod normalize;
mod prefix;
mod relative;

pub use join::{join_source_path, resolve_reference};
pub use normalize::{ensure_trailing_slash, to_url_path};
pub use prefix::common_path_prefix;
pub use relative::{relative_from_output, relative_url};
