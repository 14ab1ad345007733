use std::path::Path;

use super::normalize::{normalize_segments, to_url_path};

/// Resolve a reference against a base URL, mirroring how a browser would resolve a
/// relative CSS reference against the stylesheet that contains it.
///
/// Scheme-qualified and protocol-relative references replace the base entirely.
/// Rooted references replace the base path while keeping any scheme and authority the
/// base carries. Everything else is joined against the base's directory and then
/// normalised.
pub fn resolve_reference(base: &str, reference: &str) -> String {
    if reference.is_empty() {
        return base.to_string();
    }
    if has_scheme(reference) || reference.starts_with("//") {
        return reference.to_string();
    }

    let (anchor, base_path) = split_authority(base);

    if reference.starts_with('/') {
        return format!("{anchor}{}", normalize_segments(reference));
    }

    let directory = match base_path.rfind('/') {
        Some(index) => &base_path[..=index],
        None => "",
    };
    let joined = if anchor.is_empty() || directory.starts_with('/') {
        format!("{directory}{reference}")
    } else {
        // A bare authority has an implicit root path.
        format!("/{directory}{reference}")
    };
    format!("{anchor}{}", normalize_segments(&joined))
}

/// Join a reference against the directory of the source file that contains it,
/// producing a forward-slash path suitable for a versioned-asset lookup.
pub fn join_source_path(source_path: &Path, reference: &str) -> String {
    let base = to_url_path(&source_path.to_string_lossy());
    resolve_reference(&base, reference)
}

/// Returns `true` when the value starts with a URL scheme such as `http:` or `data:`.
pub(crate) fn has_scheme(value: &str) -> bool {
    let Some(colon) = value.find(':') else {
        return false;
    };
    let candidate = &value[..colon];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split a URL into its scheme-and-authority anchor and the path that follows it.
///
/// Path-only URLs return an empty anchor and the input unchanged.
fn split_authority(url: &str) -> (&str, &str) {
    let authority_start = if url.starts_with("//") {
        2
    } else if has_scheme(url) {
        match url.find("://") {
            Some(index) => index + 3,
            None => return ("", url),
        }
    } else {
        return ("", url);
    };

    match url[authority_start..].find('/') {
        Some(index) => url.split_at(authority_start + index),
        None => (url, ""),
    }
}
