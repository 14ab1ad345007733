//! Classification of URL references extracted from CSS.

use regex::Regex;

fn passthrough_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a reference should pass through the rewriter untouched.
///
/// External URLs, data URIs and bare fragments are not path references into the
/// project tree; rewriting them could only corrupt them. Classification is
/// deliberately conservative: anything that is not clearly a path is left alone.
pub fn is_passthrough_reference(value: &str) -> bool {
    value.is_empty()
        || passthrough_patterns()
            .iter()
            .any(|pattern| pattern.is_match(value))
}

/// The rewrite pipeline's absolute-URL test.
///
/// A reference counts as absolute only when it is rooted *and* scheme-qualified.
/// Bare root-relative paths such as `/images/x.png` are not absolute under this
/// rule and are still rewritten. Downstream behaviour depends on this exact
/// definition; do not widen it.
pub fn is_rooted_scheme_url(url: &str) -> bool {
    url.starts_with('/') && (url.starts_with("http://") || url.starts_with("https://"))
}

/// Returns `true` when a publish URL is itself absolute: scheme-qualified or
/// protocol-relative. Absolute publish URLs anchor versioned assets directly
/// instead of going through output-relative path computation.
pub fn is_absolute_base_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}
