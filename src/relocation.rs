//! Ordered prefix-substitution rules redirecting references between directories.

use tracing::debug;

use crate::url_paths::{common_path_prefix, ensure_trailing_slash, resolve_reference, to_url_path};

/// An ordered set of URL-prefix substitution rules.
///
/// Each configured directory is normalised against the project root into a URL
/// prefix; rules are then tried in registration order against resolved references,
/// and the first matching prefix wins. Rule counts are expected to be small, so a
/// linear scan over a `Vec` is all the structure this needs.
#[derive(Debug, Clone)]
pub struct RelocationRules {
    rules: Vec<(String, String)>,
}

impl RelocationRules {
    /// Build a rule set from `(directory, replacement prefix)` pairs.
    ///
    /// `root_url` must be the project root in URL form with a trailing slash.
    /// Each directory is joined against the root, normalised with a trailing
    /// slash, and reduced to its URL relative to the root so it can later be
    /// matched against resolved references.
    pub fn from_directories<'a, I>(root_url: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = entries
            .into_iter()
            .map(|(directory, replacement)| {
                let resolved = ensure_trailing_slash(&resolve_reference(
                    root_url,
                    &to_url_path(directory),
                ));
                let shared = common_path_prefix(&[root_url, &resolved]);
                let prefix = resolved[shared.len()..].trim_start_matches('/').to_string();
                (prefix, replacement.to_string())
            })
            .collect();

        Self { rules }
    }

    /// Apply the first rule whose prefix matches the resolved reference.
    ///
    /// Returns the rewritten URL and whether any rule matched. An unmatched
    /// reference comes back in its resolved form, untouched beyond the resolve
    /// step the caller already performed.
    pub fn apply(&self, resolved: &str) -> (String, bool) {
        let candidate = resolved.trim_start_matches('/');
        for (prefix, replacement) in &self.rules {
            if let Some(rest) = candidate.strip_prefix(prefix.as_str()) {
                debug!(prefix = %prefix, replacement = %replacement, "relocation rule matched");
                return (format!("{replacement}{rest}"), true);
            }
        }
        (resolved.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::RelocationRules;

    #[test]
    fn normalises_directories_into_root_relative_prefixes() {
        let rules = RelocationRules::from_directories("/proj/", [("old", "/new/")]);
        let (rewritten, matched) = rules.apply("old/x.png");
        assert!(matched);
        assert_eq!(rewritten, "/new/x.png");
    }

    #[test]
    fn accepts_directories_given_with_trailing_slashes() {
        let rules = RelocationRules::from_directories("/proj/", [("old/", "/new/")]);
        assert_eq!(rules.apply("old/x.png"), ("/new/x.png".to_string(), true));
    }

    #[test]
    fn accepts_directories_given_as_absolute_paths() {
        let rules = RelocationRules::from_directories("/proj/", [("/proj/old", "/new/")]);
        assert_eq!(rules.apply("old/x.png"), ("/new/x.png".to_string(), true));
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules =
            RelocationRules::from_directories("/proj/", [("a/b", "/x/"), ("a", "/y/")]);
        assert_eq!(rules.apply("a/b/img.png"), ("/x/img.png".to_string(), true));
        assert_eq!(rules.apply("a/other.png"), ("/y/other.png".to_string(), true));
    }

    #[test]
    fn registration_order_beats_specificity() {
        let rules =
            RelocationRules::from_directories("/proj/", [("a", "/y/"), ("a/b", "/x/")]);
        // The broader rule was registered first, so it wins even under a/b/.
        assert_eq!(rules.apply("a/b/img.png"), ("/y/b/img.png".to_string(), true));
    }

    #[test]
    fn unmatched_references_keep_their_resolved_form() {
        let rules = RelocationRules::from_directories("/proj/", [("old", "/new/")]);
        assert_eq!(rules.apply("img/x.png"), ("img/x.png".to_string(), false));
    }

    #[test]
    fn prefix_matching_is_segment_safe() {
        let rules = RelocationRules::from_directories("/proj/", [("old", "/new/")]);
        // "older/" shares characters with "old" but is a different directory.
        assert_eq!(rules.apply("older/x.png"), ("older/x.png".to_string(), false));
    }
}
