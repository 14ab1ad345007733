/// Convert a filesystem path to a forward-slash URL fragment.
///
/// The generated fragment always uses forward slashes so that rewritten CSS works on
/// every platform, regardless of the native directory separator that was used when the
/// files were discovered on disk.
pub fn to_url_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Ensure a directory path carries exactly one trailing slash.
///
/// The project root and every relocation directory are normalised this way so that
/// prefix comparisons stay aligned to directory boundaries.
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Resolve `.` and `..` segments in a slash-separated path.
///
/// Leading `..` segments that cannot be resolved against a relative path are kept, so
/// a reference that ascends past its base survives the join textually instead of being
/// silently clamped.
pub(crate) fn normalize_segments(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut out: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(out.last(), Some(&"..")) || (out.is_empty() && !rooted) {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }

    let joined = out.join("/");
    if rooted { format!("/{joined}") } else { joined }
}

#[cfg(test)]
mod tests {
    use super::{ensure_trailing_slash, normalize_segments, to_url_path};

    #[test]
    fn converts_backslashes_to_forward_slashes() {
        assert_eq!(to_url_path("css\\sub\\a.css"), "css/sub/a.css");
        assert_eq!(to_url_path("/proj/css/a.css"), "/proj/css/a.css");
    }

    #[test]
    fn appends_a_single_trailing_slash() {
        assert_eq!(ensure_trailing_slash("/proj"), "/proj/");
        assert_eq!(ensure_trailing_slash("/proj/"), "/proj/");
    }

    #[test]
    fn resolves_dot_and_dot_dot_segments() {
        assert_eq!(normalize_segments("css/sub/../img/x.png"), "css/img/x.png");
        assert_eq!(normalize_segments("./css/./a.css"), "css/a.css");
        assert_eq!(normalize_segments("/proj/old/../img"), "/proj/img");
    }

    #[test]
    fn keeps_unresolvable_ascents_on_relative_paths() {
        assert_eq!(normalize_segments("../x.png"), "../x.png");
        assert_eq!(normalize_segments("../../a/b"), "../../a/b");
    }

    #[test]
    fn clamps_ascents_at_the_root() {
        assert_eq!(normalize_segments("/../x.png"), "/x.png");
    }
}
